//! Design-by-contract parameter obligations.
//!
//! An obligation binds one parameter position to one domain filter and
//! evaluates candidate argument values against it; a failed evaluation
//! produces a structured, serializable violation instead of an ad-hoc
//! error:
//! - [`position`] — parameter positions, bitmasks, and the position registry
//! - [`kinds`] — the tagged catalog of obligation kinds
//! - [`obligation`] — the [`Obligation`] type and its total evaluation algorithm
//! - [`violation`] — [`Violation`], [`Evidence`], and contract identity
//! - [`catalog`] — one constructor per obligation kind
//! - [`joint`] — obligations spanning several parameters at once

pub mod catalog;
pub mod joint;
pub mod kinds;
pub mod obligation;
pub mod position;
pub mod violation;

pub use obligation::Obligation;
pub use position::Position;
pub use violation::{Evidence, Violation};
