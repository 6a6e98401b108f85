//! Composable domain filters for the warrant contract framework.
//!
//! A filter decides whether a candidate value belongs to the admissible
//! set ("domain") of one obligation. Filters are pure functions of the
//! candidate plus their immutable configuration:
//! - [`state`] — the [`FilterState`](state::FilterState) verdict (kept / discarded)
//! - [`filter`] — the [`Filter`](filter::Filter) trait and the vacuous `NotNull` domain
//! - [`composite`] — negation and conjunction combinators
//! - [`number`], [`equality`], [`comparability`] — ordering, equality, and bounds
//! - [`string`] — character-class, identifier, length, and regex predicates
//! - [`container`], [`elements`] — length measurement and element/index membership
//! - [`class`] — runtime-type membership over [`Dynamic`](class::Dynamic) values
//! - [`time`] — before/after change detection

pub mod class;
pub mod comparability;
pub mod composite;
pub mod container;
pub mod elements;
pub mod equality;
pub mod filter;
pub mod number;
pub mod state;
pub mod string;
pub mod time;

pub use filter::Filter;
pub use state::FilterState;
