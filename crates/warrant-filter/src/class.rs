//! Runtime-type membership over dynamically typed values.
//!
//! Rust's static typing makes most instance-of checks a compile-time
//! matter; these filters cover the remaining dynamic seams, where a
//! heterogeneous container of [`Dynamic`] values must be constrained to
//! (or away from) a set of concrete types.

use std::any::{Any, TypeId};
use std::fmt;

use crate::filter::Filter;
use crate::state::FilterState;

/// A dynamically typed value carrying its concrete type for diagnostics.
pub struct Dynamic {
    value: Box<dyn Any + Send + Sync>,
    id: TypeId,
    type_name: &'static str,
}

impl Dynamic {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            value: Box::new(value),
            id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref()
    }
}

impl fmt::Debug for Dynamic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dynamic<{}>", self.type_name)
    }
}

/// Descriptor for one concrete type in a class-membership filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Class {
    id: TypeId,
    name: &'static str,
}

impl Class {
    pub fn of<T: Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    fn admits(&self, candidate: &Dynamic) -> bool {
        candidate.type_id() == self.id
    }
}

/// Keeps values of exactly one concrete type.
#[derive(Debug, Clone)]
pub struct InstanceOf {
    class: Class,
}

impl InstanceOf {
    pub fn of<T: Any>() -> Self {
        Self {
            class: Class::of::<T>(),
        }
    }
}

impl Filter<Dynamic> for InstanceOf {
    fn filter(&self, candidate: &Dynamic) -> FilterState {
        FilterState::from_bool(self.class.admits(candidate))
    }
}

/// Keeps containers whose every element is one of the allowed types.
#[derive(Debug, Clone)]
pub struct IncludesOnlyClasses {
    classes: Vec<Class>,
}

impl IncludesOnlyClasses {
    pub fn new(classes: Vec<Class>) -> Self {
        Self { classes }
    }
}

impl Filter<[Dynamic]> for IncludesOnlyClasses {
    fn filter(&self, candidate: &[Dynamic]) -> FilterState {
        FilterState::from_bool(
            candidate
                .iter()
                .all(|e| self.classes.iter().any(|c| c.admits(e))),
        )
    }
}

/// Keeps containers with no element of a forbidden type.
#[derive(Debug, Clone)]
pub struct ExcludesClasses {
    classes: Vec<Class>,
}

impl ExcludesClasses {
    pub fn new(classes: Vec<Class>) -> Self {
        Self { classes }
    }
}

impl Filter<[Dynamic]> for ExcludesClasses {
    fn filter(&self, candidate: &[Dynamic]) -> FilterState {
        FilterState::from_bool(
            !candidate
                .iter()
                .any(|e| self.classes.iter().any(|c| c.admits(e))),
        )
    }
}
