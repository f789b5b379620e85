//! Reflection convenience layer over a [`mirror_model::ClassStore`].
//!
//! [`ClassMirror`] locates methods, constructors, and fields by name,
//! parameter-type signature, return type, or arity, and wraps each match in
//! an immutable member mirror. Two small pieces of logic live here, on top
//! of the store's enumeration and exact-match primitives:
//!
//! - the fallback chain: every name+signature lookup tries the public member
//!   set (which includes inherited members) first and falls back to the
//!   class's own declared members, so private members resolve too;
//! - primitive-mode parameter resolution: [`Parameters`] turns a mixed list
//!   of type tokens and runtime values into the ordered type list a lookup
//!   matches against, substituting primitives for boxed wrapper classes when
//!   asked to.
//!
//! A lookup that finds nothing returns `None`, never an error. The only
//! fallible entry points are name-based class resolution
//! ([`ClassMirror::by_name`]) and actually exercising a resolved member
//! (invoke / instantiate / get / set), whose failures propagate unchanged.

#![forbid(unsafe_code)]

mod class;
mod constructor;
mod field;
mod method;
mod params;

use thiserror::Error;

pub use crate::class::ClassMirror;
pub use crate::constructor::ConstructorMirror;
pub use crate::field::FieldMirror;
pub use crate::method::MethodMirror;
pub use crate::params::{Param, Parameters};

pub use mirror_model::InvokeError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReflectError {
    #[error("class `{0}` is not defined")]
    ClassNotFound(String),
    #[error(transparent)]
    Invoke(#[from] InvokeError),
}
