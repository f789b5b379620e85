//! Class metadata model and runtime substrate for the `mirror` reflection
//! layer.
//!
//! This crate plays the role a managed runtime's introspection API plays for
//! a reflection library: it owns the class definitions (fields, methods,
//! constructors, annotations, supertype links, JVM-style access flags and
//! descriptors), enumerates members in a defined order, answers
//! exact-signature lookups, and carries the small value/object layer needed
//! to actually invoke a resolved member.
//!
//! `mirror-reflect` builds the convenience lookups (fallback chains,
//! primitive substitution, optional-returning searches) on top of this
//! crate; nothing here performs fallback logic itself.

#![forbid(unsafe_code)]

mod annotation;
mod class;
mod descriptor;
mod error;
pub mod flags;
mod store;
mod types;
mod value;

pub use crate::annotation::{Annotation, AnnotationValue};
pub use crate::class::{
    ClassDef, ConstructorBody, ConstructorDef, FieldDef, MethodDef, NativeConstructor,
    NativeMethod,
};
pub use crate::descriptor::{
    field_descriptor, method_descriptor, parse_field_descriptor, parse_method_descriptor,
};
pub use crate::error::{DescriptorError, InvokeError};
pub use crate::store::{ClassId, ClassStore};
pub use crate::types::{PrimitiveType, Type, OBJECT_CLASS, STRING_CLASS};
pub use crate::value::{Instance, ObjectRef, Value};
