use std::fmt;

use tracing::trace;

use mirror_model::{Annotation, ClassId, ClassStore, InvokeError, MethodDef, Type, Value};

use crate::class::ClassMirror;

/// An immutable view over one resolved method. Constructed only by a
/// successful lookup on a [`ClassMirror`].
#[derive(Clone, Copy)]
pub struct MethodMirror<'a> {
    store: &'a ClassStore,
    owner: ClassId,
    def: &'a MethodDef,
}

impl<'a> MethodMirror<'a> {
    pub(crate) fn new(store: &'a ClassStore, owner: ClassId, def: &'a MethodDef) -> Self {
        MethodMirror { store, owner, def }
    }

    pub fn name(&self) -> &'a str {
        &self.def.name
    }

    /// The class the method is declared on, which for an inherited public
    /// method differs from the class the lookup started at.
    pub fn declaring_class(&self) -> ClassMirror<'a> {
        ClassMirror::new(self.store, self.owner)
    }

    pub fn access_flags(&self) -> u16 {
        self.def.access_flags
    }

    pub fn is_public(&self) -> bool {
        self.def.is_public()
    }

    pub fn is_static(&self) -> bool {
        self.def.is_static()
    }

    pub fn parameter_types(&self) -> &'a [Type] {
        &self.def.params
    }

    pub fn return_type(&self) -> &'a Type {
        &self.def.return_type
    }

    pub fn annotation(&self, type_name: &str) -> Option<&'a Annotation> {
        self.def
            .annotations
            .iter()
            .find(|annotation| annotation.type_name == type_name)
    }

    /// Invoke the method.
    ///
    /// Instance methods require a receiver that is an instance of the
    /// declaring class; static methods ignore any receiver passed. Arity is
    /// checked here; everything the body itself raises propagates to the
    /// caller unchanged.
    pub fn invoke(&self, receiver: Option<&Value>, args: &[Value]) -> Result<Value, InvokeError> {
        if args.len() != self.def.arity() {
            return Err(InvokeError::ArityMismatch {
                expected: self.def.arity(),
                got: args.len(),
            });
        }

        let receiver = if self.def.is_static() {
            None
        } else {
            match receiver {
                Some(value) if self.store.is_instance(self.owner, value) => Some(value),
                _ => {
                    return Err(InvokeError::ReceiverMismatch {
                        expected: self.store.binary_name(self.owner).to_string(),
                    })
                }
            }
        };

        let body = self.def.body.ok_or_else(|| InvokeError::MissingBody {
            name: self.def.name.clone(),
        })?;
        trace!(
            class = %self.store.binary_name(self.owner),
            method = %self.def.name,
            "invoking method"
        );
        body(receiver, args)
    }
}

impl fmt::Debug for MethodMirror<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodMirror")
            .field("class", &self.store.binary_name(self.owner))
            .field("name", &self.def.name)
            .finish_non_exhaustive()
    }
}
