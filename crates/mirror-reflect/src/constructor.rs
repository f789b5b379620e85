use std::fmt;

use tracing::trace;

use mirror_model::{
    Annotation, ClassId, ClassStore, ConstructorBody, ConstructorDef, InvokeError, ObjectRef,
    Type, Value,
};

use crate::class::ClassMirror;

/// An immutable view over one resolved constructor.
#[derive(Clone, Copy)]
pub struct ConstructorMirror<'a> {
    store: &'a ClassStore,
    owner: ClassId,
    def: &'a ConstructorDef,
}

impl<'a> ConstructorMirror<'a> {
    pub(crate) fn new(store: &'a ClassStore, owner: ClassId, def: &'a ConstructorDef) -> Self {
        ConstructorMirror { store, owner, def }
    }

    pub fn declaring_class(&self) -> ClassMirror<'a> {
        ClassMirror::new(self.store, self.owner)
    }

    pub fn access_flags(&self) -> u16 {
        self.def.access_flags
    }

    pub fn is_public(&self) -> bool {
        self.def.is_public()
    }

    pub fn parameter_types(&self) -> &'a [Type] {
        &self.def.params
    }

    pub fn annotation(&self, type_name: &str) -> Option<&'a Annotation> {
        self.def
            .annotations
            .iter()
            .find(|annotation| annotation.type_name == type_name)
    }

    /// Construct an instance.
    ///
    /// A `Default` body allocates a fresh instance whose declared instance
    /// fields (inherited ones included) start at their type's default value;
    /// a native body runs as-is and its failures propagate unchanged.
    pub fn instantiate(&self, args: &[Value]) -> Result<Value, InvokeError> {
        if args.len() != self.def.arity() {
            return Err(InvokeError::ArityMismatch {
                expected: self.def.arity(),
                got: args.len(),
            });
        }
        trace!(class = %self.store.binary_name(self.owner), "instantiating");

        match &self.def.body {
            ConstructorBody::Native(body) => body(self.owner, args),
            ConstructorBody::Default => {
                let instance = ObjectRef::new(self.owner);
                for owner in self.store.linearized_hierarchy(self.owner) {
                    for field in self.store.declared_fields(owner) {
                        if field.is_static() || instance.field(&field.name).is_some() {
                            continue;
                        }
                        instance.set_field(field.name.clone(), Value::default_for(&field.ty));
                    }
                }
                Ok(Value::Object(instance))
            }
        }
    }
}

impl fmt::Debug for ConstructorMirror<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructorMirror")
            .field("class", &self.store.binary_name(self.owner))
            .field("params", &self.def.params)
            .finish_non_exhaustive()
    }
}
