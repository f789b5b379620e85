use std::fmt;

use mirror_model::{Annotation, ClassId, ClassStore, FieldDef, InvokeError, ObjectRef, Type, Value};

use crate::class::ClassMirror;

/// An immutable view over one resolved field.
#[derive(Clone, Copy)]
pub struct FieldMirror<'a> {
    store: &'a ClassStore,
    owner: ClassId,
    def: &'a FieldDef,
}

impl<'a> FieldMirror<'a> {
    pub(crate) fn new(store: &'a ClassStore, owner: ClassId, def: &'a FieldDef) -> Self {
        FieldMirror { store, owner, def }
    }

    pub fn name(&self) -> &'a str {
        &self.def.name
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

    pub fn is_static(&self) -> bool {
        self.def.is_static()
    }

    /// The field's declared type.
    pub fn ty(&self) -> &'a Type {
        &self.def.ty
    }

    pub fn annotation(&self, type_name: &str) -> Option<&'a Annotation> {
        self.def
            .annotations
            .iter()
            .find(|annotation| annotation.type_name == type_name)
    }

    /// Read the field from an instance of the declaring class. A declared
    /// field that was never written reads as its type's default value.
    pub fn get(&self, receiver: &Value) -> Result<Value, InvokeError> {
        let instance = self.checked_receiver(receiver)?;
        Ok(instance
            .field(&self.def.name)
            .unwrap_or_else(|| Value::default_for(&self.def.ty)))
    }

    /// Write the field on an instance of the declaring class.
    pub fn set(&self, receiver: &Value, value: Value) -> Result<(), InvokeError> {
        let instance = self.checked_receiver(receiver)?;
        instance.set_field(self.def.name.clone(), value);
        Ok(())
    }

    fn checked_receiver(&self, receiver: &Value) -> Result<ObjectRef, InvokeError> {
        match receiver {
            Value::Object(instance) if self.store.is_instance(self.owner, receiver) => {
                Ok(instance.clone())
            }
            _ => Err(InvokeError::ReceiverMismatch {
                expected: self.store.binary_name(self.owner).to_string(),
            }),
        }
    }
}

impl fmt::Debug for FieldMirror<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldMirror")
            .field("class", &self.store.binary_name(self.owner))
            .field("name", &self.def.name)
            .finish_non_exhaustive()
    }
}
