//! Declared-member metadata: classes, fields, methods, constructors.
//!
//! Definitions are plain data plus, for invocable members, an optional
//! native body. Bodies are non-capturing function pointers so definitions
//! stay `Clone` and the registry stays inert data.

use crate::annotation::Annotation;
use crate::descriptor::parse_method_descriptor;
use crate::error::{DescriptorError, InvokeError};
use crate::flags;
use crate::store::ClassId;
use crate::types::{Type, OBJECT_CLASS};
use crate::value::Value;

/// Body of a method: receives the receiver (`None` for static invocations)
/// and the pre-checked argument list.
pub type NativeMethod = fn(Option<&Value>, &[Value]) -> Result<Value, InvokeError>;

/// Body of a constructor: receives the id of the class being constructed and
/// the pre-checked argument list, and returns the constructed value.
pub type NativeConstructor = fn(ClassId, &[Value]) -> Result<Value, InvokeError>;

#[derive(Debug, Clone)]
pub struct FieldDef {
    pub access_flags: u16,
    pub name: String,
    pub ty: Type,
    pub annotations: Vec<Annotation>,
}

impl FieldDef {
    /// A public field of the given declared type.
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        FieldDef {
            access_flags: flags::ACC_PUBLIC,
            name: name.into(),
            ty,
            annotations: Vec::new(),
        }
    }

    pub fn with_flags(mut self, access_flags: u16) -> Self {
        self.access_flags = access_flags;
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn is_public(&self) -> bool {
        flags::is_public(self.access_flags)
    }

    pub fn is_static(&self) -> bool {
        flags::is_static(self.access_flags)
    }
}

#[derive(Debug, Clone)]
pub struct MethodDef {
    pub access_flags: u16,
    pub name: String,
    pub params: Vec<Type>,
    pub return_type: Type,
    pub annotations: Vec<Annotation>,
    pub body: Option<NativeMethod>,
}

impl MethodDef {
    /// A public instance method with no body.
    pub fn new(name: impl Into<String>, params: Vec<Type>, return_type: Type) -> Self {
        MethodDef {
            access_flags: flags::ACC_PUBLIC,
            name: name.into(),
            params,
            return_type,
            annotations: Vec::new(),
            body: None,
        }
    }

    /// Declare a method from its JVM descriptor, e.g.
    /// `MethodDef::from_descriptor("indexOf", "(Ljava/lang/String;I)I")`.
    pub fn from_descriptor(
        name: impl Into<String>,
        descriptor: &str,
    ) -> Result<Self, DescriptorError> {
        let (params, return_type) = parse_method_descriptor(descriptor)?;
        Ok(MethodDef::new(name, params, return_type))
    }

    pub fn with_flags(mut self, access_flags: u16) -> Self {
        self.access_flags = access_flags;
        self
    }

    pub fn with_body(mut self, body: NativeMethod) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    pub fn is_public(&self) -> bool {
        flags::is_public(self.access_flags)
    }

    pub fn is_static(&self) -> bool {
        flags::is_static(self.access_flags)
    }

    pub fn is_abstract(&self) -> bool {
        flags::is_abstract(self.access_flags)
    }

    /// Exact signature match: same name, same parameter type sequence.
    pub fn matches(&self, name: &str, params: &[Type]) -> bool {
        self.name == name && self.params == params
    }
}

/// How a constructor produces an instance.
#[derive(Debug, Clone)]
pub enum ConstructorBody {
    /// Allocate a fresh instance with every declared instance field
    /// initialized to its type's default value.
    Default,
    Native(NativeConstructor),
}

#[derive(Debug, Clone)]
pub struct ConstructorDef {
    pub access_flags: u16,
    pub params: Vec<Type>,
    pub annotations: Vec<Annotation>,
    pub body: ConstructorBody,
}

impl ConstructorDef {
    /// A public constructor that default-initializes the instance.
    pub fn new(params: Vec<Type>) -> Self {
        ConstructorDef {
            access_flags: flags::ACC_PUBLIC,
            params,
            annotations: Vec::new(),
            body: ConstructorBody::Default,
        }
    }

    /// Declare a constructor from a method descriptor with a `V` return,
    /// e.g. `ConstructorDef::from_descriptor("(JLjava/lang/String;)V")`.
    pub fn from_descriptor(descriptor: &str) -> Result<Self, DescriptorError> {
        let (params, return_type) = parse_method_descriptor(descriptor)?;
        if return_type != Type::Void {
            return Err(DescriptorError::Invalid(descriptor.to_string()));
        }
        Ok(ConstructorDef::new(params))
    }

    pub fn with_flags(mut self, access_flags: u16) -> Self {
        self.access_flags = access_flags;
        self
    }

    pub fn with_body(mut self, body: NativeConstructor) -> Self {
        self.body = ConstructorBody::Native(body);
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    pub fn is_public(&self) -> bool {
        flags::is_public(self.access_flags)
    }
}

/// A class definition: the unit of registration in a
/// [`crate::ClassStore`].
#[derive(Debug, Clone)]
pub struct ClassDef {
    pub binary_name: String,
    pub access_flags: u16,
    pub super_class: Option<String>,
    pub interfaces: Vec<String>,
    pub fields: Vec<FieldDef>,
    pub constructors: Vec<ConstructorDef>,
    pub methods: Vec<MethodDef>,
    pub annotations: Vec<Annotation>,
}

impl ClassDef {
    /// A public class extending `java.lang.Object`.
    pub fn new(binary_name: impl Into<String>) -> Self {
        ClassDef {
            binary_name: binary_name.into(),
            access_flags: flags::ACC_PUBLIC,
            super_class: Some(OBJECT_CLASS.to_string()),
            interfaces: Vec::new(),
            fields: Vec::new(),
            constructors: Vec::new(),
            methods: Vec::new(),
            annotations: Vec::new(),
        }
    }

    pub fn with_flags(mut self, access_flags: u16) -> Self {
        self.access_flags = access_flags;
        self
    }

    pub fn with_super(mut self, binary_name: impl Into<String>) -> Self {
        self.super_class = Some(binary_name.into());
        self
    }

    pub fn with_interface(mut self, binary_name: impl Into<String>) -> Self {
        self.interfaces.push(binary_name.into());
        self
    }

    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_constructor(mut self, constructor: ConstructorDef) -> Self {
        self.constructors.push(constructor);
        self
    }

    pub fn with_method(mut self, method: MethodDef) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// The declared annotation of the given type, if present.
    pub fn annotation(&self, type_name: &str) -> Option<&Annotation> {
        self.annotations
            .iter()
            .find(|annotation| annotation.type_name == type_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PrimitiveType;
    use pretty_assertions::assert_eq;

    #[test]
    fn members_can_be_declared_from_descriptors() {
        let method = MethodDef::from_descriptor("indexOf", "(Ljava/lang/String;I)I").unwrap();
        assert_eq!(method.name, "indexOf");
        assert_eq!(
            method.params,
            vec![Type::string(), Type::Primitive(PrimitiveType::Int)]
        );
        assert_eq!(method.return_type, Type::Primitive(PrimitiveType::Int));

        let ctor = ConstructorDef::from_descriptor("(J)V").unwrap();
        assert_eq!(ctor.params, vec![Type::Primitive(PrimitiveType::Long)]);

        // Constructors never return a value.
        assert!(ConstructorDef::from_descriptor("(J)I").is_err());
    }

    #[test]
    fn builder_flags_drive_the_visibility_predicates() {
        let method = MethodDef::new("helper", vec![], Type::Void)
            .with_flags(flags::ACC_PRIVATE | flags::ACC_STATIC);
        assert!(!method.is_public());
        assert!(method.is_static());
        assert!(method.matches("helper", &[]));
        assert!(!method.matches("helper", &[Type::Void]));
    }
}
