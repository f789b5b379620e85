//! Runtime values and instances.
//!
//! Values are already unboxed: a primitive value's runtime type is the
//! primitive type itself, not its wrapper class. Strings get a dedicated
//! variant so the seeded `java.lang.String` class has instances without an
//! object allocation per literal.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::store::{ClassId, ClassStore};
use crate::types::{PrimitiveType, Type, OBJECT_CLASS, STRING_CLASS};

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Void,
    Boolean(bool),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Char(char),
    Str(String),
    Object(ObjectRef),
}

impl Value {
    pub fn string(value: impl Into<String>) -> Self {
        Value::Str(value.into())
    }

    /// The runtime type token of this value.
    ///
    /// `Null` reports `java.lang.Object`: a null carries no class of its own,
    /// and the root type is the only honest answer a signature search can
    /// use.
    pub fn type_of(&self, store: &ClassStore) -> Type {
        match self {
            Value::Null => Type::reference(OBJECT_CLASS),
            Value::Void => Type::Void,
            Value::Boolean(_) => Type::Primitive(PrimitiveType::Boolean),
            Value::Byte(_) => Type::Primitive(PrimitiveType::Byte),
            Value::Short(_) => Type::Primitive(PrimitiveType::Short),
            Value::Int(_) => Type::Primitive(PrimitiveType::Int),
            Value::Long(_) => Type::Primitive(PrimitiveType::Long),
            Value::Float(_) => Type::Primitive(PrimitiveType::Float),
            Value::Double(_) => Type::Primitive(PrimitiveType::Double),
            Value::Char(_) => Type::Primitive(PrimitiveType::Char),
            Value::Str(_) => Type::reference(STRING_CLASS),
            Value::Object(obj) => Type::reference(store.binary_name(obj.class())),
        }
    }

    /// The default value a field of the given declared type starts with:
    /// zero for numeric primitives, `false`, `'\0'`, `Null` for reference
    /// and array types.
    pub fn default_for(ty: &Type) -> Value {
        match ty {
            Type::Void => Value::Void,
            Type::Primitive(PrimitiveType::Boolean) => Value::Boolean(false),
            Type::Primitive(PrimitiveType::Byte) => Value::Byte(0),
            Type::Primitive(PrimitiveType::Short) => Value::Short(0),
            Type::Primitive(PrimitiveType::Int) => Value::Int(0),
            Type::Primitive(PrimitiveType::Long) => Value::Long(0),
            Type::Primitive(PrimitiveType::Float) => Value::Float(0.0),
            Type::Primitive(PrimitiveType::Double) => Value::Double(0.0),
            Type::Primitive(PrimitiveType::Char) => Value::Char('\0'),
            Type::Reference(_) | Type::Array(_) => Value::Null,
        }
    }
}

/// A shared, interior-mutable handle to an instance. Equality is reference
/// identity, matching object identity semantics.
#[derive(Clone)]
pub struct ObjectRef(Rc<RefCell<Instance>>);

impl ObjectRef {
    pub fn new(class: ClassId) -> Self {
        ObjectRef(Rc::new(RefCell::new(Instance {
            class,
            fields: HashMap::new(),
        })))
    }

    pub fn class(&self) -> ClassId {
        self.0.borrow().class
    }

    /// Current value of the named field slot, if it has ever been written.
    pub fn field(&self, name: &str) -> Option<Value> {
        self.0.borrow().fields.get(name).cloned()
    }

    pub fn set_field(&self, name: impl Into<String>, value: Value) {
        self.0.borrow_mut().fields.insert(name.into(), value);
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let instance = self.0.borrow();
        f.debug_struct("ObjectRef")
            .field("class", &instance.class)
            .field("fields", &instance.fields)
            .finish()
    }
}

#[derive(Debug)]
pub struct Instance {
    pub class: ClassId,
    pub fields: HashMap<String, Value>,
}
