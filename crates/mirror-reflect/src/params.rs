use mirror_model::{ClassStore, PrimitiveType, Type, Value};

/// One element of a lookup's parameter description: either an explicit type
/// token, or a runtime value whose type is recovered during resolution.
#[derive(Debug, Clone)]
pub enum Param {
    Type(Type),
    Value(Value),
}

impl From<Type> for Param {
    fn from(ty: Type) -> Self {
        Param::Type(ty)
    }
}

impl From<PrimitiveType> for Param {
    fn from(prim: PrimitiveType) -> Self {
        Param::Type(Type::Primitive(prim))
    }
}

impl From<Value> for Param {
    fn from(value: Value) -> Self {
        Param::Value(value)
    }
}

/// Transient resolver built per lookup call: holds the primitive-mode flag
/// and the raw parameter list, and produces the ordered type-token list the
/// store's exact-signature lookups consume. Not retained afterwards.
///
/// Runtime values are already unboxed in this model, so a primitive value
/// resolves to its primitive type in either mode; the mode only affects
/// explicit wrapper-class type tokens (and object values of wrapper
/// classes), which primitive mode substitutes with their primitive
/// counterparts.
#[derive(Debug)]
pub struct Parameters<'a> {
    primitive: bool,
    params: &'a [Param],
}

impl<'a> Parameters<'a> {
    pub fn with_mode(primitive: bool, params: &'a [Param]) -> Self {
        Parameters { primitive, params }
    }

    pub fn boxed(params: &'a [Param]) -> Self {
        Parameters::with_mode(false, params)
    }

    pub fn primitive(params: &'a [Param]) -> Self {
        Parameters::with_mode(true, params)
    }

    pub fn resolve(&self, store: &ClassStore) -> Vec<Type> {
        self.params
            .iter()
            .map(|param| {
                let ty = match param {
                    Param::Type(ty) => ty.clone(),
                    Param::Value(value) => value.type_of(store),
                };
                if self.primitive {
                    ty.unboxed()
                } else {
                    ty
                }
            })
            .collect()
    }
}
