use std::fmt;

use tracing::trace;

use mirror_model::{Annotation, ClassId, ClassStore, ConstructorDef, MethodDef, Type, Value};

use crate::constructor::ConstructorMirror;
use crate::field::FieldMirror;
use crate::method::MethodMirror;
use crate::params::{Param, Parameters};
use crate::ReflectError;

/// A view over one registered class, exposing the lookup operations.
///
/// Every lookup returns `None` on a miss. Queries that can match several
/// members (by parameter list, return type, arity, or field type) take the
/// first match in enumeration order: public members subclass-first, then
/// the class's own declared members. Callers must not rely on a particular
/// winner when the query is ambiguous.
#[derive(Clone, Copy)]
pub struct ClassMirror<'a> {
    store: &'a ClassStore,
    id: ClassId,
}

impl<'a> ClassMirror<'a> {
    pub fn new(store: &'a ClassStore, id: ClassId) -> Self {
        ClassMirror { store, id }
    }

    /// Resolve a class from its binary name, the `Class.forName` analog.
    ///
    /// Unlike member lookups, an unknown class name is a checked error, not
    /// an empty result.
    pub fn by_name(store: &'a ClassStore, binary_name: &str) -> Result<Self, ReflectError> {
        match store.lookup(binary_name) {
            Some(id) => Ok(ClassMirror { store, id }),
            None => Err(ReflectError::ClassNotFound(binary_name.to_string())),
        }
    }

    pub fn id(&self) -> ClassId {
        self.id
    }

    pub fn store(&self) -> &'a ClassStore {
        self.store
    }

    pub fn binary_name(&self) -> &'a str {
        self.store.binary_name(self.id)
    }

    pub fn is_instance(&self, value: &Value) -> bool {
        self.store.is_instance(self.id, value)
    }

    /// Look up a method by name and parameter description, boxed mode.
    ///
    /// Public members (including inherited ones) are searched first; on a
    /// miss the class's own declared members follow, so private methods
    /// resolve too.
    pub fn method(&self, name: &str, params: &[Param]) -> Option<MethodMirror<'a>> {
        self.method_with_mode(name, Parameters::boxed(params))
    }

    /// Like [`ClassMirror::method`], but wrapper-class parameter types are
    /// substituted with their primitive counterparts before matching.
    pub fn primitive_method(&self, name: &str, params: &[Param]) -> Option<MethodMirror<'a>> {
        self.method_with_mode(name, Parameters::primitive(params))
    }

    fn method_with_mode(&self, name: &str, params: Parameters<'_>) -> Option<MethodMirror<'a>> {
        let types = params.resolve(self.store);
        if let Some((owner, def)) = self.store.public_method(self.id, name, &types) {
            return Some(self.wrap_method(owner, def));
        }
        trace!(
            class = %self.binary_name(),
            method = name,
            "public method lookup missed, trying declared members"
        );
        self.store
            .declared_method(self.id, name, &types)
            .map(|def| self.wrap_method(self.id, def))
    }

    /// Look up a method purely by its parameter-type signature, boxed mode.
    pub fn method_by_params(&self, params: &[Param]) -> Option<MethodMirror<'a>> {
        self.method_by_params_with_mode(Parameters::boxed(params))
    }

    pub fn primitive_method_by_params(&self, params: &[Param]) -> Option<MethodMirror<'a>> {
        self.method_by_params_with_mode(Parameters::primitive(params))
    }

    fn method_by_params_with_mode(&self, params: Parameters<'_>) -> Option<MethodMirror<'a>> {
        let types = params.resolve(self.store);
        self.scan_methods()
            .into_iter()
            .find(|(_, def)| def.params == types)
            .map(|(owner, def)| self.wrap_method(owner, def))
    }

    /// Look up a method by candidate names: the first method in enumeration
    /// order whose name equals any of the candidates.
    ///
    /// Earlier renditions of this operation only ever honored the first
    /// candidate; here every candidate is examined (see DESIGN.md).
    pub fn method_by_name(&self, names: &[&str]) -> Option<MethodMirror<'a>> {
        self.scan_methods()
            .into_iter()
            .find(|(_, def)| names.iter().any(|name| def.name == *name))
            .map(|(owner, def)| self.wrap_method(owner, def))
    }

    /// First method whose declared return type equals the requested type.
    pub fn method_by_return_type(&self, return_type: &Type) -> Option<MethodMirror<'a>> {
        self.scan_methods()
            .into_iter()
            .find(|(_, def)| def.return_type == *return_type)
            .map(|(owner, def)| self.wrap_method(owner, def))
    }

    /// Wrapped-class form of [`ClassMirror::method_by_return_type`].
    pub fn method_by_return_class(&self, class: &ClassMirror<'_>) -> Option<MethodMirror<'a>> {
        self.method_by_return_type(&Type::reference(class.binary_name()))
    }

    /// Look up a constructor by parameter description, boxed mode, with the
    /// same public-then-declared fallback as method lookup.
    pub fn constructor(&self, params: &[Param]) -> Option<ConstructorMirror<'a>> {
        self.constructor_with_mode(Parameters::boxed(params))
    }

    pub fn primitive_constructor(&self, params: &[Param]) -> Option<ConstructorMirror<'a>> {
        self.constructor_with_mode(Parameters::primitive(params))
    }

    fn constructor_with_mode(&self, params: Parameters<'_>) -> Option<ConstructorMirror<'a>> {
        let types = params.resolve(self.store);
        if let Some(def) = self.store.public_constructor(self.id, &types) {
            return Some(self.wrap_constructor(def));
        }
        trace!(
            class = %self.binary_name(),
            "public constructor lookup missed, trying declared members"
        );
        self.store
            .declared_constructor(self.id, &types)
            .map(|def| self.wrap_constructor(def))
    }

    /// First constructor with the given parameter count, public ones first.
    pub fn constructor_with_arity(&self, arity: usize) -> Option<ConstructorMirror<'a>> {
        self.scan_constructors()
            .into_iter()
            .find(|def| def.arity() == arity)
            .map(|def| self.wrap_constructor(def))
    }

    /// Look up a field by name: public (including inherited) first, then the
    /// class's own declared fields.
    pub fn field(&self, name: &str) -> Option<FieldMirror<'a>> {
        if let Some((owner, def)) = self.store.public_field(self.id, name) {
            return Some(FieldMirror::new(self.store, owner, def));
        }
        trace!(
            class = %self.binary_name(),
            field = name,
            "public field lookup missed, trying declared members"
        );
        self.store
            .declared_field(self.id, name)
            .map(|def| FieldMirror::new(self.store, self.id, def))
    }

    /// First field whose declared type equals the requested type.
    pub fn field_by_type(&self, ty: &Type) -> Option<FieldMirror<'a>> {
        let mut candidates = self.store.public_fields(self.id);
        candidates.extend(
            self.store
                .declared_fields(self.id)
                .iter()
                .map(|def| (self.id, def)),
        );
        candidates
            .into_iter()
            .find(|(_, def)| def.ty == *ty)
            .map(|(owner, def)| FieldMirror::new(self.store, owner, def))
    }

    /// Wrapped-class form of [`ClassMirror::field_by_type`].
    pub fn field_by_class(&self, class: &ClassMirror<'_>) -> Option<FieldMirror<'a>> {
        self.field_by_type(&Type::reference(class.binary_name()))
    }

    /// All public fields, inherited ones included.
    pub fn fields(&self) -> Vec<FieldMirror<'a>> {
        self.store
            .public_fields(self.id)
            .into_iter()
            .map(|(owner, def)| FieldMirror::new(self.store, owner, def))
            .collect()
    }

    /// The class's own fields, any visibility.
    pub fn declared_fields(&self) -> Vec<FieldMirror<'a>> {
        self.store
            .declared_fields(self.id)
            .iter()
            .map(|def| FieldMirror::new(self.store, self.id, def))
            .collect()
    }

    /// All public methods, inherited ones included.
    pub fn methods(&self) -> Vec<MethodMirror<'a>> {
        self.store
            .public_methods(self.id)
            .into_iter()
            .map(|(owner, def)| self.wrap_method(owner, def))
            .collect()
    }

    /// The class's own methods, any visibility.
    pub fn declared_methods(&self) -> Vec<MethodMirror<'a>> {
        self.store
            .declared_methods(self.id)
            .iter()
            .map(|def| self.wrap_method(self.id, def))
            .collect()
    }

    /// The single declared annotation of the given type, if present.
    pub fn annotation(&self, type_name: &str) -> Option<&'a Annotation> {
        self.store.class(self.id).annotation(type_name)
    }

    /// Public methods (subclass first) followed by the class's own declared
    /// methods. Duplicates are harmless: every consumer takes the first
    /// match, and a declared public method already won in the public set.
    fn scan_methods(&self) -> Vec<(ClassId, &'a MethodDef)> {
        let mut all = self.store.public_methods(self.id);
        all.extend(
            self.store
                .declared_methods(self.id)
                .iter()
                .map(|def| (self.id, def)),
        );
        all
    }

    fn scan_constructors(&self) -> Vec<&'a ConstructorDef> {
        let mut all = self.store.public_constructors(self.id);
        all.extend(self.store.declared_constructors(self.id).iter());
        all
    }

    fn wrap_method(&self, owner: ClassId, def: &'a MethodDef) -> MethodMirror<'a> {
        MethodMirror::new(self.store, owner, def)
    }

    fn wrap_constructor(&self, def: &'a ConstructorDef) -> ConstructorMirror<'a> {
        ConstructorMirror::new(self.store, self.id, def)
    }
}

impl fmt::Debug for ClassMirror<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassMirror")
            .field("class", &self.binary_name())
            .finish_non_exhaustive()
    }
}
