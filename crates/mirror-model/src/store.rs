//! The class registry the reflection layer delegates to.
//!
//! The store owns every [`ClassDef`] and answers two families of questions:
//! enumeration (declared members of one class; public members including
//! inherited ones) and exact-signature lookup. Both are deliberately dumb
//! linear scans in a defined order; fallback chains and type substitution
//! live in `mirror-reflect`.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

use tracing::debug;

use crate::class::{ClassDef, ConstructorDef, FieldDef, MethodDef};
use crate::types::{PrimitiveType, Type, OBJECT_CLASS, STRING_CLASS};
use crate::value::Value;

/// Interned identifier of a class within one [`ClassStore`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(u32);

impl ClassId {
    fn from_raw(raw: u32) -> Self {
        ClassId(raw)
    }

    #[must_use]
    pub fn idx(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassId({})", self.0)
    }
}

#[derive(Debug, Default)]
pub struct ClassStore {
    classes: Vec<ClassDef>,
    by_name: HashMap<String, ClassId>,
}

impl ClassStore {
    /// An empty store with no classes at all, not even `java.lang.Object`.
    pub fn new() -> Self {
        ClassStore::default()
    }

    /// A store seeded with the core classes every hierarchy hangs off:
    /// `java.lang.Object`, `java.lang.String`, `java.lang.Number`, and the
    /// eight primitive wrapper classes.
    pub fn with_core_classes() -> Self {
        let mut store = ClassStore::new();

        store.add_class(ClassDef {
            super_class: None,
            ..ClassDef::new(OBJECT_CLASS)
        });
        store.add_class(ClassDef::new("java.lang.Number"));
        store.add_class(ClassDef::new(STRING_CLASS));

        for prim in PrimitiveType::all() {
            let super_class = match prim {
                PrimitiveType::Boolean | PrimitiveType::Char => OBJECT_CLASS,
                _ => "java.lang.Number",
            };
            store.add_class(ClassDef::new(prim.boxed_name()).with_super(super_class));
        }

        store
    }

    /// Register a class, replacing any earlier definition with the same
    /// binary name. The id of a replaced class is stable.
    pub fn add_class(&mut self, def: ClassDef) -> ClassId {
        debug!(class = %def.binary_name, "defining class");
        if let Some(&id) = self.by_name.get(&def.binary_name) {
            self.classes[id.idx()] = def;
            return id;
        }
        let id = ClassId::from_raw(self.classes.len() as u32);
        self.by_name.insert(def.binary_name.clone(), id);
        self.classes.push(def);
        id
    }

    /// The definition behind an id. Ids are only ever minted by this store;
    /// indexing with an id from another store is a logic error.
    pub fn class(&self, id: ClassId) -> &ClassDef {
        &self.classes[id.idx()]
    }

    pub fn lookup(&self, binary_name: &str) -> Option<ClassId> {
        self.by_name.get(binary_name).copied()
    }

    pub fn binary_name(&self, id: ClassId) -> &str {
        &self.class(id).binary_name
    }

    /// `true` when `sub` is `sup` or reaches it through its superclass chain
    /// or interfaces.
    pub fn is_subclass(&self, sub: ClassId, sup: ClassId) -> bool {
        self.linearized_hierarchy(sub).contains(&sup)
    }

    /// `Class.isInstance` analog: `true` when the value is an object (or
    /// string) whose runtime class is `id` or a subtype of it. Null and
    /// primitive values are instances of nothing.
    pub fn is_instance(&self, id: ClassId, value: &Value) -> bool {
        let runtime = match value {
            Value::Object(obj) => Some(obj.class()),
            Value::Str(_) => self.lookup(STRING_CLASS),
            _ => None,
        };
        match runtime {
            Some(class) => self.is_subclass(class, id),
            None => false,
        }
    }

    /// The class itself followed by its supertypes: superclass chain first,
    /// then interfaces breadth-first. Unregistered supertype names end the
    /// walk on that edge. The order is deterministic and is the enumeration
    /// order of the `public_*` member sets.
    pub fn linearized_hierarchy(&self, id: ClassId) -> Vec<ClassId> {
        let mut order = Vec::new();
        let mut seen = HashSet::new();
        let mut queue = VecDeque::new();
        queue.push_back(id);

        while let Some(current) = queue.pop_front() {
            if !seen.insert(current) {
                continue;
            }
            order.push(current);

            let def = self.class(current);
            if let Some(super_name) = &def.super_class {
                if let Some(super_id) = self.lookup(super_name) {
                    queue.push_back(super_id);
                }
            }
            for interface in &def.interfaces {
                if let Some(interface_id) = self.lookup(interface) {
                    queue.push_back(interface_id);
                }
            }
        }

        order
    }

    pub fn declared_methods(&self, id: ClassId) -> &[MethodDef] {
        &self.class(id).methods
    }

    pub fn declared_fields(&self, id: ClassId) -> &[FieldDef] {
        &self.class(id).fields
    }

    pub fn declared_constructors(&self, id: ClassId) -> &[ConstructorDef] {
        &self.class(id).constructors
    }

    /// Public methods including inherited ones, subclass first. An inherited
    /// method is shadowed by a subclass method with the same name and
    /// parameter types.
    pub fn public_methods(&self, id: ClassId) -> Vec<(ClassId, &MethodDef)> {
        let mut collected: Vec<(ClassId, &MethodDef)> = Vec::new();
        for owner in self.linearized_hierarchy(id) {
            for method in &self.class(owner).methods {
                if !method.is_public() {
                    continue;
                }
                let shadowed = collected
                    .iter()
                    .any(|(_, seen)| seen.matches(&method.name, &method.params));
                if !shadowed {
                    collected.push((owner, method));
                }
            }
        }
        collected
    }

    /// Public fields including inherited ones, subclass first; shadowing is
    /// by name alone.
    pub fn public_fields(&self, id: ClassId) -> Vec<(ClassId, &FieldDef)> {
        let mut collected: Vec<(ClassId, &FieldDef)> = Vec::new();
        for owner in self.linearized_hierarchy(id) {
            for field in &self.class(owner).fields {
                if !field.is_public() {
                    continue;
                }
                if !collected.iter().any(|(_, seen)| seen.name == field.name) {
                    collected.push((owner, field));
                }
            }
        }
        collected
    }

    /// Constructors are never inherited: the public set is the class's own
    /// public constructors.
    pub fn public_constructors(&self, id: ClassId) -> Vec<&ConstructorDef> {
        self.class(id)
            .constructors
            .iter()
            .filter(|ctor| ctor.is_public())
            .collect()
    }

    /// Exact public lookup, including inherited public methods.
    pub fn public_method(
        &self,
        id: ClassId,
        name: &str,
        params: &[Type],
    ) -> Option<(ClassId, &MethodDef)> {
        self.public_methods(id)
            .into_iter()
            .find(|(_, method)| method.matches(name, params))
    }

    /// Exact lookup among the class's own methods, any visibility.
    pub fn declared_method(&self, id: ClassId, name: &str, params: &[Type]) -> Option<&MethodDef> {
        self.class(id)
            .methods
            .iter()
            .find(|method| method.matches(name, params))
    }

    pub fn public_constructor(&self, id: ClassId, params: &[Type]) -> Option<&ConstructorDef> {
        self.public_constructors(id)
            .into_iter()
            .find(|ctor| ctor.params == params)
    }

    pub fn declared_constructor(&self, id: ClassId, params: &[Type]) -> Option<&ConstructorDef> {
        self.class(id)
            .constructors
            .iter()
            .find(|ctor| ctor.params == params)
    }

    pub fn public_field(&self, id: ClassId, name: &str) -> Option<(ClassId, &FieldDef)> {
        self.public_fields(id)
            .into_iter()
            .find(|(_, field)| field.name == name)
    }

    pub fn declared_field(&self, id: ClassId, name: &str) -> Option<&FieldDef> {
        self.class(id).fields.iter().find(|field| field.name == name)
    }
}
