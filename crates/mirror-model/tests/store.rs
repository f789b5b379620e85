use mirror_model::flags::{ACC_PRIVATE, ACC_PUBLIC, ACC_STATIC};
use mirror_model::{
    ClassDef, ClassStore, FieldDef, MethodDef, ObjectRef, PrimitiveType, Type, Value, OBJECT_CLASS,
};
use pretty_assertions::assert_eq;

fn int() -> Type {
    Type::Primitive(PrimitiveType::Int)
}

/// `com.example.Shape` with a public `area` and a private helper;
/// `com.example.Circle extends Shape` overriding `area`.
fn shapes() -> ClassStore {
    let mut store = ClassStore::with_core_classes();

    store.add_class(
        ClassDef::new("com.example.Shape")
            .with_field(FieldDef::new("sides", int()))
            .with_method(MethodDef::new("area", vec![], Type::Primitive(PrimitiveType::Double)))
            .with_method(
                MethodDef::new("normalize", vec![], Type::Void).with_flags(ACC_PRIVATE),
            ),
    );
    store.add_class(
        ClassDef::new("com.example.Circle")
            .with_super("com.example.Shape")
            .with_field(FieldDef::new("radius", Type::Primitive(PrimitiveType::Double)))
            .with_method(MethodDef::new("area", vec![], Type::Primitive(PrimitiveType::Double)))
            .with_method(MethodDef::new("diameter", vec![], Type::Primitive(PrimitiveType::Double))),
    );

    store
}

#[test]
fn redefining_a_class_keeps_its_id() {
    let mut store = ClassStore::new();
    let first = store.add_class(ClassDef::new("com.example.Foo"));
    let second = store.add_class(
        ClassDef::new("com.example.Foo").with_field(FieldDef::new("count", int())),
    );

    assert_eq!(first, second);
    assert_eq!(store.declared_fields(first).len(), 1);
}

#[test]
fn public_methods_include_inherited_and_shadow_overridden() {
    let store = shapes();
    let circle = store.lookup("com.example.Circle").expect("Circle must be registered");
    let shape = store.lookup("com.example.Shape").expect("Shape must be registered");

    let methods = store.public_methods(circle);
    let named: Vec<(&str, &str)> = methods
        .iter()
        .map(|(owner, m)| (store.binary_name(*owner), m.name.as_str()))
        .collect();

    // Subclass first; the overridden `area` appears once, owned by Circle;
    // the private helper never shows up.
    assert_eq!(
        named,
        vec![
            ("com.example.Circle", "area"),
            ("com.example.Circle", "diameter"),
        ]
    );

    let (owner, _) = store
        .public_method(circle, "area", &[])
        .expect("area must resolve");
    assert_eq!(owner, circle);
    assert_eq!(store.public_method(shape, "area", &[]).map(|(o, _)| o), Some(shape));
}

#[test]
fn declared_lookups_see_private_members_but_not_inherited_ones() {
    let store = shapes();
    let circle = store.lookup("com.example.Circle").expect("Circle must be registered");
    let shape = store.lookup("com.example.Shape").expect("Shape must be registered");

    assert!(store.declared_method(shape, "normalize", &[]).is_some());
    assert!(store.public_method(shape, "normalize", &[]).is_none());
    // Declared lookups never cross into the superclass.
    assert!(store.declared_method(circle, "normalize", &[]).is_none());
}

#[test]
fn public_fields_are_inherited_and_shadowed_by_name() {
    let mut store = shapes();
    store.add_class(
        ClassDef::new("com.example.Square")
            .with_super("com.example.Shape")
            .with_field(FieldDef::new("sides", int()).with_flags(ACC_PUBLIC | ACC_STATIC)),
    );
    let square = store.lookup("com.example.Square").expect("Square must be registered");

    let fields = store.public_fields(square);
    assert_eq!(fields.len(), 1);
    let (owner, field) = fields[0];
    assert_eq!(store.binary_name(owner), "com.example.Square");
    assert!(field.is_static());
}

#[test]
fn is_instance_walks_the_hierarchy() {
    let store = shapes();
    let shape = store.lookup("com.example.Shape").expect("Shape must be registered");
    let circle = store.lookup("com.example.Circle").expect("Circle must be registered");
    let object = store.lookup(OBJECT_CLASS).expect("Object must be seeded");

    let instance = Value::Object(ObjectRef::new(circle));
    assert!(store.is_instance(circle, &instance));
    assert!(store.is_instance(shape, &instance));
    assert!(store.is_instance(object, &instance));
    assert!(!store.is_instance(circle, &Value::Object(ObjectRef::new(shape))));
    assert!(!store.is_instance(shape, &Value::Int(3)));
    assert!(!store.is_instance(shape, &Value::Null));
}

#[test]
fn strings_are_instances_of_the_seeded_string_class() {
    let store = ClassStore::with_core_classes();
    let string = store.lookup("java.lang.String").expect("String must be seeded");
    let object = store.lookup(OBJECT_CLASS).expect("Object must be seeded");

    assert!(store.is_instance(string, &Value::string("hello")));
    assert!(store.is_instance(object, &Value::string("hello")));

    assert_eq!(
        Value::string("hello").type_of(&store),
        Type::reference("java.lang.String")
    );
}

#[test]
fn wrapper_classes_hang_off_number_where_java_puts_them() {
    let store = ClassStore::with_core_classes();
    let integer = store.lookup("java.lang.Integer").expect("Integer must be seeded");
    let number = store.lookup("java.lang.Number").expect("Number must be seeded");
    let boolean = store.lookup("java.lang.Boolean").expect("Boolean must be seeded");

    assert!(store.is_subclass(integer, number));
    assert!(!store.is_subclass(boolean, number));
}
