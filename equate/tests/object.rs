#[macro_use]
mod common;
use equate::object::{Object, ObjectKind, Property, Prototype};
use equate::value::{Symbol, Value};
use equate::{Options, parse};

#[test]
fn key_order_is_ignored() {
    equal![
        "{}" => "{}",
        "{ x: 1, y: 2 }" => "{ y: 2, x: 1 }",
        "{ 1: 'a', b: 'b' }" => "{ b: 'b', '1': 'a' }"
    ];
    unequal![
        "{ x: 1 }" => "{ x: 1, y: undefined }",
        "{ x: 1 }" => "{ y: 1 }",
        "{ x: 1 }" => "{ x: '1' }",
        "{ x: { y: 1 } }" => "{ x: { y: 1 } }"
    ];
    equal!["{ deep: true }";
        "{ x: { y: [1, 2] } }" => "{ x: { y: [1, 2] } }"
    ];
    equal!["{ loose: true }";
        "{ x: 1 }" => "{ x: '1' }"
    ];
}

#[test]
fn prototypes() {
    equal![
        "Object.create(null)" => "Object.create(null)",
        "{ __proto__: null, a: 1 }" => "{ __proto__: null, a: 1 }"
    ];
    unequal![
        "{ __proto__: null, a: 1 }" => "Object.create(null)",
        "Object.create(null)" => "{}",
        "[]" => "{}",
        "new Map()" => "new Set()",
        "new Error('a')" => "new TypeError('a')",
        "Object.create({})" => "Object.create({})"
    ];
    unequal!["{ deep: true }";
        "{ __proto__: null, a: 1 }" => "{ a: 1 }"
    ];
}

#[test]
fn shared_prototypes() {
    let class = Object::plain();
    let instance = |x: i32| {
        let obj = Object::with_prototype(ObjectKind::Plain, Prototype::Object(class.clone()));
        obj.set("x", Value::from(x));
        Value::Object(obj)
    };
    let options = Options::default();
    assert!(equate::equals(&instance(1), &instance(1), &options));
    assert!(!equate::equals(&instance(1), &instance(2), &options));
    assert!(!equate::equals(&instance(1), &parse!("{ x: 1 }"), &options));
}

#[test]
fn own_keys() {
    let sym = Symbol::new(Some("tag"));
    let with_symbol = |value: i32| {
        let obj = Object::plain();
        obj.set("a", Value::from(1));
        obj.set(sym.clone(), Value::from(value));
        Value::Object(obj)
    };
    let options = Options::default();
    let own_keys = Options::new().own_keys(true);
    assert!(equate::equals(&with_symbol(1), &with_symbol(2), &options));
    assert!(!equate::equals(&with_symbol(1), &with_symbol(2), &own_keys));
    assert!(equate::equals(&with_symbol(1), &with_symbol(1), &own_keys));
    assert!(!equate::equals(&with_symbol(1), &parse!("{ a: 1 }"), &own_keys));
    assert!(equate::equals(&with_symbol(1), &parse!("{ a: 1 }"), &options));

    let hidden = Object::plain();
    hidden.set("a", Value::from(1));
    hidden.define("b", Property::data(Value::from(2)).enumerable(false));
    let hidden = Value::Object(hidden);
    assert!(equate::equals(&hidden, &parse!("{ a: 1 }"), &options));
    assert!(!equate::equals(&hidden, &parse!("{ a: 1 }"), &own_keys));
    assert!(!equate::equals(&hidden, &parse!("{ a: 1, b: 2 }"), &options));
    assert!(equate::equals(
        &hidden,
        &parse!("{ a: 1, b: 2 }"),
        &own_keys
    ));
}

#[test]
fn own_keys_through_options_object() {
    equal![
        "{ [Symbol('s')]: 1 }" => "{}"
    ];
    unequal!["{ ownKeys: true }";
        "{ [Symbol('s')]: 1 }" => "{}",
        "{ [Symbol('s')]: 1 }" => "{ [Symbol('s')]: 1 }"
    ];
}

#[test]
fn descriptors() {
    let frozen = Object::plain();
    frozen.define("a", Property::data(Value::from(1)).writable(false).configurable(false));
    let frozen = Value::Object(frozen);
    let plain = parse!("{ a: 1 }");
    let options = Options::new().compare_descriptors(true);

    assert!(equate::equals(&frozen, &plain, &Options::default()));
    assert!(!equate::equals(&frozen, &plain, &options));
    assert!(equate::equals(&plain, &parse!("{ a: 1 }"), &options));

    let hidden = Object::plain();
    hidden.define("a", Property::data(Value::from(1)).enumerable(false));
    let hidden = Value::Object(hidden);
    assert!(!equate::equals(&hidden, &plain, &options.clone().own_keys(true)));
}

#[test]
fn accessors_are_never_invoked() {
    let getter = Value::Object(Object::function(Some("get")));
    let accessor = |get: &Value| {
        let obj = Object::plain();
        obj.define("a", Property::accessor(Some(get.clone()), None));
        Value::Object(obj)
    };
    let other = Value::Object(Object::function(Some("get")));
    let options = Options::default();

    assert!(equate::equals(&accessor(&getter), &accessor(&getter), &options));
    assert!(!equate::equals(&accessor(&getter), &accessor(&other), &options));
    assert!(!equate::equals(&accessor(&getter), &parse!("{ a: undefined }"), &options));
    assert!(equate::equals(
        &accessor(&getter),
        &accessor(&getter),
        &Options::new().compare_descriptors(true)
    ));
}
