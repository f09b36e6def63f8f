//! The catch-all structural case.
use crate::case::{Case, CaseDescriptor};
use crate::cases::{Nested, objects};
use crate::object::{Object, Property, PropertyKey, Slot};
use crate::options::Options;
use crate::pipeline::Pipeline;
use crate::primitive;
use crate::value::Value;

/// Objects
///
/// Accepts every pair, so it must be the last case of a pipeline. Objects
/// are equal when they have the same set of keys, in any order, and equal
/// values under each key.
///
/// Only enumerable string keys are considered unless `ownKeys` is set,
/// in which case symbol and non-enumerable keys are too. With
/// `compareDescriptors`, each property's attributes must also agree.
/// Accessors are never invoked: accessor properties are equal when they
/// share the same getter and setter.
pub fn object() -> Case {
    Case::with_descriptor(
        |_, _, _| true,
        compare_objects,
        CaseDescriptor::builtin(
            "object",
            &["deep", "depth", "loose", "ownKeys", "compareDescriptors"],
        ),
    )
}

fn compare_objects(a: &Value, b: &Value, options: &Options, pipeline: &Pipeline) -> bool {
    let (a, b) = match objects(a, b) {
        Some(objects) => objects,
        None => return false,
    };
    let keys = |obj: &Object| -> Vec<PropertyKey> {
        match options.own_keys {
            true => obj.own_keys(),
            false => obj.keys(),
        }
    };
    let (a_keys, b_keys) = (keys(a), keys(b));
    if a_keys.len() != b_keys.len() || !a_keys.iter().all(|key| b_keys.contains(key)) {
        return false;
    }

    let nested = Nested::new(options, pipeline);
    a_keys.iter().all(|key| {
        let (x, y) = match (a.get_own_property(key), b.get_own_property(key)) {
            (Some(x), Some(y)) => (x, y),
            _ => return false,
        };
        if options.compare_descriptors && !same_attributes(&x, &y) {
            return false;
        }
        match (&x.slot, &y.slot) {
            (Slot::Data { value: x, .. }, Slot::Data { value: y, .. }) => nested.equals(x, y),
            (Slot::Accessor { get: xg, set: xs }, Slot::Accessor { get: yg, set: ys }) => {
                same_function(xg, yg) && same_function(xs, ys)
            }
            _ => false,
        }
    })
}

fn same_attributes(a: &Property, b: &Property) -> bool {
    a.enumerable == b.enumerable
        && a.configurable == b.configurable
        && match (&a.slot, &b.slot) {
            (Slot::Data { writable: x, .. }, Slot::Data { writable: y, .. }) => x == y,
            (Slot::Accessor { .. }, Slot::Accessor { .. }) => true,
            _ => false,
        }
}

fn same_function(a: &Option<Value>, b: &Option<Value>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => primitive::same_value(a, b),
        _ => false,
    }
}
