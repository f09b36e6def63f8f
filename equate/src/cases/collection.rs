//! Cases for arrays, sets and maps.
use crate::case::{Case, CaseDescriptor};
use crate::cases::{Nested, both, objects};
use crate::object::ObjectKind;
use crate::options::Options;
use crate::pipeline::Pipeline;
use crate::primitive;
use crate::value::Value;

/// Arrays
///
/// Arrays of equal length compare index by index. A hole only matches a
/// hole, so `[1, , 3]` differs from `[1, undefined, 3]`.
pub fn array() -> Case {
    Case::with_descriptor(
        |a, b, _| both(a, b, |kind| matches!(kind, ObjectKind::Array(_))),
        compare_arrays,
        CaseDescriptor::builtin("array", &["deep", "depth", "loose"]),
    )
}

fn compare_arrays(a: &Value, b: &Value, options: &Options, pipeline: &Pipeline) -> bool {
    let (a, b) = match objects(a, b).and_then(|(a, b)| Some((a.as_array()?, b.as_array()?))) {
        Some(arrays) => arrays,
        None => return false,
    };
    if a.len() != b.len() {
        return false;
    }
    let nested = Nested::new(options, pipeline);
    a.iter().zip(b.iter()).all(|pair| match pair {
        (Some(a), Some(b)) => nested.equals(a, b),
        (None, None) => true,
        _ => false,
    })
}

/// Sets
///
/// Sets of equal size are equal if every element of the first has a
/// counterpart in the second. Without `deep` the counterpart is found by
/// set membership. With `deep`, each element of the second set may serve
/// as the counterpart of only one element of the first.
pub fn set() -> Case {
    Case::with_descriptor(
        |a, b, _| both(a, b, |kind| matches!(kind, ObjectKind::Set(_))),
        compare_sets,
        CaseDescriptor::builtin("set", &["deep", "depth", "loose"]),
    )
}

fn compare_sets(a: &Value, b: &Value, options: &Options, pipeline: &Pipeline) -> bool {
    let (a, b) = match objects(a, b).and_then(|(a, b)| Some((a.as_set()?, b.as_set()?))) {
        Some(sets) => sets,
        None => return false,
    };
    if a.len() != b.len() {
        return false;
    }
    if !options.deep {
        return a
            .iter()
            .all(|x| b.iter().any(|y| primitive::same_value_zero(x, y)));
    }
    let nested = Nested::new(options, pipeline);
    match_all(a.as_slice(), b.as_slice(), |x, y| nested.equals(x, y))
}

/// Maps
///
/// Maps of equal size are equal if every entry of the first has a
/// counterpart in the second. Without `deep`, the counterpart is the entry
/// with the same key and its value must be primitively equal. With
/// `deep`, a counterpart must have an equal key and an equal value, and
/// serves as the counterpart of only one entry.
pub fn map() -> Case {
    Case::with_descriptor(
        |a, b, _| both(a, b, |kind| matches!(kind, ObjectKind::Map(_))),
        compare_maps,
        CaseDescriptor::builtin("map", &["deep", "depth", "loose"]),
    )
}

fn compare_maps(a: &Value, b: &Value, options: &Options, pipeline: &Pipeline) -> bool {
    let (a, b) = match objects(a, b).and_then(|(a, b)| Some((a.as_map()?, b.as_map()?))) {
        Some(maps) => maps,
        None => return false,
    };
    if a.len() != b.len() {
        return false;
    }
    if !options.deep {
        return a.iter().all(|(key, x)| {
            match b.iter().find(|(it, _)| primitive::same_value_zero(key, it)) {
                Some((_, y)) => primitive::compare(x, y, options.loose),
                None => false,
            }
        });
    }
    let nested = Nested::new(options, pipeline);
    match_all(a.as_slice(), b.as_slice(), |(ka, va), (kb, vb)| {
        nested.equals(ka, kb) && nested.equals(va, vb)
    })
}

/// Match All
///
/// Greedily pair every item of `a` with the first unused item of `b`
/// that `matches` it. Returns false as soon as an item of `a` has no
/// unused counterpart.
fn match_all<T, F: Fn(&T, &T) -> bool>(a: &[T], b: &[T], matches: F) -> bool {
    let mut used = vec![false; b.len()];
    a.iter().all(|x| {
        let found = b
            .iter()
            .enumerate()
            .find(|(idx, y)| !used[*idx] && matches(x, y))
            .map(|(idx, _)| idx);
        match found {
            Some(idx) => {
                used[idx] = true;
                true
            }
            None => false,
        }
    })
}
