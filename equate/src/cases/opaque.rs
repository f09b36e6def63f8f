//! Cases for objects whose contents cannot be observed. Such objects are
//! only equal to themselves, which the identity case has already settled,
//! so each of these cases rejects.
use crate::case::{Case, CaseDescriptor};
use crate::cases::both;
use crate::cases::shortcut::reject;
use crate::object::ObjectKind;

pub fn weak_map() -> Case {
    Case::with_descriptor(
        |a, b, _| both(a, b, |kind| matches!(kind, ObjectKind::WeakMap)),
        reject,
        CaseDescriptor::builtin("weak_map", &[]),
    )
}

pub fn weak_set() -> Case {
    Case::with_descriptor(
        |a, b, _| both(a, b, |kind| matches!(kind, ObjectKind::WeakSet)),
        reject,
        CaseDescriptor::builtin("weak_set", &[]),
    )
}

pub fn weak_ref() -> Case {
    Case::with_descriptor(
        |a, b, _| both(a, b, |kind| matches!(kind, ObjectKind::WeakRef)),
        reject,
        CaseDescriptor::builtin("weak_ref", &[]),
    )
}

/// Functions. In the default pipeline `not_object` rejects functions
/// first; this case serves pipelines that leave `not_object` out.
pub fn function() -> Case {
    Case::with_descriptor(
        |a, b, _| both(a, b, |kind| matches!(kind, ObjectKind::Function(_))),
        reject,
        CaseDescriptor::builtin("function", &[]),
    )
}

pub fn promise() -> Case {
    Case::with_descriptor(
        |a, b, _| both(a, b, |kind| matches!(kind, ObjectKind::Promise)),
        reject,
        CaseDescriptor::builtin("promise", &[]),
    )
}
