//! Cases for raw byte buffers and the views over them.
use crate::case::{Case, CaseDescriptor};
use crate::cases::{both, objects};
use crate::object::ObjectKind;
use crate::primitive;

/// Buffers compare byte for byte.
pub fn array_buffer() -> Case {
    Case::with_descriptor(
        |a, b, _| both(a, b, |kind| matches!(kind, ObjectKind::ArrayBuffer(_))),
        |a, b, _, _| match objects(a, b).map(|(a, b)| (a.kind(), b.kind())) {
            Some((ObjectKind::ArrayBuffer(a), ObjectKind::ArrayBuffer(b))) => {
                *a.bytes() == *b.bytes()
            }
            _ => false,
        },
        CaseDescriptor::builtin("array_buffer", &[]),
    )
}

/// Data views compare by window offset and length, then by the bytes
/// inside the window. Bytes outside the window are ignored.
pub fn data_view() -> Case {
    Case::with_descriptor(
        |a, b, _| both(a, b, |kind| matches!(kind, ObjectKind::DataView(_))),
        |a, b, _, _| match objects(a, b).map(|(a, b)| (a.kind(), b.kind())) {
            Some((ObjectKind::DataView(a), ObjectKind::DataView(b))) => {
                a.offset() == b.offset() && a.len() == b.len() && a.bytes() == b.bytes()
            }
            _ => false,
        },
        CaseDescriptor::builtin("data_view", &[]),
    )
}

/// Typed Arrays
///
/// Typed arrays of the same element type and length compare element by
/// element: by same value, or under `loose` also by coercive equality,
/// so `+0` and `-0` elements match only when `loose` is set.
pub fn typed_array() -> Case {
    Case::with_descriptor(
        |a, b, _| both(a, b, |kind| matches!(kind, ObjectKind::TypedArray(_))),
        |a, b, options, _| match objects(a, b).map(|(a, b)| (a.kind(), b.kind())) {
            Some((ObjectKind::TypedArray(a), ObjectKind::TypedArray(b))) => {
                a.kind() == b.kind()
                    && a.len() == b.len()
                    && a.elements().iter().zip(b.elements().iter()).all(|(a, b)| {
                        primitive::same_value(a, b)
                            || (options.loose && primitive::loosely_equal(a, b))
                    })
            }
            _ => false,
        },
        CaseDescriptor::builtin("typed_array", &["loose"]),
    )
}
