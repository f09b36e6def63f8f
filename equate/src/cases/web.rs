//! Cases for URLs and query parameter lists.
use crate::case::{Case, CaseDescriptor};
use crate::cases::{both, objects};
use crate::object::ObjectKind;

/// URLs compare by their serialized, normalized form, so host case and a
/// default port do not matter while query order and fragment do.
pub fn url() -> Case {
    Case::with_descriptor(
        |a, b, _| both(a, b, |kind| matches!(kind, ObjectKind::Url(_))),
        |a, b, _, _| match objects(a, b).map(|(a, b)| (a.kind(), b.kind())) {
            Some((ObjectKind::Url(a), ObjectKind::Url(b))) => a.as_str() == b.as_str(),
            _ => false,
        },
        CaseDescriptor::builtin("url", &[]),
    )
}

/// Query parameter lists are equal if they hold the same key/value pairs
/// the same number of times, in any order.
pub fn url_search_params() -> Case {
    Case::with_descriptor(
        |a, b, _| both(a, b, |kind| matches!(kind, ObjectKind::UrlSearchParams(_))),
        |a, b, _, _| match objects(a, b).map(|(a, b)| (a.kind(), b.kind())) {
            Some((ObjectKind::UrlSearchParams(a), ObjectKind::UrlSearchParams(b))) => {
                let (mut a, mut b) = (a.pairs(), b.pairs());
                a.sort();
                b.sort();
                a == b
            }
            _ => false,
        },
        CaseDescriptor::builtin("url_search_params", &[]),
    )
}
