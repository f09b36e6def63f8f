//! The case library: one comparison case per built-in value shape.
//!
//! Each constructor returns a named [`Case`]. [`library`] holds one
//! instance of every case keyed by name, and [`DEFAULT_ORDER`] lists the
//! names in the order the default pipeline evaluates them.
use crate::case::Case;
use crate::object::{Object, ObjectKind};
use crate::options::Options;
use crate::pipeline::Pipeline;
use crate::primitive;
use crate::value::Value;
use lazy_static::lazy_static;
use std::collections::BTreeMap;

mod binary;
mod builtin;
mod collection;
mod opaque;
mod plain;
mod shortcut;
mod web;

pub use binary::{array_buffer, data_view, typed_array};
pub use builtin::{date, error, prototype, regexp};
pub use collection::{array, map, set};
pub use opaque::{function, promise, weak_map, weak_ref, weak_set};
pub use plain::object;
pub use shortcut::{boxed, identity, loose, not_object, null};
pub use web::{url, url_search_params};

/// The case names in default pipeline order. Earlier cases take
/// precedence, and `object` accepts every pair so it must stay last.
pub const DEFAULT_ORDER: [&str; 23] = [
    "identity",
    "loose",
    "null",
    "boxed",
    "not_object",
    "prototype",
    "date",
    "regexp",
    "array_buffer",
    "data_view",
    "typed_array",
    "array",
    "set",
    "map",
    "weak_map",
    "weak_set",
    "weak_ref",
    "function",
    "promise",
    "error",
    "url",
    "url_search_params",
    "object",
];

lazy_static! {
    static ref LIBRARY: BTreeMap<String, Case> = [
        identity(),
        loose(),
        null(),
        boxed(),
        not_object(),
        prototype(),
        date(),
        regexp(),
        array_buffer(),
        data_view(),
        typed_array(),
        array(),
        set(),
        map(),
        weak_map(),
        weak_set(),
        weak_ref(),
        function(),
        promise(),
        error(),
        url(),
        url_search_params(),
        object(),
    ]
    .into_iter()
    .map(|case| (case.name().unwrap_or_default().to_string(), case))
    .collect();
}

/// Library
///
/// Every predefined case, keyed by name. The library is built once and
/// never changes; assemble a custom pipeline from it with
/// [`Pipeline::from_names`].
pub fn library() -> &'static BTreeMap<String, Case> {
    &LIBRARY
}

/// Both values are objects whose kind satisfies `test`.
pub(crate) fn both<F: Fn(&ObjectKind) -> bool>(a: &Value, b: &Value, test: F) -> bool {
    match (a, b) {
        (Value::Object(a), Value::Object(b)) => test(a.kind()) && test(b.kind()),
        _ => false,
    }
}

/// The object handles of a pair the guard has already accepted.
pub(crate) fn objects<'a>(a: &'a Value, b: &'a Value) -> Option<(&'a Object, &'a Object)> {
    Some((a.as_object()?, b.as_object()?))
}

/// Nested
///
/// Compares the values nested inside a composite value. When the options
/// permit descending, nested values go back through the pipeline under
/// the child options; otherwise they are compared as primitives.
pub(crate) struct Nested<'a> {
    pipeline: &'a Pipeline,
    child: Option<Options>,
    loose: bool,
}

impl<'a> Nested<'a> {
    pub fn new(options: &Options, pipeline: &'a Pipeline) -> Nested<'a> {
        Nested {
            pipeline,
            child: options.can_descend().then(|| options.descend()),
            loose: options.loose,
        }
    }

    pub fn equals(&self, a: &Value, b: &Value) -> bool {
        match &self.child {
            Some(child) => self.pipeline.equals(a, b, child),
            None => primitive::compare(a, b, self.loose),
        }
    }
}

/// Apply a single case the way the dispatch loop would: None if the guard
/// rejects the pair, otherwise the comparison result. Nested values are
/// compared by the default pipeline.
#[cfg(test)]
pub(crate) fn run(case: Case, a: &Value, b: &Value, options: &Options) -> Option<bool> {
    let pipeline = crate::pipeline::default_pipeline();
    case.guard(a, b, options)
        .then(|| case.compare(a, b, options, pipeline))
}
