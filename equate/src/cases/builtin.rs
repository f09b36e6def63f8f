//! Cases for built-in objects identified by their prototype or a single
//! internal slot.
use crate::case::{Case, CaseDescriptor};
use crate::cases::shortcut::reject;
use crate::cases::{Nested, both, objects};
use crate::object::ObjectKind;
use crate::primitive;
use crate::value::Value;

/// Objects with different prototypes are unequal.
pub fn prototype() -> Case {
    Case::with_descriptor(
        |a, b, _| match objects(a, b) {
            Some((a, b)) => a.prototype() != b.prototype(),
            None => false,
        },
        reject,
        CaseDescriptor::builtin("prototype", &[]),
    )
}

/// Dates compare by timestamp; two invalid dates are equal.
pub fn date() -> Case {
    Case::with_descriptor(
        |a, b, _| both(a, b, |kind| matches!(kind, ObjectKind::Date(_))),
        |a, b, _, _| match objects(a, b).map(|(a, b)| (a.kind(), b.kind())) {
            Some((ObjectKind::Date(a), ObjectKind::Date(b))) => {
                primitive::same_value(&Value::Number(*a), &Value::Number(*b))
            }
            _ => false,
        },
        CaseDescriptor::builtin("date", &[]),
    )
}

/// Regular expressions compare by source text and flags. The match
/// position is not part of the comparison.
pub fn regexp() -> Case {
    Case::with_descriptor(
        |a, b, _| both(a, b, |kind| matches!(kind, ObjectKind::RegExp(_))),
        |a, b, _, _| match objects(a, b).map(|(a, b)| (a.kind(), b.kind())) {
            Some((ObjectKind::RegExp(a), ObjectKind::RegExp(b))) => {
                a.source() == b.source() && a.flags() == b.flags()
            }
            _ => false,
        },
        CaseDescriptor::builtin("regexp", &[]),
    )
}

/// Errors
///
/// Errors compare by name and message, and by their causes when they
/// have one. A cause that is present on one side only makes the errors
/// unequal. Stack text is ignored.
pub fn error() -> Case {
    Case::with_descriptor(
        |a, b, _| both(a, b, |kind| matches!(kind, ObjectKind::Error(_))),
        |a, b, options, pipeline| match objects(a, b).map(|(a, b)| (a.kind(), b.kind())) {
            Some((ObjectKind::Error(a), ObjectKind::Error(b))) => {
                if !primitive::compare(a.name(), b.name(), options.loose)
                    || !primitive::compare(a.message(), b.message(), options.loose)
                {
                    return false;
                }
                match (a.cause(), b.cause()) {
                    (None, None) => true,
                    (Some(a), Some(b)) => Nested::new(options, pipeline).equals(a, b),
                    _ => false,
                }
            }
            _ => false,
        },
        CaseDescriptor::builtin("error", &["loose", "deep", "depth"]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cases::run;
    use crate::object::{ErrorData, ErrorKind, Object, Prototype};
    use crate::options::Options;
    use crate::parse;

    #[test]
    fn prototype_case() {
        let options = Options::default();
        assert_eq!(run(prototype(), &parse!("[]"), &parse!("{}"), &options), Some(false));
        assert_eq!(
            run(prototype(), &parse!("{}"), &parse!("{ __proto__: null }"), &options),
            Some(false)
        );
        assert_eq!(run(prototype(), &parse!("{}"), &parse!("{}"), &options), None);

        let proto = Object::plain();
        let a = Object::plain();
        let b = Object::plain();
        a.set_prototype(Prototype::Object(proto.clone()));
        b.set_prototype(Prototype::Object(proto));
        assert_eq!(
            run(prototype(), &Value::Object(a.clone()), &Value::Object(b), &options),
            None
        );
        assert_eq!(
            run(prototype(), &Value::Object(a), &parse!("{}"), &options),
            Some(false)
        );
    }

    #[test]
    fn date_case() {
        let options = Options::default();
        assert_eq!(run(date(), &parse!("new Date(5)"), &parse!("new Date(5)"), &options), Some(true));
        assert_eq!(run(date(), &parse!("new Date(5)"), &parse!("new Date(6)"), &options), Some(false));
        assert_eq!(
            run(date(), &parse!("new Date(NaN)"), &parse!("new Date('nope')"), &options),
            Some(true)
        );
        assert_eq!(run(date(), &parse!("new Date(5)"), &parse!("5"), &options), None);
    }

    #[test]
    fn regexp_case() {
        let options = Options::default();
        assert_eq!(run(regexp(), &parse!("/a/gi"), &parse!("/a/ig"), &options), Some(true));
        assert_eq!(run(regexp(), &parse!("/a/g"), &parse!("/a/"), &options), Some(false));
        assert_eq!(run(regexp(), &parse!("/a/"), &parse!("/b/"), &options), Some(false));
        assert_eq!(
            run(regexp(), &parse!("/a/"), &parse!("new RegExp('a')"), &options),
            Some(true)
        );
    }

    #[test]
    fn error_case() {
        let options = Options::default();
        assert_eq!(
            run(error(), &parse!("new Error('x')"), &parse!("new Error('x')"), &options),
            Some(true)
        );
        assert_eq!(
            run(error(), &parse!("new Error('x')"), &parse!("new Error('y')"), &options),
            Some(false)
        );
        assert_eq!(
            run(error(), &parse!("new Error('x')"), &parse!("new TypeError('x')"), &options),
            Some(false)
        );
    }

    #[test]
    fn error_stack_is_ignored() {
        let a = Object::new(ObjectKind::Error(
            ErrorData::new(ErrorKind::Error, "x", None).with_stack("at a"),
        ));
        let b = Object::new(ObjectKind::Error(
            ErrorData::new(ErrorKind::Error, "x", None).with_stack("at b"),
        ));
        assert_eq!(
            run(error(), &Value::Object(a), &Value::Object(b), &Options::default()),
            Some(true)
        );
    }

    #[test]
    fn error_names() {
        let a = Object::new(ObjectKind::Error(
            ErrorData::new(ErrorKind::Error, "x", None).with_name(Value::from("Custom")),
        ));
        let b = parse!("new Error('x')");
        assert_eq!(
            run(error(), &Value::Object(a), &b, &Options::default()),
            Some(false)
        );
    }

    #[test]
    fn error_causes() {
        let shallow = Options::default();
        let deep = Options::new().deep(true);
        let a = parse!("new Error('x', { cause: 1 })");
        let b = parse!("new Error('x', { cause: 1 })");
        let c = parse!("new Error('x')");
        assert_eq!(run(error(), &a, &b, &shallow), Some(true));
        assert_eq!(run(error(), &a, &c, &shallow), Some(false));
        assert_eq!(run(error(), &c, &a, &shallow), Some(false));

        let a = parse!("new Error('x', { cause: [1] })");
        let b = parse!("new Error('x', { cause: [1] })");
        assert_eq!(run(error(), &a, &b, &shallow), Some(false));
        assert_eq!(run(error(), &a, &b, &deep), Some(true));

        let a = parse!("new Error('x', { cause: undefined })");
        assert_eq!(run(error(), &a, &c, &shallow), Some(false));
    }

    #[test]
    fn loose_error_messages() {
        let a = Object::new(ObjectKind::Error(
            ErrorData::new(ErrorKind::Error, "1", None),
        ));
        let b = Object::new(ObjectKind::Error(
            ErrorData::new(ErrorKind::Error, "", None).with_message(Value::from(1)),
        ));
        let (a, b) = (Value::Object(a), Value::Object(b));
        assert_eq!(run(error(), &a, &b, &Options::default()), Some(false));
        assert_eq!(run(error(), &a, &b, &Options::new().loose(true)), Some(true));
    }
}
