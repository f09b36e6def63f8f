//! Cases that settle a comparison without looking inside either value.
use crate::case::{Case, CaseDescriptor};
use crate::object::ObjectKind;
use crate::options::Options;
use crate::pipeline::Pipeline;
use crate::primitive;
use crate::value::Value;

fn accept(_: &Value, _: &Value, _: &Options, _: &Pipeline) -> bool {
    true
}

pub(crate) fn reject(_: &Value, _: &Value, _: &Options, _: &Pipeline) -> bool {
    false
}

/// Values that are the same value are equal. Under `loose`, NaN is left
/// to the later cases since it is never loosely equal to itself.
pub fn identity() -> Case {
    Case::with_descriptor(
        |a, b, options| primitive::same_value(a, b) && !(options.loose && a.is_nan()),
        accept,
        CaseDescriptor::builtin("identity", &["loose"]),
    )
}

/// Under `loose`, values that are coercively equal are equal. Symbols
/// never take part in coercion.
pub fn loose() -> Case {
    Case::with_descriptor(
        |a, b, options| {
            options.loose && !a.is_symbol() && !b.is_symbol() && primitive::loosely_equal(a, b)
        },
        accept,
        CaseDescriptor::builtin("loose", &["loose"]),
    )
}

/// Null is only equal to itself, which identity has already accepted.
pub fn null() -> Case {
    Case::with_descriptor(
        |a, b, _| a.is_null() != b.is_null(),
        reject,
        CaseDescriptor::builtin("null", &[]),
    )
}

/// Boxed primitives of the same kind compare by their primitive value.
pub fn boxed() -> Case {
    Case::with_descriptor(
        |a, b, _| match (a, b) {
            (Value::Object(a), Value::Object(b)) => match (a.kind(), b.kind()) {
                (ObjectKind::Boxed(a), ObjectKind::Boxed(b)) => a.same_kind(b),
                _ => false,
            },
            _ => false,
        },
        |a, b, options, _| match (a, b) {
            (Value::Object(a), Value::Object(b)) => match (a.kind(), b.kind()) {
                (ObjectKind::Boxed(a), ObjectKind::Boxed(b)) => {
                    primitive::compare(&a.primitive(), &b.primitive(), options.loose)
                }
                _ => false,
            },
            _ => false,
        },
        CaseDescriptor::builtin("boxed", &["loose"]),
    )
}

/// Once identity and loose equality have had their say, a primitive or a
/// function is unequal to everything.
pub fn not_object() -> Case {
    Case::with_descriptor(
        |a, b, _| a.type_of() != "object" || b.type_of() != "object",
        reject,
        CaseDescriptor::builtin("not_object", &[]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cases::run;
    use crate::{array, parse, value};

    #[test]
    fn identity_case() {
        let options = Options::default();
        let arr = array![1];
        assert_eq!(run(identity(), &arr, &arr.clone(), &options), Some(true));
        assert_eq!(run(identity(), &value!(f64::NAN), &value!(f64::NAN), &options), Some(true));
        assert_eq!(run(identity(), &value!(0.0), &value!(-0.0), &options), None);
        assert_eq!(run(identity(), &array![1], &array![1], &options), None);
        let loose_options = Options::new().loose(true);
        assert_eq!(run(identity(), &value!(f64::NAN), &value!(f64::NAN), &loose_options), None);
        assert_eq!(run(identity(), &arr, &arr.clone(), &loose_options), Some(true));
    }

    #[test]
    fn loose_case() {
        let loose_options = Options::new().loose(true);
        assert_eq!(run(loose(), &value!(1), &value!("1"), &loose_options), Some(true));
        assert_eq!(run(loose(), &value!(1), &value!("1"), &Options::default()), None);
        let sym = Value::new_symbol(None);
        assert_eq!(run(loose(), &sym, &sym.clone(), &loose_options), None);
        assert_eq!(run(loose(), &value!(f64::NAN), &value!(f64::NAN), &loose_options), None);
    }

    #[test]
    fn null_case() {
        let options = Options::default();
        assert_eq!(run(null(), &Value::Null, &value!(0), &options), Some(false));
        assert_eq!(run(null(), &Value::Null, &Value::Undefined, &options), Some(false));
        assert_eq!(run(null(), &Value::Null, &Value::Null, &options), None);
        assert_eq!(run(null(), &value!(1), &value!(2), &options), None);
    }

    #[test]
    fn boxed_case() {
        let options = Options::default();
        let a = parse!("new Number(1)");
        assert_eq!(run(boxed(), &a, &parse!("new Number(1)"), &options), Some(true));
        assert_eq!(run(boxed(), &a, &parse!("new Number(2)"), &options), Some(false));
        assert_eq!(run(boxed(), &a, &parse!("new String('1')"), &options), None);
        assert_eq!(run(boxed(), &a, &value!(1), &options), None);
        assert_eq!(
            run(boxed(), &parse!("new Number(-0)"), &parse!("new Number(0)"), &options),
            Some(false)
        );
        assert_eq!(
            run(boxed(), &parse!("new Number(-0)"), &parse!("new Number(0)"), &Options::new().loose(true)),
            Some(true)
        );
    }

    #[test]
    fn not_object_case() {
        let options = Options::default();
        assert_eq!(run(not_object(), &value!(1), &array![], &options), Some(false));
        assert_eq!(run(not_object(), &parse!("function f() {}"), &array![], &options), Some(false));
        assert_eq!(run(not_object(), &Value::Null, &array![], &options), None);
        assert_eq!(run(not_object(), &array![], &array![], &options), None);
    }
}
