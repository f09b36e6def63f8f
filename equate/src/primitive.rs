use crate::number::{self, bigint_equals_number, string_to_bigint, string_to_number};
use crate::object::{Object, ObjectKind, Prototype};
use crate::value::Value;

/// Same Value
///
/// Strict comparison in which NaN equals itself and the two zeros are
/// distinct. Objects and symbols compare by identity.
pub fn same_value(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            (x.is_nan() && y.is_nan()) || (x == y && x.is_sign_negative() == y.is_sign_negative())
        }
        _ => a == b,
    }
}

/// Same Value Zero
///
/// The comparison used for collection membership: like [`same_value`],
/// except that `+0` and `-0` are the same key.
pub fn same_value_zero(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => (x.is_nan() && y.is_nan()) || x == y,
        _ => a == b,
    }
}

/// Loosely Equal
///
/// Coercive equality:
///
/// * null and undefined equal each other and nothing else
/// * numbers, strings, bigints and booleans convert to a common numeric
///   type before comparing
/// * an object compared with a primitive is first converted to a
///   primitive; objects that have none are unequal to every primitive
/// * two objects, or two symbols, are equal only if identical
///
/// NaN is never loosely equal to anything, itself included.
pub fn loosely_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined | Value::Null, Value::Undefined | Value::Null) => true,
        (Value::Undefined | Value::Null, _) | (_, Value::Undefined | Value::Null) => false,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::BigInt(x), Value::BigInt(y)) => x == y,
        (Value::Symbol(x), Value::Symbol(y)) => x == y,
        (Value::Object(x), Value::Object(y)) => x == y,
        (Value::Number(x), Value::String(y)) | (Value::String(y), Value::Number(x)) => {
            *x == string_to_number(y)
        }
        (Value::BigInt(x), Value::String(y)) | (Value::String(y), Value::BigInt(x)) => {
            string_to_bigint(y).as_ref() == Some(x)
        }
        (Value::Bool(x), other) | (other, Value::Bool(x)) => {
            loosely_equal(&Value::Number(*x as u8 as f64), other)
        }
        (Value::Object(obj), other) | (other, Value::Object(obj)) => match to_primitive(obj) {
            Some(prim) => loosely_equal(&prim, other),
            None => false,
        },
        (Value::BigInt(x), Value::Number(y)) | (Value::Number(y), Value::BigInt(x)) => {
            bigint_equals_number(x, *y)
        }
        _ => false,
    }
}

/// Compare
///
/// The primitive comparator: [`loosely_equal`] when `loose` is set,
/// otherwise [`same_value`].
pub fn compare(a: &Value, b: &Value, loose: bool) -> bool {
    match loose {
        true => loosely_equal(a, b),
        false => same_value(a, b),
    }
}

/// To Primitive
///
/// Convert an object to the primitive it yields under coercion. Boxed
/// values unwrap, lists join their elements with commas, and most other
/// objects produce their string form. Objects without a prototype,
/// functions and dates have no primitive form here and return None.
pub fn to_primitive(obj: &Object) -> Option<Value> {
    to_primitive_guarded(obj, &mut vec![])
}

fn to_primitive_guarded(obj: &Object, seen: &mut Vec<Object>) -> Option<Value> {
    if obj.prototype() == Prototype::Null {
        return None;
    }
    Some(match obj.kind() {
        ObjectKind::Boxed(boxed) => boxed.primitive(),
        ObjectKind::Date(_) | ObjectKind::Function(_) => return None,
        ObjectKind::Array(elements) => {
            // a list that contains itself joins as if the inner one were empty
            if seen.contains(obj) {
                return Some(Value::String(String::new()));
            }
            seen.push(obj.clone());
            let elements = elements.borrow().clone();
            let joined = join(elements.iter().map(Option::as_ref), seen);
            seen.pop();
            Value::String(joined?)
        }
        ObjectKind::TypedArray(array) => {
            let elements = array.elements();
            Value::String(join(elements.iter().map(Some), seen)?)
        }
        ObjectKind::RegExp(regexp) => Value::String(regexp.to_string()),
        ObjectKind::Error(error) => {
            let name = element_string(error.name(), seen)?;
            let message = element_string(error.message(), seen)?;
            Value::String(match (name.is_empty(), message.is_empty()) {
                (_, true) => name,
                (true, false) => message,
                (false, false) => format!("{}: {}", name, message),
            })
        }
        ObjectKind::Url(url) => Value::String(url.as_str().to_string()),
        ObjectKind::UrlSearchParams(params) => Value::String(params.serialize()),
        kind => Value::String(format!("[object {}]", kind.tag())),
    })
}

fn join<'a, T: Iterator<Item = Option<&'a Value>>>(values: T, seen: &mut Vec<Object>) -> Option<String> {
    let mut parts = vec![];
    for value in values {
        parts.push(match value {
            None | Some(Value::Undefined | Value::Null) => String::new(),
            Some(value) => element_string(value, seen)?,
        });
    }
    Some(parts.join(","))
}

fn element_string(value: &Value, seen: &mut Vec<Object>) -> Option<String> {
    match value {
        Value::Undefined => Some("undefined".into()),
        Value::Null => Some("null".into()),
        Value::Bool(val) => Some(val.to_string()),
        Value::Number(val) => Some(number::to_string(*val)),
        Value::BigInt(val) => Some(val.to_string()),
        Value::String(val) => Some(val.clone()),
        Value::Symbol(_) => None,
        Value::Object(obj) => element_string(&to_primitive_guarded(obj, seen)?, seen),
    }
}
