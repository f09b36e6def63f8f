use crate::char::write_escaped_str;
use crate::number;
use crate::object::{Object, ObjectKind, PropertyKey, Slot};
use num::BigInt;
use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Value
///
/// [`Value`] is a dynamically typed script value. Primitives are held
/// inline, while objects and symbols are reference counted handles whose
/// identity is the allocation itself.
///
/// `PartialEq` on [`Value`] is strict equality: numbers compare by IEEE
/// equality (so `NaN != NaN` and `0 == -0`), objects and symbols by
/// identity, and everything else by content.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    BigInt(BigInt),
    String(String),
    Symbol(Symbol),
    Object(Object),
}

impl Value {
    pub fn new_string(val: &str) -> Value {
        Value::String(val.into())
    }

    pub fn new_symbol(description: Option<&str>) -> Value {
        Value::Symbol(Symbol::new(description))
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_nan(&self) -> bool {
        matches!(self, Value::Number(val) if val.is_nan())
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, Value::Symbol(_))
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(val) => Some(*val),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(val) => Some(val),
            _ => None,
        }
    }

    /// Type Of
    ///
    /// Return the runtime kind of this value as reported by `typeof`.
    /// Note that null reports "object" and callable objects report
    /// "function".
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "object",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::BigInt(_) => "bigint",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Object(obj) if obj.is_callable() => "function",
            Value::Object(_) => "object",
        }
    }

    /// Truthy
    ///
    /// Return the boolean this value coerces to.
    pub fn truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(val) => *val,
            Value::Number(val) => !(*val == 0.0 || val.is_nan()),
            Value::BigInt(val) => *val != BigInt::from(0),
            Value::String(val) => !val.is_empty(),
            Value::Symbol(_) | Value::Object(_) => true,
        }
    }
}

impl From<bool> for Value {
    fn from(val: bool) -> Self {
        Value::Bool(val)
    }
}

impl From<f64> for Value {
    fn from(val: f64) -> Self {
        Value::Number(val)
    }
}

impl From<i32> for Value {
    fn from(val: i32) -> Self {
        Value::Number(val.into())
    }
}

impl From<&str> for Value {
    fn from(val: &str) -> Self {
        Value::String(val.into())
    }
}

impl From<String> for Value {
    fn from(val: String) -> Self {
        Value::String(val)
    }
}

impl From<BigInt> for Value {
    fn from(val: BigInt) -> Self {
        Value::BigInt(val)
    }
}

impl From<Symbol> for Value {
    fn from(val: Symbol) -> Self {
        Value::Symbol(val)
    }
}

impl From<Object> for Value {
    fn from(val: Object) -> Self {
        Value::Object(val)
    }
}

impl From<Vec<Value>> for Value {
    fn from(val: Vec<Value>) -> Self {
        Value::Object(Object::array(val.into_iter().map(Some).collect()))
    }
}

/// Symbol
///
/// A unique primitive. Two symbols are the same symbol only if they share
/// an allocation; the description is informational.
#[derive(Clone)]
pub struct Symbol(Rc<Option<String>>);

impl Symbol {
    pub fn new(description: Option<&str>) -> Symbol {
        Symbol(Rc::new(description.map(String::from)))
    }

    pub fn description(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Rc::as_ptr(&self.0).hash(state)
    }
}

impl Debug for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or(""))
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut seen = vec![];
        write_value(self, f, &mut seen)
    }
}

/// Write Value
///
/// Write `value` in literal notation. `seen` holds the objects currently
/// being written so that self-referential structures print `[Circular]`
/// instead of recursing forever.
///
/// The alternate flag controls whether top level strings are quoted;
/// strings nested inside objects are always quoted.
fn write_value(value: &Value, f: &mut Formatter<'_>, seen: &mut Vec<Object>) -> std::fmt::Result {
    match value {
        Value::Undefined => write!(f, "undefined"),
        Value::Null => write!(f, "null"),
        Value::Bool(val) => write!(f, "{}", val),
        Value::Number(val) if *val == 0.0 && val.is_sign_negative() => write!(f, "-0"),
        Value::Number(val) => write!(f, "{}", number::to_string(*val)),
        Value::BigInt(val) => write!(f, "{}n", val),
        Value::String(val) => match f.alternate() || !seen.is_empty() {
            false => write!(f, "{}", val),
            true => write_escaped_str(val, f),
        },
        Value::Symbol(sym) => match sym.description() {
            Some(desc) => {
                write!(f, "Symbol(")?;
                write_escaped_str(desc, f)?;
                write!(f, ")")
            }
            None => write!(f, "Symbol()"),
        },
        Value::Object(obj) => {
            if seen.iter().any(|it| it == obj) {
                return write!(f, "[Circular]");
            }
            seen.push(obj.clone());
            let result = write_object(obj, f, seen);
            seen.pop();
            result
        }
    }
}

fn write_list<'a, T: IntoIterator<Item = Option<&'a Value>>>(
    values: T,
    f: &mut Formatter<'_>,
    seen: &mut Vec<Object>,
) -> std::fmt::Result {
    write!(f, "[")?;
    let mut first = true;
    let mut trailing_hole = false;
    for value in values {
        if !first {
            write!(f, ",")?;
        }
        trailing_hole = value.is_none();
        if let Some(value) = value {
            if !first {
                write!(f, " ")?;
            }
            write_value(value, f, seen)?;
        }
        first = false;
    }
    // a trailing comma is elided when read back, so a final hole needs one more
    if trailing_hole {
        write!(f, ",")?;
    }
    write!(f, "]")
}

fn write_object(obj: &Object, f: &mut Formatter<'_>, seen: &mut Vec<Object>) -> std::fmt::Result {
    match obj.kind() {
        ObjectKind::Plain => {
            let keys = obj.own_keys();
            if keys.is_empty() {
                return write!(f, "{{}}");
            }
            write!(f, "{{ ")?;
            for (idx, key) in keys.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                match key {
                    PropertyKey::String(name) => write_escaped_str(name, f)?,
                    PropertyKey::Symbol(sym) => {
                        write!(f, "[")?;
                        write_value(&Value::Symbol(sym.clone()), f, seen)?;
                        write!(f, "]")?;
                    }
                }
                write!(f, ": ")?;
                match obj.get_own_property(key).map(|prop| prop.slot) {
                    Some(Slot::Data { value, .. }) => write_value(&value, f, seen)?,
                    Some(Slot::Accessor { .. }) => write!(f, "[Getter/Setter]")?,
                    None => write!(f, "undefined")?,
                }
            }
            write!(f, " }}")
        }
        ObjectKind::Array(elements) => write_list(elements.borrow().iter().map(Option::as_ref), f, seen),
        ObjectKind::Boxed(boxed) => {
            write!(f, "new {}(", boxed.constructor_name())?;
            write_value(&boxed.primitive(), f, &mut vec![obj.clone()])?;
            write!(f, ")")
        }
        ObjectKind::Date(time) => write!(f, "new Date({})", number::to_string(*time)),
        ObjectKind::RegExp(regexp) => write!(f, "{}", regexp),
        ObjectKind::ArrayBuffer(buffer) => {
            write!(f, "new ArrayBuffer(")?;
            write_bytes(&buffer.bytes(), f)?;
            write!(f, ")")
        }
        ObjectKind::DataView(view) => {
            write!(f, "new DataView(new ArrayBuffer(")?;
            write_bytes(&view.buffer().bytes(), f)?;
            write!(f, "), {}, {})", view.offset(), view.len())
        }
        ObjectKind::TypedArray(array) => {
            write!(f, "new {}(", array.kind().name())?;
            let elements = array.elements();
            write_list(elements.iter().map(Some), f, seen)?;
            write!(f, ")")
        }
        ObjectKind::Map(entries) => {
            write!(f, "new Map([")?;
            for (idx, (key, value)) in entries.borrow().iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "[")?;
                write_value(key, f, seen)?;
                write!(f, ", ")?;
                write_value(value, f, seen)?;
                write!(f, "]")?;
            }
            write!(f, "])")
        }
        ObjectKind::Set(elements) => {
            write!(f, "new Set(")?;
            write_list(elements.borrow().iter().map(Some), f, seen)?;
            write!(f, ")")
        }
        ObjectKind::WeakMap => write!(f, "new WeakMap()"),
        ObjectKind::WeakSet => write!(f, "new WeakSet()"),
        ObjectKind::WeakRef => write!(f, "new WeakRef({{}})"),
        ObjectKind::Function(name) => write!(f, "function {}() {{}}", name.as_deref().unwrap_or("")),
        ObjectKind::Promise => write!(f, "new Promise()"),
        ObjectKind::Error(error) => {
            write!(f, "new {}(", error.kind().name())?;
            write_value(error.message(), f, seen)?;
            if let Some(cause) = error.cause() {
                write!(f, ", {{ cause: ")?;
                write_value(cause, f, seen)?;
                write!(f, " }}")?;
            }
            write!(f, ")")
        }
        ObjectKind::Url(url) => {
            write!(f, "new URL(")?;
            write_escaped_str(url.as_str(), f)?;
            write!(f, ")")
        }
        ObjectKind::UrlSearchParams(params) => {
            write!(f, "new URLSearchParams(")?;
            write_escaped_str(&params.serialize(), f)?;
            write!(f, ")")
        }
    }
}

fn write_bytes(bytes: &[u8], f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "[")?;
    for (idx, byte) in bytes.iter().enumerate() {
        if idx > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", byte)?;
    }
    write!(f, "]")
}

#[macro_export]
macro_rules! value {
    () => {
        $crate::value::Value::Undefined
    };
    ($elt:expr) => {
        $crate::value::Value::from($elt)
    };
}

#[macro_export]
macro_rules! array {
    () => {
        $crate::value::Value::from(Vec::<$crate::value::Value>::new())
    };
    ($($elt:expr),+ $(,)?) => {{
        let v = vec![$($crate::value::Value::from($elt),)+];
        $crate::value::Value::from(v)
    }};
}

#[macro_export]
macro_rules! object {
    () => {
        $crate::value::Value::Object($crate::object::Object::plain())
    };
    ($($key:expr => $elt:expr),+ $(,)?) => {{
        let obj = $crate::object::Object::plain();
        $(obj.set($key, $crate::value::Value::from($elt));)+
        $crate::value::Value::Object(obj)
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_eq() {
        assert_eq!(Value::from(16), Value::from(16.0));
        assert_eq!(Value::from("foo"), Value::from("foo"));
        assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
        assert_eq!(Value::Number(0.0), Value::Number(-0.0));
        assert_ne!(array![1, 2], array![1, 2]);

        let arr = array![1, 2];
        assert_eq!(arr.clone(), arr);
    }

    #[test]
    fn symbols_are_unique() {
        let sym = Symbol::new(Some("foo"));
        assert_eq!(sym.clone(), sym);
        assert_ne!(Symbol::new(Some("foo")), Symbol::new(Some("foo")));
        assert_eq!(sym.description(), Some("foo"));
    }

    #[test]
    fn type_of() {
        assert_eq!(Value::Undefined.type_of(), "undefined");
        assert_eq!(Value::Null.type_of(), "object");
        assert_eq!(value!(true).type_of(), "boolean");
        assert_eq!(value!(1).type_of(), "number");
        assert_eq!(value!(BigInt::from(1)).type_of(), "bigint");
        assert_eq!(value!("foo").type_of(), "string");
        assert_eq!(Value::new_symbol(None).type_of(), "symbol");
        assert_eq!(array![].type_of(), "object");
        assert_eq!(value!(Object::function(Some("f"))).type_of(), "function");
    }

    #[test]
    fn truthy() {
        assert!(!Value::Undefined.truthy());
        assert!(!Value::Null.truthy());
        assert!(!value!(0).truthy());
        assert!(!value!(f64::NAN).truthy());
        assert!(!value!("").truthy());
        assert!(value!("0").truthy());
        assert!(value!(-1).truthy());
        assert!(object!().truthy());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Value::Undefined), "undefined");
        assert_eq!(format!("{}", value!(42)), "42");
        assert_eq!(format!("{}", value!(-0.0)), "-0");
        assert_eq!(format!("{}", value!(1.5)), "1.5");
        assert_eq!(format!("{}", value!("foo")), "foo");
        assert_eq!(format!("{:#}", value!("foo")), "\"foo\"");
        assert_eq!(format!("{}", array![1, "a", true]), "[1, \"a\", true]");
        assert_eq!(format!("{}", object! { "x" => 1, "y" => array![] }), "{ \"x\": 1, \"y\": [] }");
        assert_eq!(format!("{}", Value::from(BigInt::from(7))), "7n");
    }

    #[test]
    fn display_holes() {
        let arr = Value::Object(Object::array(vec![Some(value!(1)), None, Some(value!(3))]));
        assert_eq!(format!("{}", arr), "[1,, 3]");
    }

    #[test]
    fn display_circular() {
        let obj = Object::plain();
        obj.set("self", Value::Object(obj.clone()));
        assert_eq!(format!("{}", Value::Object(obj)), "{ \"self\": [Circular] }");
    }
}
