use crate::char::unescape;
use crate::lex::{Token, TokenType};
use crate::number;
use crate::object::{
    Boxed, Buffer, ErrorKind, Object, ObjectKind, PropertyKey, Prototype, RegExp, SearchParams,
    Slot, TypedArray, TypedArrayKind, View,
};
use crate::parse::Error::{Eof, InvalidArgument, UnexpectedToken};
use crate::value::{Symbol, Value};
use std::iter::Peekable;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(thiserror::Error, Debug, Eq, PartialEq)]
pub enum Error {
    #[error("unexpected EOF")]
    Eof,
    #[error("unexpected token '{0}'")]
    UnexpectedToken(String),
    #[error("invalid number literal {0}")]
    InvalidNumber(String),
    #[error("invalid string literal {0}")]
    InvalidString(String),
    #[error("invalid regular expression {0}")]
    InvalidRegExp(String),
    #[error("{0} is not a constructor")]
    UnknownConstructor(String),
    #[error("invalid argument for {0}: {1}")]
    InvalidArgument(String, String),
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// Parse one value from the token stream.
///
/// # Arguments
/// *`cur` - an iterator over the token stream. The parser will only
///          advance the iterator enough to satisfy one value.
/// *`text` - the text backed by the token spans.
pub fn parse<'a, T: Iterator<Item = &'a Token>>(
    text: &str,
    cur: &mut Peekable<T>,
) -> Result<Value, Error> {
    let token = cur.next().ok_or(Eof)?;
    match token.token_type {
        TokenType::LeftBracket => parse_array(text, cur),
        TokenType::LeftBrace => parse_object(text, cur),
        TokenType::String => Ok(Value::String(parse_string(token.span(text))?)),
        TokenType::Number => Ok(Value::Number(parse_number(token.span(text))?)),
        TokenType::BigInt => parse_bigint(token.span(text)),
        TokenType::RegExp => parse_regexp(token.span(text)),
        TokenType::Minus => {
            let next = cur.next().ok_or(Eof)?;
            match next.span(text) {
                "Infinity" => Ok(Value::Number(f64::NEG_INFINITY)),
                span => Err(UnexpectedToken(span.into())),
            }
        }
        TokenType::Identifier => parse_identifier(text, cur, token),
        TokenType::Colon
        | TokenType::Comma
        | TokenType::LeftParen
        | TokenType::RightBrace
        | TokenType::RightBracket
        | TokenType::RightParen => Err(UnexpectedToken(token.span(text).into())),
    }
}

/// Parse Array
///
/// This function is called by a parser that's encountered a '['. A comma
/// with no value before it is a hole, and a single trailing comma is
/// ignored, so `[1, , 3]` has three slots and `[1, ]` has one.
fn parse_array<'a, T: Iterator<Item = &'a Token>>(
    text: &str,
    cur: &mut Peekable<T>,
) -> Result<Value, Error> {
    let mut elements = vec![];
    loop {
        match cur.peek().ok_or(Eof)?.token_type {
            TokenType::RightBracket => {
                cur.next();
                break;
            }
            TokenType::Comma => {
                cur.next();
                elements.push(None);
            }
            _ => {
                elements.push(Some(parse(text, cur)?));
                let token = cur.next().ok_or(Eof)?;
                match token.token_type {
                    TokenType::Comma => {}
                    TokenType::RightBracket => break,
                    _ => return Err(UnexpectedToken(token.span(text).into())),
                }
            }
        }
    }
    Ok(Value::Object(Object::array(elements)))
}

/// Parse Object
///
/// This function is called by a parser that's encountered a '{'. Keys
/// may be identifiers, strings, numbers or a computed `[expr]`. A
/// literal `__proto__` key sets the prototype instead of defining a
/// property.
fn parse_object<'a, T: Iterator<Item = &'a Token>>(
    text: &str,
    cur: &mut Peekable<T>,
) -> Result<Value, Error> {
    let obj = Object::plain();
    loop {
        let token = cur.next().ok_or(Eof)?;
        let (key, computed) = match token.token_type {
            TokenType::RightBrace => break,
            TokenType::Identifier => (PropertyKey::from(token.span(text)), false),
            TokenType::String => (PropertyKey::from(parse_string(token.span(text))?), false),
            TokenType::Number => {
                let key = number::to_string(parse_number(token.span(text))?);
                (PropertyKey::from(key), false)
            }
            TokenType::LeftBracket => {
                let key = match parse(text, cur)? {
                    Value::Symbol(sym) => PropertyKey::from(sym),
                    Value::String(name) => PropertyKey::from(name),
                    Value::Number(val) => PropertyKey::from(number::to_string(val)),
                    other => return Err(UnexpectedToken(format!("{:#}", other))),
                };
                expect(text, cur, TokenType::RightBracket)?;
                (key, true)
            }
            _ => return Err(UnexpectedToken(token.span(text).into())),
        };
        expect(text, cur, TokenType::Colon)?;
        let value = parse(text, cur)?;

        match key {
            PropertyKey::String(ref name) if name == "__proto__" && !computed => match value {
                Value::Null => obj.set_prototype(Prototype::Null),
                Value::Object(proto) => obj.set_prototype(Prototype::Object(proto)),
                _ => {}
            },
            key => obj.set(key, value),
        }

        let token = cur.next().ok_or(Eof)?;
        match token.token_type {
            TokenType::Comma => {}
            TokenType::RightBrace => break,
            _ => return Err(UnexpectedToken(token.span(text).into())),
        }
    }
    Ok(Value::Object(obj))
}

/// Parse Identifier
///
/// Identifiers are either one of the literal keywords, or introduce a
/// `Symbol(..)`, `function` or `new` expression.
fn parse_identifier<'a, T: Iterator<Item = &'a Token>>(
    text: &str,
    cur: &mut Peekable<T>,
    token: &Token,
) -> Result<Value, Error> {
    Ok(match token.span(text) {
        "undefined" => Value::Undefined,
        "null" => Value::Null,
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "NaN" => Value::Number(f64::NAN),
        "Infinity" => Value::Number(f64::INFINITY),
        "Symbol" => {
            let args = parse_arguments(text, cur)?;
            match args.first() {
                None | Some(Value::Undefined) => Value::new_symbol(None),
                Some(Value::String(desc)) => Value::Symbol(Symbol::new(Some(desc.as_str()))),
                Some(other) => return Err(InvalidArgument("Symbol".into(), format!("{:#}", other))),
            }
        }
        "function" => parse_function(text, cur)?,
        "new" => {
            let ctor = cur.next().ok_or(Eof)?;
            if ctor.token_type != TokenType::Identifier {
                return Err(UnexpectedToken(ctor.span(text).into()));
            }
            let args = parse_arguments(text, cur)?;
            construct(ctor.span(text), args)?
        }
        "Object.create" => {
            let args = parse_arguments(text, cur)?;
            let prototype = match args.into_iter().next() {
                Some(Value::Null) => Prototype::Null,
                Some(Value::Object(proto)) => Prototype::Object(proto),
                other => {
                    let arg = other.unwrap_or(Value::Undefined);
                    return Err(InvalidArgument("Object.create".into(), format!("{:#}", arg)));
                }
            };
            Value::Object(Object::with_prototype(ObjectKind::Plain, prototype))
        }
        span => return Err(UnexpectedToken(span.into())),
    })
}

/// Parse Function
///
/// Parse `function [name](params) { body }`. Parameters and body are
/// skipped; only the name is kept.
fn parse_function<'a, T: Iterator<Item = &'a Token>>(
    text: &str,
    cur: &mut Peekable<T>,
) -> Result<Value, Error> {
    let name = match cur.peek().ok_or(Eof)?.token_type {
        TokenType::Identifier => cur.next().map(|token| token.span(text)),
        _ => None,
    };
    expect(text, cur, TokenType::LeftParen)?;
    skip_until_closed(text, cur, TokenType::RightParen)?;
    expect(text, cur, TokenType::LeftBrace)?;
    skip_until_closed(text, cur, TokenType::RightBrace)?;
    Ok(Value::Object(Object::function(name)))
}

/// Advance past the bracket that closes an already consumed opening
/// bracket, skipping anything nested in between.
fn skip_until_closed<'a, T: Iterator<Item = &'a Token>>(
    text: &str,
    cur: &mut Peekable<T>,
    close: TokenType,
) -> Result<(), Error> {
    let mut depth = 0usize;
    loop {
        let token = cur.next().ok_or(Eof)?;
        if token.token_type.is_open_bracket() {
            depth += 1;
        } else if token.token_type.is_close_bracket() {
            if depth == 0 {
                return match token.token_type == close {
                    true => Ok(()),
                    false => Err(UnexpectedToken(token.span(text).into())),
                };
            }
            depth -= 1;
        }
    }
}

/// Parse a parenthesized, comma separated argument list. A missing
/// argument list (`new Map`) is an empty one.
fn parse_arguments<'a, T: Iterator<Item = &'a Token>>(
    text: &str,
    cur: &mut Peekable<T>,
) -> Result<Vec<Value>, Error> {
    let mut args = vec![];
    if cur.peek().map(|token| &token.token_type) != Some(&TokenType::LeftParen) {
        return Ok(args);
    }
    cur.next();
    loop {
        if cur.peek().ok_or(Eof)?.token_type == TokenType::RightParen {
            cur.next();
            return Ok(args);
        }
        args.push(parse(text, cur)?);
        let token = cur.next().ok_or(Eof)?;
        match token.token_type {
            TokenType::Comma => {}
            TokenType::RightParen => return Ok(args),
            _ => return Err(UnexpectedToken(token.span(text).into())),
        }
    }
}

fn expect<'a, T: Iterator<Item = &'a Token>>(
    text: &str,
    cur: &mut Peekable<T>,
    token_type: TokenType,
) -> Result<&'a Token, Error> {
    let token = cur.next().ok_or(Eof)?;
    match token.token_type == token_type {
        true => Ok(token),
        false => Err(UnexpectedToken(token.span(text).into())),
    }
}

fn parse_string(span: &str) -> Result<String, Error> {
    let body = span.get(1..span.len() - 1).unwrap_or_default();
    unescape(body).ok_or_else(|| Error::InvalidString(span.into()))
}

/// Parse Number
///
/// Numeric literals may carry a sign and `_` separators; the digits are
/// otherwise read the same way string to number conversion reads them.
fn parse_number(span: &str) -> Result<f64, Error> {
    let (negative, digits) = match span.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, span.strip_prefix('+').unwrap_or(span)),
    };
    let digits = digits.replace('_', "");
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return Err(Error::InvalidNumber(span.into()));
    }
    match number::string_to_number(&digits) {
        val if val.is_nan() => Err(Error::InvalidNumber(span.into())),
        val if negative => Ok(-val),
        val => Ok(val),
    }
}

fn parse_bigint(span: &str) -> Result<Value, Error> {
    let literal = span.strip_suffix('n').unwrap_or(span);
    let (negative, digits) = match literal.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, literal),
    };
    let digits = digits.replace('_', "");
    if digits.is_empty() || !digits.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(Error::InvalidNumber(span.into()));
    }
    match number::string_to_bigint(&digits) {
        Some(val) if negative => Ok(Value::BigInt(-val)),
        Some(val) => Ok(Value::BigInt(val)),
        None => Err(Error::InvalidNumber(span.into())),
    }
}

fn parse_regexp(span: &str) -> Result<Value, Error> {
    let close = span.rfind('/').unwrap_or_default();
    let source = span.get(1..close).unwrap_or_default();
    let flags = span.get(close + 1..).unwrap_or_default();
    match RegExp::new(source, flags) {
        Some(regexp) if close > 0 => Ok(Value::Object(Object::regexp(regexp))),
        _ => Err(Error::InvalidRegExp(span.into())),
    }
}

/// Construct
///
/// Build the object produced by `new <name>(args)`.
fn construct(name: &str, args: Vec<Value>) -> Result<Value, Error> {
    let invalid = |arg: &Value| InvalidArgument(name.into(), format!("{:#}", arg));
    let mut args = args.into_iter();
    let first = args.next();
    let obj = match name {
        "Object" => match first {
            Some(Value::Object(obj)) => obj,
            _ => Object::plain(),
        },
        "Number" => {
            let val = first.as_ref().map(number::to_number).unwrap_or(0.0);
            Object::boxed(Boxed::Number(val))
        }
        "String" => {
            let val = match first {
                Some(ref arg) => to_string(arg).ok_or_else(|| invalid(arg))?,
                None => String::new(),
            };
            Object::boxed(Boxed::String(val))
        }
        "Boolean" => Object::boxed(Boxed::Boolean(first.is_some_and(|arg| arg.truthy()))),
        "Date" => Object::date(match first {
            None => now(),
            Some(Value::String(date)) => number::parse_date(&date),
            Some(Value::Object(ref obj)) => match obj.kind() {
                ObjectKind::Date(time) => *time,
                _ => number::to_number(&Value::Object(obj.clone())),
            },
            Some(arg) => number::to_number(&arg),
        }),
        "RegExp" => {
            let flags = match args.next() {
                None | Some(Value::Undefined) => None,
                Some(Value::String(flags)) => Some(flags),
                Some(arg) => return Err(invalid(&arg)),
            };
            let (source, inherited) = match first {
                Some(Value::String(source)) => (source, String::new()),
                Some(Value::Object(ref obj)) => match obj.kind() {
                    ObjectKind::RegExp(regexp) => (regexp.source().into(), regexp.flags().into()),
                    _ => return Err(invalid(&Value::Object(obj.clone()))),
                },
                None | Some(Value::Undefined) => (String::new(), String::new()),
                Some(arg) => return Err(invalid(&arg)),
            };
            let flags = flags.unwrap_or(inherited);
            let regexp = RegExp::new(&source, &flags)
                .ok_or_else(|| InvalidArgument(name.into(), format!("flags '{}'", flags)))?;
            Object::regexp(regexp)
        }
        "ArrayBuffer" => match first {
            None => Object::array_buffer(vec![]),
            Some(Value::Number(len)) if len >= 0.0 && len.fract() == 0.0 => {
                let len = byte_length(len, 1).ok_or_else(|| invalid(&Value::Number(len)))?;
                Object::array_buffer(vec![0; len])
            }
            Some(Value::Object(ref obj)) if obj.as_array().is_some() => {
                let bytes: Vec<u8> = obj
                    .as_array()
                    .map(|elements| {
                        elements
                            .iter()
                            .map(|it| match it {
                                Some(value) => number::to_uint(number::to_number(value), 8) as u8,
                                None => 0,
                            })
                            .collect()
                    })
                    .unwrap_or_default();
                Object::array_buffer(bytes)
            }
            Some(arg) => return Err(invalid(&arg)),
        },
        "DataView" => {
            let buffer = match first {
                Some(Value::Object(ref obj)) => match obj.kind() {
                    ObjectKind::ArrayBuffer(buffer) => buffer.clone(),
                    _ => return Err(invalid(&Value::Object(obj.clone()))),
                },
                arg => return Err(invalid(&arg.unwrap_or(Value::Undefined))),
            };
            let offset = index_argument(args.next(), 0).ok_or_else(|| invalid(&Value::Undefined))?;
            let len = buffer.len().saturating_sub(offset);
            let len = index_argument(args.next(), len).ok_or_else(|| invalid(&Value::Undefined))?;
            let view = View::new(buffer, offset, len)
                .ok_or_else(|| InvalidArgument(name.into(), "offset is out of bounds".into()))?;
            Object::data_view(view)
        }
        "Map" => {
            let mut entries = vec![];
            for entry in iterable(name, first)? {
                let pair = match &entry {
                    Value::Object(obj) => obj.as_array().map(|it| it.clone()),
                    _ => None,
                }
                .ok_or_else(|| invalid(&entry))?;
                let mut pair = pair.into_iter().map(|it| it.unwrap_or(Value::Undefined));
                let key = pair.next().unwrap_or(Value::Undefined);
                let value = pair.next().unwrap_or(Value::Undefined);
                entries.push((key, value));
            }
            Object::map(entries)
        }
        "Set" => Object::new_set(iterable(name, first)?),
        "WeakMap" => Object::weak_map(),
        "WeakSet" => Object::weak_set(),
        "WeakRef" => match first {
            Some(Value::Object(_)) => Object::weak_ref(),
            arg => return Err(invalid(&arg.unwrap_or(Value::Undefined))),
        },
        "Promise" => Object::promise(),
        "URL" => {
            let input = first.as_ref().and_then(to_string).unwrap_or_default();
            let url = match args.next() {
                None | Some(Value::Undefined) => url::Url::parse(&input),
                Some(base) => {
                    let base = to_string(&base).ok_or_else(|| invalid(&base))?;
                    url::Url::parse(&base).and_then(|base| base.join(&input))
                }
            }
            .map_err(|_| Error::InvalidUrl(input.clone()))?;
            Object::url(url)
        }
        "URLSearchParams" => Object::url_search_params(search_params(name, first)?),
        _ => {
            if let Some(kind) = TypedArrayKind::from_name(name) {
                typed_array(kind, first, args.next(), args.next())?
            } else if let Some(kind) = ErrorKind::from_name(name) {
                // AggregateError takes its list of errors first.
                let message = match kind {
                    ErrorKind::AggregateError => args.next(),
                    _ => first,
                };
                error(kind, message, args.next())?
            } else {
                return Err(Error::UnknownConstructor(name.into()));
            }
        }
    };
    Ok(Value::Object(obj))
}

fn typed_array(
    kind: TypedArrayKind,
    source: Option<Value>,
    offset: Option<Value>,
    len: Option<Value>,
) -> Result<Object, Error> {
    let invalid = |arg: &Value| InvalidArgument(kind.name().into(), format!("{:#}", arg));
    let size = kind.bytes_per_element();
    let array = match source {
        None => TypedArray::from_values(kind, &[]),
        Some(Value::Number(count)) if count >= 0.0 && count.fract() == 0.0 => {
            let bytes = byte_length(count, size).ok_or_else(|| invalid(&Value::Number(count)))?;
            View::new(Buffer::new(vec![0; bytes]), 0, bytes).and_then(|view| TypedArray::new(kind, view))
        }
        Some(Value::Object(ref obj)) => match obj.kind() {
            ObjectKind::ArrayBuffer(buffer) => {
                let offset = index_argument(offset, 0).ok_or_else(|| invalid(&Value::Undefined))?;
                let remaining = buffer.len().saturating_sub(offset);
                let len = match len {
                    None | Some(Value::Undefined) => remaining,
                    len => index_argument(len, 0)
                        .and_then(|len| len.checked_mul(size))
                        .ok_or_else(|| invalid(&Value::Undefined))?,
                };
                View::new(buffer.clone(), offset, len).and_then(|view| TypedArray::new(kind, view))
            }
            ObjectKind::TypedArray(other) => TypedArray::from_values(kind, &other.elements()),
            ObjectKind::Array(elements) => {
                let values: Vec<Value> = elements
                    .borrow()
                    .iter()
                    .map(|it| it.clone().unwrap_or(Value::Undefined))
                    .collect();
                TypedArray::from_values(kind, &values)
            }
            _ => None,
        },
        Some(_) => None,
    };
    match array {
        Some(array) => Ok(Object::typed_array(array)),
        None => Err(InvalidArgument(
            kind.name().into(),
            "invalid source, offset or length".into(),
        )),
    }
}

fn error(kind: ErrorKind, message: Option<Value>, options: Option<Value>) -> Result<Object, Error> {
    let message = match message {
        None | Some(Value::Undefined) => String::new(),
        Some(arg) => to_string(&arg)
            .ok_or_else(|| InvalidArgument(kind.name().into(), format!("{:#}", arg)))?,
    };
    let cause = match options {
        Some(Value::Object(options)) => options
            .get_own_property(&PropertyKey::from("cause"))
            .and_then(|prop| match prop.slot {
                Slot::Data { value, .. } => Some(value),
                Slot::Accessor { .. } => None,
            }),
        _ => None,
    };
    Ok(Object::error(kind, &message, cause))
}

fn search_params(name: &str, init: Option<Value>) -> Result<SearchParams, Error> {
    let invalid = |arg: &Value| InvalidArgument(name.into(), format!("{:#}", arg));
    match init {
        None | Some(Value::Undefined) => Ok(SearchParams::default()),
        Some(Value::String(query)) => Ok(SearchParams::parse(&query)),
        Some(Value::Object(obj)) if obj.as_array().is_some() => {
            let params = SearchParams::default();
            for pair in iterable(name, Some(Value::Object(obj)))? {
                let pair = match &pair {
                    Value::Object(obj) => obj.as_array().map(|it| it.clone()),
                    _ => None,
                }
                .ok_or_else(|| invalid(&pair))?;
                match pair.as_slice() {
                    [Some(key), Some(value)] => {
                        let key = to_string(key).ok_or_else(|| invalid(key))?;
                        let value = to_string(value).ok_or_else(|| invalid(value))?;
                        params.append(&key, &value);
                    }
                    _ => return Err(InvalidArgument(name.into(), "expected a pair".into())),
                }
            }
            Ok(params)
        }
        Some(Value::Object(obj)) => {
            let params = SearchParams::default();
            for key in obj.keys() {
                let value = match obj.get_own_property(&key).map(|prop| prop.slot) {
                    Some(Slot::Data { value, .. }) => value,
                    _ => Value::Undefined,
                };
                let value = to_string(&value).ok_or_else(|| invalid(&value))?;
                params.append(&key.to_string(), &value);
            }
            Ok(params)
        }
        Some(arg) => Err(invalid(&arg)),
    }
}

/// The elements of an array argument; absent or undefined is empty.
fn iterable(name: &str, arg: Option<Value>) -> Result<Vec<Value>, Error> {
    match arg {
        None | Some(Value::Undefined) | Some(Value::Null) => Ok(vec![]),
        Some(Value::Object(ref obj)) if obj.as_array().is_some() => Ok(obj
            .as_array()
            .map(|elements| {
                elements
                    .iter()
                    .map(|it| it.clone().unwrap_or(Value::Undefined))
                    .collect()
            })
            .unwrap_or_default()),
        Some(arg) => Err(InvalidArgument(name.into(), format!("{:#} is not iterable", arg))),
    }
}

/// The largest buffer the reader will allocate.
const MAX_BYTE_LENGTH: usize = 1 << 30;

/// The byte length of `count` elements of `size` bytes, if it fits under
/// [`MAX_BYTE_LENGTH`].
fn byte_length(count: f64, size: usize) -> Option<usize> {
    if count > MAX_BYTE_LENGTH as f64 {
        return None;
    }
    (count as usize)
        .checked_mul(size)
        .filter(|len| *len <= MAX_BYTE_LENGTH)
}

fn index_argument(arg: Option<Value>, default: usize) -> Option<usize> {
    match arg {
        None | Some(Value::Undefined) => Some(default),
        Some(Value::Number(val)) if val >= 0.0 && val.fract() == 0.0 => Some(val as usize),
        _ => None,
    }
}

fn to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(val) => Some(val.clone()),
        Value::Number(val) => Some(number::to_string(*val)),
        Value::BigInt(val) => Some(val.to_string()),
        Value::Bool(val) => Some(val.to_string()),
        Value::Undefined => Some("undefined".into()),
        Value::Null => Some("null".into()),
        Value::Symbol(_) | Value::Object(_) => None,
    }
}

fn now() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as f64)
        .unwrap_or(f64::NAN)
}

/// Parse Macro
///
/// Given a single value literal, tokenize and parse the
/// literal into a Value.
///
/// This macro assumes the input is a single valid literal and
/// will panic!() if it encounters lex or parse errors.
///
/// # Arguments
/// `lhs` - The literal to parse
#[macro_export]
macro_rules! parse {
    ($lhs:expr) => {{
        let tokens = $crate::lex::scan($lhs).expect("lex failed");
        let mut cur = tokens.iter().peekable();
        $crate::parse::parse($lhs, &mut cur).expect("parse failed")
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lex;
    use crate::object::Intrinsic;

    macro_rules! parses {
        ($($lhs:expr => $rhs:expr),+) => {{
             $(
                let value = parse($lhs, &mut lex::scan($lhs).unwrap().iter().peekable()).unwrap();
                assert_eq!(format!("{:#}", value), $rhs);
             )+
        }};
    }

    macro_rules! fails {
        ($($lhs:expr),+) => {{
             $(
                assert!(matches!(parse($lhs, &mut lex::scan($lhs).unwrap().iter().peekable()), Err(_)));
             )+
        }};
    }

    #[test]
    fn literals() {
        parses! {
            "undefined" => "undefined",
            "null" => "null",
            "true" => "true",
            "false" => "false",
            "NaN" => "NaN",
            "Infinity" => "Infinity",
            "-Infinity" => "-Infinity",
            "42" => "42",
            "-0" => "-0",
            "1_000" => "1000",
            "0x10" => "16",
            "-1.5e3" => "-1500",
            "10n" => "10n",
            "-7n" => "-7n",
            "'foo'" => "\"foo\"",
            r#""a\tb""# => "\"a\\tb\""
        };
        fails!["1e", "0x", "1.2.3", "'\\x4'", "-foo"];
    }

    #[test]
    fn consumes_one_value_per_call() {
        let text = "1 'two' [3]";
        let tokens = lex::scan(text).unwrap();
        let mut cur = tokens.iter().peekable();
        assert!(matches!(parse(text, &mut cur), Ok(Value::Number(_))));
        assert!(matches!(parse(text, &mut cur), Ok(Value::String(_))));
        assert!(matches!(parse(text, &mut cur), Ok(Value::Object(_))));
        assert_eq!(parse(text, &mut cur).unwrap_err(), Error::Eof);
    }

    #[test]
    fn arrays() {
        parses! {
            "[]" => "[]",
            "[1, 2, 3]" => "[1, 2, 3]",
            "[1, , 3]" => "[1,, 3]",
            "[1, ]" => "[1]",
            "[, ]" => "[,]",
            "[1, , ]" => "[1,,]",
            "[[1], [2, [3]]]" => "[[1], [2, [3]]]"
        };
        fails!["[", "[1 2]", "[1, 2}"];

        let value = parse!("[1, , 3]");
        let array = value.as_object().unwrap().as_array().unwrap().clone();
        assert_eq!(array.len(), 3);
        assert!(array[1].is_none());
    }

    #[test]
    fn objects() {
        parses! {
            "{}" => "{}",
            "{ a: 1 }" => "{ \"a\": 1 }",
            "{ 'b c': true, 2: null, 1: 'x' }" => "{ \"1\": \"x\", \"2\": null, \"b c\": true }",
            "{ a: { b: [] }, }" => "{ \"a\": { \"b\": [] } }",
            "{ [Symbol('s')]: 1 }" => "{ [Symbol(\"s\")]: 1 }"
        };
        fails!["{ a }", "{ a: 1 b: 2 }", "{ a: 1", "{ [{}]: 1 }"];
    }

    #[test]
    fn prototypes() {
        let value = parse!("{ __proto__: null, a: 1 }");
        let obj = value.as_object().unwrap();
        assert_eq!(obj.prototype(), Prototype::Null);
        assert_eq!(obj.own_keys(), vec![PropertyKey::from("a")]);

        let value = parse!("Object.create({ greet: 'hi' })");
        assert!(matches!(
            value.as_object().unwrap().prototype(),
            Prototype::Object(_)
        ));

        let value = parse!("Object.create(null)");
        assert_eq!(value.as_object().unwrap().prototype(), Prototype::Null);
    }

    #[test]
    fn symbols_and_functions() {
        parses! {
            "Symbol()" => "Symbol()",
            "Symbol('d')" => "Symbol(\"d\")",
            "function foo(a, b) { }" => "function foo() {}",
            "function () { }" => "function () {}"
        };
        assert_eq!(parse!("function f() {}").type_of(), "function");
        fails!["Symbol(1)", "function f( {}"];
    }

    #[test]
    fn regexps() {
        parses! {
            "/ab+c/gi" => "/ab+c/gi",
            "/a/yg" => "/a/gy",
            "new RegExp('a+', 'm')" => "/a+/m",
            "new RegExp(/x/g)" => "/x/g",
            "new RegExp(/x/g, 'i')" => "/x/i"
        };
        fails!["/a/q", "/a/gg", "new RegExp('a', 'z')"];
    }

    #[test]
    fn boxed() {
        parses! {
            "new Number(1)" => "new Number(1)",
            "new Number('2')" => "new Number(2)",
            "new String('a')" => "new String(\"a\")",
            "new String(12)" => "new String(\"12\")",
            "new Boolean(0)" => "new Boolean(false)",
            "new Boolean" => "new Boolean(false)"
        };
    }

    #[test]
    fn dates() {
        parses! {
            "new Date(0)" => "new Date(0)",
            "new Date('1970-01-02')" => "new Date(86400000)",
            "new Date('garbage')" => "new Date(NaN)",
            "new Date(new Date(5))" => "new Date(5)"
        };
    }

    #[test]
    fn binary() {
        parses! {
            "new ArrayBuffer(2)" => "new ArrayBuffer([0, 0])",
            "new ArrayBuffer([1, 256, -1])" => "new ArrayBuffer([1, 0, 255])",
            "new DataView(new ArrayBuffer([1, 2, 3]), 1)" => "new DataView(new ArrayBuffer([1, 2, 3]), 1, 2)",
            "new DataView(new ArrayBuffer([1, 2, 3]), 0, 1)" => "new DataView(new ArrayBuffer([1, 2, 3]), 0, 1)",
            "new Uint8Array([1, 2, 300])" => "new Uint8Array([1, 2, 44])",
            "new Int8Array(2)" => "new Int8Array([0, 0])",
            "new Float64Array([0.5, NaN])" => "new Float64Array([0.5, NaN])",
            "new BigInt64Array([1n, -1n])" => "new BigInt64Array([1n, -1n])",
            "new Uint16Array(new ArrayBuffer([1, 0, 2, 0]), 2, 1)" => "new Uint16Array([2])",
            "new Uint8Array(new Int16Array([258]))" => "new Uint8Array([2])"
        };
        fails![
            "new DataView(new ArrayBuffer(2), 3)",
            "new DataView([])",
            "new Int32Array(new ArrayBuffer(8), 1)",
            "new BigInt64Array([1])",
            "new Uint16Array(1e19)",
            "new Float64Array(536870912)",
            "new ArrayBuffer(1e15)",
            "new Uint16Array(new ArrayBuffer(4), 0, 1e19)"
        ];
    }

    #[test]
    fn collections() {
        parses! {
            "new Map()" => "new Map([])",
            "new Map([[1, 'a'], [2, 'b']])" => "new Map([[1, \"a\"], [2, \"b\"]])",
            "new Map([[1, 'a'], [1, 'b']])" => "new Map([[1, \"b\"]])",
            "new Set([1, 2, 2, NaN, NaN])" => "new Set([1, 2, NaN])",
            "new Set" => "new Set([])",
            "new WeakMap()" => "new WeakMap()",
            "new WeakSet()" => "new WeakSet()",
            "new WeakRef({})" => "new WeakRef({})",
            "new Promise(function () {})" => "new Promise()"
        };
        fails!["new Map([1])", "new Set(1)", "new WeakRef(1)"];
    }

    #[test]
    fn errors() {
        parses! {
            "new Error('boom')" => "new Error(\"boom\")",
            "new TypeError()" => "new TypeError(\"\")",
            "new RangeError('x', { cause: 1 })" => "new RangeError(\"x\", { cause: 1 })",
            "new URIError('u')" => "new URIError(\"u\")",
            "new AggregateError([], 'all')" => "new AggregateError(\"all\")"
        };
        let value = parse!("new SyntaxError('s')");
        assert_eq!(
            value.as_object().unwrap().prototype(),
            Prototype::Intrinsic(Intrinsic::Error(ErrorKind::SyntaxError))
        );
    }

    #[test]
    fn urls() {
        parses! {
            "new URL('https://EXAMPLE.com:443/p?x=1#h')" => "new URL(\"https://example.com/p?x=1#h\")",
            "new URL('/a/b', 'http://host/c/')" => "new URL(\"http://host/a/b\")",
            "new URLSearchParams('?a=1&b=2')" => "new URLSearchParams(\"a=1&b=2\")",
            "new URLSearchParams({ a: 1, b: 'x y' })" => "new URLSearchParams(\"a=1&b=x+y\")",
            "new URLSearchParams([['a', '1'], ['a', '2']])" => "new URLSearchParams(\"a=1&a=2\")"
        };
        assert_eq!(
            parse("new URL('nope')", &mut lex::scan("new URL('nope')").unwrap().iter().peekable())
                .unwrap_err(),
            Error::InvalidUrl("nope".into())
        );
    }

    #[test]
    fn unknown_constructor() {
        let text = "new Frobnicator()";
        assert_eq!(
            parse(text, &mut lex::scan(text).unwrap().iter().peekable()).unwrap_err(),
            Error::UnknownConstructor("Frobnicator".into())
        );
    }
}
