use crate::number;
use crate::primitive::same_value_zero;
use crate::value::{Symbol, Value};
use indexmap::IndexMap;
use num::{BigInt, ToPrimitive};
use std::cell::{Ref, RefCell};
use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Object
///
/// A reference counted handle to an object. Cloning the handle aliases
/// the same object; equality and hashing of the handle are by identity.
#[derive(Clone)]
pub struct Object(Rc<ObjectData>);

struct ObjectData {
    kind: ObjectKind,
    prototype: RefCell<Prototype>,
    properties: RefCell<IndexMap<PropertyKey, Property>>,
}

impl Object {
    /// Create an object of the given kind whose prototype is the kind's
    /// intrinsic prototype.
    pub fn new(kind: ObjectKind) -> Object {
        let prototype = Prototype::Intrinsic(kind.intrinsic());
        Object::with_prototype(kind, prototype)
    }

    pub fn with_prototype(kind: ObjectKind, prototype: Prototype) -> Object {
        Object(Rc::new(ObjectData {
            kind,
            prototype: RefCell::new(prototype),
            properties: RefCell::new(IndexMap::new()),
        }))
    }

    pub fn plain() -> Object {
        Object::new(ObjectKind::Plain)
    }

    pub fn array(elements: Vec<Option<Value>>) -> Object {
        Object::new(ObjectKind::Array(RefCell::new(elements)))
    }

    pub fn boxed(boxed: Boxed) -> Object {
        Object::new(ObjectKind::Boxed(boxed))
    }

    /// Create a date from a millisecond timestamp. Timestamps outside of
    /// the representable range produce an invalid date.
    pub fn date(time: f64) -> Object {
        Object::new(ObjectKind::Date(number::time_clip(time)))
    }

    pub fn regexp(regexp: RegExp) -> Object {
        Object::new(ObjectKind::RegExp(regexp))
    }

    pub fn array_buffer(bytes: Vec<u8>) -> Object {
        Object::new(ObjectKind::ArrayBuffer(Buffer::new(bytes)))
    }

    pub fn data_view(view: View) -> Object {
        Object::new(ObjectKind::DataView(view))
    }

    pub fn typed_array(array: TypedArray) -> Object {
        let kind = ObjectKind::TypedArray(array);
        Object::new(kind)
    }

    /// Create a map from entries. Later entries replace the value of an
    /// earlier entry with the same key.
    pub fn map<T: IntoIterator<Item = (Value, Value)>>(entries: T) -> Object {
        let mut map: Vec<(Value, Value)> = vec![];
        for (key, value) in entries {
            match map.iter_mut().find(|(it, _)| same_value_zero(it, &key)) {
                Some(entry) => entry.1 = value,
                None => map.push((normalize_key(key), value)),
            }
        }
        Object::new(ObjectKind::Map(RefCell::new(map)))
    }

    /// Create a set from values, dropping duplicates.
    pub fn new_set<T: IntoIterator<Item = Value>>(values: T) -> Object {
        let mut set: Vec<Value> = vec![];
        for value in values {
            if !set.iter().any(|it| same_value_zero(it, &value)) {
                set.push(normalize_key(value));
            }
        }
        Object::new(ObjectKind::Set(RefCell::new(set)))
    }

    pub fn weak_map() -> Object {
        Object::new(ObjectKind::WeakMap)
    }

    pub fn weak_set() -> Object {
        Object::new(ObjectKind::WeakSet)
    }

    pub fn weak_ref() -> Object {
        Object::new(ObjectKind::WeakRef)
    }

    pub fn function(name: Option<&str>) -> Object {
        Object::new(ObjectKind::Function(name.map(String::from)))
    }

    pub fn promise() -> Object {
        Object::new(ObjectKind::Promise)
    }

    pub fn error(kind: ErrorKind, message: &str, cause: Option<Value>) -> Object {
        Object::new(ObjectKind::Error(ErrorData::new(kind, message, cause)))
    }

    pub fn url(url: url::Url) -> Object {
        Object::new(ObjectKind::Url(url))
    }

    pub fn url_search_params(params: SearchParams) -> Object {
        Object::new(ObjectKind::UrlSearchParams(params))
    }

    pub fn kind(&self) -> &ObjectKind {
        &self.0.kind
    }

    pub fn is_callable(&self) -> bool {
        matches!(self.kind(), ObjectKind::Function(_))
    }

    pub fn prototype(&self) -> Prototype {
        self.0.prototype.borrow().clone()
    }

    pub fn set_prototype(&self, prototype: Prototype) {
        *self.0.prototype.borrow_mut() = prototype;
    }

    /// Set
    ///
    /// Create or replace an own data property that is enumerable,
    /// writable and configurable.
    pub fn set<K: Into<PropertyKey>>(&self, key: K, value: Value) {
        self.define(key, Property::data(value));
    }

    /// Define
    ///
    /// Create or replace an own property with an explicit descriptor.
    pub fn define<K: Into<PropertyKey>>(&self, key: K, property: Property) {
        self.0.properties.borrow_mut().insert(key.into(), property);
    }

    pub fn get_own_property(&self, key: &PropertyKey) -> Option<Property> {
        self.0.properties.borrow().get(key).cloned()
    }

    pub fn has_own_property(&self, key: &PropertyKey) -> bool {
        self.0.properties.borrow().contains_key(key)
    }

    /// Own Keys
    ///
    /// Return every own property key: array index keys in ascending
    /// numeric order, then the remaining string keys in insertion order,
    /// then symbol keys in insertion order.
    pub fn own_keys(&self) -> Vec<PropertyKey> {
        let properties = self.0.properties.borrow();
        let mut indexes = vec![];
        let mut strings = vec![];
        let mut symbols = vec![];
        for key in properties.keys() {
            match key {
                PropertyKey::String(name) => match number::array_index(name) {
                    Some(index) => indexes.push((index, key.clone())),
                    None => strings.push(key.clone()),
                },
                PropertyKey::Symbol(_) => symbols.push(key.clone()),
            }
        }
        indexes.sort_by_key(|(index, _)| *index);
        indexes
            .into_iter()
            .map(|(_, key)| key)
            .chain(strings)
            .chain(symbols)
            .collect()
    }

    /// Keys
    ///
    /// Return the enumerable own string keys, in the same order as
    /// [`Object::own_keys`].
    pub fn keys(&self) -> Vec<PropertyKey> {
        self.own_keys()
            .into_iter()
            .filter(|key| matches!(key, PropertyKey::String(_)))
            .filter(|key| {
                self.get_own_property(key)
                    .map(|prop| prop.enumerable)
                    .unwrap_or(false)
            })
            .collect()
    }

    pub fn as_array(&self) -> Option<Ref<'_, Vec<Option<Value>>>> {
        match self.kind() {
            ObjectKind::Array(elements) => Some(elements.borrow()),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<Ref<'_, Vec<(Value, Value)>>> {
        match self.kind() {
            ObjectKind::Map(entries) => Some(entries.borrow()),
            _ => None,
        }
    }

    pub fn as_set(&self) -> Option<Ref<'_, Vec<Value>>> {
        match self.kind() {
            ObjectKind::Set(elements) => Some(elements.borrow()),
            _ => None,
        }
    }

    /// Push a value onto an array, map entry list or set, following each
    /// collection's insertion rules. Has no effect on other kinds.
    pub fn push(&self, value: Value) {
        match self.kind() {
            ObjectKind::Array(elements) => elements.borrow_mut().push(Some(value)),
            ObjectKind::Set(elements) => {
                let mut elements = elements.borrow_mut();
                if !elements.iter().any(|it| same_value_zero(it, &value)) {
                    elements.push(normalize_key(value));
                }
            }
            _ => {}
        }
    }

    /// Insert an entry into a map, replacing the value of an existing key.
    /// Has no effect on other kinds.
    pub fn insert(&self, key: Value, value: Value) {
        if let ObjectKind::Map(entries) = self.kind() {
            let mut entries = entries.borrow_mut();
            match entries.iter_mut().find(|(it, _)| same_value_zero(it, &key)) {
                Some(entry) => entry.1 = value,
                None => entries.push((normalize_key(key), value)),
            }
        }
    }
}

// Collections store -0 keys as +0.
fn normalize_key(value: Value) -> Value {
    match value {
        Value::Number(val) if val == 0.0 => Value::Number(0.0),
        value => value,
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Object {}

impl Hash for Object {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Rc::as_ptr(&self.0).hash(state)
    }
}

impl Debug for Object {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Object({} @ {:p})", self.kind().tag(), Rc::as_ptr(&self.0))
    }
}

/// Object Kind
///
/// The internal slots of an object, which determine its built-in shape.
pub enum ObjectKind {
    Plain,
    Array(RefCell<Vec<Option<Value>>>),
    Boxed(Boxed),
    Date(f64),
    RegExp(RegExp),
    ArrayBuffer(Buffer),
    DataView(View),
    TypedArray(TypedArray),
    Map(RefCell<Vec<(Value, Value)>>),
    Set(RefCell<Vec<Value>>),
    WeakMap,
    WeakSet,
    WeakRef,
    Function(Option<String>),
    Promise,
    Error(ErrorData),
    Url(url::Url),
    UrlSearchParams(SearchParams),
}

impl ObjectKind {
    pub fn tag(&self) -> &'static str {
        match self {
            ObjectKind::Plain => "Object",
            ObjectKind::Array(_) => "Array",
            ObjectKind::Boxed(boxed) => boxed.constructor_name(),
            ObjectKind::Date(_) => "Date",
            ObjectKind::RegExp(_) => "RegExp",
            ObjectKind::ArrayBuffer(_) => "ArrayBuffer",
            ObjectKind::DataView(_) => "DataView",
            ObjectKind::TypedArray(array) => array.kind().name(),
            ObjectKind::Map(_) => "Map",
            ObjectKind::Set(_) => "Set",
            ObjectKind::WeakMap => "WeakMap",
            ObjectKind::WeakSet => "WeakSet",
            ObjectKind::WeakRef => "WeakRef",
            ObjectKind::Function(_) => "Function",
            ObjectKind::Promise => "Promise",
            ObjectKind::Error(_) => "Error",
            ObjectKind::Url(_) => "URL",
            ObjectKind::UrlSearchParams(_) => "URLSearchParams",
        }
    }

    /// The prototype objects of this kind receive from their constructor.
    pub fn intrinsic(&self) -> Intrinsic {
        match self {
            ObjectKind::Plain => Intrinsic::Object,
            ObjectKind::Array(_) => Intrinsic::Array,
            ObjectKind::Boxed(Boxed::String(_)) => Intrinsic::String,
            ObjectKind::Boxed(Boxed::Number(_)) => Intrinsic::Number,
            ObjectKind::Boxed(Boxed::Boolean(_)) => Intrinsic::Boolean,
            ObjectKind::Date(_) => Intrinsic::Date,
            ObjectKind::RegExp(_) => Intrinsic::RegExp,
            ObjectKind::ArrayBuffer(_) => Intrinsic::ArrayBuffer,
            ObjectKind::DataView(_) => Intrinsic::DataView,
            ObjectKind::TypedArray(array) => Intrinsic::TypedArray(array.kind()),
            ObjectKind::Map(_) => Intrinsic::Map,
            ObjectKind::Set(_) => Intrinsic::Set,
            ObjectKind::WeakMap => Intrinsic::WeakMap,
            ObjectKind::WeakSet => Intrinsic::WeakSet,
            ObjectKind::WeakRef => Intrinsic::WeakRef,
            ObjectKind::Function(_) => Intrinsic::Function,
            ObjectKind::Promise => Intrinsic::Promise,
            ObjectKind::Error(error) => Intrinsic::Error(error.kind()),
            ObjectKind::Url(_) => Intrinsic::Url,
            ObjectKind::UrlSearchParams(_) => Intrinsic::UrlSearchParams,
        }
    }
}

/// Intrinsic
///
/// The built-in prototype objects. Each constructor stamps the objects it
/// creates with its own intrinsic prototype.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Intrinsic {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Date,
    RegExp,
    ArrayBuffer,
    DataView,
    TypedArray(TypedArrayKind),
    Map,
    Set,
    WeakMap,
    WeakSet,
    WeakRef,
    Function,
    Promise,
    Error(ErrorKind),
    Url,
    UrlSearchParams,
}

/// Prototype
///
/// An object's prototype: none, a built-in prototype, or any other
/// object (user defined classes, `Object.create`).
#[derive(Clone, Debug, PartialEq)]
pub enum Prototype {
    Null,
    Intrinsic(Intrinsic),
    Object(Object),
}

/// Property Key
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    String(String),
    Symbol(Symbol),
}

impl From<&str> for PropertyKey {
    fn from(val: &str) -> Self {
        PropertyKey::String(val.into())
    }
}

impl From<String> for PropertyKey {
    fn from(val: String) -> Self {
        PropertyKey::String(val)
    }
}

impl From<Symbol> for PropertyKey {
    fn from(val: Symbol) -> Self {
        PropertyKey::Symbol(val)
    }
}

impl Display for PropertyKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyKey::String(name) => write!(f, "{}", name),
            PropertyKey::Symbol(sym) => write!(f, "{:?}", sym),
        }
    }
}

/// Property
///
/// An own property and its descriptor attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct Property {
    pub slot: Slot,
    pub enumerable: bool,
    pub configurable: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Slot {
    Data { value: Value, writable: bool },
    Accessor { get: Option<Value>, set: Option<Value> },
}

impl Property {
    /// An enumerable, writable, configurable data property.
    pub fn data(value: Value) -> Property {
        Property {
            slot: Slot::Data {
                value,
                writable: true,
            },
            enumerable: true,
            configurable: true,
        }
    }

    pub fn accessor(get: Option<Value>, set: Option<Value>) -> Property {
        Property {
            slot: Slot::Accessor { get, set },
            enumerable: true,
            configurable: true,
        }
    }

    pub fn enumerable(mut self, enumerable: bool) -> Property {
        self.enumerable = enumerable;
        self
    }

    pub fn configurable(mut self, configurable: bool) -> Property {
        self.configurable = configurable;
        self
    }

    /// Set the writable attribute. Accessor properties are unaffected.
    pub fn writable(mut self, writable: bool) -> Property {
        if let Slot::Data { writable: ref mut it, .. } = self.slot {
            *it = writable;
        }
        self
    }
}

/// Boxed
///
/// The primitive held by an object wrapper such as `new Number(1)`.
#[derive(Clone, Debug, PartialEq)]
pub enum Boxed {
    String(String),
    Number(f64),
    Boolean(bool),
}

impl Boxed {
    pub fn primitive(&self) -> Value {
        match self {
            Boxed::String(val) => Value::String(val.clone()),
            Boxed::Number(val) => Value::Number(*val),
            Boxed::Boolean(val) => Value::Bool(*val),
        }
    }

    pub fn constructor_name(&self) -> &'static str {
        match self {
            Boxed::String(_) => "String",
            Boxed::Number(_) => "Number",
            Boxed::Boolean(_) => "Boolean",
        }
    }

    pub fn same_kind(&self, other: &Boxed) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

/// RegExp
///
/// A regular expression's pattern text and flags. Flags are kept in
/// canonical order so that `/a/gi` and `/a/ig` carry the same flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegExp {
    source: String,
    flags: String,
}

const REGEXP_FLAGS: &str = "dgimsuvy";

impl RegExp {
    /// Create a regular expression. Returns None if `flags` contains an
    /// unknown or repeated flag.
    pub fn new(source: &str, flags: &str) -> Option<RegExp> {
        let mut seen = [false; REGEXP_FLAGS.len()];
        for c in flags.chars() {
            let idx = REGEXP_FLAGS.find(c)?;
            if seen[idx] {
                return None;
            }
            seen[idx] = true;
        }
        let flags = REGEXP_FLAGS
            .chars()
            .zip(seen)
            .filter(|(_, seen)| *seen)
            .map(|(c, _)| c)
            .collect();
        let source = if source.is_empty() {
            "(?:)".to_string()
        } else {
            source.to_string()
        };
        Some(RegExp { source, flags })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> &str {
        &self.flags
    }
}

impl Display for RegExp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

/// Buffer
///
/// Shared byte storage backing array buffers and their views.
#[derive(Clone, Debug)]
pub struct Buffer(Rc<RefCell<Vec<u8>>>);

impl Buffer {
    pub fn new(bytes: Vec<u8>) -> Buffer {
        Buffer(Rc::new(RefCell::new(bytes)))
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn bytes(&self) -> Ref<'_, Vec<u8>> {
        self.0.borrow()
    }

    pub fn write(&self, offset: usize, bytes: &[u8]) {
        let mut buffer = self.0.borrow_mut();
        if let Some(window) = buffer.get_mut(offset..offset + bytes.len()) {
            window.copy_from_slice(bytes);
        }
    }
}

impl PartialEq for Buffer {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// View
///
/// A window of `len` bytes starting at `offset` into a buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct View {
    buffer: Buffer,
    offset: usize,
    len: usize,
}

impl View {
    /// Create a view, returning None if the window does not fit within
    /// the buffer.
    pub fn new(buffer: Buffer, offset: usize, len: usize) -> Option<View> {
        match offset.checked_add(len) {
            Some(end) if end <= buffer.len() => Some(View {
                buffer,
                offset,
                len,
            }),
            _ => None,
        }
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.buffer.bytes()[self.offset..self.offset + self.len].to_vec()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypedArrayKind {
    Int8,
    Uint8,
    Uint8Clamped,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Float32,
    Float64,
    BigInt64,
    BigUint64,
}

impl TypedArrayKind {
    pub const ALL: [TypedArrayKind; 11] = [
        TypedArrayKind::Int8,
        TypedArrayKind::Uint8,
        TypedArrayKind::Uint8Clamped,
        TypedArrayKind::Int16,
        TypedArrayKind::Uint16,
        TypedArrayKind::Int32,
        TypedArrayKind::Uint32,
        TypedArrayKind::Float32,
        TypedArrayKind::Float64,
        TypedArrayKind::BigInt64,
        TypedArrayKind::BigUint64,
    ];

    pub const fn bytes_per_element(&self) -> usize {
        match self {
            TypedArrayKind::Int8 | TypedArrayKind::Uint8 | TypedArrayKind::Uint8Clamped => 1,
            TypedArrayKind::Int16 | TypedArrayKind::Uint16 => 2,
            TypedArrayKind::Int32 | TypedArrayKind::Uint32 | TypedArrayKind::Float32 => 4,
            TypedArrayKind::Float64 | TypedArrayKind::BigInt64 | TypedArrayKind::BigUint64 => 8,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            TypedArrayKind::Int8 => "Int8Array",
            TypedArrayKind::Uint8 => "Uint8Array",
            TypedArrayKind::Uint8Clamped => "Uint8ClampedArray",
            TypedArrayKind::Int16 => "Int16Array",
            TypedArrayKind::Uint16 => "Uint16Array",
            TypedArrayKind::Int32 => "Int32Array",
            TypedArrayKind::Uint32 => "Uint32Array",
            TypedArrayKind::Float32 => "Float32Array",
            TypedArrayKind::Float64 => "Float64Array",
            TypedArrayKind::BigInt64 => "BigInt64Array",
            TypedArrayKind::BigUint64 => "BigUint64Array",
        }
    }

    pub fn from_name(name: &str) -> Option<TypedArrayKind> {
        TypedArrayKind::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn is_bigint(&self) -> bool {
        matches!(self, TypedArrayKind::BigInt64 | TypedArrayKind::BigUint64)
    }

    /// Encode
    ///
    /// Convert a value to this element type's little endian bytes, using
    /// the same wrapping and clamping rules as a typed array store.
    /// Returns None for values the element type cannot hold (numbers in
    /// bigint arrays and vice versa).
    pub fn encode(&self, value: &Value) -> Option<Vec<u8>> {
        if self.is_bigint() {
            let val = match value {
                Value::BigInt(val) => val.clone(),
                Value::Bool(val) => BigInt::from(*val as u8),
                Value::String(val) => number::string_to_bigint(val)?,
                _ => return None,
            };
            let modulus = BigInt::from(1u8) << 64;
            let wrapped: BigInt = ((val % &modulus) + &modulus) % &modulus;
            let bits = wrapped.to_u64()?;
            return Some(bits.to_le_bytes().to_vec());
        }

        let val = match value {
            Value::BigInt(_) | Value::Symbol(_) => return None,
            value => number::to_number(value),
        };
        Some(match self {
            TypedArrayKind::Int8 => (number::to_uint(val, 8) as u8).to_le_bytes().to_vec(),
            TypedArrayKind::Uint8 => (number::to_uint(val, 8) as u8).to_le_bytes().to_vec(),
            TypedArrayKind::Uint8Clamped => vec![number::to_uint8_clamp(val)],
            TypedArrayKind::Int16 => (number::to_uint(val, 16) as u16).to_le_bytes().to_vec(),
            TypedArrayKind::Uint16 => (number::to_uint(val, 16) as u16).to_le_bytes().to_vec(),
            TypedArrayKind::Int32 => (number::to_uint(val, 32) as u32).to_le_bytes().to_vec(),
            TypedArrayKind::Uint32 => (number::to_uint(val, 32) as u32).to_le_bytes().to_vec(),
            TypedArrayKind::Float32 => (val as f32).to_le_bytes().to_vec(),
            TypedArrayKind::Float64 => val.to_le_bytes().to_vec(),
            TypedArrayKind::BigInt64 | TypedArrayKind::BigUint64 => return None,
        })
    }

    /// Decode one element from exactly `bytes_per_element` little endian
    /// bytes.
    pub fn decode(&self, bytes: &[u8]) -> Value {
        let mut word = [0u8; 8];
        word[..bytes.len().min(8)].copy_from_slice(&bytes[..bytes.len().min(8)]);
        match self {
            TypedArrayKind::Int8 => Value::Number((word[0] as i8).into()),
            TypedArrayKind::Uint8 | TypedArrayKind::Uint8Clamped => Value::Number(word[0].into()),
            TypedArrayKind::Int16 => Value::Number(i16::from_le_bytes([word[0], word[1]]).into()),
            TypedArrayKind::Uint16 => Value::Number(u16::from_le_bytes([word[0], word[1]]).into()),
            TypedArrayKind::Int32 => {
                Value::Number(i32::from_le_bytes([word[0], word[1], word[2], word[3]]).into())
            }
            TypedArrayKind::Uint32 => {
                Value::Number(u32::from_le_bytes([word[0], word[1], word[2], word[3]]).into())
            }
            TypedArrayKind::Float32 => {
                Value::Number(f32::from_le_bytes([word[0], word[1], word[2], word[3]]).into())
            }
            TypedArrayKind::Float64 => Value::Number(f64::from_le_bytes(word)),
            TypedArrayKind::BigInt64 => Value::BigInt(i64::from_le_bytes(word).into()),
            TypedArrayKind::BigUint64 => Value::BigInt(u64::from_le_bytes(word).into()),
        }
    }
}

/// Typed Array
///
/// An element typed view over a window of a buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct TypedArray {
    kind: TypedArrayKind,
    view: View,
}

impl TypedArray {
    /// Create a typed array over `view`. Returns None if the window is not
    /// a whole number of elements or is misaligned.
    pub fn new(kind: TypedArrayKind, view: View) -> Option<TypedArray> {
        let size = kind.bytes_per_element();
        if view.offset() % size != 0 || view.len() % size != 0 {
            return None;
        }
        Some(TypedArray { kind, view })
    }

    /// Create a typed array over a fresh buffer holding `values`.
    pub fn from_values(kind: TypedArrayKind, values: &[Value]) -> Option<TypedArray> {
        let mut bytes = Vec::with_capacity(values.len() * kind.bytes_per_element());
        for value in values {
            bytes.extend(kind.encode(value)?);
        }
        let len = bytes.len();
        TypedArray::new(kind, View::new(Buffer::new(bytes), 0, len)?)
    }

    pub fn kind(&self) -> TypedArrayKind {
        self.kind
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// The number of elements.
    pub fn len(&self) -> usize {
        self.view.len() / self.kind.bytes_per_element()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn elements(&self) -> Vec<Value> {
        self.view
            .bytes()
            .chunks_exact(self.kind.bytes_per_element())
            .map(|chunk| self.kind.decode(chunk))
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Error,
    TypeError,
    RangeError,
    SyntaxError,
    ReferenceError,
    EvalError,
    UriError,
    AggregateError,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 8] = [
        ErrorKind::Error,
        ErrorKind::TypeError,
        ErrorKind::RangeError,
        ErrorKind::SyntaxError,
        ErrorKind::ReferenceError,
        ErrorKind::EvalError,
        ErrorKind::UriError,
        ErrorKind::AggregateError,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            ErrorKind::Error => "Error",
            ErrorKind::TypeError => "TypeError",
            ErrorKind::RangeError => "RangeError",
            ErrorKind::SyntaxError => "SyntaxError",
            ErrorKind::ReferenceError => "ReferenceError",
            ErrorKind::EvalError => "EvalError",
            ErrorKind::UriError => "URIError",
            ErrorKind::AggregateError => "AggregateError",
        }
    }

    pub fn from_name(name: &str) -> Option<ErrorKind> {
        ErrorKind::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

/// Error Data
///
/// The observable state of an error object. The stack text is kept for
/// display only.
#[derive(Clone, Debug)]
pub struct ErrorData {
    kind: ErrorKind,
    name: Value,
    message: Value,
    cause: Option<Value>,
    stack: String,
}

impl ErrorData {
    pub fn new(kind: ErrorKind, message: &str, cause: Option<Value>) -> ErrorData {
        ErrorData {
            kind,
            name: Value::new_string(kind.name()),
            message: Value::new_string(message),
            cause,
            stack: format!("{}: {}\n    at <anonymous>", kind.name(), message),
        }
    }

    pub fn with_name(mut self, name: Value) -> ErrorData {
        self.name = name;
        self
    }

    pub fn with_message(mut self, message: Value) -> ErrorData {
        self.message = message;
        self
    }

    pub fn with_stack(mut self, stack: &str) -> ErrorData {
        self.stack = stack.to_string();
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn name(&self) -> &Value {
        &self.name
    }

    pub fn message(&self) -> &Value {
        &self.message
    }

    pub fn cause(&self) -> Option<&Value> {
        self.cause.as_ref()
    }

    pub fn stack(&self) -> &str {
        &self.stack
    }
}

/// Search Params
///
/// The ordered key/value list of a query string. Duplicate keys are kept.
#[derive(Clone, Debug, Default)]
pub struct SearchParams(RefCell<Vec<(String, String)>>);

impl SearchParams {
    /// Parse a query string, with or without its leading `?`.
    pub fn parse(query: &str) -> SearchParams {
        let query = query.strip_prefix('?').unwrap_or(query);
        SearchParams::from_pairs(
            url::form_urlencoded::parse(query.as_bytes())
                .map(|(key, value)| (key.into_owned(), value.into_owned())),
        )
    }

    pub fn from_pairs<T: IntoIterator<Item = (String, String)>>(pairs: T) -> SearchParams {
        SearchParams(RefCell::new(pairs.into_iter().collect()))
    }

    pub fn append(&self, key: &str, value: &str) {
        self.0.borrow_mut().push((key.to_string(), value.to_string()));
    }

    pub fn pairs(&self) -> Vec<(String, String)> {
        self.0.borrow().clone()
    }

    pub fn serialize(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.0.borrow().iter())
            .finish()
    }
}
