use crate::object::{PropertyKey, Slot};
use crate::value::Value;
use indexmap::IndexMap;
use log::debug;

/// The recursion budget used when none, or an unusable one, is given.
pub const DEFAULT_DEPTH: u32 = 10;

/// Depth
///
/// The remaining number of times a composite comparison may descend
/// into nested values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Depth {
    Bounded(u32),
    Unbounded,
}

impl Depth {
    pub fn is_exhausted(&self) -> bool {
        *self == Depth::Bounded(0)
    }

    /// The budget left after one descent.
    pub fn decrement(&self) -> Depth {
        match self {
            Depth::Bounded(depth) => Depth::Bounded(depth.saturating_sub(1)),
            Depth::Unbounded => Depth::Unbounded,
        }
    }
}

impl Default for Depth {
    fn default() -> Self {
        Depth::Bounded(DEFAULT_DEPTH)
    }
}

/// Options
///
/// The normalized comparison configuration. An options record is never
/// modified by a comparison; composite cases compare nested values under
/// the record produced by [`Options::descend`].
///
/// Fields that the engine does not recognize are carried in `extra` so
/// that custom cases can read them.
#[derive(Clone, Debug, Default)]
pub struct Options {
    pub loose: bool,
    pub own_keys: bool,
    pub compare_descriptors: bool,
    pub deep: bool,
    pub depth: Depth,
    pub extra: IndexMap<String, Value>,
}

impl Options {
    pub fn new() -> Options {
        Options::default()
    }

    pub fn loose(mut self, loose: bool) -> Options {
        self.loose = loose;
        self
    }

    pub fn own_keys(mut self, own_keys: bool) -> Options {
        self.own_keys = own_keys;
        self
    }

    pub fn compare_descriptors(mut self, compare_descriptors: bool) -> Options {
        self.compare_descriptors = compare_descriptors;
        self
    }

    pub fn deep(mut self, deep: bool) -> Options {
        self.deep = deep;
        self
    }

    pub fn depth(mut self, depth: u32) -> Options {
        self.depth = Depth::Bounded(depth);
        self
    }

    pub fn unbounded(mut self) -> Options {
        self.depth = Depth::Unbounded;
        self
    }

    pub fn extra(mut self, name: &str, value: Value) -> Options {
        self.extra.insert(name.to_string(), value);
        self
    }

    /// Normalize
    ///
    /// Build options from an options object. Recognized flags are coerced
    /// by truthiness and the depth is read as follows:
    ///
    /// * absent, NaN, negative or not a number: the default of 10
    /// * positive infinity: unbounded
    /// * fractional: rounded up, so 2.5 permits three descents
    ///
    /// Anything that is not an object normalizes to the defaults, and
    /// unrecognized own data properties are copied into `extra`.
    pub fn normalize(value: Option<&Value>) -> Options {
        let obj = match value {
            Some(Value::Object(obj)) => obj,
            _ => return Options::default(),
        };

        let mut options = Options::default();
        for key in obj.own_keys() {
            let name = match &key {
                PropertyKey::String(name) => name.as_str(),
                PropertyKey::Symbol(_) => continue,
            };
            let value = match obj.get_own_property(&key).map(|prop| prop.slot) {
                Some(Slot::Data { value, .. }) => value,
                _ => Value::Undefined,
            };
            match name {
                "loose" => options.loose = value.truthy(),
                "ownKeys" => options.own_keys = value.truthy(),
                "compareDescriptors" => options.compare_descriptors = value.truthy(),
                "deep" => options.deep = value.truthy(),
                "depth" => options.depth = normalize_depth(&value),
                _ => {
                    options.extra.insert(name.to_string(), value);
                }
            }
        }
        options
    }

    /// Can Descend
    ///
    /// True if nested values should be compared through the pipeline
    /// rather than as primitives: `deep` is set and depth remains.
    pub fn can_descend(&self) -> bool {
        self.deep && !self.depth.is_exhausted()
    }

    /// The options nested values are compared under: the same flags with
    /// one less unit of depth.
    pub fn descend(&self) -> Options {
        Options {
            depth: self.depth.decrement(),
            ..self.clone()
        }
    }
}

fn normalize_depth(value: &Value) -> Depth {
    match value {
        Value::Number(depth) if *depth == f64::INFINITY => Depth::Unbounded,
        Value::Number(depth) if *depth >= 0.0 => Depth::Bounded(depth.ceil().min(u32::MAX as f64) as u32),
        Value::Undefined => Depth::default(),
        other => {
            debug!("ignoring depth {:#}, using {}", other, DEFAULT_DEPTH);
            Depth::default()
        }
    }
}
