use crate::case::Case;
use crate::cases::{DEFAULT_ORDER, library};
use crate::error::Error;
use crate::options::Options;
use crate::value::Value;
use lazy_static::lazy_static;
use log::trace;

lazy_static! {
    static ref DEFAULT_PIPELINE: Pipeline = Pipeline::new(
        DEFAULT_ORDER
            .iter()
            .filter_map(|name| library().get(*name).cloned())
            .collect()
    );
}

/// Default Pipeline
///
/// Every case of the library in precedence order. Built on first use and
/// shared by the whole process.
pub fn default_pipeline() -> &'static Pipeline {
    &DEFAULT_PIPELINE
}

/// Pipeline
///
/// An ordered list of cases. For any pair of values the first case whose
/// guard accepts the pair decides the result; later cases are never
/// consulted.
#[derive(Clone, Debug)]
pub struct Pipeline {
    cases: Vec<Case>,
}

impl Pipeline {
    pub fn new(cases: Vec<Case>) -> Pipeline {
        Pipeline { cases }
    }

    /// From Names
    ///
    /// Assemble a pipeline from cases of the library, in the given order.
    ///
    /// # Errors
    /// Every name must name a case of the library.
    pub fn from_names(names: &[&str]) -> Result<Pipeline, Error> {
        names
            .iter()
            .map(|name| {
                library()
                    .get(*name)
                    .cloned()
                    .ok_or_else(|| Error::UnknownCase(name.to_string()))
            })
            .collect::<Result<Vec<Case>, Error>>()
            .map(Pipeline::new)
    }

    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    /// The case names in order; anonymous cases have none.
    pub fn names(&self) -> Vec<Option<&str>> {
        self.cases.iter().map(Case::name).collect()
    }

    /// Decide
    ///
    /// The case that decides the comparison of `a` and `b`, if any.
    pub fn decide(&self, a: &Value, b: &Value, options: &Options) -> Option<&Case> {
        self.cases
            .iter()
            .find(|case| case.guard(a, b, &case.options(options)))
    }

    /// Equals
    ///
    /// The dispatch loop. Each case sees the options produced by its own
    /// option transform, or `options` if it has none. Composite cases call
    /// back into this method with their child options.
    ///
    /// Returns false if no case accepts the pair, which the default
    /// pipeline never allows since its last case accepts everything.
    pub fn equals(&self, a: &Value, b: &Value, options: &Options) -> bool {
        for case in &self.cases {
            let options = case.options(options);
            if case.guard(a, b, &options) {
                trace!("{:?} decides {:#} and {:#}", case, a, b);
                return case.compare(a, b, &options, self);
            }
        }
        trace!("no case decides {:#} and {:#}", a, b);
        false
    }

    /// Equals With
    ///
    /// Compare `a` and `b` under an options object, which is normalized
    /// once before the comparison starts. `undefined` and `null` stand for
    /// no options.
    ///
    /// # Errors
    /// Options that are present but not a plain object value are rejected
    /// with [`Error::InvalidOptions`].
    pub fn equals_with(&self, a: &Value, b: &Value, options: Option<&Value>) -> Result<bool, Error> {
        let options = parse_options(options)?;
        Ok(self.equals(a, b, &options))
    }
}

/// Parse Options
///
/// Check that an options argument is object shaped and normalize it.
pub fn parse_options(value: Option<&Value>) -> Result<Options, Error> {
    match value {
        None | Some(Value::Undefined) | Some(Value::Null) => Ok(Options::default()),
        Some(Value::Object(obj)) if !obj.is_callable() => Ok(Options::normalize(value)),
        Some(other) => Err(Error::InvalidOptions(other.type_of())),
    }
}
