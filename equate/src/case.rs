use crate::error::Error;
use crate::options::Options;
use crate::pipeline::Pipeline;
use crate::value::Value;
use std::borrow::Cow;
use std::fmt::{Debug, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};

/// Decides whether a case applies to a pair of values.
pub type Guard = fn(&Value, &Value, &Options) -> bool;

/// Compares a pair of values the guard accepted. The pipeline is the one
/// the comparison is running under, so that nested values are compared by
/// the same cases.
pub type Compare = fn(&Value, &Value, &Options, &Pipeline) -> bool;

/// Derives the options a case runs under from the ambient options.
pub type ParseOptions = fn(&Options) -> Options;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Case Descriptor
///
/// Metadata describing a case: a process unique id, the case name, the
/// names of the option fields it reads and an optional transform applied
/// to the ambient options before the case runs.
#[derive(Clone)]
pub struct CaseDescriptor {
    id: u64,
    name: String,
    options: Vec<String>,
    parse_options: Option<ParseOptions>,
}

impl CaseDescriptor {
    /// Create a descriptor.
    ///
    /// # Errors
    /// The name must contain something other than whitespace, and option
    /// names must be non-empty and distinct.
    pub fn new(
        name: &str,
        options: &[&str],
        parse_options: Option<ParseOptions>,
    ) -> Result<CaseDescriptor, Error> {
        if name.trim().is_empty() {
            return Err(Error::InvalidCaseName);
        }
        for (idx, option) in options.iter().enumerate() {
            if option.trim().is_empty() {
                return Err(Error::InvalidCaseOption(option.to_string(), name.into()));
            }
            if options[..idx].contains(option) {
                return Err(Error::DuplicateCaseOption(option.to_string(), name.into()));
            }
        }
        Ok(CaseDescriptor::builtin(name, options).parse_options(parse_options))
    }

    /// Descriptor for a case of the built-in library, whose name and
    /// option list are known to be well formed.
    pub(crate) fn builtin(name: &str, options: &[&str]) -> CaseDescriptor {
        CaseDescriptor {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            name: name.to_string(),
            options: options.iter().map(|it| it.to_string()).collect(),
            parse_options: None,
        }
    }

    fn parse_options(mut self, parse_options: Option<ParseOptions>) -> CaseDescriptor {
        self.parse_options = parse_options;
        self
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn has_parse_options(&self) -> bool {
        self.parse_options.is_some()
    }
}

impl Debug for CaseDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaseDescriptor")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("options", &self.options)
            .field("parse_options", &self.parse_options.is_some())
            .finish()
    }
}

/// Case
///
/// One entry of a comparison pipeline. A case is immutable once built.
#[derive(Clone)]
pub struct Case {
    guard: Guard,
    compare: Compare,
    descriptor: Option<CaseDescriptor>,
}

impl Case {
    /// Create an anonymous case.
    pub fn new(guard: Guard, compare: Compare) -> Case {
        Case {
            guard,
            compare,
            descriptor: None,
        }
    }

    pub fn with_descriptor(guard: Guard, compare: Compare, descriptor: CaseDescriptor) -> Case {
        Case {
            guard,
            compare,
            descriptor: Some(descriptor),
        }
    }

    pub fn descriptor(&self) -> Option<&CaseDescriptor> {
        self.descriptor.as_ref()
    }

    pub fn name(&self) -> Option<&str> {
        self.descriptor.as_ref().map(CaseDescriptor::name)
    }

    /// Options
    ///
    /// The options this case runs under: the result of the descriptor's
    /// option transform if it declares one, otherwise `ambient` itself.
    pub fn options<'a>(&self, ambient: &'a Options) -> Cow<'a, Options> {
        match self.descriptor.as_ref().and_then(|it| it.parse_options) {
            Some(parse_options) => Cow::Owned(parse_options(ambient)),
            None => Cow::Borrowed(ambient),
        }
    }

    pub fn guard(&self, a: &Value, b: &Value, options: &Options) -> bool {
        (self.guard)(a, b, options)
    }

    pub fn compare(&self, a: &Value, b: &Value, options: &Options, pipeline: &Pipeline) -> bool {
        (self.compare)(a, b, options, pipeline)
    }
}

impl Debug for Case {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.descriptor {
            Some(descriptor) => write!(f, "Case({})", descriptor.name()),
            None => write!(f, "Case(<anonymous>)"),
        }
    }
}
