pub mod case;
pub mod cases;
pub mod char;
pub mod error;
pub mod lex;
pub mod number;
pub mod object;
pub mod options;
pub mod parse;
pub mod pipeline;
pub mod primitive;
pub mod syntax;
pub mod value;

pub use error::Error;
pub use options::{Depth, Options};
pub use pipeline::{Pipeline, default_pipeline};
pub use value::Value;

/// Compare two values with the default pipeline.
pub fn equals(a: &Value, b: &Value, options: &Options) -> bool {
    default_pipeline().equals(a, b, options)
}

/// Compare two values with the default pipeline under an options object.
///
/// # Errors
/// See [`Pipeline::equals_with`].
pub fn equals_with(a: &Value, b: &Value, options: Option<&Value>) -> Result<bool, Error> {
    default_pipeline().equals_with(a, b, options)
}

/// Compare two values as primitives, by same value or, if `loose` is
/// set, by coercive equality. Objects are equal only to themselves.
pub fn primitive(a: &Value, b: &Value, loose: bool) -> bool {
    primitive::compare(a, b, loose)
}
