use crate::{lex, parse};

#[derive(thiserror::Error, Debug, Eq, PartialEq)]
pub enum Error {
    #[error("options must be an object, but got {0}")]
    InvalidOptions(&'static str),

    #[error("case name must not be empty")]
    InvalidCaseName,

    #[error("invalid option name '{0}' for case {1}")]
    InvalidCaseOption(String, String),

    #[error("duplicate option name '{0}' for case {1}")]
    DuplicateCaseOption(String, String),

    #[error("no case named {0}")]
    UnknownCase(String),

    #[error(transparent)]
    ParseError(#[from] parse::Error),

    #[error(transparent)]
    LexError(#[from] lex::Error),
}
