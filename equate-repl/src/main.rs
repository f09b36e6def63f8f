use equate::case::Case;
use equate::lex::{Token, TokenType};
use equate::pipeline::parse_options;
use equate::syntax::BracketHighlighter;
use equate::{Error, Value, default_pipeline, lex, parse};
use log::debug;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Editor, Result};
use rustyline_derive::{Completer, Helper, Hinter};
use std::borrow::Cow;

#[derive(Completer, Helper, Hinter)]
struct InputValidator {
    highlighter: BracketHighlighter,
}

impl Validator for InputValidator {
    fn validate(&self, ctx: &mut ValidationContext) -> Result<ValidationResult> {
        match read_values(ctx.input()) {
            Err(Error::LexError(lex::Error::Incomplete)) | Err(Error::ParseError(parse::Error::Eof)) => {
                Ok(ValidationResult::Incomplete)
            }
            _ => Ok(ValidationResult::Valid(None)),
        }
    }
}

impl Highlighter for InputValidator {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_char(&self, line: &str, pos: usize, _forced: bool) -> bool {
        self.highlighter.highlight_check(line, pos + 1)
    }
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let mut rl: Editor<InputValidator, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(InputValidator {
        highlighter: BracketHighlighter::new(),
    }));

    println!("enter two values and an optional options object, e.g. [1, 2] [1, 2] {{ deep: true }}");
    loop {
        match rl.readline("> ") {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => {
                rl.add_history_entry(line.as_str())?;
                match eval(&line) {
                    Ok(result) => println!("{}", result),
                    Err(e) => println!("error: {}", e),
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("error: {:#?}", err);
                break;
            }
        }
    }
    Ok(())
}

/// Read every value on the line. Values may be separated by commas.
fn read_values(text: &str) -> std::result::Result<Vec<Value>, Error> {
    let tokens = lex::scan(text)?;
    let mut cur = tokens.iter().peekable();
    let mut values = vec![];
    while cur.peek().is_some() {
        values.push(parse::parse(text, &mut cur)?);
        if let Some(Token {
            token_type: TokenType::Comma,
            ..
        }) = cur.peek()
        {
            cur.next();
        }
    }
    Ok(values)
}

/// Compare the values on one line and describe the result along with
/// the case that decided it.
fn eval(text: &str) -> std::result::Result<String, Error> {
    let values = read_values(text)?;
    let (a, b, options) = match values.as_slice() {
        [a, b] => (a, b, None),
        [a, b, options] => (a, b, Some(options)),
        _ => return Ok(format!("expected 2 or 3 values, read {}", values.len())),
    };
    let options = parse_options(options)?;
    debug!("comparing under {:?}", options);

    let pipeline = default_pipeline();
    let case = pipeline
        .decide(a, b, &options)
        .and_then(Case::name)
        .unwrap_or("none");
    Ok(format!("{} ({})", pipeline.equals(a, b, &options), case))
}
