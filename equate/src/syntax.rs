use crate::lex;
use crate::lex::Token;
use std::borrow::Cow::{self, Borrowed, Owned};

/// Bracket Highlighter
///
/// Underlines the bracket that matches the one under the cursor. Parens,
/// square brackets and braces are matched independently.
#[derive(Default)]
pub struct BracketHighlighter {}

impl BracketHighlighter {
    pub fn new() -> BracketHighlighter {
        BracketHighlighter {}
    }

    pub fn highlight<'a>(&self, text: &'a str, index: usize) -> Cow<'a, str> {
        let tokens = match lex::scan(text) {
            Ok(tokens) => tokens,
            Err(_) => return Borrowed(text),
        };
        let span = match find_token_at_cursor(&tokens, index)
            .and_then(|bracket| find_matching_bracket(&tokens, bracket))
        {
            Some(token) => token.span,
            None => return Borrowed(text),
        };
        Owned(format!(
            "{}\x1b[4m{}\x1b[0m{}",
            &text[..span.0],
            &text[span.0..span.1],
            &text[span.1..]
        ))
    }

    /// True if the character before the cursor is a bracket, which is
    /// when the line needs highlighting again.
    pub fn highlight_check(&self, text: &str, index: usize) -> bool {
        let tokens = match lex::scan(text) {
            Ok(tokens) => tokens,
            Err(_) => return false,
        };
        matches!(
            find_token_at_cursor(&tokens, index.saturating_sub(1)),
            Some((_, token)) if token.token_type.matching_bracket().is_some()
        )
    }
}

fn find_matching_bracket<'a>(tokens: &'a [Token], bracket: (usize, &'a Token)) -> Option<&'a Token> {
    let (idx, token) = bracket;
    let have = &token.token_type;
    let want = have.matching_bracket()?;
    let mut iter: Box<dyn Iterator<Item = &Token>> = match have.is_open_bracket() {
        true => Box::new(tokens[(idx + 1)..].iter()),
        false => Box::new(tokens[..idx].iter().rev()),
    };

    let mut stack = 0;
    for it in &mut *iter {
        if it.token_type == *have {
            stack += 1;
        } else if it.token_type == want {
            if stack == 0 {
                return Some(it);
            }
            stack -= 1;
        }
    }
    None
}

fn find_token_at_cursor(tokens: &[Token], index: usize) -> Option<(usize, &Token)> {
    find_token_at_index(tokens, index).or_else(|| match index {
        0 => None,
        _ => find_token_at_index(tokens, index - 1),
    })
}

fn find_token_at_index(tokens: &[Token], index: usize) -> Option<(usize, &Token)> {
    tokens
        .iter()
        .enumerate()
        .find(|(_, it)| index >= it.span.0 && index < it.span.1)
}
