use std::iter::Peekable;
use std::str::CharIndices;

/// Token Type
///
/// [`TokenType`] represents the type of a span as recognized
/// by the scanner.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TokenType {
    BigInt,
    Colon,
    Comma,
    Identifier,
    LeftBrace,
    LeftBracket,
    LeftParen,
    Minus,
    Number,
    RegExp,
    RightBrace,
    RightBracket,
    RightParen,
    String,
}

impl TokenType {
    pub fn is_open_bracket(&self) -> bool {
        matches!(
            self,
            TokenType::LeftParen | TokenType::LeftBracket | TokenType::LeftBrace
        )
    }

    pub fn is_close_bracket(&self) -> bool {
        matches!(
            self,
            TokenType::RightParen | TokenType::RightBracket | TokenType::RightBrace
        )
    }

    /// The bracket that closes this one, or opens it.
    pub fn matching_bracket(&self) -> Option<TokenType> {
        match self {
            TokenType::LeftParen => Some(TokenType::RightParen),
            TokenType::LeftBracket => Some(TokenType::RightBracket),
            TokenType::LeftBrace => Some(TokenType::RightBrace),
            TokenType::RightParen => Some(TokenType::LeftParen),
            TokenType::RightBracket => Some(TokenType::LeftBracket),
            TokenType::RightBrace => Some(TokenType::LeftBrace),
            _ => None,
        }
    }
}

/// Token
///
/// [`Token`] is the main unit of output of the scanner, and is
/// the pairing of a span with its scanned type. The `span`
/// field contains a start and end index from the original scanned
/// &str and may be used to extract the span from the original
/// text (e.g. `text[token.span.0..token.span.1]`).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    /// (start, end) index of original span in the source &str
    pub span: (usize, usize),
    /// The type output by the scanner
    pub token_type: TokenType,
}

impl Token {
    pub fn new(span: (usize, usize), token_type: TokenType) -> Token {
        Token { span, token_type }
    }

    /// span
    ///
    /// Given the originally scanned &str, extract the span from the
    /// &str given the (start, end) indexes stored in self.span.
    ///
    /// # Arguments
    /// `text` - The originally scanned &str
    ///
    /// # Safety
    /// This method assumes the originally scanned &str be used, and
    /// may panic otherwise.
    pub fn span<'a>(&self, text: &'a str) -> &'a str {
        &text[self.span.0..self.span.1]
    }

    pub fn is_identifier(&self, text: &str, name: &str) -> bool {
        self.token_type == TokenType::Identifier && self.span(text) == name
    }
}

/// Error Type
///
/// The type of error encountered by the scanner.
#[derive(thiserror::Error, Debug, Eq, PartialEq)]
pub enum Error {
    #[error("incomplete")]
    Incomplete,
    #[error("unexpected character '{0}'")]
    UnexpectedToken(char),
    #[error("unexpected character following '{0}': '{1}'")]
    UnexpectedCharacterFollowing(String, String),
}

/// Scan
///
/// [`scan`] scans the provided text and returns a vector of all
/// scanned [`Token`]s.
///
/// Unterminated strings and regular expressions are reported as
/// [`Error::Incomplete`] so that interactive callers can ask for more
/// input.
///
/// # Examples
///
/// ```
///     use equate::lex;
///     let text = "[1, { a: 'b' }]";
///     let tokens = lex::scan(text).unwrap();
///     assert_eq!(tokens.len(), 9);
/// ```
///
/// # Arguments
/// `text` - the text to return tokens for
pub fn scan(text: &str) -> Result<Vec<Token>, Error> {
    let mut tokens = vec![];
    let mut cur = text.char_indices().peekable();

    while let Some(&(_, c)) = cur.peek() {
        tokens.push(match c {
            '(' | ')' | '[' | ']' | '{' | '}' | ',' | ':' => scan_simple_token(&mut cur)?,
            '"' | '\'' => scan_string(&mut cur)?,
            '/' => match scan_slash(&mut cur)? {
                Some(token) => token,
                None => continue,
            },
            '-' => scan_minus(&mut cur)?,
            '.' => scan_number(&mut cur)?,
            _ if is_initial_identifier(c) => scan_identifier(&mut cur)?,
            _ if c.is_ascii_digit() => scan_number(&mut cur)?,
            _ if c.is_whitespace() => {
                cur.next();
                continue;
            }
            _ => return Err(Error::UnexpectedToken(c)),
        });
    }

    Ok(tokens)
}

fn scan_simple_token(cur: &mut Peekable<CharIndices>) -> Result<Token, Error> {
    let (start, c) = cur.next().ok_or(Error::Incomplete)?;
    let token_type = match c {
        '(' => TokenType::LeftParen,
        ')' => TokenType::RightParen,
        '[' => TokenType::LeftBracket,
        ']' => TokenType::RightBracket,
        '{' => TokenType::LeftBrace,
        '}' => TokenType::RightBrace,
        ',' => TokenType::Comma,
        ':' => TokenType::Colon,
        c => return Err(Error::UnexpectedToken(c)),
    };
    Ok(Token::new((start, start + c.len_utf8()), token_type))
}

/// Scan Slash
///
/// A slash starts either a `//` comment, which runs until the next
/// '\n' and produces no token, or a regular expression literal.
fn scan_slash(cur: &mut Peekable<CharIndices>) -> Result<Option<Token>, Error> {
    let (start, _) = cur.next().ok_or(Error::Incomplete)?;
    if let Some(&(_, '/')) = cur.peek() {
        for (_, c) in cur.by_ref() {
            if c == '\n' {
                break;
            }
        }
        return Ok(None);
    }
    scan_regexp(cur, start).map(Some)
}

/// Scan RegExp
///
/// Scan the body of a regular expression literal up to its closing
/// slash, which does not count when escaped or inside a character
/// class, followed by any flag letters.
///
/// # Arguments
/// `cur` - The cursor, pointing just past the opening slash.
/// `start` - The offset of the opening slash.
fn scan_regexp(cur: &mut Peekable<CharIndices>, start: usize) -> Result<Token, Error> {
    let mut escaping = false;
    let mut in_class = false;
    let mut end = loop {
        let (offset, c) = cur.next().ok_or(Error::Incomplete)?;
        match c {
            '\n' => return Err(Error::UnexpectedCharacterFollowing("/".into(), "\\n".into())),
            _ if escaping => escaping = false,
            '\\' => escaping = true,
            '[' => in_class = true,
            ']' => in_class = false,
            '/' if !in_class => break offset + 1,
            _ => {}
        }
    };
    while let Some(&(offset, c)) = cur.peek() {
        if !c.is_ascii_alphabetic() {
            break;
        }
        end = offset + c.len_utf8();
        cur.next();
    }
    Ok(Token::new((start, end), TokenType::RegExp))
}

fn scan_string(cur: &mut Peekable<CharIndices>) -> Result<Token, Error> {
    let (start, quote) = cur.next().ok_or(Error::Incomplete)?;

    let mut escape_next = false;
    while let Some(&(offset, c)) = cur.peek() {
        cur.next();
        if c == quote && !escape_next {
            return Ok(Token::new((start, offset + c.len_utf8()), TokenType::String));
        }
        escape_next = c == '\\' && !escape_next;
    }

    Err(Error::Incomplete)
}

/// Scan Minus
///
/// A minus immediately followed by a digit or a dot is part of a
/// number; otherwise it is a lone sign, as in `-Infinity`.
fn scan_minus(cur: &mut Peekable<CharIndices>) -> Result<Token, Error> {
    let mut lookahead = cur.clone();
    let (start, _) = lookahead.next().ok_or(Error::Incomplete)?;
    match lookahead.peek() {
        Some(&(_, c)) if c.is_ascii_digit() || c == '.' => scan_number(cur),
        _ => {
            cur.next();
            Ok(Token::new((start, start + 1), TokenType::Minus))
        }
    }
}

/// Scan Number
///
/// Scan a numeric literal: an optional sign, digits with an optional
/// fraction and exponent, or a `0x`/`0o`/`0b` prefixed integer. A
/// trailing `n` makes the literal a bigint.
fn scan_number(cur: &mut Peekable<CharIndices>) -> Result<Token, Error> {
    let start = cur.peek().ok_or(Error::Incomplete)?.0;
    let mut end = start;
    let mut prev = ' ';
    while let Some(&(offset, c)) = cur.peek() {
        let accept = c.is_ascii_alphanumeric()
            || c == '.'
            || c == '_'
            || ((c == '+' || c == '-') && (end == start || prev == 'e' || prev == 'E'));
        if !accept {
            break;
        }
        end = offset + c.len_utf8();
        prev = c;
        cur.next();
    }

    let token_type = if prev == 'n' {
        TokenType::BigInt
    } else {
        TokenType::Number
    };
    Ok(Token::new((start, end), token_type))
}

fn scan_identifier(cur: &mut Peekable<CharIndices>) -> Result<Token, Error> {
    let start = cur.peek().ok_or(Error::Incomplete)?.0;
    let mut end = start;
    while let Some(&(offset, c)) = cur.peek() {
        if !is_subsequent_identifier(c) {
            break;
        }
        end = offset + c.len_utf8();
        cur.next();
    }
    Ok(Token::new((start, end), TokenType::Identifier))
}

pub fn is_initial_identifier(c: char) -> bool {
    c.is_alphabetic() || c == '$' || c == '_'
}

pub fn is_subsequent_identifier(c: char) -> bool {
    is_initial_identifier(c) || c.is_ascii_digit() || c == '.'
}
