use std::fmt::Formatter;
use std::iter::Peekable;
use std::str::Chars;

const BACKSPACE: u32 = 0x8;
const FORM_FEED: u32 = 0xc;
const VERTICAL_TAB: u32 = 0xb;
const NULL: u32 = 0x0;

/// Write Escaped Str
///
/// Write `text` as a double quoted string literal, escaping quotes,
/// backslashes and control characters.
pub fn write_escaped_str(text: &str, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "\"")?;
    for c in text.chars() {
        match c {
            '"' | '\\' => write!(f, "\\{}", c)?,
            '\t' => write!(f, "\\t")?,
            '\n' => write!(f, "\\n")?,
            '\r' => write!(f, "\\r")?,
            c => match c as u32 {
                NULL => write!(f, "\\0")?,
                BACKSPACE => write!(f, "\\b")?,
                VERTICAL_TAB => write!(f, "\\v")?,
                FORM_FEED => write!(f, "\\f")?,
                _ if c.is_control() => write!(f, "\\u{:04x}", c as u32)?,
                _ => write!(f, "{}", c)?,
            },
        }
    }
    write!(f, "\"")
}

/// Unescape
///
/// Given the body of a string literal (without its quotes), replace every
/// escape sequence with the character it denotes. Returns None on a
/// malformed escape.
pub fn unescape(body: &str) -> Option<String> {
    let mut text = String::with_capacity(body.len());
    let mut cur = body.chars().peekable();
    while let Some(c) = cur.next() {
        if c != '\\' {
            text.push(c);
            continue;
        }
        text.push(match cur.next()? {
            'n' => '\n',
            't' => '\t',
            'r' => '\r',
            'b' => char::from_u32(BACKSPACE)?,
            'f' => char::from_u32(FORM_FEED)?,
            'v' => char::from_u32(VERTICAL_TAB)?,
            '0' => char::from_u32(NULL)?,
            'x' => hex_char(&mut cur, 2)?,
            'u' if cur.peek() == Some(&'{') => {
                cur.next();
                let mut code = 0u32;
                let mut digits = 0;
                loop {
                    match cur.next()? {
                        '}' if digits > 0 => break,
                        c => {
                            code = code.checked_mul(16)?.checked_add(c.to_digit(16)?)?;
                            digits += 1;
                        }
                    }
                }
                char::from_u32(code)?
            }
            'u' => hex_char(&mut cur, 4)?,
            // line continuation
            '\n' => continue,
            c => c,
        });
    }
    Some(text)
}

fn hex_char(cur: &mut Peekable<Chars>, width: usize) -> Option<char> {
    let mut code = 0u32;
    for _ in 0..width {
        code = code * 16 + cur.next()?.to_digit(16)?;
    }
    char::from_u32(code)
}
