//! go.mod tokenizer
//!
//! Splits a file into lines of tokens. Comments are dropped, except that
//! a trailing comment is kept on its line so directives can read
//! annotations like `// Deprecated:`.

use crate::core::models::ParseError;

/// A lexical token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A bare word, e.g. `module` or `example.com/foo`
    Ident(String),
    /// A quoted string, already unquoted
    Str(String),
    /// `(`
    LParen,
    /// `)`
    RParen,
}

/// The tokens of one source line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    /// Line number (1-indexed)
    pub number: usize,
    /// Tokens in order
    pub tokens: Vec<Token>,
    /// Text of a trailing `//` comment, without the slashes
    pub comment: Option<String>,
}

/// Tokenize go.mod source into non-empty lines
pub fn tokenize(source: &str) -> Result<Vec<Line>, ParseError> {
    let mut lines = Vec::new();

    for (index, text) in source.lines().enumerate() {
        let line = tokenize_line(index + 1, text)?;
        if !line.tokens.is_empty() {
            lines.push(line);
        }
    }

    Ok(lines)
}

fn tokenize_line(number: usize, text: &str) -> Result<Line, ParseError> {
    let mut line = Line {
        number,
        ..Line::default()
    };
    let mut chars = text.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            },
            '/' if text[start..].starts_with("//") => {
                line.comment = Some(text[start + 2..].trim().to_string());
                break;
            },
            '(' => {
                chars.next();
                line.tokens.push(Token::LParen);
            },
            ')' => {
                chars.next();
                line.tokens.push(Token::RParen);
            },
            '"' => {
                chars.next();
                line.tokens.push(Token::Str(interpreted_string(number, &mut chars)?));
            },
            '`' => {
                chars.next();
                let mut value = String::new();
                loop {
                    match chars.next() {
                        Some((_, '`')) => break,
                        Some((_, c)) => value.push(c),
                        None => return Err(ParseError::syntax(number, "unterminated raw string")),
                    }
                }
                line.tokens.push(Token::Str(value));
            },
            _ => {
                let mut end = text.len();
                while let Some(&(i, c)) = chars.peek() {
                    if c.is_whitespace()
                        || matches!(c, '(' | ')' | '"' | '`')
                        || text[i..].starts_with("//")
                    {
                        end = i;
                        break;
                    }
                    chars.next();
                }
                line.tokens.push(Token::Ident(text[start..end].to_string()));
            },
        }
    }

    Ok(line)
}

fn interpreted_string(
    number: usize,
    chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>,
) -> Result<String, ParseError> {
    let mut value = String::new();
    loop {
        match chars.next() {
            Some((_, '"')) => return Ok(value),
            Some((_, '\\')) => match chars.next() {
                Some((_, '\\')) => value.push('\\'),
                Some((_, '"')) => value.push('"'),
                Some((_, 'n')) => value.push('\n'),
                Some((_, 't')) => value.push('\t'),
                Some((_, 'r')) => value.push('\r'),
                Some((_, other)) => {
                    return Err(ParseError::syntax(number, format!("invalid escape \\{other}")));
                },
                None => return Err(ParseError::syntax(number, "unterminated string")),
            },
            Some((_, c)) => value.push(c),
            None => return Err(ParseError::syntax(number, "unterminated string")),
        }
    }
}
