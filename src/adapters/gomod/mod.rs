//! Lax `go.mod` parser
//!
//! Implements `DeclarationParser` for Go module files. Only the `module`
//! directive is interpreted; every other directive is tokenized (so syntax
//! errors still surface) and then ignored.

mod lexer;

use crate::core::models::{Declaration, ModulePath, ParseError};
use crate::core::ports::DeclarationParser;
use crate::core::services::DECLARATION_FILE;

use lexer::{Line, Token};

/// Parser for `go.mod` files
#[derive(Debug, Clone, Copy, Default)]
pub struct GoModParser;

impl DeclarationParser for GoModParser {
    fn file_name(&self) -> &'static str {
        DECLARATION_FILE
    }

    fn parse(&self, _path: &str, contents: &[u8]) -> Result<Declaration, ParseError> {
        let source = std::str::from_utf8(contents).map_err(|_| ParseError::InvalidUtf8)?;
        parse_declaration(source)
    }
}

/// Parse go.mod source into a declaration
pub fn parse_declaration(source: &str) -> Result<Declaration, ParseError> {
    let mut declaration: Option<Declaration> = None;
    let mut block: Option<(String, usize)> = None;

    for line in lexer::tokenize(source)? {
        if let Some((verb, _)) = &block {
            if line.tokens == [Token::RParen] {
                block = None;
                continue;
            }
            check_parens(&line)?;
            if verb == "module" {
                record_module(&mut declaration, &line, &line.tokens)?;
            }
            continue;
        }

        let verb = match line.tokens.first() {
            Some(Token::Ident(verb)) => verb.clone(),
            Some(Token::RParen) => return Err(ParseError::syntax(line.number, "unexpected )")),
            _ => return Err(ParseError::syntax(line.number, "expected directive")),
        };

        if line.tokens.last() == Some(&Token::LParen) {
            let head = &line.tokens[..line.tokens.len() - 1];
            if head.len() != 1 {
                return Err(ParseError::syntax(line.number, "unexpected ("));
            }
            block = Some((verb, line.number));
            continue;
        }

        check_parens(&line)?;
        if verb == "module" {
            record_module(&mut declaration, &line, &line.tokens[1..])?;
        }
    }

    if let Some((_, opened_at)) = block {
        return Err(ParseError::syntax(opened_at, "unclosed block"));
    }

    declaration.ok_or(ParseError::MissingModule)
}

fn check_parens(line: &Line) -> Result<(), ParseError> {
    if line.tokens.iter().any(|t| matches!(t, Token::LParen | Token::RParen)) {
        return Err(ParseError::syntax(line.number, "unexpected parenthesis"));
    }
    Ok(())
}

fn record_module(
    declaration: &mut Option<Declaration>,
    line: &Line,
    args: &[Token],
) -> Result<(), ParseError> {
    if declaration.is_some() {
        return Err(ParseError::DuplicateModule { line: line.number });
    }

    let path = match args {
        [Token::Ident(path) | Token::Str(path)] => path,
        _ => return Err(ParseError::syntax(line.number, "usage: module module/path")),
    };
    let module =
        ModulePath::new(path.as_str()).map_err(|_| ParseError::EmptyModulePath { line: line.number })?;

    let deprecated = line
        .comment
        .as_deref()
        .and_then(|c| c.strip_prefix("Deprecated:"))
        .map(|notice| notice.trim().to_string());

    *declaration = Some(Declaration { module, deprecated });
    Ok(())
}
