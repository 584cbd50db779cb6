//! Lexer for the declaration language
//!
//! Handles tokenization of:
//! - Keywords (`import`, `type`) and identifiers
//! - Integer and string literals
//! - `.` and `=`
//! - Line structure: one `Newline` token per non-blank line, `#` comments
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)

pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_id};

use crate::ast::Span;
use crate::diagnostics::CompileError;

/// Lexer for declaration-language source.
///
/// Collects every error it finds instead of stopping at the first one.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    at_line_start: bool,
    tokens: Vec<Token>,
    errors: Vec<CompileError>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            at_line_start: true,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// The token stream always ends with an `Eof` token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, Vec<CompileError>> {
        while !self.is_at_end() {
            self.scan_token();
        }

        self.tokens.push(Token::new(
            TokenKind::Eof,
            Span::new(self.current_pos, self.current_pos),
        ));

        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        let start = self.current_pos;

        let Some(c) = self.advance() else {
            return;
        };

        match c {
            ' ' | '\t' | '\r' => {}

            '#' => {
                while let Some(c) = self.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.advance();
                }
            }

            '\n' => {
                // Blank lines and comment-only lines produce no token
                if !self.at_line_start {
                    self.tokens
                        .push(Token::new(TokenKind::Newline, Span::new(start, self.current_pos)));
                }
                self.at_line_start = true;
            }

            '.' => self.add_token(TokenKind::Dot, start),
            '=' => self.add_token(TokenKind::Eq, start),
            '"' => self.scan_string(start),
            '0'..='9' => self.scan_number(start),
            _ if is_ident_start(c) => self.scan_identifier(start),

            _ => {
                self.errors.push(CompileError::syntax(
                    format!("Unexpected character '{}'", c),
                    Span::new(start, self.current_pos),
                ));
            }
        }
    }

    fn add_token(&mut self, kind: TokenKind, start: usize) {
        self.at_line_start = false;
        self.tokens.push(Token::new(kind, Span::new(start, self.current_pos)));
    }

    // ========================================================================
    // Literals and identifiers
    // ========================================================================

    fn scan_number(&mut self, start: usize) {
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() || c == '_' {
                self.advance();
            } else {
                break;
            }
        }

        let digits: String = self.source[start..self.current_pos].chars().filter(|c| *c != '_').collect();
        match digits.parse::<i64>() {
            Ok(value) => self.add_token(TokenKind::Int(value), start),
            Err(_) => {
                self.errors.push(CompileError::syntax(
                    format!("Integer literal '{}' is out of range", &self.source[start..self.current_pos]),
                    Span::new(start, self.current_pos),
                ));
                self.at_line_start = false;
            }
        }
    }

    fn scan_string(&mut self, start: usize) {
        let mut value = String::new();

        loop {
            match self.advance() {
                None | Some('\n') => {
                    self.errors.push(
                        CompileError::syntax(
                            "Unterminated string literal".to_string(),
                            Span::new(start, self.current_pos),
                        )
                        .with_hint("close the string with `\"` on the same line"),
                    );
                    // The newline, if any, was consumed as part of the bad literal
                    self.at_line_start = true;
                    return;
                }
                Some('"') => break,
                Some('\\') => {
                    let escape_start = self.current_pos - 1;
                    match self.advance() {
                        Some('n') => value.push('\n'),
                        Some('t') => value.push('\t'),
                        Some('"') => value.push('"'),
                        Some('\\') => value.push('\\'),
                        other => {
                            let shown = other.map(|c| c.to_string()).unwrap_or_default();
                            self.errors.push(CompileError::syntax(
                                format!("Unknown escape sequence '\\{}'", shown),
                                Span::new(escape_start, self.current_pos),
                            ));
                        }
                    }
                }
                Some(c) => value.push(c),
            }
        }

        self.add_token(TokenKind::String(value), start);
    }

    fn scan_identifier(&mut self, start: usize) {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        let spelling = &self.source[start..self.current_pos];

        if let Some(id) = keyword_id(spelling) {
            self.add_token(TokenKind::Keyword(id), start);
        } else {
            self.add_token(TokenKind::Ident(spelling.to_string()), start);
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, Vec<CompileError>> {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================
