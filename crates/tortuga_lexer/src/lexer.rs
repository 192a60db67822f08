//! Lexer implementation.
//!
//! Scans program text into tokens in one left-to-right pass with one
//! character of lookahead, no backtracking. Lexing is total: every input
//! produces a token sequence, and characters the scanner has no class for
//! come out as `Delimiter` tokens for the grammar layer to judge.
//!
//! Related: `AliasTable` (word resolution), `tortuga_syntax` (tokens).
use tortuga_syntax::{Span, Token, TokenKind};

use crate::locale::AliasTable;

/// Tortuga lexer.
///
/// All scan state is per-instance; independent scans share nothing but the
/// read-only alias table.
pub struct Lexer<'src, 'loc> {
    input: &'src str,
    bytes: &'src [u8],
    i: usize,
    tokens: Vec<Token<'src>>,
    table: &'loc AliasTable,
}

impl<'src, 'loc> Lexer<'src, 'loc> {
    /// Create a new lexer over `input`, resolving words through `table`.
    pub fn new(input: &'src str, table: &'loc AliasTable) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            i: 0,
            tokens: Vec::new(),
            table,
        }
    }

    /// Run the scan; ownership of the token sequence passes to the caller.
    pub fn lex(mut self) -> Vec<Token<'src>> {
        let approx = self.bytes.len().saturating_div(3).max(16);
        self.tokens.reserve(approx);
        while self.i < self.bytes.len() {
            let start = self.i;
            match self.peek_char() {
                Some(' ' | '\t') => {
                    self.i += 1;
                }
                Some('\n') => {
                    self.i += 1;
                    self.push(TokenKind::Delimiter, start);
                }
                Some(':') => {
                    // ':' opens a variable only when a letter follows;
                    // otherwise it is an ordinary delimiter.
                    self.i += 1;
                    if self.peek_char().is_some_and(|ch| self.table.is_letter(ch)) {
                        self.eat_letters();
                        self.push(TokenKind::Variable, start);
                    } else {
                        self.push(TokenKind::Delimiter, start);
                    }
                }
                Some(ch) if ch.is_ascii_digit() => {
                    while self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
                        self.i += 1;
                    }
                    self.push(TokenKind::Number, start);
                }
                Some(ch) if self.table.is_letter(ch) => {
                    self.eat_letters();
                    let word = &self.input[start..self.i];
                    let kind = match self.table.resolve(word) {
                        Some(p) => TokenKind::Primitive(p),
                        None => TokenKind::ProcedureName,
                    };
                    self.push(kind, start);
                }
                Some(other) => {
                    self.i += other.len_utf8();
                    self.push(TokenKind::Delimiter, start);
                }
                None => break,
            }
        }
        self.tokens
    }

    /// Maximal letter run; stops at the first non-letter.
    fn eat_letters(&mut self) {
        while let Some(ch) = self.peek_char() {
            if self.table.is_letter(ch) {
                self.i += ch.len_utf8();
            } else {
                break;
            }
        }
    }

    fn push(&mut self, kind: TokenKind, start: usize) {
        self.tokens.push(Token {
            kind,
            span: Span::new(start as u32, (self.i - 1) as u32),
            text: &self.input[start..self.i],
        });
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.i..].chars().next()
    }
}

/// Tokenize `input` under the given locale table.
pub fn tokenize<'src>(input: &'src str, table: &AliasTable) -> Vec<Token<'src>> {
    Lexer::new(input, table).lex()
}
