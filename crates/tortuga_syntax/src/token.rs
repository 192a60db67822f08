//! Token definitions.
//!
//! Five coarse classes only; grouping, precedence, and operator meaning all
//! belong to the grammar layer.
use crate::{Primitive, Span};

/// Token kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// A single non-word character: newline, brackets, arithmetic and
    /// comparison symbols, and anything else the scanner has no class for
    /// (the grammar layer decides whether those are errors).
    Delimiter,
    /// Maximal run of ASCII digits.
    Number,
    /// A word resolved through the active locale's alias table.
    Primitive(Primitive),
    /// `:` followed by a word; the text keeps the colon.
    Variable,
    /// A word with no alias-table entry — declaration sites and call sites
    /// look identical here.
    ProcedureName,
}

/// Token: source position, exact text, and coarse class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'src> {
    /// Token kind.
    pub kind: TokenKind,
    /// Inclusive byte span in the source text.
    pub span: Span,
    /// Exact source text, original casing preserved.
    pub text: &'src str,
}

impl Token<'_> {
    /// The resolved primitive, for primitive tokens.
    pub fn primitive(&self) -> Option<Primitive> {
        match self.kind {
            TokenKind::Primitive(p) => Some(p),
            _ => None,
        }
    }
}
