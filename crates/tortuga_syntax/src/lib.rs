//! tortuga_syntax: shared syntax types.
//!
//! Spans, tokens, primitives, source text, and the error-message catalog
//! the grammar layer fills from token positions.
mod catalog;
mod primitive;
mod source;
mod span;
mod token;

pub use catalog::{ErrorCode, expand};
pub use primitive::Primitive;
pub use source::{SourceFile, SourceText};
pub use span::{ByteIndex, Span};
pub use token::{Token, TokenKind};
