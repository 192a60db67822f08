//! tortuga_lexer: the tokenizer and locale alias tables.
//!
//! Entry points: [`tokenize`] / [`Lexer`] for scanning,
//! [`AliasTable::build`] for turning a [`Locale`] declaration into a
//! lookup table, and [`locales`] for the built-in languages.
mod lexer;
mod locale;
pub mod locales;

pub use lexer::{Lexer, tokenize};
pub use locale::{AliasTable, Locale, LocaleError};
