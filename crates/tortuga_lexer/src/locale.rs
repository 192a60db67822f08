//! Locale declarations and the alias tables built from them.
//!
//! A declaration is flattened once into a case-normalized map; conflicting
//! spellings are a configuration defect caught here, never resolved
//! silently during a scan.
use std::fmt;

use ahash::RandomState;
use hashbrown::HashMap;
use tortuga_syntax::{ErrorCode, Primitive, expand};

/// The spellings one human language uses for the built-in commands, plus
/// that language's error-message templates.
///
/// Declarations are plain static data; adding a language is a new `Locale`
/// value, never a scanner change.
pub struct Locale {
    pub name: &'static str,
    /// `(primitive, spellings)` entries; long forms first by convention.
    pub aliases: &'static [(Primitive, &'static [&'static str])],
    /// Letters outside ASCII `A-Z`/`a-z` that command words of this
    /// language may contain (list both cases).
    pub extra_letters: &'static [char],
    /// One template per [`ErrorCode`], with `{0}`-style placeholders.
    pub messages: &'static [(ErrorCode, &'static str)],
}

/// Defects detected while building an [`AliasTable`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LocaleError {
    /// One spelling (compared case-insensitively) is declared for two
    /// distinct primitives.
    DuplicateAlias {
        alias: String,
        first: Primitive,
        second: Primitive,
    },
    /// No template declared for an error code.
    MissingMessage { code: ErrorCode },
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleError::DuplicateAlias {
                alias,
                first,
                second,
            } => write!(
                f,
                "alias '{}' is declared for both '{}' and '{}'",
                alias,
                first.name(),
                second.name()
            ),
            LocaleError::MissingMessage { code } => {
                write!(f, "no message template for {code:?}")
            }
        }
    }
}

impl std::error::Error for LocaleError {}

/// Case-insensitive alias resolution for one locale.
///
/// Built once, read-only afterwards; a table can be shared freely across
/// concurrent tokenizations.
#[derive(Debug)]
pub struct AliasTable {
    name: &'static str,
    map: HashMap<String, Primitive, RandomState>,
    extra_letters: &'static [char],
    messages: &'static [(ErrorCode, &'static str)],
}

impl AliasTable {
    /// Flatten `locale` into a lowercase-keyed map and validate it.
    pub fn build(locale: &Locale) -> Result<AliasTable, LocaleError> {
        let approx = locale.aliases.iter().map(|(_, s)| s.len()).sum();
        let mut map: HashMap<String, Primitive, RandomState> =
            HashMap::with_capacity_and_hasher(approx, RandomState::new());
        for &(primitive, spellings) in locale.aliases {
            for &spelling in spellings {
                let key = spelling.to_lowercase();
                match map.get(&key) {
                    Some(&prev) if prev != primitive => {
                        return Err(LocaleError::DuplicateAlias {
                            alias: key,
                            first: prev,
                            second: primitive,
                        });
                    }
                    _ => {
                        map.insert(key, primitive);
                    }
                }
            }
        }
        for &code in ErrorCode::ALL {
            if !locale.messages.iter().any(|&(c, _)| c == code) {
                return Err(LocaleError::MissingMessage { code });
            }
        }
        Ok(AliasTable {
            name: locale.name,
            map,
            extra_letters: locale.extra_letters,
            messages: locale.messages,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Case-insensitive lookup of one word.
    pub fn resolve(&self, word: &str) -> Option<Primitive> {
        // Program text is usually already lowercase ASCII; skip the
        // normalization allocation then.
        if word.is_ascii() && !word.bytes().any(|b| b.is_ascii_uppercase()) {
            return self.map.get(word).copied();
        }
        self.map.get(word.to_lowercase().as_str()).copied()
    }

    /// Letter-class test for this locale.
    pub fn is_letter(&self, c: char) -> bool {
        c.is_ascii_alphabetic() || self.extra_letters.contains(&c)
    }

    /// The raw message template for `code`.
    pub fn message(&self, code: ErrorCode) -> &'static str {
        self.messages
            .iter()
            .find(|&&(c, _)| c == code)
            .map(|&(_, m)| m)
            .expect("template completeness is checked in build")
    }

    /// The message for `code` with `{0}`-style placeholders filled.
    pub fn render_message(&self, code: ErrorCode, args: &[&dyn fmt::Display]) -> String {
        expand(self.message(code), args)
    }
}
