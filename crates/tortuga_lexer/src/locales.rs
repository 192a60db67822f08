//! Built-in locale declarations.
//!
//! Each entry lists the long spelling first and the classic abbreviations
//! after it. Every spelling of every locale resolves case-insensitively.
use phf::phf_map;
use tortuga_syntax::ErrorCode::*;
use tortuga_syntax::Primitive::*;

use crate::locale::Locale;

/// English — the classic Logo vocabulary.
pub static ENGLISH: Locale = Locale {
    name: "en",
    aliases: &[
        (Forward, &["forward", "fd"]),
        (Back, &["back", "bk"]),
        (Left, &["left", "lt"]),
        (Right, &["right", "rt"]),
        (PenUp, &["penup", "pu"]),
        (PenDown, &["pendown", "pd"]),
        (Repeat, &["repeat"]),
        (ClearScreen, &["clearscreen", "cs"]),
        (To, &["to"]),
        (End, &["end"]),
        (If, &["if"]),
        (Stop, &["stop"]),
        (SetPenColor, &["setpencolor", "setpc"]),
        (SetBackground, &["setbackground", "setbg"]),
    ],
    extra_letters: &[],
    messages: &[
        (
            ProcedureCallStackOverflow,
            "Too many nested calls to '{0}'",
        ),
        (UnmatchedClosingBracket, "']' at {0} has no matching '['"),
        (CodeblockExpectedOpeningBracket, "Expected '[' after '{0}'"),
        (
            ExpectedNumberOrVariable,
            "Expected a number or a variable, found '{0}'",
        ),
        (ProcedureNotDefined, "I don't know how to '{0}'"),
        (UnknownTokenFound, "Unknown symbol '{0}'"),
    ],
};

/// Spanish — the vocabulary of the classic Spanish Logo dialects. Accented
/// spellings are listed next to their plain-ASCII forms so both lex as one
/// word and resolve to the same primitive.
pub static SPANISH: Locale = Locale {
    name: "es",
    aliases: &[
        (Forward, &["avanza", "av"]),
        (Back, &["retrocede", "re"]),
        (Left, &["giraizquierda", "gi"]),
        (Right, &["giraderecha", "gd"]),
        (PenUp, &["subelápiz", "subelapiz", "sl"]),
        (PenDown, &["bajalápiz", "bajalapiz", "bl"]),
        (Repeat, &["repite"]),
        (ClearScreen, &["borrapantalla", "bp"]),
        (To, &["para"]),
        (End, &["fin"]),
        (If, &["si"]),
        (Stop, &["alto"]),
        (SetPenColor, &["poncolorlápiz", "poncolorlapiz", "poncl"]),
        (SetBackground, &["poncolorfondo", "ponfondo"]),
    ],
    extra_letters: &[
        'á', 'é', 'í', 'ó', 'ú', 'ü', 'ñ', 'Á', 'É', 'Í', 'Ó', 'Ú', 'Ü', 'Ñ',
    ],
    messages: &[
        (
            ProcedureCallStackOverflow,
            "Demasiadas llamadas anidadas a '{0}'",
        ),
        (UnmatchedClosingBracket, "']' en {0} no tiene '[' pareja"),
        (
            CodeblockExpectedOpeningBracket,
            "Se esperaba '[' después de '{0}'",
        ),
        (
            ExpectedNumberOrVariable,
            "Se esperaba un número o una variable, se encontró '{0}'",
        ),
        (ProcedureNotDefined, "No sé cómo hacer '{0}'"),
        (UnknownTokenFound, "Símbolo desconocido '{0}'"),
    ],
};

/// Built-in locales by code.
pub static REGISTRY: phf::Map<&'static str, &'static Locale> = phf_map! {
    "en" => &ENGLISH,
    "es" => &SPANISH,
};
