use tortuga_lexer::{AliasTable, locales};
use tortuga_syntax::SourceFile;

pub(crate) fn read_input_path(path: &str) -> Result<SourceFile, String> {
    let text =
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read file {path}: {e}"))?;
    Ok(SourceFile::new(path, text))
}

pub(crate) fn build_table(code: &str) -> Result<AliasTable, String> {
    let locale = locales::REGISTRY
        .get(code)
        .ok_or_else(|| format!("Unknown locale: {code}"))?;
    AliasTable::build(locale).map_err(|e| format!("Locale {code}: {e}"))
}
