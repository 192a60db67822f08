use tortuga_lexer::{AliasTable, Locale, locales};

/// List the built-in locales, building each table so configuration defects
/// surface here instead of at first use.
pub(crate) fn run() {
    let mut entries: Vec<(&str, &Locale)> = locales::REGISTRY
        .entries()
        .map(|(name, locale)| (*name, *locale))
        .collect();
    entries.sort_unstable_by_key(|&(name, _)| name);

    let mut failed = false;
    for (name, locale) in entries {
        match AliasTable::build(locale) {
            Ok(_) => {
                let alias_count: usize = locale.aliases.iter().map(|(_, s)| s.len()).sum();
                println!("{name}\t{alias_count} aliases");
            }
            Err(e) => {
                eprintln!("{name}: {e}");
                failed = true;
            }
        }
    }
    if failed {
        std::process::exit(1);
    }
}
