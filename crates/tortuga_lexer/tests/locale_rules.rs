use tortuga_lexer::{AliasTable, Locale, LocaleError, locales, tokenize};
use tortuga_syntax::{ErrorCode, Primitive, TokenKind, expand};

#[test]
fn registered_locales_build_cleanly() {
    for (name, locale) in locales::REGISTRY.entries() {
        let table = AliasTable::build(locale).unwrap_or_else(|e| panic!("locale {name}: {e}"));
        assert_eq!(&table.name(), name);
    }
}

#[test]
fn duplicate_alias_is_a_build_defect() {
    let bad = Locale {
        name: "bad",
        aliases: &[
            (Primitive::Forward, &["fd"]),
            (Primitive::Back, &["FD"]),
        ],
        extra_letters: &[],
        messages: locales::ENGLISH.messages,
    };
    match AliasTable::build(&bad) {
        Err(LocaleError::DuplicateAlias {
            alias,
            first,
            second,
        }) => {
            assert_eq!(alias, "fd");
            assert_eq!(first, Primitive::Forward);
            assert_eq!(second, Primitive::Back);
        }
        other => panic!("expected a duplicate-alias defect, got {other:?}"),
    }
}

#[test]
fn repeating_an_alias_for_the_same_primitive_is_allowed() {
    let fine = Locale {
        name: "fine",
        aliases: &[
            (Primitive::Forward, &["forward", "fd"]),
            (Primitive::Forward, &["FORWARD"]),
        ],
        extra_letters: &[],
        messages: locales::ENGLISH.messages,
    };
    let table = AliasTable::build(&fine).unwrap();
    assert_eq!(table.resolve("Forward"), Some(Primitive::Forward));
}

#[test]
fn missing_message_template_is_a_build_defect() {
    let bare = Locale {
        name: "bare",
        aliases: &[(Primitive::Forward, &["fd"])],
        extra_letters: &[],
        messages: &[],
    };
    assert!(matches!(
        AliasTable::build(&bare),
        Err(LocaleError::MissingMessage { .. })
    ));
}

#[test]
fn accented_spellings_lex_as_one_word() {
    let table = AliasTable::build(&locales::SPANISH).unwrap();
    for word in ["subelápiz", "SUBELÁPIZ", "subelapiz", "sl"] {
        let tokens = tokenize(word, &table);
        assert_eq!(tokens.len(), 1, "{word}");
        assert_eq!(
            tokens[0].kind,
            TokenKind::Primitive(Primitive::PenUp),
            "{word}"
        );
    }
}

#[test]
fn unknown_spanish_word_is_a_procedure_name() {
    let table = AliasTable::build(&locales::SPANISH).unwrap();
    let tokens = tokenize("espiral 4", &table);
    assert_eq!(tokens[0].kind, TokenKind::ProcedureName);
}

#[test]
fn locales_do_not_leak_into_each_other() {
    let en = AliasTable::build(&locales::ENGLISH).unwrap();
    let es = AliasTable::build(&locales::SPANISH).unwrap();
    // 'fd' means forward only in English; 'av' only in Spanish.
    assert_eq!(en.resolve("fd"), Some(Primitive::Forward));
    assert_eq!(es.resolve("fd"), None);
    assert_eq!(es.resolve("av"), Some(Primitive::Forward));
    assert_eq!(en.resolve("av"), None);
}

#[test]
fn one_table_serves_concurrent_scans() {
    let table = AliasTable::build(&locales::ENGLISH).unwrap();
    std::thread::scope(|s| {
        let a = s.spawn(|| tokenize("repeat 4 [fd 60 rt 90]", &table));
        let b = s.spawn(|| tokenize("to line fd 60 end", &table));
        assert_eq!(a.join().unwrap().len(), 8);
        assert_eq!(b.join().unwrap().len(), 5);
    });
}

#[test]
fn message_templates_fill_positionally() {
    let table = AliasTable::build(&locales::SPANISH).unwrap();
    let msg = table.render_message(ErrorCode::ProcedureNotDefined, &[&"espiral"]);
    assert_eq!(msg, "No sé cómo hacer 'espiral'");

    let en = AliasTable::build(&locales::ENGLISH).unwrap();
    let msg = en.render_message(ErrorCode::UnmatchedClosingBracket, &[&21]);
    assert_eq!(msg, "']' at 21 has no matching '['");
}

#[test]
fn expand_leaves_unfilled_placeholders_visible() {
    assert_eq!(expand("a {0} b {1}", &[&"x"]), "a x b {1}");
    assert_eq!(expand("no placeholders", &[&"x"]), "no placeholders");
}
