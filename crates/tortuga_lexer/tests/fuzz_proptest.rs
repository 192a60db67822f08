use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use tortuga_lexer::{AliasTable, locales, tokenize};

fn any_logo_like() -> impl Strategy<Value = String> {
    let ascii =
        proptest::collection::vec(any::<char>().prop_filter("ascii", |c| c.is_ascii()), 0..40)
            .prop_map(|v| v.into_iter().collect::<String>());
    let unicode = proptest::collection::vec(
        any::<char>().prop_filter("non-ascii", |c| !c.is_ascii()),
        0..20,
    )
    .prop_map(|v| v.into_iter().collect::<String>());
    let sym = "repeat 4 [fd 60 rt 90] to line :len end FD Repeat4 :4 : + - * / < > € ñ \n \t si repite"
        .to_string();
    (ascii, unicode, any::<bool>(), any::<bool>()).prop_map(move |(a, b, f1, f2)| {
        let mut s = String::new();
        s.push_str(&a);
        s.push_str(&b);
        if f1 {
            s.push_str(&sym);
        }
        if f2 {
            s.push_str(&sym);
        }
        s.chars().take(200).collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 16, max_shrink_iters: 200, .. ProptestConfig::default()
    })]
    #[ignore]
    #[test]
    fn lex_random_input_should_not_panic(src in any_logo_like()) {
        let table = AliasTable::build(&locales::ENGLISH).unwrap();
        let tokens = tokenize(&src, &table);
        // Lexing is total; the sequence must be ordered, round-trip, and
        // skip nothing but spaces and tabs.
        let mut prev_end: Option<usize> = None;
        for t in &tokens {
            let (s, e) = (t.span.start.0 as usize, t.span.end.0 as usize);
            prop_assert!(s <= e);
            prop_assert_eq!(&src[s..=e], t.text);
            let gap_start = match prev_end {
                Some(pe) => {
                    prop_assert!(pe < s);
                    pe + 1
                }
                None => 0,
            };
            prop_assert!(src[gap_start..s].bytes().all(|b| b == b' ' || b == b'\t'));
            prev_end = Some(e);
        }
        let tail = prev_end.map(|pe| pe + 1).unwrap_or(0);
        prop_assert!(src[tail..].bytes().all(|b| b == b' ' || b == b'\t'));
    }
}
