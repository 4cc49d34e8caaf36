//! Properties of quote repair and shell quoting

use pgen_console::command::{repair_quotes, shell_quote};
use proptest::prelude::*;

/// Undo POSIX shell quoting of a single word (quotes and backslash escapes only).
fn shell_unquote(word: &str) -> String {
    let mut out = String::new();
    let mut quoted = false;
    let mut chars = word.chars();
    while let Some(ch) = chars.next() {
        match (quoted, ch) {
            (false, '\'') | (true, '\'') => quoted = !quoted,
            (false, '\\') => {
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            }
            (_, other) => out.push(other),
        }
    }
    out
}

#[test]
fn test_repair_always_encloses_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&any::<String>(), |text| {
            let repaired = repair_quotes(&text);
            prop_assert!(repaired.starts_with('\''));
            prop_assert!(repaired.ends_with('\''));
            // Already balanced output is left alone.
            prop_assert_eq!(repair_quotes(&repaired), repaired.clone());
            Ok(())
        })
        .unwrap();
}

proptest! {
    #[test]
    fn four_quote_variants_repair_identically(core in "[A-Za-z0-9=<>!.\" ]{1,24}") {
        let expected = format!("'{}'", core);
        prop_assert_eq!(repair_quotes(&core), expected.clone());
        prop_assert_eq!(repair_quotes(&format!("'{}", core)), expected.clone());
        prop_assert_eq!(repair_quotes(&format!("{}'", core)), expected.clone());
        prop_assert_eq!(repair_quotes(&expected), expected.clone());
    }

    #[test]
    fn shell_quote_is_one_recoverable_word(text in any::<String>()) {
        let word = shell_quote(&text);
        prop_assert!(word.starts_with('\''));
        prop_assert!(word.ends_with('\''));
        prop_assert_eq!(shell_unquote(&word), text);
    }
}
