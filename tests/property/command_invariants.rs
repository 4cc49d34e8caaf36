//! Structural invariants of built command lines

use pgen_console::command::{Clause, CommandBuilder, Subcommand};
use proptest::prelude::*;

fn clause_strategy() -> impl Strategy<Value = Clause> {
    (any::<bool>(), "[ A-Z0-9=<>.\"'f-]{0,20}")
        .prop_map(|(enabled, text)| Clause::new(enabled, text))
}

fn subcommand_strategy() -> impl Strategy<Value = Subcommand> {
    prop_oneof![Just(Subcommand::Query), Just(Subcommand::Filter)]
}

const FILE_PATTERN: &str = "[a-z][a-z0-9_/]{0,15}";

proptest! {
    #[test]
    fn command_starts_with_tool_and_subcommand(
        sub in subcommand_strategy(),
        file in FILE_PATTERN,
        sample in clause_strategy(),
        variant in clause_strategy(),
    ) {
        let cmd = CommandBuilder::default().build(sub, &file, &sample, &variant);
        let prefix = format!("pgen-rs {} ", sub);
        prop_assert!(cmd.starts_with(&prefix));
    }

    #[test]
    fn query_ends_with_file(
        file in FILE_PATTERN,
        sample in clause_strategy(),
        variant in clause_strategy(),
    ) {
        let cmd = CommandBuilder::default().build(Subcommand::Query, &file, &sample, &variant);
        let suffix = format!(" {}", file);
        prop_assert!(cmd.ends_with(&suffix));
    }

    #[test]
    fn filter_places_file_before_flags(
        file in FILE_PATTERN,
        sample in clause_strategy(),
        variant in clause_strategy(),
    ) {
        let cmd = CommandBuilder::default().build(Subcommand::Filter, &file, &sample, &variant);
        let head = format!("pgen-rs filter {}", file);
        prop_assert!(cmd.starts_with(&head));
        prop_assert_eq!(cmd.contains("--include-sam"), sample.contributes());
        prop_assert_eq!(cmd.contains("--include-var"), variant.contributes());
    }

    #[test]
    fn non_contributing_clauses_add_no_flags(
        sub in subcommand_strategy(),
        file in FILE_PATTERN,
        blank in "[ \t]{0,4}",
        text in "[A-Z=0-9]{1,8}",
    ) {
        let sample = Clause::new(true, blank);
        let variant = Clause::new(false, text);
        let cmd = CommandBuilder::default().build(sub, &file, &sample, &variant);
        prop_assert_eq!(cmd, format!("pgen-rs {} {}", sub, file));
    }

    #[test]
    fn preformatted_text_is_inserted_verbatim(
        file in FILE_PATTERN,
        expr in "[A-Z]{1,6}==[0-9]{1,3}",
        fmt in "[A-Z]{1,6}",
    ) {
        let text = format!("'{}' -f '{}'", expr, fmt);
        let cmd = CommandBuilder::default().build(
            Subcommand::Query,
            &file,
            &Clause::disabled(),
            &Clause::enabled(text.clone()),
        );
        prop_assert_eq!(cmd, format!("pgen-rs query -i {} {}", text, file));
    }
}
