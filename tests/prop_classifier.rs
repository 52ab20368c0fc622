//! Property tests for entry-point classification.

use caller_trail::frame_filter::{is_test, short_function_name};
use proptest::prelude::*;

proptest! {
    #[test]
    fn names_without_the_prefix_never_qualify(
        prefix in "(Test|Benchmark|Example)",
        name in "[A-Za-z_][A-Za-z0-9_]{0,12}",
    ) {
        prop_assume!(!name.starts_with(&prefix));
        prop_assert!(!is_test(&name, &prefix));
    }

    #[test]
    fn upper_case_or_digit_suffix_qualifies(
        prefix in "(Test|Benchmark|Example)",
        suffix in "[A-Z0-9_][A-Za-z0-9_]{0,12}",
    ) {
        let name = format!("{prefix}{suffix}");
        prop_assert!(is_test(&name, &prefix));
    }

    #[test]
    fn lower_case_suffix_never_qualifies(
        prefix in "(Test|Benchmark|Example)",
        suffix in "[a-z][A-Za-z0-9_]{0,12}",
    ) {
        let name = format!("{prefix}{suffix}");
        prop_assert!(!is_test(&name, &prefix));
    }

    #[test]
    fn non_ascii_lower_case_letter_never_qualifies(
        prefix in "(Test|Benchmark|Example)",
        suffix in "[à-öø-ÿα-ωа-я][a-z]{0,6}",
    ) {
        let name = format!("{prefix}{suffix}");
        prop_assert!(!is_test(&name, &prefix));
    }

    #[test]
    fn lower_case_marks_that_are_not_letters_qualify(
        prefix in "(Test|Benchmark|Example)",
        first in prop::sample::select(vec!['ª', 'º', 'ʰ', 'ˢ', 'ⓐ', 'ⓩ', 'ⅰ', 'ⅿ']),
        rest in "[a-z]{0,6}",
    ) {
        let name = format!("{prefix}{first}{rest}");
        prop_assert!(is_test(&name, &prefix));
    }

    #[test]
    fn non_ascii_upper_case_letter_qualifies(
        prefix in "(Test|Benchmark|Example)",
        suffix in "[À-ÖØ-ÞА-Я][a-z]{0,6}",
    ) {
        let name = format!("{prefix}{suffix}");
        prop_assert!(is_test(&name, &prefix));
    }

    #[test]
    fn qualifier_stripping_never_leaves_the_separator(
        parts in proptest::collection::vec("[a-z][a-z0-9_]{0,8}", 1..5),
    ) {
        let qualified = parts.join("::");
        let short = short_function_name(&qualified, "::");
        prop_assert_eq!(short, parts.last().unwrap().as_str());
    }
}

#[test]
fn exact_prefix_qualifies() {
    for prefix in ["Test", "Benchmark", "Example"] {
        assert!(is_test(prefix, prefix));
    }
}
