// scrubkit-core/tests/matcher_tests.rs
use scrubkit_core::{CompositeMatcher, ScrubError};
use test_log::test;

#[test]
fn test_matches_with_wildcards() {
    let matcher = CompositeMatcher::new([r"^Hello\s+World!?$", "Test(ing)?", r"foo\d{3}"], false)
        .unwrap();

    assert!(matcher.matches_any("Hello World"));
    assert!(matcher.matches_any("Hello   World!"));
    assert!(matcher.matches_any("Test"));
    assert!(matcher.matches_any("Testing"));
    assert!(matcher.matches_any("foo123"));

    assert!(!matcher.matches_any("HelloWorld"), "missing space must not match the anchored pattern");
    assert!(!matcher.matches_any("foo12"), "needs exactly three digits");
}

#[test]
fn test_case_insensitive_patterns() {
    let matcher = CompositeMatcher::new(["cat", "dog.*house"], true).unwrap();

    assert!(matcher.ignore_case());
    assert!(matcher.matches_any("I have a CAT"));
    assert!(matcher.matches_any("DOGhouse"));
    assert!(matcher.matches_any("dog big house"));
    assert!(matcher.matches_any("My doG sMall House"));
    assert!(!matcher.matches_any("elephant"));
}

#[test]
fn test_case_sensitivity_table() {
    let cases = [
        ("ABxxCD", true, true),
        ("ABxxCD", false, false),
        ("abXXcd", true, true),
        ("abXXcd", false, true),
        ("HELLO WORLD!", true, true),
        ("HELLO WORLD!", false, false),
    ];

    for (input, ignore_case, expected) in cases {
        let matcher = CompositeMatcher::new(["ab.*cd", r"^Hello\s+World!?$"], ignore_case).unwrap();
        assert_eq!(
            matcher.matches_any(input),
            expected,
            "input={input:?} ignore_case={ignore_case}"
        );
    }
}

#[test]
fn test_long_input_with_wildcards_completes() {
    let matcher = CompositeMatcher::new(["abc.*xyz"], false).unwrap();
    let long_string = format!("{}the end", "a".repeat(10_000));
    assert!(!matcher.matches_any(&long_string));
}

#[test]
fn test_pathological_pattern_is_bounded() {
    // Exponential for a backtracking engine; linear here.
    let matcher = CompositeMatcher::new(["^(a+)+$"], false).unwrap();
    let input = format!("{}!", "a".repeat(50_000));
    assert!(!matcher.matches_any(&input));
}

#[test]
fn test_empty_pattern_set_never_matches() {
    let no_patterns: [&str; 0] = [];
    for matcher in [
        CompositeMatcher::new(no_patterns, false).unwrap(),
        CompositeMatcher::new(["", ""], true).unwrap(),
    ] {
        assert!(matcher.is_empty_pattern());
        for input in ["", "a", "user.password", "[0]"] {
            assert!(!matcher.matches_any(input));
        }
    }
}

#[test]
fn test_composite_agrees_with_individual_patterns() {
    let patterns = [r"^a\.b$", r"\[\d+\]", "secret", "^$"];
    let inputs = ["a.b", "a.bc", "items[3]", "items[x]", "my_secret", "", "SECRET"];

    for ignore_case in [false, true] {
        let composite = CompositeMatcher::new(patterns, ignore_case).unwrap();
        for input in inputs {
            let any_single = patterns.iter().any(|p| {
                CompositeMatcher::new([*p], ignore_case)
                    .unwrap()
                    .matches_any(input)
            });
            assert_eq!(composite.matches_any(input), any_single, "input={input:?}");
        }
    }
}

#[test]
fn test_invalid_syntax_is_a_construction_error() {
    let result = CompositeMatcher::new(["ok", "[unterminated"], false);
    assert!(matches!(
        result,
        Err(ScrubError::PatternCompilation { ref pattern, .. }) if pattern == "[unterminated"
    ));
}
