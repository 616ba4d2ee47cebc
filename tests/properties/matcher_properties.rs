use proptest::prelude::*;

use roboline::search::index::field_norm;
use roboline::search::{BitapSearcher, MatchOptions};

fn search(pattern: &str, text: &str) -> roboline::search::BitapMatch {
    BitapSearcher::new(pattern, MatchOptions::default()).search_in(text)
}

proptest! {
    #[test]
    fn identical_text_scores_zero(text in "[a-zA-Z][a-zA-Z ]{0,40}") {
        let result = search(&text, &text.to_uppercase());
        prop_assert!(result.is_match);
        prop_assert_eq!(result.score, 0.0);
    }

    #[test]
    fn prefix_gets_floor_score(pattern in "[a-z]{1,20}", rest in " [a-z ]{1,30}") {
        let text = format!("{pattern}{rest}");
        let result = search(&pattern, &text);
        prop_assert!(result.is_match);
        prop_assert!((result.score - 0.001).abs() < 1e-12);
    }

    #[test]
    fn matching_ignores_ascii_case(pattern in "[a-zA-Z]{1,12}", text in "[a-zA-Z ]{0,60}") {
        let lower = search(&pattern.to_lowercase(), &text.to_lowercase());
        let upper = search(&pattern.to_uppercase(), &text.to_uppercase());
        prop_assert_eq!(lower, upper);
    }

    #[test]
    fn long_patterns_do_not_panic(pattern in "[a-z ]{33,90}", text in "[a-z ]{0,200}") {
        let result = search(&pattern, &text);
        prop_assert!(result.score >= 0.0);
    }

    #[test]
    fn field_norm_is_a_fraction(text in "[a-z ]{1,80}") {
        let norm = field_norm(&text);
        prop_assert!(norm > 0.0 && norm <= 1.0);
    }
}
