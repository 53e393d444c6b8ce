//! Keyword extraction: turns free text into a short, ordered list of significant tokens.
//!
//! Matching downstream is plain substring containment (no stemming, no synonyms),
//! so "manage" matches both "management" and "unmanaged".

use std::collections::HashSet;

/// Upper bound on the number of keywords returned for any single text.
pub const MAX_KEYWORDS: usize = 20;

/// Tokens must be strictly longer than this to count.
const MIN_TOKEN_LEN: usize = 2;

const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "with", "you", "are", "our", "will", "that", "this", "from", "have",
    "has", "was", "were", "been", "but", "not", "all", "can", "your", "they", "their", "its",
    "into", "about", "who", "what", "when", "where", "which", "how", "than", "then", "also",
    "any", "each", "more", "most", "other", "some", "such", "only", "own", "same", "very",
    "just", "should", "would", "could", "may", "must", "shall", "being", "had", "did", "does",
    "doing", "over", "under", "out", "off", "per", "via", "etc", "including", "within",
    "across", "using", "work", "working", "experience", "years", "year", "team", "role",
    "strong", "ability", "skills", "knowledge", "plus", "preferred", "required",
    "requirements", "responsibilities", "job", "position", "candidate", "looking", "join",
];

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

/// Extracts up to [`MAX_KEYWORDS`] lowercase keywords from `text`.
///
/// Non-alphanumeric characters split tokens. Short tokens and stop words are
/// dropped, duplicates keep their first position.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();

    let mut seen = HashSet::new();
    normalized
        .split_whitespace()
        .filter(|token| token.chars().count() > MIN_TOKEN_LEN && !is_stop_word(token))
        .filter(|token| seen.insert(*token))
        .take(MAX_KEYWORDS)
        .map(str::to_string)
        .collect()
}

/// Containment match: either keyword is a substring of the other.
pub fn keywords_overlap(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_dedupes_preserving_first_occurrence() {
        assert_eq!(extract_keywords("cat dog cat bird"), vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn test_empty_input_yields_empty() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("   \n\t ").is_empty());
    }

    #[test]
    fn test_lowercases_and_splits_on_punctuation() {
        assert_eq!(
            extract_keywords("Rust/Tokio, gRPC; PostgreSQL!"),
            vec!["rust", "tokio", "grpc", "postgresql"]
        );
    }

    #[test]
    fn test_drops_short_tokens_and_stop_words() {
        assert_eq!(
            extract_keywords("We are looking for an engineer with Go and Kafka"),
            vec!["engineer", "kafka"]
        );
    }

    #[test]
    fn test_truncates_to_max_keywords() {
        let text = (0..50)
            .map(|i| format!("word{i}"))
            .collect::<Vec<_>>()
            .join(" ");
        let keywords = extract_keywords(&text);
        assert_eq!(keywords.len(), MAX_KEYWORDS);
        assert_eq!(keywords[0], "word0");
        assert_eq!(keywords[19], "word19");
    }

    #[test]
    fn test_dedup_happens_before_truncation() {
        let mut text = "alpha ".repeat(30);
        text.push_str("beta gamma");
        assert_eq!(extract_keywords(&text), vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_overlap_is_symmetric_containment() {
        assert!(keywords_overlap("manage", "management"));
        assert!(keywords_overlap("management", "manage"));
        assert!(keywords_overlap("unmanaged", "manage"));
        assert!(!keywords_overlap("python", "java"));
    }

    proptest! {
        #[test]
        fn prop_keywords_are_capped_unique_and_lowercase(text in "[a-zA-Z0-9 ,.;/+%$-]{0,400}") {
            let keywords = extract_keywords(&text);
            prop_assert!(keywords.len() <= MAX_KEYWORDS);
            let unique: HashSet<_> = keywords.iter().collect();
            prop_assert_eq!(unique.len(), keywords.len());
            for kw in &keywords {
                prop_assert!(kw.chars().count() > MIN_TOKEN_LEN);
                prop_assert!(!is_stop_word(kw));
                prop_assert_eq!(kw.to_lowercase(), kw.clone());
            }
        }
    }
}
