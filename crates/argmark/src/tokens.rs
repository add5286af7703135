//! Tokenizer and classifier for the raw argument vector.
//!
//! Classification is purely lexical. Any token that starts with `-` is a flag
//! spelling; the token right after it becomes its value unless that token is
//! itself a flag spelling. Everything else is positional, in order.
//!
//! A consequence is that negative numbers (`-5`) are always read as flags.
//! There is no escaping syntax for them.

use std::collections::{BTreeMap, BTreeSet};

use tracing::trace;

/// The harness separator. Everything up to and including it is dropped.
pub const HARNESS_SEPARATOR: &str = "--";

/// The per-parse partition of raw tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedTokens {
    flag_presence: BTreeSet<String>,
    flag_values: BTreeMap<String, String>,
    positionals: Vec<String>,
}

impl ClassifiedTokens {
    /// Returns true if the flag spelling appeared, with or without a value.
    pub fn is_present(&self, spelling: &str) -> bool {
        self.flag_presence.contains(spelling)
    }

    /// Returns the value attached to a flag spelling, if any.
    pub fn value_of(&self, spelling: &str) -> Option<&str> {
        self.flag_values.get(spelling).map(String::as_str)
    }

    pub fn flags(&self) -> impl Iterator<Item = &str> {
        self.flag_presence.iter().map(String::as_str)
    }

    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }
}

/// Drops every token up to and including the first `--`.
///
/// This lets a host runtime pass its own arguments ahead of the
/// application's. Without a separator the vector is returned unchanged.
///
/// ```
/// use argmark::tokens::strip_harness_prefix;
///
/// let args = ["junk", "--", "Alice"].map(String::from);
/// assert_eq!(strip_harness_prefix(&args), ["Alice"]);
/// ```
pub fn strip_harness_prefix(args: &[String]) -> &[String] {
    match args.iter().position(|a| a == HARNESS_SEPARATOR) {
        Some(i) => &args[i + 1..],
        None => args,
    }
}

fn is_flag_spelling(token: &str) -> bool {
    token.starts_with('-')
}

/// Partitions raw tokens into flag occurrences and positionals.
///
/// ```
/// use argmark::tokens::classify;
///
/// let args = ["--name", "Alice", "-v", "notes.txt"].map(String::from);
/// let tokens = classify(&args);
/// assert_eq!(tokens.value_of("--name"), Some("Alice"));
/// assert_eq!(tokens.value_of("-v"), Some("notes.txt"));
/// assert!(tokens.positionals().is_empty());
/// ```
pub fn classify(args: &[String]) -> ClassifiedTokens {
    let mut classified = ClassifiedTokens::default();
    let mut i = 0;

    while i < args.len() {
        let token = &args[i];
        if is_flag_spelling(token) {
            classified.flag_presence.insert(token.clone());
            match args.get(i + 1) {
                Some(next) if !is_flag_spelling(next) => {
                    trace!(flag = %token, value = %next, "flag with value");
                    classified.flag_values.insert(token.clone(), next.clone());
                    i += 2;
                }
                _ => {
                    trace!(flag = %token, "flag without value");
                    i += 1;
                }
            }
        } else {
            trace!(token = %token, "positional");
            classified.positionals.push(token.clone());
            i += 1;
        }
    }

    classified
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_flag_consumes_following_value() {
        let tokens = classify(&args(&["--age", "30", "Alice"]));
        assert!(tokens.is_present("--age"));
        assert_eq!(tokens.value_of("--age"), Some("30"));
        assert_eq!(tokens.positionals(), ["Alice"]);
    }

    #[test]
    fn test_flag_followed_by_flag_has_no_value() {
        let tokens = classify(&args(&["--verbose", "--name", "Bob"]));
        assert!(tokens.is_present("--verbose"));
        assert_eq!(tokens.value_of("--verbose"), None);
        assert_eq!(tokens.value_of("--name"), Some("Bob"));
    }

    #[test]
    fn test_trailing_flag_is_present_without_value() {
        let tokens = classify(&args(&["Alice", "-q"]));
        assert!(tokens.is_present("-q"));
        assert_eq!(tokens.value_of("-q"), None);
        assert_eq!(tokens.positionals(), ["Alice"]);
    }

    #[test]
    fn test_negative_number_is_a_flag() {
        let tokens = classify(&args(&["-5"]));
        assert!(tokens.is_present("-5"));
        assert!(tokens.positionals().is_empty());
    }

    #[test]
    fn test_positionals_keep_order() {
        let tokens = classify(&args(&["a", "b", "--x", "1", "c"]));
        assert_eq!(tokens.positionals(), ["a", "b", "c"]);
    }

    #[test]
    fn test_repeated_flag_keeps_last_value() {
        let tokens = classify(&args(&["-n", "one", "-n", "two"]));
        assert_eq!(tokens.value_of("-n"), Some("two"));
    }

    #[test]
    fn test_strip_harness_prefix() {
        let raw = args(&["junk", "junk", "--", "Alice", "30"]);
        assert_eq!(strip_harness_prefix(&raw), ["Alice", "30"]);
    }

    #[test]
    fn test_strip_harness_prefix_uses_first_separator() {
        let raw = args(&["a", "--", "b", "--", "c"]);
        assert_eq!(strip_harness_prefix(&raw), ["b", "--", "c"]);
    }

    #[test]
    fn test_strip_without_separator_is_identity() {
        let raw = args(&["Alice", "30"]);
        assert_eq!(strip_harness_prefix(&raw), raw.as_slice());
    }

    #[test]
    fn test_classify_is_idempotent() {
        let raw = args(&["--name", "Alice", "-n", "Bob", "x"]);
        assert_eq!(classify(&raw), classify(&raw));
    }
}
