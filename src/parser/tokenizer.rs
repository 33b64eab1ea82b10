//! Splits command arguments into a preamble and prefixed values.

use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};

use super::syntax::Prefix;

/// Arguments grouped by prefix.
///
/// The preamble is the text before the first prefix. A prefix may appear
/// more than once; [`value`](Self::value) returns the last occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Returns the text before the first prefix.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Returns the last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Returns every value given for `prefix`, in input order.
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values
            .get(&prefix)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns true if every prefix in `prefixes` was supplied.
    pub fn contains_all(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|prefix| self.values.contains_key(prefix))
    }

    /// Fails if any of `prefixes` was supplied more than once.
    pub fn verify_no_duplicate_prefixes_for(&self, prefixes: &[Prefix]) -> EngineResult<()> {
        let duplicated: Vec<&str> = prefixes
            .iter()
            .filter(|prefix| self.all_values(**prefix).len() > 1)
            .map(|prefix| prefix.as_str())
            .collect();

        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(EngineError::DuplicatePrefixes {
                prefixes: duplicated.join(" "),
            })
        }
    }

    fn push(&mut self, prefix: Option<Prefix>, words: &[&str]) {
        let text = words.join(" ");
        match prefix {
            Some(prefix) => self.values.entry(prefix).or_default().push(text),
            None => self.preamble = text,
        }
    }
}

/// Tokenizes `args` on the given prefixes.
///
/// A whitespace-separated word beginning with a prefix starts that prefix's
/// value; the rest of the word and the following words up to the next
/// prefix form the value, joined by single spaces.
///
/// # Example
///
/// ```
/// use roster_engine::parser::{PREFIX_NAME, PREFIX_PHONE, tokenize};
///
/// let args = tokenize("1 n/ Amy  Bee p/11111111", &[PREFIX_NAME, PREFIX_PHONE]);
/// assert_eq!(args.preamble(), "1");
/// assert_eq!(args.value(PREFIX_NAME), Some("Amy Bee"));
/// assert_eq!(args.value(PREFIX_PHONE), Some("11111111"));
/// ```
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut ordered: Vec<Prefix> = prefixes.to_vec();
    ordered.sort_by_key(|prefix| std::cmp::Reverse(prefix.as_str().len()));

    let mut multimap = ArgumentMultimap::default();
    let mut current: Option<Prefix> = None;
    let mut words: Vec<&str> = Vec::new();

    for word in args.split_whitespace() {
        let matched = ordered
            .iter()
            .find_map(|prefix| word.strip_prefix(prefix.as_str()).map(|rest| (*prefix, rest)));

        match matched {
            Some((prefix, rest)) => {
                multimap.push(current, &words);
                words.clear();
                current = Some(prefix);
                if !rest.is_empty() {
                    words.push(rest);
                }
            }
            None => words.push(word),
        }
    }
    multimap.push(current, &words);

    multimap
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::syntax::{
        PREFIX_ADDRESS, PREFIX_ANNUAL_LEAVE, PREFIX_FROM, PREFIX_NAME, PREFIX_PHONE, PREFIX_TO,
    };

    #[test]
    fn test_empty_args() {
        let args = tokenize("   ", &[PREFIX_NAME]);
        assert_eq!(args.preamble(), "");
        assert_eq!(args.value(PREFIX_NAME), None);
    }

    #[test]
    fn test_preamble_only() {
        let args = tokenize("  some preamble ", &[PREFIX_NAME]);
        assert_eq!(args.preamble(), "some preamble");
    }

    #[test]
    fn test_value_attached_and_detached() {
        let args = tokenize("n/Amy Bee p/ 111", &[PREFIX_NAME, PREFIX_PHONE]);
        assert_eq!(args.value(PREFIX_NAME), Some("Amy Bee"));
        assert_eq!(args.value(PREFIX_PHONE), Some("111"));
    }

    #[test]
    fn test_longer_prefix_wins() {
        let args = tokenize("al/4 a/Block 1", &[PREFIX_ADDRESS, PREFIX_ANNUAL_LEAVE]);
        assert_eq!(args.value(PREFIX_ANNUAL_LEAVE), Some("4"));
        assert_eq!(args.value(PREFIX_ADDRESS), Some("Block 1"));
    }

    #[test]
    fn test_dates_are_not_mistaken_for_prefixes() {
        let args = tokenize("1 from/03/11/2023 to/ 05/11/2023", &[PREFIX_FROM, PREFIX_TO]);
        assert_eq!(args.preamble(), "1");
        assert_eq!(args.value(PREFIX_FROM), Some("03/11/2023"));
        assert_eq!(args.value(PREFIX_TO), Some("05/11/2023"));
    }

    #[test]
    fn test_empty_value_is_recorded() {
        let args = tokenize("a/", &[PREFIX_ADDRESS]);
        assert_eq!(args.value(PREFIX_ADDRESS), Some(""));
    }

    #[test]
    fn test_repeated_prefix_keeps_all_values() {
        let args = tokenize("n/Amy n/Bob", &[PREFIX_NAME]);
        assert_eq!(args.all_values(PREFIX_NAME), &["Amy", "Bob"]);
        assert_eq!(args.value(PREFIX_NAME), Some("Bob"));
        assert_eq!(
            args.verify_no_duplicate_prefixes_for(&[PREFIX_NAME, PREFIX_PHONE]),
            Err(EngineError::DuplicatePrefixes {
                prefixes: "n/".to_string()
            })
        );
    }

    #[test]
    fn test_contains_all() {
        let args = tokenize("n/Amy", &[PREFIX_NAME, PREFIX_PHONE]);
        assert!(args.contains_all(&[PREFIX_NAME]));
        assert!(!args.contains_all(&[PREFIX_NAME, PREFIX_PHONE]));
    }
}
