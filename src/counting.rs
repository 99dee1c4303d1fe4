//! Literal substring counting.
//!
//! Occurrences are counted left to right without overlap, the same result
//! as splitting the text on the term and subtracting one from the number of
//! pieces. Matching is not word-boundary aware: `"cat"` is found inside
//! `"concatenate"`.

use crate::error::{Error, Result};
use indexmap::IndexMap;

/// Term → occurrence count, keyed in the order the terms were given.
pub type CountMap = IndexMap<String, usize>;

/// Count non-overlapping occurrences of `term` in `text`.
///
/// ```
/// use pdf_term_report::counting::count_term;
///
/// assert_eq!(count_term("abcabc", "abc").unwrap(), 2);
/// assert_eq!(count_term("aaa", "aa").unwrap(), 1);
/// ```
///
/// An empty term has no meaningful count and is rejected with
/// [`Error::EmptyTerm`].
pub fn count_term(text: &str, term: &str) -> Result<usize> {
    if term.is_empty() {
        return Err(Error::EmptyTerm { index: 0 });
    }
    Ok(occurrences(text, term))
}

/// Count every term in `text`.
///
/// The returned map has exactly one key per distinct term, zero counts
/// included.
pub fn count_terms<S: AsRef<str>>(text: &str, terms: &[S]) -> Result<CountMap> {
    validate_terms(terms)?;
    Ok(count_validated(text, terms))
}

/// Reusable counter over a validated term list.
#[derive(Debug, Clone)]
pub struct TermCounter {
    terms: Vec<String>,
}

impl TermCounter {
    /// Build a counter, rejecting empty terms.
    ///
    /// Duplicate terms are kept but can only produce one key in the result.
    pub fn new<I, S>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms: Vec<String> = terms.into_iter().map(Into::into).collect();
        validate_terms(&terms)?;

        for (index, term) in terms.iter().enumerate() {
            if terms[..index].contains(term) {
                log::warn!("Duplicate search term {:?} at position {}", term, index);
            }
        }

        Ok(Self { terms })
    }

    /// Terms this counter looks for.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Count all terms in `text`.
    pub fn count(&self, text: &str) -> CountMap {
        count_validated(text, &self.terms)
    }
}

fn validate_terms<S: AsRef<str>>(terms: &[S]) -> Result<()> {
    match terms.iter().position(|t| t.as_ref().is_empty()) {
        Some(index) => Err(Error::EmptyTerm { index }),
        None => Ok(()),
    }
}

fn count_validated<S: AsRef<str>>(text: &str, terms: &[S]) -> CountMap {
    terms
        .iter()
        .map(|term| {
            let term = term.as_ref();
            (term.to_string(), occurrences(text, term))
        })
        .collect()
}

// `str::matches` advances past each match, giving split-count semantics.
fn occurrences(text: &str, term: &str) -> usize {
    text.matches(term).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_repeated_term() {
        assert_eq!(count_term("abcabc", "abc").unwrap(), 2);
    }

    #[test]
    fn test_count_is_non_overlapping() {
        assert_eq!(count_term("aaa", "aa").unwrap(), 1);
        assert_eq!(count_term("aaaa", "aa").unwrap(), 2);
    }

    #[test]
    fn test_count_matches_inside_words() {
        assert_eq!(count_term("concatenate the cat", "cat").unwrap(), 2);
    }

    #[test]
    fn test_count_is_case_sensitive() {
        assert_eq!(count_term("Cat cat CAT", "cat").unwrap(), 1);
    }

    #[test]
    fn test_count_absent_term() {
        assert_eq!(count_term("hello world", "xyz").unwrap(), 0);
        assert_eq!(count_term("", "xyz").unwrap(), 0);
    }

    #[test]
    fn test_count_multibyte_text() {
        assert_eq!(count_term("ação, reação, ação", "ação").unwrap(), 3);
    }

    #[test]
    fn test_empty_term_rejected() {
        assert!(matches!(count_term("abc", ""), Err(Error::EmptyTerm { .. })));
    }

    #[test]
    fn test_count_terms_keeps_zero_counts() {
        let counts = count_terms("hello world", &["hello", "xyz"]).unwrap();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts["hello"], 1);
        assert_eq!(counts["xyz"], 0);
    }

    #[test]
    fn test_count_terms_preserves_order() {
        let counts = count_terms("b a", &["b", "a"]).unwrap();
        let keys: Vec<&str> = counts.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_count_terms_reports_empty_term_position() {
        let err = count_terms("text", &["a", "b", ""]).unwrap_err();
        assert!(matches!(err, Error::EmptyTerm { index: 2 }));
    }

    #[test]
    fn test_count_terms_collapses_duplicates() {
        let counts = count_terms("dog dog", &["dog", "dog"]).unwrap();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts["dog"], 2);
    }

    #[test]
    fn test_term_counter() {
        let counter = TermCounter::new(["cat", "dog"]).unwrap();
        let counts = counter.count("cat cat dog");
        assert_eq!(counts["cat"], 2);
        assert_eq!(counts["dog"], 1);
        assert_eq!(counter.terms(), &["cat".to_string(), "dog".to_string()]);
    }

    #[test]
    fn test_term_counter_rejects_empty_term() {
        assert!(TermCounter::new(["ok", ""]).is_err());
    }
}
