//! Search-highlight data filter.

use regex::bytes::{Captures, Regex, RegexBuilder};
use tracing::debug;

use crate::handle::DataFilter;

/// Wraps every case-insensitive match of a search string in highlight
/// sequences.
///
/// The search string is tried as a regex first; if it does not compile it
/// is matched literally.
#[derive(Debug, Clone)]
pub struct SearchHighlighter {
    pattern: Regex,
    prefix: Vec<u8>,
    suffix: Vec<u8>,
}

impl SearchHighlighter {
    /// `None` when `needle` is empty.
    pub fn new(needle: &str, prefix: &str, suffix: &str) -> Option<Self> {
        if needle.is_empty() {
            return None;
        }
        let pattern = match build(needle) {
            Ok(re) => re,
            Err(e) => {
                debug!("search {needle:?} is not a valid regex ({e}), matching literally");
                build(&regex::escape(needle)).ok()?
            }
        };
        Some(Self {
            pattern,
            prefix: prefix.as_bytes().to_vec(),
            suffix: suffix.as_bytes().to_vec(),
        })
    }

    pub fn apply(&self, data: &[u8]) -> Vec<u8> {
        self.pattern
            .replace_all(data, |caps: &Captures| {
                let hit = &caps[0];
                if hit.is_empty() {
                    return Vec::new();
                }
                let mut out = Vec::with_capacity(self.prefix.len() + hit.len() + self.suffix.len());
                out.extend_from_slice(&self.prefix);
                out.extend_from_slice(hit);
                out.extend_from_slice(&self.suffix);
                out
            })
            .into_owned()
    }

    pub fn into_filter(self) -> DataFilter {
        Box::new(move |data| self.apply(data))
    }
}

fn build(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hl(needle: &str) -> SearchHighlighter {
        SearchHighlighter::new(needle, "[", "]").unwrap()
    }

    #[test]
    fn wraps_every_match_case_insensitively() {
        let out = hl("err").apply(b"Error: err 3 ERR");
        assert_eq!(out, b"[Err]or: [err] 3 [ERR]");
    }

    #[test]
    fn regex_syntax_is_honoured() {
        let out = hl(r"\d+").apply(b"a 12 b 3");
        assert_eq!(out, b"a [12] b [3]");
    }

    #[test]
    fn invalid_regex_falls_back_to_literal() {
        let out = hl("a(b").apply(b"xa(by");
        assert_eq!(out, b"x[a(b]y");
    }

    #[test]
    fn empty_needle_builds_nothing() {
        assert!(SearchHighlighter::new("", "[", "]").is_none());
    }

    #[test]
    fn empty_matches_are_not_highlighted() {
        assert_eq!(hl("z*").apply(b"abc"), b"abc");
    }

    #[test]
    fn non_utf8_input_passes_through() {
        let out = hl("ok").apply(&[0xff, b'o', b'k', 0xfe]);
        assert_eq!(out, vec![0xff, b'[', b'o', b'k', b']', 0xfe]);
    }

    #[test]
    fn filter_closure_applies_highlight() {
        let mut filter = hl("x").into_filter();
        assert_eq!(filter(&b"axb"[..]), b"a[x]b");
    }
}
