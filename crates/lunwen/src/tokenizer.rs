//! Longest-match dictionary segmentation
//!
//! Walks the text left to right. At each position the dictionary is tried
//! longest term first; the first term that prefixes the remaining text becomes
//! one token. Without a dictionary hit a run of ASCII letters/digits is taken
//! whole, and anything else falls back to a single character. Tokens that are
//! exactly one of the lexicon's punctuation characters are dropped afterwards.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashSet;

use crate::lexicon::Lexicon;

/// How a token was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenKind {
  /// Dictionary hit
  Term,
  /// Single Chinese character
  Han,
  /// Run of ASCII letters and digits
  Alphanumeric,
  Other,
}

/// A slice of the analyzed text; `offset` counts chars from the start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
  pub text: &'a str,
  pub offset: usize,
  pub kind: TokenKind,
}

/// True for characters in the CJK Unified Ideographs block used for counting
pub fn is_han(ch: char) -> bool {
  ('\u{4e00}'..='\u{9fa5}').contains(&ch)
}

/// Dictionary segmenter with a precomputed length index
#[derive(Debug)]
pub struct Segmenter {
  terms: HashSet<&'static str>,
  // Distinct term lengths in chars, longest first
  lengths: Vec<usize>,
  punctuation: &'static [char],
}

impl Segmenter {
  /// Build a segmenter over `terms`, dropping the standard punctuation set
  pub fn new(terms: &[&'static str]) -> Self {
    Self::with_punctuation(terms, Lexicon::standard().punctuation)
  }

  pub fn with_punctuation(terms: &[&'static str], punctuation: &'static [char]) -> Self {
    let terms: HashSet<&'static str> = terms.iter().copied().filter(|term| !term.is_empty()).collect();

    let mut lengths: Vec<usize> = terms.iter().map(|term| term.chars().count()).collect();
    lengths.sort_unstable_by(|a, b| b.cmp(a));
    lengths.dedup();

    Self { terms, lengths, punctuation }
  }

  pub fn from_lexicon(lexicon: &'static Lexicon) -> Self {
    Self::with_punctuation(lexicon.segmentation_terms, lexicon.punctuation)
  }

  /// Lexicon dictionary plus the coherence transitions as whole terms
  ///
  /// The default dictionary never yields a transition token, so coherence
  /// is only nonzero when the tokens come from a segmenter like this one.
  pub fn with_transitions(lexicon: &'static Lexicon) -> Self {
    let terms: Vec<&'static str> =
      lexicon.segmentation_terms.iter().chain(lexicon.coherence_transitions).copied().collect();
    Self::with_punctuation(&terms, lexicon.punctuation)
  }

  pub fn term_count(&self) -> usize {
    self.terms.len()
  }

  /// Split `text` into tokens, punctuation and whitespace removed
  pub fn segment<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
    let max_len = self.lengths.first().copied().unwrap_or(0);
    let mut tokens = Vec::new();
    let mut rest = text;
    let mut offset = 0;

    while let Some(first) = rest.chars().next() {
      let (byte_len, char_len, kind) = match self.longest_term(rest, max_len) {
        Some((byte_len, char_len)) => (byte_len, char_len, TokenKind::Term),
        None if first.is_ascii_alphanumeric() => {
          let byte_len =
            rest.find(|ch: char| !ch.is_ascii_alphanumeric()).unwrap_or(rest.len());
          // ASCII only, so bytes == chars
          (byte_len, byte_len, TokenKind::Alphanumeric)
        }
        None => {
          let kind = if is_han(first) { TokenKind::Han } else { TokenKind::Other };
          (first.len_utf8(), 1, kind)
        }
      };

      let (head, tail) = rest.split_at(byte_len);
      if !self.is_punctuation(head) {
        tokens.push(Token { text: head, offset, kind });
      }
      rest = tail;
      offset += char_len;
    }

    tokens
  }

  /// Byte and char length of the longest dictionary term prefixing `rest`
  fn longest_term(&self, rest: &str, max_len: usize) -> Option<(usize, usize)> {
    if max_len == 0 {
      return None;
    }

    // ends[n - 1] is the byte offset just past the n-th char
    let ends: Vec<usize> =
      rest.char_indices().skip(1).map(|(idx, _)| idx).chain(std::iter::once(rest.len())).take(max_len).collect();

    self
      .lengths
      .iter()
      .filter(|&&len| len <= ends.len())
      .find(|&&len| self.terms.contains(&rest[..ends[len - 1]]))
      .map(|&len| (ends[len - 1], len))
  }

  fn is_punctuation(&self, token: &str) -> bool {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
      (Some(ch), None) => self.punctuation.contains(&ch),
      _ => false,
    }
  }
}

pub(crate) static DEFAULT_SEGMENTER: Lazy<Segmenter> = Lazy::new(|| Segmenter::from_lexicon(Lexicon::standard()));

/// Segment with the standard dictionary
pub fn segment(text: &str) -> Vec<Token<'_>> {
  DEFAULT_SEGMENTER.segment(text)
}

/// Surface forms of `tokens`
pub fn surfaces<'a>(tokens: &[Token<'a>]) -> Vec<&'a str> {
  tokens.iter().map(|token| token.text).collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_longest_match_wins() {
    let segmenter = Segmenter::new(&["项目", "项目管理"]);
    let tokens = segmenter.segment("项目管理经验");
    assert_eq!(surfaces(&tokens), vec!["项目管理", "经", "验"]);
    assert_eq!(tokens[0].kind, TokenKind::Term);
    assert_eq!(tokens[1].kind, TokenKind::Han);
  }

  #[test]
  fn test_shorter_term_used_when_longer_does_not_fit() {
    let segmenter = Segmenter::new(&["项目", "项目管理"]);
    let tokens = segmenter.segment("项目经理");
    assert_eq!(surfaces(&tokens), vec!["项目", "经", "理"]);
  }

  #[test]
  fn test_empty_input() {
    assert!(segment("").is_empty());
    assert!(Segmenter::new(&[]).segment("").is_empty());
  }

  #[test]
  fn test_no_dictionary_matches() {
    let segmenter = Segmenter::new(&[]);
    let tokens = segmenter.segment("今天，天气好。");
    assert_eq!(surfaces(&tokens), vec!["今", "天", "天", "气", "好"]);
  }

  #[test]
  fn test_punctuation_and_whitespace_removed() {
    let tokens = segment("好 ，\n坏\t。");
    assert_eq!(surfaces(&tokens), vec!["好", "坏"]);
    assert!(tokens.iter().all(|token| !token.text.is_empty()));
  }

  #[test]
  fn test_alphanumeric_runs_are_atomic() {
    let tokens = segment("使用Java8开发了3个UML模型");
    assert_eq!(surfaces(&tokens), vec!["使", "用", "Java8", "开", "发", "了", "3", "个", "UML", "模", "型"]);
    assert_eq!(tokens[2].kind, TokenKind::Alphanumeric);
  }

  #[test]
  fn test_offsets_count_chars() {
    let tokens = segment("首先，项目管理很重要");
    assert_eq!(surfaces(&tokens[..3]), vec!["首", "先", "项目管理"]);
    assert_eq!(tokens[1].offset, 1);
    assert_eq!(tokens[2].offset, 3);
    assert_eq!(tokens[3].offset, 7);
  }

  #[test]
  fn test_default_dictionary_splits_transitions() {
    let tokens = segment("然后我们完成了工作");
    assert_eq!(tokens.len(), 9);
    assert_eq!(surfaces(&tokens[..2]), vec!["然", "后"]);
  }

  #[test]
  fn test_with_transitions_keeps_them_whole() {
    let segmenter = Segmenter::with_transitions(Lexicon::standard());
    let tokens = segmenter.segment("然后我们完成了项目管理");
    assert_eq!(surfaces(&tokens), vec!["然后", "我", "们", "完", "成", "了", "项目管理"]);
    assert_eq!(segmenter.term_count(), 49);
  }

  #[test]
  fn test_default_dictionary_prefers_longest_term() {
    let tokens = segment("人力资源管理");
    assert_eq!(surfaces(&tokens), vec!["人力资源管理"]);
  }

  #[test]
  fn test_other_kind_for_ascii_punctuation() {
    let tokens = segment("好,");
    assert_eq!(surfaces(&tokens), vec!["好", ","]);
    assert_eq!(tokens[1].kind, TokenKind::Other);
  }

  #[test]
  fn test_term_count_ignores_duplicates_and_empty() {
    let segmenter = Segmenter::new(&["项目", "项目", ""]);
    assert_eq!(segmenter.term_count(), 1);
  }
}
