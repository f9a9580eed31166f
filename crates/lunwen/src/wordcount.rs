//! Plain non-whitespace counting for section length limits
//!
//! Section bounds are checked against this simpler count, not the analyzer's
//! `word_count`: every non-whitespace char counts, punctuation included.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-whitespace chars in `text`
pub fn count_non_whitespace(text: &str) -> usize {
  text.chars().filter(|ch| !ch.is_whitespace()).count()
}

pub fn is_word_count_valid(text: &str, min: usize, max: usize) -> bool {
  let count = count_non_whitespace(text);
  count >= min && count <= max
}

/// Summary counts for a block of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordCountInfo {
  pub total: usize,
  pub chars: usize,
  pub spaces: usize,
  pub lines: usize,
  pub per_line: usize,
}

impl WordCountInfo {
  pub fn of(text: &str) -> Self {
    let total = count_non_whitespace(text);
    let lines = text.matches('\n').count() + 1;

    Self {
      total,
      chars: text.chars().count(),
      spaces: text.chars().filter(|ch| ch.is_whitespace()).count(),
      lines,
      per_line: (total as f64 / lines as f64).round() as usize,
    }
  }
}

impl fmt::Display for WordCountInfo {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "总字数: {} | 字符数: {} | 空格数: {} | 行数: {} | 平均每行: {}字",
      self.total, self.chars, self.spaces, self.lines, self.per_line
    )
  }
}

/// Inclusive length limits for one essay section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionBounds {
  pub min_words: usize,
  pub max_words: usize,
}

/// Outcome of checking a text against [`SectionBounds`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionCheck {
  pub count: usize,
  pub min_words: usize,
  pub max_words: usize,
  pub within_bounds: bool,
}

impl SectionBounds {
  pub fn new(min_words: usize, max_words: usize) -> Self {
    Self { min_words, max_words }
  }

  pub fn check(&self, text: &str) -> SectionCheck {
    let count = count_non_whitespace(text);
    SectionCheck {
      count,
      min_words: self.min_words,
      max_words: self.max_words,
      within_bounds: count >= self.min_words && count <= self.max_words,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_count_non_whitespace() {
    assert_eq!(count_non_whitespace(""), 0);
    assert_eq!(count_non_whitespace("你好， 世界\n\t!"), 6);
    assert_eq!(count_non_whitespace("\u{3000}中"), 1);
  }

  #[test]
  fn test_is_word_count_valid() {
    assert!(is_word_count_valid("一二三", 3, 5));
    assert!(!is_word_count_valid("一二", 3, 5));
    assert!(!is_word_count_valid("一二三四五六", 3, 5));
  }

  #[test]
  fn test_word_count_info() {
    let info = WordCountInfo::of("第一行 文字\n第二行");
    assert_eq!(info.total, 8);
    assert_eq!(info.chars, 10);
    assert_eq!(info.spaces, 2);
    assert_eq!(info.lines, 2);
    assert_eq!(info.per_line, 4);
    assert_eq!(info.to_string(), "总字数: 8 | 字符数: 10 | 空格数: 2 | 行数: 2 | 平均每行: 4字");
  }

  #[test]
  fn test_empty_info() {
    let info = WordCountInfo::of("");
    assert_eq!(info.lines, 1);
    assert_eq!(info.per_line, 0);
  }

  #[test]
  fn test_section_check() {
    let bounds = SectionBounds::new(2, 4);
    let check = bounds.check("一 二 三");
    assert_eq!(check.count, 3);
    assert!(check.within_bounds);
    assert!(!bounds.check("一二三四五").within_bounds);
  }
}
