//! Rule-based defect detection over raw text
//!
//! Each rule scans the whole text on its own and reports every
//! non-overlapping match. Findings from different rules may overlap and are
//! never merged. Positions and lengths count chars, not bytes.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Category of a detected defect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
  Repeated,
  Grammar,
  Style,
  Length,
}

/// One detected defect, located for highlighting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextError {
  #[serde(rename = "type")]
  pub kind: ErrorKind,
  pub message: String,
  pub position: usize,
  pub length: usize,
  pub suggestion: String,
}

/// Minimum run of non-terminal chars before a comma to count as a run-on sentence
pub const RUN_ON_MIN_CHARS: usize = 50;

static RUN_ON_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(&format!("[^。！？]{{{RUN_ON_MIN_CHARS},}}[,，]")).unwrap());

static GRAMMAR_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
  [
    // doubled aspect/possessive marker after an action word
    r"(?:进行|实施|开展)\s*(?:了)?\s*(?:了|的)",
    // structural particles separated by whitespace
    r"(?:的|地|得)\s+(?:的|地|得)",
    // copula repeated across whitespace
    r"(?:是|为)\s+(?:是|为)",
  ]
  .iter()
  .map(|pattern| Regex::new(pattern).unwrap())
  .collect()
});

/// Range checked by the repeated character rule
fn is_repeat_candidate(ch: char) -> bool {
  ('\u{4e00}'..='\u{9faf}').contains(&ch)
}

/// Converts ascending byte offsets into char offsets without rescanning
struct CharOffsets<'a> {
  text: &'a str,
  byte: usize,
  chars: usize,
}

impl<'a> CharOffsets<'a> {
  fn new(text: &'a str) -> Self {
    Self { text, byte: 0, chars: 0 }
  }

  fn at(&mut self, byte: usize) -> usize {
    if byte < self.byte {
      self.byte = 0;
      self.chars = 0;
    }
    self.chars += self.text[self.byte..byte].chars().count();
    self.byte = byte;
    self.chars
  }
}

/// Run every rule in order: repeated characters, run-on sentences, grammar
pub fn find_errors(text: &str) -> Vec<TextError> {
  let mut errors = find_repeated_chars(text);
  errors.extend(find_run_on_sentences(text));
  errors.extend(find_grammar_issues(text));
  errors
}

/// A Chinese character immediately followed by copies of itself
pub fn find_repeated_chars(text: &str) -> Vec<TextError> {
  let mut errors = Vec::new();
  let mut chars = text.chars().enumerate().peekable();

  while let Some((position, ch)) = chars.next() {
    if !is_repeat_candidate(ch) {
      continue;
    }

    let mut run = 1;
    while chars.next_if(|&(_, next)| next == ch).is_some() {
      run += 1;
    }

    if run > 1 {
      let matched: String = std::iter::repeat(ch).take(run).collect();
      errors.push(TextError {
        kind: ErrorKind::Repeated,
        message: format!("发现重复字符: \"{matched}\""),
        position,
        length: run,
        suggestion: format!("建议删除重复字符，改为\"{ch}\""),
      });
    }
  }

  errors
}

pub fn find_run_on_sentences(text: &str) -> Vec<TextError> {
  scan(text, &RUN_ON_RE, |position, length| TextError {
    kind: ErrorKind::Length,
    message: "句子过长，建议拆分".to_string(),
    position,
    length,
    suggestion: "建议将长句拆分为多个短句，提高可读性".to_string(),
  })
}

/// All grammar patterns, each reported the same way
pub fn find_grammar_issues(text: &str) -> Vec<TextError> {
  GRAMMAR_PATTERNS
    .iter()
    .flat_map(|pattern| {
      scan(text, pattern, |position, length| TextError {
        kind: ErrorKind::Grammar,
        message: "发现语法错误".to_string(),
        position,
        length,
        suggestion: "请检查语法结构，修正错误".to_string(),
      })
    })
    .collect()
}

fn scan<F>(text: &str, pattern: &Regex, report: F) -> Vec<TextError>
where
  F: Fn(usize, usize) -> TextError,
{
  let mut offsets = CharOffsets::new(text);
  pattern
    .find_iter(text)
    .map(|m| {
      let position = offsets.at(m.start());
      report(position, m.as_str().chars().count())
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_repeated_char_reported_once() {
    let errors = find_errors("的的确如此");
    let repeated: Vec<_> = errors.iter().filter(|e| e.kind == ErrorKind::Repeated).collect();
    assert_eq!(repeated.len(), 1);
    assert_eq!(repeated[0].position, 0);
    assert_eq!(repeated[0].length, 2);
    assert_eq!(repeated[0].suggestion, "建议删除重复字符，改为\"的\"");
  }

  #[test]
  fn test_repeated_run_is_one_match() {
    let errors = find_repeated_chars("好好好，再见见");
    assert_eq!(errors.len(), 2);
    assert_eq!((errors[0].position, errors[0].length), (0, 3));
    assert_eq!((errors[1].position, errors[1].length), (5, 2));
    assert_eq!(errors[0].message, "发现重复字符: \"好好好\"");
  }

  #[test]
  fn test_repeated_ignores_non_chinese() {
    assert!(find_repeated_chars("aa11，，  ").is_empty());
    assert!(find_repeated_chars("").is_empty());
  }

  #[test]
  fn test_run_on_sentence() {
    let long = "长".repeat(60);
    let text = format!("短句。{long}，后面");
    let errors = find_run_on_sentences(&text);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ErrorKind::Length);
    assert_eq!(errors[0].position, 3);
    assert_eq!(errors[0].length, 61);
  }

  #[test]
  fn test_run_on_needs_comma() {
    let long = "长".repeat(60);
    assert!(find_run_on_sentences(&format!("{long}。")).is_empty());
    assert!(find_run_on_sentences(&format!("{}，", "短".repeat(49))).is_empty());
    assert_eq!(find_run_on_sentences(&format!("{},", "短".repeat(50))).len(), 1);
  }

  #[test]
  fn test_grammar_patterns() {
    let errors = find_grammar_issues("我们进行了了调研");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ErrorKind::Grammar);
    assert_eq!(errors[0].position, 2);
    assert_eq!(errors[0].length, 4);

    assert_eq!(find_grammar_issues("认真的 地工作").len(), 1);
    assert_eq!(find_grammar_issues("这 是 是 问题").len(), 1);
    assert!(find_grammar_issues("这是一个问题").is_empty());
  }

  #[test]
  fn test_adjacent_particles_are_not_grammar_errors() {
    for text in ["这样的地方很好", "这是为了提高质量", "他被认为是专家", "到达目的地"] {
      assert!(find_grammar_issues(text).is_empty(), "{text}");
    }
    // doubled characters are left to the repeated character rule
    let errors = find_errors("这是是问题");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ErrorKind::Repeated);
  }

  #[test]
  fn test_rules_report_overlaps_independently() {
    let errors = find_errors("我们进行了了调研");
    let found: Vec<_> = errors.iter().map(|e| (e.kind, e.position, e.length)).collect();
    assert_eq!(found, vec![(ErrorKind::Repeated, 4, 2), (ErrorKind::Grammar, 2, 4)]);
  }

  #[test]
  fn test_every_match_reported() {
    let errors = find_grammar_issues("是 是，为 为，是 为");
    assert_eq!(errors.len(), 3);
    let positions: Vec<_> = errors.iter().map(|e| e.position).collect();
    assert_eq!(positions, vec![0, 4, 8]);
  }

  #[test]
  fn test_char_offsets() {
    let text = "ab中文cd";
    let mut offsets = CharOffsets::new(text);
    assert_eq!(offsets.at(0), 0);
    assert_eq!(offsets.at(2), 2);
    assert_eq!(offsets.at(8), 4);
    assert_eq!(offsets.at(2), 2);
  }

  #[test]
  fn test_empty_text_has_no_errors() {
    assert!(find_errors("").is_empty());
  }
}
