//! Lexical statistics
//!
//! Character, sentence and paragraph counts always come from direct pattern
//! matching over the raw text. Word counts have two sources: the pattern-based
//! count used by the basic analyzer and the token count used by the advanced
//! analyzer (see [`BasicStats::from_text`] and [`BasicStats::from_tokens`]).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

use crate::tokenizer::{is_han, Token};

static WORD_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"[\x{4e00}-\x{9fa5}]+|[a-zA-Z]+[0-9]*|[0-9]+").unwrap());

static TERMINAL_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[。！？!?]+").unwrap());

static TERMINAL_OR_NEWLINE_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[。！？\n]").unwrap());

static PARAGRAPH_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

static KEYWORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\x{4e00}-\x{9fa5}]{2,}").unwrap());

/// How sentence boundaries are found.
///
/// `Terminal` is the canonical rule. `TerminalOrNewline` also ends a sentence
/// at a bare newline but ignores the ASCII `!` and `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SentenceRule {
  #[default]
  Terminal,
  TerminalOrNewline,
}

/// Counts derived from one input text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicStats {
  pub char_count: usize,
  pub word_count: usize,
  pub sentence_count: usize,
  pub paragraph_count: usize,
  pub avg_sentence_length: usize,
  pub text_length: usize,
}

impl BasicStats {
  /// Counts from pattern matching alone
  pub fn from_text(text: &str) -> Self {
    Self::build(text, count_words(text))
  }

  /// Pattern-based counts, except `word_count` which is the number of tokens
  pub fn from_tokens(text: &str, tokens: &[Token<'_>]) -> Self {
    Self::build(text, tokens.len())
  }

  fn build(text: &str, word_count: usize) -> Self {
    let char_count = count_chars(text);
    let sentence_count = count_sentences(text);

    Self {
      char_count,
      word_count,
      sentence_count,
      paragraph_count: count_paragraphs(text),
      avg_sentence_length: avg_sentence_length(char_count, sentence_count),
      text_length: text.chars().count(),
    }
  }
}

/// One row of a frequency table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyEntry {
  pub token: String,
  pub count: usize,
}

fn is_countable(ch: char) -> bool {
  is_han(ch) || ch.is_ascii_alphanumeric()
}

/// Chinese characters, ASCII letters and digits; punctuation and spaces excluded
pub fn count_chars(text: &str) -> usize {
  text.chars().filter(|&ch| is_countable(ch)).count()
}

/// Chinese runs count per character, Latin words count once, digits per digit
pub fn count_words(text: &str) -> usize {
  WORD_RE
    .find_iter(text)
    .map(|m| {
      let run = m.as_str();
      match run.chars().next() {
        Some(ch) if is_han(ch) => run.chars().count(),
        Some(ch) if ch.is_ascii_alphabetic() => 1,
        _ => run.len(),
      }
    })
    .sum()
}

pub fn count_sentences(text: &str) -> usize {
  count_sentences_with(text, SentenceRule::Terminal)
}

pub fn count_sentences_with(text: &str, rule: SentenceRule) -> usize {
  let splitter = match rule {
    SentenceRule::Terminal => &*TERMINAL_SPLIT_RE,
    SentenceRule::TerminalOrNewline => &*TERMINAL_OR_NEWLINE_SPLIT_RE,
  };
  count_non_blank(splitter.split(text))
}

/// Blocks of text separated by one or more blank lines
pub fn count_paragraphs(text: &str) -> usize {
  count_non_blank(PARAGRAPH_SPLIT_RE.split(text))
}

fn count_non_blank<'a>(segments: impl Iterator<Item = &'a str>) -> usize {
  segments.filter(|segment| !segment.trim().is_empty()).count()
}

pub fn avg_sentence_length(char_count: usize, sentence_count: usize) -> usize {
  if sentence_count == 0 {
    return 0;
  }
  (char_count as f64 / sentence_count as f64).round() as usize
}

/// Distinct tokens over total tokens; `None` when there are no tokens
pub fn lexical_diversity(tokens: &[Token<'_>]) -> Option<f64> {
  if tokens.is_empty() {
    return None;
  }
  let distinct: HashSet<&str> = tokens.iter().map(|token| token.text).collect();
  Some(distinct.len() as f64 / tokens.len() as f64)
}

/// Count occurrences and keep the `limit` most frequent, ties in first-seen order
pub fn rank_by_frequency<'a>(items: impl IntoIterator<Item = &'a str>, limit: usize) -> Vec<(&'a str, usize)> {
  let mut index: HashMap<&'a str, usize> = HashMap::new();
  let mut ranked: Vec<(&'a str, usize)> = Vec::new();

  for item in items {
    match index.get(item) {
      Some(&slot) => ranked[slot].1 += 1,
      None => {
        index.insert(item, ranked.len());
        ranked.push((item, 1));
      }
    }
  }

  // stable, so equal counts keep first-seen order
  ranked.sort_by(|a, b| b.1.cmp(&a.1));
  ranked.truncate(limit);
  ranked
}

/// Token frequency table, whitespace-only tokens skipped
pub fn word_frequency(tokens: &[Token<'_>], limit: usize) -> Vec<FrequencyEntry> {
  let items = tokens.iter().map(|token| token.text).filter(|text| !text.trim().is_empty());
  rank_by_frequency(items, limit)
    .into_iter()
    .map(|(token, count)| FrequencyEntry { token: token.to_string(), count })
    .collect()
}

/// Most frequent runs of two or more Chinese characters
pub fn extract_keywords(text: &str, limit: usize) -> Vec<String> {
  rank_by_frequency(KEYWORD_RE.find_iter(text).map(|m| m.as_str()), limit)
    .into_iter()
    .map(|(keyword, _)| keyword.to_string())
    .collect()
}
