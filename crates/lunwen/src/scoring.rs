//! Readability, coherence and topic relevance scores
//!
//! Every score is an independent pure function returning a value in 0..=100.
//! Readability comes in two named profiles whose constants differ; the basic
//! analyzer uses [`ReadabilityProfile::PATTERN_ONLY`] and the advanced one
//! [`ReadabilityProfile::TOKEN_AWARE`].

use std::collections::HashSet;

use crate::stats::BasicStats;
use crate::tokenizer::Token;

pub const MAX_SCORE: u32 = 100;

/// Constants for one readability formula
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadabilityProfile {
  pub name: &'static str,
  /// Average sentence length (chars) above which points are deducted
  pub long_sentence_threshold: f64,
  /// Points per char of average sentence length above the threshold
  pub long_sentence_weight: f64,
  pub diversity_floor: f64,
  pub diversity_weight: f64,
  /// Points per detected text error
  pub error_weight: f64,
  /// Score 0 outright when there are no sentences or no words
  pub requires_content: bool,
  /// Use the rounded `avg_sentence_length` instead of the exact ratio
  pub rounded_sentence_length: bool,
}

impl ReadabilityProfile {
  pub const PATTERN_ONLY: Self = Self {
    name: "pattern-only",
    long_sentence_threshold: 30.0,
    long_sentence_weight: 0.5,
    diversity_floor: 0.4,
    diversity_weight: 50.0,
    error_weight: 2.0,
    requires_content: true,
    rounded_sentence_length: false,
  };

  pub const TOKEN_AWARE: Self = Self {
    name: "token-aware",
    long_sentence_threshold: 30.0,
    long_sentence_weight: 1.5,
    diversity_floor: 0.4,
    diversity_weight: 50.0,
    error_weight: 0.0,
    requires_content: false,
    rounded_sentence_length: true,
  };

  fn sentence_length(&self, stats: &BasicStats) -> f64 {
    if self.rounded_sentence_length || stats.sentence_count == 0 {
      stats.avg_sentence_length as f64
    } else {
      stats.char_count as f64 / stats.sentence_count as f64
    }
  }
}

/// Round half up, then clamp into 0..=100
pub fn clamp_score(raw: f64) -> u32 {
  if raw.is_nan() {
    return 0;
  }
  (raw + 0.5).floor().clamp(0.0, MAX_SCORE as f64) as u32
}

/// Higher is easier to read
pub fn readability(
  profile: &ReadabilityProfile,
  stats: &BasicStats,
  diversity: Option<f64>,
  error_count: usize,
) -> u32 {
  if profile.requires_content && (stats.sentence_count == 0 || stats.word_count == 0) {
    return 0;
  }

  let mut score = MAX_SCORE as f64;

  let sentence_length = profile.sentence_length(stats);
  if sentence_length > profile.long_sentence_threshold {
    score -= (sentence_length - profile.long_sentence_threshold) * profile.long_sentence_weight;
  }

  if let Some(ratio) = diversity {
    if ratio < profile.diversity_floor {
      score -= (profile.diversity_floor - ratio) * profile.diversity_weight;
    }
  }

  score -= error_count as f64 * profile.error_weight;

  clamp_score(score)
}

/// Transitions expected for a text of `token_count` tokens: two per 50, at least one
pub fn expected_transitions(token_count: usize) -> usize {
  ((token_count / 50) * 2).max(1)
}

/// Share of expected transitions actually used, counting each distinct word once
pub fn coherence(tokens: &[Token<'_>], transitions: &[&str]) -> u32 {
  let present: HashSet<&str> = tokens.iter().map(|token| token.text).collect();
  let hits = transitions.iter().filter(|word| present.contains(*word)).count();
  let expected = expected_transitions(tokens.len());

  clamp_score(hits as f64 / expected as f64 * 100.0)
}

/// Keyword density: keywords found in the text plus tokens containing any keyword
pub fn topic_relevance(text: &str, tokens: &[Token<'_>], keywords: &[&str]) -> u32 {
  if keywords.is_empty() {
    return 0;
  }

  let keyword_count = keywords.iter().filter(|keyword| text.contains(*keyword)).count();
  let segment_matches = tokens
    .iter()
    .filter(|token| keywords.iter().any(|keyword| token.text.contains(keyword)))
    .count();

  clamp_score((keyword_count + segment_matches) as f64 / keywords.len() as f64 * 100.0)
}
