//! Entry points that run the full pipeline over one text
//!
//! Both analyzers segment the text exactly once and feed that token sequence
//! (or the raw text) to every other stage. They never fail: empty or
//! punctuation-only input yields a mostly zeroed result.

use serde::Serialize;
use tracing::debug;

use crate::errors::{find_errors, TextError};
use crate::lexicon::Lexicon;
use crate::scoring::{coherence, readability, topic_relevance, ReadabilityProfile};
use crate::stats::{extract_keywords, lexical_diversity, word_frequency, BasicStats, FrequencyEntry};
use crate::structure::{evaluate_structure, StructureEvaluation};
use crate::suggestions::{generate_suggestions, TextSuggestion};
use crate::tokenizer::{segment, surfaces, Segmenter, DEFAULT_SEGMENTER};

pub const KEYWORD_LIMIT: usize = 10;
pub const FREQUENCY_LIMIT: usize = 20;

/// Result of [`analyze_basic`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
  #[serde(flatten)]
  pub stats: BasicStats,
  pub errors: Vec<TextError>,
  pub suggestions: Vec<TextSuggestion>,
  pub keywords: Vec<String>,
  pub readability: u32,
}

/// Result of [`analyze_advanced`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedAnalysisResult {
  pub basic: BasicStats,
  pub segments: Vec<String>,
  pub word_frequency: Vec<FrequencyEntry>,
  pub errors: Vec<TextError>,
  pub suggestions: Vec<TextSuggestion>,
  pub keywords: Vec<String>,
  pub readability: u32,
  pub coherence: u32,
  pub topic_relevance: u32,
  pub structure: StructureEvaluation,
}

/// Pattern-based counts with the pattern-only readability profile
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn analyze_basic(text: &str) -> AnalysisResult {
  let lexicon = Lexicon::standard();
  let tokens = segment(text);
  let stats = BasicStats::from_text(text);
  let diversity = lexical_diversity(&tokens);

  let errors = find_errors(text);
  let readability = readability(&ReadabilityProfile::PATTERN_ONLY, &stats, diversity, errors.len());
  let suggestions = generate_suggestions(text, &stats, diversity, lexicon);
  let keywords = extract_keywords(text, KEYWORD_LIMIT);

  debug!(
    chars = stats.char_count,
    sentences = stats.sentence_count,
    errors = errors.len(),
    suggestions = suggestions.len(),
    readability,
    "basic analysis complete"
  );

  AnalysisResult { stats, errors, suggestions, keywords, readability }
}

/// Token-aware counts and scores, plus frequency, coherence and relevance
pub fn analyze_advanced(text: &str) -> AdvancedAnalysisResult {
  analyze_advanced_with(text, &DEFAULT_SEGMENTER)
}

/// [`analyze_advanced`] with tokens from `segmenter` instead of the default
///
/// Every token-aware figure follows the segmenter, including the word count.
#[tracing::instrument(skip_all, fields(text_len = text.len(), terms = segmenter.term_count()))]
pub fn analyze_advanced_with(text: &str, segmenter: &Segmenter) -> AdvancedAnalysisResult {
  let lexicon = Lexicon::standard();
  let tokens = segmenter.segment(text);
  let stats = BasicStats::from_tokens(text, &tokens);
  let diversity = lexical_diversity(&tokens);

  let errors = find_errors(text);
  let readability = readability(&ReadabilityProfile::TOKEN_AWARE, &stats, diversity, errors.len());
  let coherence = coherence(&tokens, lexicon.coherence_transitions);
  let topic_relevance = topic_relevance(text, &tokens, lexicon.topic_keywords);
  let suggestions = generate_suggestions(text, &stats, diversity, lexicon);

  debug!(
    tokens = tokens.len(),
    readability,
    coherence,
    topic_relevance,
    "advanced analysis complete"
  );

  AdvancedAnalysisResult {
    basic: stats,
    segments: surfaces(&tokens).into_iter().map(str::to_string).collect(),
    word_frequency: word_frequency(&tokens, FREQUENCY_LIMIT),
    errors,
    suggestions,
    keywords: extract_keywords(text, KEYWORD_LIMIT),
    readability,
    coherence,
    topic_relevance,
    structure: evaluate_structure(text, lexicon),
  }
}
