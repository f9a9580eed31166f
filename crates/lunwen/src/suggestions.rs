//! Advisory messages built from lexicon membership and statistic thresholds
//!
//! Each check runs independently, so a text can trigger any subset of them.

use serde::Serialize;

use crate::lexicon::{any_present, present_in, Lexicon};
use crate::stats::BasicStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
  Improvement,
  Enhancement,
  Recommendation,
}

/// A non-blocking piece of advice; `position` counts chars
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSuggestion {
  #[serde(rename = "type")]
  pub kind: SuggestionKind,
  pub message: String,
  pub position: usize,
  pub related_text: String,
}

impl TextSuggestion {
  fn new(kind: SuggestionKind, message: String, position: usize, related_text: &str) -> Self {
    Self { kind, message, position, related_text: related_text.to_string() }
  }
}

/// Paragraph count below which a structural suggestion is made
pub const MIN_PARAGRAPHS: usize = 3;
/// Lexical diversity below which vocabulary repetition is flagged
pub const MIN_DIVERSITY: f64 = 0.5;
pub const MAX_AVG_SENTENCE_LENGTH: usize = 30;

/// Char offset of the first occurrence of `term`, or 0
fn char_position(text: &str, term: &str) -> usize {
  text.find(term).map(|byte| text[..byte].chars().count()).unwrap_or(0)
}

fn acknowledge(
  text: &str,
  terms: &'static [&'static str],
  kind: SuggestionKind,
  message: impl Fn(&str) -> String,
) -> Vec<TextSuggestion> {
  present_in(terms, text)
    .map(|term| TextSuggestion::new(kind, message(term), char_position(text, term), term))
    .collect()
}

/// Every suggestion for `text`, acknowledgments first
pub fn generate_suggestions(
  text: &str,
  stats: &BasicStats,
  diversity: Option<f64>,
  lexicon: &'static Lexicon,
) -> Vec<TextSuggestion> {
  if stats.char_count == 0 {
    return Vec::new();
  }

  let mut suggestions = Vec::new();

  suggestions.extend(acknowledge(text, lexicon.domain_terms, SuggestionKind::Enhancement, |term| {
    format!("很好！您使用了专业术语\"{term}\"")
  }));
  suggestions.extend(acknowledge(text, lexicon.transition_words, SuggestionKind::Improvement, |term| {
    format!("使用了良好的过渡词\"{term}\"，有助于文章连贯性")
  }));
  suggestions.extend(acknowledge(text, lexicon.descriptors, SuggestionKind::Recommendation, |term| {
    format!("使用了合适的描述词\"{term}\"")
  }));

  if stats.avg_sentence_length > MAX_AVG_SENTENCE_LENGTH {
    suggestions.push(TextSuggestion::new(
      SuggestionKind::Improvement,
      format!("当前平均句长为{}字符，建议将长句拆分为短句以提高可读性", stats.avg_sentence_length),
      0,
      "句子长度",
    ));
  }

  if stats.paragraph_count < MIN_PARAGRAPHS {
    suggestions.push(TextSuggestion::new(
      SuggestionKind::Recommendation,
      "建议增加段落数量，通常一篇好的论文应包含引言、正文、结论等多个段落".to_string(),
      0,
      "段落结构",
    ));
  }

  if diversity.is_some_and(|ratio| ratio < MIN_DIVERSITY) {
    suggestions.push(TextSuggestion::new(
      SuggestionKind::Improvement,
      "词汇重复率较高，建议丰富词汇表达".to_string(),
      0,
      "词汇多样性",
    ));
  }

  if !any_present(lexicon.connective_words, text) {
    suggestions.push(TextSuggestion::new(
      SuggestionKind::Recommendation,
      "缺少过渡词，建议添加如\"首先\"、\"其次\"、\"因此\"等连接词以提高连贯性".to_string(),
      0,
      "过渡词",
    ));
  }

  if !any_present(lexicon.professional_terms, text) {
    suggestions.push(TextSuggestion::new(
      SuggestionKind::Recommendation,
      "缺少项目管理专业术语，建议融入\"十大管理\"等相关概念".to_string(),
      0,
      "专业术语",
    ));
  }

  if !any_present(lexicon.conclusion_terms, text) {
    suggestions.push(TextSuggestion::new(
      SuggestionKind::Recommendation,
      "缺少总结性词汇，建议在结尾处使用\"总结\"、\"结论\"、\"经验\"等词汇".to_string(),
      0,
      "总结",
    ));
  }

  suggestions
}
