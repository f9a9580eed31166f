//! Essay structure check: introduction, body and conclusion markers

use serde::Serialize;

use crate::lexicon::{any_present, Lexicon};

pub const INTRODUCTION_POINTS: u32 = 30;
pub const BODY_POINTS: u32 = 40;
pub const CONCLUSION_POINTS: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureEvaluation {
  pub has_introduction: bool,
  pub has_body: bool,
  pub has_conclusion: bool,
  pub structure_score: u32,
}

pub fn evaluate_structure(text: &str, lexicon: &Lexicon) -> StructureEvaluation {
  let has_introduction = any_present(lexicon.introduction_markers, text);
  let has_body = any_present(lexicon.body_markers, text);
  let has_conclusion = any_present(lexicon.conclusion_markers, text);

  let structure_score = [
    (has_introduction, INTRODUCTION_POINTS),
    (has_body, BODY_POINTS),
    (has_conclusion, CONCLUSION_POINTS),
  ]
  .iter()
  .filter(|(present, _)| *present)
  .map(|(_, points)| points)
  .sum();

  StructureEvaluation { has_introduction, has_body, has_conclusion, structure_score }
}
