//! Static word lists used by the analyzers
//!
//! Every table here is fixed at compile time. Editing a list changes
//! segmentation and scoring deterministically, so treat any change as a
//! data edit and update the tests that pin the affected output.

/// Curated word lists grouped by the role they play during analysis
#[derive(Debug)]
pub struct Lexicon {
  /// Dictionary consulted by the longest-match segmenter
  pub segmentation_terms: &'static [&'static str],
  /// Software engineering terms acknowledged when present
  pub domain_terms: &'static [&'static str],
  /// Structural transitions acknowledged when present
  pub transition_words: &'static [&'static str],
  /// Transitions counted (as tokens) by the coherence score; only visible
  /// to a segmenter built with [`Segmenter::with_transitions`]
  ///
  /// [`Segmenter::with_transitions`]: crate::tokenizer::Segmenter::with_transitions
  pub coherence_transitions: &'static [&'static str],
  /// Connectives whose total absence triggers a suggestion
  pub connective_words: &'static [&'static str],
  pub descriptors: &'static [&'static str],
  /// Project management knowledge areas
  pub professional_terms: &'static [&'static str],
  pub conclusion_terms: &'static [&'static str],
  /// Keywords measured by the topic relevance score
  pub topic_keywords: &'static [&'static str],
  pub introduction_markers: &'static [&'static str],
  pub body_markers: &'static [&'static str],
  pub conclusion_markers: &'static [&'static str],
  /// Single characters dropped from the token stream
  pub punctuation: &'static [char],
}

pub static STANDARD: Lexicon = Lexicon {
  segmentation_terms: &[
    "项目管理", "架构设计", "需求分析", "系统集成", "软件工程",
    "质量保证", "风险控制", "配置管理", "变更管理", "测试管理",
    "十大管理", "范围管理", "进度管理", "成本管理", "质量管理",
    "人力资源管理", "沟通管理", "风险管理", "采购管理", "干系人管理",
    "生命周期", "可行性分析", "技术方案", "实施方案", "效果评估",
    "经验总结", "问题解决", "持续改进", "团队协作", "绩效考核",
  ],
  domain_terms: &[
    "架构设计", "系统集成", "需求分析", "软件工程", "项目管理",
    "质量保证", "风险控制", "配置管理", "变更管理", "测试管理",
  ],
  transition_words: &[
    "首先", "其次", "再次", "最后", "综上所述", "总而言之",
    "一方面", "另一方面", "在此基础上", "相应地", "进一步地",
  ],
  coherence_transitions: &[
    "首先", "其次", "然后", "接着", "最后",
    "另外", "此外", "而且", "同时", "然而",
    "但是", "尽管", "虽然", "因此", "所以",
    "综上所述", "总而言之", "总的来说", "总体而言",
  ],
  connective_words: &[
    "首先", "其次", "然后", "接着", "最后",
    "另外", "此外", "而且", "同时", "然而",
    "但是", "尽管", "虽然", "因此", "所以",
  ],
  descriptors: &[
    "有效地", "显著地", "全面地", "系统地", "科学地", "合理地",
    "创新性", "实用性", "可操作性", "前瞻性", "可靠性", "稳定性",
  ],
  professional_terms: &[
    "十大管理", "范围管理", "进度管理", "成本管理", "质量管理",
    "人力资源管理", "沟通管理", "风险管理", "采购管理", "干系人管理",
  ],
  conclusion_terms: &["总结", "结论", "经验", "展望", "反思"],
  topic_keywords: &[
    "项目", "管理", "系统", "架构", "设计", "分析", "实施", "方案",
    "十大管理", "范围", "进度", "成本", "质量", "人力", "沟通",
    "风险", "采购", "干系人", "生命周期", "需求", "解决方案",
  ],
  introduction_markers: &["引言", "背景", "概述", "介绍", "开头"],
  body_markers: &["正文", "分析", "讨论", "实施", "过程", "解决方案"],
  conclusion_markers: &["结论", "总结", "收尾", "展望", "反思"],
  punctuation: &[
    ' ', '\u{3000}', '，', '。', '！', '？', '；', '：', '"', '\'',
    '（', '）', '【', '】', '《', '》', '、', '\n', '\t',
  ],
};

impl Lexicon {
  pub fn standard() -> &'static Lexicon {
    &STANDARD
  }

  /// True when `token` is exactly one of the discarded punctuation characters
  pub fn is_punctuation(&self, token: &str) -> bool {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
      (Some(ch), None) => self.punctuation.contains(&ch),
      _ => false,
    }
  }
}

/// Entries of `terms` that occur somewhere in `text`, in list order
pub fn present_in<'t>(
  terms: &'t [&'static str],
  text: &'t str,
) -> impl Iterator<Item = &'static str> + 't {
  terms.iter().copied().filter(move |term| text.contains(term))
}

/// True when at least one entry of `terms` occurs in `text`
pub fn any_present(terms: &[&str], text: &str) -> bool {
  terms.iter().any(|term| text.contains(term))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_is_punctuation() {
    let lexicon = Lexicon::standard();
    assert!(lexicon.is_punctuation("，"));
    assert!(lexicon.is_punctuation("\n"));
    assert!(lexicon.is_punctuation("\u{3000}"));
    assert!(!lexicon.is_punctuation("，，"));
    assert!(!lexicon.is_punctuation("的"));
    assert!(!lexicon.is_punctuation(""));
    // ASCII comma and period are not in the fixed set
    assert!(!lexicon.is_punctuation(","));
    assert!(!lexicon.is_punctuation("."));
  }

  #[test]
  fn test_present_in_keeps_list_order() {
    let found: Vec<_> =
      present_in(STANDARD.conclusion_terms, "展望未来，总结经验").collect();
    assert_eq!(found, vec!["总结", "经验", "展望"]);
  }

  #[test]
  fn test_any_present() {
    assert!(any_present(STANDARD.connective_words, "因此我们决定"));
    assert!(!any_present(STANDARD.connective_words, "我们决定"));
    assert!(!any_present(&[], "任何文本"));
  }

  #[test]
  fn test_no_empty_entries() {
    let lists = [
      STANDARD.segmentation_terms,
      STANDARD.domain_terms,
      STANDARD.transition_words,
      STANDARD.coherence_transitions,
      STANDARD.connective_words,
      STANDARD.descriptors,
      STANDARD.professional_terms,
      STANDARD.conclusion_terms,
      STANDARD.topic_keywords,
    ];
    for list in lists {
      assert!(list.iter().all(|term| !term.is_empty()));
    }
  }

  #[test]
  fn test_segmentation_dictionary_holds_only_domain_terms() {
    assert_eq!(STANDARD.segmentation_terms.len(), 30);
    for word in STANDARD.coherence_transitions {
      assert!(!STANDARD.segmentation_terms.contains(word), "{word} in default dictionary");
    }
  }

  #[test]
  fn test_only_ascii_quotes_are_punctuation() {
    let lexicon = Lexicon::standard();
    assert!(lexicon.is_punctuation("\""));
    assert!(lexicon.is_punctuation("'"));
    assert!(!lexicon.is_punctuation("“"));
    assert!(!lexicon.is_punctuation("’"));
  }
}
