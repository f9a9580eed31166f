//! Chinese essay analysis: dictionary segmentation, lexical statistics,
//! readability/coherence/relevance scoring and rule-based error detection

pub mod analyzer;
pub mod config;
pub mod error;
pub mod errors;
pub mod lexicon;
pub mod scoring;
pub mod stats;
pub mod structure;
pub mod suggestions;
pub mod tokenizer;
pub mod wordcount;

pub use analyzer::{analyze_advanced, analyze_advanced_with, analyze_basic, AdvancedAnalysisResult, AnalysisResult};
pub use config::{AnalysisMode, Config, OutputFormat};
pub use error::{LunwenError, Result};
pub use errors::{ErrorKind, TextError};
pub use lexicon::Lexicon;
pub use stats::BasicStats;
pub use suggestions::{SuggestionKind, TextSuggestion};
pub use tokenizer::{Segmenter, Token, TokenKind};
