//! # Analysis Module
//!
//! Fast, non-LLM prompt analysis. Used as the local question source when the
//! remote question-generation call fails.
//!
//! ## Components
//! - `intent`: ordered regex rules, first match wins
//! - `complexity`: token count and marker-word tiering
//! - `ambiguity`: every matching rule plus two absence checks
//! - `questions`: canned question templates and the 5-question cap
//! - `analyzer`: main orchestrator

pub mod ambiguity;
pub mod analyzer;
pub mod complexity;
pub mod intent;
pub mod questions;

pub use ambiguity::{AmbiguityDetector, AmbiguityRule};
pub use analyzer::{validate_answers, ClassificationResult, PromptAnalyzer};
pub use complexity::{ComplexityScorer, ComplexitySignals, ComplexityThresholds};
pub use intent::{Intent, IntentClassifier, IntentRule};
pub use questions::{select_questions, MAX_QUESTIONS};
