//! Prompt Analyzer - orchestrator for the analysis module.
//!
//! Coordinates intent detection, complexity tiering, ambiguity detection and
//! local question selection. Every operation is pure and total.

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

use super::ambiguity::AmbiguityDetector;
use super::complexity::ComplexityScorer;
use super::intent::{Intent, IntentClassifier};
use super::questions;
use crate::models::{Answer, Complexity, PromptAnalysis, Question};

/// Everything the local classifier derives from a prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub detected_intent: Intent,
    pub complexity: Complexity,
    pub ambiguous_areas: Vec<String>,
}

/// Main analyzer that owns the rule tables
#[derive(Debug, Clone, Default)]
pub struct PromptAnalyzer {
    intent_classifier: IntentClassifier,
    complexity_scorer: ComplexityScorer,
    ambiguity_detector: AmbiguityDetector,
}

impl PromptAnalyzer {
    /// Create an analyzer with the built-in rule tables
    pub fn new() -> Self {
        Self {
            intent_classifier: IntentClassifier::new(),
            complexity_scorer: ComplexityScorer::new(),
            ambiguity_detector: AmbiguityDetector::new(),
        }
    }

    /// Create an analyzer from explicit components
    pub fn with_components(
        intent_classifier: IntentClassifier,
        complexity_scorer: ComplexityScorer,
        ambiguity_detector: AmbiguityDetector,
    ) -> Self {
        Self {
            intent_classifier,
            complexity_scorer,
            ambiguity_detector,
        }
    }

    /// Classify a prompt
    pub fn classify(&self, text: &str) -> ClassificationResult {
        let start = Instant::now();

        let result = ClassificationResult {
            detected_intent: self.intent_classifier.classify(text),
            complexity: self.complexity_scorer.score(text),
            ambiguous_areas: self.ambiguity_detector.detect(text),
        };

        debug!(
            intent = %result.detected_intent,
            complexity = %result.complexity,
            ambiguities = result.ambiguous_areas.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Prompt classified"
        );

        result
    }

    /// Pick the local question set for a prompt and its detected intent
    pub fn select_questions(&self, text: &str, intent: Intent) -> Vec<Question> {
        questions::select_questions(text, intent)
    }

    /// Full local analysis in the same shape the remote service returns
    pub fn analyze(&self, text: &str) -> PromptAnalysis {
        let classification = self.classify(text);
        let suggested_questions = self.select_questions(text, classification.detected_intent);

        PromptAnalysis {
            ambiguous_areas: classification.ambiguous_areas,
            suggested_questions,
            detected_intent: classification.detected_intent.label().to_string(),
            complexity: classification.complexity,
        }
    }
}

/// True when there is at least one answer and none of them is blank
pub fn validate_answers(answers: &[Answer]) -> bool {
    !answers.is_empty() && answers.iter().all(|a| !a.is_blank())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marketing_prompt() {
        let analyzer = PromptAnalyzer::new();

        let result = analyzer.classify("좋은 마케팅 전략을 만들어줘");
        assert_eq!(result.detected_intent, Intent::Planning);
        assert_eq!(result.complexity, Complexity::Simple);
        assert!(result
            .ambiguous_areas
            .contains(&"구체적인 품질 기준 부족".to_string()));
        assert!(result
            .ambiguous_areas
            .contains(&"구체적인 요구사항이나 형식 부족".to_string()));
    }

    #[test]
    fn test_local_analysis_shape() {
        let analyzer = PromptAnalyzer::new();

        let analysis = analyzer.analyze("데이터를 분석해줘");
        assert_eq!(analysis.detected_intent, "분석 및 평가");
        assert_eq!(analysis.suggested_questions.len(), 5);
        assert!(!analysis.ambiguous_areas.is_empty());
    }

    #[test]
    fn test_validate_answers() {
        assert!(!validate_answers(&[]));
        assert!(validate_answers(&[Answer::new("context-1", "사내 교육")]));
        assert!(!validate_answers(&[
            Answer::new("context-1", "사내 교육"),
            Answer::new("purpose-1", "   "),
        ]));
    }
}
