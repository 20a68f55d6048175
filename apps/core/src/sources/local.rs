use async_trait::async_trait;
use tracing::info;

use super::traits::QuestionSource;
use crate::analysis::PromptAnalyzer;
use crate::error::AppError;
use crate::models::Question;

/// Rule-based question source. Never fails.
#[derive(Debug, Clone, Default)]
pub struct LocalQuestionSource {
    analyzer: PromptAnalyzer,
}

impl LocalQuestionSource {
    pub fn new() -> Self {
        Self::with_analyzer(PromptAnalyzer::new())
    }

    pub fn with_analyzer(analyzer: PromptAnalyzer) -> Self {
        Self { analyzer }
    }
}

#[async_trait]
impl QuestionSource for LocalQuestionSource {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn request_questions(&self, prompt: &str) -> Result<Vec<Question>, AppError> {
        let analysis = self.analyzer.analyze(prompt);

        info!(
            intent = %analysis.detected_intent,
            complexity = %analysis.complexity,
            ambiguous_areas = ?analysis.ambiguous_areas,
            count = analysis.suggested_questions.len(),
            "Selected local questions"
        );

        Ok(analysis.suggested_questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_local_source_returns_base_questions() {
        let source = LocalQuestionSource::new();

        let questions = source.request_questions("").await.unwrap();
        assert_eq!(questions.len(), 5);
        assert_eq!(questions[0].id, "context-1");
    }

    #[tokio::test]
    async fn test_local_source_matches_analysis() {
        let analyzer = PromptAnalyzer::new();
        let source = LocalQuestionSource::with_analyzer(analyzer.clone());

        let questions = source.request_questions("데이터를 분석해줘").await.unwrap();
        assert_eq!(questions, analyzer.analyze("데이터를 분석해줘").suggested_questions);
    }
}
