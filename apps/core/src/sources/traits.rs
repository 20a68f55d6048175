use async_trait::async_trait;

use crate::error::AppError;
use crate::models::Question;

/// Defines the interface for anything that can produce clarifying questions.
///
/// Implementations are interchangeable so the wizard never needs to know
/// whether questions came from a remote model or from the local templates.
#[async_trait]
pub trait QuestionSource: Send + Sync + 'static {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Produces zero or more questions for the prompt, or fails.
    async fn request_questions(&self, prompt: &str) -> Result<Vec<Question>, AppError>;
}
