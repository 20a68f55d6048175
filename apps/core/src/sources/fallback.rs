use async_trait::async_trait;
use tracing::{info, instrument, warn};

use super::traits::QuestionSource;
use crate::error::AppError;
use crate::models::Question;

/// Tries `primary` once and, on any failure, asks `secondary`.
///
/// No retry: a single failed primary call goes straight to the secondary.
pub struct FallbackQuestionSource<P, S>
where
    P: QuestionSource,
    S: QuestionSource,
{
    primary: P,
    secondary: S,
}

impl<P, S> FallbackQuestionSource<P, S>
where
    P: QuestionSource,
    S: QuestionSource,
{
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }
}

#[async_trait]
impl<P, S> QuestionSource for FallbackQuestionSource<P, S>
where
    P: QuestionSource,
    S: QuestionSource,
{
    fn name(&self) -> &'static str {
        "fallback"
    }

    #[instrument(skip(self, prompt))]
    async fn request_questions(&self, prompt: &str) -> Result<Vec<Question>, AppError> {
        match self.primary.request_questions(prompt).await {
            Ok(questions) => {
                info!(source = self.primary.name(), "Questions ready");
                Ok(questions)
            }
            Err(e) => {
                warn!(
                    "{} question source failed, falling back to {}: {}",
                    self.primary.name(),
                    self.secondary.name(),
                    e
                );
                self.secondary.request_questions(prompt).await
            }
        }
    }
}
