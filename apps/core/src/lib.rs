//! Prompt Refiner core.
//!
//! Turns a rough prompt into a detailed one: generate clarifying questions
//! (remotely, falling back to local rules), collect answers, and compose the
//! final prompt.

pub mod analysis;
pub mod composer;
pub mod config;
pub mod error;
pub mod models;
pub mod sources;
pub mod wizard;

#[cfg(test)]
mod tests;

pub use analysis::{ClassificationResult, Intent, PromptAnalyzer};
pub use composer::PromptComposer;
pub use config::ApiConfig;
pub use error::AppError;
pub use models::{Answer, Complexity, ComposedPrompt, PromptAnalysis, Question, QuestionCategory};
pub use sources::{FallbackQuestionSource, LocalQuestionSource, QuestionSource, RemoteQuestionSource};
pub use wizard::{WizardSession, WizardState};
