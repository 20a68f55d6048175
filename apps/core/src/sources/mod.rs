//! Question sources.
//!
//! A `QuestionSource` turns a prompt into clarifying questions. The remote
//! source asks a chat-completion service, the local source uses the rule-based
//! analyzer, and `FallbackQuestionSource` tries one and falls back to the other.

pub mod fallback;
pub mod local;
pub mod prompts;
pub mod remote;
pub mod traits;

pub use fallback::FallbackQuestionSource;
pub use local::LocalQuestionSource;
pub use remote::RemoteQuestionSource;
pub use traits::QuestionSource;
