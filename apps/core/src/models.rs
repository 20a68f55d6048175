use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The taxonomy used to group clarifying questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionCategory {
    Context,
    Purpose,
    Audience,
    Format,
    Constraints,
    Examples,
}

impl QuestionCategory {
    pub fn label(&self) -> &'static str {
        match self {
            QuestionCategory::Context => "context",
            QuestionCategory::Purpose => "purpose",
            QuestionCategory::Audience => "audience",
            QuestionCategory::Format => "format",
            QuestionCategory::Constraints => "constraints",
            QuestionCategory::Examples => "examples",
        }
    }
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A clarifying question shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier within the current question set (e.g. "context-1", "q3").
    pub id: String,
    /// The question text.
    pub question: String,
    /// Example answers, in display order.
    #[serde(default)]
    pub examples: Vec<String>,
    pub category: QuestionCategory,
}

/// The user's answer to one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    /// Id of the `Question` this answers.
    pub question_id: String,
    /// Free text; may be blank.
    pub content: String,
}

impl Answer {
    pub fn new(question_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            content: content.into(),
        }
    }

    /// Whether the answer carries any non-whitespace content.
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

/// Coarse complexity tier of a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Medium,
    Complex,
}

impl Complexity {
    pub fn label(&self) -> &'static str {
        match self {
            Complexity::Simple => "simple",
            Complexity::Medium => "medium",
            Complexity::Complex => "complex",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Prompt engineering techniques a composed prompt can be credited with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PromptTechnique {
    #[serde(rename = "TCREI")]
    Tcrei,
    #[serde(rename = "Few-shot")]
    FewShot,
    #[serde(rename = "Chain-of-thought")]
    ChainOfThought,
    #[serde(rename = "Role-playing")]
    RolePlaying,
    #[serde(rename = "Constraint-setting")]
    ConstraintSetting,
    #[serde(rename = "Format-specification")]
    FormatSpecification,
    #[serde(rename = "맥락 정보 통합")]
    ContextIntegration,
    #[serde(rename = "구체적 요구사항 반영")]
    SpecificRequirements,
    #[serde(rename = "논리적 구조화")]
    LogicalStructuring,
    #[serde(rename = "실행 가능한 지시사항")]
    ActionableInstructions,
    #[serde(rename = "제약사항 명시")]
    ExplicitConstraints,
    #[serde(rename = "출력 형식 지정")]
    OutputFormat,
}

impl PromptTechnique {
    pub fn label(&self) -> &'static str {
        match self {
            PromptTechnique::Tcrei => "TCREI",
            PromptTechnique::FewShot => "Few-shot",
            PromptTechnique::ChainOfThought => "Chain-of-thought",
            PromptTechnique::RolePlaying => "Role-playing",
            PromptTechnique::ConstraintSetting => "Constraint-setting",
            PromptTechnique::FormatSpecification => "Format-specification",
            PromptTechnique::ContextIntegration => "맥락 정보 통합",
            PromptTechnique::SpecificRequirements => "구체적 요구사항 반영",
            PromptTechnique::LogicalStructuring => "논리적 구조화",
            PromptTechnique::ActionableInstructions => "실행 가능한 지시사항",
            PromptTechnique::ExplicitConstraints => "제약사항 명시",
            PromptTechnique::OutputFormat => "출력 형식 지정",
        }
    }
}

impl fmt::Display for PromptTechnique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Result of one composition cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposedPrompt {
    /// Wall-clock milliseconds at composition time, as a decimal string.
    pub id: String,
    pub original_prompt: String,
    pub composed_prompt: String,
    /// Human-readable list of what the composition added.
    pub improvements: Vec<String>,
    pub applied_techniques: Vec<PromptTechnique>,
    pub timestamp: DateTime<Utc>,
}

/// Structured payload returned by the question-generation service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptAnalysis {
    #[serde(default)]
    pub ambiguous_areas: Vec<String>,
    pub suggested_questions: Vec<Question>,
    #[serde(default)]
    pub detected_intent: String,
    #[serde(default = "default_complexity")]
    pub complexity: Complexity,
}

fn default_complexity() -> Complexity {
    Complexity::Medium
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_technique_serializes_as_label() {
        let json = serde_json::to_string(&PromptTechnique::ContextIntegration).unwrap();
        assert_eq!(json, "\"맥락 정보 통합\"");

        let parsed: PromptTechnique = serde_json::from_str("\"Few-shot\"").unwrap();
        assert_eq!(parsed, PromptTechnique::FewShot);
    }

    #[test]
    fn test_question_without_examples() {
        let q: Question =
            serde_json::from_str(r#"{"id":"q1","question":"누구를 위한 글인가요?","category":"audience"}"#)
                .unwrap();
        assert!(q.examples.is_empty());
        assert_eq!(q.category, QuestionCategory::Audience);
    }

    #[test]
    fn test_answer_blankness() {
        assert!(Answer::new("q1", "  \n\t").is_blank());
        assert!(!Answer::new("q1", " 초등학생 ").is_blank());
    }
}
