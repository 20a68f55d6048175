//! Prompt Composer
//!
//! Stitches the original prompt, a Q&A transcript of the answered questions
//! and a fixed closing instruction into the final prompt.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::models::{Answer, ComposedPrompt, PromptTechnique, Question};

/// Header placed before the Q&A transcript
pub const TRANSCRIPT_HEADER: &str = "다음 질문과 답변을 참고해주세요:";

/// Closing instruction appended to every composed prompt
pub const CLOSING_INSTRUCTION: &str = "충분히 관련된 레퍼런스를 최대한 많이 찾아보고 많이 생각하고, 주어진 질문과 답변을 참고하여 처음 입력한 요구사항에 대해서 답변해주세요.";

const BASE_IMPROVEMENTS: [&str; 3] = [
    "원본 요구사항 명확히 제시",
    "관련 질문과 답변을 구조화하여 포함",
    "충분한 고려를 위한 지시사항 추가",
];

const BASE_TECHNIQUES: [PromptTechnique; 2] = [
    PromptTechnique::SpecificRequirements,
    PromptTechnique::LogicalStructuring,
];

#[derive(Debug, Clone, Copy, Default)]
pub struct PromptComposer;

impl PromptComposer {
    pub fn new() -> Self {
        Self
    }

    /// Compose using the current wall-clock time for `id` and `timestamp`
    pub fn compose(
        &self,
        original_prompt: &str,
        questions: &[Question],
        answers: &[Answer],
    ) -> ComposedPrompt {
        self.compose_at(original_prompt, questions, answers, Utc::now())
    }

    /// Compose with an explicit clock value.
    ///
    /// The transcript header appears whenever a non-blank answer exists.
    /// Answers whose id matches no question are skipped inside the transcript
    /// and are not counted.
    pub fn compose_at(
        &self,
        original_prompt: &str,
        questions: &[Question],
        answers: &[Answer],
        now: DateTime<Utc>,
    ) -> ComposedPrompt {
        let non_blank: Vec<&Answer> = answers.iter().filter(|a| !a.is_blank()).collect();

        let mut composed = String::from(original_prompt);
        composed.push_str("\n\n");

        let mut answered = 0;
        if !non_blank.is_empty() {
            composed.push_str(TRANSCRIPT_HEADER);
            composed.push('\n');
            for answer in &non_blank {
                let Some(question) = questions.iter().find(|q| q.id == answer.question_id) else {
                    continue;
                };
                composed.push_str(&format!(
                    "\nQ: {}\nA: {}\n",
                    question.question, answer.content
                ));
                answered += 1;
            }
            composed.push('\n');
        }

        composed.push_str(CLOSING_INSTRUCTION);

        let mut improvements: Vec<String> =
            BASE_IMPROVEMENTS.iter().map(|s| s.to_string()).collect();
        let mut applied_techniques = BASE_TECHNIQUES.to_vec();

        if answered > 0 {
            improvements.push(format!("{}개의 추가 정보 제공", answered));
            applied_techniques.push(PromptTechnique::ContextIntegration);
        }

        info!(
            answered,
            skipped = answers.len() - answered,
            "Composed prompt"
        );

        ComposedPrompt {
            id: now.timestamp_millis().to_string(),
            original_prompt: original_prompt.to_string(),
            composed_prompt: composed,
            improvements,
            applied_techniques,
            timestamp: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionCategory;

    fn q(id: &str, text: &str) -> Question {
        Question {
            id: id.to_string(),
            question: text.to_string(),
            examples: vec![],
            category: QuestionCategory::Context,
        }
    }

    #[test]
    fn test_no_answers() {
        let composer = PromptComposer::new();

        let result = composer.compose("블로그 글을 써줘", &[], &[]);
        assert_eq!(
            result.composed_prompt,
            format!("블로그 글을 써줘\n\n{}", CLOSING_INSTRUCTION)
        );
        assert_eq!(result.improvements.len(), 3);
        assert_eq!(result.applied_techniques.len(), 2);
    }

    #[test]
    fn test_transcript_layout() {
        let composer = PromptComposer::new();
        let questions = vec![q("a", "누구를 위한 글인가요?"), q("b", "분량은?")];
        let answers = vec![Answer::new("a", "신입 사원"), Answer::new("b", "1000자")];

        let result = composer.compose("글을 써줘", &questions, &answers);
        let expected = format!(
            "글을 써줘\n\n{}\n\nQ: 누구를 위한 글인가요?\nA: 신입 사원\n\nQ: 분량은?\nA: 1000자\n\n{}",
            TRANSCRIPT_HEADER, CLOSING_INSTRUCTION
        );
        assert_eq!(result.composed_prompt, expected);
        assert_eq!(result.improvements[3], "2개의 추가 정보 제공");
        assert_eq!(
            result.applied_techniques.last(),
            Some(&PromptTechnique::ContextIntegration)
        );
    }

    #[test]
    fn test_id_follows_clock() {
        let composer = PromptComposer::new();
        let now = DateTime::from_timestamp_millis(1_700_000_000_123).unwrap();

        let result = composer.compose_at("프롬프트", &[], &[], now);
        assert_eq!(result.id, "1700000000123");
        assert_eq!(result.timestamp, now);
    }
}
