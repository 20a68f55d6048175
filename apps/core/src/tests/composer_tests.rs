//! Composer Tests
//!
//! Layout of the composed prompt and the improvement/technique bookkeeping.

use crate::analysis::select_questions;
use crate::analysis::Intent;
use crate::composer::{PromptComposer, CLOSING_INSTRUCTION, TRANSCRIPT_HEADER};
use crate::models::{Answer, PromptTechnique, Question, QuestionCategory};
use chrono::DateTime;

fn local_questions() -> Vec<Question> {
    select_questions("좋은 마케팅 전략을 만들어줘", Intent::Planning)
}

#[cfg(test)]
mod layout {
    use super::*;

    #[test]
    fn test_blank_answers_add_only_closing() {
        let composer = PromptComposer::new();
        let questions = local_questions();
        let answers = vec![
            Answer::new("context-1", ""),
            Answer::new("purpose-1", "   \t"),
        ];

        let result = composer.compose("좋은 마케팅 전략을 만들어줘", &questions, &answers);
        assert_eq!(
            result.composed_prompt,
            format!("좋은 마케팅 전략을 만들어줘\n\n{}", CLOSING_INSTRUCTION)
        );
        assert!(!result.composed_prompt.contains(TRANSCRIPT_HEADER));
        assert_eq!(result.improvements.len(), 3);
        assert_eq!(
            result.applied_techniques,
            vec![
                PromptTechnique::SpecificRequirements,
                PromptTechnique::LogicalStructuring
            ]
        );
    }

    #[test]
    fn test_answered_question_block() {
        let composer = PromptComposer::new();
        let questions = local_questions();
        let answers = vec![Answer::new("audience-1", "마케팅 분야 3-5년 경력의 실무진급 직장인")];

        let result = composer.compose("좋은 마케팅 전략을 만들어줘", &questions, &answers);
        assert!(result.composed_prompt.starts_with("좋은 마케팅 전략을 만들어줘"));
        assert!(result.composed_prompt.contains(
            "Q: 결과물의 대상이 되는 사람들은 누구인가요?\nA: 마케팅 분야 3-5년 경력의 실무진급 직장인"
        ));
        assert!(result.composed_prompt.ends_with(CLOSING_INSTRUCTION));
        assert!(result.improvements.contains(&"1개의 추가 정보 제공".to_string()));
        assert!(result
            .applied_techniques
            .contains(&PromptTechnique::ContextIntegration));
    }

    #[test]
    fn test_answers_keep_input_order() {
        let composer = PromptComposer::new();
        let questions = local_questions();
        let answers = vec![
            Answer::new("format-1", "표 형태"),
            Answer::new("context-1", "투자자 발표"),
        ];

        let text = composer
            .compose("전략", &questions, &answers)
            .composed_prompt;
        let format_pos = text.find("A: 표 형태").unwrap();
        let context_pos = text.find("A: 투자자 발표").unwrap();
        assert!(format_pos < context_pos);
    }
}

#[cfg(test)]
mod counting {
    use super::*;

    #[test]
    fn test_unmatched_answers_are_dropped() {
        let composer = PromptComposer::new();
        let questions = local_questions();
        let answers = vec![
            Answer::new("context-1", "사내 교육"),
            Answer::new("no-such-question", "무시되어야 함"),
            Answer::new("purpose-1", ""),
        ];

        let result = composer.compose("교육 자료", &questions, &answers);
        assert!(!result.composed_prompt.contains("무시되어야 함"));
        assert_eq!(result.improvements.len(), 4);
        assert_eq!(result.improvements[3], "1개의 추가 정보 제공");
    }

    #[test]
    fn test_unmatched_answer_keeps_header_without_pairs() {
        let composer = PromptComposer::new();
        let questions = vec![Question {
            id: "a".to_string(),
            question: "목적은?".to_string(),
            examples: vec![],
            category: QuestionCategory::Purpose,
        }];

        let result = composer.compose("글", &questions, &[Answer::new("ghost", "내용")]);
        assert_eq!(
            result.composed_prompt,
            format!("글\n\n{}\n\n{}", TRANSCRIPT_HEADER, CLOSING_INSTRUCTION)
        );
        assert!(!result.composed_prompt.contains("Q: "));
        assert!(!result.composed_prompt.contains("내용"));
        assert_eq!(result.improvements.len(), 3);
        assert_eq!(result.applied_techniques.len(), 2);
    }

    #[test]
    fn test_composed_never_shorter_than_original() {
        let composer = PromptComposer::new();
        let question = Question {
            id: "q1".to_string(),
            question: "목적은?".to_string(),
            examples: vec![],
            category: QuestionCategory::Purpose,
        };

        let long = "아주 긴 프롬프트 ".repeat(50);

        for original in ["", "짧음", long.as_str()] {
            let result = composer.compose(original, &[question.clone()], &[Answer::new("q1", "홍보")]);
            assert!(result.composed_prompt.len() > original.len());
            assert!(result.composed_prompt.starts_with(original));
            assert_eq!(result.original_prompt, original);
        }
    }
}

#[cfg(test)]
mod determinism {
    use super::*;

    #[test]
    fn test_only_clock_fields_differ() {
        let composer = PromptComposer::new();
        let questions = local_questions();
        let answers = vec![Answer::new("context-1", "사내 교육")];
        let t1 = DateTime::from_timestamp_millis(1_000).unwrap();
        let t2 = DateTime::from_timestamp_millis(2_000).unwrap();

        let first = composer.compose_at("교육 자료", &questions, &answers, t1);
        let second = composer.compose_at("교육 자료", &questions, &answers, t2);

        assert_eq!(first.composed_prompt, second.composed_prompt);
        assert_eq!(first.improvements, second.improvements);
        assert_eq!(first.applied_techniques, second.applied_techniques);
        assert_ne!(first.id, second.id);
        assert_ne!(first.timestamp, second.timestamp);
    }
}
