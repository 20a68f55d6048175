//! Wizard state machine.
//!
//! `transition` is a pure function from (state, event) to the next state.
//! `WizardSession` owns the current state and performs the two side effects
//! the wizard needs: asking a `QuestionSource` and running the composer.

use serde::Serialize;
use tracing::{error, info, instrument, warn};

use crate::analysis::validate_answers;
use crate::composer::PromptComposer;
use crate::error::AppError;
use crate::models::{Answer, ComposedPrompt, Question};
use crate::sources::QuestionSource;

/// Message shown when no question source could analyze the prompt
pub const ANALYSIS_FAILED_MESSAGE: &str = "프롬프트 분석에 실패했습니다. 다시 시도해주세요.";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum WizardState {
    /// Waiting for the user's prompt
    Input,
    /// Questions are being generated
    AwaitingQuestions { prompt: String },
    /// Questions are shown and answers are being collected
    Questions {
        prompt: String,
        questions: Vec<Question>,
    },
    /// The composed prompt is being built
    AwaitingComposition {
        prompt: String,
        questions: Vec<Question>,
        answers: Vec<Answer>,
    },
    /// Final result
    Result { composed: ComposedPrompt },
    /// Unrecoverable analysis failure; only `StartOver` leaves this state
    Error { message: String },
}

impl WizardState {
    pub fn name(&self) -> &'static str {
        match self {
            WizardState::Input => "input",
            WizardState::AwaitingQuestions { .. } => "awaiting_questions",
            WizardState::Questions { .. } => "questions",
            WizardState::AwaitingComposition { .. } => "awaiting_composition",
            WizardState::Result { .. } => "result",
            WizardState::Error { .. } => "error",
        }
    }

    /// True while a side effect is in flight
    pub fn is_processing(&self) -> bool {
        matches!(
            self,
            WizardState::AwaitingQuestions { .. } | WizardState::AwaitingComposition { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WizardEvent {
    SubmitPrompt(String),
    QuestionsReady(Vec<Question>),
    AnalysisFailed(String),
    SubmitAnswers(Vec<Answer>),
    Composed(ComposedPrompt),
    /// Questions screen back to an empty input screen; the prompt is entered again
    Back,
    /// Reset to a fresh wizard from any state
    StartOver,
}

impl WizardEvent {
    pub fn name(&self) -> &'static str {
        match self {
            WizardEvent::SubmitPrompt(_) => "submit_prompt",
            WizardEvent::QuestionsReady(_) => "questions_ready",
            WizardEvent::AnalysisFailed(_) => "analysis_failed",
            WizardEvent::SubmitAnswers(_) => "submit_answers",
            WizardEvent::Composed(_) => "composed",
            WizardEvent::Back => "back",
            WizardEvent::StartOver => "start_over",
        }
    }
}

/// Computes the next state.
///
/// Prompts are trimmed and must be non-blank. Answers are trimmed, blank ones
/// are dropped, and at least one must remain. Any event the current state
/// does not accept yields `AppError::InvalidTransition`.
pub fn transition(state: &WizardState, event: WizardEvent) -> Result<WizardState, AppError> {
    let invalid = |event: &WizardEvent| AppError::InvalidTransition {
        state: state.name(),
        event: event.name(),
    };

    match (state, event) {
        (_, WizardEvent::StartOver) => Ok(WizardState::Input),

        (WizardState::Input, WizardEvent::SubmitPrompt(prompt)) => {
            let prompt = prompt.trim();
            if prompt.is_empty() {
                return Err(AppError::Validation("prompt is empty".to_string()));
            }
            Ok(WizardState::AwaitingQuestions {
                prompt: prompt.to_string(),
            })
        }

        (WizardState::AwaitingQuestions { prompt }, WizardEvent::QuestionsReady(questions)) => {
            Ok(WizardState::Questions {
                prompt: prompt.clone(),
                questions,
            })
        }

        (WizardState::AwaitingQuestions { .. }, WizardEvent::AnalysisFailed(message)) => {
            Ok(WizardState::Error { message })
        }

        (WizardState::Questions { prompt, questions }, WizardEvent::SubmitAnswers(answers)) => {
            let answers: Vec<Answer> = answers
                .into_iter()
                .filter(|a| !a.is_blank())
                .map(|a| Answer::new(a.question_id, a.content.trim()))
                .collect();
            if !validate_answers(&answers) {
                return Err(AppError::Validation(
                    "at least one question must be answered".to_string(),
                ));
            }
            Ok(WizardState::AwaitingComposition {
                prompt: prompt.clone(),
                questions: questions.clone(),
                answers,
            })
        }

        (WizardState::Questions { .. }, WizardEvent::Back) => Ok(WizardState::Input),

        (WizardState::AwaitingComposition { .. }, WizardEvent::Composed(composed)) => {
            Ok(WizardState::Result { composed })
        }

        (_, event) => Err(invalid(&event)),
    }
}

/// Drives one wizard through its states.
pub struct WizardSession<Q: QuestionSource> {
    state: WizardState,
    source: Q,
    composer: PromptComposer,
}

impl<Q: QuestionSource> WizardSession<Q> {
    pub fn new(source: Q) -> Self {
        Self {
            state: WizardState::Input,
            source,
            composer: PromptComposer::new(),
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    fn apply(&mut self, event: WizardEvent) -> Result<&WizardState, AppError> {
        let from = self.state.name();
        let event_name = event.name();
        match transition(&self.state, event) {
            Ok(next) => {
                info!(from, to = next.name(), event = event_name, "Wizard transition");
                self.state = next;
                Ok(&self.state)
            }
            Err(e) => {
                warn!(from, event = event_name, "Wizard rejected event: {}", e);
                Err(e)
            }
        }
    }

    /// Submits the prompt and waits for questions.
    ///
    /// A source failure is not returned as an error: the wizard moves to
    /// `WizardState::Error` instead.
    #[instrument(skip(self, prompt))]
    pub async fn submit_prompt(&mut self, prompt: &str) -> Result<&WizardState, AppError> {
        self.apply(WizardEvent::SubmitPrompt(prompt.to_string()))?;

        let prompt = match &self.state {
            WizardState::AwaitingQuestions { prompt } => prompt.clone(),
            other => {
                return Err(AppError::Internal(format!(
                    "unexpected state after submit: {}",
                    other.name()
                )))
            }
        };

        let event = match self.source.request_questions(&prompt).await {
            Ok(questions) => WizardEvent::QuestionsReady(questions),
            Err(e) => {
                error!("Prompt analysis failed: {}", e);
                WizardEvent::AnalysisFailed(ANALYSIS_FAILED_MESSAGE.to_string())
            }
        };
        self.apply(event)
    }

    /// Submits answers and composes the final prompt.
    #[instrument(skip(self, answers), fields(count = answers.len()))]
    pub fn submit_answers(&mut self, answers: Vec<Answer>) -> Result<&WizardState, AppError> {
        self.apply(WizardEvent::SubmitAnswers(answers))?;

        let composed = match &self.state {
            WizardState::AwaitingComposition {
                prompt,
                questions,
                answers,
            } => self.composer.compose(prompt, questions, answers),
            other => {
                return Err(AppError::Internal(format!(
                    "unexpected state after answers: {}",
                    other.name()
                )))
            }
        };
        self.apply(WizardEvent::Composed(composed))
    }

    pub fn back(&mut self) -> Result<&WizardState, AppError> {
        self.apply(WizardEvent::Back)
    }

    pub fn start_over(&mut self) -> &WizardState {
        self.state = WizardState::Input;
        info!("Wizard reset");
        &self.state
    }
}
