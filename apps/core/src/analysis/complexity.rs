//! Prompt Complexity Tiering.
//!
//! Combines three independent signals into a coarse tier:
//! token count, multi-request connectives and requirement-specifying words.

use serde::{Deserialize, Serialize};

use crate::models::Complexity;

/// Connectives that indicate several requests in one prompt
const MULTI_REQUEST_MARKERS: &[&str] = &["그리고", "또한", ","];

/// Words that indicate the prompt already specifies requirements
const REQUIREMENT_MARKERS: &[&str] = &["형식", "예시", "조건"];

/// Token-count thresholds for the complexity tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplexityThresholds {
    /// Above this many tokens a prompt is complex
    pub complex_tokens: usize,
    /// Above this many tokens a prompt is at least medium
    pub medium_tokens: usize,
}

impl ComplexityThresholds {
    pub const DEFAULT: ComplexityThresholds = ComplexityThresholds {
        complex_tokens: 50,
        medium_tokens: 20,
    };
}

impl Default for ComplexityThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The raw signals behind a complexity tier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplexitySignals {
    /// Whitespace-separated token count
    pub token_count: usize,
    pub has_multiple_requests: bool,
    pub has_specific_requirements: bool,
    pub tier: Complexity,
}

/// Complexity scorer for prompt text
#[derive(Debug, Clone, Default)]
pub struct ComplexityScorer {
    thresholds: ComplexityThresholds,
}

impl ComplexityScorer {
    pub fn new() -> Self {
        Self::with_thresholds(ComplexityThresholds::DEFAULT)
    }

    pub fn with_thresholds(thresholds: ComplexityThresholds) -> Self {
        Self { thresholds }
    }

    /// Analyze text and return every signal along with the tier
    pub fn analyze(&self, text: &str) -> ComplexitySignals {
        let token_count = text.split_whitespace().count();
        let has_multiple_requests = MULTI_REQUEST_MARKERS.iter().any(|m| text.contains(m));
        let has_specific_requirements = REQUIREMENT_MARKERS.iter().any(|m| text.contains(m));

        let tier = if token_count > self.thresholds.complex_tokens
            || (has_multiple_requests && has_specific_requirements)
        {
            Complexity::Complex
        } else if token_count > self.thresholds.medium_tokens
            || has_multiple_requests
            || has_specific_requirements
        {
            Complexity::Medium
        } else {
            Complexity::Simple
        };

        ComplexitySignals {
            token_count,
            has_multiple_requests,
            has_specific_requirements,
            tier,
        }
    }

    /// Get just the tier
    pub fn score(&self, text: &str) -> Complexity {
        self.analyze(text).tier
    }
}
