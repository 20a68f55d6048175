//! Ambiguity detection.
//!
//! Unlike intent detection every matching rule contributes a label. Two
//! absence checks then flag prompts that never mention a context/purpose or
//! an audience.

use regex::Regex;
use std::sync::LazyLock;

pub const MISSING_CONTEXT: &str = "사용 맥락이나 목적 부족";
pub const MISSING_AUDIENCE: &str = "타겟 대상 불명확";

const CONTEXT_MARKERS: &[&str] = &["위해", "목적", "상황"];
const AUDIENCE_MARKERS: &[&str] = &["고객", "사용자", "대상"];

/// A pattern and the ambiguity it reveals when it matches
#[derive(Debug, Clone)]
pub struct AmbiguityRule {
    pub pattern: Regex,
    pub area: &'static str,
}

impl AmbiguityRule {
    pub fn new(pattern: Regex, area: &'static str) -> Self {
        Self { pattern, area }
    }
}

static DEFAULT_RULES: LazyLock<Vec<AmbiguityRule>> = LazyLock::new(|| {
    vec![
        AmbiguityRule::new(
            Regex::new(r"좋은|나은|최적의|효과적인").expect("Invalid regex: quality words"),
            "구체적인 품질 기준 부족",
        ),
        AmbiguityRule::new(
            Regex::new(r"적절한|알맞은|괜찮은").expect("Invalid regex: fitness words"),
            "명확한 기준 부족",
        ),
        AmbiguityRule::new(
            Regex::new(r"간단하게|자세히|요약해서").expect("Invalid regex: length words"),
            "구체적인 길이나 상세도 부족",
        ),
        AmbiguityRule::new(
            Regex::new(r"도와줘|해줘").expect("Invalid regex: vague requests"),
            "구체적인 요청 내용 부족",
        ),
        AmbiguityRule::new(
            Regex::new(r"분석|검토|평가").expect("Invalid regex: analysis words"),
            "분석 기준이나 관점 부족",
        ),
        AmbiguityRule::new(
            Regex::new(r"만들어|생성해|작성해").expect("Invalid regex: creation verbs"),
            "구체적인 요구사항이나 형식 부족",
        ),
    ]
});

/// Collects every ambiguity area a prompt exhibits
#[derive(Debug, Clone)]
pub struct AmbiguityDetector {
    rules: Vec<AmbiguityRule>,
}

impl Default for AmbiguityDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl AmbiguityDetector {
    pub fn new() -> Self {
        Self::with_rules(DEFAULT_RULES.clone())
    }

    pub fn with_rules(rules: Vec<AmbiguityRule>) -> Self {
        Self { rules }
    }

    /// Returns the de-duplicated ambiguity labels in first-occurrence order
    pub fn detect(&self, text: &str) -> Vec<String> {
        let mut areas: Vec<String> = Vec::new();
        let mut push = |area: &str| {
            if !areas.iter().any(|a| a == area) {
                areas.push(area.to_string());
            }
        };

        for rule in &self.rules {
            if rule.pattern.is_match(text) {
                push(rule.area);
            }
        }

        if !CONTEXT_MARKERS.iter().any(|m| text.contains(m)) {
            push(MISSING_CONTEXT);
        }

        if !AUDIENCE_MARKERS.iter().any(|m| text.contains(m)) {
            push(MISSING_AUDIENCE);
        }

        areas
    }
}
