//! Intent detection using an ordered table of regex rules.
//!
//! Rules are tested in order and the first match wins, so the table order is
//! the priority order. Prompts matching nothing fall back to `Intent::General`.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// What the user's prompt is trying to accomplish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Writing content (작성, 쓰기, 글)
    #[serde(rename = "콘텐츠 작성")]
    ContentWriting,
    /// Analysis or review (분석, 검토, 평가)
    #[serde(rename = "분석 및 평가")]
    Analysis,
    /// Brainstorming (아이디어, 브레인스토밍, 창의)
    #[serde(rename = "아이디어 생성")]
    IdeaGeneration,
    /// Explaining or teaching (설명, 가르쳐, 알려줘)
    #[serde(rename = "설명 및 교육")]
    Explanation,
    /// Planning (계획, 전략, 방법)
    #[serde(rename = "계획 수립")]
    Planning,
    /// Translation or conversion (번역, 변환)
    #[serde(rename = "변환 작업")]
    Transformation,
    /// Summarizing (요약, 정리)
    #[serde(rename = "요약 및 정리")]
    Summary,
    /// Default when no rule matches
    #[serde(rename = "일반적인 질의응답")]
    General,
}

impl Intent {
    pub const ALL: [Intent; 8] = [
        Intent::ContentWriting,
        Intent::Analysis,
        Intent::IdeaGeneration,
        Intent::Explanation,
        Intent::Planning,
        Intent::Transformation,
        Intent::Summary,
        Intent::General,
    ];

    /// Returns the human-readable label for the intent
    pub fn label(&self) -> &'static str {
        match self {
            Intent::ContentWriting => "콘텐츠 작성",
            Intent::Analysis => "분석 및 평가",
            Intent::IdeaGeneration => "아이디어 생성",
            Intent::Explanation => "설명 및 교육",
            Intent::Planning => "계획 수립",
            Intent::Transformation => "변환 작업",
            Intent::Summary => "요약 및 정리",
            Intent::General => "일반적인 질의응답",
        }
    }

    /// Looks up an intent by its label.
    pub fn from_label(label: &str) -> Option<Intent> {
        Intent::ALL.into_iter().find(|i| i.label() == label.trim())
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One row of the intent table.
#[derive(Debug, Clone)]
pub struct IntentRule {
    pub pattern: Regex,
    pub intent: Intent,
}

impl IntentRule {
    pub fn new(pattern: Regex, intent: Intent) -> Self {
        Self { pattern, intent }
    }
}

// NOTE: expect() is acceptable here, the patterns are literals
static DEFAULT_RULES: LazyLock<Vec<IntentRule>> = LazyLock::new(|| {
    vec![
        IntentRule::new(Regex::new(r"작성|쓰기|글").expect("Invalid regex: writing"), Intent::ContentWriting),
        IntentRule::new(Regex::new(r"분석|검토|평가").expect("Invalid regex: analysis"), Intent::Analysis),
        IntentRule::new(Regex::new(r"아이디어|브레인스토밍|창의").expect("Invalid regex: ideas"), Intent::IdeaGeneration),
        IntentRule::new(Regex::new(r"설명|가르쳐|알려줘").expect("Invalid regex: explanation"), Intent::Explanation),
        IntentRule::new(Regex::new(r"계획|전략|방법").expect("Invalid regex: planning"), Intent::Planning),
        IntentRule::new(Regex::new(r"번역|변환").expect("Invalid regex: transformation"), Intent::Transformation),
        IntentRule::new(Regex::new(r"요약|정리").expect("Invalid regex: summary"), Intent::Summary),
    ]
});

/// First-match-wins intent classifier
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    rules: Vec<IntentRule>,
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    /// Create a classifier with the built-in rule table
    pub fn new() -> Self {
        Self::with_rules(DEFAULT_RULES.clone())
    }

    /// Create a classifier over a custom, ordered rule table
    pub fn with_rules(rules: Vec<IntentRule>) -> Self {
        Self { rules }
    }

    /// Classify the intent of a text
    pub fn classify(&self, text: &str) -> Intent {
        self.rules
            .iter()
            .find(|rule| rule.pattern.is_match(text))
            .map(|rule| rule.intent)
            .unwrap_or(Intent::General)
    }
}
