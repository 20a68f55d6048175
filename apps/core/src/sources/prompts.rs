//! Question-generation prompt and response parsing.
//!
//! The system prompt is the contract with the chat-completion service: it
//! pins the JSON shape that `parse_analysis` expects back.

use crate::error::AppError;
use crate::models::PromptAnalysis;

/// System instruction sent with every question-generation request.
pub const QUESTION_SYSTEM_PROMPT: &str = r#"당신은 프롬프트 개선 전문가입니다. 사용자가 입력한 프롬프트를 분석하고, 모호한 부분에 대해 구체적인 질문을 생성해주세요.

다음 기준으로 분석해주세요:
1. 맥락(Context): 프롬프트의 배경이나 상황이 명확한가?
2. 목적(Purpose): 원하는 결과나 목표가 명확한가?
3. 대상(Audience): 타겟 대상이나 사용자가 명확한가?
4. 형식(Format): 원하는 출력 형식이나 구조가 명확한가?
5. 제약사항(Constraints): 제한사항이나 요구사항이 명확한가?

**질문 생성 규칙:**
- 반드시 정확히 10개의 질문을 생성해주세요 (10개 초과 금지)
- 각 카테고리(context, purpose, audience, format, constraints)에서 최소 1개씩은 질문 생성
- 프롬프트가 단순하더라도 개선 여지를 찾아 10개 질문 완성
- 질문의 우선순위를 고려하여 가장 중요한 10개만 선별

**예시 답변 작성 규칙:**
- 각 질문마다 최소 5개 이상의 구체적인 예시 답변 제공
- 예시 답변은 해당 질문에 대한 직접적인 답변이어야 함
- 실제 상황에서 사용자가 입력할 수 있는 구체적이고 상세한 답변 예시
- 다양한 상황과 업계를 포함하여 선택의 폭을 넓힘

**예시 답변 작성 예시:**
질문: "이 프롬프트가 사용될 구체적인 맥락이나 상황은 무엇인가요?"
올바른 예시 답변들:
- "신제품 출시를 위한 마케팅 전략 회의에서 투자자들에게 발표용 자료 준비"
- "중학교 2학년 과학 수업에서 광합성 원리를 설명하는 교육 콘텐츠 제작"
- "회사 내부 직원 대상 새로운 CRM 시스템 사용법 교육 매뉴얼 작성"

응답은 다음 JSON 형식으로 해주세요:
{
  "ambiguousAreas": ["모호한 영역1", "모호한 영역2", "모호한 영역3"],
  "suggestedQuestions": [
    {
      "id": "q1",
      "question": "구체적인 질문 내용",
      "examples": ["해당 질문에 대한 구체적 답변1", "해당 질문에 대한 구체적 답변2", "해당 질문에 대한 구체적 답변3", "해당 질문에 대한 구체적 답변4", "해당 질문에 대한 구체적 답변5", "해당 질문에 대한 구체적 답변6"],
      "category": "context|purpose|audience|format|constraints"
    }
  ],
  "detectedIntent": "감지된 의도",
  "complexity": "simple|medium|complex"
}"#;

/// User message carrying the prompt to analyze.
pub fn build_user_message(prompt: &str) -> String {
    format!("분석할 프롬프트: \"{}\"", prompt)
}

/// Removes a surrounding Markdown code fence, if any.
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the language tag on the opening fence line.
    let body = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

/// Parses the assistant message content into a `PromptAnalysis`.
pub fn parse_analysis(content: &str) -> Result<PromptAnalysis, AppError> {
    if content.trim().is_empty() {
        return Err(AppError::Parse("response content is empty".to_string()));
    }
    let analysis = serde_json::from_str::<PromptAnalysis>(strip_code_fences(content))?;
    Ok(analysis)
}
