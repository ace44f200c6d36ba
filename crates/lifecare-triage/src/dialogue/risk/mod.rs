mod category;
mod policy;

pub use category::{categorize, follow_up_question, ComplaintCategory};
pub use policy::RiskLevel;

use super::state::{ConversationState, Severity};
use policy::{compose_recommendation, decide_risk, severity_reason, RED_FLAG_REASON};
use serde::{Deserialize, Serialize};

/// Final answers a triage pass feeds into the scorer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriageAnswers<'a> {
    pub complaint: &'a str,
    pub red_flags_present: bool,
    pub severity: Severity,
}

impl<'a> TriageAnswers<'a> {
    /// Borrows the scorer inputs from a state that has all of them.
    pub fn from_state(state: &'a ConversationState) -> Option<Self> {
        Some(Self {
            complaint: state.main_complaint.as_deref()?,
            red_flags_present: state.red_flags_present?,
            severity: state.severity?,
        })
    }
}

/// Verdict derived once, when severity is captured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageResult {
    pub risk: RiskLevel,
    pub category: ComplaintCategory,
    pub reasons: Vec<String>,
    pub recommendation: String,
}

impl TriageResult {
    pub fn category_label(&self) -> &'static str {
        self.category.label()
    }
}

/// Scores a completed triage. Reasons always render as complaint, red flag, severity.
pub fn score(answers: &TriageAnswers<'_>) -> TriageResult {
    let category = categorize(answers.complaint);

    let mut reasons = Vec::new();
    if let Some(reason) = category.reason() {
        reasons.push(reason.to_string());
    }
    if answers.red_flags_present {
        reasons.push(RED_FLAG_REASON.to_string());
    }
    if let Some(reason) = severity_reason(answers.severity) {
        reasons.push(reason.to_string());
    }

    let risk = decide_risk(answers.red_flags_present, answers.severity);
    let recommendation = compose_recommendation(risk, &reasons);

    TriageResult {
        risk,
        category,
        reasons,
        recommendation,
    }
}
