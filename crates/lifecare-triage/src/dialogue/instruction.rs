use super::risk::TriageResult;
use super::state::ConversationState;
use serde::{Deserialize, Serialize};

/// Placeholder rendered for summary fields that are not yet known.
pub const UNSET: &str = "–";

/// Selectable canonical answer offered next to the free-text box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickReplyOption {
    pub label: String,
    pub value: String,
}

impl QuickReplyOption {
    pub fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    Bot,
}

/// Read-only snapshot for the summary panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryDisplay {
    pub step_label: String,
    pub age_group: String,
    pub complaint: String,
    pub red_flags: String,
    pub severity: String,
    pub risk_label: String,
    pub risk_class: String,
    pub category: String,
    pub next_step: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<TriageResult>,
}

impl SummaryDisplay {
    pub fn from_state(state: &ConversationState, result: Option<&TriageResult>) -> Self {
        let red_flags = match state.red_flags_present {
            Some(true) => "Present",
            Some(false) => "None reported",
            None => UNSET,
        };

        let (risk_label, risk_class, category, next_step) = match result {
            Some(result) => (
                format!("Risk: {}", result.risk.label()),
                result.risk.css_class().to_string(),
                format!("Possible category: {}", result.category_label()),
                result.recommendation.clone(),
            ),
            None => (
                format!("Risk: {UNSET}"),
                "risk-none".to_string(),
                format!("Possible category: {UNSET}"),
                "Complete the questions to see a suggested next step.".to_string(),
            ),
        };

        Self {
            step_label: state.step.label().to_string(),
            age_group: state
                .age_group
                .map(|age| age.label())
                .unwrap_or(UNSET)
                .to_string(),
            complaint: state
                .main_complaint
                .clone()
                .unwrap_or_else(|| UNSET.to_string()),
            red_flags: red_flags.to_string(),
            severity: state
                .severity
                .map(|severity| severity.label())
                .unwrap_or(UNSET)
                .to_string(),
            risk_label,
            risk_class,
            category,
            next_step,
            result: result.cloned(),
        }
    }
}

/// One rendering step for the UI adapter, applied in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Instruction {
    ShowMessage { text: String, speaker: Speaker },
    /// An empty list clears the current replies.
    SetQuickReplies { options: Vec<QuickReplyOption> },
    SetSummaryDisplay { summary: SummaryDisplay },
}

impl Instruction {
    pub fn bot(text: impl Into<String>) -> Self {
        Instruction::ShowMessage {
            text: text.into(),
            speaker: Speaker::Bot,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Instruction::ShowMessage {
            text: text.into(),
            speaker: Speaker::User,
        }
    }

    pub fn replies(options: Vec<QuickReplyOption>) -> Self {
        Instruction::SetQuickReplies { options }
    }

    pub fn clear_replies() -> Self {
        Instruction::SetQuickReplies {
            options: Vec::new(),
        }
    }

    pub fn summary(state: &ConversationState, result: Option<&TriageResult>) -> Self {
        Instruction::SetSummaryDisplay {
            summary: SummaryDisplay::from_state(state, result),
        }
    }
}

pub fn mode_replies() -> Vec<QuickReplyOption> {
    vec![
        QuickReplyOption::new("Symptom triage", "mode_triage"),
        QuickReplyOption::new("Ask a question", "mode_faq"),
    ]
}

pub fn age_replies() -> Vec<QuickReplyOption> {
    vec![
        QuickReplyOption::new("Child", "child"),
        QuickReplyOption::new("Adult", "adult"),
        QuickReplyOption::new("Older adult", "older adult"),
    ]
}

pub fn yes_no_replies() -> Vec<QuickReplyOption> {
    vec![
        QuickReplyOption::new("Yes", "yes"),
        QuickReplyOption::new("No", "no"),
    ]
}

pub fn severity_replies() -> Vec<QuickReplyOption> {
    vec![
        QuickReplyOption::new("Low", "low"),
        QuickReplyOption::new("Moderate", "moderate"),
        QuickReplyOption::new("High", "high"),
    ]
}

pub fn information_replies() -> Vec<QuickReplyOption> {
    vec![
        QuickReplyOption::new("What is CDSS?", "what is clinical decision support"),
        QuickReplyOption::new("AI in diagnosis", "how does ai help diagnosis"),
        QuickReplyOption::new("Departments list", "which departments"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogue::state::{AgeGroup, Step};
    use serde_json::json;

    #[test]
    fn empty_state_renders_placeholders() {
        let summary = SummaryDisplay::from_state(&ConversationState::initial(), None);
        assert_eq!(summary.step_label, "Choose mode");
        assert_eq!(summary.age_group, UNSET);
        assert_eq!(summary.red_flags, UNSET);
        assert_eq!(summary.risk_label, "Risk: –");
        assert_eq!(summary.risk_class, "risk-none");
    }

    #[test]
    fn summary_uses_display_labels() {
        let mut state = ConversationState::triage_entry();
        state.step = Step::RedFlag;
        state.age_group = Some(AgeGroup::OlderAdult);
        state.main_complaint = Some("fever".to_string());

        let summary = SummaryDisplay::from_state(&state, None);
        assert_eq!(summary.age_group, "Older adult");
        assert_eq!(summary.complaint, "fever");
        assert_eq!(summary.step_label, "Step 3 of 4");
    }

    #[test]
    fn instructions_serialize_with_type_tag() {
        let value = serde_json::to_value(Instruction::bot("hello")).expect("serializes");
        assert_eq!(
            value,
            json!({ "type": "show_message", "text": "hello", "speaker": "bot" })
        );
    }
}
