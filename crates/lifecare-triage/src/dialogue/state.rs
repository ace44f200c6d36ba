use serde::{Deserialize, Serialize};

/// Which sub-flow of the assistant is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    SelectingMode,
    Triage,
    Information,
}

/// The question currently pending an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    ModeSelect,
    Age,
    Complaint,
    RedFlag,
    Severity,
    FreeChat,
}

impl Step {
    /// Progress label shown in the summary panel.
    pub fn label(self) -> &'static str {
        match self {
            Step::ModeSelect => "Choose mode",
            Step::Age => "Step 1 of 4",
            Step::Complaint => "Step 2 of 4",
            Step::RedFlag => "Step 3 of 4",
            Step::Severity => "Step 4 of 4",
            Step::FreeChat => "Info mode",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    Child,
    Adult,
    OlderAdult,
}

impl AgeGroup {
    /// Parses a lowercased answer; `older` and `older adult` both map to [`AgeGroup::OlderAdult`].
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "child" => Some(Self::Child),
            "adult" => Some(Self::Adult),
            "older" | "older adult" => Some(Self::OlderAdult),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AgeGroup::Child => "Child",
            AgeGroup::Adult => "Adult",
            AgeGroup::OlderAdult => "Older adult",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Moderate,
    High,
}

impl Severity {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "low" => Some(Self::Low),
            "moderate" => Some(Self::Moderate),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Moderate => "Moderate",
            Severity::High => "High",
        }
    }
}

/// Parses a yes/no answer (`yes`, `y`, `no`, `n`).
pub fn parse_yes_no(value: &str) -> Option<bool> {
    match value {
        "yes" | "y" => Some(true),
        "no" | "n" => Some(false),
        _ => None,
    }
}

/// Everything one conversation has collected so far.
///
/// Fields are filled strictly in order: age, complaint, red flags, severity. The
/// [`Step`] decides which of them must be present; see [`ConversationState::is_consistent`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationState {
    pub mode: Mode,
    pub step: Step,
    pub age_group: Option<AgeGroup>,
    pub main_complaint: Option<String>,
    pub red_flags_present: Option<bool>,
    pub severity: Option<Severity>,
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::initial()
    }
}

impl ConversationState {
    pub fn initial() -> Self {
        Self {
            mode: Mode::SelectingMode,
            step: Step::ModeSelect,
            age_group: None,
            main_complaint: None,
            red_flags_present: None,
            severity: None,
        }
    }

    /// Fresh triage pass: all answers cleared, waiting on the age question.
    pub fn triage_entry() -> Self {
        Self {
            mode: Mode::Triage,
            step: Step::Age,
            ..Self::initial()
        }
    }

    pub fn information_entry() -> Self {
        Self {
            mode: Mode::Information,
            step: Step::FreeChat,
            ..Self::initial()
        }
    }

    /// Number of triage answers collected, counting only the ordered prefix.
    fn answered(&self) -> usize {
        let filled = [
            self.age_group.is_some(),
            self.main_complaint.is_some(),
            self.red_flags_present.is_some(),
            self.severity.is_some(),
        ];
        filled.iter().take_while(|present| **present).count()
    }

    fn total_filled(&self) -> usize {
        [
            self.age_group.is_some(),
            self.main_complaint.is_some(),
            self.red_flags_present.is_some(),
            self.severity.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }

    /// True when `mode`, `step` and the populated fields agree with each other.
    pub fn is_consistent(&self) -> bool {
        let answered = self.answered();
        if answered != self.total_filled() {
            return false;
        }

        match (self.mode, self.step) {
            (Mode::SelectingMode, Step::ModeSelect) => answered == 0,
            (Mode::Triage, Step::Age) => answered == 0,
            (Mode::Triage, Step::Complaint) => answered == 1,
            (Mode::Triage, Step::RedFlag) => answered == 2,
            (Mode::Triage, Step::Severity) => answered == 3,
            (Mode::Information, Step::FreeChat) => answered == 0 || answered == 4,
            _ => false,
        }
    }

    /// True once a triage pass has finished and its answers are frozen for display.
    pub fn triage_completed(&self) -> bool {
        self.step == Step::FreeChat && self.answered() == 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn older_adult_aliases_parse_to_the_same_group() {
        assert_eq!(AgeGroup::parse("older"), Some(AgeGroup::OlderAdult));
        assert_eq!(AgeGroup::parse("older adult"), Some(AgeGroup::OlderAdult));
        assert_eq!(AgeGroup::OlderAdult.label(), "Older adult");
        assert_eq!(AgeGroup::parse("teen"), None);
    }

    #[test]
    fn yes_no_accepts_short_forms() {
        assert_eq!(parse_yes_no("y"), Some(true));
        assert_eq!(parse_yes_no("n"), Some(false));
        assert_eq!(parse_yes_no("maybe"), None);
    }

    #[test]
    fn consistency_rejects_out_of_order_fields() {
        let mut state = ConversationState::triage_entry();
        state.step = Step::Complaint;
        state.main_complaint = Some("fever".to_string());
        assert!(!state.is_consistent());

        state.main_complaint = None;
        state.age_group = Some(AgeGroup::Child);
        assert!(state.is_consistent());
    }

    #[test]
    fn entry_states_are_consistent() {
        assert!(ConversationState::initial().is_consistent());
        assert!(ConversationState::triage_entry().is_consistent());
        assert!(ConversationState::information_entry().is_consistent());
        assert!(!ConversationState::information_entry().triage_completed());
    }
}
