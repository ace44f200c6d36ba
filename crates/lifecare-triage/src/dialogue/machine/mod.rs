//! Pure turn handling for a single conversation.
//!
//! [`transition`] maps the current state and one utterance to the next state plus the
//! ordered instructions a UI adapter should render. It performs no I/O.

mod prompts;

use super::classifier::IntentClassifier;
use super::instruction::{
    age_replies, information_replies, mode_replies, severity_replies, yes_no_replies, Instruction,
    QuickReplyOption,
};
use super::risk::{self, categorize, follow_up_question, TriageAnswers, TriageResult};
use super::state::{parse_yes_no, AgeGroup, ConversationState, Mode, Severity, Step};
use tracing::debug;

/// Raw text delivered by the UI adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utterance<'a> {
    pub text: &'a str,
    /// Quick-reply selections are not echoed back as user messages.
    pub is_quick_reply: bool,
}

impl<'a> Utterance<'a> {
    pub fn typed(text: &'a str) -> Self {
        Self {
            text,
            is_quick_reply: false,
        }
    }

    pub fn quick_reply(text: &'a str) -> Self {
        Self {
            text,
            is_quick_reply: true,
        }
    }
}

/// Result of handling one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: ConversationState,
    pub instructions: Vec<Instruction>,
    /// Present only on the turn that completes a triage pass.
    pub result: Option<TriageResult>,
}

impl Transition {
    fn new(state: ConversationState) -> Self {
        Self {
            state,
            instructions: Vec::new(),
            result: None,
        }
    }

    fn with(mut self, instruction: Instruction) -> Self {
        self.instructions.push(instruction);
        self
    }

    fn with_messages(mut self, lines: &[&str]) -> Self {
        self.instructions
            .extend(lines.iter().map(|line| Instruction::bot(*line)));
        self
    }

    fn with_summary(self) -> Self {
        let summary = Instruction::summary(&self.state, self.result.as_ref());
        self.with(summary)
    }
}

/// Opening turn: fresh state, welcome copy, mode choices and an empty summary panel.
pub fn opening() -> Transition {
    Transition::new(ConversationState::initial())
        .with_messages(prompts::WELCOME)
        .with(Instruction::replies(mode_replies()))
        .with_summary()
}

pub fn transition(
    state: &ConversationState,
    utterance: Utterance<'_>,
    classifier: &dyn IntentClassifier,
) -> Transition {
    let text = utterance.text.trim();
    if text.is_empty() {
        return Transition::new(state.clone());
    }

    let lower = text.to_lowercase();
    let mut outcome = match state.step {
        Step::ModeSelect => select_mode(state, &lower),
        Step::Age => capture_age(state, &lower),
        Step::Complaint => capture_complaint(state, &lower),
        Step::RedFlag => capture_red_flag(state, &lower),
        Step::Severity => capture_severity(state, &lower),
        Step::FreeChat => free_chat(state, &lower, classifier),
    };

    if !utterance.is_quick_reply {
        outcome.instructions.insert(0, Instruction::user(text));
    }

    debug!(
        from = ?state.step,
        to = ?outcome.state.step,
        instructions = outcome.instructions.len(),
        "dialogue turn handled"
    );

    outcome
}

/// Corrective turn for an unparseable choice: state untouched, same choices offered again.
fn reprompt(
    state: &ConversationState,
    message: &str,
    options: Vec<QuickReplyOption>,
) -> Transition {
    Transition::new(state.clone())
        .with(Instruction::bot(message))
        .with(Instruction::replies(options))
}

fn select_mode(state: &ConversationState, lower: &str) -> Transition {
    let chosen = match lower {
        "mode_triage" => Some(Mode::Triage),
        "mode_faq" => Some(Mode::Information),
        _ if lower.contains("triage") || lower.contains("symptom") => Some(Mode::Triage),
        _ if ["question", "info"].iter().any(|cue| lower.contains(cue)) => {
            Some(Mode::Information)
        }
        _ => None,
    };

    match chosen {
        Some(Mode::Triage) => enter_triage(),
        Some(Mode::Information) => enter_information(),
        _ => reprompt(state, prompts::MODE_RETRY, mode_replies()),
    }
}

/// Starts a fresh triage pass, discarding any answers from a previous one.
fn enter_triage() -> Transition {
    Transition::new(ConversationState::triage_entry())
        .with_messages(prompts::TRIAGE_INTRO)
        .with(Instruction::replies(age_replies()))
        .with_summary()
}

fn enter_information() -> Transition {
    Transition::new(ConversationState::information_entry())
        .with_messages(prompts::INFORMATION_INTRO)
        .with(Instruction::replies(information_replies()))
        .with_summary()
}

fn capture_age(state: &ConversationState, lower: &str) -> Transition {
    let Some(age_group) = AgeGroup::parse(lower) else {
        return reprompt(state, prompts::AGE_RETRY, age_replies());
    };

    let next = ConversationState {
        step: Step::Complaint,
        age_group: Some(age_group),
        ..state.clone()
    };

    Transition::new(next)
        .with_messages(prompts::COMPLAINT_PROMPT)
        .with(Instruction::clear_replies())
        .with_summary()
}

fn capture_complaint(state: &ConversationState, lower: &str) -> Transition {
    let question = follow_up_question(categorize(lower));

    let next = ConversationState {
        step: Step::RedFlag,
        main_complaint: Some(lower.to_string()),
        ..state.clone()
    };

    Transition::new(next)
        .with(Instruction::bot(question))
        .with(Instruction::replies(yes_no_replies()))
        .with_summary()
}

fn capture_red_flag(state: &ConversationState, lower: &str) -> Transition {
    let Some(present) = parse_yes_no(lower) else {
        return reprompt(state, prompts::RED_FLAG_RETRY, yes_no_replies());
    };

    let next = ConversationState {
        step: Step::Severity,
        red_flags_present: Some(present),
        ..state.clone()
    };

    Transition::new(next)
        .with(Instruction::bot(prompts::SEVERITY_PROMPT))
        .with(Instruction::replies(severity_replies()))
        .with_summary()
}

fn capture_severity(state: &ConversationState, lower: &str) -> Transition {
    let Some(severity) = Severity::parse(lower) else {
        return reprompt(state, prompts::SEVERITY_RETRY, severity_replies());
    };

    let scored = ConversationState {
        severity: Some(severity),
        ..state.clone()
    };
    let result = TriageAnswers::from_state(&scored).map(|answers| risk::score(&answers));

    let next = ConversationState {
        mode: Mode::Information,
        step: Step::FreeChat,
        ..scored
    };

    let mut outcome = Transition::new(next).with(Instruction::clear_replies());
    outcome.result = result;
    outcome.with_summary().with_messages(prompts::TRIAGE_CLOSING)
}

fn free_chat(
    state: &ConversationState,
    lower: &str,
    classifier: &dyn IntentClassifier,
) -> Transition {
    let classification = classifier.classify(lower);
    if classification.restarts_triage() {
        return enter_triage();
    }

    let mut outcome = Transition::new(state.clone());
    outcome
        .instructions
        .extend(classification.responses.into_iter().map(Instruction::bot));
    outcome
}
