use super::classifier::{IntentClassifier, KeywordClassifier};
use super::instruction::{Instruction, SummaryDisplay};
use super::machine::{self, Transition, Utterance};
use super::risk::TriageResult;
use super::state::ConversationState;
use tracing::info;

/// One conversation: its state plus the classifier used in free chat.
///
/// `submit` takes `&mut self`, so a turn always runs to completion before the next one.
#[derive(Debug, Clone)]
pub struct Conversation<C = KeywordClassifier> {
    state: ConversationState,
    classifier: C,
    latest_result: Option<TriageResult>,
    completed_triages: u32,
}

/// Creates an independent conversation backed by the default keyword classifier.
pub fn create_conversation() -> Conversation {
    Conversation::new()
}

impl Conversation {
    pub fn new() -> Self {
        Self::with_classifier(KeywordClassifier)
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: IntentClassifier> Conversation<C> {
    pub fn with_classifier(classifier: C) -> Self {
        Self {
            state: ConversationState::initial(),
            classifier,
            latest_result: None,
            completed_triages: 0,
        }
    }

    /// Resets to mode selection and returns the opening instructions.
    pub fn start(&mut self) -> Vec<Instruction> {
        self.latest_result = None;
        self.apply(machine::opening())
    }

    pub fn submit(&mut self, raw: &str, is_quick_reply: bool) -> Vec<Instruction> {
        let utterance = Utterance {
            text: raw,
            is_quick_reply,
        };
        let outcome = machine::transition(&self.state, utterance, &self.classifier);
        self.apply(outcome)
    }

    fn apply(&mut self, outcome: Transition) -> Vec<Instruction> {
        let Transition {
            state,
            instructions,
            result,
        } = outcome;

        if let Some(result) = result {
            self.completed_triages += 1;
            info!(
                risk = result.risk.label(),
                category = ?result.category,
                "triage pass completed"
            );
            self.latest_result = Some(result);
        } else if !state.triage_completed() {
            self.latest_result = None;
        }

        self.state = state;
        instructions
    }

    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    /// Verdict of the triage pass currently on display, if any.
    pub fn latest_result(&self) -> Option<&TriageResult> {
        self.latest_result.as_ref()
    }

    pub fn completed_triages(&self) -> u32 {
        self.completed_triages
    }

    pub fn summary(&self) -> SummaryDisplay {
        SummaryDisplay::from_state(&self.state, self.latest_result.as_ref())
    }
}
