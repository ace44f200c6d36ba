//! The dialogue engine: conversation state, free-text intent routing, risk scoring and the
//! turn-by-turn state machine tying them together.

pub mod classifier;
mod conversation;
pub mod instruction;
pub mod machine;
pub mod risk;
pub mod state;

#[cfg(test)]
mod tests;

pub use classifier::{Classification, IntentClassifier, KeywordClassifier, Topic};
pub use conversation::{create_conversation, Conversation};
pub use instruction::{Instruction, QuickReplyOption, Speaker, SummaryDisplay};
pub use machine::{transition, Transition, Utterance};
pub use risk::{ComplaintCategory, RiskLevel, TriageAnswers, TriageResult};
pub use state::{AgeGroup, ConversationState, Mode, Severity, Step};
