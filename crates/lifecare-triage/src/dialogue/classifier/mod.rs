//! Free-text routing for information mode.
//!
//! Utterances are matched against an ordered keyword table. The first rule whose predicate
//! fires decides the topic, so earlier rules shadow later ones on overlapping phrasing
//! ("what departments handle chest pain" is answered as a chest pain question).

mod rules;

use rules::{FALLBACK_RESPONSES, RULES};

/// Topic families recognised in information mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Greeting,
    DecisionSupport,
    AiExplainer,
    ChestPain,
    Departments,
    Appointments,
    VisitingHours,
    Location,
    RestartTriage,
    Fallback,
}

/// Outcome of classifying one utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub topic: Topic,
    pub responses: Vec<String>,
}

impl Classification {
    pub fn restarts_triage(&self) -> bool {
        self.topic == Topic::RestartTriage
    }
}

/// Strategy used by the dialogue machine while in free chat.
pub trait IntentClassifier: Send + Sync {
    /// `text` is already trimmed and lowercased.
    fn classify(&self, text: &str) -> Classification;
}

/// Default classifier backed by the built-in keyword rule table.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    /// Topics in evaluation order, fallback excluded.
    pub fn rule_order() -> Vec<Topic> {
        RULES.iter().map(|rule| rule.topic).collect()
    }
}

impl IntentClassifier for KeywordClassifier {
    fn classify(&self, text: &str) -> Classification {
        let (topic, responses) = RULES
            .iter()
            .find(|rule| rule.matcher.matches(text))
            .map(|rule| (rule.topic, rule.responses))
            .unwrap_or((Topic::Fallback, FALLBACK_RESPONSES));

        Classification {
            topic,
            responses: responses.iter().map(|line| line.to_string()).collect(),
        }
    }
}
