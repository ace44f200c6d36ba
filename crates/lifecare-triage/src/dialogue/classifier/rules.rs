use super::Topic;

/// Keyword predicate evaluated against a lowercased utterance.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Matcher {
    /// Whole word, so `ai` does not fire inside `pain`.
    Word(&'static str),
    /// Plain substring.
    Phrase(&'static str),
    All(&'static [Matcher]),
    Any(&'static [Matcher]),
}

impl Matcher {
    pub(crate) fn matches(&self, text: &str) -> bool {
        match self {
            Matcher::Word(word) => words(text).any(|token| token == *word),
            Matcher::Phrase(phrase) => text.contains(phrase),
            Matcher::All(matchers) => matchers.iter().all(|matcher| matcher.matches(text)),
            Matcher::Any(matchers) => matchers.iter().any(|matcher| matcher.matches(text)),
        }
    }
}

fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
}

pub(crate) struct Rule {
    pub(crate) topic: Topic,
    pub(crate) matcher: Matcher,
    pub(crate) responses: &'static [&'static str],
}

use Matcher::{All, Any, Phrase, Word};

/// First match wins; the order is part of the contract.
pub(crate) const RULES: &[Rule] = &[
    Rule {
        topic: Topic::Greeting,
        matcher: Any(&[Word("hi"), Word("hello"), Word("hey")]),
        responses: &[
            "Hello from Lifecare Hospital. You can ask about services, appointments, departments, or run a symptom triage demo.",
        ],
    },
    Rule {
        topic: Topic::DecisionSupport,
        matcher: Any(&[Phrase("clinical decision support"), Word("cdss")]),
        responses: &[
            "Clinical Decision Support Systems (CDSS) are tools that combine patient data, guidelines, and risk models to help clinicians make safer, more consistent decisions.",
            "At Lifecare (demo), CDSS concepts power triage risk scoring, red-flag alerts, and likely diagnosis suggestions, with clinicians always making the final call.",
        ],
    },
    Rule {
        topic: Topic::AiExplainer,
        matcher: All(&[
            Word("ai"),
            Any(&[Phrase("diagnosis"), Phrase("triage"), Phrase("support")]),
        ]),
        responses: &[
            "AI can recognise patterns across symptoms, vitals, labs, and imaging to highlight high-risk patients and narrow down possible diagnoses.",
            "Our demo assistant shows how such AI could support Lifecare doctors by estimating risk bands and broad diagnostic categories.",
        ],
    },
    Rule {
        topic: Topic::ChestPain,
        matcher: Phrase("chest pain"),
        responses: &[
            "Chest pain, especially if sudden, heavy, or associated with breathlessness or sweating, is considered high-risk.",
            "In real life, you should go straight to an emergency department. The Lifecare triage demo only illustrates how clinicians might prioritise such cases.",
        ],
    },
    Rule {
        topic: Topic::Departments,
        matcher: Any(&[
            Phrase("department"),
            Phrase("speciality"),
            Phrase("specialty"),
        ]),
        responses: &[
            "Key departments at Lifecare include Emergency Medicine, Internal Medicine, Cardiology, Orthopaedics, Women & Child Health, and Diagnostics.",
            "For emergency symptoms like chest pain or severe breathlessness, Emergency Medicine and Cardiology are usually involved.",
        ],
    },
    Rule {
        topic: Topic::Appointments,
        matcher: Any(&[Phrase("appointment"), Phrase("book")]),
        responses: &[
            "You can request a slot through the Appointment page form. In a real hospital, this would securely notify the scheduling team.",
            "Use the \"Appointments\" link in the top menu to open the booking form.",
        ],
    },
    Rule {
        topic: Topic::VisitingHours,
        matcher: Any(&[
            Phrase("visiting"),
            Phrase("visit hours"),
            Phrase("timings"),
        ]),
        responses: &[
            "Typical visiting hours include fixed morning and evening slots, with flexible ICU policies depending on the patient's condition.",
            "Because this is an academic demo, these timings are illustrative placeholders rather than live operational data.",
        ],
    },
    Rule {
        topic: Topic::Location,
        matcher: Any(&[
            All(&[Phrase("where"), Phrase("located")]),
            Phrase("location"),
            Phrase("address"),
        ]),
        responses: &[
            "Lifecare Hospital here is a fictional teaching hospital created to demonstrate diagnosis and clinical decision support concepts.",
            "On a real site, you would see maps, routes, and verified contact numbers.",
        ],
    },
    Rule {
        topic: Topic::RestartTriage,
        matcher: Any(&[Phrase("start triage"), Phrase("symptom triage")]),
        responses: &[],
    },
];

pub(crate) const FALLBACK_RESPONSES: &[&str] = &[
    "Thank you for your question. I can help with topics like departments, appointments, visiting hours, and AI-based clinical decision support.",
    "If you want to simulate a case, type \"start triage\". For real health concerns, please visit a doctor or emergency department.",
];
