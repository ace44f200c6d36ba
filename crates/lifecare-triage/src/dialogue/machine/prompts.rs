pub(crate) const WELCOME: &[&str] = &[
    "Welcome to Lifecare Assistant.",
    "This educational chatbot focuses on diagnosis and clinical decision support at Lifecare Hospital.",
    "I can run a symptom triage demo or answer questions about Lifecare and our clinical support services.",
    "Please choose how you want to start:",
];

pub(crate) const MODE_RETRY: &str =
    "Please choose: symptom triage, or ask a question about Lifecare.";

pub(crate) const TRIAGE_INTRO: &[&str] = &[
    "Okay, let us run a brief symptom triage demo.",
    "Select your age group: child, adult, or older adult.",
];

pub(crate) const INFORMATION_INTRO: &[&str] = &[
    "Great, you can ask about Lifecare services, diagnosis support, departments, timings, or AI Clinical Decision Support.",
    "Examples: \"Which department for chest pain?\", \"What is clinical decision support?\", \"How does AI help diagnosis?\"",
];

pub(crate) const AGE_RETRY: &str = "Please choose: child, adult, or older adult.";

pub(crate) const COMPLAINT_PROMPT: &[&str] = &[
    "Thank you. What is the main problem today?",
    "You can say things like \"chest pain\", \"high fever\", \"breathlessness\", or \"injury\".",
];

pub(crate) const RED_FLAG_RETRY: &str = "Please answer yes or no.";

pub(crate) const SEVERITY_PROMPT: &str =
    "How severe do the symptoms feel overall? low, moderate, or high?";

pub(crate) const SEVERITY_RETRY: &str = "Please choose: low, moderate, or high.";

pub(crate) const TRIAGE_CLOSING: &[&str] = &[
    "This triage summary is a demo and cannot be used for diagnosis or treatment.",
    "You can now ask general questions about Lifecare or type \"start triage\" to simulate another case.",
];
