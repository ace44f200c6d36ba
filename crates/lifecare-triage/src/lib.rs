//! Lifecare triage assistant: a turn-based dialogue engine for a scripted symptom-triage
//! questionnaire and hospital information chat, plus the session hosting used by the HTTP
//! service.

pub mod config;
pub mod dialogue;
pub mod error;
pub mod sessions;
pub mod telemetry;
