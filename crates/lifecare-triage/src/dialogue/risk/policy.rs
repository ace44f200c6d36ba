use super::super::state::Severity;
use serde::{Deserialize, Serialize};

/// Illustrative urgency band; not a clinical result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }

    /// Style hook for the risk chip rendered by UI adapters.
    pub fn css_class(self) -> &'static str {
        match self {
            RiskLevel::Low => "risk-low",
            RiskLevel::Moderate => "risk-med",
            RiskLevel::High => "risk-high",
        }
    }

    pub fn recommendation(self) -> &'static str {
        match self {
            RiskLevel::High => {
                "Highly urgent: go to Lifecare Emergency or the nearest emergency department immediately. Do not rely on this demo for real decisions."
            }
            RiskLevel::Moderate => {
                "Please book an appointment with an appropriate specialist at Lifecare Hospital as soon as possible."
            }
            RiskLevel::Low => {
                "Monitor symptoms and arrange a consultation with a Lifecare clinician if anything worsens or persists."
            }
        }
    }
}

pub(crate) const RED_FLAG_REASON: &str = "red-flag symptoms";

pub(crate) fn severity_reason(severity: Severity) -> Option<&'static str> {
    match severity {
        Severity::High => Some("high subjective severity"),
        Severity::Moderate => Some("moderate severity"),
        Severity::Low => None,
    }
}

/// Red flags override everything; otherwise the band mirrors the reported severity.
pub(crate) fn decide_risk(red_flags_present: bool, severity: Severity) -> RiskLevel {
    if red_flags_present || severity == Severity::High {
        return RiskLevel::High;
    }

    match severity {
        Severity::Moderate => RiskLevel::Moderate,
        _ => RiskLevel::Low,
    }
}

pub(crate) fn compose_recommendation(risk: RiskLevel, reasons: &[String]) -> String {
    if reasons.is_empty() {
        return risk.recommendation().to_string();
    }

    format!(
        "Reasoning (demo): this level is based on {}. {}",
        reasons.join(", "),
        risk.recommendation()
    )
}
