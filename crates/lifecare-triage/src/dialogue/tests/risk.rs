use crate::dialogue::risk::{score, ComplaintCategory, RiskLevel, TriageAnswers};
use crate::dialogue::Severity;

fn answers(complaint: &str, red_flags_present: bool, severity: Severity) -> TriageAnswers<'_> {
    TriageAnswers {
        complaint,
        red_flags_present,
        severity,
    }
}

#[test]
fn reasons_follow_complaint_red_flag_severity_order() {
    let result = score(&answers("chest pain", true, Severity::Moderate));

    assert_eq!(result.risk, RiskLevel::High);
    assert_eq!(
        result.reasons,
        vec![
            "chest symptoms".to_string(),
            "red-flag symptoms".to_string(),
            "moderate severity".to_string(),
        ]
    );
    assert_eq!(result.category, ComplaintCategory::CardiacRespiratory);
}

#[test]
fn high_severity_alone_is_high_risk() {
    let result = score(&answers("fever since monday", false, Severity::High));

    assert_eq!(result.risk, RiskLevel::High);
    assert_eq!(
        result.reasons,
        vec![
            "fever pattern".to_string(),
            "high subjective severity".to_string()
        ]
    );
    assert!(result
        .recommendation
        .contains("nearest emergency department immediately"));
}

#[test]
fn low_severity_without_red_flags_adds_no_severity_reason() {
    let result = score(&answers("twisted ankle injury", false, Severity::Low));

    assert_eq!(result.risk, RiskLevel::Low);
    assert_eq!(result.category, ComplaintCategory::Trauma);
    assert_eq!(result.reasons, vec!["injury mechanism".to_string()]);
    assert!(result
        .recommendation
        .starts_with("Reasoning (demo): this level is based on injury mechanism. Monitor"));
}

#[test]
fn general_low_case_has_bare_recommendation() {
    let result = score(&answers("headache", false, Severity::Low));

    assert!(result.reasons.is_empty());
    assert_eq!(result.category, ComplaintCategory::General);
    assert_eq!(result.recommendation, RiskLevel::Low.recommendation());
    assert_eq!(result.category_label(), "General presentation");
}

#[test]
fn moderate_recommendation_points_to_a_specialist() {
    let result = score(&answers("short of breath", false, Severity::Moderate));

    assert_eq!(result.risk, RiskLevel::Moderate);
    assert_eq!(result.category, ComplaintCategory::Respiratory);
    assert_eq!(
        result.recommendation,
        "Reasoning (demo): this level is based on breathlessness, moderate severity. \
         Please book an appointment with an appropriate specialist at Lifecare Hospital as soon as possible."
    );
}

#[test]
fn risk_chip_classes_match_levels() {
    assert_eq!(RiskLevel::Low.css_class(), "risk-low");
    assert_eq!(RiskLevel::Moderate.css_class(), "risk-med");
    assert_eq!(RiskLevel::High.css_class(), "risk-high");
}
