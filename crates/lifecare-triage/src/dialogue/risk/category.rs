use serde::{Deserialize, Serialize};

/// Broad presentation bucket inferred from the main complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintCategory {
    CardiacRespiratory,
    Infective,
    Respiratory,
    Trauma,
    General,
}

impl ComplaintCategory {
    pub fn label(self) -> &'static str {
        match self {
            ComplaintCategory::CardiacRespiratory => {
                "Chest pain – possible cardiac or respiratory concern"
            }
            ComplaintCategory::Infective => "Fever – possible infection or inflammatory illness",
            ComplaintCategory::Respiratory => "Breathlessness – possible respiratory compromise",
            ComplaintCategory::Trauma => "Injury / trauma-related condition",
            ComplaintCategory::General => "General presentation",
        }
    }

    /// Reason contributed to the triage rationale, if the category is specific.
    pub fn reason(self) -> Option<&'static str> {
        match self {
            ComplaintCategory::CardiacRespiratory => Some("chest symptoms"),
            ComplaintCategory::Infective => Some("fever pattern"),
            ComplaintCategory::Respiratory => Some("breathlessness"),
            ComplaintCategory::Trauma => Some("injury mechanism"),
            ComplaintCategory::General => None,
        }
    }
}

/// Ordered keyword table; the first entry with a matching keyword wins.
const CATEGORY_KEYWORDS: &[(ComplaintCategory, &[&str])] = &[
    (ComplaintCategory::CardiacRespiratory, &["chest"]),
    (ComplaintCategory::Infective, &["fever"]),
    (ComplaintCategory::Respiratory, &["breath"]),
    (ComplaintCategory::Trauma, &["injury", "trauma"]),
];

/// Maps a lowercased complaint to its category.
pub fn categorize(complaint: &str) -> ComplaintCategory {
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| complaint.contains(keyword)))
        .map(|(category, _)| *category)
        .unwrap_or(ComplaintCategory::General)
}

/// Yes/no follow-up asked right after the complaint is captured.
pub fn follow_up_question(category: ComplaintCategory) -> &'static str {
    match category {
        ComplaintCategory::CardiacRespiratory => {
            "Do you have severe chest pain, sweating, or pain going to jaw/arm? (yes / no)"
        }
        ComplaintCategory::Infective => {
            "Do you have confusion, stiff neck, rash, or trouble breathing with the fever? (yes / no)"
        }
        ComplaintCategory::Respiratory => {
            "Is your breathlessness severe or getting rapidly worse? (yes / no)"
        }
        ComplaintCategory::Trauma => {
            "Is there heavy bleeding, major deformity, or any loss of consciousness? (yes / no)"
        }
        ComplaintCategory::General => {
            "Does this problem feel suddenly very severe or rapidly getting worse? (yes / no)"
        }
    }
}
