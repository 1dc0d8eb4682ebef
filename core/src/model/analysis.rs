use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompatibilityRating {
    #[serde(rename = "Highly Compatible")]
    HighlyCompatible,
    Compatible,
    Neutral,
    Incompatible,
}

impl CompatibilityRating {
    pub fn label(self) -> &'static str {
        match self {
            CompatibilityRating::HighlyCompatible => "Highly Compatible",
            CompatibilityRating::Compatible => "Compatible",
            CompatibilityRating::Neutral => "Neutral",
            CompatibilityRating::Incompatible => "Incompatible",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CompatibilityRating::HighlyCompatible => {
                "Excellent vibrational match supporting success and harmony"
            }
            CompatibilityRating::Compatible => "Good energy alignment with positive outcomes",
            CompatibilityRating::Neutral => "Balanced energy with room for improvement",
            CompatibilityRating::Incompatible => {
                "Energy mismatch requiring correction for better results"
            }
        }
    }
}

impl fmt::Display for CompatibilityRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityAssessment {
    pub rating: CompatibilityRating,
    pub description: String,
}

impl From<CompatibilityRating> for CompatibilityAssessment {
    fn from(rating: CompatibilityRating) -> Self {
        Self {
            rating,
            description: rating.description().to_string(),
        }
    }
}

/// A named adjacent-digit combination found in a mobile number.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct YogAnalysis {
    /// Pair as it appeared, e.g. `(2,1)`.
    pub combination: String,
    pub planets: String,
    pub effects: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PositionAnalysis {
    pub digit: u32,
    /// 1-indexed, ascending.
    pub positions: Vec<usize>,
    pub effects: String,
    pub life_area: String,
}

pub type Grid = [[Option<u32>; 3]; 3];

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatingNumber {
    pub number: u32,
    pub count: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GridAnalysis {
    pub grid: Grid,
    pub missing_numbers: Vec<u32>,
    pub repeating_numbers: Vec<RepeatingNumber>,
    /// Percentage of the nine digits present, rounded.
    pub yog_presence: u32,
    pub effects: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GridSet {
    pub dob_lo_shu: GridAnalysis,
    pub mobile_lo_shu: GridAnalysis,
    pub dob_vedic: GridAnalysis,
    pub mobile_vedic: GridAnalysis,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HarmonyScore {
    /// Number of the four pairings rated Highly Compatible.
    pub score: u32,
    pub stars: u32,
    pub description: String,
    pub suggestions: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashaYogData {
    pub year: u32,
    /// 1..=12. Serialized as `monthNumber`; `month` carries the name.
    #[serde(rename = "monthNumber")]
    pub month: u32,
    #[serde(rename = "month")]
    pub month_name: String,
    pub pyr: u32,
    pub pmo: u32,
    pub mda: u32,
    pub ada: u32,
    pub summation: u32,
    pub interpretation: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LuckyNumber {
    pub year: u32,
    pub number: u32,
    pub effect: String,
}
