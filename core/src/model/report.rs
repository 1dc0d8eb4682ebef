use serde::{Deserialize, Serialize};

use crate::model::advice::{Remedies, Talisman, UniversalEnergies};
use crate::model::analysis::{
    CompatibilityAssessment, DashaYogData, GridSet, HarmonyScore, LuckyNumber, PositionAnalysis,
    YogAnalysis,
};
use crate::model::numbers::{Calculations, CoreNumbers, NameNumber};
use crate::model::user::UserInput;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilitySummary {
    pub name_compatibility: CompatibilityAssessment,
    pub mobile_compatibility: CompatibilityAssessment,
    pub name_suggestions: Vec<String>,
    pub mobile_suggestions: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterValue {
    pub letter: char,
    pub value: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NameNumerologyTable {
    pub full_name: Vec<LetterValue>,
    pub first_name: Vec<LetterValue>,
    pub full_name_numbers: NameNumber,
    pub first_name_numbers: NameNumber,
    pub lucky_numbers: Vec<u32>,
    pub neutral_numbers: Vec<u32>,
    pub unlucky_numbers: Vec<u32>,
}

/// Everything the report renderer reads. Built once per submission.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    pub user_input: UserInput,
    pub core_numbers: CoreNumbers,
    pub calculations: Calculations,
    pub compatibility: CompatibilitySummary,
    pub yog_analysis: Vec<YogAnalysis>,
    pub position_analysis: Vec<PositionAnalysis>,
    pub name_numerology_table: NameNumerologyTable,
    pub grid_analysis: GridSet,
    pub harmony_score: HarmonyScore,
    pub universal_energies: UniversalEnergies,
    pub dasha_yog: Vec<DashaYogData>,
    pub lucky_numbers: Vec<LuckyNumber>,
    pub remedies: Remedies,
    #[serde(rename = "rudraksha")]
    pub talisman: Talisman,
}
