use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NameNumber {
    /// Sum of the letter values before reduction.
    pub compound: u32,
    pub reduced: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CoreNumbers {
    /// Root number, from the birth day.
    pub mulank: u32,
    /// Destiny number, from all eight birth-date digits.
    pub bhagyank: u32,
    pub name_number: NameNumber,
    pub mobile_ank: u32,
}

/// A derived digit together with the human-readable working that produced it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Derivation {
    pub value: u32,
    pub calculation: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NameDerivation {
    pub number: NameNumber,
    pub calculation: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Calculations {
    pub mulank_calc: String,
    pub bhagyank_calc: String,
    pub name_calc: String,
    pub mobile_calc: String,
}
