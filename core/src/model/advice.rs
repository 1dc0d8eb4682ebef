use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MarriedLife {
    pub compatible_numbers: Vec<u32>,
    pub partner_type: String,
    pub outlook: String,
    pub tips: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Health {
    pub tendency: String,
    pub suggestions: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Professions {
    pub primary: Vec<String>,
    pub secondary: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FavourableDays {
    pub best: Vec<String>,
    pub decisions: String,
    pub beginnings: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FavourableColors {
    pub primary: Vec<String>,
    pub secondary: Vec<String>,
    pub avoid: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Music {
    pub recommended: Vec<String>,
    pub frequencies: Vec<String>,
    pub avoid: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Directions {
    pub sleeping: String,
    pub working: String,
    pub meditation: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UniversalEnergies {
    pub married_life: MarriedLife,
    pub health: Health,
    pub profession: Professions,
    pub favourable_days: FavourableDays,
    pub favourable_colors: FavourableColors,
    pub music: Music,
    pub directions: Directions,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Remedies {
    pub general: Vec<String>,
    pub balancing: Vec<String>,
    pub prayers: Vec<String>,
}

/// Recommended Rudraksha bead.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Talisman {
    pub recommendation: String,
    pub benefits: Vec<String>,
    pub instructions: String,
}
