use crate::model::analysis::{CompatibilityRating, HarmonyScore};
use crate::model::numbers::CoreNumbers;
use crate::service::compatibility::classify;

const TOTAL_COMPARISONS: u32 = 4;
const MAX_STARS: f64 = 5.0;

/// Counts how many of the four name/mobile vs. root/destiny pairings are
/// Highly Compatible and maps the count to a 1-5 star rating.
pub fn calculate_harmony_score(numbers: &CoreNumbers) -> HarmonyScore {
    let name = numbers.name_number.reduced;
    let pairings = [
        (name, numbers.mulank),
        (name, numbers.bhagyank),
        (numbers.mobile_ank, numbers.mulank),
        (numbers.mobile_ank, numbers.bhagyank),
    ];

    let score = pairings
        .iter()
        .filter(|&&(a, b)| classify(a, b) == CompatibilityRating::HighlyCompatible)
        .count() as u32;

    let stars = stars_for(score);
    let (description, suggestions): (&str, &[&str]) = if stars >= 4 {
        (
            "High Harmony - Excellent vibrational alignment supporting success and fulfillment",
            &[
                "Maintain current positive energy through regular meditation",
                "Use your harmonious numbers for important decisions",
                "Share your positive energy to help others",
            ],
        )
    } else if stars >= 3 {
        (
            "Good Harmony - Balanced energies with potential for growth",
            &[
                "Work on improving name or mobile number compatibility",
                "Practice daily affirmations to enhance positive vibrations",
                "Seek guidance for better number alignment",
            ],
        )
    } else {
        (
            "Moderate Harmony - Adjustments recommended for better alignment",
            &[
                "Consider name correction for better compatibility",
                "Change mobile number to improve energy alignment",
                "Perform regular remedial practices to balance energies",
                "Consult with numerology expert for personalized guidance",
            ],
        )
    };

    HarmonyScore {
        score,
        stars,
        description: description.to_string(),
        suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
    }
}

fn stars_for(score: u32) -> u32 {
    let scaled = (score as f64 / TOTAL_COMPARISONS as f64) * MAX_STARS;
    (scaled.round() as u32).max(1)
}
