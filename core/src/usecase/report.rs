use tracing::debug;

use crate::digits::digits_of;
use crate::model::analysis::{CompatibilityAssessment, CompatibilityRating, GridSet};
use crate::model::numbers::CoreNumbers;
use crate::model::report::{CompatibilitySummary, ReportData};
use crate::model::user::UserInput;
use crate::service::advisors::{remedies, talisman, universal_energies};
use crate::service::compatibility::{classify, suggest_mobile_endings, suggest_name_corrections};
use crate::service::core_numbers::calculate_core_numbers;
use crate::service::dasha::{generate_dasha_yog, lucky_numbers};
use crate::service::grid::{build_grid, GridFlavor};
use crate::service::harmony::calculate_harmony_score;
use crate::service::name_table::create_name_numerology_table;
use crate::service::position::analyze_positions;
use crate::service::yog::analyze_mobile_yogs;

pub const KEEP_NAME: &str = "Keep current name as it is highly compatible";
pub const KEEP_MOBILE: &str = "Keep current mobile number as it is highly compatible";

/// Runs the whole pipeline for one submission.
///
/// Never fails. Input that skipped `UserInput::validate` still produces a
/// complete report, with non-digit and non-letter characters ignored.
pub fn generate_report(input: &UserInput) -> ReportData {
    let (core_numbers, calculations) = calculate_core_numbers(input);
    debug!(
        mulank = core_numbers.mulank,
        bhagyank = core_numbers.bhagyank,
        name_number = core_numbers.name_number.reduced,
        mobile_ank = core_numbers.mobile_ank,
        "core numbers derived"
    );

    let compatibility = summarize_compatibility(input, &core_numbers);

    let harmony_score = calculate_harmony_score(&core_numbers);
    debug!(score = harmony_score.score, stars = harmony_score.stars, "harmony scored");

    let grid_analysis = build_grids(input);
    debug!(
        dob_presence = grid_analysis.dob_lo_shu.yog_presence,
        mobile_presence = grid_analysis.mobile_lo_shu.yog_presence,
        "grids built"
    );

    ReportData {
        user_input: input.clone(),
        core_numbers,
        calculations,
        compatibility,
        yog_analysis: analyze_mobile_yogs(&input.mobile_number),
        position_analysis: analyze_positions(&input.mobile_number),
        name_numerology_table: create_name_numerology_table(&input.full_name),
        grid_analysis,
        harmony_score,
        universal_energies: universal_energies(core_numbers.mulank, input.gender),
        dasha_yog: generate_dasha_yog(core_numbers.mulank, core_numbers.bhagyank),
        lucky_numbers: lucky_numbers(core_numbers.bhagyank),
        remedies: remedies(),
        talisman: talisman(core_numbers.mulank),
    }
}

/// Name and mobile are each rated against the root number; suggestions are
/// only generated when the rating falls short of Highly Compatible.
fn summarize_compatibility(input: &UserInput, numbers: &CoreNumbers) -> CompatibilitySummary {
    let name_rating = classify(numbers.name_number.reduced, numbers.mulank);
    let mobile_rating = classify(numbers.mobile_ank, numbers.mulank);
    let targets = [numbers.mulank, numbers.bhagyank];

    let name_suggestions = if name_rating == CompatibilityRating::HighlyCompatible {
        vec![KEEP_NAME.to_string()]
    } else {
        suggest_name_corrections(
            input.first_name(),
            numbers.name_number.reduced,
            &targets,
            input.gender,
        )
    };

    let mobile_suggestions = if mobile_rating == CompatibilityRating::HighlyCompatible {
        vec![KEEP_MOBILE.to_string()]
    } else {
        suggest_mobile_endings(&input.mobile_number, &targets)
    };

    debug!(name = %name_rating, mobile = %mobile_rating, "compatibility rated");

    CompatibilitySummary {
        name_compatibility: CompatibilityAssessment::from(name_rating),
        mobile_compatibility: CompatibilityAssessment::from(mobile_rating),
        name_suggestions,
        mobile_suggestions,
    }
}

fn build_grids(input: &UserInput) -> GridSet {
    let dob_digits = digits_of(&input.date_of_birth);
    let mobile_digits = digits_of(&input.mobile_number);

    GridSet {
        dob_lo_shu: build_grid(&dob_digits, GridFlavor::LoShu),
        mobile_lo_shu: build_grid(&mobile_digits, GridFlavor::LoShu),
        dob_vedic: build_grid(&dob_digits, GridFlavor::Vedic),
        mobile_vedic: build_grid(&mobile_digits, GridFlavor::Vedic),
    }
}
