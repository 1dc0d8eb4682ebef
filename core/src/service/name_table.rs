use crate::model::report::NameNumerologyTable;
use crate::service::core_numbers::{calculate_name_number, name_letters};

const LUCKY_NUMBERS: [u32; 5] = [1, 3, 5, 6, 9];
const NEUTRAL_NUMBERS: [u32; 3] = [2, 4, 7];
const UNLUCKY_NUMBERS: [u32; 1] = [8];

/// Letter-by-letter breakdown of the full name and the first name.
///
/// The lucky/neutral/unlucky buckets are fixed and do not depend on the name.
pub fn create_name_numerology_table(full_name: &str) -> NameNumerologyTable {
    let first_name = full_name.split(' ').next().unwrap_or("");

    NameNumerologyTable {
        full_name: name_letters(full_name),
        first_name: name_letters(first_name),
        full_name_numbers: calculate_name_number(full_name).number,
        first_name_numbers: calculate_name_number(first_name).number,
        lucky_numbers: LUCKY_NUMBERS.to_vec(),
        neutral_numbers: NEUTRAL_NUMBERS.to_vec(),
        unlucky_numbers: UNLUCKY_NUMBERS.to_vec(),
    }
}
