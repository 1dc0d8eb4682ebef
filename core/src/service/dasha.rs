use crate::digits::reduce_to_single_digit;
use crate::model::analysis::{DashaYogData, LuckyNumber};

pub const DASHA_FIRST_YEAR: u32 = 2025;
pub const DASHA_LAST_YEAR: u32 = 2028;

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Effect of each year's lucky number, by position in the year range.
const YEAR_EFFECTS: [&str; 4] = [
    "Brings new opportunities and fresh starts",
    "Enhances relationships and partnerships",
    "Promotes creative expression and communication",
    "Supports stability and long-term goals",
];

fn interpret(summation: u32) -> &'static str {
    match summation {
        1..=3 => "Favorable period for new beginnings and creative endeavors",
        4..=6 => "Focus on stability, relationships, and steady progress",
        7..=9 => "Time for spiritual growth, completion of projects, and wisdom gaining",
        _ => "",
    }
}

/// Month-by-month table for the fixed year range, year-major.
pub fn generate_dasha_yog(mulank: u32, bhagyank: u32) -> Vec<DashaYogData> {
    let mut data = Vec::with_capacity(48);

    for year in DASHA_FIRST_YEAR..=DASHA_LAST_YEAR {
        let pyr = reduce_to_single_digit(year + bhagyank);
        let mda = reduce_to_single_digit(mulank + year);

        for (month, month_name) in (1u32..).zip(MONTH_NAMES) {
            let pmo = reduce_to_single_digit(pyr + month);
            let ada = reduce_to_single_digit(mda + month);
            let summation = reduce_to_single_digit(pyr + pmo + mda + ada);

            data.push(DashaYogData {
                year,
                month,
                month_name: month_name.to_string(),
                pyr,
                pmo,
                mda,
                ada,
                summation,
                interpretation: interpret(summation).to_string(),
            });
        }
    }

    data
}

/// One lucky number per year of the range: `reduce(year + bhagyank)`.
pub fn lucky_numbers(bhagyank: u32) -> Vec<LuckyNumber> {
    (DASHA_FIRST_YEAR..=DASHA_LAST_YEAR)
        .zip(YEAR_EFFECTS)
        .map(|(year, effect)| LuckyNumber {
            year,
            number: reduce_to_single_digit(year + bhagyank),
            effect: effect.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forty_eight_records_in_order() {
        let data = generate_dasha_yog(6, 6);
        assert_eq!(data.len(), 48);
        assert_eq!((data[0].year, data[0].month), (2025, 1));
        assert_eq!(data[0].month_name, "January");
        assert_eq!((data[12].year, data[12].month), (2026, 1));
        assert_eq!((data[47].year, data[47].month), (2028, 12));
        assert_eq!(data[47].month_name, "December");
    }

    #[test]
    fn test_all_values_are_single_digits() {
        for mulank in 1..=9 {
            for bhagyank in 1..=9 {
                for row in generate_dasha_yog(mulank, bhagyank) {
                    for value in [row.pyr, row.pmo, row.mda, row.ada, row.summation] {
                        assert!((1..=9).contains(&value));
                    }
                    assert!(!row.interpretation.is_empty());
                }
            }
        }
    }

    #[test]
    fn test_first_month_values() {
        // 2025 + 6 = 2031 -> 6; 6 + 1 = 7; 6 + 2025 -> 6; 6 + 1 = 7; 6+7+6+7 = 26 -> 8
        let row = &generate_dasha_yog(6, 6)[0];
        assert_eq!((row.pyr, row.pmo, row.mda, row.ada, row.summation), (6, 7, 6, 7, 8));
        assert_eq!(
            row.interpretation,
            "Time for spiritual growth, completion of projects, and wisdom gaining"
        );
    }

    #[test]
    fn test_lucky_numbers() {
        let lucky = lucky_numbers(6);
        let years: Vec<u32> = lucky.iter().map(|l| l.year).collect();
        let numbers: Vec<u32> = lucky.iter().map(|l| l.number).collect();
        assert_eq!(years, vec![2025, 2026, 2027, 2028]);
        assert_eq!(numbers, vec![6, 7, 8, 9]);
        assert_eq!(lucky[0].effect, "Brings new opportunities and fresh starts");
        assert_eq!(lucky[3].effect, "Supports stability and long-term goals");
    }
}
