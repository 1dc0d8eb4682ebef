use std::collections::BTreeMap;

use crate::model::analysis::PositionAnalysis;

/// Effect and life area for digits 1 through 9. Zero carries no influence.
const POSITION_EFFECTS: [(&str, &str); 9] = [
    ("Leadership qualities, independence, new beginnings", "Career and Authority"),
    ("Cooperation, partnerships, emotional sensitivity", "Relationships and Partnerships"),
    ("Communication, creativity, social connections", "Communication and Arts"),
    ("Stability, hard work, methodical approach", "Foundation and Security"),
    ("Freedom, adventure, change and versatility", "Travel and Innovation"),
    ("Responsibility, nurturing, family focus", "Home and Family"),
    ("Spirituality, analysis, introspection", "Spirituality and Research"),
    ("Material success, authority, karmic lessons", "Business and Achievement"),
    ("Humanitarian service, completion, wisdom", "Service and Completion"),
];

/// Groups the 1-indexed positions of each non-zero digit, ascending by digit.
pub fn analyze_positions(mobile_number: &str) -> Vec<PositionAnalysis> {
    let mut positions: BTreeMap<u32, Vec<usize>> = BTreeMap::new();

    for (index, c) in mobile_number.chars().enumerate() {
        match c.to_digit(10) {
            Some(0) | None => continue,
            Some(digit) => positions.entry(digit).or_default().push(index + 1),
        }
    }

    positions
        .into_iter()
        .map(|(digit, positions)| {
            let (effects, life_area) = POSITION_EFFECTS[(digit - 1) as usize];
            PositionAnalysis {
                digit,
                positions,
                effects: effects.to_string(),
                life_area: life_area.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_positions_by_digit() {
        let result = analyze_positions("9876543210");
        assert_eq!(result.len(), 9);
        assert_eq!(result[0].digit, 1);
        assert_eq!(result[0].positions, vec![9]);
        assert_eq!(result[0].life_area, "Career and Authority");
        assert_eq!(result[8].digit, 9);
        assert_eq!(result[8].positions, vec![1]);
    }

    #[test]
    fn test_excludes_zero() {
        let result = analyze_positions("1000000001");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].digit, 1);
        assert_eq!(result[0].positions, vec![1, 10]);
        assert!(analyze_positions("0000000000").is_empty());
    }

    #[test]
    fn test_positions_count_raw_characters() {
        let result = analyze_positions("98-76");
        let pairs: Vec<(u32, Vec<usize>)> =
            result.into_iter().map(|p| (p.digit, p.positions)).collect();
        assert_eq!(
            pairs,
            vec![(6, vec![5]), (7, vec![4]), (8, vec![2]), (9, vec![1])]
        );
    }

    #[test]
    fn test_positions_partition_non_zero_indices() {
        let mobile = "9988776600";
        let result = analyze_positions(mobile);

        let mut all: Vec<usize> = result.iter().flat_map(|p| p.positions.clone()).collect();
        all.sort_unstable();
        let expected: Vec<usize> = mobile
            .chars()
            .enumerate()
            .filter(|(_, c)| *c != '0')
            .map(|(i, _)| i + 1)
            .collect();
        assert_eq!(all, expected);

        for entry in &result {
            for pos in &entry.positions {
                let c = mobile.chars().nth(pos - 1).unwrap();
                assert_eq!(c.to_digit(10), Some(entry.digit));
            }
        }
    }
}
