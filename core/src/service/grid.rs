use serde::{Deserialize, Serialize};

use crate::model::analysis::{Grid, GridAnalysis, RepeatingNumber};

/// The two fixed digit-to-cell layouts.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridFlavor {
    /// Magic-square layout: 4 9 2 / 3 5 7 / 8 1 6.
    LoShu,
    /// Sequential layout: 1 2 3 / 4 5 6 / 7 8 9.
    Vedic,
}

/// (row, col) of digits 1..=9, indexed by `digit - 1`.
const LO_SHU_CELLS: [(usize, usize); 9] = [
    (2, 1), // 1
    (0, 2), // 2
    (1, 0), // 3
    (0, 0), // 4
    (1, 1), // 5
    (2, 2), // 6
    (1, 2), // 7
    (2, 0), // 8
    (0, 1), // 9
];

const VEDIC_CELLS: [(usize, usize); 9] = [
    (0, 0), (0, 1), (0, 2),
    (1, 0), (1, 1), (1, 2),
    (2, 0), (2, 1), (2, 2),
];

impl GridFlavor {
    pub fn name(self) -> &'static str {
        match self {
            GridFlavor::LoShu => "LoShu",
            GridFlavor::Vedic => "Vedic",
        }
    }

    /// Cell of `digit`, which must be in 1..=9.
    pub fn cell(self, digit: u32) -> (usize, usize) {
        let cells = match self {
            GridFlavor::LoShu => &LO_SHU_CELLS,
            GridFlavor::Vedic => &VEDIC_CELLS,
        };
        cells[(digit - 1) as usize]
    }

    /// The layout itself: which digit owns each cell.
    pub fn layout(self) -> [[u32; 3]; 3] {
        let mut layout = [[0; 3]; 3];
        for digit in 1..=9 {
            let (row, col) = self.cell(digit);
            layout[row][col] = digit;
        }
        layout
    }

    fn effects(self, yog_presence: u32) -> &'static str {
        match (self, yog_presence) {
            (GridFlavor::LoShu, p) if p >= 80 => "Excellent energy balance with strong life force",
            (GridFlavor::LoShu, p) if p >= 60 => "Good energy balance with some areas needing attention",
            (GridFlavor::LoShu, _) => "Energy imbalance requiring remedial measures",
            (GridFlavor::Vedic, p) if p >= 80 => "Strong spiritual and material foundation",
            (GridFlavor::Vedic, p) if p >= 60 => "Balanced spiritual growth with room for improvement",
            (GridFlavor::Vedic, _) => "Spiritual development needed for better life balance",
        }
    }
}

/// Places each digit 1..=9 in its cell and summarises coverage.
///
/// Cells mark presence only; repeat counts are reported separately. Digits
/// outside 1..=9 (zero in practice) are ignored.
pub fn build_grid(digits: &[u32], flavor: GridFlavor) -> GridAnalysis {
    let mut grid: Grid = [[None; 3]; 3];
    let mut counts = [0usize; 10];

    for &digit in digits {
        if (1..=9).contains(&digit) {
            counts[digit as usize] += 1;
            let (row, col) = flavor.cell(digit);
            grid[row][col] = Some(digit);
        }
    }

    let mut missing_numbers = Vec::new();
    let mut repeating_numbers = Vec::new();
    for digit in 1..=9u32 {
        match counts[digit as usize] {
            0 => missing_numbers.push(digit),
            1 => {}
            count => repeating_numbers.push(RepeatingNumber { number: digit, count }),
        }
    }

    let yog_presence = presence_percent(missing_numbers.len());

    GridAnalysis {
        grid,
        missing_numbers,
        repeating_numbers,
        yog_presence,
        effects: flavor.effects(yog_presence).to_string(),
    }
}

fn presence_percent(missing: usize) -> u32 {
    let present = 9usize.saturating_sub(missing) as f64;
    ((present / 9.0) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digits::digits_of;

    #[test]
    fn test_layouts_are_bijections() {
        assert_eq!(GridFlavor::LoShu.layout(), [[4, 9, 2], [3, 5, 7], [8, 1, 6]]);
        assert_eq!(GridFlavor::Vedic.layout(), [[1, 2, 3], [4, 5, 6], [7, 8, 9]]);

        for flavor in [GridFlavor::LoShu, GridFlavor::Vedic] {
            let mut cells: Vec<_> = (1..=9).map(|d| flavor.cell(d)).collect();
            cells.sort_unstable();
            cells.dedup();
            assert_eq!(cells.len(), 9, "{} layout", flavor.name());
        }
    }

    #[test]
    fn test_lo_shu_rows_sum_to_fifteen() {
        let layout = GridFlavor::LoShu.layout();
        for row in layout {
            assert_eq!(row.iter().sum::<u32>(), 15);
        }
    }

    #[test]
    fn test_birth_date_grid() {
        let analysis = build_grid(&digits_of("15081990"), GridFlavor::LoShu);
        assert_eq!(analysis.missing_numbers, vec![2, 3, 4, 6, 7]);
        assert_eq!(
            analysis.repeating_numbers,
            vec![
                RepeatingNumber { number: 1, count: 2 },
                RepeatingNumber { number: 9, count: 2 },
            ]
        );
        assert_eq!(analysis.yog_presence, 44);
        assert_eq!(analysis.effects, "Energy imbalance requiring remedial measures");
        assert_eq!(analysis.grid[2][1], Some(1));
        assert_eq!(analysis.grid[0][1], Some(9));
        assert_eq!(analysis.grid[0][0], None);
    }

    #[test]
    fn test_full_coverage() {
        let analysis = build_grid(&digits_of("9876543210"), GridFlavor::Vedic);
        assert!(analysis.missing_numbers.is_empty());
        assert!(analysis.repeating_numbers.is_empty());
        assert_eq!(analysis.yog_presence, 100);
        assert_eq!(analysis.effects, "Strong spiritual and material foundation");
        assert_eq!(analysis.grid, [
            [Some(1), Some(2), Some(3)],
            [Some(4), Some(5), Some(6)],
            [Some(7), Some(8), Some(9)],
        ]);
    }

    #[test]
    fn test_effect_bands() {
        // 7 of 9 present -> 78%
        let analysis = build_grid(&[1, 2, 3, 4, 5, 6, 7], GridFlavor::LoShu);
        assert_eq!(analysis.yog_presence, 78);
        assert_eq!(analysis.effects, "Good energy balance with some areas needing attention");

        // 8 of 9 present -> 89%
        let analysis = build_grid(&[1, 2, 3, 4, 5, 6, 7, 8], GridFlavor::Vedic);
        assert_eq!(analysis.yog_presence, 89);
        assert_eq!(analysis.effects, "Strong spiritual and material foundation");

        let analysis = build_grid(&[], GridFlavor::Vedic);
        assert_eq!(analysis.yog_presence, 0);
        assert_eq!(analysis.missing_numbers.len(), 9);
        assert_eq!(analysis.effects, "Spiritual development needed for better life balance");
    }

    #[test]
    fn test_missing_plus_present_is_nine() {
        let samples: [&[u32]; 4] = [&[1, 1, 1], &[9, 8, 7, 7, 6], &[5], &[2, 4, 6, 8, 2, 4]];
        for digits in samples {
            let analysis = build_grid(digits, GridFlavor::LoShu);
            let mut distinct = digits.to_vec();
            distinct.sort_unstable();
            distinct.dedup();
            assert_eq!(analysis.missing_numbers.len() + distinct.len(), 9);
            let expected = (((9 - analysis.missing_numbers.len()) as f64 / 9.0) * 100.0).round() as u32;
            assert_eq!(analysis.yog_presence, expected);
        }
    }
}
