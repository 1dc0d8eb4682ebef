use tracing::trace;

use crate::model::analysis::CompatibilityRating;
use crate::model::user::Gender;

// Hand-authored tables. Both orientations are checked on lookup, so a pair
// listed once in either order matches.
const HIGHLY_COMPATIBLE_PAIRS: &[(u32, u32)] = &[
    (1, 1), (1, 5), (1, 7), (1, 9),
    (2, 2), (2, 4), (2, 6), (2, 8),
    (3, 3), (3, 6), (3, 9),
    (4, 2), (4, 4), (4, 6), (4, 8),
    (5, 1), (5, 5), (5, 7), (5, 9),
    (6, 2), (6, 3), (6, 6), (6, 9),
    (7, 1), (7, 5), (7, 7), (7, 9),
    (8, 2), (8, 4), (8, 6), (8, 8),
    (9, 1), (9, 3), (9, 5), (9, 6), (9, 7), (9, 9),
];

const COMPATIBLE_PAIRS: &[(u32, u32)] = &[
    (1, 2), (1, 3), (1, 4), (1, 6), (1, 8),
    (2, 1), (2, 3), (2, 5), (2, 7), (2, 9),
    (3, 1), (3, 2), (3, 4), (3, 5), (3, 7), (3, 8),
    (4, 1), (4, 3), (4, 5), (4, 7), (4, 9),
    (5, 2), (5, 3), (5, 4), (5, 6), (5, 8),
    (6, 1), (6, 4), (6, 5), (6, 7), (6, 8),
    (7, 2), (7, 3), (7, 4), (7, 6), (7, 8),
    (8, 1), (8, 3), (8, 5), (8, 7), (8, 9),
    (9, 2), (9, 4), (9, 8),
];

const INCOMPATIBLE_PAIRS: &[(u32, u32)] = &[
    (1, 0), (2, 0), (3, 0), (4, 0), (5, 0), (6, 0), (7, 0), (8, 0), (9, 0),
];

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];
const SILENT_LETTERS: [char; 3] = ['h', 'l', 'n'];

/// Mobile endings tried in order when the current number is not a good match.
const GOOD_ENDINGS: [&str; 11] = ["01", "10", "19", "28", "37", "46", "55", "64", "73", "82", "91"];

const MAX_SUGGESTIONS: usize = 3;

fn contains_pair(table: &[(u32, u32)], a: u32, b: u32) -> bool {
    table
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

pub fn classify(a: u32, b: u32) -> CompatibilityRating {
    if contains_pair(HIGHLY_COMPATIBLE_PAIRS, a, b) {
        CompatibilityRating::HighlyCompatible
    } else if contains_pair(COMPATIBLE_PAIRS, a, b) {
        CompatibilityRating::Compatible
    } else if contains_pair(INCOMPATIBLE_PAIRS, a, b) {
        CompatibilityRating::Incompatible
    } else {
        CompatibilityRating::Neutral
    }
}

/// Spelling variants of `first_name`, at most three.
///
/// Candidates are produced by fixed mutations and are not re-scored: a
/// suggestion may well land on the same name number as the input.
pub fn suggest_name_corrections(
    first_name: &str,
    current_reduced: u32,
    targets: &[u32],
    gender: Gender,
) -> Vec<String> {
    trace!(first_name, current_reduced, ?targets, %gender, "building name suggestions");
    let mut suggestions = Vec::new();

    if let Some(doubled) = double_first_vowel(first_name) {
        suggestions.push(doubled);
    }

    let mut extended = first_name.to_string();
    match first_name.chars().last() {
        Some(last) if !is_vowel(last) => extended.push(last),
        _ => extended.push('l'),
    }
    suggestions.push(extended);

    for letter in SILENT_LETTERS {
        let candidate = format!("{}{}", first_name, letter);
        if !suggestions.contains(&candidate) {
            suggestions.push(candidate);
            break;
        }
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c.to_ascii_lowercase())
}

/// Doubles the first occurrence of the earliest vowel in `a, e, i, o, u`
/// order that the name contains. The doubled vowel is written lowercase.
fn double_first_vowel(name: &str) -> Option<String> {
    for vowel in VOWELS {
        if let Some((idx, found)) = name.char_indices().find(|(_, c)| c.eq_ignore_ascii_case(&vowel)) {
            let mut out = String::with_capacity(name.len() + 1);
            out.push_str(&name[..idx]);
            out.push(vowel);
            out.push(vowel);
            out.push_str(&name[idx + found.len_utf8()..]);
            return Some(out);
        }
    }
    None
}

/// Keeps all but the last two digits and appends the first three good endings.
pub fn suggest_mobile_endings(mobile_number: &str, targets: &[u32]) -> Vec<String> {
    trace!(mobile_number, ?targets, "building mobile suggestions");
    let chars: Vec<char> = mobile_number.chars().collect();
    let base: String = chars[..chars.len().saturating_sub(2)].iter().collect();

    GOOD_ENDINGS
        .iter()
        .take(MAX_SUGGESTIONS)
        .map(|ending| format!("{}{}", base, ending))
        .collect()
}
