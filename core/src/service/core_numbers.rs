use crate::digits::{digits_of, join_digits, reduce_to_single_digit};
use crate::model::numbers::{Calculations, CoreNumbers, Derivation, NameDerivation, NameNumber};
use crate::model::report::LetterValue;
use crate::model::user::UserInput;

/// Chaldean letter values, A through Z.
const LETTER_VALUES: [u32; 26] = [
    1, 2, 3, 4, 5, 8, 3, 5, 1, // A-I
    1, 2, 3, 4, 5, 7, 8, 1, 2, // J-R
    3, 4, 6, 6, 6, 5, 1, 7, // S-Z
];

/// Value of an uppercase ASCII letter, `None` for anything else.
pub fn letter_value(letter: char) -> Option<u32> {
    if letter.is_ascii_uppercase() {
        Some(LETTER_VALUES[(letter as u8 - b'A') as usize])
    } else {
        None
    }
}

/// Uppercased letters of `name` with their values; everything outside A-Z is dropped.
pub fn name_letters(name: &str) -> Vec<LetterValue> {
    name.to_uppercase()
        .chars()
        .filter_map(|letter| letter_value(letter).map(|value| LetterValue { letter, value }))
        .collect()
}

pub fn calculate_mulank(date_of_birth: &str) -> Derivation {
    let day = birth_day(date_of_birth);
    let day_digits = digits_of(&day.to_string());
    let sum: u32 = day_digits.iter().sum();
    let reduced = reduce_to_single_digit(sum);

    let mut calculation = format!("Birth day {} → {} = {}", day, join_digits(&day_digits), sum);
    if sum > 9 {
        calculation.push_str(&format!(" → {}", reduced));
    }

    Derivation {
        value: reduced,
        calculation,
    }
}

/// Leading digits of the first `-` separated field; 0 when there are none.
fn birth_day(date_of_birth: &str) -> u32 {
    let field = date_of_birth.split('-').next().unwrap_or("");
    let leading: String = field
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    leading.parse().unwrap_or(0)
}

pub fn calculate_bhagyank(date_of_birth: &str) -> Derivation {
    let digits = digits_of(date_of_birth);
    let sum: u32 = digits.iter().sum();
    let reduced = reduce_to_single_digit(sum);
    Derivation {
        value: reduced,
        calculation: format!("{} → {} = {} → {}", date_of_birth, join_digits(&digits), sum, reduced),
    }
}

pub fn calculate_name_number(full_name: &str) -> NameDerivation {
    let letters = name_letters(full_name);
    let compound: u32 = letters.iter().map(|l| l.value).sum();
    let reduced = reduce_to_single_digit(compound);

    let terms = letters
        .iter()
        .map(|l| format!("{}({})", l.letter, l.value))
        .collect::<Vec<_>>()
        .join("+");

    NameDerivation {
        number: NameNumber { compound, reduced },
        calculation: format!("{} = {} → {}", terms, compound, reduced),
    }
}

pub fn calculate_mobile_ank(mobile_number: &str) -> Derivation {
    let digits = digits_of(mobile_number);
    let sum: u32 = digits.iter().sum();
    let reduced = reduce_to_single_digit(sum);
    Derivation {
        value: reduced,
        calculation: format!("{} = {} → {}", join_digits(&digits), sum, reduced),
    }
}

/// Derives all four core numbers and their display traces.
pub fn calculate_core_numbers(input: &UserInput) -> (CoreNumbers, Calculations) {
    let mulank = calculate_mulank(&input.date_of_birth);
    let bhagyank = calculate_bhagyank(&input.date_of_birth);
    let name = calculate_name_number(&input.full_name);
    let mobile = calculate_mobile_ank(&input.mobile_number);

    let numbers = CoreNumbers {
        mulank: mulank.value,
        bhagyank: bhagyank.value,
        name_number: name.number,
        mobile_ank: mobile.value,
    };
    let calculations = Calculations {
        mulank_calc: mulank.calculation,
        bhagyank_calc: bhagyank.calculation,
        name_calc: name.calculation,
        mobile_calc: mobile.calculation,
    };
    (numbers, calculations)
}
