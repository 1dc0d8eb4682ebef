use chrono::NaiveDate;

use crate::error::InputError;

const BIRTH_DATE_FORMAT: &str = "%d-%m-%Y";

/// Parses a `DD-MM-YYYY` birth date.
///
/// The shape is checked first (two, two and four digits) so that chrono's
/// tolerance for single-digit fields does not leak through.
pub fn parse_birth_date(input: &str) -> Result<NaiveDate, InputError> {
    if !has_birth_date_shape(input) {
        return Err(InputError::InvalidDateFormat(input.to_string()));
    }
    NaiveDate::parse_from_str(input, BIRTH_DATE_FORMAT)
        .map_err(|_| InputError::InvalidDate(input.to_string()))
}

fn has_birth_date_shape(input: &str) -> bool {
    let parts: Vec<&str> = input.split('-').collect();
    if parts.len() != 3 {
        return false;
    }
    let widths = [2, 2, 4];
    parts
        .iter()
        .zip(widths)
        .all(|(part, width)| part.len() == width && part.chars().all(|c| c.is_ascii_digit()))
}

/// Formats loosely typed input as `DD-MM-YYYY`: digits only, dashes after
/// the day and month, year cut at four digits.
pub fn normalize_date_input(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    let mut out = String::with_capacity(10);
    for (i, c) in digits.chars().take(8).enumerate() {
        if i == 2 || i == 4 {
            out.push('-');
        }
        out.push(c);
    }
    if digits.len() == 2 || digits.len() == 4 {
        out.push('-');
    }
    out
}

/// Keeps the first ten digits of a loosely typed phone number.
pub fn normalize_mobile_input(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).take(10).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_parse_birth_date() {
        let date = parse_birth_date("15-08-1990").unwrap();
        assert_eq!((date.day(), date.month(), date.year()), (15, 8, 1990));

        assert!(matches!(parse_birth_date("5-8-1990"), Err(InputError::InvalidDateFormat(_))));
        assert!(matches!(parse_birth_date("15/08/1990"), Err(InputError::InvalidDateFormat(_))));
        assert!(matches!(parse_birth_date("15-08-90"), Err(InputError::InvalidDateFormat(_))));
        assert!(matches!(parse_birth_date("32-01-1990"), Err(InputError::InvalidDate(_))));
        assert!(parse_birth_date("29-02-2000").is_ok());
        assert!(matches!(parse_birth_date("29-02-1900"), Err(InputError::InvalidDate(_))));
    }

    #[test]
    fn test_normalize_date_input() {
        assert_eq!(normalize_date_input("15081990"), "15-08-1990");
        assert_eq!(normalize_date_input("15/08/1990"), "15-08-1990");
        assert_eq!(normalize_date_input("1508199012"), "15-08-1990");
        assert_eq!(normalize_date_input("1"), "1");
        assert_eq!(normalize_date_input("15"), "15-");
        assert_eq!(normalize_date_input("150"), "15-0");
        assert_eq!(normalize_date_input("1508"), "15-08-");
    }

    #[test]
    fn test_normalize_mobile_input() {
        assert_eq!(normalize_mobile_input("+91 98765-43210"), "9198765432");
        assert_eq!(normalize_mobile_input("98765 43210"), "9876543210");
        assert_eq!(normalize_mobile_input("abc"), "");
    }
}
