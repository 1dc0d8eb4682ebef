use thiserror::Error;

/// Reasons a submitted form is rejected before any numbers are derived.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Full name is required")]
    EmptyName,

    #[error("Date of birth must use DD-MM-YYYY format, got '{0}'")]
    InvalidDateFormat(String),

    #[error("Date of birth is not a real calendar date: '{0}'")]
    InvalidDate(String),

    #[error("Mobile number must be exactly 10 digits, got '{0}'")]
    InvalidMobileNumber(String),

    #[error("Unknown gender: '{0}' (expected male, female or other)")]
    UnknownGender(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}
