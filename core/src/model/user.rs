use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::time::parse_birth_date;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Default for Gender {
    fn default() -> Self {
        Gender::Male
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        };
        f.write_str(label)
    }
}

impl FromStr for Gender {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" => Ok(Gender::Male),
            "f" | "female" => Ok(Gender::Female),
            "o" | "other" => Ok(Gender::Other),
            _ => Err(InputError::UnknownGender(s.to_string())),
        }
    }
}

/// The four form fields a report is computed from.
///
/// `date_of_birth` is kept as the submitted `DD-MM-YYYY` text because the
/// calculations work on its digits, not on a calendar value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    pub full_name: String,
    pub date_of_birth: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_of_birth: Option<String>,
    pub mobile_number: String,
    pub gender: Gender,
}

impl UserInput {
    pub fn new(
        full_name: impl Into<String>,
        date_of_birth: impl Into<String>,
        mobile_number: impl Into<String>,
        gender: Gender,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            date_of_birth: date_of_birth.into(),
            time_of_birth: None,
            mobile_number: mobile_number.into(),
            gender,
        }
    }

    pub fn with_time_of_birth(mut self, time: impl Into<String>) -> Self {
        self.time_of_birth = Some(time.into());
        self
    }

    /// Text before the first space of the full name.
    pub fn first_name(&self) -> &str {
        self.full_name.split(' ').next().unwrap_or("")
    }

    /// Applies the submission rules of the input form.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.full_name.trim().is_empty() {
            return Err(InputError::EmptyName);
        }

        parse_birth_date(&self.date_of_birth)?;

        let mobile = &self.mobile_number;
        if mobile.len() != 10 || !mobile.chars().all(|c| c.is_ascii_digit()) {
            return Err(InputError::InvalidMobileNumber(mobile.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> UserInput {
        UserInput::new("Ravi Kumar", "15-08-1990", "9876543210", Gender::Male)
    }

    #[test]
    fn test_gender_parse() {
        assert_eq!("M".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!(" Other ".parse::<Gender>().unwrap(), Gender::Other);
        assert!(matches!("x".parse::<Gender>(), Err(InputError::UnknownGender(_))));
    }

    #[test]
    fn test_first_name() {
        assert_eq!(sample().first_name(), "Ravi");
        let single = UserInput::new("Madonna", "01-01-2000", "9876543210", Gender::Female);
        assert_eq!(single.first_name(), "Madonna");
    }

    #[test]
    fn test_validate_accepts_form_input() {
        assert!(sample().validate().is_ok());
        assert!(sample().with_time_of_birth("10:30").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_fields() {
        let mut input = sample();
        input.full_name = "   ".to_string();
        assert_eq!(input.validate(), Err(InputError::EmptyName));

        let mut input = sample();
        input.date_of_birth = "1990-08-15".to_string();
        assert!(matches!(input.validate(), Err(InputError::InvalidDateFormat(_))));

        let mut input = sample();
        input.date_of_birth = "31-02-1990".to_string();
        assert!(matches!(input.validate(), Err(InputError::InvalidDate(_))));

        let mut input = sample();
        input.mobile_number = "98765".to_string();
        assert!(matches!(input.validate(), Err(InputError::InvalidMobileNumber(_))));

        let mut input = sample();
        input.mobile_number = "98765a3210".to_string();
        assert!(matches!(input.validate(), Err(InputError::InvalidMobileNumber(_))));
    }

    #[test]
    fn test_serializes_with_form_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["fullName"], "Ravi Kumar");
        assert_eq!(json["dateOfBirth"], "15-08-1990");
        assert_eq!(json["gender"], "Male");
        assert!(json.get("timeOfBirth").is_none());
    }
}
