use std::collections::HashMap;
use anyhow::{anyhow, Result};

use crate::error::InputError;
use crate::model::user::{Gender, UserInput};
use crate::time::{normalize_date_input, normalize_mobile_input};

/// Keys accepted in `key:value` arguments.
pub const INPUT_KEYS: [&str; 5] = ["dob", "gender", "mobile", "name", "time"];

#[derive(Debug, PartialEq)]
pub struct ParsedInput {
    pub name: String,
    pub metadata: HashMap<String, String>,
}

pub fn parse_args(args: &[String]) -> ParsedInput {
    let mut name_parts = Vec::new();
    let mut metadata = HashMap::new();

    for arg in args {
        if let Some((key, value)) = arg.split_once(':') {
            if !key.is_empty() {
                metadata.insert(key.to_string(), value.to_string());
                continue;
            }
        }
        name_parts.push(arg.as_str());
    }

    ParsedInput {
        name: name_parts.join(" "),
        metadata,
    }
}

pub fn expand_key(key: &str, candidates: &[&str]) -> Result<String> {
    if candidates.contains(&key) {
        return Ok(key.to_string());
    }

    let matches: Vec<&str> = candidates
        .iter()
        .filter(|&&c| c.starts_with(key))
        .cloned()
        .collect();

    match matches.len() {
        1 => Ok(matches[0].to_string()),
        0 => Err(anyhow!("Unknown key: '{}'", key)),
        _ => Err(anyhow!("Ambiguous key: '{}' matches {:?}", key, matches)),
    }
}

impl ParsedInput {
    /// Rewrites abbreviated keys to their full names. Two arguments that
    /// expand to the same key are rejected.
    pub fn expanded(self) -> Result<Self> {
        let mut metadata = HashMap::new();
        for (key, value) in self.metadata {
            let full = expand_key(&key, &INPUT_KEYS)?;
            if metadata.insert(full.clone(), value).is_some() {
                return Err(anyhow!("Duplicate key: '{}'", full));
            }
        }
        Ok(Self {
            name: self.name,
            metadata,
        })
    }
}

impl UserInput {
    /// Builds and validates a submission from command-line words such as
    /// `Ravi Kumar dob:15081990 mob:98765-43210 g:m`.
    ///
    /// Free words form the name; `name:` is used only when there are none.
    /// The date and mobile values are normalized the way the entry form
    /// formats them while typing.
    pub fn from_args(args: &[String], default_gender: Option<Gender>) -> Result<Self> {
        let parsed = parse_args(args).expanded()?;
        let mut meta = parsed.metadata;

        let full_name = if parsed.name.trim().is_empty() {
            meta.remove("name").unwrap_or_default()
        } else {
            parsed.name
        };
        let full_name = full_name.trim().to_string();

        let dob = meta.remove("dob").ok_or(InputError::MissingField("dob"))?;
        let mobile = meta.remove("mobile").ok_or(InputError::MissingField("mobile"))?;

        let gender = match meta.remove("gender") {
            Some(raw) => raw.parse::<Gender>()?,
            None => default_gender.unwrap_or_default(),
        };

        let mut input = UserInput::new(
            full_name,
            normalize_date_input(&dob),
            normalize_mobile_input(&mobile),
            gender,
        );
        if let Some(time) = meta.remove("time").filter(|t| !t.trim().is_empty()) {
            input = input.with_time_of_birth(time.trim());
        }

        input.validate()?;
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_parse_simple() {
        let parsed = parse_args(&args(&["Ravi", "Kumar", "dob:15-08-1990", "time:10:30"]));
        assert_eq!(parsed.name, "Ravi Kumar");
        assert_eq!(parsed.metadata.get("dob"), Some(&"15-08-1990".to_string()));
        assert_eq!(parsed.metadata.get("time"), Some(&"10:30".to_string()));
    }

    #[test]
    fn test_expand_key() {
        assert_eq!(expand_key("d", &INPUT_KEYS).unwrap(), "dob");
        assert_eq!(expand_key("mob", &INPUT_KEYS).unwrap(), "mobile");
        assert_eq!(expand_key("g", &INPUT_KEYS).unwrap(), "gender");
        assert_eq!(expand_key("time", &INPUT_KEYS).unwrap(), "time");

        assert!(expand_key("x", &INPUT_KEYS).is_err());
        let ambiguous = vec!["mobile", "month"];
        assert!(expand_key("mo", &ambiguous).is_err());
    }

    #[test]
    fn test_duplicate_after_expansion() {
        let err = parse_args(&args(&["d:15-08-1990", "dob:15-08-1990"]))
            .expanded()
            .unwrap_err();
        assert!(err.to_string().contains("Duplicate key"));
    }

    #[test]
    fn test_from_args_normalizes() {
        let input = UserInput::from_args(
            &args(&["Ravi", "Kumar", "d:15081990", "m:98765-43210", "g:f", "t:10:30"]),
            None,
        )
        .unwrap();

        assert_eq!(input.full_name, "Ravi Kumar");
        assert_eq!(input.date_of_birth, "15-08-1990");
        assert_eq!(input.mobile_number, "9876543210");
        assert_eq!(input.gender, Gender::Female);
        assert_eq!(input.time_of_birth.as_deref(), Some("10:30"));
    }

    #[test]
    fn test_from_args_name_key_and_default_gender() {
        let input = UserInput::from_args(
            &args(&["name:Asha", "dob:01-01-2000", "mobile:9876543210"]),
            Some(Gender::Other),
        )
        .unwrap();
        assert_eq!(input.full_name, "Asha");
        assert_eq!(input.gender, Gender::Other);
        assert_eq!(input.time_of_birth, None);
    }

    #[test]
    fn test_from_args_rejects_bad_input() {
        let missing = UserInput::from_args(&args(&["Ravi", "mobile:9876543210"]), None).unwrap_err();
        assert_eq!(
            missing.downcast_ref::<InputError>(),
            Some(&InputError::MissingField("dob"))
        );

        let short = UserInput::from_args(&args(&["Ravi", "dob:15-08-1990", "mobile:12345"]), None)
            .unwrap_err();
        assert!(matches!(
            short.downcast_ref::<InputError>(),
            Some(InputError::InvalidMobileNumber(_))
        ));

        let no_name = UserInput::from_args(&args(&["dob:15-08-1990", "mobile:9876543210"]), None)
            .unwrap_err();
        assert_eq!(no_name.downcast_ref::<InputError>(), Some(&InputError::EmptyName));

        let bad_date = UserInput::from_args(&args(&["Ravi", "dob:31-02-1990", "mobile:9876543210"]), None)
            .unwrap_err();
        assert!(matches!(
            bad_date.downcast_ref::<InputError>(),
            Some(InputError::InvalidDate(_))
        ));
    }
}
