//! Fluent checks for user supplied text
//!
//! A [`Validator`] borrows the value, collects rules and runs them in the
//! order they were added. Lengths count Unicode scalar values, not bytes.
//!
//! ```rust
//! use regex::Regex;
//! use tooling::validation::Validator;
//!
//! let slug = Regex::new(r"^[a-z0-9-]+$").unwrap();
//!
//! let checked = Validator::new("acme-corp", "workspace slug")
//!     .length_between(1, 16)
//!     .matches(&slug)
//!     .validate();
//! assert_eq!(checked.ok(), Some("acme-corp"));
//! ```

use crate::{Result, ToolingError};
use regex::Regex;

/// One check applied to a text value
pub trait ValidationRule {
    /// `Err` carries a message naming `field_name`
    fn validate(&self, value: &str, field_name: &str) -> std::result::Result<(), String>;
}

struct NonEmpty;

impl ValidationRule for NonEmpty {
    fn validate(&self, value: &str, field_name: &str) -> std::result::Result<(), String> {
        if value.is_empty() {
            Err(format!("{field_name} must not be empty"))
        } else {
            Ok(())
        }
    }
}

/// Inclusive bounds on the number of scalar values
struct Length {
    min: Option<usize>,
    max: Option<usize>,
}

impl ValidationRule for Length {
    fn validate(&self, value: &str, field_name: &str) -> std::result::Result<(), String> {
        let len = value.chars().count();
        if let Some(min) = self.min.filter(|&min| len < min) {
            return Err(format!("{field_name} is too short ({len} < {min} characters)"));
        }
        if let Some(max) = self.max.filter(|&max| len > max) {
            return Err(format!("{field_name} is too long ({len} > {max} characters)"));
        }
        Ok(())
    }
}

struct Pattern(Regex);

impl ValidationRule for Pattern {
    fn validate(&self, value: &str, field_name: &str) -> std::result::Result<(), String> {
        if self.0.is_match(value) {
            Ok(())
        } else {
            Err(format!("{field_name} does not match {}", self.0.as_str()))
        }
    }
}

struct Custom<F>(F);

impl<F> ValidationRule for Custom<F>
where
    F: Fn(&str) -> std::result::Result<(), String>,
{
    fn validate(&self, value: &str, _field_name: &str) -> std::result::Result<(), String> {
        (self.0)(value)
    }
}

/// Chain of rules over a borrowed value
pub struct Validator<'a> {
    value: &'a str,
    field_name: String,
    rules: Vec<Box<dyn ValidationRule + 'a>>,
}

impl<'a> Validator<'a> {
    /// `field_name` is used in error messages
    pub fn new(value: &'a str, field_name: impl Into<String>) -> Self {
        Self {
            value,
            field_name: field_name.into(),
            rules: Vec::new(),
        }
    }

    pub fn rule(mut self, rule: impl ValidationRule + 'a) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Closure rule; its message is used as is
    pub fn custom<F>(self, check: F) -> Self
    where
        F: Fn(&str) -> std::result::Result<(), String> + 'a,
    {
        self.rule(Custom(check))
    }

    pub fn not_empty(self) -> Self {
        self.rule(NonEmpty)
    }

    pub fn min_length(self, min: usize) -> Self {
        self.rule(Length {
            min: Some(min),
            max: None,
        })
    }

    pub fn max_length(self, max: usize) -> Self {
        self.rule(Length {
            min: None,
            max: Some(max),
        })
    }

    /// Both bounds inclusive
    pub fn length_between(self, min: usize, max: usize) -> Self {
        self.rule(Length {
            min: Some(min),
            max: Some(max),
        })
    }

    /// Whole-value match against a precompiled pattern
    pub fn matches(self, regex: &Regex) -> Self {
        self.rule(Pattern(regex.clone()))
    }

    /// Stop at the first failing rule
    pub fn validate(self) -> Result<&'a str> {
        match self.first_failure() {
            Some(message) => Err(ToolingError::Validation {
                field: self.field_name,
                message,
            }),
            None => Ok(self.value),
        }
    }

    /// Run every rule and report every failure
    pub fn validate_all(self) -> std::result::Result<&'a str, Vec<String>> {
        let failures: Vec<String> = self
            .rules
            .iter()
            .filter_map(|rule| rule.validate(self.value, &self.field_name).err())
            .collect();

        if failures.is_empty() {
            Ok(self.value)
        } else {
            Err(failures)
        }
    }

    fn first_failure(&self) -> Option<String> {
        self.rules
            .iter()
            .find_map(|rule| rule.validate(self.value, &self.field_name).err())
    }
}
