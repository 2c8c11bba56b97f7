//! Declarative validation schemas
//!
//! A `Schema` maps each field name to an ordered list of `Check`s. Checks for
//! one field are evaluated in order and stop at the first failure; fields are
//! evaluated independently of each other.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;
use thiserror::Error;

/// `local@domain.tld` with no whitespace and a single `@`
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").unwrap()
});

/// The value held by a single input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(b) => Some(*b),
            FieldValue::Text(_) => None,
        }
    }
}

/// Stand-in for a field missing from `FormValues`
static MISSING: FieldValue = FieldValue::Text(String::new());

/// Field name to value, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    entries: Vec<(&'static str, FieldValue)>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, field: &'static str, value: FieldValue) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: &'static str, value: FieldValue) {
        if let Some(entry) = self.entries.iter_mut().find(|(name, _)| *name == field) {
            entry.1 = value;
        } else {
            self.entries.push((field, value));
        }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| value)
    }

    pub fn get_mut(&mut self, field: &str) -> Option<&mut FieldValue> {
        self.entries
            .iter_mut()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| value)
    }

    /// Text value of a field, empty if missing or not text
    pub fn text(&self, field: &str) -> String {
        self.get(field)
            .and_then(FieldValue::as_text)
            .unwrap_or_default()
            .to_string()
    }

    /// Flag value of a field; only an explicit `Flag(true)` is true
    pub fn flag(&self, field: &str) -> bool {
        self.get(field).and_then(FieldValue::as_flag).unwrap_or(false)
    }
}

/// A pure predicate over a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Text must be non-empty
    Required,
    /// Text must look like `local@domain.tld`
    Email,
    /// Text must have at least this many characters
    MinLength(usize),
    /// Value must be exactly `Flag(true)`
    MustBeTrue,
}

impl Rule {
    pub fn passes(&self, value: &FieldValue) -> bool {
        match (self, value) {
            (Rule::Required, FieldValue::Text(s)) => !s.is_empty(),
            (Rule::Email, FieldValue::Text(s)) => EMAIL_REGEX.is_match(s),
            (Rule::MinLength(min), FieldValue::Text(s)) => s.chars().count() >= *min,
            (Rule::MustBeTrue, value) => *value == FieldValue::Flag(true),
            // Text rules never pass on a checkbox
            (_, FieldValue::Flag(_)) => false,
        }
    }
}

/// A rule paired with the message shown when it fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub rule: Rule,
    pub message: &'static str,
}

impl Check {
    pub fn new(rule: Rule, message: &'static str) -> Self {
        Self { rule, message }
    }

    pub fn required(message: &'static str) -> Self {
        Self::new(Rule::Required, message)
    }

    pub fn email(message: &'static str) -> Self {
        Self::new(Rule::Email, message)
    }

    pub fn min_length(min: usize, message: &'static str) -> Self {
        Self::new(Rule::MinLength(min), message)
    }

    pub fn must_be_true(message: &'static str) -> Self {
        Self::new(Rule::MustBeTrue, message)
    }
}

/// Evaluate `checks` in order and return the first one that fails
pub fn first_failure<'a>(value: &FieldValue, checks: &'a [Check]) -> Option<&'a Check> {
    checks.iter().find(|check| !check.rule.passes(value))
}

/// A failed check on one field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Field name to error message for the fields that failed validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<&'static str, FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.errors.get(field)
    }

    /// Message for a field, if it has an error
    pub fn message(&self, field: &str) -> Option<&str> {
        self.get(field).map(|e| e.message.as_str())
    }

    pub fn insert(&mut self, error: FieldError) {
        self.errors.insert(error.field, error);
    }

    pub fn remove(&mut self, field: &str) -> Option<FieldError> {
        self.errors.remove(field)
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Replace or clear the error for one field
    pub fn apply(&mut self, field: &'static str, result: Option<FieldError>) {
        match result {
            Some(error) => self.insert(error),
            None => {
                self.remove(field);
            }
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.errors.keys().copied()
    }
}

#[cfg(test)]
impl ValidationErrors {
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }
}

/// Ordered checks bound to one field
#[derive(Debug, Clone)]
pub struct FieldRules {
    pub field: &'static str,
    pub checks: Vec<Check>,
}

/// Ordered validation checks for every field of a form
#[derive(Debug, Clone, Default)]
pub struct Schema {
    rules: Vec<FieldRules>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind an ordered list of checks to a field
    pub fn field(mut self, field: &'static str, checks: Vec<Check>) -> Self {
        self.rules.push(FieldRules { field, checks });
        self
    }

    /// Validate a single field; fields without rules always pass
    pub fn validate_field(&self, field: &str, values: &FormValues) -> Option<FieldError> {
        let rules = self.rules.iter().find(|r| r.field == field)?;
        let value = values.get(field).unwrap_or(&MISSING);
        first_failure(value, &rules.checks).map(|check| FieldError {
            field: rules.field,
            message: check.message.to_string(),
        })
    }

    /// Validate every field independently
    pub fn validate(&self, values: &FormValues) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for rules in &self.rules {
            if let Some(error) = self.validate_field(rules.field, values) {
                errors.insert(error);
            }
        }
        errors
    }
}

/// When edits trigger validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Every change re-validates the changed field
    #[default]
    Live,
    /// Changes only re-validate after the first submit attempt
    OnSubmit,
}
