//! Structured validation failures
//!
//! A [`ValidationErrors`] value carries every field violation found while
//! reading one request, so callers see the full list in a single response
//! rather than fixing problems one at a time.

use serde::Serialize;
use std::fmt;

/// The rule a field broke.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Rule {
    /// Field was absent (or `null`) but has no default
    Required,
    /// Field was present with the wrong JSON type
    InvalidType { expected: &'static str },
    /// String shorter than the minimum codepoint count
    MinLength { min: usize },
    /// String longer than the maximum codepoint count
    MaxLength { max: usize },
    /// Not a well-formed email address
    Email,
    /// Integer outside a closed range
    Range { min: i64, max: i64 },
    /// Sequence with too few entries
    MinItems { min: usize },
    /// Request body could not be parsed
    MalformedBody,
}

/// One violated rule on one field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    #[serde(flatten)]
    pub rule: Rule,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, rule: Rule) -> Self {
        let field = field.into();
        let message = describe(&field, &rule);
        Self {
            field,
            rule,
            message,
        }
    }
}

fn describe(field: &str, rule: &Rule) -> String {
    match rule {
        Rule::Required => format!("{} is required", field),
        Rule::InvalidType { expected } => format!("{} must be {}", field, expected),
        Rule::MinLength { min } => format!("{} must be at least {} characters", field, min),
        Rule::MaxLength { max } => format!("{} must be at most {} characters", field, max),
        Rule::Email => format!("{} must be a valid email address", field),
        Rule::Range { min, max } => format!("{} must be between {} and {}", field, min, max),
        Rule::MinItems { min } => format!("{} must contain at least {} item(s)", field, min),
        Rule::MalformedBody => format!("{} could not be parsed", field),
    }
}

/// Every violation found in one validation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shortcut for a failure with exactly one violation.
    pub fn single(field: impl Into<String>, rule: Rule) -> Self {
        let mut errors = Self::new();
        errors.push(field, rule);
        errors
    }

    pub fn push(&mut self, field: impl Into<String>, rule: Rule) {
        self.violations.push(FieldViolation::new(field, rule));
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Field names that failed, in the order they were checked.
    pub fn fields(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.field.as_str()).collect()
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.violations.iter().map(|v| v.message.as_str()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}
