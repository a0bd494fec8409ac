use lettre::Address;
use serde_json::{Map, Value};

use crate::errors::{Rule, ValidationErrors};

/// RFC 5321 path limit
const MAX_EMAIL_LENGTH: usize = 254;

/// Inclusive codepoint-length bounds for a string field.
#[derive(Clone, Copy, Debug)]
pub struct Length {
    pub min: usize,
    pub max: Option<usize>,
}

impl Length {
    pub const fn between(min: usize, max: usize) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    pub const fn at_least(min: usize) -> Self {
        Self { min, max: None }
    }
}

/// Accepts exactly what the mail relay can address, narrowed to
/// dot-atom local parts and domains with an alphabetic top-level label.
pub fn is_valid_email(value: &str) -> bool {
    if value.len() > MAX_EMAIL_LENGTH {
        return false;
    }
    let Ok(address) = value.parse::<Address>() else {
        return false;
    };

    let user = address.user();
    let dot_atom = !user.starts_with('.') && !user.ends_with('.') && !user.contains("..");

    let domain = address.domain();
    let has_tld = match domain.rsplit_once('.') {
        Some((host, tld)) => {
            !host.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
        }
        None => false,
    };

    dot_atom && has_tld
}

/// Reads typed fields out of a raw JSON object, recording every violation.
///
/// Accessors always return a value so a schema can read all of its fields
/// before deciding; values returned for a failing field are placeholders and
/// are discarded once [`FieldReader::finish`] reports the errors.
pub struct FieldReader<'a> {
    raw: &'a Map<String, Value>,
    errors: ValidationErrors,
}

impl<'a> FieldReader<'a> {
    pub fn new(raw: &'a Map<String, Value>) -> Self {
        Self {
            raw,
            errors: ValidationErrors::new(),
        }
    }

    fn present(&self, field: &str) -> Option<&'a Value> {
        match self.raw.get(field) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }

    fn check_length(&mut self, field: &str, value: &str, bounds: Length) {
        let count = value.chars().count();
        if count < bounds.min {
            self.errors.push(field, Rule::MinLength { min: bounds.min });
        } else if let Some(max) = bounds.max {
            if count > max {
                self.errors.push(field, Rule::MaxLength { max });
            }
        }
    }

    /// Required string with length bounds.
    pub fn string(&mut self, field: &str, bounds: Length) -> String {
        match self.present(field) {
            None => {
                self.errors.push(field, Rule::Required);
                String::new()
            }
            Some(Value::String(value)) => {
                self.check_length(field, value, bounds);
                value.clone()
            }
            Some(_) => {
                self.errors.push(field, Rule::InvalidType { expected: "a string" });
                String::new()
            }
        }
    }

    /// Optional string; absent and `null` both mean `None`.
    pub fn optional_string(&mut self, field: &str) -> Option<String> {
        match self.present(field) {
            None => None,
            Some(Value::String(value)) => Some(value.clone()),
            Some(_) => {
                self.errors.push(field, Rule::InvalidType { expected: "a string" });
                None
            }
        }
    }

    /// Required email address.
    pub fn email(&mut self, field: &str) -> String {
        match self.present(field) {
            None => {
                self.errors.push(field, Rule::Required);
                String::new()
            }
            Some(Value::String(value)) => {
                if !is_valid_email(value) {
                    self.errors.push(field, Rule::Email);
                }
                value.clone()
            }
            Some(_) => {
                self.errors.push(field, Rule::InvalidType { expected: "a string" });
                String::new()
            }
        }
    }

    /// Boolean flag that is never required.
    pub fn flag(&mut self, field: &str, default: bool) -> bool {
        match self.present(field) {
            None => default,
            Some(Value::Bool(value)) => *value,
            Some(_) => {
                self.errors.push(field, Rule::InvalidType { expected: "a boolean" });
                default
            }
        }
    }

    /// Integer in `[min, max]`, defaulting when absent. Floats are rejected.
    pub fn integer_in(&mut self, field: &str, min: i64, max: i64, default: i64) -> i64 {
        match self.present(field) {
            None => default,
            Some(Value::Number(number)) => match number.as_i64() {
                Some(value) if (min..=max).contains(&value) => value,
                Some(_) => {
                    self.errors.push(field, Rule::Range { min, max });
                    default
                }
                None if number.is_u64() => {
                    self.errors.push(field, Rule::Range { min, max });
                    default
                }
                None => {
                    self.errors.push(field, Rule::InvalidType { expected: "an integer" });
                    default
                }
            },
            Some(_) => {
                self.errors.push(field, Rule::InvalidType { expected: "an integer" });
                default
            }
        }
    }

    /// Required list of strings with a minimum entry count.
    pub fn string_list(&mut self, field: &str, min_items: usize) -> Vec<String> {
        let items = match self.present(field) {
            None => {
                self.errors.push(field, Rule::Required);
                return Vec::new();
            }
            Some(Value::Array(items)) => items,
            Some(_) => {
                self.errors.push(field, Rule::InvalidType { expected: "a list of strings" });
                return Vec::new();
            }
        };

        let mut values = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match item {
                Value::String(value) => values.push(value.clone()),
                _ => self.errors.push(
                    format!("{}[{}]", field, index),
                    Rule::InvalidType { expected: "a string" },
                ),
            }
        }

        if items.len() < min_items {
            self.errors.push(field, Rule::MinItems { min: min_items });
        }
        values
    }

    /// Ends the pass: `Err` with every violation, or `Ok` when all fields passed.
    pub fn finish(self) -> Result<(), ValidationErrors> {
        self.errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test fixture must be an object"),
        }
    }

    #[test]
    fn email_grammar() {
        assert!(is_valid_email("sarah.johnson@techcorp.com"));
        assert!(is_valid_email("a+tag@sub.example.co.uk"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email(".leading@example.com"));
        assert!(!is_valid_email("double..dot@example.com"));
        assert!(!is_valid_email("space in@example.com"));
        assert!(!is_valid_email("apikey"));
        assert!(!is_valid_email("trailing.@example.com"));
        assert!(!is_valid_email("numeric@example.123"));
        assert!(!is_valid_email(&format!("{}@example.com", "a".repeat(250))));
    }

    #[test]
    fn length_counts_codepoints_not_bytes() {
        // Two codepoints, six bytes
        let raw = object(json!({ "name": "日本" }));
        let mut reader = FieldReader::new(&raw);
        assert_eq!(reader.string("name", Length::between(2, 2)), "日本");
        assert!(reader.finish().is_ok());
    }

    #[test]
    fn collects_every_violation() {
        let raw = object(json!({
            "name": "A",
            "rating": 9,
            "tags": [],
            "flag": "yes"
        }));
        let mut reader = FieldReader::new(&raw);
        reader.string("name", Length::between(2, 100));
        reader.string("missing", Length::at_least(1));
        reader.integer_in("rating", 1, 5, 5);
        reader.string_list("tags", 1);
        reader.flag("flag", false);

        let errors = reader.finish().unwrap_err();
        assert_eq!(errors.fields(), vec!["name", "missing", "rating", "tags", "flag"]);
        assert_eq!(errors.violations()[0].rule, Rule::MinLength { min: 2 });
        assert_eq!(errors.violations()[1].rule, Rule::Required);
        assert_eq!(errors.violations()[2].rule, Rule::Range { min: 1, max: 5 });
        assert_eq!(errors.violations()[3].rule, Rule::MinItems { min: 1 });
    }

    #[test]
    fn null_is_treated_as_absent() {
        let raw = object(json!({ "image": null, "published": null, "rating": null }));
        let mut reader = FieldReader::new(&raw);
        assert_eq!(reader.optional_string("image"), None);
        assert!(!reader.flag("published", false));
        assert_eq!(reader.integer_in("rating", 1, 5, 5), 5);
        assert!(reader.finish().is_ok());
    }

    #[test]
    fn non_integer_rating_is_rejected() {
        let raw = object(json!({ "rating": 4.5 }));
        let mut reader = FieldReader::new(&raw);
        reader.integer_in("rating", 1, 5, 5);

        let errors = reader.finish().unwrap_err();
        assert_eq!(
            errors.violations()[0].rule,
            Rule::InvalidType { expected: "an integer" }
        );
    }

    #[test]
    fn list_entries_must_be_strings() {
        let raw = object(json!({ "technologies": ["Rust", 3] }));
        let mut reader = FieldReader::new(&raw);
        let values = reader.string_list("technologies", 1);

        assert_eq!(values, vec!["Rust".to_string()]);
        let errors = reader.finish().unwrap_err();
        assert_eq!(errors.fields(), vec!["technologies[1]"]);
    }
}
