//! Query-string parameters for the list endpoints
//!
//! Parameters arrive as raw strings so that a malformed value becomes a
//! validation failure in the same 422 shape as body errors.

use std::collections::HashMap;

use super::QuerySchema;
use crate::errors::{Rule, ValidationErrors};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PER_PAGE: u64 = 10;
pub const MAX_PER_PAGE: u64 = 50;

/// Largest row offset the store accepts; offsets bind as signed 64-bit
pub const MAX_OFFSET: u64 = i64::MAX as u64;

/// `category` for projects that means "no filter"
pub const ALL_CATEGORIES: &str = "All";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlogListParams {
    pub category: Option<String>,
    pub page: u64,
    pub per_page: u64,
}

impl Default for BlogListParams {
    fn default() -> Self {
        Self {
            category: None,
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl QuerySchema for BlogListParams {
    fn from_query(query: &HashMap<String, String>) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let category = non_empty(query.get("category"));
        let page = bounded_integer(query, "page", 1, None, DEFAULT_PAGE, &mut errors);
        let per_page = bounded_integer(
            query,
            "per_page",
            1,
            Some(MAX_PER_PAGE),
            DEFAULT_PER_PAGE,
            &mut errors,
        );

        let last_page = (MAX_OFFSET / per_page).saturating_add(1).min(MAX_OFFSET);
        if page > last_page {
            errors.push(
                "page",
                Rule::Range {
                    min: 1,
                    max: last_page as i64,
                },
            );
        }
        errors.into_result()?;

        Ok(Self {
            category,
            page,
            per_page,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectListParams {
    pub category: Option<String>,
    /// `None` leaves featured status unfiltered
    pub featured: Option<bool>,
}

impl QuerySchema for ProjectListParams {
    fn from_query(query: &HashMap<String, String>) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let category = non_empty(query.get("category")).filter(|c| c.as_str() != ALL_CATEGORIES);
        let featured = match query.get("featured") {
            None => None,
            Some(raw) => match parse_flag(raw) {
                Some(value) => Some(value),
                None => {
                    errors.push("featured", Rule::InvalidType { expected: "a boolean" });
                    None
                }
            },
        };
        errors.into_result()?;

        Ok(Self { category, featured })
    }
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.is_empty()).cloned()
}

fn bounded_integer(
    query: &HashMap<String, String>,
    field: &str,
    min: u64,
    max: Option<u64>,
    default: u64,
    errors: &mut ValidationErrors,
) -> u64 {
    let Some(raw) = query.get(field) else {
        return default;
    };
    let value = match raw.trim().parse::<i64>() {
        Ok(value) => value,
        Err(_) => {
            errors.push(field, Rule::InvalidType { expected: "an integer" });
            return default;
        }
    };

    let upper = max.map(|m| m as i64).unwrap_or(i64::MAX);
    if value < min as i64 || value > upper {
        errors.push(
            field,
            Rule::Range {
                min: min as i64,
                max: upper,
            },
        );
        return default;
    }
    value as u64
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
