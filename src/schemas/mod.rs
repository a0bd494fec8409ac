//! Entity schemas: the only input shapes accepted by write endpoints
//!
//! Each create schema is read from a raw JSON object with a [`FieldReader`],
//! so one pass reports every broken rule. Server-assigned fields (id,
//! timestamps, derived fields) are not part of any create schema; if a
//! caller sends them they are ignored.

pub mod blog;
pub mod contact;
pub mod fields;
pub mod params;
pub mod project;
pub mod testimonial;

use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::errors::ValidationErrors;

pub use blog::CreateBlogPostRequest;
pub use contact::CreateContactRequest;
pub use fields::{is_valid_email, FieldReader, Length};
pub use params::{BlogListParams, ProjectListParams};
pub use project::CreateProjectRequest;
pub use testimonial::CreateTestimonialRequest;

/// A typed, constraint-satisfying input built from a raw JSON object.
pub trait CreateSchema: Sized {
    fn from_raw(raw: &Map<String, Value>) -> Result<Self, ValidationErrors>;
}

/// Typed list parameters built from the raw query-string pairs.
pub trait QuerySchema: Sized {
    fn from_query(query: &HashMap<String, String>) -> Result<Self, ValidationErrors>;
}
