use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

use super::{CreateSchema, FieldReader, Length};
use crate::errors::ValidationErrors;

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

/// Testimonial input. There is no `approved` field: submissions always start
/// unapproved.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct CreateTestimonialRequest {
    #[schema(min_length = 2, max_length = 100)]
    pub name: String,
    #[schema(min_length = 2, max_length = 100)]
    pub position: String,
    #[schema(min_length = 2, max_length = 100)]
    pub company: String,
    #[schema(min_length = 10, max_length = 1000)]
    pub content: String,
    pub avatar: Option<String>,
    #[schema(minimum = 1, maximum = 5)]
    pub rating: i32,
}

impl CreateSchema for CreateTestimonialRequest {
    fn from_raw(raw: &Map<String, Value>) -> Result<Self, ValidationErrors> {
        let mut reader = FieldReader::new(raw);
        let name = reader.string("name", Length::between(2, 100));
        let position = reader.string("position", Length::between(2, 100));
        let company = reader.string("company", Length::between(2, 100));
        let content = reader.string("content", Length::between(10, 1000));
        let avatar = reader.optional_string("avatar");
        let rating = reader.integer_in("rating", MIN_RATING, MAX_RATING, MAX_RATING);
        reader.finish()?;

        Ok(Self {
            name,
            position,
            company,
            content,
            avatar,
            // Bounded to 1..=5 above
            rating: rating as i32,
        })
    }
}
