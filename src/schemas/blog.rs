use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

use super::{CreateSchema, FieldReader, Length};
use crate::errors::ValidationErrors;

/// Blog post input. `read_time`, `date` and the timestamps are computed
/// server-side.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct CreateBlogPostRequest {
    #[schema(min_length = 5, max_length = 200)]
    pub title: String,
    #[schema(min_length = 10, max_length = 500)]
    pub excerpt: String,
    #[schema(min_length = 50)]
    pub content: String,
    #[schema(min_length = 2, max_length = 50)]
    pub category: String,
    pub image: Option<String>,
    pub published: bool,
}

impl CreateSchema for CreateBlogPostRequest {
    fn from_raw(raw: &Map<String, Value>) -> Result<Self, ValidationErrors> {
        let mut reader = FieldReader::new(raw);
        let title = reader.string("title", Length::between(5, 200));
        let excerpt = reader.string("excerpt", Length::between(10, 500));
        let content = reader.string("content", Length::at_least(50));
        let category = reader.string("category", Length::between(2, 50));
        let image = reader.optional_string("image");
        let published = reader.flag("published", false);
        reader.finish()?;

        Ok(Self {
            title,
            excerpt,
            content,
            category,
            image,
            published,
        })
    }
}
