use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

use super::{CreateSchema, FieldReader, Length};
use crate::errors::ValidationErrors;

#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct CreateProjectRequest {
    #[schema(min_length = 3, max_length = 200)]
    pub title: String,
    #[schema(min_length = 10, max_length = 1000)]
    pub description: String,
    #[schema(min_items = 1)]
    pub technologies: Vec<String>,
    #[schema(min_length = 2, max_length = 50)]
    pub category: String,
    pub image: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub featured: bool,
}

impl CreateSchema for CreateProjectRequest {
    fn from_raw(raw: &Map<String, Value>) -> Result<Self, ValidationErrors> {
        let mut reader = FieldReader::new(raw);
        let title = reader.string("title", Length::between(3, 200));
        let description = reader.string("description", Length::between(10, 1000));
        let technologies = reader.string_list("technologies", 1);
        let category = reader.string("category", Length::between(2, 50));
        let image = reader.optional_string("image");
        let github_url = reader.optional_string("github_url");
        let live_url = reader.optional_string("live_url");
        let featured = reader.flag("featured", false);
        reader.finish()?;

        Ok(Self {
            title,
            description,
            technologies,
            category,
            image,
            github_url,
            live_url,
            featured,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Rule;
    use serde_json::json;

    fn with_technologies(technologies: Value) -> Result<CreateProjectRequest, ValidationErrors> {
        let raw = json!({
            "title": "E-commerce Platform",
            "description": "Full-stack storefront with payments",
            "technologies": technologies,
            "category": "Web Development"
        });
        CreateProjectRequest::from_raw(raw.as_object().unwrap())
    }

    #[test]
    fn empty_technologies_is_rejected() {
        let errors = with_technologies(json!([])).unwrap_err();
        assert_eq!(errors.fields(), vec!["technologies"]);
        assert_eq!(errors.violations()[0].rule, Rule::MinItems { min: 1 });
    }

    #[test]
    fn single_technology_is_enough() {
        let request = with_technologies(json!(["Rust"])).unwrap();
        assert_eq!(request.technologies, vec!["Rust".to_string()]);
        assert!(!request.featured);
    }

    #[test]
    fn missing_technologies_is_required() {
        let raw = json!({
            "title": "E-commerce Platform",
            "description": "Full-stack storefront with payments",
            "category": "Web Development"
        });
        let errors = CreateProjectRequest::from_raw(raw.as_object().unwrap()).unwrap_err();
        assert_eq!(errors.violations()[0].rule, Rule::Required);
    }
}
