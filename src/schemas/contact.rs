use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

use super::{CreateSchema, FieldReader, Length};
use crate::errors::ValidationErrors;

#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct CreateContactRequest {
    #[schema(min_length = 2, max_length = 100)]
    pub name: String,
    pub email: String,
    #[schema(min_length = 5, max_length = 200)]
    pub subject: String,
    #[schema(min_length = 10, max_length = 2000)]
    pub message: String,
}

impl CreateSchema for CreateContactRequest {
    fn from_raw(raw: &Map<String, Value>) -> Result<Self, ValidationErrors> {
        let mut reader = FieldReader::new(raw);
        let name = reader.string("name", Length::between(2, 100));
        let email = reader.email("email");
        let subject = reader.string("subject", Length::between(5, 200));
        let message = reader.string("message", Length::between(10, 2000));
        reader.finish()?;

        Ok(Self {
            name,
            email,
            subject,
            message,
        })
    }
}
