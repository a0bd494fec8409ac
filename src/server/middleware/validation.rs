use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
};
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

use crate::errors::{ApiError, Rule, ValidationErrors};
use crate::schemas::{CreateSchema, QuerySchema};

/// JSON body read into a create schema.
///
/// Bodies that are not a JSON object are rejected as a single `body`
/// violation; otherwise every schema violation is reported together.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: CreateSchema + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|err| malformed("body", err))?;

        let raw = match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(raw)) => raw,
            Ok(_) => return Err(malformed("body", "expected a JSON object")),
            Err(err) => return Err(malformed("body", err)),
        };

        T::from_raw(&raw).map(ValidatedJson).map_err(|errors| {
            debug!("Rejected request body: {}", errors);
            ApiError::from(errors)
        })
    }
}

/// Query string read into a list-parameter schema.
#[derive(Debug)]
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: QuerySchema + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|err| malformed("query", err))?;

        T::from_query(&query).map(ValidatedQuery).map_err(|errors| {
            debug!("Rejected query parameters: {}", errors);
            ApiError::from(errors)
        })
    }
}

fn malformed(field: &str, cause: impl std::fmt::Display) -> ApiError {
    debug!("Malformed {}: {}", field, cause);
    ApiError::from(ValidationErrors::single(field, Rule::MalformedBody))
}
