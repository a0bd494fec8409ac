use axum::response::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiStatus {
    pub message: String,
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/api/",
    responses(
        (status = 200, description = "API is up", body = ApiStatus)
    )
)]
pub async fn api_status() -> Json<ApiStatus> {
    Json(ApiStatus {
        message: "Portfolio API".to_string(),
        status: "active".to_string(),
    })
}
