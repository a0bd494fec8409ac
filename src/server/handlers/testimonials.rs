use axum::{extract::State, response::Json};
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

use crate::database::entities::testimonials;
use crate::errors::{ApiError, ApiResult};
use crate::schemas::CreateTestimonialRequest;
use crate::server::app::AppState;
use crate::server::middleware::ValidatedJson;

#[derive(Debug, Serialize, ToSchema)]
pub struct TestimonialList {
    pub testimonials: Vec<testimonials::Model>,
}

#[utoipa::path(
    get,
    path = "/api/testimonials",
    responses(
        (status = 200, description = "Approved testimonials", body = TestimonialList)
    )
)]
pub async fn list_testimonials(State(state): State<AppState>) -> ApiResult<Json<TestimonialList>> {
    let testimonials = state
        .testimonials
        .list_approved()
        .await
        .map_err(|err| ApiError::database("Failed to fetch testimonials", err))?;

    Ok(Json(TestimonialList { testimonials }))
}

#[utoipa::path(
    post,
    path = "/api/testimonials",
    request_body = CreateTestimonialRequest,
    responses(
        (status = 200, description = "Testimonial stored for review", body = crate::database::entities::testimonials::Model),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn submit_testimonial(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateTestimonialRequest>,
) -> ApiResult<Json<testimonials::Model>> {
    let testimonial = state
        .testimonials
        .submit(request)
        .await
        .map_err(|err| ApiError::database("Failed to submit testimonial", err))?;
    info!("Testimonial {} awaiting approval", testimonial.id);

    Ok(Json(testimonial))
}
