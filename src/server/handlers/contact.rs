use axum::{extract::State, response::Json};
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

use crate::database::entities::contacts;
use crate::errors::{ApiError, ApiResult};
use crate::schemas::CreateContactRequest;
use crate::server::app::AppState;
use crate::server::middleware::ValidatedJson;
use crate::services::ContactNotification;

pub const DELIVERED_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";
pub const UNDELIVERED_MESSAGE: &str =
    "Thank you for your message! It was received, but the email notification could not be delivered.";

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    pub id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactList {
    pub contacts: Vec<contacts::Model>,
}

/// Stores the submission, then attempts the owner notification. A failed
/// notification only changes the message; the stored record stays.
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = CreateContactRequest,
    responses(
        (status = 200, description = "Submission stored", body = ContactResponse),
        (status = 422, description = "Validation failed"),
        (status = 500, description = "Submission could not be stored")
    )
)]
pub async fn submit_contact(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateContactRequest>,
) -> ApiResult<Json<ContactResponse>> {
    let notification = ContactNotification {
        name: request.name.clone(),
        email: request.email.clone(),
        subject: request.subject.clone(),
        message: request.message.clone(),
    };

    let contact = state
        .contacts
        .create(request)
        .await
        .map_err(|err| ApiError::database("Failed to submit contact form", err))?;
    info!("Stored contact submission {}", contact.id);

    let delivery = state.notifier.notify(&notification).await;
    let message = if delivery.is_delivered() {
        DELIVERED_MESSAGE
    } else {
        UNDELIVERED_MESSAGE
    };

    Ok(Json(ContactResponse {
        success: true,
        message: message.to_string(),
        id: contact.id,
    }))
}

#[utoipa::path(
    get,
    path = "/api/contact",
    responses(
        (status = 200, description = "Most recent submissions", body = ContactList)
    )
)]
pub async fn list_contacts(State(state): State<AppState>) -> ApiResult<Json<ContactList>> {
    let contacts = state
        .contacts
        .list()
        .await
        .map_err(|err| ApiError::database("Failed to fetch contacts", err))?;

    Ok(Json(ContactList { contacts }))
}
