use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::notifications::dtos::{EmailReceiptDto, SendEmailDto};
use crate::features::notifications::services::NotificationService;
use crate::shared::types::ApiResponse;

/// Email a notification about a registered document
///
/// The document must already be persisted; a transport failure is reported
/// as a distinct error and never affects the stored record.
#[utoipa::path(
    post,
    path = "/api/send-email",
    request_body = SendEmailDto,
    responses(
        (status = 200, description = "Notification handed to the mail relay", body = ApiResponse<EmailReceiptDto>),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Document not found"),
        (status = 502, description = "Mail transport failure")
    ),
    tag = "notifications"
)]
pub async fn send_email(
    State(service): State<Arc<NotificationService>>,
    AppJson(dto): AppJson<SendEmailDto>,
) -> Result<Json<ApiResponse<EmailReceiptDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let receipt = service.send_document_email(dto).await?;

    Ok(Json(ApiResponse::success(
        Some(receipt),
        Some("Notificación enviada correctamente".to_string()),
        None,
    )))
}
