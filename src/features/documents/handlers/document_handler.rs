use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{FromRequest, Multipart, Path, Request, State},
    http::{header, StatusCode},
    Json,
};
use tracing::debug;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::documents::dtos::{
    DeleteDocumentResponseDto, DocumentPayloadDto, DocumentResponseDto, MAX_FILE_SIZE,
};
use crate::features::documents::models::DocumentCategory;
use crate::features::documents::services::DocumentService;
use crate::modules::storage::UploadedFile;
use crate::shared::types::{ApiResponse, Meta};

/// Handler state: the shared service plus the register category the route
/// set was mounted for. One handler set serves both categories.
#[derive(Clone)]
pub struct DocumentsState {
    pub service: Arc<DocumentService>,
    pub category: DocumentCategory,
}

/// List all documents of the register
///
/// Mounted at `/api/documentos` (entrada) and `/api/documentos-salida`
/// (salida); annotated here for the entrada mount.
#[utoipa::path(
    get,
    path = "/api/documentos",
    responses(
        (status = 200, description = "All registered documents, ordered by id", body = ApiResponse<Vec<DocumentResponseDto>>),
        (status = 500, description = "Store unavailable")
    ),
    tag = "documentos"
)]
pub async fn list_documents(
    State(state): State<DocumentsState>,
) -> Result<Json<ApiResponse<Vec<DocumentResponseDto>>>> {
    let documents = state.service.list(state.category).await?;
    let total = documents.len() as i64;

    Ok(Json(ApiResponse::success(
        Some(documents),
        None,
        Some(Meta { total }),
    )))
}

/// Get a single document by id
#[utoipa::path(
    get,
    path = "/api/documentos/{id}",
    params(
        ("id" = i64, Path, description = "Document id")
    ),
    responses(
        (status = 200, description = "Document details", body = ApiResponse<DocumentResponseDto>),
        (status = 404, description = "Document not found")
    ),
    tag = "documentos"
)]
pub async fn get_document(
    State(state): State<DocumentsState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<DocumentResponseDto>>> {
    let document = state.service.get(state.category, id).await?;
    Ok(Json(ApiResponse::success(Some(document), None, None)))
}

/// Register a new document
///
/// Accepts either a JSON payload or multipart/form-data carrying the same
/// fields as text parts plus an optional `file` part. The payload is
/// validated before the attachment is written; a rejected request leaves no
/// file behind.
#[utoipa::path(
    post,
    path = "/api/documentos",
    request_body(
        content = DocumentPayloadDto,
        description = "Document fields; multipart/form-data with an optional `file` part is accepted as well",
    ),
    responses(
        (status = 201, description = "Document registered", body = ApiResponse<DocumentResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Store or attachment failure")
    ),
    tag = "documentos"
)]
pub async fn create_document(
    State(state): State<DocumentsState>,
    req: Request,
) -> Result<(StatusCode, Json<ApiResponse<DocumentResponseDto>>)> {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let (dto, attachment) = if content_type.starts_with("multipart/form-data") {
        let mut multipart = Multipart::from_request(req, &())
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        read_multipart_payload(&mut multipart).await?
    } else {
        let AppJson(dto) = AppJson::<DocumentPayloadDto>::from_request(req, &())
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.message()))?;
        (dto, None)
    };

    // Reject before any side effect; the attachment write happens inside
    // the service only for payloads that passed.
    dto.validate_payload()?;

    let document = state.service.create(state.category, dto, attachment).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(document),
            Some("Documento registrado correctamente".to_string()),
            None,
        )),
    ))
}

/// Replace a document's mutable fields
#[utoipa::path(
    put,
    path = "/api/documentos/{id}",
    params(
        ("id" = i64, Path, description = "Document id")
    ),
    request_body = DocumentPayloadDto,
    responses(
        (status = 200, description = "Document updated", body = ApiResponse<DocumentResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Document not found")
    ),
    tag = "documentos"
)]
pub async fn update_document(
    State(state): State<DocumentsState>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<DocumentPayloadDto>,
) -> Result<Json<ApiResponse<DocumentResponseDto>>> {
    dto.validate_payload()?;

    let document = state.service.update(state.category, id, dto).await?;

    Ok(Json(ApiResponse::success(
        Some(document),
        Some("Documento actualizado correctamente".to_string()),
        None,
    )))
}

/// Delete a document by id
///
/// Idempotent: deleting an id that does not exist reports zero rows
/// removed. The referenced attachment file is not deleted.
#[utoipa::path(
    delete,
    path = "/api/documentos/{id}",
    params(
        ("id" = i64, Path, description = "Document id")
    ),
    responses(
        (status = 200, description = "Delete confirmation", body = ApiResponse<DeleteDocumentResponseDto>)
    ),
    tag = "documentos"
)]
pub async fn delete_document(
    State(state): State<DocumentsState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<DeleteDocumentResponseDto>>> {
    let deleted = state.service.delete(state.category, id).await?;

    Ok(Json(ApiResponse::success(
        Some(DeleteDocumentResponseDto { deleted }),
        Some("Documento eliminado correctamente".to_string()),
        None,
    )))
}

/// Drain a multipart request into the typed payload and optional attachment
async fn read_multipart_payload(
    multipart: &mut Multipart,
) -> Result<(DocumentPayloadDto, Option<UploadedFile>)> {
    let mut fields: HashMap<String, String> = HashMap::new();
    let mut attachment: Option<UploadedFile> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "file" => {
                let content_type = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                let original_filename = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "archivo".to_string());

                let data = field.bytes().await.map_err(|e| {
                    debug!("Failed to read file bytes: {}", e);
                    AppError::BadRequest(format!("Failed to read file data: {}", e))
                })?;

                if data.len() > MAX_FILE_SIZE {
                    return Err(AppError::BadRequest(format!(
                        "File too large. Maximum size is {} bytes ({} MB)",
                        MAX_FILE_SIZE,
                        MAX_FILE_SIZE / 1024 / 1024
                    )));
                }

                attachment = Some(UploadedFile {
                    data: data.to_vec(),
                    original_filename,
                    content_type,
                });
            }
            "" => {
                debug!("Ignoring unnamed multipart field");
            }
            _ => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read field '{}': {}", field_name, e))
                })?;
                fields.insert(field_name, text);
            }
        }
    }

    let dto = DocumentPayloadDto::from_form(&fields)?;
    Ok((dto, attachment))
}
