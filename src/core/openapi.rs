use utoipa::{Modify, OpenApi};

use crate::features::documents::{
    dtos as documents_dtos, handlers as documents_handlers, models as documents_models,
};
use crate::features::notifications::{
    dtos as notifications_dtos, handlers as notifications_handlers,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Documents (entrada mount; the salida register mirrors these under /api/documentos-salida)
        documents_handlers::list_documents,
        documents_handlers::get_document,
        documents_handlers::create_document,
        documents_handlers::update_document,
        documents_handlers::delete_document,
        // Notifications
        notifications_handlers::send_email,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Documents
            documents_models::DocumentCategory,
            documents_dtos::DocumentPayloadDto,
            documents_dtos::DocumentResponseDto,
            documents_dtos::DeleteDocumentResponseDto,
            ApiResponse<Vec<documents_dtos::DocumentResponseDto>>,
            ApiResponse<documents_dtos::DocumentResponseDto>,
            ApiResponse<documents_dtos::DeleteDocumentResponseDto>,
            // Notifications
            notifications_dtos::SendEmailDto,
            notifications_dtos::EmailReceiptDto,
            ApiResponse<notifications_dtos::EmailReceiptDto>,
        )
    ),
    tags(
        (name = "documentos", description = "Incoming and outgoing document registers"),
        (name = "notifications", description = "Email notifications about registered documents"),
    ),
    info(
        title = "Gestor Documental API",
        version = "0.1.0",
        description = "API documentation for Gestor Documental",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
