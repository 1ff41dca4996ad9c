//! Document register routes
//!
//! Both registers share one handler set; each mount point carries its
//! category in the router state.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::get,
    Router,
};

use crate::features::documents::dtos::MAX_FILE_SIZE;
use crate::features::documents::handlers::{
    create_document, delete_document, get_document, list_documents, update_document,
    DocumentsState,
};
use crate::features::documents::models::DocumentCategory;
use crate::features::documents::services::DocumentService;

/// Create routes for both document registers
pub fn routes(service: Arc<DocumentService>) -> Router {
    Router::new()
        .merge(category_routes(
            Arc::clone(&service),
            DocumentCategory::Entrada,
            "/api/documentos",
        ))
        .merge(category_routes(
            service,
            DocumentCategory::Salida,
            "/api/documentos-salida",
        ))
}

fn category_routes(
    service: Arc<DocumentService>,
    category: DocumentCategory,
    base: &str,
) -> Router {
    let state = DocumentsState { service, category };

    Router::new()
        .route(base, get(list_documents).post(create_document))
        .route(
            &format!("{}/{{id}}", base),
            get(get_document)
                .put(update_document)
                .delete(delete_document),
        )
        // Allow body size up to MAX_FILE_SIZE + buffer for multipart overhead
        .layer(DefaultBodyLimit::max(MAX_FILE_SIZE + 1024 * 1024))
        .with_state(state)
}
