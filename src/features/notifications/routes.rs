//! Notification routes

use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::notifications::handlers;
use crate::features::notifications::services::NotificationService;

/// Create routes for the notifications feature
pub fn routes(service: Arc<NotificationService>) -> Router {
    Router::new()
        .route("/api/send-email", post(handlers::send_email))
        .with_state(service)
}
