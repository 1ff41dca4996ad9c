//! Notification service: composes and sends mail about registered documents
//! via a pooled SMTP transport.
//!
//! Delivery is best-effort — a transport failure is reported to the caller
//! as its own error and never undoes the already-committed document.

use std::sync::Arc;

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

use crate::core::config::SmtpConfig;
use crate::core::error::{AppError, Result};
use crate::features::documents::dtos::DocumentResponseDto;
use crate::features::documents::services::DocumentService;
use crate::features::notifications::dtos::{EmailReceiptDto, SendEmailDto};
use crate::shared::constants::ARCHIVO_NA;

pub struct NotificationService {
    documents: Arc<DocumentService>,
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
}

impl NotificationService {
    pub fn new(documents: Arc<DocumentService>, config: &SmtpConfig) -> Result<Self> {
        let mailer = build_mailer(config)?;
        Ok(Self {
            documents,
            mailer,
            from: config.from.clone(),
        })
    }

    /// Email a notification about an already-registered document.
    ///
    /// The record is fetched first: an unknown id is a NotFound error and no
    /// mail is attempted.
    pub async fn send_document_email(&self, dto: SendEmailDto) -> Result<EmailReceiptDto> {
        let document = self.documents.get(dto.category, dto.document_id).await?;

        let from: Mailbox = self
            .from
            .parse()
            .map_err(|e| AppError::Internal(format!("Invalid SMTP_FROM address: {}", e)))?;
        let to: Mailbox = dto
            .recipient
            .parse()
            .map_err(|e| AppError::Validation(format!("Invalid recipient address: {}", e)))?;

        let subject = dto.subject.clone().unwrap_or_else(|| {
            format!(
                "Documento registrado: {} {}",
                document.tipo_documento, document.nro_documento
            )
        });

        let email = Message::builder()
            .from(from)
            .to(to)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(compose_body(&document, dto.body.as_deref()))
            .map_err(|e| AppError::Internal(format!("Failed to build message: {}", e)))?;

        let response = self
            .mailer
            .send(email)
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        info!(
            "Notification sent: document_id={}, recipient={}",
            document.id, dto.recipient
        );

        Ok(EmailReceiptDto {
            document_id: document.id,
            recipient: dto.recipient,
            transport_code: response.code().to_string(),
        })
    }
}

fn build_mailer(config: &SmtpConfig) -> Result<AsyncSmtpTransport<Tokio1Executor>> {
    let builder = if config.starttls {
        AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| AppError::Internal(format!("Invalid SMTP relay {}: {}", config.host, e)))?
    } else {
        AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
    };

    let builder = builder.port(config.port);
    let builder = match (&config.username, &config.password) {
        (Some(user), Some(pass)) => {
            builder.credentials(Credentials::new(user.clone(), pass.clone()))
        }
        _ => builder,
    };

    Ok(builder.build())
}

/// Deterministic notification body: the override (or a stock intro) followed
/// by the document details block with tramo, number and attachment URL.
fn compose_body(document: &DocumentResponseDto, override_body: Option<&str>) -> String {
    let intro = override_body
        .unwrap_or("Se ha registrado un nuevo documento en el gestor documental.");
    let archivo = document.archivo.as_deref().unwrap_or(ARCHIVO_NA);

    format!(
        "{}\n\nTramo: {}\nDocumento: {} {}\nArchivo: {}\n",
        intro, document.tramo, document.tipo_documento, document.nro_documento, archivo
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_document(archivo: Option<&str>) -> DocumentResponseDto {
        DocumentResponseDto {
            id: 42,
            tramo: "RBPM".to_string(),
            tipo_documento: "Carta".to_string(),
            nro_documento: "123".to_string(),
            fecha_documento: None,
            fecha_ingreso: None,
            remitente: None,
            cargo_remitente: None,
            destinatario: None,
            cargo_destinatario: None,
            antecedentes_documento: None,
            materia_documento: None,
            area_responsable: "Hitos".to_string(),
            instruye_respuesta: false,
            registro_salida: None,
            registro_entrada: None,
            tipo_respuesta: None,
            fecha_respuesta: None,
            remite: None,
            a: None,
            estado: "Pendiente".to_string(),
            archivo: archivo.map(str::to_string),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_body_embeds_tramo_number_and_attachment() {
        let body = compose_body(
            &sample_document(Some("http://localhost:3000/files/1700000000000-carta.pdf")),
            None,
        );
        assert!(body.contains("RBPM"));
        assert!(body.contains("Carta 123"));
        assert!(body.contains("/files/1700000000000-carta.pdf"));
    }

    #[test]
    fn test_body_marks_missing_attachment() {
        let body = compose_body(&sample_document(None), None);
        assert!(body.contains("Archivo: N/A"));
    }

    #[test]
    fn test_body_override_keeps_details_block() {
        let body = compose_body(
            &sample_document(None),
            Some("Por favor revise y asigne responsabilidades."),
        );
        assert!(body.starts_with("Por favor revise"));
        // the details block survives an override
        assert!(body.contains("Tramo: RBPM"));
        assert!(body.contains("Documento: Carta 123"));
    }
}
