use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::documents::models::DocumentCategory;

/// Request DTO for emailing a notification about a registered document
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SendEmailDto {
    /// Id of the already-persisted document the mail is about
    #[serde(rename = "documentId")]
    pub document_id: i64,

    #[validate(
        length(min = 1, message = "recipient is required"),
        email(message = "recipient must be a valid email address")
    )]
    pub recipient: String,

    /// Optional subject override
    pub subject: Option<String>,

    /// Optional body override; the document details block is always appended
    pub body: Option<String>,

    /// Register the document lives in; defaults to entrada
    #[serde(default)]
    pub category: DocumentCategory,
}

/// Response DTO carrying the transport receipt
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmailReceiptDto {
    #[serde(rename = "documentId")]
    pub document_id: i64,
    pub recipient: String,
    /// SMTP reply code reported by the relay
    pub transport_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipient_must_be_an_email() {
        let dto = SendEmailDto {
            document_id: 1,
            recipient: "not-an-address".to_string(),
            subject: None,
            body: None,
            category: DocumentCategory::Entrada,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_category_defaults_to_entrada() {
        let dto: SendEmailDto = serde_json::from_str(
            r#"{"documentId": 7, "recipient": "a@b.com"}"#,
        )
        .unwrap();
        assert_eq!(dto.category, DocumentCategory::Entrada);
        assert_eq!(dto.document_id, 7);
    }
}
