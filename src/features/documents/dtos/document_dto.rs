use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::core::error::AppError;
use crate::shared::validation::{
    is_valid_area, is_valid_estado, parse_form_bool, parse_form_date,
};

/// Maximum attachment size in bytes (10MB)
pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

/// Request DTO for registering or replacing a document.
///
/// The same payload is used for create (POST) and full-record update (PUT);
/// `estado` is optional on create and defaulted per category, `archivo` may
/// carry a pasted external URL when no file is uploaded.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPayloadDto {
    #[validate(length(min = 1, message = "tramo is required"))]
    pub tramo: String,

    #[validate(length(min = 1, message = "tipoDocumento is required"))]
    pub tipo_documento: String,

    #[validate(length(min = 1, message = "nroDocumento is required"))]
    pub nro_documento: String,

    pub fecha_documento: Option<NaiveDate>,
    pub fecha_ingreso: Option<NaiveDate>,

    pub remitente: Option<String>,
    pub cargo_remitente: Option<String>,
    pub destinatario: Option<String>,
    pub cargo_destinatario: Option<String>,

    pub antecedentes_documento: Option<String>,
    pub materia_documento: Option<String>,

    #[validate(length(min = 1, message = "areaResponsable is required"))]
    pub area_responsable: String,

    #[serde(default)]
    pub instruye_respuesta: bool,

    pub registro_salida: Option<String>,
    pub registro_entrada: Option<String>,
    pub tipo_respuesta: Option<String>,
    pub fecha_respuesta: Option<NaiveDate>,
    pub remite: Option<String>,
    pub a: Option<String>,

    /// Register state; defaulted per category when absent on create
    pub estado: Option<String>,

    /// Pre-existing attachment URL (pasted external link). Ignored when an
    /// attachment binary is uploaded alongside the payload.
    pub archivo: Option<String>,
}

impl DocumentPayloadDto {
    /// Full boundary validation: required fields plus enumeration membership.
    ///
    /// Runs before any side effect of the create path.
    pub fn validate_payload(&self) -> Result<(), AppError> {
        self.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if !is_valid_area(&self.area_responsable) {
            return Err(AppError::Validation(format!(
                "areaResponsable '{}' is not a known area",
                self.area_responsable
            )));
        }

        if let Some(estado) = &self.estado {
            if !is_valid_estado(estado) {
                return Err(AppError::Validation(format!(
                    "estado '{}' is not a known register state",
                    estado
                )));
            }
        }

        Ok(())
    }

    /// Build a payload from multipart form text fields.
    ///
    /// Form submissions carry every value as a string (dates as YYYY-MM-DD,
    /// booleans as "true"/"false"); parsing into typed fields happens here,
    /// before any business logic runs. Blank fields map to None.
    pub fn from_form(fields: &HashMap<String, String>) -> Result<Self, AppError> {
        let text = |key: &str| -> Option<String> {
            fields
                .get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let date = |key: &str| -> Result<Option<NaiveDate>, AppError> {
            parse_form_date(key, fields.get(key).map(String::as_str).unwrap_or(""))
                .map_err(AppError::Validation)
        };

        Ok(Self {
            tramo: text("tramo").unwrap_or_default(),
            tipo_documento: text("tipoDocumento").unwrap_or_default(),
            nro_documento: text("nroDocumento").unwrap_or_default(),
            fecha_documento: date("fechaDocumento")?,
            fecha_ingreso: date("fechaIngreso")?,
            remitente: text("remitente"),
            cargo_remitente: text("cargoRemitente"),
            destinatario: text("destinatario"),
            cargo_destinatario: text("cargoDestinatario"),
            antecedentes_documento: text("antecedentesDocumento"),
            materia_documento: text("materiaDocumento"),
            area_responsable: text("areaResponsable").unwrap_or_default(),
            instruye_respuesta: parse_form_bool(
                "instruyeRespuesta",
                fields
                    .get("instruyeRespuesta")
                    .map(String::as_str)
                    .unwrap_or(""),
            )
            .map_err(AppError::Validation)?,
            registro_salida: text("registroSalida"),
            registro_entrada: text("registroEntrada"),
            tipo_respuesta: text("tipoRespuesta"),
            fecha_respuesta: date("fechaRespuesta")?,
            remite: text("remite"),
            a: text("a"),
            estado: text("estado"),
            archivo: text("archivo"),
        })
    }
}

/// Response DTO for a persisted document.
///
/// Field names match the wire format the register's clients expect:
/// camelCase for the document fields, snake_case timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DocumentResponseDto {
    pub id: i64,
    pub tramo: String,
    #[serde(rename = "tipoDocumento")]
    pub tipo_documento: String,
    #[serde(rename = "nroDocumento")]
    pub nro_documento: String,
    #[serde(rename = "fechaDocumento")]
    pub fecha_documento: Option<NaiveDate>,
    #[serde(rename = "fechaIngreso")]
    pub fecha_ingreso: Option<NaiveDate>,
    pub remitente: Option<String>,
    #[serde(rename = "cargoRemitente")]
    pub cargo_remitente: Option<String>,
    pub destinatario: Option<String>,
    #[serde(rename = "cargoDestinatario")]
    pub cargo_destinatario: Option<String>,
    #[serde(rename = "antecedentesDocumento")]
    pub antecedentes_documento: Option<String>,
    #[serde(rename = "materiaDocumento")]
    pub materia_documento: Option<String>,
    #[serde(rename = "areaResponsable")]
    pub area_responsable: String,
    #[serde(rename = "instruyeRespuesta")]
    pub instruye_respuesta: bool,
    #[serde(rename = "registroSalida")]
    pub registro_salida: Option<String>,
    #[serde(rename = "registroEntrada")]
    pub registro_entrada: Option<String>,
    #[serde(rename = "tipoRespuesta")]
    pub tipo_respuesta: Option<String>,
    #[serde(rename = "fechaRespuesta")]
    pub fecha_respuesta: Option<NaiveDate>,
    pub remite: Option<String>,
    pub a: Option<String>,
    pub estado: String,
    pub archivo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response DTO for delete operations
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteDocumentResponseDto {
    /// Number of rows removed; zero when the id did not exist
    pub deleted: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::name::en::Name;
    use fake::Fake;

    fn valid_payload() -> DocumentPayloadDto {
        DocumentPayloadDto {
            tramo: "RBPM".to_string(),
            tipo_documento: "Carta".to_string(),
            nro_documento: "123".to_string(),
            fecha_documento: NaiveDate::from_ymd_opt(2024, 1, 10),
            fecha_ingreso: NaiveDate::from_ymd_opt(2024, 1, 11),
            remitente: Some(Name().fake()),
            cargo_remitente: None,
            destinatario: None,
            cargo_destinatario: None,
            antecedentes_documento: None,
            materia_documento: None,
            area_responsable: "Conservación".to_string(),
            instruye_respuesta: false,
            registro_salida: None,
            registro_entrada: None,
            tipo_respuesta: None,
            fecha_respuesta: None,
            remite: None,
            a: None,
            estado: None,
            archivo: None,
        }
    }

    #[test]
    fn test_valid_payload_passes() {
        assert!(valid_payload().validate_payload().is_ok());
    }

    #[test]
    fn test_missing_required_field_rejected() {
        let mut dto = valid_payload();
        dto.tramo = String::new();
        assert!(matches!(
            dto.validate_payload(),
            Err(AppError::Validation(_))
        ));

        let mut dto = valid_payload();
        dto.nro_documento = String::new();
        assert!(dto.validate_payload().is_err());
    }

    #[test]
    fn test_unknown_estado_rejected() {
        let mut dto = valid_payload();
        dto.estado = Some("Archivado".to_string());
        assert!(matches!(
            dto.validate_payload(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_unknown_area_rejected() {
        let mut dto = valid_payload();
        dto.area_responsable = "Logística".to_string();
        assert!(dto.validate_payload().is_err());
    }

    #[test]
    fn test_json_payload_uses_camel_case() {
        let dto: DocumentPayloadDto = serde_json::from_str(
            r#"{
                "tramo": "RBPM",
                "tipoDocumento": "Carta",
                "nroDocumento": "123",
                "fechaDocumento": "2024-01-10",
                "areaResponsable": "Hitos",
                "instruyeRespuesta": true
            }"#,
        )
        .unwrap();

        assert_eq!(dto.tipo_documento, "Carta");
        assert_eq!(
            dto.fecha_documento,
            NaiveDate::from_ymd_opt(2024, 1, 10)
        );
        assert!(dto.instruye_respuesta);
        assert_eq!(dto.estado, None);
        assert_eq!(dto.archivo, None);
    }

    #[test]
    fn test_from_form_parses_typed_fields() {
        let mut fields = HashMap::new();
        fields.insert("tramo".to_string(), "PMPA".to_string());
        fields.insert("tipoDocumento".to_string(), "Memo".to_string());
        fields.insert("nroDocumento".to_string(), "456".to_string());
        fields.insert("areaResponsable".to_string(), "Ambiental".to_string());
        fields.insert("fechaIngreso".to_string(), "2024-03-05".to_string());
        fields.insert("instruyeRespuesta".to_string(), "true".to_string());
        fields.insert("remitente".to_string(), "  ".to_string());

        let dto = DocumentPayloadDto::from_form(&fields).unwrap();
        assert_eq!(dto.tramo, "PMPA");
        assert_eq!(dto.fecha_ingreso, NaiveDate::from_ymd_opt(2024, 3, 5));
        assert!(dto.instruye_respuesta);
        // blank form values are absent, never empty strings
        assert_eq!(dto.remitente, None);
        assert_eq!(dto.fecha_documento, None);
    }

    #[test]
    fn test_from_form_rejects_malformed_values() {
        let mut fields = HashMap::new();
        fields.insert("fechaIngreso".to_string(), "05/03/2024".to_string());
        assert!(DocumentPayloadDto::from_form(&fields).is_err());

        let mut fields = HashMap::new();
        fields.insert("instruyeRespuesta".to_string(), "Sí".to_string());
        assert!(DocumentPayloadDto::from_form(&fields).is_err());
    }

    #[test]
    fn test_response_wire_names() {
        let json = serde_json::to_value(DocumentResponseDto {
            id: 1,
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
            archivo: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
        .unwrap();

        assert!(json.get("tipoDocumento").is_some());
        assert!(json.get("areaResponsable").is_some());
        assert!(json.get("created_at").is_some());
        assert!(json.get("tipo_documento").is_none());
        assert!(json["archivo"].is_null());
    }
}
