use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::features::documents::dtos::DocumentResponseDto;
use crate::shared::constants::{ESTADO_DEFAULT_ENTRADA, ESTADO_DEFAULT_SALIDA};

/// Register category a document belongs to.
///
/// Both categories share one column set and one code path; the category
/// selects the backing table and the default estado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum DocumentCategory {
    #[default]
    Entrada,
    Salida,
}

impl DocumentCategory {
    pub fn table(&self) -> &'static str {
        match self {
            DocumentCategory::Entrada => "documentos_entrada",
            DocumentCategory::Salida => "documentos_salida",
        }
    }

    pub fn default_estado(&self) -> &'static str {
        match self {
            DocumentCategory::Entrada => ESTADO_DEFAULT_ENTRADA,
            DocumentCategory::Salida => ESTADO_DEFAULT_SALIDA,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentCategory::Entrada => "entrada",
            DocumentCategory::Salida => "salida",
        }
    }
}

/// Database model for a registered document
#[derive(Debug, Clone, FromRow)]
pub struct Document {
    pub id: i64,
    pub tramo: String,
    pub tipo_documento: String,
    pub nro_documento: String,
    pub fecha_documento: Option<NaiveDate>,
    pub fecha_ingreso: Option<NaiveDate>,
    pub remitente: Option<String>,
    pub cargo_remitente: Option<String>,
    pub destinatario: Option<String>,
    pub cargo_destinatario: Option<String>,
    pub antecedentes_documento: Option<String>,
    pub materia_documento: Option<String>,
    pub area_responsable: String,
    pub instruye_respuesta: bool,
    pub registro_salida: Option<String>,
    pub registro_entrada: Option<String>,
    pub tipo_respuesta: Option<String>,
    pub fecha_respuesta: Option<NaiveDate>,
    pub remite: Option<String>,
    pub a: Option<String>,
    pub estado: String,
    pub archivo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Document> for DocumentResponseDto {
    fn from(d: Document) -> Self {
        Self {
            id: d.id,
            tramo: d.tramo,
            tipo_documento: d.tipo_documento,
            nro_documento: d.nro_documento,
            fecha_documento: d.fecha_documento,
            fecha_ingreso: d.fecha_ingreso,
            remitente: d.remitente,
            cargo_remitente: d.cargo_remitente,
            destinatario: d.destinatario,
            cargo_destinatario: d.cargo_destinatario,
            antecedentes_documento: d.antecedentes_documento,
            materia_documento: d.materia_documento,
            area_responsable: d.area_responsable,
            instruye_respuesta: d.instruye_respuesta,
            registro_salida: d.registro_salida,
            registro_entrada: d.registro_entrada,
            tipo_respuesta: d.tipo_respuesta,
            fecha_respuesta: d.fecha_respuesta,
            remite: d.remite,
            a: d.a,
            estado: d.estado,
            archivo: d.archivo_url,
            created_at: d.created_at,
            updated_at: d.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_tables_and_defaults() {
        assert_eq!(DocumentCategory::Entrada.table(), "documentos_entrada");
        assert_eq!(DocumentCategory::Salida.table(), "documentos_salida");
        assert_eq!(DocumentCategory::Entrada.default_estado(), "Pendiente");
        assert_eq!(DocumentCategory::Salida.default_estado(), "Enviado");
    }

    #[test]
    fn test_category_deserializes_lowercase() {
        let c: DocumentCategory = serde_json::from_str("\"salida\"").unwrap();
        assert_eq!(c, DocumentCategory::Salida);
        assert_eq!(DocumentCategory::default(), DocumentCategory::Entrada);
    }
}
