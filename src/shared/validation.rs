use chrono::NaiveDate;

use crate::shared::constants::{AREAS_RESPONSABLES, ESTADOS};

/// Check that an estado is one of the enumerated register states
pub fn is_valid_estado(estado: &str) -> bool {
    ESTADOS.contains(&estado)
}

/// Check that an area belongs to the fixed organizational set
pub fn is_valid_area(area: &str) -> bool {
    AREAS_RESPONSABLES.contains(&area)
}

/// Parse a form-submitted date field.
///
/// Form values arrive as strings; an empty string means the field was left
/// blank and maps to None rather than an empty-string date.
pub fn parse_form_date(field: &str, value: &str) -> Result<Option<NaiveDate>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| format!("{} must be a date in YYYY-MM-DD format", field))
}

/// Parse a form-submitted boolean field (submitted as the literal strings
/// "true"/"false", or "1"/"0" from older clients).
pub fn parse_form_bool(field: &str, value: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" | "" => Ok(false),
        _ => Err(format!("{} must be \"true\" or \"false\"", field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estado_membership() {
        assert!(is_valid_estado("Pendiente"));
        assert!(is_valid_estado("En Proceso"));
        assert!(is_valid_estado("Atendido"));
        assert!(is_valid_estado("Cerrado"));
        assert!(is_valid_estado("Enviado"));

        assert!(!is_valid_estado("pendiente")); // case-sensitive
        assert!(!is_valid_estado("Archivado"));
        assert!(!is_valid_estado(""));
    }

    #[test]
    fn test_area_membership() {
        assert!(is_valid_area("Conservación"));
        assert!(is_valid_area("Seguridad Vial"));
        assert!(is_valid_area("AIF"));

        assert!(!is_valid_area("Logística"));
        assert!(!is_valid_area(""));
    }

    #[test]
    fn test_parse_form_date() {
        assert_eq!(
            parse_form_date("fechaDocumento", "2024-01-10").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 10)
        );
        assert_eq!(parse_form_date("fechaDocumento", "").unwrap(), None);
        assert_eq!(parse_form_date("fechaDocumento", "  ").unwrap(), None);
        assert!(parse_form_date("fechaDocumento", "10/01/2024").is_err());
        assert!(parse_form_date("fechaDocumento", "not-a-date").is_err());
    }

    #[test]
    fn test_parse_form_bool() {
        assert!(parse_form_bool("instruyeRespuesta", "true").unwrap());
        assert!(parse_form_bool("instruyeRespuesta", "TRUE").unwrap());
        assert!(parse_form_bool("instruyeRespuesta", "1").unwrap());
        assert!(!parse_form_bool("instruyeRespuesta", "false").unwrap());
        assert!(!parse_form_bool("instruyeRespuesta", "0").unwrap());
        assert!(!parse_form_bool("instruyeRespuesta", "").unwrap());
        assert!(parse_form_bool("instruyeRespuesta", "Sí").is_err());
    }
}
