// =============================================================================
// DOCUMENT REGISTER ENUMERATIONS
// =============================================================================

/// Section/line codes a document can belong to
#[allow(dead_code)]
pub const TRAMOS: &[&str] = &["RBPM", "PMPA", "AIF"];

/// Accepted document classifications
#[allow(dead_code)]
pub const TIPOS_DOCUMENTO: &[&str] = &[
    "Ordinario", "Carta", "Nota", "Minuta", "Folio", "Resuel", "Correo", "Memo",
];

/// Organizational areas a document can be assigned to
pub const AREAS_RESPONSABLES: &[&str] = &[
    "Conservación",
    "Seguridad Vial",
    "Prevención",
    "Hitos",
    "Territorio",
    "Ambiental",
    "Proyectos",
    "AIF",
];

/// Every estado value a record may hold, across both registers
pub const ESTADOS: &[&str] = &["Pendiente", "En Proceso", "Atendido", "Cerrado", "Enviado"];

/// Default estado for newly registered incoming documents
pub const ESTADO_DEFAULT_ENTRADA: &str = "Pendiente";

/// Default estado for newly registered outgoing documents
pub const ESTADO_DEFAULT_SALIDA: &str = "Enviado";

/// Marker used in notification bodies when a record has no attachment
pub const ARCHIVO_NA: &str = "N/A";
