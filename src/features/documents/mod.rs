//! Document register feature: incoming ("entrada") and outgoing ("salida")
//! correspondence records with optional attachments.
//!
//! One generic code path serves both registers; the mount point selects the
//! category (backing table + default estado).
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/documentos[-salida]` | List all documents of the register |
//! | GET | `/api/documentos[-salida]/{id}` | Get one document |
//! | POST | `/api/documentos[-salida]` | Register a document (JSON or multipart with `file`) |
//! | PUT | `/api/documentos[-salida]/{id}` | Full-record update |
//! | DELETE | `/api/documentos[-salida]/{id}` | Delete (idempotent) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use models::DocumentCategory;
pub use services::DocumentService;
