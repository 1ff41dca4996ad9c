//! Storage module for attachment management
//!
//! Provides the local-disk storage client used for uploaded document
//! attachments, addressed by generated unique names and served read-only
//! under the `/files` URL prefix.

mod disk_client;

pub use disk_client::{DiskStorageClient, StoredFile, UploadedFile};
