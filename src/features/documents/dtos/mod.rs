mod document_dto;

pub use document_dto::{
    DeleteDocumentResponseDto, DocumentPayloadDto, DocumentResponseDto, MAX_FILE_SIZE,
};
