use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArrayError {
    #[error("NOT_ARRAY")]
    NotArray,

    #[error("INVALID_CHUNK_SIZE")]
    InvalidChunkSize,
}
