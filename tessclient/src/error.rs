use thiserror::Error;

#[derive(Error, Debug)]
pub enum OcrError {
    /// Caller supplied an invalid argument. Raised before the engine is touched.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Engine construction or configuration failed; the client stays uninitialized.
    #[error("Initialization error: {0}")]
    Initialization(String),

    /// A terminal operation was called without the state it needs (e.g. no image).
    #[error("Precondition failed: {0}")]
    Precondition(String),

    #[error("Engine error: {0}")]
    Engine(String),

    #[error("Release error: {0}")]
    Release(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

impl From<validator::ValidationErrors> for OcrError {
    fn from(errors: validator::ValidationErrors) -> Self {
        OcrError::Validation(errors.to_string())
    }
}

pub type Result<T> = std::result::Result<T, OcrError>;
