use thiserror::Error;

#[derive(Debug, Error)]
pub enum FontError {
    #[error("font format error: {0}")]
    Format(String),
    #[error("font not found: {0}")]
    FontNotFound(String),
    #[error("unknown character: {0:?}")]
    UnknownChar(char),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FontError>;
