use thiserror::Error;

#[derive(Debug, Error)]
pub enum TwineError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Geometry error: {0}")]
    Geometry(String),
}

pub type Result<T> = std::result::Result<T, TwineError>;
