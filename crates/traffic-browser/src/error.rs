use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Chrome not found: {0}")]
    NotFound(String),

    #[error("DevTools error: {0}")]
    DevTools(String),

    #[error("Failed to encode script: {0}")]
    Script(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<chromiumoxide::error::CdpError> for Error {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        Error::DevTools(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
