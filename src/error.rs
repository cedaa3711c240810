use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

pub type ClientResult<T> = std::result::Result<T, ClientError>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ClientError {
    #[error("file not found: {}", path.display())]
    InputNotFound { path: PathBuf },
    #[error("IO error")]
    IO {
        #[from]
        source: std::io::Error,
    },
    #[error("malformed JSON")]
    Encoding {
        #[from]
        source: serde_json::Error,
    },
    /// The server answered with a status of 400 or above.
    #[error("{body}")]
    Server { status: StatusCode, body: String },
    #[error("request failed")]
    Transport {
        #[from]
        source: reqwest::Error,
    },
}
