#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("could not reach the server: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded {status}: {body}")]
    Status { status: u16, body: String },

    #[error("{0}")]
    Rejected(String),

    #[error("unexpected response from server: {0}")]
    Malformed(String),
}

pub type ApiResult<T> = Result<T, ApiError>;
