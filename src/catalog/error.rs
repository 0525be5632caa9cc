use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error(transparent)]
    Network(#[from] reqwest::Error),

    #[error("not found")]
    NotFound,

    #[error("Invalid feed URL: {0}")]
    InvalidUrl(String),

    #[error("server error: http status code: {status}, response {body}")]
    Server { status: u16, body: String },
}
