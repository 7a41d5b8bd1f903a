/// Failure talking to one of the external services
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpstreamError {
    /// The service answered with a non-success status
    #[error("{status} {body}")]
    Unavailable { status: u16, body: String },
    /// The request never produced a response
    #[error("request failed: {0}")]
    Transport(String),
    /// The response arrived but could not be read
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
