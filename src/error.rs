// Error taxonomy for classification and host operations.
//
// Every failure surfaces to the caller that triggered it (construction,
// a direct acceptability check, or a content write). Nothing here is ever
// converted into a default verdict.

use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ModerationError {
    /// The request never produced a response (DNS, connect, TLS, body read).
    #[error("moderation request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("moderation API returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The body was not JSON, or had no numeric `prediction.0` score.
    #[error("malformed moderation response: {0}")]
    MalformedResponse(String),

    #[error("no fragment at index {0}")]
    UnknownFragment(usize),

    #[error("verdict store lock poisoned")]
    Poisoned,
}

impl ModerationError {
    /// Network failures and non-success statuses, as opposed to bad payloads.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Status { .. })
    }
}
