use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The request never reached the server or the connection broke before
    /// a response came back. Carries no HTTP status.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered outside the success range. Displays the raw
    /// response body verbatim, or a generic phrase when the body is empty.
    #[error("{}", server_message(.status, .body))]
    Server { status: u16, body: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// HTTP status of a server-side failure. Transport failures have none;
    /// callers distinguish the two kinds only through this accessor.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

fn server_message(status: &u16, body: &str) -> String {
    if body.trim().is_empty() {
        format!("HTTP error! status: {status}")
    } else {
        body.to_string()
    }
}

pub type Result<T> = std::result::Result<T, Error>;
