use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("http client error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("missing required parameter '{0}'")]
    MissingParameter(&'static str),
    #[error("invalid value '{value}' for parameter '{name}'")]
    InvalidParameter { name: &'static str, value: String },
    #[error("upstream request for '{key}' failed: {source}")]
    Upstream {
        key: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("credential bootstrap failed: {0}")]
    Bootstrap(String),
}

impl Error {
    /// HTTP status returned by the upstream API, when the failure carried one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Upstream { source, .. } => source.status(),
            _ => None,
        }
    }

    /// True when the caller supplied bad input and no network call was made.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::MissingParameter(_) | Error::InvalidParameter { .. }
        )
    }
}
