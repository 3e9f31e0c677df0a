use thiserror::Error;

/// Errors raised by GitHub API calls
#[derive(Error, Debug)]
pub enum GithubError {
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("Failed to read response from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid base64 content: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Content is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl GithubError {
    pub(crate) fn from_ureq(url: &str, err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(status, _) => GithubError::Status {
                url: url.to_string(),
                status,
            },
            ureq::Error::Transport(transport) => GithubError::Transport {
                url: url.to_string(),
                message: transport.to_string(),
            },
        }
    }
}
