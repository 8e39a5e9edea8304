use std::fmt;

/// Result type for moviehub-catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the catalog layer
#[derive(Debug)]
pub enum Error {
    /// No API key configured
    MissingApiKey,

    /// Transport or decode failure from the HTTP client
    Http(reqwest::Error),

    /// The API answered with a non-success status
    Status { code: u16, path: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingApiKey => write!(
                f,
                "No metadata API key configured; set tmdb_api_key in config.toml"
            ),
            Error::Http(err) => write!(f, "Catalog request failed: {}", err),
            Error::Status { code, path } => {
                write!(f, "Catalog API returned HTTP {} for {}", code, path)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
            Error::MissingApiKey | Error::Status { .. } => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}
