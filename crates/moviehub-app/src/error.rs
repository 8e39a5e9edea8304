use std::fmt;
use uuid::Uuid;

use moviehub_types::ValidationError;

/// Result type for moviehub-app operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the application layer
#[derive(Debug)]
pub enum Error {
    /// Storage layer failure (unreadable key, corrupt collection)
    Storage(anyhow::Error),

    /// Metadata API failure
    Catalog(moviehub_catalog::Error),

    /// A field failed form validation
    Validation(ValidationError),

    /// Configuration error
    Config(String),

    /// IO operation failed
    Io(std::io::Error),

    /// CSV export failed
    Csv(csv::Error),

    /// The command requires a signed-in member
    NotLoggedIn,

    /// Signup with an email that is already registered
    EmailTaken(String),

    /// Login with an unknown email or a wrong password
    InvalidCredentials,

    /// The session references an account that no longer exists
    AccountNotFound,

    /// No review with the given id
    ReviewNotFound(Uuid),

    /// Review mutation attempted by someone other than its author
    NotReviewAuthor,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Storage(err) => write!(f, "Storage error: {}", err),
            Error::Catalog(err) => write!(f, "{}", err),
            Error::Validation(err) => write!(f, "{}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Csv(err) => write!(f, "CSV error: {}", err),
            Error::NotLoggedIn => write!(f, "You must be logged in (run 'moviehub auth login')"),
            Error::EmailTaken(email) => write!(f, "Email {} is already registered", email),
            Error::InvalidCredentials => write!(f, "Unknown email or wrong password"),
            Error::AccountNotFound => write!(f, "Account no longer exists"),
            Error::ReviewNotFound(id) => write!(f, "No review with id {}", id),
            Error::NotReviewAuthor => write!(f, "Only the author can modify this review"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Storage(err) => Some(err.as_ref()),
            Error::Catalog(err) => Some(err),
            Error::Validation(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Csv(err) => Some(err),
            Error::Config(_)
            | Error::NotLoggedIn
            | Error::EmailTaken(_)
            | Error::InvalidCredentials
            | Error::AccountNotFound
            | Error::ReviewNotFound(_)
            | Error::NotReviewAuthor => None,
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Storage(err)
    }
}

impl From<moviehub_catalog::Error> for Error {
    fn from(err: moviehub_catalog::Error) -> Self {
        Error::Catalog(err)
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::Validation(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
