use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Field-level validation failure, named after the offending field.
///
/// The rules here are the form rules the application enforces everywhere a
/// field is accepted (signup, login, profile edit, password change, review
/// submission). Callers surface the message to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Email is empty or not of the form local@domain.tld
    Email(String),
    /// Phone is not a 010-XXXX-XXXX mobile number
    Phone(String),
    /// Login password shorter than the minimum
    PasswordTooShort { min: usize },
    /// New password equals the current one
    PasswordUnchanged,
    /// New password and its confirmation differ
    PasswordMismatch,
    /// Display name outside the allowed length range
    NameLength { min: usize, max: usize },
    /// Review content empty after trimming
    ContentEmpty,
    /// Review content longer than the maximum
    ContentTooLong { max: usize },
    /// Rating outside 0..=5
    RatingOutOfRange(u8),
    /// More genres selected than allowed
    TooManyGenres { max: usize },
    /// A genre appears in both the favorite and unfavorite lists
    GenreOverlap(u32),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Email(value) => write!(f, "invalid email address: {}", value),
            ValidationError::Phone(value) => write!(f, "invalid phone number: {}", value),
            ValidationError::PasswordTooShort { min } => {
                write!(f, "password must be at least {} characters", min)
            }
            ValidationError::PasswordUnchanged => {
                write!(f, "new password must differ from the current one")
            }
            ValidationError::PasswordMismatch => {
                write!(f, "password confirmation does not match")
            }
            ValidationError::NameLength { min, max } => {
                write!(f, "name must be {}-{} characters", min, max)
            }
            ValidationError::ContentEmpty => write!(f, "content must not be empty"),
            ValidationError::ContentTooLong { max } => {
                write!(f, "content exceeds the {} character limit", max)
            }
            ValidationError::RatingOutOfRange(value) => {
                write!(f, "rating must be between 0 and 5, got {}", value)
            }
            ValidationError::TooManyGenres { max } => {
                write!(f, "at most {} genres can be selected", max)
            }
            ValidationError::GenreOverlap(id) => {
                write!(f, "genre {} is both favorite and unfavorite", id)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Minimum login password length
pub const MIN_LOGIN_PASSWORD: usize = 4;
/// Minimum account password length (password change flow)
pub const MIN_ACCOUNT_PASSWORD: usize = 8;
/// Display name bounds
pub const NAME_MIN: usize = 2;
pub const NAME_MAX: usize = 20;
/// Review content character limit
pub const REVIEW_MAX_CHARS: usize = 1000;
/// Genre selection cap per preference list
pub const MAX_GENRE_SELECTION: usize = 3;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^010-\d{3,4}-\d{4}$").expect("valid phone pattern"));

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::Email(email.to_string()))
    }
}

pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if PHONE_RE.is_match(phone) {
        Ok(())
    } else {
        Err(ValidationError::Phone(phone.to_string()))
    }
}

pub fn validate_login_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_LOGIN_PASSWORD {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_LOGIN_PASSWORD,
        });
    }
    Ok(())
}

/// Rules for the password-change flow: longer minimum than login,
/// must actually change, confirmation must match.
pub fn validate_password_change(
    current: &str,
    new: &str,
    confirm: &str,
) -> Result<(), ValidationError> {
    if new.chars().count() < MIN_ACCOUNT_PASSWORD {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_ACCOUNT_PASSWORD,
        });
    }
    if new == current {
        return Err(ValidationError::PasswordUnchanged);
    }
    if new != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let len = name.chars().count();
    if len < NAME_MIN || len > NAME_MAX {
        return Err(ValidationError::NameLength {
            min: NAME_MIN,
            max: NAME_MAX,
        });
    }
    Ok(())
}

pub fn validate_review_content(content: &str) -> Result<(), ValidationError> {
    if content.trim().is_empty() {
        return Err(ValidationError::ContentEmpty);
    }
    if content.chars().count() > REVIEW_MAX_CHARS {
        return Err(ValidationError::ContentTooLong {
            max: REVIEW_MAX_CHARS,
        });
    }
    Ok(())
}

pub fn validate_rating(rating: u8) -> Result<(), ValidationError> {
    if rating > 5 {
        return Err(ValidationError::RatingOutOfRange(rating));
    }
    Ok(())
}

/// Genre preference lists: each capped, and disjoint from one another.
pub fn validate_genre_selection(favorite: &[u32], unfavorite: &[u32]) -> Result<(), ValidationError> {
    if favorite.len() > MAX_GENRE_SELECTION || unfavorite.len() > MAX_GENRE_SELECTION {
        return Err(ValidationError::TooManyGenres {
            max: MAX_GENRE_SELECTION,
        });
    }
    if let Some(id) = favorite.iter().copied().find(|id| unfavorite.contains(id)) {
        return Err(ValidationError::GenreOverlap(id));
    }
    Ok(())
}
