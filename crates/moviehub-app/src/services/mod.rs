mod account;
mod auth;
mod board;
mod review;

pub use account::{AccountService, ProfileUpdate};
pub use auth::{AuthService, SignupInput};
pub use board::BoardService;
pub use review::{ReviewDraft, ReviewService};

/// Today's date in the display form every collection uses (YYYY-MM-DD).
pub(crate) fn today() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}
