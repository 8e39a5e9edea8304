mod account;
mod board;
mod init;
mod movie;
mod review;

pub use account::{present_profile, present_session};
pub use board::{present_faqs, present_notices, present_questions};
pub use init::present_init;
pub use movie::{present_movie_detail, present_movie_list};
pub use review::{present_review, present_reviews};
