mod account;
mod board;
mod init;
mod movie;
mod review;

pub use account::{ProfileView, SessionView};
pub use board::BoardListView;
pub use init::InitView;
pub use movie::{MovieDetailView, MovieListView};
pub use review::ReviewListView;
