mod account;
mod board;
mod genre;
mod review;

pub use account::*;
pub use board::*;
pub use genre::*;
pub use review::*;
