pub mod domain;
pub mod validate;

pub use domain::*;
pub use validate::*;
