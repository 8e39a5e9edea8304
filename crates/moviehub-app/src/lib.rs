// App module - wires storage, config and the metadata client into the
// services the CLI drives. Every command is a single-threaded
// load -> transform -> save pass over whole JSON collections; the storage
// contract has no partial update path.

pub mod config;
pub mod error;
pub mod keys;
pub mod seed;
pub mod services;
pub mod workspace;

pub use config::{Config, resolve_data_path};
pub use error::{Error, Result};
pub use services::{
    AccountService, AuthService, BoardService, ProfileUpdate, ReviewDraft, ReviewService,
    SignupInput,
};
pub use workspace::{InitReport, Workspace};
