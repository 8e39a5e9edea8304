// NOTE: moviehub Architecture Rationale
//
// Why localStorage-style whole-document persistence?
// - The data model is a handful of small collections (members, reviews,
//   boards); whole-file JSON replacement keeps every write trivially atomic
//   from the command's point of view
// - No index, no migration story: the schema is whatever serde reads back
// - Trade-off: no partial updates, but commands are single-threaded
//   load -> transform -> save passes so nothing needs them
//
// Why one browse component for all three boards?
// - Notice, FAQ and Q&A are the same list with different fields; per-board
//   copies of search + pagination + expand state drift apart
// - The component is pure (records, term, page, page_size) -> view, so the
//   boards only differ in which fields they search and how a row renders
//
// Why is the catalog never cached locally?
// - Movie metadata is not ours; staleness bugs outlast any saved round trip
// - Only user-created data (accounts, reviews) lives in the data directory

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod presentation;

pub use args::{
    AccountCommand, AuthCommand, BoardCommand, Cli, Commands, MovieCommand, ReviewCommand,
};
pub use commands::run;
