// Browse module - the shared board list state (notice / FAQ / Q&A)
// One generic component replaces the per-page copies of search + pagination
// + expand logic the boards would otherwise each carry.

mod browser;
mod highlight;
mod record;
mod state;

pub use browser::Browser;
pub use highlight::{contains_ci, highlight, MatchSpan};
pub use record::ListRecord;
pub use state::BrowseState;
