/// Browse UI state: active search term, current page, open record.
///
/// The state is a small value with pure transitions; every mutation returns
/// a new state instead of toggling fields in place. The invariants live in
/// the transitions: a term change always restarts from page 1 and collapses
/// the open record, and a successful page move collapses it too.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseState<Id> {
    pub term: String,
    pub page: usize,
    pub open: Option<Id>,
}

impl<Id: Copy + PartialEq> BrowseState<Id> {
    pub fn new() -> Self {
        Self {
            term: String::new(),
            page: 1,
            open: None,
        }
    }

    /// Replace the search term: back to page 1, nothing open.
    pub fn with_term(&self, term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            page: 1,
            open: None,
        }
    }

    /// Move to page `n` if it exists; out-of-range requests leave the state
    /// untouched. A successful move closes the open record.
    pub fn with_page(&self, n: usize, total_pages: usize) -> Self {
        if n < 1 || n > total_pages {
            return self.clone();
        }
        Self {
            term: self.term.clone(),
            page: n,
            open: None,
        }
    }

    /// Toggle the open record: opening one closes any other, toggling the
    /// open one closes it. At most one record is ever open.
    pub fn with_toggled(&self, id: Id) -> Self {
        let open = if self.open == Some(id) { None } else { Some(id) };
        Self {
            term: self.term.clone(),
            page: self.page,
            open,
        }
    }
}

impl<Id: Copy + PartialEq> Default for BrowseState<Id> {
    fn default() -> Self {
        Self::new()
    }
}
