use moviehub_types::{FaqEntry, NoticeEntry, QnaEntry};

use crate::Result;
use crate::workspace::Workspace;

// The `ListRecord` impls for these board types live in moviehub-types (the
// crate that owns the types), as the orphan rule requires.

/// Board collections plus the page size their lists render with.
pub struct BoardService<'a> {
    ws: &'a Workspace,
}

impl<'a> BoardService<'a> {
    pub fn new(ws: &'a Workspace) -> Self {
        Self { ws }
    }

    pub fn page_size(&self) -> usize {
        self.ws.config().page_size
    }

    pub fn notices(&self) -> Result<Vec<NoticeEntry>> {
        self.ws.notices()
    }

    pub fn faqs(&self) -> Result<Vec<FaqEntry>> {
        self.ws.faqs()
    }

    pub fn questions(&self) -> Result<Vec<QnaEntry>> {
        self.ws.questions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moviehub_browse::Browser;
    use tempfile::TempDir;

    #[test]
    fn test_notices_browse_end_to_end() {
        let dir = TempDir::new().unwrap();
        let ws = Workspace::open(dir.path()).unwrap();
        let boards = BoardService::new(&ws);

        let notices = boards.notices().unwrap();
        let mut browser = Browser::new(&notices, boards.page_size());

        // seeded board paginates at the default page size
        assert!(browser.total_pages() > 1);
        assert_eq!(browser.page_slice().len(), 10);

        browser.set_search_term("maintenance");
        assert_eq!(browser.result_count(), 1);
        assert_eq!(browser.total_pages(), 1);
    }

    #[test]
    fn test_faq_search_covers_answers() {
        let dir = TempDir::new().unwrap();
        let ws = Workspace::open(dir.path()).unwrap();
        let boards = BoardService::new(&ws);

        let faqs = boards.faqs().unwrap();
        let mut browser = Browser::new(&faqs, boards.page_size());

        // "tmdb_api_key" only appears in an answer, not a question
        browser.set_search_term("tmdb_api_key");
        assert_eq!(browser.result_count(), 1);
    }
}
