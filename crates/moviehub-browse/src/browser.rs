use crate::highlight::contains_ci;
use crate::record::ListRecord;
use crate::state::BrowseState;

/// Searchable, paginated view over an in-memory board collection.
///
/// The browser borrows the records and keeps only UI state (term, page,
/// open record); the filtered view and page slice are recomputed from that
/// state on demand, so they are pure functions of (records, term, page,
/// page_size) with no hidden caches.
pub struct Browser<'a, R: ListRecord> {
    records: &'a [R],
    page_size: usize,
    state: BrowseState<R::Id>,
}

impl<'a, R: ListRecord> Browser<'a, R> {
    /// Page size is fixed for the browser's lifetime; zero is lifted to 1
    /// rather than rejected, this layer has no failure modes.
    pub fn new(records: &'a [R], page_size: usize) -> Self {
        Self {
            records,
            page_size: page_size.max(1),
            state: BrowseState::new(),
        }
    }

    pub fn search_term(&self) -> &str {
        &self.state.term
    }

    pub fn current_page(&self) -> usize {
        self.state.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Replace the active search term. Always re-evaluates from page 1 and
    /// closes any open record, even when the term is unchanged.
    pub fn set_search_term(&mut self, term: &str) {
        self.state = self.state.with_term(term);
    }

    /// Records matching the current term, in their original relative order.
    /// An empty term matches everything.
    pub fn filtered(&self) -> Vec<&'a R> {
        self.records
            .iter()
            .filter(|record| {
                self.state.term.is_empty()
                    || record
                        .search_fields()
                        .iter()
                        .any(|field| contains_ci(field, &self.state.term))
            })
            .collect()
    }

    /// `max(1, ceil(filtered / page_size))` - an empty view still has one
    /// (empty) page so pagination controls always have something to show.
    pub fn total_pages(&self) -> usize {
        self.filtered().len().div_ceil(self.page_size).max(1)
    }

    /// Move to page `n`; out-of-range requests are ignored.
    pub fn go_to_page(&mut self, n: usize) {
        self.state = self.state.with_page(n, self.total_pages());
    }

    /// The window of the filtered view shown for the current page.
    pub fn page_slice(&self) -> Vec<&'a R> {
        let filtered = self.filtered();
        // the page is kept in range by the transitions, but clamp before
        // indexing anyway
        let page = self.state.page.min(self.total_pages());
        let start = (page - 1) * self.page_size;
        filtered
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .collect()
    }

    /// Expand the record, collapsing any other; expanding the open record
    /// collapses it.
    pub fn toggle_open(&mut self, id: R::Id) {
        self.state = self.state.with_toggled(id);
    }

    /// The open record, only if it is visible in the current page slice;
    /// a stale open id reads as closed.
    pub fn open_record(&self) -> Option<&'a R> {
        let open = self.state.open?;
        self.page_slice()
            .into_iter()
            .find(|record| record.id() == open)
    }

    pub fn result_count(&self) -> usize {
        self.filtered().len()
    }

    pub fn is_empty(&self) -> bool {
        self.filtered().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        id: u64,
        title: String,
        content: String,
    }

    impl Row {
        fn new(id: u64, title: &str, content: &str) -> Self {
            Self {
                id,
                title: title.to_string(),
                content: content.to_string(),
            }
        }
    }

    impl ListRecord for Row {
        type Id = u64;

        fn id(&self) -> u64 {
            self.id
        }

        fn search_fields(&self) -> Vec<&str> {
            vec![&self.title, &self.content]
        }
    }

    fn sample(n: u64) -> Vec<Row> {
        (1..=n)
            .map(|i| Row::new(i, &format!("MovieHub notice {}", i), &format!("body {}", i)))
            .collect()
    }

    #[test]
    fn test_empty_term_is_identity() {
        let rows = sample(7);
        let browser = Browser::new(&rows, 10);
        assert_eq!(browser.filtered().len(), rows.len());
    }

    #[test]
    fn test_filtered_never_grows() {
        let rows = sample(7);
        let mut browser = Browser::new(&rows, 10);
        browser.set_search_term("notice 3");
        assert!(browser.filtered().len() <= rows.len());
        assert_eq!(browser.filtered().len(), 1);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let rows = sample(5);
        let mut upper = Browser::new(&rows, 10);
        let mut lower = Browser::new(&rows, 10);
        upper.set_search_term("NOTICE");
        lower.set_search_term("notice");

        let upper_ids: Vec<u64> = upper.filtered().iter().map(|r| r.id).collect();
        let lower_ids: Vec<u64> = lower.filtered().iter().map(|r| r.id).collect();
        assert_eq!(upper_ids, lower_ids);
        assert_eq!(upper_ids.len(), 5);
    }

    #[test]
    fn test_any_field_matches() {
        let rows = vec![
            Row::new(1, "title only hit", "plain"),
            Row::new(2, "plain", "content only hit"),
            Row::new(3, "plain", "plain"),
        ];
        let mut browser = Browser::new(&rows, 10);
        browser.set_search_term("hit");
        let ids: Vec<u64> = browser.filtered().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_filter_preserves_order() {
        let rows = sample(25);
        let mut browser = Browser::new(&rows, 10);
        browser.set_search_term("2");
        let ids: Vec<u64> = browser.filtered().iter().map(|r| r.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_pagination_two_pages_of_one() {
        let rows = vec![
            Row::new(1, "MovieHub notice A", ""),
            Row::new(2, "MovieHub notice B", ""),
        ];
        let mut browser = Browser::new(&rows, 1);

        assert_eq!(browser.total_pages(), 2);
        assert_eq!(browser.page_slice()[0].id, 1);

        browser.go_to_page(2);
        assert_eq!(browser.page_slice()[0].id, 2);
    }

    #[test]
    fn test_search_narrows_to_single_page() {
        let rows = vec![
            Row::new(1, "MovieHub notice A", ""),
            Row::new(2, "MovieHub notice B", ""),
        ];
        // note "B" alone would also hit the b in "MovieHub"
        let mut browser = Browser::new(&rows, 1);
        browser.set_search_term("notice B");

        assert_eq!(browser.total_pages(), 1);
        let slice = browser.page_slice();
        assert_eq!(slice.len(), 1);
        assert_eq!(slice[0].id, 2);
    }

    #[test]
    fn test_go_to_page_never_leaves_range() {
        let rows = sample(25);
        let mut browser = Browser::new(&rows, 10);
        assert_eq!(browser.total_pages(), 3);

        browser.go_to_page(0);
        assert_eq!(browser.current_page(), 1);
        browser.go_to_page(4);
        assert_eq!(browser.current_page(), 1);
        browser.go_to_page(3);
        assert_eq!(browser.current_page(), 3);
        assert_eq!(browser.page_slice().len(), 5);
    }

    #[test]
    fn test_term_change_resets_to_page_one() {
        let rows = sample(25);
        let mut browser = Browser::new(&rows, 10);
        browser.go_to_page(3);
        browser.set_search_term("notice");
        assert_eq!(browser.current_page(), 1);
    }

    #[test]
    fn test_zero_records() {
        let rows: Vec<Row> = vec![];
        let mut browser = Browser::new(&rows, 10);
        assert_eq!(browser.total_pages(), 1);
        assert!(browser.page_slice().is_empty());
        assert!(browser.is_empty());

        browser.set_search_term("anything");
        assert_eq!(browser.total_pages(), 1);
        assert!(browser.page_slice().is_empty());
    }

    #[test]
    fn test_no_match_keeps_collection() {
        let rows = sample(5);
        let mut browser = Browser::new(&rows, 10);
        browser.set_search_term("zzz no such row");
        assert!(browser.is_empty());
        assert_eq!(browser.total_pages(), 1);

        // clearing the term restores the full view
        browser.set_search_term("");
        assert_eq!(browser.result_count(), 5);
    }

    #[test]
    fn test_toggle_open_single_record() {
        let rows = sample(5);
        let mut browser = Browser::new(&rows, 10);

        browser.toggle_open(1);
        assert_eq!(browser.open_record().unwrap().id, 1);

        // opening another closes the first
        browser.toggle_open(2);
        assert_eq!(browser.open_record().unwrap().id, 2);

        // toggling the open record closes it
        browser.toggle_open(2);
        assert!(browser.open_record().is_none());
    }

    #[test]
    fn test_open_record_must_be_visible() {
        let rows = sample(25);
        let mut browser = Browser::new(&rows, 10);

        // record 15 lives on page 2; opening it while page 1 shows reads
        // as closed
        browser.toggle_open(15);
        assert!(browser.open_record().is_none());

        browser.go_to_page(2);
        // the page move itself collapsed the open record
        assert!(browser.open_record().is_none());

        browser.toggle_open(15);
        assert_eq!(browser.open_record().unwrap().id, 15);
    }

    #[test]
    fn test_open_cleared_by_search() {
        let rows = sample(5);
        let mut browser = Browser::new(&rows, 10);
        browser.toggle_open(3);
        browser.set_search_term("notice");
        assert!(browser.open_record().is_none());
    }

    #[test]
    fn test_zero_page_size_lifted_to_one() {
        let rows = sample(3);
        let browser = Browser::new(&rows, 0);
        assert_eq!(browser.page_size(), 1);
        assert_eq!(browser.total_pages(), 3);
    }
}
