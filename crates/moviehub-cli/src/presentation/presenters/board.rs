use moviehub_browse::{Browser, ListRecord, highlight};
use moviehub_types::{FaqEntry, NoticeEntry, QnaEntry};

use crate::presentation::view_models::{BoardListViewModel, BoardRowViewModel};

fn shell<R: ListRecord>(board: &str, browser: &Browser<'_, R>) -> BoardListViewModel {
    BoardListViewModel {
        board: board.to_string(),
        search_term: browser.search_term().to_string(),
        page: browser.current_page(),
        total_pages: browser.total_pages(),
        result_count: browser.result_count(),
        page_size: browser.page_size(),
        rows: Vec::new(),
    }
}

pub fn present_notices(browser: &Browser<'_, NoticeEntry>) -> BoardListViewModel {
    let term = browser.search_term().to_string();
    let open_id = browser.open_record().map(|record| record.id);

    let mut vm = shell("notices", browser);
    vm.rows = browser
        .page_slice()
        .into_iter()
        .map(|notice| {
            let open = open_id == Some(notice.id);
            BoardRowViewModel {
                id: notice.id,
                title: highlight(&notice.title, &term),
                date: notice.date.clone(),
                author: None,
                views: Some(notice.views),
                open,
                content: open.then(|| highlight(&notice.content, &term)),
            }
        })
        .collect();
    vm
}

pub fn present_faqs(browser: &Browser<'_, FaqEntry>) -> BoardListViewModel {
    let term = browser.search_term().to_string();
    let open_id = browser.open_record().map(|record| record.id);

    let mut vm = shell("faq", browser);
    vm.rows = browser
        .page_slice()
        .into_iter()
        .map(|faq| {
            let open = open_id == Some(faq.id);
            BoardRowViewModel {
                id: faq.id,
                title: highlight(&faq.question, &term),
                date: faq.date.clone(),
                author: None,
                views: None,
                open,
                content: open.then(|| highlight(&faq.answer, &term)),
            }
        })
        .collect();
    vm
}

pub fn present_questions(browser: &Browser<'_, QnaEntry>) -> BoardListViewModel {
    let term = browser.search_term().to_string();
    let open_id = browser.open_record().map(|record| record.id);

    let mut vm = shell("qna", browser);
    vm.rows = browser
        .page_slice()
        .into_iter()
        .map(|question| {
            let open = open_id == Some(question.id);
            BoardRowViewModel {
                id: question.id,
                title: highlight(&question.title, &term),
                date: question.date.clone(),
                author: Some(question.author_name.clone()),
                views: None,
                open,
                content: open.then(|| highlight(&question.content, &term)),
            }
        })
        .collect();
    vm
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notices() -> Vec<NoticeEntry> {
        (1..=3)
            .map(|id| NoticeEntry {
                id,
                title: format!("MovieHub notice {}", id),
                content: format!("content {}", id),
                date: "2026-01-05".to_string(),
                views: 0,
            })
            .collect()
    }

    #[test]
    fn test_counts_reflect_browse_state() {
        let records = notices();
        let mut browser = Browser::new(&records, 2);
        browser.set_search_term("notice");

        let vm = present_notices(&browser);
        assert_eq!(vm.board, "notices");
        assert_eq!(vm.search_term, "notice");
        assert_eq!(vm.page, 1);
        assert_eq!(vm.total_pages, 2);
        assert_eq!(vm.result_count, 3);
        assert_eq!(vm.rows.len(), 2);
    }

    #[test]
    fn test_only_open_row_carries_content() {
        let records = notices();
        let mut browser = Browser::new(&records, 10);
        browser.toggle_open(2);

        let vm = present_notices(&browser);
        let open_rows: Vec<_> = vm.rows.iter().filter(|row| row.open).collect();
        assert_eq!(open_rows.len(), 1);
        assert_eq!(open_rows[0].id, 2);
        assert!(open_rows[0].content.is_some());
        assert!(vm.rows.iter().filter(|row| !row.open).all(|row| row.content.is_none()));
    }

    #[test]
    fn test_title_spans_mark_hits() {
        let records = notices();
        let mut browser = Browser::new(&records, 10);
        browser.set_search_term("moviehub");

        let vm = present_notices(&browser);
        assert!(vm.rows[0].title.iter().any(|span| span.matched));
    }
}
