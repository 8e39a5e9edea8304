use anyhow::Result;

use moviehub_app::BoardService;
use moviehub_browse::{Browser, ListRecord};

use crate::args::BrowseArgs;
use crate::context::ExecutionContext;
use crate::presentation::ConsoleRenderer;
use crate::presentation::presenters::{present_faqs, present_notices, present_questions};
use crate::presentation::view_models::BoardListViewModel;
use crate::presentation::views::BoardListView;

#[derive(Debug, Clone, Copy)]
pub enum Board {
    Notice,
    Faq,
    Qna,
}

/// Apply the browse flags in their documented order: query first (resets
/// paging), then the page move, then the expand toggle.
fn build_browser<'a, R: ListRecord<Id = u64>>(
    records: &'a [R],
    page_size: usize,
    args: &BrowseArgs,
) -> Browser<'a, R> {
    let mut browser = Browser::new(records, page_size);
    if let Some(query) = &args.query {
        browser.set_search_term(query);
    }
    browser.go_to_page(args.page);
    if let Some(id) = args.open {
        browser.toggle_open(id);
    }
    browser
}

/// A board that fails to load renders as empty instead of erroring; the
/// failure still goes to stderr so it is not silent.
fn fail_soft<T>(result: moviehub_app::Result<Vec<T>>) -> Vec<T> {
    result.unwrap_or_else(|err| {
        eprintln!("Warning: {}", err);
        Vec::new()
    })
}

pub fn handle(ctx: &ExecutionContext, board: Board, args: BrowseArgs) -> Result<()> {
    let ws = ctx.workspace()?;
    let boards = BoardService::new(&ws);
    let page_size = boards.page_size();

    let vm: BoardListViewModel = match board {
        Board::Notice => {
            let records = fail_soft(boards.notices());
            present_notices(&build_browser(&records, page_size, &args))
        }
        Board::Faq => {
            let records = fail_soft(boards.faqs());
            present_faqs(&build_browser(&records, page_size, &args))
        }
        Board::Qna => {
            let records = fail_soft(boards.questions());
            present_questions(&build_browser(&records, page_size, &args))
        }
    };

    let renderer = ConsoleRenderer::new(ctx.format);
    renderer.render(&vm, &BoardListView::new(&vm, renderer.color()))
}
