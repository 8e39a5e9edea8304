use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::formatters::spans;
use crate::presentation::view_models::BoardListViewModel;

pub struct BoardListView<'a> {
    vm: &'a BoardListViewModel,
    color: bool,
}

impl<'a> BoardListView<'a> {
    pub fn new(vm: &'a BoardListViewModel, color: bool) -> Self {
        Self { vm, color }
    }

    fn heading(&self) -> &'static str {
        match self.vm.board.as_str() {
            "notices" => "Notices",
            "faq" => "FAQ",
            "qna" => "Q&A",
            _ => "Board",
        }
    }
}

impl fmt::Display for BoardListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading())?;

        if self.vm.rows.is_empty() {
            if self.vm.search_term.is_empty() {
                writeln!(f, "No results.")?;
            } else {
                writeln!(f, "No results for \"{}\".", self.vm.search_term)?;
            }
            return Ok(());
        }

        for row in &self.vm.rows {
            let id = format!("{:>4}", row.id);
            let title = spans::styled(&row.title, self.color);

            let mut tail = row.date.clone();
            if let Some(author) = &row.author {
                tail = format!("{}  by {}", tail, author);
            }
            if let Some(views) = row.views
                && views > 0
            {
                tail = format!("{}  {} views", tail, views);
            }

            if self.color {
                writeln!(f, "{}  {}  {}", id.yellow(), title, tail.bright_black())?;
            } else {
                writeln!(f, "{}  {}  {}", id, title, tail)?;
            }

            if let Some(content) = &row.content {
                writeln!(f, "      {}", spans::styled(content, self.color))?;
            }
        }

        writeln!(
            f,
            "page {}/{} ({} results)",
            self.vm.page, self.vm.total_pages, self.vm.result_count
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_notices;
    use moviehub_browse::Browser;
    use moviehub_types::NoticeEntry;

    fn notices() -> Vec<NoticeEntry> {
        vec![
            NoticeEntry {
                id: 1,
                title: "MovieHub notice A".to_string(),
                content: "first content".to_string(),
                date: "2026-01-05".to_string(),
                views: 0,
            },
            NoticeEntry {
                id: 2,
                title: "MovieHub notice B".to_string(),
                content: "second content".to_string(),
                date: "2026-01-16".to_string(),
                views: 0,
            },
        ]
    }

    #[test]
    fn test_plain_list_rendering() {
        let records = notices();
        let mut browser = Browser::new(&records, 10);
        browser.toggle_open(2);

        let vm = present_notices(&browser);
        let rendered = BoardListView::new(&vm, false).to_string();

        insta::assert_snapshot!(rendered, @r#"
Notices
   1  MovieHub notice A  2026-01-05
   2  MovieHub notice B  2026-01-16
      second content
page 1/1 (2 results)
"#);
    }

    #[test]
    fn test_empty_state_names_the_term() {
        let records = notices();
        let mut browser = Browser::new(&records, 10);
        browser.set_search_term("zzz");

        let vm = present_notices(&browser);
        let rendered = BoardListView::new(&vm, false).to_string();

        assert!(rendered.contains("No results for \"zzz\"."));
        assert!(!rendered.contains("page"));
    }

    #[test]
    fn test_colored_rendering_highlights_hits() {
        let records = notices();
        let mut browser = Browser::new(&records, 10);
        browser.set_search_term("notice");

        let vm = present_notices(&browser);
        let rendered = BoardListView::new(&vm, true).to_string();
        assert!(rendered.contains("\u{1b}["));
    }
}
