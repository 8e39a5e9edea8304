use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::formatters::{stars, text};
use crate::presentation::view_models::{ReviewListViewModel, ReviewViewModel};

/// Shared row rendering for every place reviews show up (own list, movie
/// detail page).
pub(super) fn write_review_lines(
    f: &mut fmt::Formatter<'_>,
    reviews: &[ReviewViewModel],
    color: bool,
) -> fmt::Result {
    for review in reviews {
        let id_short = if review.id.len() > 8 {
            &review.id[..8]
        } else {
            &review.id
        };
        let content = text::normalize_and_clean(&review.content, 60);

        if color {
            writeln!(
                f,
                "{} {} {} {} {} {}",
                review.date.bright_black(),
                id_short.yellow(),
                stars::stars(review.rating),
                review.movie_title.bold(),
                content,
                review.author_name.bright_black()
            )?;
        } else {
            writeln!(
                f,
                "{} {} {} {} {} {}",
                review.date,
                id_short,
                stars::stars(review.rating),
                review.movie_title,
                content,
                review.author_name
            )?;
        }
    }
    Ok(())
}

pub struct ReviewListView<'a> {
    vm: &'a ReviewListViewModel,
    color: bool,
}

impl<'a> ReviewListView<'a> {
    pub fn new(vm: &'a ReviewListViewModel, color: bool) -> Self {
        Self { vm, color }
    }
}

impl fmt::Display for ReviewListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.vm.scope, self.vm.reviews.len())?;

        if self.vm.reviews.is_empty() {
            writeln!(f, "No reviews yet.")?;
            return Ok(());
        }

        write_review_lines(f, &self.vm.reviews, self.color)
    }
}
