use owo_colors::OwoColorize;
use std::fmt;

use super::review::write_review_lines;
use crate::presentation::view_models::{MovieDetailViewModel, MovieListViewModel};

pub struct MovieListView<'a> {
    vm: &'a MovieListViewModel,
    color: bool,
}

impl<'a> MovieListView<'a> {
    pub fn new(vm: &'a MovieListViewModel, color: bool) -> Self {
        Self { vm, color }
    }
}

impl fmt::Display for MovieListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.vm.heading)?;

        if self.vm.movies.is_empty() {
            writeln!(f, "No results.")?;
            return Ok(());
        }

        for movie in &self.vm.movies {
            let id = format!("{:>8}", movie.id);
            let year = movie
                .release_date
                .as_deref()
                .map(|date| date.get(..4).unwrap_or(date))
                .unwrap_or("----");

            if self.color {
                writeln!(
                    f,
                    "{}  {} ({})  {:.1}",
                    id.yellow(),
                    movie.title,
                    year.bright_black(),
                    movie.vote_average
                )?;
            } else {
                writeln!(
                    f,
                    "{}  {} ({})  {:.1}",
                    id, movie.title, year, movie.vote_average
                )?;
            }
        }

        Ok(())
    }
}

pub struct MovieDetailView<'a> {
    vm: &'a MovieDetailViewModel,
    color: bool,
}

impl<'a> MovieDetailView<'a> {
    pub fn new(vm: &'a MovieDetailViewModel, color: bool) -> Self {
        Self { vm, color }
    }
}

impl fmt::Display for MovieDetailView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title_line = format!(
            "{} ({})  {:.1}/10",
            self.vm.title,
            self.vm.release_date.as_deref().unwrap_or("unreleased"),
            self.vm.vote_average
        );
        if self.color {
            writeln!(f, "{}", title_line.bold())?;
        } else {
            writeln!(f, "{}", title_line)?;
        }

        if let Some(runtime) = self.vm.runtime {
            writeln!(f, "runtime: {} min", runtime)?;
        }
        if !self.vm.genres.is_empty() {
            writeln!(f, "genres: {}", self.vm.genres.join(", "))?;
        }
        if let Some(director) = &self.vm.director {
            writeln!(f, "director: {}", director)?;
        }
        if !self.vm.top_cast.is_empty() {
            let cast = self
                .vm
                .top_cast
                .iter()
                .map(|member| match &member.character {
                    Some(character) => format!("{} ({})", member.name, character),
                    None => member.name.clone(),
                })
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(f, "cast: {}", cast)?;
        }
        if let Some(trailer) = &self.vm.trailer_url {
            writeln!(f, "trailer: {}", trailer)?;
        }
        if let Some(overview) = &self.vm.overview {
            writeln!(f)?;
            writeln!(f, "{}", overview)?;
        }

        if !self.vm.similar.is_empty() {
            writeln!(f)?;
            writeln!(f, "Similar titles")?;
            for movie in &self.vm.similar {
                writeln!(
                    f,
                    "{:>8}  {} ({})",
                    movie.id,
                    movie.title,
                    movie.release_date.as_deref().unwrap_or("----")
                )?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Reviews ({})", self.vm.reviews.len())?;
        if self.vm.reviews.is_empty() {
            writeln!(f, "No reviews yet.")?;
        } else {
            write_review_lines(f, &self.vm.reviews, self.color)?;
        }

        Ok(())
    }
}
