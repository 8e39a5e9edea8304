use std::path::PathBuf;

use anyhow::Result;
use uuid::Uuid;

use moviehub_app::{ReviewDraft, ReviewService};

use crate::context::ExecutionContext;
use crate::presentation::ConsoleRenderer;
use crate::presentation::presenters::present_reviews;
use crate::presentation::views::ReviewListView;

pub fn add(
    ctx: &ExecutionContext,
    movie_id: u64,
    title: String,
    content: String,
    rating: u8,
) -> Result<()> {
    let ws = ctx.workspace()?;
    let review = ReviewService::new(&ws).add(ReviewDraft {
        movie_id,
        movie_title: title,
        content,
        rating,
    })?;

    let vm = present_reviews("Review added", std::slice::from_ref(&review));
    let renderer = ConsoleRenderer::new(ctx.format);
    renderer.render(&vm, &ReviewListView::new(&vm, renderer.color()))
}

pub fn list(ctx: &ExecutionContext, movie_id: Option<u64>) -> Result<()> {
    let ws = ctx.workspace()?;
    let service = ReviewService::new(&ws);

    let vm = match movie_id {
        Some(movie_id) => present_reviews(
            format!("Reviews for movie {}", movie_id),
            &service.list_for_movie(movie_id)?,
        ),
        None => present_reviews("Your reviews", &service.list_mine()?),
    };

    let renderer = ConsoleRenderer::new(ctx.format);
    renderer.render(&vm, &ReviewListView::new(&vm, renderer.color()))
}

pub fn edit(
    ctx: &ExecutionContext,
    id: Uuid,
    content: Option<String>,
    rating: Option<u8>,
) -> Result<()> {
    let ws = ctx.workspace()?;
    let review = ReviewService::new(&ws).edit(id, content, rating)?;

    let vm = present_reviews("Review updated", std::slice::from_ref(&review));
    let renderer = ConsoleRenderer::new(ctx.format);
    renderer.render(&vm, &ReviewListView::new(&vm, renderer.color()))
}

pub fn delete(ctx: &ExecutionContext, id: Uuid) -> Result<()> {
    let ws = ctx.workspace()?;
    ReviewService::new(&ws).delete(id)?;

    ConsoleRenderer::new(ctx.format).message(&format!("Review {} deleted.", id))
}

pub fn export(ctx: &ExecutionContext, output: Option<PathBuf>) -> Result<()> {
    let ws = ctx.workspace()?;
    let service = ReviewService::new(&ws);

    match output {
        Some(path) => {
            let file = std::fs::File::create(&path)?;
            let count = service.export_csv(file)?;
            ConsoleRenderer::new(ctx.format)
                .message(&format!("Exported {} reviews to {}", count, path.display()))
        }
        None => {
            // CSV goes straight to stdout; no rendering layer in between
            service.export_csv(std::io::stdout().lock())?;
            Ok(())
        }
    }
}
