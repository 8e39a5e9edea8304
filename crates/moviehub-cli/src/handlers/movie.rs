use anyhow::Result;

use moviehub_app::{AuthService, ReviewService, Workspace};
use moviehub_catalog::{CatalogClient, genre_by_id};

use crate::context::ExecutionContext;
use crate::presentation::ConsoleRenderer;
use crate::presentation::presenters::{present_movie_detail, present_movie_list};
use crate::presentation::views::{MovieDetailView, MovieListView};

fn catalog_client(ws: &Workspace) -> CatalogClient {
    let config = ws.config();

    let api_key = if config.tmdb_api_key.is_empty() {
        std::env::var("MOVIEHUB_TMDB_API_KEY").unwrap_or_default()
    } else {
        config.tmdb_api_key.clone()
    };

    let mut client = CatalogClient::new(api_key).with_language(config.language.clone());
    if let Some(base_url) = &config.tmdb_base_url {
        client = client.with_base_url(base_url.clone());
    }
    client
}

pub fn show(ctx: &ExecutionContext, id: u64) -> Result<()> {
    let ws = ctx.workspace()?;
    let client = catalog_client(&ws);

    let detail = client.movie(id)?;
    let credits = client.credits(id)?;
    let videos = client.videos(id)?;
    let similar = client.similar(id)?;
    let reviews = ReviewService::new(&ws).list_for_movie(id)?;

    let vm = present_movie_detail(&detail, &credits, &videos, &similar, &reviews);
    let renderer = ConsoleRenderer::new(ctx.format);
    renderer.render(&vm, &MovieDetailView::new(&vm, renderer.color()))
}

pub fn search(ctx: &ExecutionContext, query: String) -> Result<()> {
    let ws = ctx.workspace()?;
    let results = catalog_client(&ws).search(&query)?;

    let vm = present_movie_list(format!("Search results for \"{}\"", query), &results);
    let renderer = ConsoleRenderer::new(ctx.format);
    renderer.render(&vm, &MovieListView::new(&vm, renderer.color()))
}

pub fn recommend(ctx: &ExecutionContext) -> Result<()> {
    let ws = ctx.workspace()?;

    // favorite genres steer the discovery; logged out (or none picked)
    // falls back to the overall popular list
    let favorite_genres = AuthService::new(&ws)
        .current_user()?
        .map(|account| account.favorite_genres)
        .unwrap_or_default();

    let results = catalog_client(&ws).discover_by_genres(&favorite_genres)?;

    let heading = if favorite_genres.is_empty() {
        "Popular now".to_string()
    } else {
        let names: Vec<String> = favorite_genres
            .iter()
            .map(|id| {
                genre_by_id(*id)
                    .map(|genre| genre.name.clone())
                    .unwrap_or_else(|| format!("genre {}", id))
            })
            .collect();
        format!("Popular picks for {}", names.join(", "))
    };

    let vm = present_movie_list(heading, &results);
    let renderer = ConsoleRenderer::new(ctx.format);
    renderer.render(&vm, &MovieListView::new(&vm, renderer.color()))
}
