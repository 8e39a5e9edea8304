use moviehub_catalog::{Credits, MovieDetail, MovieSummary, VideoList};
use moviehub_types::Review;

use super::review::present_review;
use crate::presentation::view_models::{
    CastViewModel, MovieDetailViewModel, MovieListViewModel, MovieRowViewModel,
};

const TOP_CAST: usize = 5;

fn movie_row(summary: &MovieSummary) -> MovieRowViewModel {
    MovieRowViewModel {
        id: summary.id,
        title: summary.title.clone(),
        release_date: summary.release_date.clone(),
        vote_average: summary.vote_average,
    }
}

pub fn present_movie_list(
    heading: impl Into<String>,
    movies: &[MovieSummary],
) -> MovieListViewModel {
    MovieListViewModel {
        heading: heading.into(),
        movies: movies.iter().map(movie_row).collect(),
    }
}

pub fn present_movie_detail(
    detail: &MovieDetail,
    credits: &Credits,
    videos: &VideoList,
    similar: &[MovieSummary],
    reviews: &[Review],
) -> MovieDetailViewModel {
    MovieDetailViewModel {
        id: detail.id,
        title: detail.title.clone(),
        release_date: detail.release_date.clone(),
        runtime: detail.runtime,
        vote_average: detail.vote_average,
        genres: detail.genres.iter().map(|genre| genre.name.clone()).collect(),
        overview: detail.overview.clone(),
        director: credits.director().map(|member| member.name.clone()),
        top_cast: credits
            .top_cast(TOP_CAST)
            .into_iter()
            .map(|member| CastViewModel {
                name: member.name.clone(),
                character: member.character.clone(),
            })
            .collect(),
        trailer_url: videos.trailer().map(|video| video.youtube_url()),
        similar: similar.iter().take(TOP_CAST).map(movie_row).collect(),
        reviews: reviews.iter().map(present_review).collect(),
    }
}
