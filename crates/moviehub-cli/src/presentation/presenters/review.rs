use moviehub_types::Review;

use crate::presentation::view_models::{ReviewListViewModel, ReviewViewModel};

pub fn present_review(review: &Review) -> ReviewViewModel {
    ReviewViewModel {
        id: review.id.to_string(),
        movie_id: review.movie_id,
        movie_title: review.movie_title.clone(),
        author_name: review.author_name.clone(),
        rating: review.rating,
        date: review.date.clone(),
        content: review.content.clone(),
    }
}

pub fn present_reviews(scope: impl Into<String>, reviews: &[Review]) -> ReviewListViewModel {
    ReviewListViewModel {
        scope: scope.into(),
        reviews: reviews.iter().map(present_review).collect(),
    }
}
