use moviehub_browse::MatchSpan;
use serde::Serialize;

/// One rendered board row. `title` and `content` are span lists so the
/// view can style search hits without re-deriving them.
#[derive(Debug, Serialize)]
pub struct BoardRowViewModel {
    pub id: u64,
    pub title: Vec<MatchSpan>,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub views: Option<u32>,
    pub open: bool,
    /// Present only on the open row
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<MatchSpan>>,
}

#[derive(Debug, Serialize)]
pub struct BoardListViewModel {
    pub board: String,
    pub search_term: String,
    pub page: usize,
    pub total_pages: usize,
    pub result_count: usize,
    pub page_size: usize,
    pub rows: Vec<BoardRowViewModel>,
}

#[derive(Debug, Serialize)]
pub struct ReviewViewModel {
    pub id: String,
    pub movie_id: u64,
    pub movie_title: String,
    pub author_name: String,
    pub rating: u8,
    pub date: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ReviewListViewModel {
    pub scope: String,
    pub reviews: Vec<ReviewViewModel>,
}

#[derive(Debug, Serialize)]
pub struct GenreViewModel {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileViewModel {
    pub id: u64,
    pub email: String,
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth: Option<String>,
    pub joined: String,
    pub favorite_genres: Vec<GenreViewModel>,
    pub unfavorite_genres: Vec<GenreViewModel>,
}

#[derive(Debug, Serialize)]
pub struct SessionViewModel {
    pub logged_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CastViewModel {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MovieRowViewModel {
    pub id: u64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    pub vote_average: f64,
}

#[derive(Debug, Serialize)]
pub struct MovieListViewModel {
    pub heading: String,
    pub movies: Vec<MovieRowViewModel>,
}

#[derive(Debug, Serialize)]
pub struct MovieDetailViewModel {
    pub id: u64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<u32>,
    pub vote_average: f64,
    pub genres: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    pub top_cast: Vec<CastViewModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailer_url: Option<String>,
    pub similar: Vec<MovieRowViewModel>,
    pub reviews: Vec<ReviewViewModel>,
}

#[derive(Debug, Serialize)]
pub struct InitViewModel {
    pub data_dir: String,
    pub config_path: String,
    pub config_created: bool,
    pub seeded_notices: usize,
    pub seeded_faqs: usize,
    pub seeded_questions: usize,
}
