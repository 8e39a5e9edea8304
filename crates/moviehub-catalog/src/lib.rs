// Catalog module - adapter for the TMDB-compatible metadata API
// Movie data is never persisted locally; every detail view is a fresh read
// against the remote catalog, with reviews joined in from local storage by
// the caller

mod client;
mod error;
mod genres;
mod schema;

pub use client::CatalogClient;
pub use error::{Error, Result};
pub use genres::{genre_by_id, genre_by_name, genres};
pub use schema::{
    CastMember, Credits, CrewMember, MovieDetail, MoviePage, MovieSummary, Video, VideoList,
};
