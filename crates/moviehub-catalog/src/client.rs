use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::schema::{Credits, MovieDetail, MoviePage, MovieSummary, VideoList};

const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
const DEFAULT_LANGUAGE: &str = "en-US";

/// Blocking client for the movie metadata API.
///
/// The base URL is overridable so tests (and self-hosted mirrors) can point
/// it at a local server; everything else about the wire format is TMDB v3.
pub struct CatalogClient {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
    language: String,
}

impl CatalogClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    fn get<T: DeserializeOwned>(&self, path: &str, params: &[(&str, String)]) -> Result<T> {
        if self.api_key.is_empty() {
            return Err(Error::MissingApiKey);
        }

        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", self.language.as_str()),
            ])
            .query(params)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                code: status.as_u16(),
                path: path.to_string(),
            });
        }

        Ok(response.json()?)
    }

    pub fn movie(&self, id: u64) -> Result<MovieDetail> {
        self.get(&format!("/movie/{}", id), &[])
    }

    pub fn credits(&self, id: u64) -> Result<Credits> {
        self.get(&format!("/movie/{}/credits", id), &[])
    }

    pub fn similar(&self, id: u64) -> Result<Vec<MovieSummary>> {
        let page: MoviePage = self.get(&format!("/movie/{}/similar", id), &[])?;
        Ok(page.results)
    }

    pub fn videos(&self, id: u64) -> Result<VideoList> {
        self.get(&format!("/movie/{}/videos", id), &[])
    }

    /// Most popular titles for a set of genres; an empty set discovers
    /// across the whole catalog (the "popular" fallback).
    pub fn discover_by_genres(&self, genre_ids: &[u32]) -> Result<Vec<MovieSummary>> {
        let mut params = vec![
            ("sort_by", "popularity.desc".to_string()),
            ("page", "1".to_string()),
        ];
        if !genre_ids.is_empty() {
            let joined = genre_ids
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(",");
            params.push(("with_genres", joined));
        }

        let page: MoviePage = self.get("/discover/movie", &params)?;
        Ok(page.results)
    }

    pub fn search(&self, query: &str) -> Result<Vec<MovieSummary>> {
        let page: MoviePage = self.get("/search/movie", &[("query", query.to_string())])?;
        Ok(page.results)
    }
}
