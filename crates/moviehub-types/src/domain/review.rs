use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::account::AccountId;

/// A member's review of one movie.
///
/// Reviews live in a single local collection; the movie itself is only
/// referenced by its metadata-API id plus a denormalized title so lists
/// render without a network round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,
    pub movie_id: u64,
    pub movie_title: String,
    pub author_id: AccountId,
    pub author_name: String,
    pub content: String,
    /// 0 = unrated, 1..=5 stars
    pub rating: u8,
    #[serde(default)]
    pub likes: u32,
    /// Submission date (YYYY-MM-DD)
    pub date: String,
    #[serde(default)]
    pub is_verified: bool,
}

impl Review {
    pub fn is_by(&self, account_id: AccountId) -> bool {
        self.author_id == account_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_serde_defaults() {
        // older payloads without likes/is_verified must still load
        let json = r#"{
            "id": "b9e7ff10-6bb4-4b42-b8b2-0a8f4b1a2c3d",
            "movie_id": 603,
            "movie_title": "The Matrix",
            "author_id": 1,
            "author_name": "Neo",
            "content": "whoa",
            "rating": 5,
            "date": "2026-03-02"
        }"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.likes, 0);
        assert!(!review.is_verified);
        assert!(review.is_by(AccountId::new(1)));
    }
}
