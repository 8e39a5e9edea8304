use std::io::Write;

use uuid::Uuid;

use moviehub_store::{load_collection, save_collection};
use moviehub_types::{Review, validate_rating, validate_review_content};

use super::auth::AuthService;
use super::today;
use crate::workspace::Workspace;
use crate::{Error, Result, keys};

pub struct ReviewDraft {
    pub movie_id: u64,
    pub movie_title: String,
    pub content: String,
    /// 0 = unrated
    pub rating: u8,
}

/// Review CRUD over the single local review collection.
pub struct ReviewService<'a> {
    ws: &'a Workspace,
}

impl<'a> ReviewService<'a> {
    pub fn new(ws: &'a Workspace) -> Self {
        Self { ws }
    }

    fn auth(&self) -> AuthService<'a> {
        AuthService::new(self.ws)
    }

    /// Submit a review as the signed-in member. Newest first, like the
    /// original feed.
    pub fn add(&self, draft: ReviewDraft) -> Result<Review> {
        let author = self.auth().require_user()?;
        validate_review_content(&draft.content)?;
        validate_rating(draft.rating)?;

        let review = Review {
            id: Uuid::new_v4(),
            movie_id: draft.movie_id,
            movie_title: draft.movie_title,
            author_id: author.id,
            author_name: author.name,
            content: draft.content,
            rating: draft.rating,
            likes: 0,
            date: today(),
            is_verified: true,
        };

        let mut reviews: Vec<Review> = load_collection(self.ws.storage(), keys::REVIEWS)?;
        reviews.insert(0, review.clone());
        save_collection(self.ws.storage(), keys::REVIEWS, &reviews)?;

        Ok(review)
    }

    pub fn list_mine(&self) -> Result<Vec<Review>> {
        let author = self.auth().require_user()?;
        let reviews: Vec<Review> = load_collection(self.ws.storage(), keys::REVIEWS)?;
        Ok(reviews
            .into_iter()
            .filter(|review| review.is_by(author.id))
            .collect())
    }

    /// All reviews for one movie; no login required, detail pages are public.
    pub fn list_for_movie(&self, movie_id: u64) -> Result<Vec<Review>> {
        let reviews: Vec<Review> = load_collection(self.ws.storage(), keys::REVIEWS)?;
        Ok(reviews
            .into_iter()
            .filter(|review| review.movie_id == movie_id)
            .collect())
    }

    pub fn edit(&self, id: Uuid, content: Option<String>, rating: Option<u8>) -> Result<Review> {
        let author = self.auth().require_user()?;

        let mut reviews: Vec<Review> = load_collection(self.ws.storage(), keys::REVIEWS)?;
        let review = reviews
            .iter_mut()
            .find(|review| review.id == id)
            .ok_or(Error::ReviewNotFound(id))?;
        if !review.is_by(author.id) {
            return Err(Error::NotReviewAuthor);
        }

        if let Some(content) = content {
            validate_review_content(&content)?;
            review.content = content;
        }
        if let Some(rating) = rating {
            validate_rating(rating)?;
            review.rating = rating;
        }

        let updated = review.clone();
        save_collection(self.ws.storage(), keys::REVIEWS, &reviews)?;
        Ok(updated)
    }

    pub fn delete(&self, id: Uuid) -> Result<()> {
        let author = self.auth().require_user()?;

        let mut reviews: Vec<Review> = load_collection(self.ws.storage(), keys::REVIEWS)?;
        let review = reviews
            .iter()
            .find(|review| review.id == id)
            .ok_or(Error::ReviewNotFound(id))?;
        if !review.is_by(author.id) {
            return Err(Error::NotReviewAuthor);
        }

        reviews.retain(|review| review.id != id);
        save_collection(self.ws.storage(), keys::REVIEWS, &reviews)?;
        Ok(())
    }

    /// Write the signed-in member's reviews as CSV; returns the row count.
    pub fn export_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let reviews = self.list_mine()?;

        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["id", "movie_id", "movie_title", "rating", "date", "content"])?;
        for review in &reviews {
            csv_writer.write_record([
                review.id.to_string(),
                review.movie_id.to_string(),
                review.movie_title.clone(),
                review.rating.to_string(),
                review.date.clone(),
                review.content.clone(),
            ])?;
        }
        csv_writer.flush().map_err(Error::Io)?;

        Ok(reviews.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::SignupInput;
    use tempfile::TempDir;

    fn workspace_with_user(dir: &TempDir, email: &str) -> Workspace {
        let ws = Workspace::open(dir.path()).unwrap();
        AuthService::new(&ws)
            .sign_up(SignupInput {
                email: email.to_string(),
                password: "pass1234".to_string(),
                name: "Tester".to_string(),
                phone: "010-1234-5678".to_string(),
                birth: None,
            })
            .unwrap();
        ws
    }

    fn draft(title: &str) -> ReviewDraft {
        ReviewDraft {
            movie_id: 603,
            movie_title: title.to_string(),
            content: format!("review of {}", title),
            rating: 4,
        }
    }

    #[test]
    fn test_add_prepends_newest_first() {
        let dir = TempDir::new().unwrap();
        let ws = workspace_with_user(&dir, "a@example.com");
        let reviews = ReviewService::new(&ws);

        reviews.add(draft("First")).unwrap();
        reviews.add(draft("Second")).unwrap();

        let mine = reviews.list_mine().unwrap();
        assert_eq!(mine.len(), 2);
        assert_eq!(mine[0].movie_title, "Second");
    }

    #[test]
    fn test_add_requires_login() {
        let dir = TempDir::new().unwrap();
        let ws = Workspace::open(dir.path()).unwrap();
        let err = ReviewService::new(&ws).add(draft("X")).unwrap_err();
        assert!(matches!(err, Error::NotLoggedIn));
    }

    #[test]
    fn test_add_validates_content_and_rating() {
        let dir = TempDir::new().unwrap();
        let ws = workspace_with_user(&dir, "a@example.com");
        let reviews = ReviewService::new(&ws);

        let mut bad = draft("X");
        bad.content = "   ".to_string();
        assert!(matches!(
            reviews.add(bad).unwrap_err(),
            Error::Validation(_)
        ));

        let mut bad = draft("X");
        bad.rating = 6;
        assert!(matches!(
            reviews.add(bad).unwrap_err(),
            Error::Validation(_)
        ));
    }

    #[test]
    fn test_edit_and_delete_author_only() {
        let dir = TempDir::new().unwrap();
        let ws = workspace_with_user(&dir, "a@example.com");
        let reviews = ReviewService::new(&ws);
        let added = reviews.add(draft("Mine")).unwrap();

        // switch to another user
        let auth = AuthService::new(&ws);
        auth.sign_up(SignupInput {
            email: "b@example.com".to_string(),
            password: "pass1234".to_string(),
            name: "Other".to_string(),
            phone: "010-9999-8888".to_string(),
            birth: None,
        })
        .unwrap();

        assert!(matches!(
            reviews
                .edit(added.id, Some("hijack".to_string()), None)
                .unwrap_err(),
            Error::NotReviewAuthor
        ));
        assert!(matches!(
            reviews.delete(added.id).unwrap_err(),
            Error::NotReviewAuthor
        ));

        // back as the author
        auth.log_in("a@example.com", "pass1234").unwrap();
        let edited = reviews
            .edit(added.id, Some("updated".to_string()), Some(2))
            .unwrap();
        assert_eq!(edited.content, "updated");
        assert_eq!(edited.rating, 2);

        reviews.delete(added.id).unwrap();
        assert!(reviews.list_mine().unwrap().is_empty());
    }

    #[test]
    fn test_list_for_movie_is_public() {
        let dir = TempDir::new().unwrap();
        let ws = workspace_with_user(&dir, "a@example.com");
        let reviews = ReviewService::new(&ws);
        reviews.add(draft("Matrix")).unwrap();

        AuthService::new(&ws).log_out().unwrap();
        let for_movie = reviews.list_for_movie(603).unwrap();
        assert_eq!(for_movie.len(), 1);
        assert!(reviews.list_for_movie(604).unwrap().is_empty());
    }

    #[test]
    fn test_export_csv() {
        let dir = TempDir::new().unwrap();
        let ws = workspace_with_user(&dir, "a@example.com");
        let reviews = ReviewService::new(&ws);
        reviews.add(draft("Matrix")).unwrap();

        let mut buffer = Vec::new();
        let count = reviews.export_csv(&mut buffer).unwrap();
        assert_eq!(count, 1);

        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "id,movie_id,movie_title,rating,date,content"
        );
        assert!(lines.next().unwrap().contains("Matrix"));
    }
}
