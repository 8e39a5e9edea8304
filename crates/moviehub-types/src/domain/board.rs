use moviehub_browse::ListRecord;
use serde::{Deserialize, Serialize};

/// Site announcement shown on the notice board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoticeEntry {
    pub id: u64,
    pub title: String,
    pub content: String,
    /// Display string, not parsed (e.g. "2026-05-02")
    pub date: String,
    #[serde(default)]
    pub views: u32,
}

/// Frequently asked question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqEntry {
    pub id: u64,
    pub question: String,
    pub answer: String,
    pub date: String,
}

/// Member question on the Q&A board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QnaEntry {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author_name: String,
    pub date: String,
    #[serde(default)]
    pub answered: bool,
}

// The boards are the records the browse component runs over; the trait
// impls fix which fields each board searches (title/content for notices and
// questions, question/answer for FAQs).

impl ListRecord for NoticeEntry {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.content]
    }
}

impl ListRecord for FaqEntry {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.question, &self.answer]
    }
}

impl ListRecord for QnaEntry {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.content]
    }
}
