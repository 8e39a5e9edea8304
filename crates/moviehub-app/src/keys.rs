// Storage keys, named after the collections the original data model used.

pub const MEMBERS: &str = "members";
pub const SESSION: &str = "loggedInUser";
pub const REVIEWS: &str = "myReviews";
pub const NOTICES: &str = "notices";
pub const FAQS: &str = "faqs";
pub const QUESTIONS: &str = "questions";
