use moviehub_types::{FaqEntry, NoticeEntry, QnaEntry};

// Built-in board content, written into storage the first time a board is
// touched. Mirrors how the original shipped bundled defaults that were
// copied into local storage on first load.

pub fn default_notices() -> Vec<NoticeEntry> {
    let rows = [
        (
            "MovieHub service launch",
            "MovieHub is now open. Sign up, pick your favorite genres and start collecting your watch history.",
            "2026-01-05",
        ),
        (
            "MovieHub scheduled maintenance, Jan 20",
            "The catalog API proxy will be unavailable between 02:00 and 04:00 UTC while we roll out an update.",
            "2026-01-16",
        ),
        (
            "MovieHub review guidelines",
            "Reviews are limited to 1000 characters. Posts unrelated to the movie they are attached to may be removed.",
            "2026-02-02",
        ),
        (
            "MovieHub recommendation engine update",
            "Recommendations now weigh your favorite genres; set them under account settings to get better picks.",
            "2026-02-19",
        ),
        (
            "MovieHub profile settings revamp",
            "Display name, password and genre preferences moved to a single settings area.",
            "2026-03-08",
        ),
        (
            "MovieHub spring event winners",
            "Winners of the spring review event have been notified by email. Thanks to everyone who participated.",
            "2026-04-14",
        ),
        (
            "MovieHub privacy policy update",
            "The privacy policy was updated to describe what the app stores on your device. No data leaves your machine.",
            "2026-05-02",
        ),
        (
            "MovieHub account withdrawal notice",
            "Withdrawing an account now also removes the reviews it wrote, as announced in the March changelog.",
            "2026-05-27",
        ),
        (
            "MovieHub summer screening schedule",
            "The summer classics lineup is out; check the recommendations page for this month's curated titles.",
            "2026-06-20",
        ),
        (
            "MovieHub catalog language options",
            "Metadata language can now be configured; titles and overviews follow your configured locale when available.",
            "2026-07-11",
        ),
        (
            "MovieHub rating display change",
            "Star ratings now show half-point averages on movie pages. Existing reviews are unaffected.",
            "2026-07-25",
        ),
    ];

    rows.iter()
        .enumerate()
        .map(|(index, (title, content, date))| NoticeEntry {
            id: index as u64 + 1,
            title: title.to_string(),
            content: content.to_string(),
            date: date.to_string(),
            views: 0,
        })
        .collect()
}

pub fn default_faqs() -> Vec<FaqEntry> {
    let rows = [
        (
            "How do I sign up?",
            "Run 'moviehub auth signup' with your email, a password and a display name. The account lives only on this machine.",
            "2026-01-05",
        ),
        (
            "I forgot my password. Can I reset it?",
            "There is no reset flow; accounts are local. Withdraw the account and sign up again if you are locked out.",
            "2026-01-05",
        ),
        (
            "Where does my data go?",
            "Everything is stored as JSON files in the moviehub data directory. Nothing is uploaded.",
            "2026-01-12",
        ),
        (
            "Why do movie pages need an API key?",
            "Movie metadata comes from the TMDB API. Put your key in config.toml as tmdb_api_key.",
            "2026-02-01",
        ),
        (
            "How are recommendations picked?",
            "By your favorite genres, most popular first. Without favorite genres you get the overall popular list.",
            "2026-02-19",
        ),
        (
            "Can I edit a review after posting?",
            "Yes, 'moviehub review edit' updates content or rating. Only the author of a review can edit or delete it.",
            "2026-03-03",
        ),
        (
            "What happens to my reviews if I withdraw?",
            "They are removed together with the account.",
            "2026-05-27",
        ),
    ];

    rows.iter()
        .enumerate()
        .map(|(index, (question, answer, date))| FaqEntry {
            id: index as u64 + 1,
            question: question.to_string(),
            answer: answer.to_string(),
            date: date.to_string(),
        })
        .collect()
}

pub fn default_questions() -> Vec<QnaEntry> {
    let rows = [
        (
            "Posters not loading on movie pages",
            "Detail pages render but poster paths print as None. Is that a config problem on my side?",
            "mira",
            "2026-03-11",
            true,
        ),
        (
            "Request: sort reviews by rating",
            "It would be nice to sort my review list by rating instead of date.",
            "dokyun",
            "2026-04-02",
            false,
        ),
        (
            "Search matches too much",
            "Searching the notice board for a single letter matches almost everything. Expected?",
            "hana",
            "2026-04-20",
            true,
        ),
        (
            "Export format question",
            "Is the review export plain CSV? I want to import it into a spreadsheet.",
            "june",
            "2026-06-01",
            true,
        ),
        (
            "Multiple accounts on one machine",
            "Can two people share a data directory with separate logins?",
            "sol",
            "2026-06-30",
            false,
        ),
    ];

    rows.iter()
        .enumerate()
        .map(|(index, (title, content, author, date, answered))| QnaEntry {
            id: index as u64 + 1,
            title: title.to_string(),
            content: content.to_string(),
            author_name: author.to_string(),
            date: date.to_string(),
            answered: *answered,
        })
        .collect()
}
