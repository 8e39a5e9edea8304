use once_cell::sync::Lazy;

use moviehub_types::Genre;

// The TMDB movie genre list is effectively static; shipping it avoids a
// network call on every profile edit and keeps genre names available offline.
static GENRES: Lazy<Vec<Genre>> = Lazy::new(|| {
    [
        (28, "Action"),
        (12, "Adventure"),
        (16, "Animation"),
        (35, "Comedy"),
        (80, "Crime"),
        (99, "Documentary"),
        (18, "Drama"),
        (10751, "Family"),
        (14, "Fantasy"),
        (36, "History"),
        (27, "Horror"),
        (10402, "Music"),
        (9648, "Mystery"),
        (10749, "Romance"),
        (878, "Science Fiction"),
        (10770, "TV Movie"),
        (53, "Thriller"),
        (10752, "War"),
        (37, "Western"),
    ]
    .iter()
    .map(|(id, name)| Genre {
        id: *id,
        name: name.to_string(),
    })
    .collect()
});

pub fn genres() -> &'static [Genre] {
    &GENRES
}

pub fn genre_by_id(id: u32) -> Option<&'static Genre> {
    GENRES.iter().find(|genre| genre.id == id)
}

/// Case-insensitive name lookup (profile edit accepts names or ids)
pub fn genre_by_name(name: &str) -> Option<&'static Genre> {
    GENRES
        .iter()
        .find(|genre| genre.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_id() {
        assert_eq!(genre_by_id(878).unwrap().name, "Science Fiction");
        assert!(genre_by_id(1).is_none());
    }

    #[test]
    fn test_lookup_by_name_is_case_insensitive() {
        assert_eq!(genre_by_name("horror").unwrap().id, 27);
        assert_eq!(genre_by_name("HORROR").unwrap().id, 27);
        assert!(genre_by_name("polka").is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<u32> = genres().iter().map(|g| g.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), genres().len());
    }
}
