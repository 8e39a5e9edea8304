use moviehub_catalog::genre_by_id;
use moviehub_types::Account;

use crate::presentation::view_models::{GenreViewModel, ProfileViewModel, SessionViewModel};

fn genre_vm(id: u32) -> GenreViewModel {
    GenreViewModel {
        id,
        name: genre_by_id(id)
            .map(|genre| genre.name.clone())
            .unwrap_or_else(|| format!("genre {}", id)),
    }
}

pub fn present_profile(account: &Account) -> ProfileViewModel {
    ProfileViewModel {
        id: account.id.value(),
        email: account.email.clone(),
        name: account.name.clone(),
        phone: account.phone.clone(),
        birth: account.birth.clone(),
        joined: account.joined.clone(),
        favorite_genres: account.favorite_genres.iter().copied().map(genre_vm).collect(),
        unfavorite_genres: account
            .unfavorite_genres
            .iter()
            .copied()
            .map(genre_vm)
            .collect(),
    }
}

pub fn present_session(account: Option<&Account>) -> SessionViewModel {
    match account {
        Some(account) => SessionViewModel {
            logged_in: true,
            email: Some(account.email.clone()),
            name: Some(account.name.clone()),
        },
        None => SessionViewModel {
            logged_in: false,
            email: None,
            name: None,
        },
    }
}
