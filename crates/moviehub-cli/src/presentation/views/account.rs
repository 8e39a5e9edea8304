use std::fmt;

use crate::presentation::view_models::{GenreViewModel, ProfileViewModel, SessionViewModel};

fn genre_list(genres: &[GenreViewModel]) -> String {
    if genres.is_empty() {
        return "none".to_string();
    }
    genres
        .iter()
        .map(|genre| genre.name.clone())
        .collect::<Vec<_>>()
        .join(", ")
}

pub struct ProfileView<'a> {
    vm: &'a ProfileViewModel,
}

impl<'a> ProfileView<'a> {
    pub fn new(vm: &'a ProfileViewModel) -> Self {
        Self { vm }
    }
}

impl fmt::Display for ProfileView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#{} {} <{}>", self.vm.id, self.vm.name, self.vm.email)?;
        writeln!(f, "phone:  {}", self.vm.phone)?;
        if let Some(birth) = &self.vm.birth {
            writeln!(f, "birth:  {}", birth)?;
        }
        writeln!(f, "joined: {}", self.vm.joined)?;
        writeln!(f, "favorite genres: {}", genre_list(&self.vm.favorite_genres))?;
        writeln!(
            f,
            "disliked genres: {}",
            genre_list(&self.vm.unfavorite_genres)
        )?;
        Ok(())
    }
}

pub struct SessionView<'a> {
    vm: &'a SessionViewModel,
}

impl<'a> SessionView<'a> {
    pub fn new(vm: &'a SessionViewModel) -> Self {
        Self { vm }
    }
}

impl fmt::Display for SessionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.vm.name, &self.vm.email) {
            (Some(name), Some(email)) if self.vm.logged_in => {
                writeln!(f, "Logged in as {} <{}>", name, email)
            }
            _ => writeln!(f, "Not logged in."),
        }
    }
}
