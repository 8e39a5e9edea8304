use moviehub_store::{load_collection, save_collection, save_value};
use moviehub_types::{
    Account, Review, Session, validate_genre_selection, validate_name, validate_password_change,
};

use super::auth::AuthService;
use crate::workspace::Workspace;
use crate::{Error, Result, keys};

/// Partial profile update; absent fields keep their current value.
#[derive(Debug, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub favorite_genres: Option<Vec<u32>>,
    pub unfavorite_genres: Option<Vec<u32>>,
}

/// Settings-area operations on the signed-in member.
pub struct AccountService<'a> {
    ws: &'a Workspace,
}

impl<'a> AccountService<'a> {
    pub fn new(ws: &'a Workspace) -> Self {
        Self { ws }
    }

    fn auth(&self) -> AuthService<'a> {
        AuthService::new(self.ws)
    }

    pub fn profile(&self) -> Result<Account> {
        self.auth().require_user()
    }

    pub fn update_profile(&self, update: ProfileUpdate) -> Result<Account> {
        let current = self.auth().require_user()?;

        if let Some(name) = &update.name {
            validate_name(name)?;
        }

        let favorite = update
            .favorite_genres
            .clone()
            .unwrap_or_else(|| current.favorite_genres.clone());
        let unfavorite = update
            .unfavorite_genres
            .clone()
            .unwrap_or_else(|| current.unfavorite_genres.clone());
        validate_genre_selection(&favorite, &unfavorite)?;

        let mut members: Vec<Account> = load_collection(self.ws.storage(), keys::MEMBERS)?;
        let member = members
            .iter_mut()
            .find(|member| member.id == current.id)
            .ok_or(Error::AccountNotFound)?;

        if let Some(name) = update.name {
            member.name = name;
        }
        member.favorite_genres = favorite;
        member.unfavorite_genres = unfavorite;

        let updated = member.clone();
        save_collection(self.ws.storage(), keys::MEMBERS, &members)?;
        // the session carries a name snapshot; keep it in sync
        save_value(self.ws.storage(), keys::SESSION, &Session::for_account(&updated))?;

        Ok(updated)
    }

    pub fn change_password(&self, current: &str, new: &str, confirm: &str) -> Result<()> {
        let account = self.auth().require_user()?;

        if !account.password_matches(current) {
            return Err(Error::InvalidCredentials);
        }
        validate_password_change(current, new, confirm)?;

        let mut members: Vec<Account> = load_collection(self.ws.storage(), keys::MEMBERS)?;
        let member = members
            .iter_mut()
            .find(|member| member.id == account.id)
            .ok_or(Error::AccountNotFound)?;
        member.password_digest = Account::digest_password(new);
        save_collection(self.ws.storage(), keys::MEMBERS, &members)?;

        Ok(())
    }

    /// Delete the signed-in account, its reviews and the session.
    pub fn withdraw(&self) -> Result<Account> {
        let account = self.auth().require_user()?;

        let mut members: Vec<Account> = load_collection(self.ws.storage(), keys::MEMBERS)?;
        members.retain(|member| member.id != account.id);
        save_collection(self.ws.storage(), keys::MEMBERS, &members)?;

        let mut reviews: Vec<Review> = load_collection(self.ws.storage(), keys::REVIEWS)?;
        reviews.retain(|review| !review.is_by(account.id));
        save_collection(self.ws.storage(), keys::REVIEWS, &reviews)?;

        self.ws.storage().remove_item(keys::SESSION)?;

        Ok(account)
    }
}
