use anyhow::{Result, bail};

use moviehub_app::{AccountService, ProfileUpdate};
use moviehub_catalog::genre_by_name;

use crate::context::ExecutionContext;
use crate::presentation::ConsoleRenderer;
use crate::presentation::presenters::present_profile;
use crate::presentation::views::ProfileView;

pub fn show(ctx: &ExecutionContext) -> Result<()> {
    let ws = ctx.workspace()?;
    let account = AccountService::new(&ws).profile()?;

    let vm = present_profile(&account);
    let renderer = ConsoleRenderer::new(ctx.format);
    renderer.render(&vm, &ProfileView::new(&vm))
}

/// Genre flags accept ids and names interchangeably (878,Horror).
fn parse_genres(values: Vec<String>) -> Result<Vec<u32>> {
    let mut ids = Vec::with_capacity(values.len());
    for value in values {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            continue;
        }
        let id = match trimmed.parse::<u32>() {
            Ok(id) => id,
            Err(_) => match genre_by_name(trimmed) {
                Some(genre) => genre.id,
                None => bail!("Unknown genre: {}", trimmed),
            },
        };
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Ok(ids)
}

pub fn update(
    ctx: &ExecutionContext,
    name: Option<String>,
    fav_genres: Option<Vec<String>>,
    unfav_genres: Option<Vec<String>>,
) -> Result<()> {
    let ws = ctx.workspace()?;

    let update = ProfileUpdate {
        name,
        favorite_genres: fav_genres.map(parse_genres).transpose()?,
        unfavorite_genres: unfav_genres.map(parse_genres).transpose()?,
    };
    let account = AccountService::new(&ws).update_profile(update)?;

    let vm = present_profile(&account);
    let renderer = ConsoleRenderer::new(ctx.format);
    renderer.render(&vm, &ProfileView::new(&vm))
}

pub fn change_password(
    ctx: &ExecutionContext,
    current: String,
    new: String,
    confirm: String,
) -> Result<()> {
    let ws = ctx.workspace()?;
    AccountService::new(&ws).change_password(&current, &new, &confirm)?;

    ConsoleRenderer::new(ctx.format).message("Password changed.")
}

pub fn withdraw(ctx: &ExecutionContext, yes: bool) -> Result<()> {
    if !yes {
        bail!("This deletes the account and all of its reviews; pass --yes to confirm");
    }

    let ws = ctx.workspace()?;
    let account = AccountService::new(&ws).withdraw()?;

    ConsoleRenderer::new(ctx.format).message(&format!(
        "Account {} deleted together with its reviews.",
        account.email
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_genres_mixed_ids_and_names() {
        let ids = parse_genres(vec!["878".to_string(), "Horror".to_string()]).unwrap();
        assert_eq!(ids, vec![878, 27]);
    }

    #[test]
    fn test_parse_genres_dedupes() {
        let ids = parse_genres(vec!["27".to_string(), "horror".to_string()]).unwrap();
        assert_eq!(ids, vec![27]);
    }

    #[test]
    fn test_parse_genres_rejects_unknown() {
        assert!(parse_genres(vec!["polka".to_string()]).is_err());
    }
}
