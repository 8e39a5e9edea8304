use anyhow::Result;

use moviehub_app::{AuthService, SignupInput};

use crate::context::ExecutionContext;
use crate::presentation::ConsoleRenderer;
use crate::presentation::presenters::{present_profile, present_session};
use crate::presentation::views::{ProfileView, SessionView};

pub fn signup(
    ctx: &ExecutionContext,
    email: String,
    password: String,
    name: String,
    phone: String,
    birth: Option<String>,
) -> Result<()> {
    let ws = ctx.workspace()?;
    let account = AuthService::new(&ws).sign_up(SignupInput {
        email,
        password,
        name,
        phone,
        birth,
    })?;

    let vm = present_profile(&account);
    let renderer = ConsoleRenderer::new(ctx.format);
    renderer.render(&vm, &ProfileView::new(&vm))
}

pub fn login(ctx: &ExecutionContext, email: String, password: String) -> Result<()> {
    let ws = ctx.workspace()?;
    let account = AuthService::new(&ws).log_in(&email, &password)?;

    let vm = present_session(Some(&account));
    let renderer = ConsoleRenderer::new(ctx.format);
    renderer.render(&vm, &SessionView::new(&vm))
}

pub fn logout(ctx: &ExecutionContext) -> Result<()> {
    let ws = ctx.workspace()?;
    let had_session = AuthService::new(&ws).log_out()?;

    let renderer = ConsoleRenderer::new(ctx.format);
    if had_session {
        renderer.message("Logged out.")
    } else {
        renderer.message("Nobody was logged in.")
    }
}

pub fn whoami(ctx: &ExecutionContext) -> Result<()> {
    let ws = ctx.workspace()?;
    let account = AuthService::new(&ws).current_user()?;

    let vm = present_session(account.as_ref());
    let renderer = ConsoleRenderer::new(ctx.format);
    renderer.render(&vm, &SessionView::new(&vm))
}
