use anyhow::Result;

use crate::args::{
    AccountCommand, AuthCommand, BoardCommand, Cli, Commands, MovieCommand, ReviewCommand,
};
use crate::context::ExecutionContext;
use crate::handlers;
use crate::handlers::board::Board;

pub fn run(cli: Cli) -> Result<()> {
    let ctx = ExecutionContext::from_cli(&cli)?;

    match cli.command {
        Commands::Init => handlers::init::handle(&ctx),

        Commands::Auth { command } => match command {
            AuthCommand::Signup {
                email,
                password,
                name,
                phone,
                birth,
            } => handlers::auth::signup(&ctx, email, password, name, phone, birth),
            AuthCommand::Login { email, password } => handlers::auth::login(&ctx, email, password),
            AuthCommand::Logout => handlers::auth::logout(&ctx),
            AuthCommand::Whoami => handlers::auth::whoami(&ctx),
        },

        Commands::Account { command } => match command {
            AccountCommand::Show => handlers::account::show(&ctx),
            AccountCommand::Update {
                name,
                fav_genres,
                unfav_genres,
            } => handlers::account::update(&ctx, name, fav_genres, unfav_genres),
            AccountCommand::ChangePassword {
                current,
                new,
                confirm,
            } => handlers::account::change_password(&ctx, current, new, confirm),
            AccountCommand::Withdraw { yes } => handlers::account::withdraw(&ctx, yes),
        },

        Commands::Review { command } => match command {
            ReviewCommand::Add {
                movie_id,
                title,
                content,
                rating,
            } => handlers::review::add(&ctx, movie_id, title, content, rating),
            ReviewCommand::List { movie_id } => handlers::review::list(&ctx, movie_id),
            ReviewCommand::Edit {
                id,
                content,
                rating,
            } => handlers::review::edit(&ctx, id, content, rating),
            ReviewCommand::Delete { id } => handlers::review::delete(&ctx, id),
            ReviewCommand::Export { output } => handlers::review::export(&ctx, output),
        },

        Commands::Movie { command } => match command {
            MovieCommand::Show { id } => handlers::movie::show(&ctx, id),
            MovieCommand::Search { query } => handlers::movie::search(&ctx, query),
            MovieCommand::Recommend => handlers::movie::recommend(&ctx),
        },

        Commands::Notice { command } => match command {
            BoardCommand::List { browse } => handlers::board::handle(&ctx, Board::Notice, browse),
        },

        Commands::Faq { command } => match command {
            BoardCommand::List { browse } => handlers::board::handle(&ctx, Board::Faq, browse),
        },

        Commands::Qna { command } => match command {
            BoardCommand::List { browse } => handlers::board::handle(&ctx, Board::Qna, browse),
        },
    }
}
