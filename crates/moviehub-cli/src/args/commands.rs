use clap::Subcommand;
use std::path::PathBuf;
use uuid::Uuid;

use super::common::BrowseArgs;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Initialize the data directory and seed the boards")]
    Init,

    #[command(about = "Sign up, log in and out")]
    Auth {
        #[command(subcommand)]
        command: AuthCommand,
    },

    #[command(about = "View and change the signed-in account")]
    Account {
        #[command(subcommand)]
        command: AccountCommand,
    },

    #[command(about = "Write and manage movie reviews")]
    Review {
        #[command(subcommand)]
        command: ReviewCommand,
    },

    #[command(about = "Look up movies in the metadata catalog")]
    Movie {
        #[command(subcommand)]
        command: MovieCommand,
    },

    #[command(about = "Browse the notice board")]
    Notice {
        #[command(subcommand)]
        command: BoardCommand,
    },

    #[command(about = "Browse the FAQ board")]
    Faq {
        #[command(subcommand)]
        command: BoardCommand,
    },

    #[command(about = "Browse the Q&A board")]
    Qna {
        #[command(subcommand)]
        command: BoardCommand,
    },
}

#[derive(Subcommand)]
pub enum AuthCommand {
    #[command(about = "Register a new member (signs you in)")]
    Signup {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        #[arg(long, help = "Display name (2-20 characters)")]
        name: String,

        #[arg(long, help = "Mobile number, 010-XXXX-XXXX")]
        phone: String,

        #[arg(long, help = "Birth date, display only (e.g. 1999-04-17)")]
        birth: Option<String>,
    },

    #[command(about = "Sign in with email and password")]
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    #[command(about = "Drop the current session")]
    Logout,

    #[command(about = "Show who is signed in")]
    Whoami,
}

#[derive(Subcommand)]
pub enum AccountCommand {
    #[command(about = "Show the signed-in profile")]
    Show,

    #[command(about = "Update display name and genre preferences")]
    Update {
        #[arg(long)]
        name: Option<String>,

        #[arg(
            long,
            value_delimiter = ',',
            help = "Favorite genres by id or name (at most 3, e.g. 878,Horror)"
        )]
        fav_genres: Option<Vec<String>>,

        #[arg(
            long,
            value_delimiter = ',',
            help = "Disliked genres by id or name (at most 3)"
        )]
        unfav_genres: Option<Vec<String>>,
    },

    #[command(about = "Change the account password")]
    ChangePassword {
        #[arg(long)]
        current: String,

        #[arg(long)]
        new: String,

        #[arg(long)]
        confirm: String,
    },

    #[command(about = "Delete the account and everything it wrote")]
    Withdraw {
        #[arg(long, help = "Confirm deletion; the command refuses without it")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum ReviewCommand {
    #[command(about = "Write a review for a movie")]
    Add {
        #[arg(long)]
        movie_id: u64,

        #[arg(long, help = "Movie title as it should appear in your list")]
        title: String,

        #[arg(long, help = "Review text (at most 1000 characters)")]
        content: String,

        #[arg(long, default_value = "0", help = "Stars 1-5, 0 leaves it unrated")]
        rating: u8,
    },

    #[command(about = "List reviews (yours, or one movie's with --movie-id)")]
    List {
        #[arg(long)]
        movie_id: Option<u64>,
    },

    #[command(about = "Edit one of your reviews")]
    Edit {
        id: Uuid,

        #[arg(long)]
        content: Option<String>,

        #[arg(long)]
        rating: Option<u8>,
    },

    #[command(about = "Delete one of your reviews")]
    Delete { id: Uuid },

    #[command(about = "Export your reviews as CSV")]
    Export {
        #[arg(long, help = "Write to a file instead of stdout")]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum MovieCommand {
    #[command(about = "Show a movie: details, credits, trailer and local reviews")]
    Show { id: u64 },

    #[command(about = "Search the catalog by title")]
    Search { query: String },

    #[command(about = "Popular picks for your favorite genres")]
    Recommend,
}

#[derive(Subcommand)]
pub enum BoardCommand {
    #[command(about = "List the board: searchable, paginated, one record expandable")]
    List {
        #[command(flatten)]
        browse: BrowseArgs,
    },
}
