// NOTE: Command Organization Rationale
//
// Why namespaced subcommands (not flat)?
// - Flat command structures become unwieldy past ~10 commands
// - Namespaces (auth, account, review, movie, notice, faq, qna) group
//   related operations
// - Improves --help discoverability and conceptual clarity
// - Example: `review list` vs `review add` vs flat `list-reviews` and
//   `add-review`

mod commands;
mod common;
mod enums;

pub use commands::*;
pub use common::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "moviehub")]
#[command(about = "Discover movies, keep reviews, all on your own machine", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Data directory (default: MOVIEHUB_PATH or XDG data dir)")]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}
