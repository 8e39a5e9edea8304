use clap::Args;

/// Shared flags of the three board list commands. They drive the browse
/// state in order: the query is applied first (which resets paging), then
/// the page move, then the expand toggle.
#[derive(Args, Debug)]
pub struct BrowseArgs {
    #[arg(long, help = "Case-insensitive search term")]
    pub query: Option<String>,

    #[arg(long, default_value = "1", help = "Page to show")]
    pub page: usize,

    #[arg(long, value_name = "ID", help = "Expand one record of the page")]
    pub open: Option<u64>,
}
