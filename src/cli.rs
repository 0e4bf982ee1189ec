use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Raise log verbosity (-v debug, -vv trace). Ignored when RUST_LOG is set.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    SearchResults(SearchResultsArgs),
    SearchLinks(SearchLinksArgs),
    BookSummary(BookSummaryArgs),
    Summaries(SummariesArgs),
    BestBooks(BestBooksArgs),
    Fetch(FetchArgs),
}

#[derive(Debug, Clone, Args)]
pub struct FetchOpts {
    /// Per-request timeout.
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request.
    #[arg(long, default_value = concat!("bookscrape/", env!("CARGO_PKG_VERSION")))]
    pub user_agent: String,
}

#[derive(Debug, Clone, Args)]
pub struct SearchOpts {
    /// Site origin (scheme + host) used for the search and for absolute links.
    #[arg(long, default_value = crate::search_links::DEFAULT_ORIGIN)]
    pub origin: String,

    /// Search term.
    #[arg(long, default_value = "fantasy")]
    pub query: String,

    /// Search id passed along with the query (empty to omit).
    #[arg(long, default_value = "NwUsLiA2Nc")]
    pub qid: Option<String>,

    /// Maximum number of book links to collect.
    #[arg(long, default_value_t = 10)]
    pub limit: usize,
}

#[derive(Debug, Args)]
pub struct SearchResultsArgs {
    /// Saved search results page.
    #[arg(long)]
    pub input: String,

    /// Also write the (title, author) pairs to this CSV file (truncated if present).
    #[arg(long)]
    pub csv: Option<String>,
}

#[derive(Debug, Args)]
pub struct SearchLinksArgs {
    #[command(flatten)]
    pub search: SearchOpts,

    #[command(flatten)]
    pub fetch: FetchOpts,
}

#[derive(Debug, Args)]
pub struct BookSummaryArgs {
    /// Book detail page URL.
    #[arg(long)]
    pub url: String,

    #[command(flatten)]
    pub fetch: FetchOpts,
}

#[derive(Debug, Args)]
pub struct SummariesArgs {
    #[command(flatten)]
    pub search: SearchOpts,

    #[command(flatten)]
    pub fetch: FetchOpts,
}

#[derive(Debug, Args)]
pub struct BestBooksArgs {
    /// Saved "best books of the year" page.
    #[arg(long)]
    pub input: String,
}

#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Page URL (http/https).
    #[arg(long)]
    pub url: String,

    /// Snapshot file to create. Must not exist yet.
    #[arg(long)]
    pub out: String,

    #[command(flatten)]
    pub fetch: FetchOpts,
}
