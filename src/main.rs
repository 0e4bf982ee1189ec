use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;

fn main() -> ExitCode {
    if let Err(err) = try_main() {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn try_main() -> anyhow::Result<()> {
    let cli = bookscrape::cli::Cli::parse();
    bookscrape::logging::init(cli.verbose).context("init logging")?;
    tracing::debug!(?cli, "parsed cli");

    match cli.command {
        bookscrape::cli::Command::SearchResults(args) => {
            bookscrape::search_results::run(args).context("search-results")?;
        }
        bookscrape::cli::Command::SearchLinks(args) => {
            bookscrape::search_links::run(args).context("search-links")?;
        }
        bookscrape::cli::Command::BookSummary(args) => {
            bookscrape::book_summary::run(args).context("book-summary")?;
        }
        bookscrape::cli::Command::Summaries(args) => {
            bookscrape::book_summary::run_summaries(args).context("summaries")?;
        }
        bookscrape::cli::Command::BestBooks(args) => {
            bookscrape::best_books::run(args).context("best-books")?;
        }
        bookscrape::cli::Command::Fetch(args) => {
            bookscrape::fetch::run(args).context("fetch")?;
        }
    }

    Ok(())
}
