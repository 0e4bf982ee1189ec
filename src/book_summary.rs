use std::io::Write as _;

use anyhow::Context as _;

use crate::cli::{BookSummaryArgs, SummariesArgs};
use crate::document::{Document, selector, trimmed_text};
use crate::error::{Result, ScrapeError};
use crate::fetch::{FetchConfig, Fetcher};
use crate::formats::BookSummary;
use crate::search_links::{SearchQuery, fetch_search_links};

const CONTEXT: &str = "book page";

const TITLE: &str = "h1#bookTitle";
const AUTHOR: &str = "a.authorName";
const PAGES: &str = r#"span[itemprop="numberOfPages"]"#;

pub fn extract_book_summary(doc: &Document) -> Result<BookSummary> {
    let title = doc.required(&selector(TITLE)?, CONTEXT, "title heading")?;
    let author = doc.required(&selector(AUTHOR)?, CONTEXT, "author link")?;
    let pages = doc.required(&selector(PAGES)?, CONTEXT, "number of pages")?;

    Ok(BookSummary {
        title: trimmed_text(title),
        author: trimmed_text(author),
        page_count: parse_page_count(&trimmed_text(pages))?,
    })
}

/// Drops every non-digit character and parses what remains.
///
/// `"337 pages"` becomes `337`. A field with no digits is an error, never zero.
pub fn parse_page_count(raw: &str) -> Result<u32> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Err(ScrapeError::Format {
            raw: raw.to_owned(),
        });
    }
    digits.parse().map_err(|_| ScrapeError::Format {
        raw: raw.to_owned(),
    })
}

pub fn fetch_book_summary(fetcher: &Fetcher, url: &str) -> Result<BookSummary> {
    let doc = fetcher.fetch_document(url)?;
    extract_book_summary(&doc)
}

pub fn run(args: BookSummaryArgs) -> anyhow::Result<()> {
    let fetcher = Fetcher::new(&FetchConfig::from(&args.fetch)).context("build http client")?;
    let summary = fetch_book_summary(&fetcher, &args.url)
        .with_context(|| format!("summarize {}", args.url))?;

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer(&mut stdout, &summary).context("serialize book summary")?;
    stdout.write_all(b"\n").context("write newline")?;
    stdout.flush().context("flush stdout")?;

    Ok(())
}

/// Collects the search links, then summarizes each book one request at a time.
pub fn run_summaries(args: SummariesArgs) -> anyhow::Result<()> {
    let query = SearchQuery::from_opts(&args.search).context("build search query")?;
    let fetcher = Fetcher::new(&FetchConfig::from(&args.fetch)).context("build http client")?;

    tracing::info!(url = %query.search_url(), "summaries: collect links");
    let urls = fetch_search_links(&fetcher, &query).context("collect search links")?;

    let mut stdout = std::io::stdout().lock();
    for (index, url) in urls.iter().enumerate() {
        tracing::info!(%url, n = index + 1, total = urls.len(), "summaries: fetch book");
        let summary = fetch_book_summary(&fetcher, url.as_str())
            .with_context(|| format!("summarize {url}"))?;
        serde_json::to_writer(&mut stdout, &summary).context("serialize book summary")?;
        stdout.write_all(b"\n").context("write newline")?;
    }
    stdout.flush().context("flush stdout")?;

    Ok(())
}
