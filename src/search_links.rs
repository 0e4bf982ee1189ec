use std::io::Write as _;

use anyhow::Context as _;
use url::Url;

use crate::cli::{SearchLinksArgs, SearchOpts};
use crate::document::{Document, selector};
use crate::error::{Result, ScrapeError};
use crate::fetch::{FetchConfig, Fetcher};
use crate::formats::BookUrl;

pub const DEFAULT_ORIGIN: &str = "https://www.goodreads.com";
pub const BOOK_PATH_PREFIX: &str = "/book/show/";

const TITLE_LINK: &str = "a.bookTitle";

/// The fixed search whose first results are collected.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub origin: Url,
    pub query: String,
    pub qid: Option<String>,
    pub limit: usize,
}

impl SearchQuery {
    pub fn from_opts(opts: &SearchOpts) -> Result<Self> {
        let origin = Url::parse(&opts.origin).map_err(|source| ScrapeError::Url {
            input: opts.origin.clone(),
            source,
        })?;
        Ok(Self {
            origin,
            query: opts.query.clone(),
            qid: opts.qid.clone().filter(|qid| !qid.is_empty()),
            limit: opts.limit,
        })
    }

    #[must_use]
    pub fn search_url(&self) -> Url {
        let mut url = self.origin.clone();
        url.set_path("/search");
        url.set_fragment(None);
        {
            let mut pairs = url.query_pairs_mut();
            pairs.clear();
            pairs.append_pair("q", &self.query);
            if let Some(qid) = &self.qid {
                pairs.append_pair("qid", qid);
            }
        }
        url
    }
}

/// Absolute book-detail URLs for the first `limit` title links, in ranking order.
///
/// Each href is resolved against `origin`. Links that do not land under
/// `/book/show/` on that origin are dropped before the limit is applied.
/// Fewer than `limit` matches is not an error.
pub fn collect_search_links(doc: &Document, origin: &Url, limit: usize) -> Result<Vec<BookUrl>> {
    let link_selector = selector(TITLE_LINK)?;

    let urls: Vec<BookUrl> = doc
        .select(&link_selector)
        .filter_map(|link| link.value().attr("href"))
        .filter_map(|href| book_url(origin, href.trim()))
        .take(limit)
        .collect();

    Ok(urls)
}

fn book_url(origin: &Url, href: &str) -> Option<BookUrl> {
    let url = origin.join(href).ok()?;
    let same_origin = url.scheme() == origin.scheme()
        && url.host_str() == origin.host_str()
        && url.port_or_known_default() == origin.port_or_known_default();
    if !same_origin || !url.path().starts_with(BOOK_PATH_PREFIX) {
        return None;
    }
    Some(BookUrl::new(url.into()))
}

/// Fetches the live search page and collects its book links.
pub fn fetch_search_links(fetcher: &Fetcher, query: &SearchQuery) -> Result<Vec<BookUrl>> {
    let search_url = query.search_url();
    let doc = fetcher.fetch_document(search_url.as_str())?;
    collect_search_links(&doc, &query.origin, query.limit)
}

pub fn run(args: SearchLinksArgs) -> anyhow::Result<()> {
    let query = SearchQuery::from_opts(&args.search).context("build search query")?;
    let fetcher = Fetcher::new(&FetchConfig::from(&args.fetch)).context("build http client")?;

    tracing::info!(url = %query.search_url(), "search-links: fetch");
    let urls = fetch_search_links(&fetcher, &query).context("collect search links")?;
    tracing::info!(links = urls.len(), "search-links: collected");

    let mut stdout = std::io::stdout().lock();
    for url in &urls {
        writeln!(stdout, "{url}").context("write url")?;
    }
    stdout.flush().context("flush stdout")?;

    Ok(())
}
