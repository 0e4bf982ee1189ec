use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context as _;
use reqwest::header::{ACCEPT, USER_AGENT};

use crate::cli::{FetchArgs, FetchOpts};
use crate::document::Document;
use crate::error::{Result, ScrapeError};

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: concat!("bookscrape/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

impl From<&FetchOpts> for FetchConfig {
    fn from(opts: &FetchOpts) -> Self {
        Self {
            timeout: Duration::from_secs(opts.timeout_secs),
            user_agent: opts.user_agent.clone(),
        }
    }
}

/// Blocking page retriever. One request per call, no retries.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::blocking::Client,
    user_agent: String,
}

impl Fetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(ScrapeError::HttpClient)?;

        Ok(Self {
            client,
            user_agent: config.user_agent.clone(),
        })
    }

    /// GETs `url` and returns the body. Non-2xx statuses are errors.
    pub fn fetch_text(&self, url: &str) -> Result<String> {
        let network_err = |source| ScrapeError::Network {
            url: url.to_owned(),
            source,
        };

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, self.user_agent.as_str())
            .header(ACCEPT, "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8")
            .send()
            .map_err(network_err)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::HttpStatus {
                url: url.to_owned(),
                status,
            });
        }

        let body = response.text().map_err(network_err)?;
        tracing::debug!(%url, %status, bytes = body.len(), "fetched");
        Ok(body)
    }

    pub fn fetch_document(&self, url: &str) -> Result<Document> {
        self.fetch_text(url).map(|text| Document::parse(&text))
    }
}

pub fn run(args: FetchArgs) -> anyhow::Result<()> {
    let out_path = PathBuf::from(&args.out);
    crate::raw_store::ensure_snapshot_does_not_exist(&out_path)
        .context("check snapshot output path")?;

    let fetcher = Fetcher::new(&FetchConfig::from(&args.fetch)).context("build http client")?;
    let html = fetcher.fetch_text(&args.url).context("fetch page")?;
    crate::raw_store::write_snapshot(&out_path, &html).context("write snapshot")?;

    tracing::info!(url = %args.url, out = %out_path.display(), "snapshot saved");
    Ok(())
}
