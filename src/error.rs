use std::path::PathBuf;

/// Failures surfaced by the extractors, the fetcher and the CSV writer.
///
/// Nothing in the crate retries or swallows these; every variant reaches the
/// caller unchanged.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("GET {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("build http client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("GET {url}: unexpected status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("{context}: missing {what}")]
    Parse { context: &'static str, what: String },

    #[error("page count has no usable digits: {raw:?}")]
    Format { raw: String },

    #[error("invalid selector {css:?}: {message}")]
    Selector { css: String, message: String },

    #[error("invalid url {input:?}: {source}")]
    Url {
        input: String,
        #[source]
        source: url::ParseError,
    },

    #[error("read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("write csv {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Coarse classification of [`ScrapeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unreachable host, transport failure or non-2xx response.
    Network,
    /// The document does not have the expected shape.
    Parse,
    /// A field exists but its content cannot be coerced.
    Format,
    /// Bad caller input: selector, url or unreadable input file.
    Input,
    /// The output sink could not be written.
    Output,
}

impl ScrapeError {
    pub fn parse(context: &'static str, what: impl Into<String>) -> Self {
        Self::Parse {
            context,
            what: what.into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network { .. } | Self::HttpClient(_) | Self::HttpStatus { .. } => {
                ErrorKind::Network
            }
            Self::Parse { .. } => ErrorKind::Parse,
            Self::Format { .. } => ErrorKind::Format,
            Self::Selector { .. } | Self::Url { .. } | Self::Io { .. } => ErrorKind::Input,
            Self::Csv { .. } => ErrorKind::Output,
        }
    }
}

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;
