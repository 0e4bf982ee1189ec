use std::path::Path;

use crate::error::{Result, ScrapeError};
use crate::formats::BookRecord;

pub const HEADER: [&str; 2] = ["Book title", "Author Name"];

/// Writes `records` to `path`, replacing any existing file.
///
/// The file holds the header row followed by one row per record, in input
/// order. Fields are quoted only when they contain a comma, a quote or a line
/// break.
pub fn write_books_csv(records: &[BookRecord], path: &Path) -> Result<()> {
    let csv_err = |source| ScrapeError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b',')
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_path(path)
        .map_err(csv_err)?;

    writer.write_record(HEADER).map_err(csv_err)?;
    for record in records {
        writer
            .write_record([record.title.as_str(), record.author.as_str()])
            .map_err(csv_err)?;
    }
    writer
        .flush()
        .map_err(|source| csv_err(csv::Error::from(source)))?;

    Ok(())
}
