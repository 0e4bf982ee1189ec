use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context as _;

use crate::cli::SearchResultsArgs;
use crate::document::{Document, required_within, selector, trimmed_text};
use crate::error::Result;
use crate::formats::BookRecord;

const CONTEXT: &str = "search results";

const ROW: &str = r#"tr[itemtype="http://schema.org/Book"]"#;
const TITLE: &str = "a.bookTitle";
const AUTHOR: &str = "a.authorName";

/// Extracts one (title, author) pair per book row, in ranking order.
///
/// Title and author are read from the same row in a single pass, so a row
/// missing either element fails the whole extraction instead of shifting
/// later pairs.
pub fn extract_search_results(doc: &Document) -> Result<Vec<BookRecord>> {
    let row_selector = selector(ROW)?;
    let title_selector = selector(TITLE)?;
    let author_selector = selector(AUTHOR)?;

    doc.select(&row_selector)
        .enumerate()
        .map(|(index, row)| -> Result<BookRecord> {
            let title = required_within(
                row,
                &title_selector,
                CONTEXT,
                &format!("title link in row {index}"),
            )?;
            let author = required_within(
                row,
                &author_selector,
                CONTEXT,
                &format!("author link in row {index}"),
            )?;
            Ok(BookRecord::new(trimmed_text(title), trimmed_text(author)))
        })
        .collect()
}

pub fn run(args: SearchResultsArgs) -> anyhow::Result<()> {
    let input = PathBuf::from(&args.input);
    let doc = Document::from_path(&input).context("load search results page")?;
    let records = extract_search_results(&doc).context("extract search results")?;
    tracing::info!(input = %input.display(), rows = records.len(), "search results extracted");

    if let Some(csv_path) = args.csv.as_deref() {
        let csv_path = PathBuf::from(csv_path);
        crate::csv_out::write_books_csv(&records, &csv_path).context("write csv")?;
        tracing::info!(out = %csv_path.display(), "csv written");
    }

    let mut stdout = std::io::stdout().lock();
    for record in &records {
        serde_json::to_writer(&mut stdout, record).context("serialize book record")?;
        stdout.write_all(b"\n").context("write newline")?;
    }
    stdout.flush().context("flush stdout")?;

    Ok(())
}
