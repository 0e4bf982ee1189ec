use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context as _;

use crate::cli::BestBooksArgs;
use crate::document::{Document, required_attr, required_within, selector, trimmed_text};
use crate::error::Result;
use crate::formats::BestBookEntry;

const CONTEXT: &str = "best books";

const CATEGORY_BLOCK: &str = "div.category.clearFix";
const CATEGORY_LABEL: &str = "h4.category__copy";
const WINNER_IMAGE: &str = "img.category__winnerImage";
const LINK: &str = "a";

/// One entry per award category, in page order.
///
/// The winner's title comes from the cover image's `alt` text; the page has no
/// visible text node carrying it. The link is the block's first `href`, trimmed
/// and otherwise untouched.
pub fn extract_best_books(doc: &Document) -> Result<Vec<BestBookEntry>> {
    let block_selector = selector(CATEGORY_BLOCK)?;
    let label_selector = selector(CATEGORY_LABEL)?;
    let image_selector = selector(WINNER_IMAGE)?;
    let link_selector = selector(LINK)?;

    doc.select(&block_selector)
        .enumerate()
        .map(|(index, block)| -> Result<BestBookEntry> {
            let label = required_within(
                block,
                &label_selector,
                CONTEXT,
                &format!("category label in block {index}"),
            )?;
            let image = required_within(
                block,
                &image_selector,
                CONTEXT,
                &format!("winner image in block {index}"),
            )?;
            let link = required_within(
                block,
                &link_selector,
                CONTEXT,
                &format!("link in block {index}"),
            )?;

            Ok(BestBookEntry {
                category: trimmed_text(label),
                title: required_attr(image, "alt", CONTEXT)?,
                url: required_attr(link, "href", CONTEXT)?,
            })
        })
        .collect()
}

pub fn run(args: BestBooksArgs) -> anyhow::Result<()> {
    let input = PathBuf::from(&args.input);
    let doc = Document::from_path(&input).context("load best books page")?;
    let entries = extract_best_books(&doc).context("extract best books")?;
    tracing::info!(input = %input.display(), categories = entries.len(), "best books extracted");

    let mut stdout = std::io::stdout().lock();
    for entry in &entries {
        serde_json::to_writer(&mut stdout, entry).context("serialize best book entry")?;
        stdout.write_all(b"\n").context("write newline")?;
    }
    stdout.flush().context("flush stdout")?;

    Ok(())
}
