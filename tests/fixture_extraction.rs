use std::path::{Path, PathBuf};

use bookscrape::best_books::extract_best_books;
use bookscrape::csv_out::write_books_csv;
use bookscrape::document::Document;
use bookscrape::formats::{BestBookEntry, BookRecord};
use bookscrape::search_links::{BOOK_PATH_PREFIX, DEFAULT_ORIGIN, collect_search_links};
use bookscrape::search_results::extract_search_results;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn search_results_fixture_has_twenty_ranked_rows() -> anyhow::Result<()> {
    let doc = Document::from_path(&fixture("search_results.htm"))?;
    let records = extract_search_results(&doc)?;

    assert_eq!(records.len(), 20);
    assert_eq!(
        records[0],
        BookRecord::new(
            "Harry Potter and the Deathly Hallows (Harry Potter, #7)",
            "J.K. Rowling"
        )
    );
    assert_eq!(
        records[1],
        BookRecord::new(
            "Harry Potter and the Sorcerer's Stone (Harry Potter, #1)",
            "J.K. Rowling"
        )
    );
    assert_eq!(
        records[7],
        BookRecord::new(
            "Harry Potter and the Cursed Child: Parts One and Two (Harry Potter, #8)",
            "John Tiffany"
        )
    );
    assert_eq!(
        records[19],
        BookRecord::new(
            "Harry Potter: The Prequel (Harry Potter, #0.5)",
            "J.K. Rowling"
        )
    );

    for record in &records {
        assert_eq!(record.title, record.title.trim());
        assert_eq!(record.author, record.author.trim());
        assert!(!record.title.is_empty() && !record.author.is_empty());
    }
    Ok(())
}

#[test]
fn best_books_fixture_has_twenty_categories() -> anyhow::Result<()> {
    let doc = Document::from_path(&fixture("best_books_2020.htm"))?;
    let entries = extract_best_books(&doc)?;

    assert_eq!(entries.len(), 20);
    assert_eq!(
        entries[0],
        BestBookEntry {
            category: "Fiction".to_owned(),
            title: "The Midnight Library".to_owned(),
            url: "https://www.goodreads.com/choiceawards/best-fiction-books-2020".to_owned(),
        }
    );
    assert_eq!(entries[1].category, "Mystery & Thriller");
    assert_eq!(
        entries[19],
        BestBookEntry {
            category: "Picture Books".to_owned(),
            title: "Antiracist Baby".to_owned(),
            url: "https://www.goodreads.com/choiceawards/best-picture-books-2020".to_owned(),
        }
    );
    Ok(())
}

#[test]
fn search_page_yields_ten_book_urls() -> anyhow::Result<()> {
    let doc = Document::from_path(&fixture("search_results.htm"))?;
    let origin = url::Url::parse(DEFAULT_ORIGIN)?;

    let urls = collect_search_links(&doc, &origin, 10)?;

    assert_eq!(urls.len(), 10);
    let prefix = format!("{DEFAULT_ORIGIN}{BOOK_PATH_PREFIX}");
    assert_eq!(prefix, "https://www.goodreads.com/book/show/");
    for url in &urls {
        assert!(url.as_str().starts_with(&prefix), "{url}");
    }
    assert!(urls[0].as_str().ends_with("rank=1"), "{}", urls[0]);
    assert!(urls[9].as_str().ends_with("rank=10"), "{}", urls[9]);
    Ok(())
}

#[test]
fn csv_of_search_results_reads_back_row_for_row() -> anyhow::Result<()> {
    let temp = tempfile::TempDir::new()?;
    let csv_path = temp.path().join("test.csv");
    let doc = Document::from_path(&fixture("search_results.htm"))?;
    let records = extract_search_results(&doc)?;

    write_books_csv(&records, &csv_path)?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(&csv_path)?;
    let rows = reader
        .records()
        .map(|row| row.map(|row| row.iter().map(str::to_owned).collect::<Vec<_>>()))
        .collect::<Result<Vec<_>, _>>()?;

    assert_eq!(rows.len(), records.len() + 1);
    assert_eq!(rows[0], vec!["Book title", "Author Name"]);
    for (row, record) in rows[1..].iter().zip(&records) {
        assert_eq!(row, &vec![record.title.clone(), record.author.clone()]);
    }
    assert_eq!(
        rows[1],
        vec![
            "Harry Potter and the Deathly Hallows (Harry Potter, #7)",
            "J.K. Rowling"
        ]
    );
    assert_eq!(
        rows[20],
        vec!["Harry Potter: The Prequel (Harry Potter, #0.5)", "J.K. Rowling"]
    );
    Ok(())
}
