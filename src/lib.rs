#![forbid(unsafe_code)]

pub mod best_books;
pub mod book_summary;
pub mod cli;
pub mod csv_out;
pub mod document;
pub mod error;
pub mod fetch;
pub mod formats;
pub mod logging;
pub mod raw_store;
pub mod search_links;
pub mod search_results;
