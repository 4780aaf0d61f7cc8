//! Store access for the loader
//!
//! Upserts and lookups against the `authors` and `books` tables created by
//! `reads_common::db::init_database`.

pub mod authors;
pub mod books;

pub use authors::{count_authors, load_author, load_author_name, save_author};
pub use books::{count_books, load_book, save_book};
