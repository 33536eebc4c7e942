mod errors;
mod library_service;
mod policy;

pub use errors::{LibraryError, Result};
pub use library_service::{
    LibraryContext, add_book, book_at, borrow_book, find_by_id, find_first_by_author,
    find_first_by_title, history, list_books, return_book,
};
pub use policy::{DEFAULT_CAPACITY, LibraryPolicy, TextField};
