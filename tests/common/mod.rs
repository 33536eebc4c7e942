#![allow(dead_code)]

use chrono::Utc;
use mini_library::application::library::{self, LibraryContext, LibraryPolicy, Result};
use mini_library::domain::{
    BookId,
    commands::{AddBook, BorrowBook, ReturnBook},
};

/// 既定ポリシーでインメモリのライブラリを作成
pub fn new_library() -> LibraryContext {
    LibraryContext::in_memory(LibraryPolicy::default())
}

/// 容量を指定してインメモリのライブラリを作成
pub fn library_with_capacity(capacity: usize) -> LibraryContext {
    LibraryContext::in_memory(LibraryPolicy::with_capacity(capacity))
}

pub fn add(ctx: &mut LibraryContext, title: &str, author: &str, year: i32) -> Result<BookId> {
    library::add_book(
        ctx,
        AddBook {
            title: title.to_string(),
            author: author.to_string(),
            year,
            requested_at: Utc::now(),
        },
    )
}

pub fn borrow(ctx: &mut LibraryContext, book_id: BookId) -> Result<()> {
    library::borrow_book(
        ctx,
        BorrowBook {
            book_id,
            borrowed_at: Utc::now(),
        },
    )
}

pub fn give_back(ctx: &mut LibraryContext, book_id: BookId) -> Result<()> {
    library::return_book(
        ctx,
        ReturnBook {
            book_id,
            returned_at: Utc::now(),
        },
    )
}

pub fn id(value: i64) -> BookId {
    BookId::try_from(value).unwrap()
}
