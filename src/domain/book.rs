use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    Availability, BookBorrowed, BookId, BookRegistered, BookReturned, BorrowBookError,
    ReturnBookError,
};

/// Book集約 - 蔵書1冊
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    // 識別子
    pub id: BookId,

    // 書誌情報
    pub title: String,
    pub author: String,
    pub year: i32,

    // 貸出管理の責務
    pub availability: Availability,

    // 監査情報
    pub registered_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    pub fn is_available(&self) -> bool {
        self.availability.is_available()
    }
}

/// 純粋関数：書籍を登録する
///
/// ビジネスルール：
/// - 登録直後は書架にある（Available）
/// - 重複登録は許可する（同じタイトル・著者でも別の蔵書）
///
/// 副作用なし。新しいBookとイベントを返す。
pub fn register_book(
    id: BookId,
    title: String,
    author: String,
    year: i32,
    registered_at: DateTime<Utc>,
) -> (Book, BookRegistered) {
    let event = BookRegistered {
        book_id: id,
        title: title.clone(),
        author: author.clone(),
        year,
        registered_at,
    };

    let book = Book {
        id,
        title,
        author,
        year,
        availability: Availability::Available,
        registered_at,
        updated_at: registered_at,
    };

    (book, event)
}

/// 純粋関数：書籍を貸し出す
///
/// ビジネスルール：
/// - 貸出中の書籍は貸し出せない（無変化の遷移は拒否する）
///
/// 副作用なし。新しいBookとイベントを返す。
pub fn borrow_book(
    book: &Book,
    borrowed_at: DateTime<Utc>,
) -> Result<(Book, BookBorrowed), BorrowBookError> {
    if !book.is_available() {
        return Err(BorrowBookError::AlreadyBorrowed);
    }

    let new_book = Book {
        availability: Availability::Borrowed,
        updated_at: borrowed_at,
        ..book.clone()
    };

    let event = BookBorrowed {
        book_id: book.id,
        borrowed_at,
    };

    Ok((new_book, event))
}

/// 純粋関数：書籍を返却する
///
/// ビジネスルール：
/// - 書架にある書籍は返却できない
///
/// 副作用なし。新しいBookとイベントを返す。
pub fn return_book(
    book: &Book,
    returned_at: DateTime<Utc>,
) -> Result<(Book, BookReturned), ReturnBookError> {
    if book.is_available() {
        return Err(ReturnBookError::AlreadyAvailable);
    }

    let new_book = Book {
        availability: Availability::Available,
        updated_at: returned_at,
        ..book.clone()
    };

    let event = BookReturned {
        book_id: book.id,
        returned_at,
    };

    Ok((new_book, event))
}

/// 大文字小文字を区別しない部分一致
///
/// 空のクエリは常に一致する。
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// 純粋関数：タイトルの部分一致
pub fn title_matches(book: &Book, query: &str) -> bool {
    contains_ignore_case(&book.title, query)
}

/// 純粋関数：著者の部分一致
pub fn author_matches(book: &Book, query: &str) -> bool {
    contains_ignore_case(&book.author, query)
}
