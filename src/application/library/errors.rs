use thiserror::Error;

use super::policy::TextField;
use crate::domain::{Availability, BookId, BookIdError};

/// 蔵書管理アプリケーション層のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    /// 蔵書数が上限に達している
    #[error("Library is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    /// 書籍が見つからない
    #[error("Book {0} not found")]
    NotFound(BookId),

    /// 状態遷移が不正（貸出中の貸出、書架にある書籍の返却）
    #[error("Book {book_id} is already {availability}")]
    InvalidStateTransition {
        book_id: BookId,
        availability: Availability,
    },

    /// 文字数制限を超えている
    #[error("{field} exceeds {max} characters")]
    FieldTooLong { field: TextField, max: usize },

    /// 入力値が不正
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// 払い出せるIDが残っていない
    #[error("Book id space exhausted")]
    IdExhausted,
}

impl From<BookIdError> for LibraryError {
    fn from(err: BookIdError) -> Self {
        match err {
            BookIdError::OutOfRange(v) => {
                LibraryError::InvalidInput(format!("{} is not a valid book id", v))
            }
        }
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, LibraryError>;
