use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::BookId;

/// コマンド：書籍を登録する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddBook {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub requested_at: DateTime<Utc>,
}

/// コマンド：書籍を貸し出す
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowBook {
    pub book_id: BookId,
    pub borrowed_at: DateTime<Utc>,
}

/// コマンド：書籍を返却する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnBook {
    pub book_id: BookId,
    pub returned_at: DateTime<Utc>,
}
