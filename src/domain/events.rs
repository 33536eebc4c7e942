use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::BookId;

/// イベント：書籍が登録された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRegistered {
    pub book_id: BookId,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub registered_at: DateTime<Utc>,
}

/// イベント：書籍が貸し出された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookBorrowed {
    pub book_id: BookId,
    pub borrowed_at: DateTime<Utc>,
}

/// イベント：書籍が返却された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookReturned {
    pub book_id: BookId,
    pub returned_at: DateTime<Utc>,
}

/// ドメインイベント統合型
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DomainEvent {
    BookRegistered(BookRegistered),
    BookBorrowed(BookBorrowed),
    BookReturned(BookReturned),
}

impl DomainEvent {
    /// イベントの対象となる書籍ID
    pub fn book_id(&self) -> BookId {
        match self {
            DomainEvent::BookRegistered(e) => e.book_id,
            DomainEvent::BookBorrowed(e) => e.book_id,
            DomainEvent::BookReturned(e) => e.book_id,
        }
    }
}
