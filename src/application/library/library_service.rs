use crate::adapters::memory;
use crate::domain::{
    self, BorrowBookError, DomainEvent, ReturnBookError, book::Book, commands::*, value_objects::*,
};
use crate::ports::*;

use super::errors::{LibraryError, Result};
use super::policy::{DEFAULT_CAPACITY, LibraryPolicy, TextField};

/// 蔵書管理のコンテキスト
///
/// 蔵書の並び、イベントログ、ポリシー、次に払い出すIDを1つにまとめる。
/// 起動時に1度だけ生成され、プロセス終了まで生存する。
pub struct LibraryContext {
    books: Box<dyn BookRepository>,
    event_log: Box<dyn EventLog>,
    policy: LibraryPolicy,
    next_id: Option<BookId>,
}

impl LibraryContext {
    fn new(
        books: Box<dyn BookRepository>,
        event_log: Box<dyn EventLog>,
        policy: LibraryPolicy,
    ) -> Self {
        Self {
            books,
            event_log,
            policy,
            next_id: Some(BookId::first()),
        }
    }

    /// インメモリアダプターで構築する
    pub fn in_memory(policy: LibraryPolicy) -> Self {
        let books = memory::BookRepository::with_capacity(policy.capacity.min(DEFAULT_CAPACITY));
        Self::new(Box::new(books), Box::new(memory::EventLog::new()), policy)
    }

    /// 現在のポリシー（読み取り専用）
    pub fn policy(&self) -> &LibraryPolicy {
        &self.policy
    }

    /// 蔵書数が上限に達しているか
    pub fn is_full(&self) -> bool {
        self.books.len() >= self.policy.capacity
    }

    fn record(&mut self, event: DomainEvent) {
        match serde_json::to_string(&event) {
            Ok(json) => {
                tracing::debug!(book_id = %event.book_id(), event = %json, "domain event recorded")
            }
            Err(e) => tracing::warn!("Failed to serialize domain event: {}", e),
        }
        self.event_log.append(event);
    }
}

/// 書籍を登録する
///
/// ビジネスルール：
/// - 蔵書数が上限未満であること
/// - タイトル・著者が文字数制限内であること（設定されている場合）
///
/// 失敗した場合、蔵書もIDも変化しない。
///
/// # 戻り値
/// 成功時は払い出されたID
pub fn add_book(ctx: &mut LibraryContext, cmd: AddBook) -> Result<BookId> {
    // 1. 容量確認
    if ctx.is_full() {
        tracing::info!(capacity = ctx.policy.capacity, "add rejected: library is full");
        return Err(LibraryError::CapacityExceeded {
            capacity: ctx.policy.capacity,
        });
    }

    // 2. 文字数制限
    ctx.policy.check_text(TextField::Title, &cmd.title)?;
    ctx.policy.check_text(TextField::Author, &cmd.author)?;

    // 3. IDの払い出し
    let id = ctx.next_id.ok_or(LibraryError::IdExhausted)?;

    // 4. ドメイン層の純粋関数を呼び出し
    let (book, event) =
        domain::book::register_book(id, cmd.title, cmd.author, cmd.year, cmd.requested_at);

    // 5. 保存
    ctx.books.append(book);
    ctx.next_id = id.next();
    ctx.record(DomainEvent::BookRegistered(event));

    tracing::info!(book_id = %id, "book added");
    Ok(id)
}

/// IDで書籍の位置を検索する（線形走査）
pub fn find_by_id(ctx: &LibraryContext, id: BookId) -> Option<usize> {
    ctx.books.books().iter().position(|b| b.id == id)
}

/// タイトルの部分一致で最初の書籍の位置を検索する
///
/// 大文字小文字を区別しない。空のクエリは先頭の書籍に一致する。
pub fn find_first_by_title(ctx: &LibraryContext, query: &str) -> Option<usize> {
    ctx.books
        .books()
        .iter()
        .position(|b| domain::book::title_matches(b, query))
}

/// 著者の部分一致で最初の書籍の位置を検索する
pub fn find_first_by_author(ctx: &LibraryContext, query: &str) -> Option<usize> {
    ctx.books
        .books()
        .iter()
        .position(|b| domain::book::author_matches(b, query))
}

/// 検索結果の位置から書籍を取得する
pub fn book_at(ctx: &LibraryContext, index: usize) -> Option<&Book> {
    ctx.books.books().get(index)
}

fn load_book(ctx: &LibraryContext, id: BookId) -> Result<Book> {
    ctx.books.get(id).cloned().ok_or(LibraryError::NotFound(id))
}

fn save_book(ctx: &mut LibraryContext, book: Book) -> Result<()> {
    let id = book.id;
    ctx.books
        .replace(book)
        .map(|_| ())
        .ok_or(LibraryError::NotFound(id))
}

/// 書籍を貸し出す
///
/// ビジネスルール：
/// - 書籍が存在すること
/// - 書籍が書架にあること（貸出中の再貸出は拒否）
pub fn borrow_book(ctx: &mut LibraryContext, cmd: BorrowBook) -> Result<()> {
    // 1. 書籍の取得
    let book = load_book(ctx, cmd.book_id)?;

    // 2. ドメイン層の純粋関数を呼び出し
    let (borrowed, event) =
        domain::book::borrow_book(&book, cmd.borrowed_at).map_err(|e| match e {
            BorrowBookError::AlreadyBorrowed => LibraryError::InvalidStateTransition {
                book_id: book.id,
                availability: book.availability,
            },
        })?;

    // 3. 保存
    save_book(ctx, borrowed)?;
    ctx.record(DomainEvent::BookBorrowed(event));

    tracing::info!(book_id = %cmd.book_id, "book borrowed");
    Ok(())
}

/// 書籍を返却する
///
/// ビジネスルール：
/// - 書籍が存在すること
/// - 書籍が貸出中であること（書架にある書籍の返却は拒否）
pub fn return_book(ctx: &mut LibraryContext, cmd: ReturnBook) -> Result<()> {
    // 1. 書籍の取得
    let book = load_book(ctx, cmd.book_id)?;

    // 2. ドメイン層の純粋関数を呼び出し
    let (returned, event) =
        domain::book::return_book(&book, cmd.returned_at).map_err(|e| match e {
            ReturnBookError::AlreadyAvailable => LibraryError::InvalidStateTransition {
                book_id: book.id,
                availability: book.availability,
            },
        })?;

    // 3. 保存
    save_book(ctx, returned)?;
    ctx.record(DomainEvent::BookReturned(event));

    tracing::info!(book_id = %cmd.book_id, "book returned");
    Ok(())
}

/// すべての書籍を挿入順で返す
///
/// 空の場合は空のスライス（エラーではない）。
pub fn list_books(ctx: &LibraryContext) -> &[Book] {
    ctx.books.books()
}

/// 記録されたドメインイベントを追記順で返す
pub fn history(ctx: &LibraryContext) -> &[DomainEvent] {
    ctx.event_log.events()
}
