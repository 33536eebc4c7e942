use crate::domain::book::Book;
use crate::ports::book_repository::BookRepository as BookRepositoryTrait;

/// BookRepositoryのインメモリ実装
///
/// `Vec`で保持するため、走査順は挿入順と一致する。
/// プロセス終了とともに破棄される。
#[derive(Debug, Default)]
pub struct BookRepository {
    books: Vec<Book>,
}

impl BookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            books: Vec::with_capacity(capacity),
        }
    }
}

impl BookRepositoryTrait for BookRepository {
    fn len(&self) -> usize {
        self.books.len()
    }

    fn append(&mut self, book: Book) {
        self.books.push(book);
    }

    fn books(&self) -> &[Book] {
        &self.books
    }

    fn replace(&mut self, book: Book) -> Option<Book> {
        let slot = self.books.iter_mut().find(|b| b.id == book.id)?;
        Some(std::mem::replace(slot, book))
    }
}
