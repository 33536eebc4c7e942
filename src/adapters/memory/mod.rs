pub mod book_repository;
pub mod event_log;

pub use book_repository::BookRepository;
pub use event_log::EventLog;
