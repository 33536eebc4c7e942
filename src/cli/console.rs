use chrono::Utc;
use std::io::{self, BufRead, Write};

use super::error::{Operation, report};
use super::prompt::Prompter;
use super::render::{format_found, write_table};
use crate::application::library::{self, LibraryContext};
use crate::domain::{
    BookId,
    commands::{AddBook, BorrowBook, ReturnBook},
};

const MENU: &str = "\n--- Mini Library ---\n\
                    1) Add book\n\
                    2) Search by title\n\
                    3) Search by author\n\
                    4) Borrow by ID\n\
                    5) Return by ID\n\
                    6) List all\n\
                    0) Exit\n";

/// メニュー項目（入力された番号に対応）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    AddBook,
    SearchByTitle,
    SearchByAuthor,
    Borrow,
    Return,
    ListAll,
    Unknown(i32),
}

impl From<i32> for MenuChoice {
    fn from(value: i32) -> Self {
        match value {
            0 => MenuChoice::Exit,
            1 => MenuChoice::AddBook,
            2 => MenuChoice::SearchByTitle,
            3 => MenuChoice::SearchByAuthor,
            4 => MenuChoice::Borrow,
            5 => MenuChoice::Return,
            6 => MenuChoice::ListAll,
            other => MenuChoice::Unknown(other),
        }
    }
}

/// メニューループを実行する
///
/// `0`が選ばれるか入力が終端するまで繰り返す。
/// 蔵書操作の失敗は`output`に1行で表示してループを継続する。
/// ループを中断するのは入出力エラーのみ。
pub fn run<R: BufRead, W: Write>(
    ctx: &mut LibraryContext,
    input: R,
    output: W,
) -> io::Result<()> {
    let mut console = Prompter::new(input, output);

    loop {
        write!(console.output(), "{}", MENU)?;

        // 入力終端は0（終了）として扱う
        let choice = console.ask_int::<i32>("Choose: ")?.unwrap_or(0);
        let choice = MenuChoice::from(choice);
        tracing::debug!(?choice, "menu choice");

        match choice {
            MenuChoice::Exit => break,
            MenuChoice::AddBook => add(ctx, &mut console)?,
            MenuChoice::SearchByTitle => search(ctx, &mut console, SearchField::Title)?,
            MenuChoice::SearchByAuthor => search(ctx, &mut console, SearchField::Author)?,
            MenuChoice::Borrow => borrow(ctx, &mut console)?,
            MenuChoice::Return => give_back(ctx, &mut console)?,
            MenuChoice::ListAll => write_table(console.output(), library::list_books(ctx))?,
            MenuChoice::Unknown(_) => writeln!(console.output(), "Unknown choice.")?,
        }
    }

    writeln!(console.output(), "Bye!")?;
    console.output().flush()
}

fn add<R: BufRead, W: Write>(
    ctx: &mut LibraryContext,
    console: &mut Prompter<R, W>,
) -> io::Result<()> {
    if ctx.is_full() {
        tracing::info!(capacity = ctx.policy().capacity, "add skipped: library is full");
        return writeln!(console.output(), "Library is full.");
    }

    let title = console.ask_text("Title : ")?.unwrap_or_default();
    let author = console.ask_text("Author: ")?.unwrap_or_default();
    let year = console.ask_int::<i32>("Year  : ")?.unwrap_or(0);

    let cmd = AddBook {
        title,
        author,
        year,
        requested_at: Utc::now(),
    };

    let message = match library::add_book(ctx, cmd) {
        Ok(_) => "Added.",
        Err(e) => report(Operation::Add, &e),
    };
    writeln!(console.output(), "{}", message)
}

#[derive(Debug, Clone, Copy)]
enum SearchField {
    Title,
    Author,
}

fn search<R: BufRead, W: Write>(
    ctx: &LibraryContext,
    console: &mut Prompter<R, W>,
    field: SearchField,
) -> io::Result<()> {
    let (prompt, find): (&str, fn(&LibraryContext, &str) -> Option<usize>) = match field {
        SearchField::Title => ("Title contains: ", library::find_first_by_title),
        SearchField::Author => ("Author contains: ", library::find_first_by_author),
    };

    let query = console.ask_text(prompt)?.unwrap_or_default();

    match find(ctx, &query).and_then(|i| library::book_at(ctx, i)) {
        Some(book) => writeln!(console.output(), "{}", format_found(book)),
        None => writeln!(console.output(), "No match."),
    }
}

/// IDを読み込む。入力終端は0（存在しないID）として扱う。
fn ask_id<R: BufRead, W: Write>(
    console: &mut Prompter<R, W>,
    prompt: &str,
) -> io::Result<i64> {
    Ok(console.ask_int::<i64>(prompt)?.unwrap_or(0))
}

fn borrow<R: BufRead, W: Write>(
    ctx: &mut LibraryContext,
    console: &mut Prompter<R, W>,
) -> io::Result<()> {
    let raw = ask_id(console, "ID to borrow: ")?;

    let result = BookId::try_from(raw)
        .map_err(library::LibraryError::from)
        .and_then(|book_id| {
            library::borrow_book(
                ctx,
                BorrowBook {
                    book_id,
                    borrowed_at: Utc::now(),
                },
            )
        });

    let message = match result {
        Ok(()) => "Borrowed.",
        Err(e) => report(Operation::Borrow, &e),
    };
    writeln!(console.output(), "{}", message)
}

fn give_back<R: BufRead, W: Write>(
    ctx: &mut LibraryContext,
    console: &mut Prompter<R, W>,
) -> io::Result<()> {
    let raw = ask_id(console, "ID to return: ")?;

    let result = BookId::try_from(raw)
        .map_err(library::LibraryError::from)
        .and_then(|book_id| {
            library::return_book(
                ctx,
                ReturnBook {
                    book_id,
                    returned_at: Utc::now(),
                },
            )
        });

    let message = match result {
        Ok(()) => "Returned.",
        Err(e) => report(Operation::Return, &e),
    };
    writeln!(console.output(), "{}", message)
}
