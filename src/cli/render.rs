use std::io::{self, Write};

use crate::domain::book::Book;

/// 蔵書が空の場合に表の代わりに表示する
pub const EMPTY_LIBRARY: &str = "(no books)";

const RULE_WIDTH: usize = 79;

/// 検索結果の1行表示
///
/// 例: `Found: [ID 1] "Dune" by Frank Herbert (1965) available`
pub fn format_found(book: &Book) -> String {
    format!(
        "Found: [ID {}] \"{}\" by {} ({}) {}",
        book.id, book.title, book.author, book.year, book.availability
    )
}

fn format_row(id: &str, title: &str, author: &str, year: &str, status: &str) -> String {
    format!("{:<5} | {:<32} | {:<22} | {:<4} | {}", id, title, author, year, status)
}

/// すべての書籍を固定幅の表で出力する（空なら[`EMPTY_LIBRARY`]）
pub fn write_table<W: Write>(out: &mut W, books: &[Book]) -> io::Result<()> {
    if books.is_empty() {
        return writeln!(out, "{}", EMPTY_LIBRARY);
    }

    writeln!(out)?;
    writeln!(out, "{}", format_row("ID", "Title", "Author", "Year", "Status"))?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for book in books {
        writeln!(
            out,
            "{}",
            format_row(
                &book.id.to_string(),
                &book.title,
                &book.author,
                &book.year.to_string(),
                book.availability.as_str()
            )
        )?;
    }
    Ok(())
}
