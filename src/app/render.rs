//! Turns core outcomes into console text. The core never formats messages.

use crate::config::{DisplaySettings, OutputFormat};
use crate::domain::model::{Book, LoanSummary, PatronSummary, ReturnReceipt};
use crate::utils::error::{AppResult, LibraryError};
use chrono::NaiveDate;
use serde::Serialize;

pub fn book_registered(title: &str) -> String {
    format!("✅ Book registered: {}", title)
}

pub fn patron_registered(name: &str) -> String {
    format!("✅ Patron registered: {}", name)
}

pub fn book_lent(due_date: NaiveDate) -> String {
    format!("✅ Book lent until {}", due_date)
}

pub fn book_returned(receipt: &ReturnReceipt, display: &DisplaySettings) -> String {
    if receipt.is_on_time() {
        return "✅ Book returned on time, no fine.".to_string();
    }
    format!(
        "⚠ Book returned {} day(s) late.\n💰 Fine due: {}{}",
        receipt.days_late, display.currency_symbol, receipt.fine_amount
    )
}

pub fn warning(err: &LibraryError) -> String {
    let message = match err {
        LibraryError::BookNotFound { code } => format!("Book '{}' not found.", code),
        LibraryError::PatronNotFound { id } => format!("Patron '{}' not found.", id),
        LibraryError::DuplicateBookCode { code } => {
            format!("A book with code '{}' already exists.", code)
        }
        LibraryError::DuplicatePatronId { id } => {
            format!("A patron with ID '{}' already exists.", id)
        }
        LibraryError::BookUnavailable { .. } => "The book is not available.".to_string(),
        LibraryError::PatronLimitReached { limit, .. } => {
            format!("The patron already has the maximum of {} books.", limit)
        }
        LibraryError::NoActiveLoan { .. } => {
            "There is no loan of this book for this patron.".to_string()
        }
        LibraryError::DateOutOfRange { start } => {
            format!("Cannot lend on {}: the due date is out of range.", start)
        }
    };
    format!("⚠ {}", message)
}

pub fn available_books(books: &[Book], display: &DisplaySettings) -> AppResult<String> {
    if display.format == OutputFormat::Json {
        return to_json(books);
    }
    let mut text = String::from("📚 Available books:");
    for book in books {
        text.push_str(&format!(
            "\n[{}] {} - {} ({})",
            book.code(),
            book.title(),
            book.author(),
            if book.is_available() { "Available" } else { "Lent" }
        ));
    }
    Ok(text)
}

pub fn patrons(patrons: &[PatronSummary], display: &DisplaySettings) -> AppResult<String> {
    if display.format == OutputFormat::Json {
        return to_json(patrons);
    }
    let mut text = String::from("👥 Registered patrons:");
    for patron in patrons {
        text.push_str(&format!("\nPatron: {} (ID: {})", patron.name, patron.id));
        text.push_str("\nBorrowed books:");
        for title in &patron.borrowed_titles {
            text.push_str(&format!("\n - {}", title));
        }
    }
    Ok(text)
}

pub fn loans(loans: &[LoanSummary], display: &DisplaySettings) -> AppResult<String> {
    if display.format == OutputFormat::Json {
        return to_json(loans);
    }
    let mut text = String::from("📖 Active loans:");
    for loan in loans {
        text.push_str(&format!(
            "\nBook: {} | Patron: {} | From: {} | Due: {}",
            loan.book_title, loan.patron_id, loan.start_date, loan.due_date
        ));
    }
    Ok(text)
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
