use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A catalog entry. `code` is unique within a library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    title: String,
    author: String,
    code: String,
    available: bool,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            code: code.into(),
            available: true,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    // Available --lend--> Lent
    pub(crate) fn mark_lent(&mut self) {
        debug_assert!(self.available, "book {} lent twice", self.code);
        self.available = false;
    }

    // Lent --return--> Available
    pub(crate) fn mark_available(&mut self) {
        debug_assert!(!self.available, "book {} returned while available", self.code);
        self.available = true;
    }
}

/// A registered borrower. `borrowed` holds book codes in lending order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patron {
    name: String,
    id: String,
    borrowed: Vec<String>,
}

impl Patron {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            borrowed: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn borrowed(&self) -> &[String] {
        &self.borrowed
    }

    pub fn can_borrow(&self, limit: usize) -> bool {
        self.borrowed.len() < limit
    }

    pub(crate) fn add_borrowed(&mut self, code: &str) {
        self.borrowed.push(code.to_string());
    }

    /// Removes the first entry equal to `code`. Returns false if none matched.
    pub(crate) fn remove_borrowed(&mut self, code: &str) -> bool {
        match self.borrowed.iter().position(|c| c == code) {
            Some(idx) => {
                self.borrowed.remove(idx);
                true
            }
            None => false,
        }
    }
}

/// An active lending. Never modified after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    pub book_code: String,
    pub patron_id: String,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
}

impl Loan {
    pub fn involves(&self, book_code: &str, patron_id: &str) -> bool {
        self.book_code == book_code && self.patron_id == patron_id
    }
}

/// Result of a committed return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnReceipt {
    pub days_late: u64,
    pub fine_amount: u64,
}

impl ReturnReceipt {
    pub fn is_on_time(&self) -> bool {
        self.days_late == 0
    }
}

/// Listing row for a patron: identity plus the titles they currently hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatronSummary {
    pub name: String,
    pub id: String,
    pub borrowed_titles: Vec<String>,
}

/// Listing row for an active loan, with the book title resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanSummary {
    pub book_code: String,
    pub book_title: String,
    pub patron_id: String,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
}
