use crate::domain::model::{Book, Loan, LoanSummary, Patron, PatronSummary, ReturnReceipt};
use crate::domain::rules::{self, MAX_LOANS_PER_PATRON};
use crate::utils::error::{InvariantViolation, LibraryError, Result};
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};

/// In-memory aggregate owning every book, patron and active loan.
///
/// Books and patrons are keyed by their identifier for lookup; a parallel
/// key list keeps registration order for listings. Loans and
/// `Patron::borrowed` refer to entities by key only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Library {
    books: HashMap<String, Book>,
    book_order: Vec<String>,
    patrons: HashMap<String, Patron>,
    patron_order: Vec<String>,
    loans: Vec<Loan>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_book(&mut self, title: &str, author: &str, code: &str) -> Result<()> {
        if self.books.contains_key(code) {
            tracing::debug!("register_book rejected: duplicate code '{}'", code);
            return Err(LibraryError::DuplicateBookCode {
                code: code.to_string(),
            });
        }

        self.books
            .insert(code.to_string(), Book::new(title, author, code));
        self.book_order.push(code.to_string());
        tracing::info!("📚 Book registered: [{}] {}", code, title);
        self.debug_check();
        Ok(())
    }

    pub fn register_patron(&mut self, name: &str, id: &str) -> Result<()> {
        if self.patrons.contains_key(id) {
            tracing::debug!("register_patron rejected: duplicate id '{}'", id);
            return Err(LibraryError::DuplicatePatronId { id: id.to_string() });
        }

        self.patrons.insert(id.to_string(), Patron::new(name, id));
        self.patron_order.push(id.to_string());
        tracing::info!("👤 Patron registered: {} ({})", name, id);
        self.debug_check();
        Ok(())
    }

    /// Read-only lookup by exact code.
    pub fn find_book(&self, code: &str) -> Result<&Book> {
        self.books.get(code).ok_or_else(|| LibraryError::BookNotFound {
            code: code.to_string(),
        })
    }

    /// Read-only lookup by exact id.
    pub fn find_patron(&self, id: &str) -> Result<&Patron> {
        self.patrons
            .get(id)
            .ok_or_else(|| LibraryError::PatronNotFound { id: id.to_string() })
    }

    /// Lends `code` to `patron_id` starting `today`. Returns the due date.
    ///
    /// Checks run in order (book, patron, availability, limit, due date in
    /// range) and nothing is mutated unless all of them pass.
    pub fn lend(&mut self, code: &str, patron_id: &str, today: NaiveDate) -> Result<NaiveDate> {
        let due_date = match self.validate_lend(code, patron_id, today) {
            Ok(due_date) => due_date,
            Err(e) => {
                tracing::debug!("lend rejected: {}", e);
                return Err(e);
            }
        };

        // Both lookups were validated above.
        if let Some(book) = self.books.get_mut(code) {
            book.mark_lent();
        }
        if let Some(patron) = self.patrons.get_mut(patron_id) {
            patron.add_borrowed(code);
        }
        self.loans.push(Loan {
            book_code: code.to_string(),
            patron_id: patron_id.to_string(),
            start_date: today,
            due_date,
        });

        tracing::info!("📖 Book '{}' lent to '{}' until {}", code, patron_id, due_date);
        self.debug_check();
        Ok(due_date)
    }

    fn validate_lend(&self, code: &str, patron_id: &str, today: NaiveDate) -> Result<NaiveDate> {
        let book = self.find_book(code)?;
        let patron = self.find_patron(patron_id)?;

        if !book.is_available() {
            return Err(LibraryError::BookUnavailable {
                code: code.to_string(),
            });
        }
        if !patron.can_borrow(MAX_LOANS_PER_PATRON) {
            return Err(LibraryError::PatronLimitReached {
                id: patron_id.to_string(),
                limit: MAX_LOANS_PER_PATRON,
            });
        }
        rules::due_date(today).ok_or(LibraryError::DateOutOfRange { start: today })
    }

    /// Closes the active loan of `code` to `patron_id` and computes the fine.
    pub fn return_book(
        &mut self,
        code: &str,
        patron_id: &str,
        today: NaiveDate,
    ) -> Result<ReturnReceipt> {
        let loan_idx = match self.validate_return(code, patron_id) {
            Ok(idx) => idx,
            Err(e) => {
                tracing::debug!("return rejected: {}", e);
                return Err(e);
            }
        };

        let loan = self.loans.remove(loan_idx);
        let receipt = rules::assess_return(loan.due_date, today);

        if let Some(book) = self.books.get_mut(code) {
            book.mark_available();
        }
        if let Some(patron) = self.patrons.get_mut(patron_id) {
            patron.remove_borrowed(code);
        }

        if receipt.is_on_time() {
            tracing::info!("✅ Book '{}' returned on time by '{}'", code, patron_id);
        } else {
            tracing::info!(
                "⚠️ Book '{}' returned by '{}' {} day(s) late, fine {}",
                code,
                patron_id,
                receipt.days_late,
                receipt.fine_amount
            );
        }
        self.debug_check();
        Ok(receipt)
    }

    fn validate_return(&self, code: &str, patron_id: &str) -> Result<usize> {
        self.find_book(code)?;
        self.find_patron(patron_id)?;

        self.loans
            .iter()
            .position(|loan| loan.involves(code, patron_id))
            .ok_or_else(|| LibraryError::NoActiveLoan {
                code: code.to_string(),
                id: patron_id.to_string(),
            })
    }

    /// Available books in registration order.
    pub fn list_available_books(&self) -> Vec<Book> {
        self.books_in_order()
            .filter(|book| book.is_available())
            .cloned()
            .collect()
    }

    /// Every patron in registration order with the titles they hold.
    pub fn list_patrons(&self) -> Vec<PatronSummary> {
        self.patron_order
            .iter()
            .filter_map(|id| self.patrons.get(id))
            .map(|patron| PatronSummary {
                name: patron.name().to_string(),
                id: patron.id().to_string(),
                borrowed_titles: patron
                    .borrowed()
                    .iter()
                    .filter_map(|code| self.books.get(code))
                    .map(|book| book.title().to_string())
                    .collect(),
            })
            .collect()
    }

    /// Active loans in creation order.
    pub fn list_loans(&self) -> Vec<Loan> {
        self.loans.clone()
    }

    /// Active loans joined with their book titles, for display.
    pub fn loan_report(&self) -> Vec<LoanSummary> {
        self.loans
            .iter()
            .map(|loan| LoanSummary {
                book_code: loan.book_code.clone(),
                book_title: self
                    .books
                    .get(&loan.book_code)
                    .map(|book| book.title().to_string())
                    .unwrap_or_default(),
                patron_id: loan.patron_id.clone(),
                start_date: loan.start_date,
                due_date: loan.due_date,
            })
            .collect()
    }

    /// Every registered book, lent or not, in registration order.
    pub fn books(&self) -> Vec<Book> {
        self.books_in_order().cloned().collect()
    }

    /// Every registered patron in registration order.
    pub fn patrons(&self) -> Vec<Patron> {
        self.patron_order
            .iter()
            .filter_map(|id| self.patrons.get(id))
            .cloned()
            .collect()
    }

    fn books_in_order(&self) -> impl Iterator<Item = &Book> {
        self.book_order.iter().filter_map(|code| self.books.get(code))
    }

    /// Verifies the data-model invariants. Any error indicates a bug.
    pub fn check_invariants(&self) -> std::result::Result<(), InvariantViolation> {
        let mut seen = HashSet::new();
        for code in &self.book_order {
            if !seen.insert(code) {
                return Err(InvariantViolation::DuplicateBook(code.clone()));
            }
        }
        let mut seen = HashSet::new();
        for id in &self.patron_order {
            if !seen.insert(id) {
                return Err(InvariantViolation::DuplicatePatron(id.clone()));
            }
        }

        for loan in &self.loans {
            if !self.books.contains_key(&loan.book_code) {
                return Err(InvariantViolation::DanglingLoan {
                    what: "book",
                    key: loan.book_code.clone(),
                });
            }
            if !self.patrons.contains_key(&loan.patron_id) {
                return Err(InvariantViolation::DanglingLoan {
                    what: "patron",
                    key: loan.patron_id.clone(),
                });
            }
            if loan.start_date > loan.due_date || rules::due_date(loan.start_date) != Some(loan.due_date)
            {
                return Err(InvariantViolation::BadDueDate {
                    code: loan.book_code.clone(),
                });
            }
        }

        for book in self.books.values() {
            let loans = self
                .loans
                .iter()
                .filter(|loan| loan.book_code == book.code())
                .count();
            let consistent = if book.is_available() { loans == 0 } else { loans == 1 };
            if !consistent {
                return Err(InvariantViolation::AvailabilityMismatch {
                    code: book.code().to_string(),
                    loans,
                });
            }
        }

        for patron in self.patrons.values() {
            let borrowed = patron.borrowed().len();
            if borrowed > MAX_LOANS_PER_PATRON {
                return Err(InvariantViolation::LimitExceeded {
                    id: patron.id().to_string(),
                    borrowed,
                });
            }
            let loans = self
                .loans
                .iter()
                .filter(|loan| loan.patron_id == patron.id())
                .count();
            if borrowed != loans {
                return Err(InvariantViolation::BorrowedCountMismatch {
                    id: patron.id().to_string(),
                    borrowed,
                    loans,
                });
            }
            for code in patron.borrowed() {
                if !self.loans.iter().any(|loan| loan.involves(code, patron.id())) {
                    return Err(InvariantViolation::BorrowedWithoutLoan {
                        id: patron.id().to_string(),
                        code: code.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    fn debug_check(&self) {
        if cfg!(debug_assertions) {
            if let Err(violation) = self.check_invariants() {
                panic!("library invariant violated: {}", violation);
            }
        }
    }
}
