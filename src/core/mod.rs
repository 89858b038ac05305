pub mod library;

pub use crate::domain::model::{Book, Loan, LoanSummary, Patron, PatronSummary, ReturnReceipt};
pub use crate::domain::ports::Clock;
pub use crate::utils::error::Result;
pub use library::Library;
