use crate::domain::model::ReturnReceipt;
use chrono::{Days, NaiveDate};

pub const MAX_LOANS_PER_PATRON: usize = 3;
pub const LOAN_DAYS: u64 = 7;
/// Abstract monetary units; the currency symbol belongs to the frontend.
pub const FINE_PER_DAY: u64 = 500;

/// Due date for a loan starting on `start`, or `None` past chrono's range.
pub fn due_date(start: NaiveDate) -> Option<NaiveDate> {
    start.checked_add_days(Days::new(LOAN_DAYS))
}

/// Whole civil days between `due` and `today`, floored at zero.
pub fn days_late(due: NaiveDate, today: NaiveDate) -> u64 {
    u64::try_from(today.signed_duration_since(due).num_days()).unwrap_or(0)
}

pub fn assess_return(due: NaiveDate, today: NaiveDate) -> ReturnReceipt {
    let days_late = days_late(due, today);
    ReturnReceipt {
        days_late,
        fine_amount: days_late.saturating_mul(FINE_PER_DAY),
    }
}
