use chrono::NaiveDate;

/// Source of the current civil date. Injected into the frontend so core
/// operations stay deterministic.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
