use chrono::NaiveDate;
use small_library::{Library, LibraryError, FINE_PER_DAY, MAX_LOANS_PER_PATRON};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_duplicate_book_code_is_rejected() {
    let mut library = Library::new();

    assert!(library.register_book("The Trial", "Kafka", "B1").is_ok());
    assert_eq!(
        library.register_book("The Trial", "Kafka", "B1"),
        Err(LibraryError::DuplicateBookCode {
            code: "B1".to_string()
        })
    );
    assert_eq!(library.books().len(), 1);
}

#[test]
fn test_lend_then_return_on_due_date() {
    let mut library = Library::new();
    library.register_book("The Trial", "Kafka", "B1").unwrap();
    library.register_patron("Ada", "U1").unwrap();

    // Lend on 2024-01-01, due a week later
    let due = library.lend("B1", "U1", date(2024, 1, 1)).unwrap();
    assert_eq!(due, date(2024, 1, 8));
    assert!(!library.find_book("B1").unwrap().is_available());
    assert_eq!(library.find_patron("U1").unwrap().borrowed(), ["B1".to_string()]);

    // Already lent
    assert!(matches!(
        library.lend("B1", "U1", date(2024, 1, 2)),
        Err(LibraryError::BookUnavailable { .. })
    ));

    // Returned exactly on the due date
    let receipt = library.return_book("B1", "U1", date(2024, 1, 8)).unwrap();
    assert_eq!(receipt.days_late, 0);
    assert_eq!(receipt.fine_amount, 0);
    assert!(library.find_book("B1").unwrap().is_available());
    assert!(library.find_patron("U1").unwrap().borrowed().is_empty());
    assert!(library.list_loans().is_empty());
}

#[test]
fn test_patron_limit_reached_on_fourth_loan() {
    let mut library = Library::new();
    for code in ["B1", "B2", "B3", "B4"] {
        library.register_book(&format!("Book {}", code), "Author", code).unwrap();
    }
    library.register_patron("Ada", "U1").unwrap();

    for code in ["B1", "B2", "B3"] {
        assert!(library.lend(code, "U1", date(2024, 1, 1)).is_ok());
    }
    let before = library.clone();

    assert_eq!(
        library.lend("B4", "U1", date(2024, 1, 1)),
        Err(LibraryError::PatronLimitReached {
            id: "U1".to_string(),
            limit: MAX_LOANS_PER_PATRON
        })
    );
    assert_eq!(library.find_patron("U1").unwrap().borrowed().len(), 3);
    assert_eq!(library, before);
}

#[test]
fn test_late_return_charges_fine() {
    let mut library = Library::new();
    library.register_book("The Trial", "Kafka", "B1").unwrap();
    library.register_patron("Ada", "U1").unwrap();

    library.lend("B1", "U1", date(2024, 1, 1)).unwrap();
    let receipt = library.return_book("B1", "U1", date(2024, 1, 11)).unwrap();

    assert_eq!(receipt.days_late, 3);
    assert_eq!(receipt.fine_amount, 1500);
}

#[test]
fn test_one_day_late() {
    let mut library = Library::new();
    library.register_book("The Trial", "Kafka", "B1").unwrap();
    library.register_patron("Ada", "U1").unwrap();

    library.lend("B1", "U1", date(2024, 12, 28)).unwrap();
    // due 2025-01-04, across the year boundary
    let receipt = library.return_book("B1", "U1", date(2025, 1, 5)).unwrap();

    assert_eq!(receipt.days_late, 1);
    assert_eq!(receipt.fine_amount, FINE_PER_DAY);
}

#[test]
fn test_listings_follow_registration_and_creation_order() {
    let mut library = Library::new();
    library.register_book("Dune", "Herbert", "D1").unwrap();
    library.register_book("Emma", "Austen", "E1").unwrap();
    library.register_book("Ulysses", "Joyce", "U9").unwrap();
    library.register_patron("Ada", "U1").unwrap();
    library.register_patron("Bob", "U2").unwrap();

    library.lend("U9", "U2", date(2024, 1, 1)).unwrap();
    library.lend("D1", "U1", date(2024, 1, 2)).unwrap();

    let available: Vec<String> = library
        .list_available_books()
        .iter()
        .map(|book| book.title().to_string())
        .collect();
    assert_eq!(available, ["Emma"]);

    let patrons = library.list_patrons();
    assert_eq!(patrons[0].name, "Ada");
    assert_eq!(patrons[0].borrowed_titles, ["Dune"]);
    assert_eq!(patrons[1].borrowed_titles, ["Ulysses"]);

    let loans = library.list_loans();
    assert_eq!(loans[0].book_code, "U9");
    assert_eq!(loans[1].book_code, "D1");
    assert_eq!(loans[1].due_date, date(2024, 1, 9));
}
