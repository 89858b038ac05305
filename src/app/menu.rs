use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuOption {
    Exit,
    RegisterBook,
    RegisterPatron,
    LendBook,
    ReturnBook,
    ListAvailableBooks,
    ListPatrons,
    ListLoans,
}

impl MenuOption {
    /// Display order of the menu; `Exit` is shown last.
    pub const ALL: [Self; 8] = [
        Self::RegisterBook,
        Self::RegisterPatron,
        Self::LendBook,
        Self::ReturnBook,
        Self::ListAvailableBooks,
        Self::ListPatrons,
        Self::ListLoans,
        Self::Exit,
    ];

    pub fn code(self) -> u8 {
        match self {
            Self::Exit => 0,
            Self::RegisterBook => 1,
            Self::RegisterPatron => 2,
            Self::LendBook => 3,
            Self::ReturnBook => 4,
            Self::ListAvailableBooks => 5,
            Self::ListPatrons => 6,
            Self::ListLoans => 7,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|option| i64::from(option.code()) == code)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Exit => "Exit",
            Self::RegisterBook => "Register book",
            Self::RegisterPatron => "Register patron",
            Self::LendBook => "Lend book",
            Self::ReturnBook => "Return book",
            Self::ListAvailableBooks => "List available books",
            Self::ListPatrons => "List patrons",
            Self::ListLoans => "List loans",
        }
    }
}

/// Recoverable problems with the option line; the console re-prompts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuInputError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("{0} is not a valid option")]
    UnknownOption(i64),
}

pub fn parse_option(line: &str) -> Result<MenuOption, MenuInputError> {
    let trimmed = line.trim();
    let code: i64 = trimmed
        .parse()
        .map_err(|_| MenuInputError::NotANumber(trimmed.to_string()))?;
    MenuOption::from_code(code).ok_or(MenuInputError::UnknownOption(code))
}

pub fn menu_text() -> String {
    let mut text = String::from("\n===== Library System =====\n");
    for option in MenuOption::ALL {
        text.push_str(&format!("{}. {}\n", option.code(), option.label()));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_code() {
        for option in MenuOption::ALL {
            assert_eq!(parse_option(&option.code().to_string()), Ok(option));
        }
    }

    #[test]
    fn test_parse_tolerates_surrounding_whitespace() {
        assert_eq!(parse_option("  3 \n"), Ok(MenuOption::LendBook));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_option("8"), Err(MenuInputError::UnknownOption(8)));
        assert_eq!(parse_option("-1"), Err(MenuInputError::UnknownOption(-1)));
        assert_eq!(
            parse_option("lend"),
            Err(MenuInputError::NotANumber("lend".to_string()))
        );
        assert!(matches!(parse_option(""), Err(MenuInputError::NotANumber(_))));
    }

    #[test]
    fn test_menu_lists_exit_last() {
        let text = menu_text();
        assert!(text.contains("1. Register book"));
        assert!(text.trim_end().ends_with("0. Exit"));
    }
}
