use crate::app::menu::{self, MenuOption};
use crate::app::render;
use crate::config::DisplaySettings;
use crate::core::{Clock, Library};
use crate::utils::error::AppResult;
use std::io::{BufRead, Write};
use std::ops::ControlFlow;

/// Interactive menu loop over any line reader and writer.
///
/// Owns the `Library`; every core call gets its date from the injected
/// clock. End of input anywhere is treated like choosing Exit.
pub struct Console<R, W, C> {
    library: Library,
    input: R,
    output: W,
    clock: C,
    display: DisplaySettings,
}

impl<R: BufRead, W: Write, C: Clock> Console<R, W, C> {
    pub fn new(input: R, output: W, clock: C, display: DisplaySettings) -> Self {
        Self {
            library: Library::new(),
            input,
            output,
            clock,
            display,
        }
    }

    /// Starts from an existing library instead of an empty one.
    pub fn with_library(mut self, library: Library) -> Self {
        self.library = library;
        self
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self) -> AppResult<()> {
        loop {
            write!(self.output, "{}Select an option: ", menu::menu_text())?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };

            match menu::parse_option(&line) {
                Ok(MenuOption::Exit) => break,
                Ok(option) => {
                    tracing::debug!("Menu option selected: {:?}", option);
                    if self.dispatch(option)?.is_break() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::debug!("Rejected menu input: {}", e);
                    writeln!(self.output, "⚠ Invalid option: {}", e)?;
                }
            }
        }

        writeln!(self.output, "👋 Exiting the system...")?;
        self.output.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, option: MenuOption) -> AppResult<ControlFlow<()>> {
        let message = match option {
            MenuOption::RegisterBook => {
                let Some([title, author, code]) = self.ask(["Title: ", "Author: ", "Code: "])? else {
                    return Ok(ControlFlow::Break(()));
                };
                match self.library.register_book(&title, &author, &code) {
                    Ok(()) => render::book_registered(&title),
                    Err(e) => render::warning(&e),
                }
            }
            MenuOption::RegisterPatron => {
                let Some([name, id]) = self.ask(["Name: ", "Patron ID: "])? else {
                    return Ok(ControlFlow::Break(()));
                };
                match self.library.register_patron(&name, &id) {
                    Ok(()) => render::patron_registered(&name),
                    Err(e) => render::warning(&e),
                }
            }
            MenuOption::LendBook => {
                let Some([code, id]) = self.ask(["Book code: ", "Patron ID: "])? else {
                    return Ok(ControlFlow::Break(()));
                };
                let today = self.clock.today();
                match self.library.lend(&code, &id, today) {
                    Ok(due_date) => render::book_lent(due_date),
                    Err(e) => render::warning(&e),
                }
            }
            MenuOption::ReturnBook => {
                let Some([code, id]) = self.ask(["Book code: ", "Patron ID: "])? else {
                    return Ok(ControlFlow::Break(()));
                };
                let today = self.clock.today();
                match self.library.return_book(&code, &id, today) {
                    Ok(receipt) => render::book_returned(&receipt, &self.display),
                    Err(e) => render::warning(&e),
                }
            }
            MenuOption::ListAvailableBooks => {
                render::available_books(&self.library.list_available_books(), &self.display)?
            }
            MenuOption::ListPatrons => {
                render::patrons(&self.library.list_patrons(), &self.display)?
            }
            MenuOption::ListLoans => render::loans(&self.library.loan_report(), &self.display)?,
            MenuOption::Exit => return Ok(ControlFlow::Break(())),
        };

        writeln!(self.output, "{}", message)?;
        Ok(ControlFlow::Continue(()))
    }

    /// Prompts for each label in turn. `None` if input ends midway.
    fn ask<const N: usize>(&mut self, labels: [&str; N]) -> AppResult<Option<[String; N]>> {
        let mut answers: [String; N] = std::array::from_fn(|_| String::new());
        for (label, answer) in labels.iter().zip(answers.iter_mut()) {
            write!(self.output, "{}", label)?;
            self.output.flush()?;
            match self.read_line()? {
                Some(line) => *answer = line,
                None => return Ok(None),
            }
        }
        Ok(Some(answers))
    }

    /// Reads one line without its terminator. Inner and edge spaces are kept.
    fn read_line(&mut self) -> AppResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}
