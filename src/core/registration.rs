use crate::adapters::console::Console;
use crate::core::file_processor::FileProcessor;
use crate::domain::model::{MenuChoice, Student};
use crate::domain::ports::Storage;
use crate::utils::error::{ErrorCategory, RegistrationError, Result};
use std::io::{BufRead, Write};

pub const MISSING_FILE_MESSAGE: &str = "Text file must exist before running this script!";
pub const READ_ERROR_MESSAGE: &str = "There was a non-specific error when reading the file!";
pub const WRITE_ERROR_MESSAGE: &str = "There was a non-specific error when writing the file!";
pub const EXIT_MESSAGE: &str = "Program Ended";

/// State threaded through every iteration of the menu loop.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AppState {
    pub students: Vec<Student>,
    pub should_exit: bool,
}

/// Read-eval-print loop over the enrollment file and the console.
pub struct RegistrationSession<S: Storage, R: BufRead, W: Write> {
    processor: FileProcessor<S>,
    console: Console<R, W>,
}

impl<S: Storage, R: BufRead, W: Write> RegistrationSession<S, R, W> {
    pub fn new(processor: FileProcessor<S>, console: Console<R, W>) -> Self {
        Self { processor, console }
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Load, loop until exit, then print the exit message. Returns the final state.
    ///
    /// File and validation failures are reported on the console and never end the
    /// loop; only a failing console itself is returned as an error.
    pub fn run(&mut self) -> Result<AppState> {
        let mut state = self.load()?;
        while !state.should_exit {
            state = self.step(state)?;
        }
        self.console.display_message(EXIT_MESSAGE)?;
        tracing::info!("Session ended with {} students in memory", state.students.len());
        Ok(state)
    }

    /// Initial state: whatever the enrollment file holds, or nothing if it cannot be read.
    pub fn load(&mut self) -> Result<AppState> {
        let mut state = AppState::default();
        if let Err(e) = self.processor.read_data_from_file(&mut state.students) {
            self.report_file_error(&e, READ_ERROR_MESSAGE)?;
        }
        Ok(state)
    }

    /// Show the menu, read one choice and apply it.
    pub fn step(&mut self, state: AppState) -> Result<AppState> {
        self.console.display_menu()?;
        let choice = match self.console.read_menu_choice() {
            Ok(choice) => choice,
            Err(RegistrationError::ConsoleClosed) => {
                tracing::info!("Console input closed, exiting");
                self.console.display_message("")?;
                MenuChoice::Exit
            }
            Err(e) => return Err(e),
        };
        self.dispatch(state, choice)
    }

    pub fn dispatch(&mut self, mut state: AppState, choice: MenuChoice) -> Result<AppState> {
        tracing::debug!("Menu choice {}", choice.as_str());
        match choice {
            MenuChoice::Register => match self.console.read_new_student(&mut state.students) {
                Ok(_) => {}
                Err(RegistrationError::ConsoleClosed) => {
                    self.console.display_message("")?;
                    state.should_exit = true;
                }
                Err(e) => return Err(e),
            },
            MenuChoice::Show => self.console.display_students(&state.students)?,
            MenuChoice::Save => self.save(&state.students)?,
            MenuChoice::Exit => state.should_exit = true,
            MenuChoice::Invalid => {}
        }
        Ok(state)
    }

    /// Write the file, then show what was written. Failures leave the file and `students` as they were.
    fn save(&mut self, students: &[Student]) -> Result<()> {
        match self.processor.write_data_to_file(students) {
            Ok(()) => self.console.display_students(students),
            Err(e) => self.report_file_error(&e, WRITE_ERROR_MESSAGE),
        }
    }

    fn report_file_error(&mut self, error: &RegistrationError, generic_message: &str) -> Result<()> {
        tracing::warn!(
            "{} failed: {} (Category: {:?})",
            self.processor.file_name(),
            error,
            error.category()
        );
        let message = match error.category() {
            ErrorCategory::MissingFile => MISSING_FILE_MESSAGE,
            _ => generic_message,
        };
        self.console.display_error(message, Some(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::LocalStorage;
    use std::io::Cursor;
    use tempfile::TempDir;

    type TestSession = RegistrationSession<LocalStorage, Cursor<Vec<u8>>, Vec<u8>>;

    fn session(dir: &TempDir, input: &str) -> TestSession {
        let processor = FileProcessor::new(LocalStorage::new(dir.path()), "enrollments.json");
        let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        RegistrationSession::new(processor, console)
    }

    fn printed(session: TestSession) -> String {
        let (_, output) = session.into_console().into_parts();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let mut s = session(&dir, "");

        let state = s.load().unwrap();
        assert!(state.students.is_empty());
        assert!(!state.should_exit);

        let out = printed(s);
        assert!(out.contains(MISSING_FILE_MESSAGE));
        assert!(!out.contains(READ_ERROR_MESSAGE));
    }

    #[test]
    fn test_load_corrupt_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("enrollments.json"), "not json").unwrap();
        let mut s = session(&dir, "");

        let state = s.load().unwrap();
        assert!(state.students.is_empty());

        let out = printed(s);
        assert!(out.contains(READ_ERROR_MESSAGE));
        assert!(out.contains("RegistrationError::SerializationError"));
    }

    #[test]
    fn test_dispatch_invalid_changes_nothing() {
        let dir = TempDir::new().unwrap();
        let mut s = session(&dir, "");
        let state = AppState {
            students: vec![Student::new("ann", "lee", "Math101").unwrap()],
            should_exit: false,
        };

        let next = s.dispatch(state.clone(), MenuChoice::Invalid).unwrap();
        assert_eq!(next, state);
        assert_eq!(printed(s), "");
    }

    #[test]
    fn test_dispatch_exit() {
        let dir = TempDir::new().unwrap();
        let mut s = session(&dir, "");
        let next = s.dispatch(AppState::default(), MenuChoice::Exit).unwrap();
        assert!(next.should_exit);
    }

    #[test]
    fn test_save_into_missing_directory() {
        let dir = TempDir::new().unwrap();
        let processor = FileProcessor::new(LocalStorage::new(dir.path()), "missing/enrollments.json");
        let console = Console::new(Cursor::new(Vec::new()), Vec::new());
        let mut s = RegistrationSession::new(processor, console);
        let state = AppState {
            students: vec![Student::new("ann", "lee", "Math101").unwrap()],
            should_exit: false,
        };

        let next = s.dispatch(state, MenuChoice::Save).unwrap();
        assert_eq!(next.students.len(), 1);

        let (_, output) = s.into_console().into_parts();
        let out = String::from_utf8(output).unwrap();
        assert!(out.contains(MISSING_FILE_MESSAGE));
        assert!(!out.contains("is enrolled in"));
    }

    #[test]
    fn test_run_until_exit() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("enrollments.json"), "[]").unwrap();
        let mut s = session(&dir, "9\n2\n4\n");

        let state = s.run().unwrap();
        assert!(state.should_exit);

        let out = printed(s);
        assert!(out.contains("Please, choose only 1, 2, 3, or 4"));
        assert!(out.ends_with("Program Ended\n"));
        assert_eq!(out.matches("Enter your menu choice number: ").count(), 3);
    }

    #[test]
    fn test_run_stops_on_closed_input() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("enrollments.json"), "[]").unwrap();
        let mut s = session(&dir, "2\n");

        let state = s.run().unwrap();
        assert!(state.should_exit);
        assert!(printed(s).ends_with("Program Ended\n"));
    }
}
