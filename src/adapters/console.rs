use crate::domain::model::{MenuChoice, PersonName, Student};
use crate::utils::error::{ErrorCategory, RegistrationError, Result};
use std::io::{BufRead, Write};

pub const MENU: &str = "
---- Course Registration Program ----
  Select from the following menu:
    1. Register a Student for a Course.
    2. Show current data.
    3. Save data to a file.
    4. Exit the program.
-----------------------------------------
";

pub const SEPARATOR_WIDTH: usize = 50;
pub const ENTRY_ERROR_MESSAGE: &str = "Error: There was a problem with your entered data.";

/// Menu, prompts and tables over any line reader / writer pair.
pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Print `message`; with `error`, follow it with the technical block.
    pub fn display_error(
        &mut self,
        message: &str,
        error: Option<&RegistrationError>,
    ) -> Result<()> {
        writeln!(self.output, "{}\n", message)?;
        if let Some(error) = error {
            writeln!(self.output, "-- Technical Error Message -- ")?;
            writeln!(self.output, "{}", error)?;
            writeln!(self.output, "{}", error.doc())?;
            writeln!(self.output, "{}", error.kind_name())?;
        }
        Ok(())
    }

    pub fn display_message(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    pub fn display_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", MENU)?;
        writeln!(self.output)?;
        Ok(())
    }

    /// Prompt once. Anything other than "1".."4", including an unreadable line, is
    /// reported and mapped to `MenuChoice::Invalid`.
    pub fn read_menu_choice(&mut self) -> Result<MenuChoice> {
        let input = match self.prompt("Enter your menu choice number: ") {
            Ok(input) => input,
            Err(e @ RegistrationError::InputError(_)) => {
                tracing::debug!("Unreadable menu input: {}", e);
                self.display_error(&e.to_string(), None)?;
                return Ok(MenuChoice::Invalid);
            }
            Err(e) => return Err(e),
        };
        match MenuChoice::parse(&input) {
            Ok(choice) => Ok(choice),
            Err(e) => {
                tracing::debug!("Rejected menu input {:?}", input);
                self.display_error(&e.to_string(), None)?;
                Ok(MenuChoice::Invalid)
            }
        }
    }

    pub fn display_students(&mut self, students: &[Student]) -> Result<()> {
        let separator = "-".repeat(SEPARATOR_WIDTH);
        writeln!(self.output, "{}", separator)?;
        for student in students {
            writeln!(
                self.output,
                "Student {} {} is enrolled in {}",
                student.first_name(),
                student.last_name(),
                student.course_name()
            )?;
        }
        writeln!(self.output, "{}", separator)?;
        Ok(())
    }

    /// Prompt for a new enrollment and append it to `students`.
    ///
    /// Each name is checked as soon as it is entered; on the first invalid one the
    /// partial record is dropped, a plain message is shown and `students` is untouched.
    /// Other failures, such as an unreadable line, are shown with technical detail.
    /// Only a closed console is returned as an error. Returns whether a student was added.
    pub fn read_new_student(&mut self, students: &mut Vec<Student>) -> Result<bool> {
        match self.prompt_student() {
            Ok(student) => {
                writeln!(
                    self.output,
                    "You have registered {} {} for {}.",
                    student.first_name(),
                    student.last_name(),
                    student.course_name()
                )?;
                tracing::debug!("Registered {}", student);
                students.push(student);
                Ok(true)
            }
            Err(e) if e.category() == ErrorCategory::Validation => {
                tracing::debug!("Registration rejected: {}", e);
                self.display_error(
                    &format!("One of the values was not the correct type of data!\n{}", e),
                    None,
                )?;
                Ok(false)
            }
            Err(RegistrationError::ConsoleClosed) => Err(RegistrationError::ConsoleClosed),
            Err(e) => {
                tracing::warn!("Registration failed: {}", e);
                self.display_error(ENTRY_ERROR_MESSAGE, Some(&e))?;
                Ok(false)
            }
        }
    }

    fn prompt_student(&mut self) -> Result<Student> {
        let mut name = PersonName::default();
        let first_name = self.prompt("Enter the student's first name: ")?;
        name.set_first_name(&first_name)?;
        let last_name = self.prompt("Enter the student's last name: ")?;
        name.set_last_name(&last_name)?;
        let course_name = self.prompt("Please enter the name of the course: ")?;
        Ok(Student::from_name(name, &course_name))
    }

    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(RegistrationError::InputError)?;
        if read == 0 {
            return Err(RegistrationError::ConsoleClosed);
        }
        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn console_bytes(input: &[u8]) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.to_vec()), Vec::new())
    }

    fn printed(console: &Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.output().clone()).unwrap()
    }

    #[test]
    fn test_display_error_without_detail() {
        let mut c = console("");
        c.display_error("Something went wrong", None).unwrap();
        assert_eq!(printed(&c), "Something went wrong\n\n");
    }

    #[test]
    fn test_display_error_with_detail() {
        let mut c = console("");
        let err = RegistrationError::FileMissing {
            path: "enrollments.json".to_string(),
        };
        c.display_error("Text file must exist before running this script!", Some(&err))
            .unwrap();

        let out = printed(&c);
        assert!(out.starts_with("Text file must exist before running this script!\n\n"));
        assert!(out.contains("-- Technical Error Message -- \n"));
        assert!(out.contains("No such file: enrollments.json\n"));
        assert!(out.contains("File or directory not found.\n"));
        assert!(out.ends_with("RegistrationError::FileMissing\n"));
    }

    #[test]
    fn test_display_menu() {
        let mut c = console("");
        c.display_menu().unwrap();
        let out = printed(&c);
        assert!(out.contains("---- Course Registration Program ----"));
        assert!(out.contains("    1. Register a Student for a Course.\n"));
        assert!(out.contains("    4. Exit the program.\n"));
    }

    #[test]
    fn test_read_menu_choice_valid() {
        let mut c = console("3\n");
        assert_eq!(c.read_menu_choice().unwrap(), MenuChoice::Save);
        assert_eq!(printed(&c), "Enter your menu choice number: ");
    }

    #[test]
    fn test_read_menu_choice_handles_crlf() {
        let mut c = console("2\r\n");
        assert_eq!(c.read_menu_choice().unwrap(), MenuChoice::Show);
    }

    #[test]
    fn test_read_menu_choice_invalid_returns_sentinel() {
        for input in ["5\n", "one\n", " 1\n", "\n"] {
            let mut c = console(input);
            let choice = c.read_menu_choice().unwrap();
            assert_eq!(choice, MenuChoice::Invalid);
            assert_eq!(choice.as_str(), "0");
            let out = printed(&c);
            assert!(out.contains("Please, choose only 1, 2, 3, or 4\n\n"));
            assert!(!out.contains("Technical"));
        }
    }

    #[test]
    fn test_read_menu_choice_unreadable_line() {
        let mut c = console_bytes(b"\xff\xfe\n4\n");
        assert_eq!(c.read_menu_choice().unwrap(), MenuChoice::Invalid);
        assert!(printed(&c).contains("Could not read console input"));

        // The bad line is consumed; the next prompt reads normally.
        assert_eq!(c.read_menu_choice().unwrap(), MenuChoice::Exit);
    }

    #[test]
    fn test_read_menu_choice_eof() {
        let mut c = console("");
        assert!(matches!(
            c.read_menu_choice(),
            Err(RegistrationError::ConsoleClosed)
        ));
    }

    #[test]
    fn test_display_students() {
        let mut c = console("");
        let students = vec![
            Student::new("ann", "lee", "Math101").unwrap(),
            Student::new("BOB", "smith", "CS101").unwrap(),
        ];
        c.display_students(&students).unwrap();

        let separator = "-".repeat(50);
        let expected = format!(
            "{sep}\nStudent Ann Lee is enrolled in Math101\nStudent Bob Smith is enrolled in CS101\n{sep}\n",
            sep = separator
        );
        assert_eq!(printed(&c), expected);
    }

    #[test]
    fn test_display_no_students() {
        let mut c = console("");
        c.display_students(&[]).unwrap();
        let separator = "-".repeat(50);
        assert_eq!(printed(&c), format!("{0}\n{0}\n", separator));
    }

    #[test]
    fn test_read_new_student() {
        let mut c = console("ann\nlee\nMath101\n");
        let mut students = Vec::new();

        assert!(c.read_new_student(&mut students).unwrap());
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].to_string(), "Ann,Lee,Math101");

        let out = printed(&c);
        assert!(out.contains("Enter the student's first name: "));
        assert!(out.contains("Enter the student's last name: "));
        assert!(out.contains("Please enter the name of the course: "));
        assert!(out.ends_with("You have registered Ann Lee for Math101.\n"));
    }

    #[test]
    fn test_read_new_student_invalid_first_name() {
        let mut c = console("John3\nSmith\nCS101\n");
        let mut students = vec![Student::new("ann", "lee", "Math101").unwrap()];

        assert!(!c.read_new_student(&mut students).unwrap());
        assert_eq!(students.len(), 1);

        let out = printed(&c);
        assert!(out.contains("One of the values was not the correct type of data!"));
        assert!(out.contains("The first name should not contain numbers."));
        assert!(!out.contains("Enter the student's last name: "));
        assert!(!out.contains("Technical"));
    }

    #[test]
    fn test_read_new_student_invalid_last_name() {
        let mut c = console("John\nSm1th\n");
        let mut students = Vec::new();

        assert!(!c.read_new_student(&mut students).unwrap());
        assert!(students.is_empty());
        assert!(printed(&c).contains("The last name should not contain numbers."));
    }

    #[test]
    fn test_read_new_student_unreadable_line() {
        let mut c = console_bytes(b"ann\n\xff\n");
        let mut students = vec![Student::new("bob", "smith", "CS101").unwrap()];

        assert!(!c.read_new_student(&mut students).unwrap());
        assert_eq!(students.len(), 1);

        let out = printed(&c);
        assert!(out.contains("Error: There was a problem with your entered data.\n\n"));
        assert!(out.contains("-- Technical Error Message -- "));
        assert!(out.ends_with("RegistrationError::InputError\n"));
        assert!(!out.contains("Please enter the name of the course: "));
    }

    #[test]
    fn test_read_new_student_eof_midway() {
        let mut c = console("ann\n");
        let mut students = Vec::new();
        assert!(matches!(
            c.read_new_student(&mut students),
            Err(RegistrationError::ConsoleClosed)
        ));
        assert!(students.is_empty());
    }
}
