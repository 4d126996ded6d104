use crate::utils::error::{NameField, RegistrationError, Result};
use crate::utils::validation::validate_name;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper-case the first letter of every alphabetic run, lower-case the rest.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut at_word_start = true;
    for c in value.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                // Only the first char of a multi-char upper mapping stays upper ("ß" -> "Ss").
                let mut upper = c.to_uppercase();
                out.extend(upper.next());
                out.extend(upper.flat_map(char::to_lowercase));
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

/// Validated first/last name pair. Values are stored as entered and read back title-cased.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PersonName {
    first_name: String,
    last_name: String,
}

impl PersonName {
    pub fn new(first_name: &str, last_name: &str) -> Result<Self> {
        validate_name(NameField::First, first_name)?;
        validate_name(NameField::Last, last_name)?;
        Ok(Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        })
    }

    pub fn first_name(&self) -> String {
        title_case(&self.first_name)
    }

    pub fn last_name(&self) -> String {
        title_case(&self.last_name)
    }

    pub fn set_first_name(&mut self, value: &str) -> Result<()> {
        validate_name(NameField::First, value)?;
        self.first_name = value.to_string();
        Ok(())
    }

    pub fn set_last_name(&mut self, value: &str) -> Result<()> {
        validate_name(NameField::Last, value)?;
        self.last_name = value.to_string();
        Ok(())
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.first_name(), self.last_name())
    }
}

/// One enrollment: a validated name plus a free-form course name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Student {
    name: PersonName,
    course_name: String,
}

impl Student {
    pub fn new(first_name: &str, last_name: &str, course_name: &str) -> Result<Self> {
        Ok(Self {
            name: PersonName::new(first_name, last_name)?,
            course_name: course_name.to_string(),
        })
    }

    pub fn from_name(name: PersonName, course_name: &str) -> Self {
        Self {
            name,
            course_name: course_name.to_string(),
        }
    }

    pub fn first_name(&self) -> String {
        self.name.first_name()
    }

    pub fn last_name(&self) -> String {
        self.name.last_name()
    }

    pub fn course_name(&self) -> &str {
        &self.course_name
    }

    pub fn set_first_name(&mut self, value: &str) -> Result<()> {
        self.name.set_first_name(value)
    }

    pub fn set_last_name(&mut self, value: &str) -> Result<()> {
        self.name.set_last_name(value)
    }

    pub fn set_course_name(&mut self, value: &str) {
        self.course_name = value.to_string();
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.name, self.course_name)
    }
}

/// On-disk shape of a single enrollment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRow {
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "LastName")]
    pub last_name: String,
    #[serde(rename = "CourseName")]
    pub course_name: String,
}

impl From<&Student> for StudentRow {
    fn from(student: &Student) -> Self {
        Self {
            first_name: student.first_name(),
            last_name: student.last_name(),
            course_name: student.course_name().to_string(),
        }
    }
}

impl TryFrom<StudentRow> for Student {
    type Error = RegistrationError;

    fn try_from(row: StudentRow) -> Result<Self> {
        Student::new(&row.first_name, &row.last_name, &row.course_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Register,
    Show,
    Save,
    Exit,
    /// Sentinel for rejected input; matches no dispatch branch.
    Invalid,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Result<Self> {
        match input {
            "1" => Ok(MenuChoice::Register),
            "2" => Ok(MenuChoice::Show),
            "3" => Ok(MenuChoice::Save),
            "4" => Ok(MenuChoice::Exit),
            other => Err(RegistrationError::InvalidMenuChoice {
                input: other.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MenuChoice::Register => "1",
            MenuChoice::Show => "2",
            MenuChoice::Save => "3",
            MenuChoice::Exit => "4",
            MenuChoice::Invalid => "0",
        }
    }
}
