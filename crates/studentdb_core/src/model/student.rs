//! Student domain model.
//!
//! # Responsibility
//! - Define the persisted student record and its insert draft.
//! - Enforce schema storage caps before any SQL mutation.
//!
//! # Invariants
//! - `id` is assigned by the store on insert and never reused or reassigned.
//! - `name`, `age`, `grade` are always present on a persisted row.
//! - `name` is at most 100 characters, `grade` at most 10, neither empty.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned primary key for a student row.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type StudentId = i64;

/// Maximum stored width of `name`, in characters.
pub const NAME_MAX_CHARS: usize = 100;
/// Maximum stored width of `grade`, in characters.
pub const GRADE_MAX_CHARS: usize = 10;

/// Validation failure for student field constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentValidationError {
    EmptyName,
    NameTooLong { chars: usize },
    EmptyGrade,
    GradeTooLong { chars: usize },
}

impl Display for StudentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "student name must not be empty"),
            Self::NameTooLong { chars } => write!(
                f,
                "student name is {chars} characters, maximum is {NAME_MAX_CHARS}"
            ),
            Self::EmptyGrade => write!(f, "student grade must not be empty"),
            Self::GradeTooLong { chars } => write!(
                f,
                "student grade is {chars} characters, maximum is {GRADE_MAX_CHARS}"
            ),
        }
    }
}

impl Error for StudentValidationError {}

/// A student row as persisted in storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Store-assigned primary key, immutable after insert.
    pub id: StudentId,
    pub name: String,
    pub age: i64,
    pub grade: String,
}

impl Student {
    /// Checks field constraints shared with the storage schema.
    pub fn validate(&self) -> Result<(), StudentValidationError> {
        validate_fields(&self.name, &self.grade)
    }
}

/// Insert draft for a student. The store assigns the id on insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    pub name: String,
    pub age: i64,
    pub grade: String,
}

impl NewStudent {
    pub fn new(name: impl Into<String>, age: i64, grade: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            grade: grade.into(),
        }
    }

    /// Checks field constraints shared with the storage schema.
    pub fn validate(&self) -> Result<(), StudentValidationError> {
        validate_fields(&self.name, &self.grade)
    }

    /// Promotes this draft to a persisted record with a store-assigned id.
    pub fn into_student(self, id: StudentId) -> Student {
        Student {
            id,
            name: self.name,
            age: self.age,
            grade: self.grade,
        }
    }
}

fn validate_fields(name: &str, grade: &str) -> Result<(), StudentValidationError> {
    if name.is_empty() {
        return Err(StudentValidationError::EmptyName);
    }
    let name_chars = name.chars().count();
    if name_chars > NAME_MAX_CHARS {
        return Err(StudentValidationError::NameTooLong { chars: name_chars });
    }
    if grade.is_empty() {
        return Err(StudentValidationError::EmptyGrade);
    }
    let grade_chars = grade.chars().count();
    if grade_chars > GRADE_MAX_CHARS {
        return Err(StudentValidationError::GradeTooLong { chars: grade_chars });
    }
    Ok(())
}
