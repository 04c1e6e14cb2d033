//! Student use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for core callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::student::{NewStudent, Student, StudentId};
use crate::repo::student_repo::{RepoResult, StudentRepository};

/// Use-case service wrapper for student CRUD operations.
pub struct StudentService<R: StudentRepository> {
    repo: R,
}

impl<R: StudentRepository> StudentService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds a student and returns the store-assigned id.
    ///
    /// # Contract
    /// - No duplicate check: identical field triples produce distinct rows.
    pub fn add_student(
        &self,
        name: impl Into<String>,
        age: i64,
        grade: impl Into<String>,
    ) -> RepoResult<StudentId> {
        self.repo.create_student(&NewStudent::new(name, age, grade))
    }

    /// Gets one student by id. Absence is `Ok(None)`, never a message value.
    pub fn get_student(&self, id: StudentId) -> RepoResult<Option<Student>> {
        self.repo.get_student(id)
    }

    /// Lists every student, ordered by id.
    pub fn list_students(&self) -> RepoResult<Vec<Student>> {
        self.repo.list_students()
    }

    /// Overwrites `name`/`age`/`grade` for an existing student.
    ///
    /// Returns `RepoError::NotFound` when no row has the given id; table
    /// state is left unchanged in that case.
    pub fn update_student(
        &self,
        id: StudentId,
        name: impl Into<String>,
        age: i64,
        grade: impl Into<String>,
    ) -> RepoResult<()> {
        self.repo.update_student(&Student {
            id,
            name: name.into(),
            age,
            grade: grade.into(),
        })
    }

    /// Deletes a student by id.
    ///
    /// Returns `RepoError::NotFound` when no row has the given id.
    pub fn delete_student(&self, id: StudentId) -> RepoResult<()> {
        self.repo.delete_student(id)
    }
}
