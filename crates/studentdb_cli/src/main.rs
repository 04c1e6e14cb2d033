//! Demo driver for the student persistence core.
//!
//! # Responsibility
//! - Exercise the CRUD surface sequentially against `students.db` for
//!   manual inspection.
//! - Keep output deterministic for quick local sanity checks.

use std::error::Error;
use std::process::ExitCode;

use studentdb_core::db::open_db;
use studentdb_core::{
    default_log_level, init_logging, SqliteStudentRepository, StudentService,
};

const DB_FILE: &str = "students.db";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("studentdb demo failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let log_dir = std::env::temp_dir().join("studentdb-logs");
    if let Some(log_dir) = log_dir.to_str() {
        // Demo keeps going without file logging rather than aborting.
        if let Err(err) = init_logging(default_log_level(), log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let conn = open_db(DB_FILE)?;
    let repo = SqliteStudentRepository::try_new(&conn)?;
    let service = StudentService::new(repo);

    let first = service.add_student("Jhonny Jhon", 20, "A")?;
    let second = service.add_student("Jane Junior", 22, "B")?;

    match service.get_student(first)? {
        Some(student) => println!("Student by ID: {student:?}"),
        None => println!("Student with ID {first} not found."),
    }

    println!("Before delete: {:?}", service.list_students()?);

    service.update_student(first, "Jhonny Jhon", 21, "A")?;
    service.delete_student(second)?;

    println!("After update and delete: {:?}", service.list_students()?);

    Ok(())
}
