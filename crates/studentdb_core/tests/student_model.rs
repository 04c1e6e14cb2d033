use studentdb_core::{NewStudent, Student, StudentValidationError};

#[test]
fn draft_with_valid_fields_passes_validation() {
    let draft = NewStudent::new("Jhonny Jhon", 20, "A");
    assert!(draft.validate().is_ok());
}

#[test]
fn name_at_cap_passes_and_over_cap_fails() {
    let at_cap = NewStudent::new("x".repeat(100), 20, "A");
    assert!(at_cap.validate().is_ok());

    let over_cap = NewStudent::new("x".repeat(101), 20, "A");
    assert_eq!(
        over_cap.validate(),
        Err(StudentValidationError::NameTooLong { chars: 101 })
    );
}

#[test]
fn grade_at_cap_passes_and_over_cap_fails() {
    let at_cap = NewStudent::new("Name", 20, "ABCDEFGHIJ");
    assert!(at_cap.validate().is_ok());

    let over_cap = NewStudent::new("Name", 20, "ABCDEFGHIJK");
    assert_eq!(
        over_cap.validate(),
        Err(StudentValidationError::GradeTooLong { chars: 11 })
    );
}

#[test]
fn empty_fields_are_rejected() {
    assert_eq!(
        NewStudent::new("", 20, "A").validate(),
        Err(StudentValidationError::EmptyName)
    );
    assert_eq!(
        NewStudent::new("Name", 20, "").validate(),
        Err(StudentValidationError::EmptyGrade)
    );
}

#[test]
fn width_caps_count_characters_not_bytes() {
    // 100 multi-byte characters stay within the cap.
    let draft = NewStudent::new("é".repeat(100), 20, "A");
    assert!(draft.validate().is_ok());
}

#[test]
fn into_student_carries_fields_and_assigned_id() {
    let student = NewStudent::new("Ada", 28, "A").into_student(7);
    assert_eq!(
        student,
        Student {
            id: 7,
            name: "Ada".to_string(),
            age: 28,
            grade: "A".to_string(),
        }
    );
}

#[test]
fn student_serialization_uses_expected_wire_fields() {
    let student = Student {
        id: 1,
        name: "Jhonny Jhon".to_string(),
        age: 21,
        grade: "A".to_string(),
    };

    let json = serde_json::to_value(&student).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": 1,
            "name": "Jhonny Jhon",
            "age": 21,
            "grade": "A",
        })
    );

    let back: Student = serde_json::from_value(json).unwrap();
    assert_eq!(back, student);
}
