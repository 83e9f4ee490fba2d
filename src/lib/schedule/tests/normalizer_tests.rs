use super::*;

fn record(teaching_id: u32, day: u8, hour: u8, teacher_id: u32, subject: &str) -> LessonRecord {
    LessonRecord {
        teaching_id,
        day,
        hour,
        teacher_id,
        subject_name: subject.to_owned(),
        course_year: 1,
        course_section: "AT".to_owned(),
        is_absence: false,
        is_substitution: false,
        teacher: Some(TeacherName {
            name: "Grazia".to_owned(),
            surname: "Deledda".to_owned(),
        }),
    }
}

#[test]
fn empty_response_gives_empty_week() {
    let slots = normalize(Vec::new(), None).unwrap();
    assert!(slots.is_empty());
}

#[test]
fn shared_slot_accumulates_teachers() {
    let records = vec![
        record(1, 2, 3, 10, "Matematica"),
        record(2, 2, 3, 11, "Sostegno"),
    ];
    let slots = normalize(records, None).unwrap();

    assert_eq!(slots.len(), 1);
    let slot = slots.get(&SlotKey::new(2, 3)).unwrap();
    assert_eq!(slot.subject, "Matematica");
    assert_eq!(slot.day, 2);
    assert_eq!(slot.hour, 3);
    let ids = slot.teachers.iter().map(|t| t.teacher_id).collect::<Vec<_>>();
    assert_eq!(ids, vec![10, 11]);
}

#[test]
fn distinct_cells_stay_apart() {
    // same numbers, swapped between day and hour
    let records = vec![record(1, 1, 2, 10, "Storia"), record(2, 2, 1, 10, "Latino")];
    let slots = normalize(records, None).unwrap();

    assert_eq!(slots.len(), 2);
    assert_eq!(slots[&SlotKey::new(1, 2)].subject, "Storia");
    assert_eq!(slots[&SlotKey::new(2, 1)].subject, "Latino");
}

#[test]
fn slots_iterate_row_by_row() {
    let records = vec![
        record(1, 5, 0, 10, "Fisica"),
        record(2, 1, 1, 10, "Chimica"),
        record(3, 2, 0, 10, "Inglese"),
    ];
    let slots = normalize(records, None).unwrap();
    let keys = slots.keys().map(|key| key.to_string()).collect::<Vec<_>>();
    assert_eq!(keys, vec!["0d2", "0d5", "1d1"]);
}

#[test]
fn slot_key_text_form_is_hour_first() {
    let key = SlotKey::new(4, 7);
    assert_eq!(key.to_string(), "7d4");
    assert!(SlotKey::new(5, 0) < key);
}

#[test]
fn teacher_query_fills_in_known_name() {
    let mut bare = record(1, 3, 0, 42, "Filosofia");
    bare.teacher = None;
    bare.course_year = 4;
    bare.course_section = "BS".to_owned();
    bare.is_absence = true;
    let known = TeacherName {
        name: "Ipazia".to_owned(),
        surname: "Alessandrina".to_owned(),
    };

    let slots = normalize(vec![bare], Some(&known)).unwrap();
    let teacher = &slots[&SlotKey::new(3, 0)].teachers[0];
    assert_eq!(
        teacher,
        &TeacherAssignment {
            teacher_id: 42,
            name: "Ipazia".to_owned(),
            surname: "Alessandrina".to_owned(),
            class_year: 4,
            class_section: "BS".to_owned(),
            teaching_id: 1,
            is_absent: true,
            is_substitution: false,
        }
    );
}

#[test]
fn record_name_wins_over_known_name() {
    let known = TeacherName {
        name: "Someone".to_owned(),
        surname: "Else".to_owned(),
    };
    let slots = normalize(vec![record(1, 1, 0, 10, "Arte")], Some(&known)).unwrap();
    assert_eq!(slots[&SlotKey::new(1, 0)].teachers[0].surname, "Deledda");
}

#[test]
fn nameless_record_without_known_teacher_fails() {
    let mut bare = record(77, 1, 0, 10, "Arte");
    bare.teacher = None;
    assert!(matches!(
        normalize(vec![bare], None),
        Err(ScheduleError::MissingTeacherName { teaching_id: 77 })
    ));
}

#[test]
fn course_response_json_deserializes() {
    let json = r#"[
        {"TeachingID": 5, "Day": 1, "Hour": 0, "TeacherID": 9, "SubjectName": "Musica",
         "CourseYear": 2, "CourseSection": "AT", "IsAbsence": false, "IsSubstitution": true,
         "Teacher": {"Name": "Clara", "Surname": "Schumann"}},
        {"TeachingID": 6, "Day": 1, "Hour": 0, "TeacherID": 3, "SubjectName": "Musica",
         "CourseYear": 2, "CourseSection": "AT", "IsAbsence": true, "IsSubstitution": false,
         "Teacher": {"Name": "Robert", "Surname": "Schumann"}}
    ]"#;
    let records: Vec<LessonRecord> = serde_json::from_str(json).unwrap();
    let slots = normalize(records, None).unwrap();

    let slot = &slots[&SlotKey::new(1, 0)];
    assert_eq!(slot.teachers.len(), 2);
    assert!(slot.teachers[0].is_substitution);
    assert_eq!(slot.teachers[1].name, "Robert");
    assert!(slot.teachers[1].is_absent);
}
