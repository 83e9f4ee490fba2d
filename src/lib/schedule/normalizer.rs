use std::collections::{btree_map::Entry, BTreeMap};

use log::{debug, warn};

use super::{
    error::ScheduleError,
    models::{
        lesson_model::{LessonSlot, SlotKey, TeacherAssignment},
        record_model::{LessonRecord, TeacherName},
    },
};

/// Lessons of one fetched week, at most one per day/hour.
pub type Slots = BTreeMap<SlotKey, LessonSlot>;

fn to_assignment(
    record: LessonRecord,
    known_teacher: Option<&TeacherName>,
) -> Result<TeacherAssignment, ScheduleError> {
    let teacher = match (record.teacher, known_teacher) {
        (Some(teacher), _) => teacher,
        (None, Some(known)) => known.to_owned(),
        (None, None) => {
            return Err(ScheduleError::MissingTeacherName {
                teaching_id: record.teaching_id,
            })
        }
    };
    Ok(TeacherAssignment {
        teacher_id: record.teacher_id,
        name: teacher.name,
        surname: teacher.surname,
        class_year: record.course_year,
        class_section: record.course_section,
        teaching_id: record.teaching_id,
        is_absent: record.is_absence,
        is_substitution: record.is_substitution,
    })
}

/* group flat records by day/hour, keeping response order inside each slot */
pub fn normalize(
    records: Vec<LessonRecord>,
    known_teacher: Option<&TeacherName>,
) -> Result<Slots, ScheduleError> {
    let mut slots = Slots::new();

    for record in records {
        if !(1..=5).contains(&record.day) {
            warn!(
                "Teaching {} is on day {}, outside the school week",
                record.teaching_id, record.day
            );
        }
        if record.is_absence && record.is_substitution {
            warn!(
                "Teaching {} is flagged both absent and substituting, counting it as absent",
                record.teaching_id
            );
        }

        let key = SlotKey::new(record.day, record.hour);
        let subject = record.subject_name.clone();
        let assignment = to_assignment(record, known_teacher)?;
        match slots.entry(key) {
            Entry::Occupied(mut slot) => {
                debug!("Slot {} gets teacher {}", key, assignment.teacher_id);
                slot.get_mut().teachers.push(assignment);
            }
            Entry::Vacant(slot) => {
                slot.insert(LessonSlot {
                    day: key.day,
                    hour: key.hour,
                    subject,
                    teachers: vec![assignment],
                });
            }
        }
    }

    Ok(slots)
}

#[cfg(test)]
#[path = "tests/normalizer_tests.rs"]
mod tests;
