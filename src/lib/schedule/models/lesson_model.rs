use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

/// One teacher's relation to one lesson slot.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct TeacherAssignment {
    pub teacher_id: u32,
    pub name: String,
    pub surname: String,
    pub class_year: u8,
    pub class_section: String,
    pub teaching_id: u32,
    pub is_absent: bool,
    pub is_substitution: bool,
}

/// One lesson occupying one day/hour cell. `day` is 1-based from Monday,
/// `hour` is the 0-based module index.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct LessonSlot {
    pub day: u8,
    pub hour: u8,
    pub subject: String,
    pub teachers: Vec<TeacherAssignment>,
}

/// Key of a slot. Written `"{hour}d{day}"`, hour first; orders hour-major so
/// iteration walks the grid row by row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotKey {
    pub hour: u8,
    pub day: u8,
}

impl SlotKey {
    pub fn new(day: u8, hour: u8) -> Self {
        SlotKey { hour, day }
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.hour, self.day)
    }
}

/// Whether a change request marks a teacher absent or present again.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AbsenceChangeKind {
    Add,
    Remove,
}

/// A status toggle to persist. Removal is scoped by teacher and date only.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct AbsenceChange {
    pub kind: AbsenceChangeKind,
    pub date: NaiveDate,
    pub teacher_id: u32,
}
