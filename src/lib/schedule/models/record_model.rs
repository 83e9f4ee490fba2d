//! Module with lesson records as returned by the schedule RPC endpoint
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct TeacherName {
    pub name: String,
    pub surname: String,
}

/// One teacher assigned to one day/hour/subject. Course queries join the
/// teacher's name in, teacher queries leave it out.
#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct LessonRecord {
    #[serde(rename = "TeachingID")]
    pub teaching_id: u32,
    pub day: u8,
    pub hour: u8,
    #[serde(rename = "TeacherID")]
    pub teacher_id: u32,
    pub subject_name: String,
    pub course_year: u8,
    pub course_section: String,
    pub is_absence: bool,
    pub is_substitution: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher: Option<TeacherName>,
}
