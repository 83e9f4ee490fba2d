use std::cmp::Ordering;

use serde::Serialize;

use super::models::{lesson_model::TeacherAssignment, Color, Palette};

/// Staffing coverage of one slot.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum CoverageStatus {
    /// Every assigned teacher is absent and nobody is covering.
    FullyAbsent,
    /// At least one substitution is in progress.
    PartiallySubstituted,
    /// At least one regular teacher is present.
    Covered,
}

/// Classify a slot from its teachers. A missing slot is `Covered`.
///
/// Absences count one each, a substitution counts one more than the number
/// of teachers, so any substitution pushes the sum past the teacher count
/// while absences alone can at most reach it.
pub fn resolve_status(teachers: Option<&[TeacherAssignment]>) -> CoverageStatus {
    let teachers = match teachers {
        Some(teachers) if !teachers.is_empty() => teachers,
        _ => return CoverageStatus::Covered,
    };
    let count = teachers.len();
    let reduction: usize = teachers
        .iter()
        .map(|teacher| {
            if teacher.is_absent {
                1
            } else if teacher.is_substitution {
                count + 1
            } else {
                0
            }
        })
        .sum();

    match reduction.cmp(&count) {
        Ordering::Equal => CoverageStatus::FullyAbsent,
        Ordering::Greater => CoverageStatus::PartiallySubstituted,
        Ordering::Less => CoverageStatus::Covered,
    }
}

/// Primary and hover color of a cell.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CellColors {
    pub primary: String,
    pub hover: String,
}

impl Palette {
    pub fn colors_for(&self, status: CoverageStatus) -> CellColors {
        let (primary, hover): (&Color, &Color) = match status {
            CoverageStatus::FullyAbsent => (&self.absence_primary, &self.absence_secondary),
            CoverageStatus::Covered => (&self.presence_primary, &self.presence_secondary),
            CoverageStatus::PartiallySubstituted => {
                (&self.substitution_primary, &self.substitution_secondary)
            }
        };
        CellColors {
            primary: primary.to_string(),
            hover: hover.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teacher(id: u32, is_absent: bool, is_substitution: bool) -> TeacherAssignment {
        TeacherAssignment {
            teacher_id: id,
            name: "Maria".to_owned(),
            surname: "Montessori".to_owned(),
            class_year: 1,
            class_section: "AT".to_owned(),
            teaching_id: 100 + id,
            is_absent,
            is_substitution,
        }
    }

    #[test]
    fn missing_or_empty_slot_is_covered() {
        assert_eq!(resolve_status(None), CoverageStatus::Covered);
        assert_eq!(resolve_status(Some(&[] as &[TeacherAssignment])), CoverageStatus::Covered);
    }

    #[test]
    fn sole_absent_teacher() {
        let teachers = [teacher(1, true, false)];
        assert_eq!(resolve_status(Some(&teachers[..])), CoverageStatus::FullyAbsent);
    }

    #[test]
    fn one_of_two_absent_is_covered() {
        let teachers = [teacher(1, true, false), teacher(2, false, false)];
        assert_eq!(resolve_status(Some(&teachers[..])), CoverageStatus::Covered);
    }

    #[test]
    fn both_absent() {
        let teachers = [teacher(1, true, false), teacher(2, true, false)];
        assert_eq!(resolve_status(Some(&teachers[..])), CoverageStatus::FullyAbsent);
    }

    #[test]
    fn substitution_wins_over_absences() {
        let teachers = [teacher(1, false, true)];
        assert_eq!(
            resolve_status(Some(&teachers[..])),
            CoverageStatus::PartiallySubstituted
        );

        let teachers = [
            teacher(1, true, false),
            teacher(2, true, false),
            teacher(3, false, true),
        ];
        assert_eq!(
            resolve_status(Some(&teachers[..])),
            CoverageStatus::PartiallySubstituted
        );
    }

    #[test]
    fn absence_flag_takes_precedence_over_substitution_flag() {
        let teachers = [teacher(1, true, true)];
        assert_eq!(resolve_status(Some(&teachers[..])), CoverageStatus::FullyAbsent);
    }

    #[test]
    fn all_present() {
        let teachers = [teacher(1, false, false), teacher(2, false, false)];
        assert_eq!(resolve_status(Some(&teachers[..])), CoverageStatus::Covered);
    }

    #[test]
    fn palette_picks_colors_by_status() {
        let palette = Palette {
            text: Color::Css("#000".to_owned()),
            presence_primary: Color::Css("#0f0".to_owned()),
            presence_secondary: Color::Css("#0a0".to_owned()),
            absence_primary: Color::Rgb([255, 0, 0]),
            absence_secondary: Color::Rgba(200, 0, 0, 0.5),
            substitution_primary: Color::Css("orange".to_owned()),
            substitution_secondary: Color::Css("gold".to_owned()),
        };
        assert_eq!(
            palette.colors_for(CoverageStatus::FullyAbsent),
            CellColors {
                primary: "rgb(255, 0, 0)".to_owned(),
                hover: "rgba(200, 0, 0, 0.5)".to_owned(),
            }
        );
        assert_eq!(palette.colors_for(CoverageStatus::Covered).primary, "#0f0");
        assert_eq!(
            palette.colors_for(CoverageStatus::PartiallySubstituted).hover,
            "gold"
        );
    }
}
