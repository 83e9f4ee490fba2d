use chrono::NaiveDate;
use log::{debug, info, warn};

use super::{
    error::ScheduleError,
    models::{
        lesson_model::{AbsenceChange, AbsenceChangeKind, LessonSlot, SlotKey},
        Capabilities,
    },
    normalizer::Slots,
    status::{resolve_status, CoverageStatus},
    week::{day_date, DAYS},
};

pub const DAYS_PER_WEEK: usize = DAYS.len();

/// Rows a grid can hold while every hour still has its own `u8` key.
pub const MAX_MODULES: usize = u8::MAX as usize + 1;

/// Slot key of a linear cell index. Cells run row-major, one row per hour,
/// and days are 1-based on the wire. `None` past the last keyable row.
pub fn cell_to_key(index: usize) -> Option<SlotKey> {
    let hour = u8::try_from(index / DAYS_PER_WEEK).ok()?;
    let day = (index % DAYS_PER_WEEK) as u8 + 1;
    Some(SlotKey::new(day, hour))
}

/// Inverse of [`cell_to_key`], `None` when the key falls outside the grid.
pub fn key_to_cell(key: SlotKey, number_of_modules: usize) -> Option<usize> {
    let day = usize::from(key.day);
    let hour = usize::from(key.hour);
    if !(1..=DAYS_PER_WEEK).contains(&day) || hour >= number_of_modules {
        return None;
    }
    Some(hour * DAYS_PER_WEEK + day - 1)
}

/// The lessons of one week laid out as cells, with the coverage status of
/// every cell and at most one open pop-up.
#[derive(Debug, Clone)]
pub struct WeekGrid {
    week: NaiveDate,
    number_of_modules: usize,
    capabilities: Capabilities,
    slots: Slots,
    statuses: Vec<CoverageStatus>,
    open_cell: Option<usize>,
}

impl WeekGrid {
    pub fn new(
        week: NaiveDate,
        number_of_modules: usize,
        capabilities: Capabilities,
        slots: Slots,
    ) -> Self {
        if number_of_modules > MAX_MODULES {
            warn!(
                "A week of {} hours is cut to {} rows",
                number_of_modules, MAX_MODULES
            );
        }
        let number_of_modules = number_of_modules.min(MAX_MODULES);
        for key in slots
            .keys()
            .filter(|key| key_to_cell(**key, number_of_modules).is_none())
        {
            warn!(
                "Slot {} has no cell in a {}-hour week, it will not be shown",
                key, number_of_modules
            );
        }
        let statuses = (0..number_of_modules * DAYS_PER_WEEK)
            .map(|index| {
                resolve_status(
                    cell_to_key(index)
                        .and_then(|key| slots.get(&key))
                        .map(|slot| slot.teachers.as_slice()),
                )
            })
            .collect();
        WeekGrid {
            week,
            number_of_modules,
            capabilities,
            slots,
            statuses,
            open_cell: None,
        }
    }

    pub fn week(&self) -> NaiveDate {
        self.week
    }

    pub fn number_of_modules(&self) -> usize {
        self.number_of_modules
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn cell_count(&self) -> usize {
        self.statuses.len()
    }

    pub fn slot(&self, index: usize) -> Option<&LessonSlot> {
        if index >= self.cell_count() {
            return None;
        }
        cell_to_key(index).and_then(|key| self.slots.get(&key))
    }

    pub fn status(&self, index: usize) -> Option<CoverageStatus> {
        self.statuses.get(index).copied()
    }

    pub fn statuses(&self) -> &[CoverageStatus] {
        &self.statuses
    }

    pub fn open_cell(&self) -> Option<usize> {
        self.open_cell
    }

    fn occupied_slot(&self, index: usize) -> Result<&LessonSlot, ScheduleError> {
        if index >= self.cell_count() {
            return Err(ScheduleError::CellOutOfRange {
                index,
                cells: self.cell_count(),
            });
        }
        self.slot(index).ok_or(ScheduleError::EmptyCell(index))
    }

    /// Open the pop-up of an occupied cell, closing whichever was open.
    pub fn open(&mut self, index: usize) -> Result<(), ScheduleError> {
        self.occupied_slot(index)?;
        if let Some(previous) = self.open_cell.filter(|&previous| previous != index) {
            debug!("Closing pop-up of cell {}", previous);
        }
        self.open_cell = Some(index);
        Ok(())
    }

    pub fn close(&mut self) {
        self.open_cell = None;
    }

    /// Flip a teacher's absence in place and recompute that one cell.
    /// Returns the change to persist; the flip stands whatever the endpoint
    /// later says.
    pub fn toggle_absence(
        &mut self,
        index: usize,
        teacher_id: u32,
    ) -> Result<AbsenceChange, ScheduleError> {
        if !self.capabilities.interactive_toggle {
            return Err(ScheduleError::ReadOnly);
        }
        self.occupied_slot(index)?;

        let slot = cell_to_key(index)
            .and_then(|key| self.slots.get_mut(&key))
            .ok_or(ScheduleError::EmptyCell(index))?;
        let teacher = slot
            .teachers
            .iter_mut()
            .find(|teacher| teacher.teacher_id == teacher_id)
            .ok_or(ScheduleError::UnknownTeacher { index, teacher_id })?;
        if teacher.is_substitution && !teacher.is_absent {
            return Err(ScheduleError::SubstitutionLocked(teacher_id));
        }

        teacher.is_absent = !teacher.is_absent;
        let kind = if teacher.is_absent {
            AbsenceChangeKind::Add
        } else {
            AbsenceChangeKind::Remove
        };
        let date = day_date(self.week, slot.day);
        self.statuses[index] = resolve_status(Some(slot.teachers.as_slice()));
        info!(
            "Teacher {} marked {} on {} (cell {}), cell is now {:?}",
            teacher_id,
            if kind == AbsenceChangeKind::Add {
                "absent"
            } else {
                "present"
            },
            date,
            index,
            self.statuses[index]
        );

        Ok(AbsenceChange {
            kind,
            date,
            teacher_id,
        })
    }
}

#[cfg(test)]
#[path = "tests/grid_tests.rs"]
mod tests;
