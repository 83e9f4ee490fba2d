use std::fmt::Write;

use chrono::NaiveDate;
use serde::Serialize;

use super::{
    error::ScheduleError,
    grid::{WeekGrid, DAYS_PER_WEEK},
    models::{lesson_model::TeacherAssignment, Palette},
    status::{CellColors, CoverageStatus},
    week::{day_labels, DAYS},
};

const CELL_WIDTH: usize = 18;
const HOUR_WIDTH: usize = 6;

fn marker(status: CoverageStatus) -> &'static str {
    match status {
        CoverageStatus::FullyAbsent => " [A]",
        CoverageStatus::PartiallySubstituted => " [S]",
        CoverageStatus::Covered => "",
    }
}

/// Text of the button next to a teacher in the pop-up.
pub fn teacher_action_label(teacher: &TeacherAssignment) -> &'static str {
    if teacher.is_absent {
        "segna presente"
    } else if teacher.is_substitution {
        "sta sostituendo"
    } else {
        "segna assente"
    }
}

fn fit(text: &str, width: usize) -> String {
    let mut fitted = text.chars().take(width).collect::<String>();
    let len = fitted.chars().count();
    fitted.extend(std::iter::repeat(' ').take(width - len));
    fitted
}

fn fit_with_marker(subject: &str, marker: &str, width: usize) -> String {
    let room = width.saturating_sub(marker.chars().count());
    fit(&format!("{}{}", fit(subject, room).trim_end(), marker), width)
}

/// The week as a table: day headers, one row per hour module.
pub fn render_grid(grid: &WeekGrid, hour_labels: &[String], today: NaiveDate) -> String {
    let mut out = String::new();

    let _ = write!(out, "{}", fit("", HOUR_WIDTH));
    for (label, is_today) in day_labels(grid.week(), today) {
        let label = if is_today {
            format!("*{}*", label)
        } else {
            label
        };
        let _ = write!(out, "|{}", fit(&label, CELL_WIDTH));
    }
    out.push_str("|\n");

    for hour in 0..grid.number_of_modules() {
        let label = hour_labels.get(hour).map(String::as_str).unwrap_or("");
        let _ = write!(out, "{}", fit(label, HOUR_WIDTH));
        for day in 0..DAYS_PER_WEEK {
            let index = hour * DAYS_PER_WEEK + day;
            let cell = match (grid.slot(index), grid.status(index)) {
                (Some(slot), Some(status)) => {
                    fit_with_marker(&slot.subject, marker(status), CELL_WIDTH)
                }
                _ => fit("", CELL_WIDTH),
            };
            let _ = write!(out, "|{}", cell);
        }
        out.push_str("|\n");
    }

    out
}

/// The open pop-up, if any: header line, then one line per teacher.
pub fn render_pop_up(grid: &WeekGrid) -> Option<String> {
    let index = grid.open_cell()?;
    let slot = grid.slot(index)?;
    let mut out = format!(
        "{} Ora :{} {}\n",
        DAYS[index % DAYS_PER_WEEK],
        slot.hour + 1,
        slot.subject
    );
    for teacher in &slot.teachers {
        let _ = writeln!(
            out,
            "  {} {} {} {}  [{}]",
            teacher.name,
            teacher.surname,
            teacher.class_year,
            teacher.class_section,
            teacher_action_label(teacher)
        );
    }
    Some(out)
}

pub fn render_fetch_error(err: &ScheduleError) -> String {
    format!("Impossibile caricare l'orario: {}\n", err)
}

#[derive(Debug, Serialize)]
pub struct CellView<'a> {
    pub index: usize,
    pub day: u8,
    pub hour: u8,
    pub subject: &'a str,
    pub status: CoverageStatus,
    pub colors: CellColors,
    pub teachers: &'a [TeacherAssignment],
}

/// Everything needed to draw the week elsewhere.
#[derive(Debug, Serialize)]
pub struct GridView<'a> {
    pub week: NaiveDate,
    pub days: Vec<(String, bool)>,
    pub hours: &'a [String],
    pub text_color: String,
    pub open_cell: Option<usize>,
    pub cells: Vec<CellView<'a>>,
}

pub fn grid_view<'a>(
    grid: &'a WeekGrid,
    palette: &Palette,
    hour_labels: &'a [String],
    today: NaiveDate,
) -> GridView<'a> {
    let cells = (0..grid.cell_count())
        .filter_map(|index| {
            let slot = grid.slot(index)?;
            let status = grid.status(index)?;
            Some(CellView {
                index,
                day: slot.day,
                hour: slot.hour,
                subject: &slot.subject,
                status,
                colors: palette.colors_for(status),
                teachers: &slot.teachers,
            })
        })
        .collect();

    GridView {
        week: grid.week(),
        days: day_labels(grid.week(), today),
        hours: hour_labels,
        text_color: palette.text.to_string(),
        open_cell: grid.open_cell(),
        cells,
    }
}
