use std::{fmt, path::PathBuf, str::FromStr};

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use super::error::ScheduleError;

pub mod lesson_model;
pub mod record_model;

use record_model::TeacherName;

/// A model for describing ARGS of the tool.
/// Consists of:
/// 1. Path to config.json, with the endpoint, request names, hours and colors.
/// 2. Any date inside the week to show, today when omitted.
/// 3. Cell whose pop-up is left open, and absence toggles to apply.
/// 4. Whose week to show: a teacher or a course.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, value_name = "FILE", default_value = "config.json")]
    pub config_json_path: PathBuf,
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub week: Option<NaiveDate>,
    #[arg(long, value_name = "CELL")]
    pub open: Option<usize>,
    #[arg(long, value_name = "CELL:TEACHER")]
    pub toggle: Vec<Toggle>,
    /// Show the grid without allowing absence toggles
    #[arg(long)]
    pub read_only: bool,
    /// Print the grid as JSON instead of a text table
    #[arg(long)]
    pub json: bool,
    #[command(subcommand)]
    pub identity: Identity,
}

/// Whose week is being looked at.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    /// Week of one teacher, across every class they teach
    Teacher {
        #[arg(long)]
        id: u32,
        #[arg(long)]
        name: String,
        #[arg(long)]
        surname: String,
    },
    /// Week of one class
    Course {
        #[arg(long)]
        year: u8,
        #[arg(long)]
        section: String,
    },
}

impl Identity {
    /// Teacher queries return records without names, so the name known from
    /// the query fills them in.
    pub fn known_teacher(&self) -> Option<TeacherName> {
        match self {
            Identity::Teacher { name, surname, .. } => Some(TeacherName {
                name: name.to_owned(),
                surname: surname.to_owned(),
            }),
            Identity::Course { .. } => None,
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identity::Teacher { id, name, surname } => write!(f, "{} {} ({})", name, surname, id),
            Identity::Course { year, section } => write!(f, "{} {}", year, section),
        }
    }
}

/// One `--toggle CELL:TEACHER` request from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle {
    pub cell: usize,
    pub teacher_id: u32,
}

impl FromStr for Toggle {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ScheduleError::InvalidToggle(s.to_owned());
        let (cell, teacher_id) = s.split_once(':').ok_or_else(invalid)?;
        Ok(Toggle {
            cell: cell.trim().parse().map_err(|_| invalid())?,
            teacher_id: teacher_id.trim().parse().map_err(|_| invalid())?,
        })
    }
}

/// What a grid is allowed to do beyond being looked at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub interactive_toggle: bool,
}

impl Capabilities {
    pub fn read_only() -> Self {
        Capabilities {
            interactive_toggle: false,
        }
    }

    pub fn interactive() -> Self {
        Capabilities {
            interactive_toggle: true,
        }
    }
}

/// A model for describing configuration of the tool.
/// Consists of:
/// 1. URL of the RPC endpoint every request is POSTed to
/// 2. Names of the four RPC actions
/// 3. Hour bounds of the school day
/// 4. Cell colors per coverage status
#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub endpoint_url: String,
    pub requests: RequestNames,
    pub time_settings: TimeSettings,
    pub palette: Palette,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RequestNames {
    pub teacher_week: String,
    pub course_week: String,
    pub absence_add: String,
    pub absence_remove: String,
}

/// Hour bounds, all written as `H:MM`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TimeSettings {
    pub hour_length: String,
    pub from_hour: String,
    pub to_hour: String,
}

/// A CSS color given either verbatim or as channel values.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Color {
    Css(String),
    Rgb([u8; 3]),
    Rgba(u8, u8, u8, f32),
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Css(css) => write!(f, "{}", css),
            Color::Rgb([r, g, b]) => write!(f, "rgb({}, {}, {})", r, g, b),
            Color::Rgba(r, g, b, a) => write!(f, "rgba({}, {}, {}, {})", r, g, b, a),
        }
    }
}

/// Cell colors: a primary and a hover color for each coverage status.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Palette {
    pub text: Color,
    pub presence_primary: Color,
    pub presence_secondary: Color,
    pub absence_primary: Color,
    pub absence_secondary: Color,
    pub substitution_primary: Color,
    pub substitution_secondary: Color,
}
