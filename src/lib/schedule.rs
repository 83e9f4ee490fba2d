//! Weekly class-schedule grid: fetching, normalizing, coverage status and
//! inline absence toggling.
pub mod absence_sender;
pub mod error;
pub mod grid;
pub mod hours;
pub mod models;
pub mod normalizer;
pub mod render;
pub mod run_tool;
pub mod schedule_getter;
pub mod status;
pub mod week;
