use chrono::NaiveDate;
use futures::future;
use log::info;

use super::{
    absence_sender::AbsenceSender,
    error::ScheduleError,
    grid::WeekGrid,
    models::{lesson_model::AbsenceChange, Args, Capabilities, Config},
    normalizer::normalize,
    render::{grid_view, render_grid, render_pop_up},
    schedule_getter::ScheduleGetter,
    week::week_anchor,
};

/// What one run did: the grid as left after all toggles, what to print, and
/// the outcome of every change request.
#[derive(Debug)]
pub struct RunReport {
    pub grid: WeekGrid,
    pub output: String,
    pub changes: Vec<(AbsenceChange, Result<(), ScheduleError>)>,
}

pub async fn run<SG: ScheduleGetter, AS: AbsenceSender>(
    schedule_getter: SG,
    absence_sender: AS,
    args: &Args,
    config: &Config,
    today: NaiveDate,
) -> Result<RunReport, ScheduleError> {
    let number_of_modules = config.time_settings.number_of_modules()?;
    let hour_labels = config.time_settings.hour_labels()?;
    let week = week_anchor(args.week.unwrap_or(today));

    let records = schedule_getter.get_week(&args.identity, week).await?;
    let slots = normalize(records, args.identity.known_teacher().as_ref())?;
    info!("Week of {} has {} lessons", week, slots.len());

    let capabilities = if args.read_only {
        Capabilities::read_only()
    } else {
        Capabilities::interactive()
    };
    let mut grid = WeekGrid::new(week, number_of_modules, capabilities, slots);

    // every toggle and the open cell must apply before any request leaves
    let mut staged = Vec::with_capacity(args.toggle.len());
    for toggle in &args.toggle {
        grid.open(toggle.cell)?;
        staged.push(grid.toggle_absence(toggle.cell, toggle.teacher_id)?);
    }
    if let Some(cell) = args.open {
        grid.open(cell)?;
    }
    let pending: Vec<_> = staged
        .into_iter()
        .map(|change| absence_sender.send_change(change))
        .collect();

    let output = if args.json {
        serde_json::to_string_pretty(&grid_view(&grid, &config.palette, &hour_labels, today))?
    } else {
        let mut output = render_grid(&grid, &hour_labels, today);
        if let Some(pop_up) = render_pop_up(&grid) {
            output.push('\n');
            output.push_str(&pop_up);
        }
        output
    };

    let changes = future::join_all(pending.into_iter().map(|change| change.outcome())).await;

    Ok(RunReport {
        grid,
        output,
        changes,
    })
}
