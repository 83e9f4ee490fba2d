use super::{error::ScheduleError, grid::MAX_MODULES, models::TimeSettings};

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Minutes since midnight of a `H:MM` time, `24:00` at most.
pub fn minutes_of(time: &str) -> Result<u32, ScheduleError> {
    let invalid = || ScheduleError::InvalidTime(time.to_owned());
    let (hours, minutes) = time.trim().split_once(':').ok_or_else(invalid)?;
    let hours: u32 = hours.parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes.parse().map_err(|_| invalid())?;
    if minutes >= 60 || hours > 24 {
        return Err(invalid());
    }
    match hours * 60 + minutes {
        total if total > MINUTES_PER_DAY => Err(invalid()),
        total => Ok(total),
    }
}

pub fn format_minutes(minutes: u32) -> String {
    format!("{}:{:02}", minutes / 60, minutes % 60)
}

impl TimeSettings {
    /// How many lesson rows fit between the first and last hour.
    pub fn number_of_modules(&self) -> Result<usize, ScheduleError> {
        let length = minutes_of(&self.hour_length)?;
        let from = minutes_of(&self.from_hour)?;
        let to = minutes_of(&self.to_hour)?;
        if length == 0 || to <= from {
            return Err(ScheduleError::EmptyDay);
        }
        match ((to - from) / length) as usize {
            0 => Err(ScheduleError::EmptyDay),
            modules if modules > MAX_MODULES => Err(ScheduleError::TooManyModules(modules)),
            modules => Ok(modules),
        }
    }

    /// Start time of every module, top row first.
    pub fn hour_labels(&self) -> Result<Vec<String>, ScheduleError> {
        let length = minutes_of(&self.hour_length)?;
        let from = minutes_of(&self.from_hour)?;
        Ok((0..self.number_of_modules()?)
            .map(|module| format_minutes(from + length * module as u32))
            .collect())
    }
}
