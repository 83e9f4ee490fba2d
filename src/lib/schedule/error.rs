use thiserror::Error;

/// Everything that can go wrong between fetching a week and toggling a teacher.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("failed to reach schedule endpoint: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("endpoint rejected {action} with status {status}")]
    Rejected { action: String, status: u16 },

    #[error("malformed time {0:?}, expected H:MM")]
    InvalidTime(String),

    #[error("time settings produce no hour modules")]
    EmptyDay,

    #[error("time settings produce {0} hour modules, at most {max} fit a week", max = crate::schedule::grid::MAX_MODULES)]
    TooManyModules(usize),

    #[error("cell {index} is outside the {cells}-cell grid")]
    CellOutOfRange { index: usize, cells: usize },

    #[error("cell {0} has no lesson")]
    EmptyCell(usize),

    #[error("teacher {teacher_id} does not teach in cell {index}")]
    UnknownTeacher { index: usize, teacher_id: u32 },

    #[error("teacher {0} is covering a substitution and cannot be marked")]
    SubstitutionLocked(u32),

    #[error("grid is read-only")]
    ReadOnly,

    #[error("record {teaching_id} carries no teacher name")]
    MissingTeacherName { teaching_id: u32 },

    #[error("invalid toggle {0:?}, expected CELL:TEACHER")]
    InvalidToggle(String),

    #[error("failed to serialize grid: {0}")]
    Json(#[from] serde_json::Error),

    #[error("absence request task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ScheduleError {
    /// True when the endpoint could not be reached or refused the request,
    /// as opposed to a bad user action on an already loaded grid.
    pub fn is_endpoint_failure(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Rejected { .. })
    }
}
