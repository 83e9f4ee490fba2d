use std::future::Future;

use log::{info, warn};
use serde_json::json;
use tokio::task::JoinHandle;

use super::{
    error::ScheduleError,
    models::{
        lesson_model::{AbsenceChange, AbsenceChangeKind},
        RequestNames,
    },
    schedule_getter::{RpcClient, RpcRequest},
};

impl RpcRequest {
    pub fn absence(requests: &RequestNames, change: &AbsenceChange) -> Self {
        let name = match change.kind {
            AbsenceChangeKind::Add => &requests.absence_add,
            AbsenceChangeKind::Remove => &requests.absence_remove,
        };
        RpcRequest {
            name: name.to_owned(),
            argv: vec![
                json!(change.date.format("%Y-%m-%d").to_string()),
                json!(change.teacher_id),
            ],
        }
    }
}

/// An absence change in flight. Await [`PendingChange::outcome`] to learn
/// how it went, or drop it to let the request finish on its own.
#[derive(Debug)]
pub struct PendingChange {
    pub change: AbsenceChange,
    handle: JoinHandle<Result<(), ScheduleError>>,
}

impl PendingChange {
    /// Run `request` as its own task. Needs a tokio runtime.
    pub fn spawn<F>(change: AbsenceChange, request: F) -> Self
    where
        F: Future<Output = Result<(), ScheduleError>> + Send + 'static,
    {
        PendingChange {
            change,
            handle: tokio::spawn(request),
        }
    }

    pub async fn outcome(self) -> (AbsenceChange, Result<(), ScheduleError>) {
        let result = match self.handle.await {
            Ok(result) => result,
            Err(join_error) => Err(ScheduleError::from(join_error)),
        };
        match &result {
            Ok(()) => info!(
                "Absence change for teacher {} on {} persisted",
                self.change.teacher_id, self.change.date
            ),
            Err(err) => warn!(
                "Absence change for teacher {} on {} failed, grid keeps the local state: {}",
                self.change.teacher_id, self.change.date, err
            ),
        }
        (self.change, result)
    }
}

/// A trait, necessary for every entity that will persist absence toggles.
pub trait AbsenceSender {
    fn send_change(&self, change: AbsenceChange) -> PendingChange;
}

/// Persists toggles through the same RPC endpoint the week came from.
impl AbsenceSender for RpcClient {
    fn send_change(&self, change: AbsenceChange) -> PendingChange {
        let client = self.clone();
        let request = RpcRequest::absence(&self.requests, &change);
        PendingChange::spawn(change, async move { client.call(&request).await.map(|_| ()) })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn requests() -> RequestNames {
        RequestNames {
            teacher_week: "teacher-week".to_owned(),
            course_week: "course-week".to_owned(),
            absence_add: "absence-add".to_owned(),
            absence_remove: "absence-remove-no-id".to_owned(),
        }
    }

    fn change(kind: AbsenceChangeKind) -> AbsenceChange {
        AbsenceChange {
            kind,
            date: NaiveDate::from_ymd_opt(2024, 10, 16).unwrap(),
            teacher_id: 7,
        }
    }

    #[test]
    fn absence_envelopes() {
        let add = RpcRequest::absence(&requests(), &change(AbsenceChangeKind::Add));
        assert_eq!(
            serde_json::to_value(&add).unwrap(),
            json!({"name": "absence-add", "argv": ["2024-10-16", 7]})
        );
        let remove = RpcRequest::absence(&requests(), &change(AbsenceChangeKind::Remove));
        assert_eq!(remove.name, "absence-remove-no-id");
        assert_eq!(remove.argv, add.argv);
    }

    async fn accepted() -> Result<(), ScheduleError> {
        Ok(())
    }

    async fn rejected() -> Result<(), ScheduleError> {
        Err(ScheduleError::Rejected {
            action: "absence-remove-no-id".to_owned(),
            status: 500,
        })
    }

    async fn dropped() -> Result<(), ScheduleError> {
        panic!("connection dropped")
    }

    #[tokio::test]
    async fn outcome_reports_task_result() {
        let ok = PendingChange::spawn(change(AbsenceChangeKind::Add), accepted());
        let (sent, result) = ok.outcome().await;
        assert_eq!(sent, change(AbsenceChangeKind::Add));
        assert!(result.is_ok());

        let refused = PendingChange::spawn(change(AbsenceChangeKind::Remove), rejected());
        let (_, result) = refused.outcome().await;
        assert!(matches!(
            result,
            Err(ScheduleError::Rejected { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn panicking_request_surfaces_as_task_error() {
        let pending = PendingChange::spawn(change(AbsenceChangeKind::Add), dropped());
        let (_, result) = pending.outcome().await;
        assert!(matches!(result, Err(ScheduleError::Task(_))));
    }
}
