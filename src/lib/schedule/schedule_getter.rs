use chrono::NaiveDate;
use log::{debug, info};
use reqwest::Client;
use serde::Serialize;
use serde_json::{json, Value};

use super::{
    error::ScheduleError,
    models::{record_model::LessonRecord, Config, Identity, RequestNames},
};

/// The `{name, argv}` envelope every endpoint action is called with.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct RpcRequest {
    pub name: String,
    pub argv: Vec<Value>,
}

impl RpcRequest {
    pub fn week(requests: &RequestNames, identity: &Identity, week: NaiveDate) -> Self {
        let week = week.format("%Y-%m-%d").to_string();
        match identity {
            Identity::Teacher { id, .. } => RpcRequest {
                name: requests.teacher_week.to_owned(),
                argv: vec![json!(id), json!(week)],
            },
            Identity::Course { year, section } => RpcRequest {
                name: requests.course_week.to_owned(),
                argv: vec![json!(year), json!(section), json!(week)],
            },
        }
    }
}

/// Client for the schedule endpoint. Cheap to clone, clones share the
/// connection pool.
#[derive(Debug, Clone)]
pub struct RpcClient {
    pub(crate) http: Client,
    pub(crate) endpoint_url: String,
    pub(crate) requests: RequestNames,
}

impl RpcClient {
    pub fn new(http: Client, config: &Config) -> Self {
        RpcClient {
            http,
            endpoint_url: config.endpoint_url.to_owned(),
            requests: config.requests.clone(),
        }
    }

    pub(crate) async fn call(&self, request: &RpcRequest) -> Result<reqwest::Response, ScheduleError> {
        debug!("Calling {} with {:?}", request.name, request.argv);
        let response = self
            .http
            .post(&self.endpoint_url)
            .json(request)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ScheduleError::Rejected {
                action: request.name.to_owned(),
                status: response.status().as_u16(),
            });
        }
        Ok(response)
    }
}

/// A trait, necessary for every entity that will be used for getting a week of lessons.
#[allow(async_fn_in_trait)]
pub trait ScheduleGetter {
    async fn get_week(
        &self,
        identity: &Identity,
        week: NaiveDate,
    ) -> Result<Vec<LessonRecord>, ScheduleError>;
}

/// Gets a week of lessons from the RPC endpoint.
impl ScheduleGetter for RpcClient {
    async fn get_week(
        &self,
        identity: &Identity,
        week: NaiveDate,
    ) -> Result<Vec<LessonRecord>, ScheduleError> {
        info!("Getting week of {} for {}", week, identity);
        let request = RpcRequest::week(&self.requests, identity, week);
        let records: Vec<LessonRecord> = self.call(&request).await?.json().await?;
        info!("Collected {} lesson records", records.len());
        Ok(records)
    }
}
