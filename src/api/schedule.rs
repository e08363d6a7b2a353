//! Class schedules

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::http_client::ApiClient;
use crate::types::CenterId;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSchedule {
    pub id: u64,
    pub class_name: String,
    pub instructor: String,
    /// RFC 3339 timestamps, as the backend sends them.
    pub start_at: String,
    pub end_at: String,
    pub capacity: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    pub class_name: String,
    pub instructor: String,
    pub start_at: String,
    pub end_at: String,
    pub capacity: u32,
}

pub struct ScheduleApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ScheduleApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Schedules within an inclusive date range (`YYYY-MM-DD`).
    pub async fn list(
        &self,
        center: CenterId,
        from: &str,
        to: &str,
    ) -> Result<Vec<ClassSchedule>> {
        self.client
            .get(&format!("/centers/{center}/schedules?from={from}&to={to}"))
            .await
    }

    pub async fn create(
        &self,
        center: CenterId,
        request: &ScheduleRequest,
    ) -> Result<ClassSchedule> {
        self.client
            .post(&format!("/centers/{center}/schedules"), request)
            .await
    }

    pub async fn update(
        &self,
        center: CenterId,
        schedule: u64,
        request: &ScheduleRequest,
    ) -> Result<ClassSchedule> {
        self.client
            .put(&format!("/centers/{center}/schedules/{schedule}"), request)
            .await
    }

    pub async fn delete(&self, center: CenterId, schedule: u64) -> Result<()> {
        self.client
            .delete(&format!("/centers/{center}/schedules/{schedule}"))
            .await
    }
}
