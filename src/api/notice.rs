//! Center notices

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::http_client::ApiClient;
use crate::types::CenterId;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub created_at: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeRequest {
    pub title: String,
    pub content: String,
}

pub struct NoticeApi<'a> {
    client: &'a ApiClient,
}

impl<'a> NoticeApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, center: CenterId) -> Result<Vec<Notice>> {
        self.client.get(&format!("/centers/{center}/notices")).await
    }

    pub async fn create(&self, center: CenterId, request: &NoticeRequest) -> Result<Notice> {
        self.client
            .post(&format!("/centers/{center}/notices"), request)
            .await
    }

    pub async fn update(
        &self,
        center: CenterId,
        notice: u64,
        request: &NoticeRequest,
    ) -> Result<Notice> {
        self.client
            .put(&format!("/centers/{center}/notices/{notice}"), request)
            .await
    }

    pub async fn delete(&self, center: CenterId, notice: u64) -> Result<()> {
        self.client
            .delete(&format!("/centers/{center}/notices/{notice}"))
            .await
    }
}
