//! Center info

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::http_client::ApiClient;
use crate::types::CenterId;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Center {
    pub id: CenterId,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub introduction: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCenterRequest {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub introduction: Option<String>,
}

pub struct CenterApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CenterApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Centers the logged-in administrator can operate.
    pub async fn list(&self) -> Result<Vec<Center>> {
        self.client.get("/centers").await
    }

    pub async fn get(&self, id: CenterId) -> Result<Center> {
        self.client.get(&format!("/centers/{id}")).await
    }

    pub async fn update(&self, id: CenterId, request: &UpdateCenterRequest) -> Result<Center> {
        self.client.put(&format!("/centers/{id}"), request).await
    }
}
