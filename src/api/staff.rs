//! Staff members and roles

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::http_client::ApiClient;
use crate::types::CenterId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StaffRole {
    Owner,
    Manager,
    Trainer,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    pub id: u64,
    pub name: String,
    pub role: StaffRole,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChangeRoleRequest {
    role: StaffRole,
}

pub struct StaffApi<'a> {
    client: &'a ApiClient,
}

impl<'a> StaffApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, center: CenterId) -> Result<Vec<StaffMember>> {
        self.client.get(&format!("/centers/{center}/staff")).await
    }

    pub async fn change_role(
        &self,
        center: CenterId,
        staff: u64,
        role: StaffRole,
    ) -> Result<StaffMember> {
        self.client
            .patch(
                &format!("/centers/{center}/staff/{staff}"),
                &ChangeRoleRequest { role },
            )
            .await
    }
}
