//! Ticket products and issuances

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::http_client::ApiClient;
use crate::types::CenterId;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketProduct {
    pub id: u64,
    pub name: String,
    pub total_count: u32,
    pub period_days: u32,
    pub price: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketProductRequest {
    pub name: String,
    pub total_count: u32,
    pub period_days: u32,
    pub price: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketIssuance {
    pub id: u64,
    pub ticket_id: u64,
    pub member_name: String,
    pub issued_at: String,
    pub expires_at: String,
    pub remaining_count: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueTicketRequest {
    pub member_id: u64,
}

pub struct TicketApi<'a> {
    client: &'a ApiClient,
}

impl<'a> TicketApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list_products(&self, center: CenterId) -> Result<Vec<TicketProduct>> {
        self.client.get(&format!("/centers/{center}/tickets")).await
    }

    pub async fn create_product(
        &self,
        center: CenterId,
        request: &TicketProductRequest,
    ) -> Result<TicketProduct> {
        self.client
            .post(&format!("/centers/{center}/tickets"), request)
            .await
    }

    pub async fn delete_product(&self, center: CenterId, ticket: u64) -> Result<()> {
        self.client
            .delete(&format!("/centers/{center}/tickets/{ticket}"))
            .await
    }

    pub async fn issue(
        &self,
        center: CenterId,
        ticket: u64,
        request: &IssueTicketRequest,
    ) -> Result<TicketIssuance> {
        self.client
            .post(
                &format!("/centers/{center}/tickets/{ticket}/issuances"),
                request,
            )
            .await
    }

    pub async fn list_issuances(
        &self,
        center: CenterId,
        ticket: u64,
    ) -> Result<Vec<TicketIssuance>> {
        self.client
            .get(&format!("/centers/{center}/tickets/{ticket}/issuances"))
            .await
    }
}
