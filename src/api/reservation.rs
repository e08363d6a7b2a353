//! Class reservations

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::http_client::ApiClient;
use crate::types::CenterId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReservationStatus {
    Pending,
    Accepted,
    Rejected,
    Canceled,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: u64,
    pub schedule_id: u64,
    pub member_name: String,
    pub status: ReservationStatus,
    pub requested_at: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateStatusRequest {
    status: ReservationStatus,
}

pub struct ReservationApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ReservationApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Reservations for one day (`YYYY-MM-DD`).
    pub async fn list(&self, center: CenterId, date: &str) -> Result<Vec<Reservation>> {
        self.client
            .get(&format!("/centers/{center}/reservations?date={date}"))
            .await
    }

    pub async fn accept(&self, center: CenterId, reservation: u64) -> Result<Reservation> {
        self.set_status(center, reservation, ReservationStatus::Accepted)
            .await
    }

    pub async fn reject(&self, center: CenterId, reservation: u64) -> Result<Reservation> {
        self.set_status(center, reservation, ReservationStatus::Rejected)
            .await
    }

    async fn set_status(
        &self,
        center: CenterId,
        reservation: u64,
        status: ReservationStatus,
    ) -> Result<Reservation> {
        self.client
            .patch(
                &format!("/centers/{center}/reservations/{reservation}"),
                &UpdateStatusRequest { status },
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names_are_uppercase() {
        assert_eq!(
            serde_json::to_string(&ReservationStatus::Accepted).unwrap(),
            "\"ACCEPTED\""
        );
        assert_eq!(
            serde_json::from_str::<ReservationStatus>("\"PENDING\"").unwrap(),
            ReservationStatus::Pending
        );
    }
}
