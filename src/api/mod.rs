//! Entity endpoint wrappers over the authenticated client
//!
//! Thin typed glue: each module pairs DTOs with the paths they travel on.
//! All credential handling stays in the client; nothing here touches tokens.

pub mod auth;
pub mod center;
pub mod notice;
pub mod reservation;
pub mod schedule;
pub mod staff;
pub mod ticket;

use crate::http_client::ApiClient;

impl ApiClient {
    pub fn auth(&self) -> auth::AuthApi<'_> {
        auth::AuthApi::new(self)
    }

    pub fn centers(&self) -> center::CenterApi<'_> {
        center::CenterApi::new(self)
    }

    pub fn notices(&self) -> notice::NoticeApi<'_> {
        notice::NoticeApi::new(self)
    }

    pub fn schedules(&self) -> schedule::ScheduleApi<'_> {
        schedule::ScheduleApi::new(self)
    }

    pub fn tickets(&self) -> ticket::TicketApi<'_> {
        ticket::TicketApi::new(self)
    }

    pub fn reservations(&self) -> reservation::ReservationApi<'_> {
        reservation::ReservationApi::new(self)
    }

    pub fn staff(&self) -> staff::StaffApi<'_> {
        staff::StaffApi::new(self)
    }
}
