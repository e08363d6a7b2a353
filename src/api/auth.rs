//! Login and logout

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::http_client::ApiClient;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub admin_id: u64,
    pub name: String,
}

pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Log in. The credential pair arrives in the response headers and is
    /// persisted by the client's response phase; nothing to store here.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        self.client.post("/login", request).await
    }

    /// Log out and drop the stored credential pair, whatever the server said.
    pub async fn logout(&self) -> Result<()> {
        let result = self.client.delete("/logout").await;
        self.client.session().clear_credentials();
        result
    }
}
