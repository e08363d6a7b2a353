//! Shared type definitions

/// Identifier of a fitness center. Zero is never a valid id; it doubles as
/// the "nothing selected" sentinel in the selected-center store.
pub type CenterId = u64;

/// The access/refresh credential pair as read from storage, after
/// normalization. Either half may be absent independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialPair {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl CredentialPair {
    /// True when neither token is present.
    pub fn is_empty(&self) -> bool {
        self.access_token.is_none() && self.refresh_token.is_none()
    }
}
