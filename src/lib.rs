//! Fitadmin Client
//!
//! A Rust client library for the fitness-center admin console API, with
//! automatic bearer/refresh credential header propagation, rotation
//! harvesting, and center-scope gating for center-bound work.

pub mod api;
pub mod error;
pub mod guard;
pub mod http_client;
pub mod navigator;
pub mod session;
pub mod token_store;
pub mod types;

pub use error::{ClientError, Result};
pub use guard::{CenterGuard, CenterPrompt, GateState, PromptOutcome};
pub use http_client::{ApiClient, ClientConfig};
pub use navigator::Navigator;
pub use session::{SelectedCenter, SessionContext};
pub use token_store::{CredentialStore, FileStore, MemoryStore};
pub use types::{CenterId, CredentialPair};
