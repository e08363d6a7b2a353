//! Basic usage example
//!
//! Usage:
//!   cargo run --example basic_usage

use std::sync::{Arc, Mutex};

use fitadmin_client::api::auth::LoginRequest;
use fitadmin_client::{
    ApiClient, CenterGuard, CenterPrompt, ClientConfig, FileStore, Navigator, PromptOutcome,
    SelectedCenter, SessionContext,
};

/// Console navigator: tracks the "current path" and prints transitions.
struct ConsoleNavigator {
    current: Mutex<String>,
}

impl Navigator for ConsoleNavigator {
    fn current_path(&self) -> String {
        self.current.lock().unwrap().clone()
    }

    fn replace(&self, path: &str) {
        println!("  [navigator] full-page replace -> {path}");
        *self.current.lock().unwrap() = path.to_string();
    }

    fn push(&self, path: &str) {
        println!("  [navigator] route push -> {path}");
        *self.current.lock().unwrap() = path.to_string();
    }
}

/// Console prompt: always acknowledges.
struct ConsolePrompt;

impl CenterPrompt for ConsolePrompt {
    fn confirm(&self, title: &str, body: &str, confirm_label: &str) -> PromptOutcome {
        println!("  [prompt] {title}: {body} ({confirm_label})");
        PromptOutcome::Acknowledged
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let base_url = std::env::var("FITADMIN_API")
        .unwrap_or_else(|_| "http://localhost:8080".to_string());

    println!("=== Fitadmin Client Example ===");
    println!("Backend: {base_url}");
    println!();

    // Credentials persist across runs in a local JSON file
    let store = Arc::new(FileStore::open("fitadmin-credentials.json")?);
    let session = SessionContext::new(store);
    let navigator = Arc::new(ConsoleNavigator {
        current: Mutex::new("/".to_string()),
    });

    let client = ApiClient::new(ClientConfig::new(base_url.clone()), session, navigator.clone())?;

    // Log in; the rotated credential pair is harvested from the response
    // headers and persisted automatically.
    let login = LoginRequest {
        username: std::env::var("FITADMIN_USER").unwrap_or_else(|_| "admin".to_string()),
        password: std::env::var("FITADMIN_PASS").unwrap_or_else(|_| "admin".to_string()),
    };

    match client.auth().login(&login).await {
        Ok(me) => println!("✓ Logged in as {} (admin id {})", me.name, me.admin_id),
        Err(e) => {
            println!("! Login failed: {e}");
            println!("  (This is expected if the backend is not running)");
            return Ok(());
        }
    }
    println!();

    // The guard blocks center-scoped work until a center is chosen
    let selected = SelectedCenter::new();
    let guard = CenterGuard::new(
        client.session().clone(),
        selected.clone(),
        Arc::new(ConsolePrompt),
        navigator,
        "/select-center",
    );

    println!("Checking guard with no center selected...");
    println!("  gate: {:?}", guard.check());
    println!();

    // Pick the first center the admin can operate
    let centers = client.centers().list().await?;
    if let Some(center) = centers.first() {
        selected.select(center.id);
        println!("✓ Selected center: {} ({})", center.name, center.id);
    } else {
        println!("! No centers available");
        return Ok(());
    }
    println!();

    // Center-scoped work now passes the gate
    if let Some(center_id) = guard.guard(|id| id) {
        let list = client.notices().list(center_id).await?;
        println!("Notices ({}):", list.len());
        for notice in list {
            println!("  - {}", notice.title);
        }
    }

    println!();
    println!("Done!");

    Ok(())
}
