//! Navigation collaborator
//!
//! The client needs a full-page replacement for the unauthorized redirect;
//! the guard needs an in-app transition after the prompt is acknowledged.
//! Both go through this trait so the core stays free of any UI toolkit.

pub trait Navigator: Send + Sync + 'static {
    /// Current location path, e.g. `/member`.
    fn current_path(&self) -> String;

    /// Full-page replacement. Drops all in-app state.
    fn replace(&self, path: &str);

    /// In-app route transition.
    fn push(&self, path: &str);
}
