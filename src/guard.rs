//! Center-selection gate
//!
//! Center-scoped work must not run before an administrator has picked a
//! center. The guard reads the shared selected-center store on every pass
//! and, while nothing is selected, raises a single blocking prompt that
//! sends the user to the selection screen. The prompt-open flag lives in
//! the session context, so overlapping guard mounts share one prompt.

use std::sync::Arc;
use tracing::debug;

use crate::navigator::Navigator;
use crate::session::{SelectedCenter, SessionContext};
use crate::types::CenterId;

const PROMPT_TITLE: &str = "No center selected";
const PROMPT_BODY: &str = "Select a center to continue.";
const PROMPT_CONFIRM: &str = "Go to center selection";

/// Outcome of the blocking center-selection prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    /// The user acknowledged the prompt.
    Acknowledged,
    /// Any other dismissal path.
    Dismissed,
}

/// Blocking confirmation prompt collaborator.
///
/// Implementations must not allow dismissal by backdrop or keyboard; the
/// prompt stays until the user chooses.
pub trait CenterPrompt: Send + Sync + 'static {
    fn confirm(&self, title: &str, body: &str, confirm_label: &str) -> PromptOutcome;
}

/// Gate state as observed by one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// No center selected, no prompt open.
    BlockedNoPrompt,
    /// No center selected; a prompt is already open somewhere.
    BlockedPrompting,
    /// A center is selected; wrapped work may run.
    Unblocked(CenterId),
}

/// Continuously reactive gate over the selected-center store.
pub struct CenterGuard {
    session: SessionContext,
    selected: SelectedCenter,
    prompt: Arc<dyn CenterPrompt>,
    navigator: Arc<dyn Navigator>,
    center_select_path: String,
}

impl CenterGuard {
    pub fn new(
        session: SessionContext,
        selected: SelectedCenter,
        prompt: Arc<dyn CenterPrompt>,
        navigator: Arc<dyn Navigator>,
        center_select_path: impl Into<String>,
    ) -> Self {
        Self {
            session,
            selected,
            prompt,
            navigator,
            center_select_path: center_select_path.into(),
        }
    }

    /// Observe the gate without side effects.
    pub fn state(&self) -> GateState {
        match self.selected.get() {
            Some(id) => GateState::Unblocked(id),
            None if self.session.is_prompt_open() => GateState::BlockedPrompting,
            None => GateState::BlockedNoPrompt,
        }
    }

    /// Run one gate pass.
    ///
    /// While no center is selected and no prompt is open anywhere, opens the
    /// prompt, clears the flag on dismissal, and on acknowledgment performs
    /// an in-app transition to the selection screen. A pass that finds a
    /// prompt already open blocks silently.
    pub fn check(&self) -> GateState {
        if let Some(id) = self.selected.get() {
            return GateState::Unblocked(id);
        }

        if self.session.is_prompt_open() {
            return GateState::BlockedPrompting;
        }

        self.session.set_prompt_open(true);
        debug!("opening center-selection prompt");
        let outcome = self.prompt.confirm(PROMPT_TITLE, PROMPT_BODY, PROMPT_CONFIRM);
        self.session.set_prompt_open(false);

        if outcome == PromptOutcome::Acknowledged {
            debug!(path = %self.center_select_path, "navigating to center selection");
            self.navigator.push(&self.center_select_path);
        }

        // Selection may have changed while the prompt was up
        self.state()
    }

    /// Gate a center-scoped computation: runs `f` with the selected center id
    /// when the gate is open, yields nothing while blocked.
    pub fn guard<T>(&self, f: impl FnOnce(CenterId) -> T) -> Option<T> {
        match self.check() {
            GateState::Unblocked(id) => Some(f(id)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token_store::MemoryStore;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct ScriptedPrompt {
        outcome: PromptOutcome,
        shown: AtomicUsize,
    }

    impl ScriptedPrompt {
        fn new(outcome: PromptOutcome) -> Arc<Self> {
            Arc::new(Self {
                outcome,
                shown: AtomicUsize::new(0),
            })
        }

        fn shown(&self) -> usize {
            self.shown.load(Ordering::SeqCst)
        }
    }

    impl CenterPrompt for ScriptedPrompt {
        fn confirm(&self, _title: &str, _body: &str, _confirm: &str) -> PromptOutcome {
            self.shown.fetch_add(1, Ordering::SeqCst);
            self.outcome
        }
    }

    struct RecordingNavigator {
        pushes: Mutex<Vec<String>>,
    }

    impl RecordingNavigator {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                pushes: Mutex::new(Vec::new()),
            })
        }

        fn pushes(&self) -> Vec<String> {
            self.pushes.lock().unwrap().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn current_path(&self) -> String {
            "/member".to_string()
        }

        fn replace(&self, _path: &str) {}

        fn push(&self, path: &str) {
            self.pushes.lock().unwrap().push(path.to_string());
        }
    }

    fn guard_with(
        outcome: PromptOutcome,
    ) -> (
        CenterGuard,
        SelectedCenter,
        Arc<ScriptedPrompt>,
        Arc<RecordingNavigator>,
        SessionContext,
    ) {
        let session = SessionContext::new(Arc::new(MemoryStore::new()));
        let selected = SelectedCenter::new();
        let prompt = ScriptedPrompt::new(outcome);
        let navigator = RecordingNavigator::new();
        let guard = CenterGuard::new(
            session.clone(),
            selected.clone(),
            prompt.clone(),
            navigator.clone(),
            "/select-center",
        );
        (guard, selected, prompt, navigator, session)
    }

    #[test]
    fn test_selected_center_unblocks_without_prompt() {
        let (guard, selected, prompt, navigator, _session) =
            guard_with(PromptOutcome::Acknowledged);
        selected.select(42);

        assert_eq!(guard.check(), GateState::Unblocked(42));
        assert_eq!(guard.guard(|id| id * 2), Some(84));
        assert_eq!(prompt.shown(), 0);
        assert!(navigator.pushes().is_empty());
    }

    #[test]
    fn test_no_selection_prompts_once_and_navigates_on_ack() {
        let (guard, _selected, prompt, navigator, session) =
            guard_with(PromptOutcome::Acknowledged);

        assert_eq!(guard.check(), GateState::BlockedNoPrompt);
        assert_eq!(prompt.shown(), 1);
        assert_eq!(navigator.pushes(), vec!["/select-center".to_string()]);
        // Flag cleared after dismissal
        assert!(!session.is_prompt_open());
    }

    #[test]
    fn test_dismissal_clears_flag_without_navigating() {
        let (guard, _selected, prompt, navigator, session) =
            guard_with(PromptOutcome::Dismissed);

        assert_eq!(guard.check(), GateState::BlockedNoPrompt);
        assert_eq!(prompt.shown(), 1);
        assert!(navigator.pushes().is_empty());
        assert!(!session.is_prompt_open());
    }

    #[test]
    fn test_dismissal_allows_reprompt_on_next_pass() {
        let (guard, _selected, prompt, _navigator, session) =
            guard_with(PromptOutcome::Dismissed);

        assert_eq!(guard.check(), GateState::BlockedNoPrompt);
        assert_eq!(prompt.shown(), 1);

        // Flag cleared, still nothing selected: the next pass prompts again
        assert!(!session.is_prompt_open());
        assert_eq!(guard.check(), GateState::BlockedNoPrompt);
        assert_eq!(prompt.shown(), 2);
    }

    #[test]
    fn test_guard_yields_nothing_while_blocked() {
        let (guard, _selected, _prompt, _navigator, _session) =
            guard_with(PromptOutcome::Dismissed);

        assert_eq!(guard.guard(|id| id), None);
    }

    #[test]
    fn test_second_mount_does_not_open_second_prompt() {
        let (guard, selected, prompt, navigator, session) =
            guard_with(PromptOutcome::Acknowledged);

        // A prompt is already open elsewhere in the application
        session.set_prompt_open(true);

        let second = CenterGuard::new(
            session.clone(),
            selected,
            prompt.clone(),
            navigator,
            "/select-center",
        );

        assert_eq!(second.check(), GateState::BlockedPrompting);
        assert_eq!(guard.state(), GateState::BlockedPrompting);
        assert_eq!(prompt.shown(), 0);
    }

    #[test]
    fn test_selection_during_prompt_unblocks_same_pass() {
        struct SelectingPrompt {
            selected: SelectedCenter,
        }

        impl CenterPrompt for SelectingPrompt {
            fn confirm(&self, _title: &str, _body: &str, _confirm: &str) -> PromptOutcome {
                self.selected.select(7);
                PromptOutcome::Dismissed
            }
        }

        let session = SessionContext::new(Arc::new(MemoryStore::new()));
        let selected = SelectedCenter::new();
        let guard = CenterGuard::new(
            session,
            selected.clone(),
            Arc::new(SelectingPrompt { selected }),
            RecordingNavigator::new(),
            "/select-center",
        );

        assert_eq!(guard.check(), GateState::Unblocked(7));
    }
}
