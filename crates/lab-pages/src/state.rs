//! Detail page lifecycle
//!
//! A detail page starts in `Loading` and moves exactly once to either
//! `Ready` or `Error`. Both end states are terminal.

use crate::error::StateError;
use serde::Serialize;

/// Status without payload, used for transition checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageStatus {
    /// Loading region shown
    Loading,
    /// Main region shown
    Ready,
    /// Error region shown
    Error,
}

/// Page state, carrying the error message when failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum PageState {
    /// Loading region shown
    Loading,
    /// Main region shown
    Ready,
    /// Error region shown with this message
    Error(String),
}

impl PageState {
    /// Status of this state
    #[must_use]
    pub fn status(&self) -> PageStatus {
        match self {
            Self::Loading => PageStatus::Loading,
            Self::Ready => PageStatus::Ready,
            Self::Error(_) => PageStatus::Error,
        }
    }

    /// Whether no further transition is allowed
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        allowed_transitions(self.status()).is_empty()
    }

    /// Error message, if failed
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Validates a status transition
///
/// # Errors
///
/// Returns [`StateError::IllegalTransition`] when `to` is not reachable
/// from `from`.
pub fn validate_transition(from: PageStatus, to: PageStatus) -> Result<(), StateError> {
    if allowed_transitions(from).contains(&to) {
        Ok(())
    } else {
        Err(StateError::IllegalTransition { from, to })
    }
}

/// Statuses reachable from `from`
#[must_use]
pub fn allowed_transitions(from: PageStatus) -> Vec<PageStatus> {
    match from {
        PageStatus::Loading => vec![PageStatus::Ready, PageStatus::Error],
        PageStatus::Ready | PageStatus::Error => vec![],
    }
}

/// Tracks one page load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLifecycle {
    state: PageState,
}

impl Default for PageLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl PageLifecycle {
    /// Start in `Loading`
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: PageState::Loading,
        }
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// Move to `Ready`
    ///
    /// # Errors
    ///
    /// Fails if the page already left `Loading`.
    pub fn ready(&mut self) -> Result<(), StateError> {
        self.transition(PageState::Ready)
    }

    /// Move to `Error` with a user-facing message
    ///
    /// # Errors
    ///
    /// Fails if the page already left `Loading`.
    pub fn fail(&mut self, message: impl Into<String>) -> Result<(), StateError> {
        self.transition(PageState::Error(message.into()))
    }

    fn transition(&mut self, next: PageState) -> Result<(), StateError> {
        validate_transition(self.state.status(), next.status())?;
        self.state = next;
        Ok(())
    }

    /// Final state
    #[must_use]
    pub fn into_state(self) -> PageState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_resolves_once() {
        let mut page = PageLifecycle::new();
        assert_eq!(page.state(), &PageState::Loading);
        page.ready().unwrap();
        assert!(page.state().is_terminal());

        let err = page.fail("late").unwrap_err();
        assert!(matches!(
            err,
            StateError::IllegalTransition {
                from: PageStatus::Ready,
                to: PageStatus::Error
            }
        ));
        assert_eq!(page.into_state(), PageState::Ready);
    }

    #[test]
    fn error_is_terminal() {
        let mut page = PageLifecycle::new();
        page.fail("Project \"x\" not found").unwrap();
        assert!(page.ready().is_err());
        assert_eq!(page.state().message(), Some("Project \"x\" not found"));
    }

    #[test]
    fn transition_table() {
        assert!(validate_transition(PageStatus::Loading, PageStatus::Ready).is_ok());
        assert!(validate_transition(PageStatus::Loading, PageStatus::Error).is_ok());
        assert!(validate_transition(PageStatus::Loading, PageStatus::Loading).is_err());
        assert!(allowed_transitions(PageStatus::Error).is_empty());
    }

    #[test]
    fn serializes_with_message() {
        let json = serde_json::to_value(PageState::Error("boom".into())).unwrap();
        assert_eq!(json, serde_json::json!({"state": "error", "message": "boom"}));
        let json = serde_json::to_value(PageState::Ready).unwrap();
        assert_eq!(json, serde_json::json!({"state": "ready"}));
    }
}
