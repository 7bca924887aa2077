//! Onboarding session — pager position over the catalog and the exit actions.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::catalog::{PAGE_COUNT, PageCatalog};
use super::gate::CompletionGate;
use super::model::{Destination, ExitAction, PageDescriptor};
use crate::error::CatalogError;

/// Result of dismissing onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Handoff {
    pub action: ExitAction,
    pub destination: Destination,
    /// Whether the completion flag was confirmed on disk. Navigation
    /// proceeds either way; `false` means onboarding may show again.
    pub persisted: bool,
}

/// One presentation of the onboarding pages.
///
/// Always starts at position 0 and is never persisted. `exit` consumes the
/// session so a dismissed onboarding cannot be navigated back into.
pub struct OnboardingSession {
    catalog: Arc<PageCatalog>,
    gate: CompletionGate,
    position: usize,
}

impl OnboardingSession {
    pub fn new(catalog: Arc<PageCatalog>, gate: CompletionGate) -> Self {
        Self {
            catalog,
            gate,
            position: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn catalog(&self) -> &PageCatalog {
        &self.catalog
    }

    pub fn current_page(&self) -> &PageDescriptor {
        &self.catalog.pages()[self.position]
    }

    pub fn is_first(&self) -> bool {
        self.position == 0
    }

    pub fn is_last(&self) -> bool {
        self.position == PAGE_COUNT - 1
    }

    /// Move one page forward. Returns `false` if already on the last page.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.position += 1;
        debug!(position = self.position, "Onboarding page advanced");
        true
    }

    /// Move one page back. Returns `false` if already on the first page.
    pub fn previous(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.position -= 1;
        debug!(position = self.position, "Onboarding page went back");
        true
    }

    /// Jump straight to `position` (swipe settle or indicator tap).
    pub fn select(&mut self, position: i64) -> Result<&PageDescriptor, CatalogError> {
        self.catalog.get(position)?;
        // get() succeeded, so position is in [0, PAGE_COUNT)
        self.position = position as usize;
        debug!(position = self.position, "Onboarding page selected");
        Ok(self.current_page())
    }

    /// Page indicator dots: exactly one is active, at the current position.
    pub fn indicator(&self) -> [bool; PAGE_COUNT] {
        std::array::from_fn(|i| i == self.position)
    }

    /// Dismiss onboarding.
    ///
    /// The completion flag is written before the handoff is produced, so the
    /// caller cannot navigate ahead of the write.
    pub async fn exit(self, action: ExitAction) -> Handoff {
        let persisted = self.gate.set_complete(true).await;
        if persisted {
            info!(%action, position = self.position, "Onboarding marked as complete");
        } else {
            warn!(%action, "Failed to mark onboarding as complete, continuing to main flow");
        }
        Handoff {
            action,
            destination: action.destination(),
            persisted,
        }
    }
}

impl std::fmt::Debug for OnboardingSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnboardingSession")
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{LibSqlBackend, PreferenceStore};

    async fn new_session() -> (OnboardingSession, CompletionGate) {
        let store: Arc<dyn PreferenceStore> = Arc::new(LibSqlBackend::new_memory().await.unwrap());
        let gate = CompletionGate::new(store);
        let catalog = Arc::new(PageCatalog::standard().unwrap());
        (OnboardingSession::new(catalog, gate.clone()), gate)
    }

    #[tokio::test]
    async fn starts_at_first_page() {
        let (session, _) = new_session().await;
        assert_eq!(session.position(), 0);
        assert!(session.is_first());
        assert_eq!(session.current_page().title(), "Stay Cool, Stay Comfortable");
        assert_eq!(session.indicator(), [true, false, false]);
    }

    #[tokio::test]
    async fn next_and_previous_saturate() {
        let (mut session, _) = new_session().await;

        assert!(!session.previous());
        assert_eq!(session.position(), 0);

        assert!(session.next());
        assert!(session.next());
        assert!(session.is_last());
        assert!(!session.next());
        assert_eq!(session.position(), 2);
        assert_eq!(session.current_page().title(), "Let's Get Started");

        assert!(session.previous());
        assert_eq!(session.position(), 1);
        assert_eq!(session.indicator(), [false, true, false]);
    }

    #[tokio::test]
    async fn navigation_never_leaves_range() {
        let (mut session, _) = new_session().await;
        let moves = [true, true, true, false, true, false, false, false, true];
        for forward in moves {
            if forward {
                session.next();
            } else {
                session.previous();
            }
            assert!(session.position() < PAGE_COUNT);
            assert_eq!(session.indicator().iter().filter(|dot| **dot).count(), 1);
            assert!(session.indicator()[session.position()]);
        }
    }

    #[tokio::test]
    async fn select_jumps_and_rejects_invalid() {
        let (mut session, _) = new_session().await;

        let page = session.select(2).unwrap();
        assert_eq!(page.title(), "Let's Get Started");
        assert_eq!(session.position(), 2);

        assert!(matches!(
            session.select(3),
            Err(CatalogError::OutOfRange { position: 3, .. })
        ));
        assert!(session.select(-1).is_err());
        // Failed selects leave the position unchanged
        assert_eq!(session.position(), 2);
    }

    #[tokio::test]
    async fn exit_from_any_position_sets_gate() {
        for position in 0..PAGE_COUNT as i64 {
            for action in [ExitAction::GetStarted, ExitAction::AlreadyMember] {
                let (mut session, gate) = new_session().await;
                session.select(position).unwrap();
                assert!(!gate.is_complete().await);

                let handoff = session.exit(action).await;
                assert_eq!(handoff.action, action);
                assert_eq!(handoff.destination, action.destination());
                assert!(handoff.persisted);
                assert!(gate.is_complete().await);
            }
        }
    }
}
