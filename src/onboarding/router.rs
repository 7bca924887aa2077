//! Launch router — decides on every cold start whether to show onboarding.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use super::catalog::PageCatalog;
use super::gate::CompletionGate;
use super::model::LaunchRoute;
use super::state::OnboardingSession;

/// Parameters the app was launched with (deep-link extras).
///
/// Opaque to the router and forwarded unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchIntent {
    pub extras: BTreeMap<String, String>,
}

impl LaunchIntent {
    pub fn new(extras: BTreeMap<String, String>) -> Self {
        Self { extras }
    }
}

/// Router output handed to the entry point.
#[derive(Debug)]
pub enum LaunchDecision {
    /// First run: present the pages, starting at position 0.
    ShowOnboarding {
        session: OnboardingSession,
        intent: LaunchIntent,
    },
    /// Returning user: go straight to the main flow.
    ShowMain { intent: LaunchIntent },
}

impl LaunchDecision {
    pub fn route(&self) -> LaunchRoute {
        match self {
            Self::ShowOnboarding { .. } => LaunchRoute::ShowOnboarding,
            Self::ShowMain { .. } => LaunchRoute::ShowMain,
        }
    }

    pub fn intent(&self) -> &LaunchIntent {
        match self {
            Self::ShowOnboarding { intent, .. } | Self::ShowMain { intent } => intent,
        }
    }

    pub fn into_intent(self) -> LaunchIntent {
        match self {
            Self::ShowOnboarding { intent, .. } | Self::ShowMain { intent } => intent,
        }
    }
}

/// Stateless router over the completion gate.
#[derive(Clone)]
pub struct LaunchRouter {
    gate: CompletionGate,
    catalog: Arc<PageCatalog>,
}

impl LaunchRouter {
    pub fn new(gate: CompletionGate, catalog: Arc<PageCatalog>) -> Self {
        Self { gate, catalog }
    }

    pub fn gate(&self) -> &CompletionGate {
        &self.gate
    }

    pub fn catalog(&self) -> &Arc<PageCatalog> {
        &self.catalog
    }

    /// Where a cold start should land. Unset or unreadable means onboarding.
    pub async fn route(&self) -> LaunchRoute {
        if self.gate.is_complete().await {
            LaunchRoute::ShowMain
        } else {
            LaunchRoute::ShowOnboarding
        }
    }

    /// Evaluate a cold start. A session exists only on the onboarding branch.
    pub async fn evaluate(&self, intent: LaunchIntent) -> LaunchDecision {
        let route = self.route().await;
        debug!(%route, extras = intent.extras.len(), "Launch routed");
        match route {
            LaunchRoute::ShowMain => LaunchDecision::ShowMain { intent },
            LaunchRoute::ShowOnboarding => LaunchDecision::ShowOnboarding {
                session: OnboardingSession::new(Arc::clone(&self.catalog), self.gate.clone()),
                intent,
            },
        }
    }
}
