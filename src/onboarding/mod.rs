//! Onboarding system — first-launch introductory pages.
//!
//! A cold start asks the [`LaunchRouter`] where to go. Until the user has
//! dismissed onboarding once, it hands back an [`OnboardingSession`] over
//! the fixed [`PageCatalog`]; either exit action persists the
//! [`CompletionGate`] flag and every later launch goes straight to the
//! main flow.

pub mod catalog;
pub mod gate;
pub mod model;
pub mod router;
pub mod routes;
pub mod state;

pub use catalog::{PAGE_COUNT, PageCatalog};
pub use gate::CompletionGate;
pub use model::{Destination, ExitAction, ImageRef, LaunchRoute, PageDescriptor};
pub use router::{LaunchDecision, LaunchIntent, LaunchRouter};
pub use routes::{OnboardingRouteState, onboarding_routes};
pub use state::{Handoff, OnboardingSession};
