//! CompletionGate — durable "has the user seen onboarding" flag.
//!
//! Every storage failure collapses to the fail-safe answer: reads say
//! "not complete" (onboarding is shown again) and writes report `false`.

use std::sync::Arc;

use tracing::{debug, warn};

use super::model::preference_keys;
use crate::config::DEFAULT_PREFS_NAMESPACE;
use crate::error::GateError;
use crate::store::PreferenceStore;

/// Persisted onboarding completion flag.
#[derive(Clone)]
pub struct CompletionGate {
    store: Arc<dyn PreferenceStore>,
    namespace: String,
}

impl CompletionGate {
    /// Gate over the default `onboarding_prefs` namespace.
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self::with_namespace(store, DEFAULT_PREFS_NAMESPACE)
    }

    pub fn with_namespace(store: Arc<dyn PreferenceStore>, namespace: impl Into<String>) -> Self {
        Self {
            store,
            namespace: namespace.into(),
        }
    }

    /// Whether onboarding has been completed. `false` when unset or unreadable.
    pub async fn is_complete(&self) -> bool {
        match self.read_flag().await {
            Ok(complete) => complete,
            Err(e) => {
                warn!(namespace = %self.namespace, error = %e, "Failed to read onboarding flag, showing onboarding");
                false
            }
        }
    }

    /// Persist the flag. Returns `true` only once the write is confirmed.
    pub async fn set_complete(&self, complete: bool) -> bool {
        match self
            .store
            .set_preference(
                &self.namespace,
                preference_keys::ONBOARDING_COMPLETE,
                &serde_json::Value::Bool(complete),
            )
            .await
        {
            Ok(()) => {
                debug!(namespace = %self.namespace, complete, "Onboarding flag written");
                true
            }
            Err(e) => {
                warn!(namespace = %self.namespace, complete, error = %e, "Failed to write onboarding flag");
                false
            }
        }
    }

    /// Remove the stored flag so the next read sees the unset state.
    ///
    /// `true` once the store confirms the delete, whether or not a value
    /// was present.
    pub async fn reset(&self) -> bool {
        match self
            .store
            .delete_preference(&self.namespace, preference_keys::ONBOARDING_COMPLETE)
            .await
        {
            Ok(existed) => {
                debug!(namespace = %self.namespace, existed, "Onboarding flag cleared");
                true
            }
            Err(e) => {
                warn!(namespace = %self.namespace, error = %e, "Failed to clear onboarding flag");
                false
            }
        }
    }

    async fn read_flag(&self) -> Result<bool, GateError> {
        let value = self
            .store
            .get_preference(&self.namespace, preference_keys::ONBOARDING_COMPLETE)
            .await?;
        match value {
            None => Ok(false),
            Some(serde_json::Value::Bool(complete)) => Ok(complete),
            Some(other) => Err(GateError::NotBoolean { value: other }),
        }
    }
}
