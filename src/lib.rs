//! Hub onboarding — first-run routing core for the field-service client.

pub mod config;
pub mod error;
pub mod onboarding;
pub mod store;
