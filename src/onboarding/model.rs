//! Onboarding data models: page descriptors, exit actions and routes.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, DescriptorField};

/// Opaque reference to a bundled image asset.
///
/// The core never interprets it; the UI layer resolves it to pixels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the empty reference.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Content of a single onboarding screen.
///
/// Only obtainable through [`PageDescriptor::new`], so every value in
/// existence has a non-empty image and non-blank title and subtitle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageDescriptor {
    image: ImageRef,
    title: String,
    subtitle: String,
}

impl PageDescriptor {
    /// Build a descriptor, rejecting the first invalid field in the order
    /// image, title, subtitle.
    pub fn new(
        image: ImageRef,
        title: impl Into<String>,
        subtitle: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        let title = title.into();
        let subtitle = subtitle.into();

        if image.is_empty() {
            return Err(CatalogError::InvalidArgument {
                field: DescriptorField::Image,
                reason: "must be a non-empty asset reference",
            });
        }
        if title.trim().is_empty() {
            return Err(CatalogError::InvalidArgument {
                field: DescriptorField::Title,
                reason: "must not be empty or blank",
            });
        }
        if subtitle.trim().is_empty() {
            return Err(CatalogError::InvalidArgument {
                field: DescriptorField::Subtitle,
                reason: "must not be empty or blank",
            });
        }

        Ok(Self {
            image,
            title,
            subtitle,
        })
    }

    pub fn image(&self) -> &ImageRef {
        &self.image
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }
}

/// Screen the entry point should present after a cold start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchRoute {
    ShowOnboarding,
    ShowMain,
}

impl std::fmt::Display for LaunchRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::ShowOnboarding => "show_onboarding",
            Self::ShowMain => "show_main",
        };
        write!(f, "{s}")
    }
}

/// The two buttons that dismiss onboarding from any page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitAction {
    /// "Get Started": new users go to registration.
    GetStarted,
    /// "I'm already a member": returning users go to login.
    AlreadyMember,
}

impl ExitAction {
    pub fn destination(&self) -> Destination {
        match self {
            Self::GetStarted => Destination::Registration,
            Self::AlreadyMember => Destination::Login,
        }
    }
}

impl std::fmt::Display for ExitAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::GetStarted => "get_started",
            Self::AlreadyMember => "already_member",
        };
        write!(f, "{s}")
    }
}

/// Main-flow screen reached when onboarding is dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    Registration,
    Login,
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Registration => "registration",
            Self::Login => "login",
        };
        write!(f, "{s}")
    }
}

/// Preference keys used for onboarding persistence.
pub mod preference_keys {
    /// Key for the completion flag inside the onboarding namespace.
    pub const ONBOARDING_COMPLETE: &str = "onboarding_complete";
}
