//! The fixed, ordered set of onboarding pages.

use serde::Serialize;

use super::model::{ImageRef, PageDescriptor};
use crate::error::CatalogError;

/// Number of onboarding pages. A product requirement, not a setting.
pub const PAGE_COUNT: usize = 3;

/// Content of the standard pages in display order: (image, title, subtitle).
const STANDARD_PAGES: [(&str, &str, &str); PAGE_COUNT] = [
    (
        "onboarding/pic1",
        "Stay Cool, Stay Comfortable",
        "Reliable aircon service for home and office",
    ),
    (
        "onboarding/pic2",
        "We've Got You Covered!",
        "From cleaning, repairs, to installations, our team does it all",
    ),
    (
        "onboarding/pic3",
        "Let's Get Started",
        "Schedule your appointment in just a few taps",
    ),
];

/// Immutable catalog of exactly [`PAGE_COUNT`] pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageCatalog {
    pages: [PageDescriptor; PAGE_COUNT],
}

impl PageCatalog {
    pub fn new(pages: [PageDescriptor; PAGE_COUNT]) -> Self {
        Self { pages }
    }

    /// Build the product catalog.
    ///
    /// An error here means the constant table is broken and the host should
    /// refuse to start.
    pub fn standard() -> Result<Self, CatalogError> {
        let [s0, s1, s2] = STANDARD_PAGES;
        let build = |(image, title, subtitle): (&str, &str, &str)| {
            PageDescriptor::new(ImageRef::new(image), title, subtitle)
        };
        Ok(Self::new([build(s0)?, build(s1)?, build(s2)?]))
    }

    /// Always [`PAGE_COUNT`].
    pub fn count(&self) -> usize {
        self.pages.len()
    }

    /// Page at `position`, or `OutOfRange` outside `[0, PAGE_COUNT)`.
    pub fn get(&self, position: i64) -> Result<&PageDescriptor, CatalogError> {
        usize::try_from(position)
            .ok()
            .and_then(|index| self.pages.get(index))
            .ok_or(CatalogError::OutOfRange {
                position,
                count: PAGE_COUNT,
            })
    }

    pub fn pages(&self) -> &[PageDescriptor; PAGE_COUNT] {
        &self.pages
    }

    pub fn iter(&self) -> impl Iterator<Item = &PageDescriptor> {
        self.pages.iter()
    }
}
