//! The seam between the booking flows and the live browser.
//!
//! Selector strings resolved against a live DOM have no compile-time safety,
//! so the flows only ever speak through [`PortalPage`]: a handful of typed
//! verbs that a test can implement with a scripted fake instead of a browser.

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

pub type DriverResult<T> = std::result::Result<T, DriverError>;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("failed to start browser session: {0}")]
    SessionLaunch(String),

    #[error("navigation to {url} failed: {source}")]
    Navigation {
        url: String,
        #[source]
        source: anyhow::Error,
    },

    /// The element never appeared within the bounded wait. During the
    /// reservation loop this usually means the portal's markup changed.
    #[error("element not found: {locator} (waited {waited_ms}ms)")]
    ElementWait { locator: String, waited_ms: u64 },

    #[error(transparent)]
    WebDriver(#[from] thirtyfour::error::WebDriverError),
}

/// How to find an element on a portal page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    Id(String),
    Css(String),
}

impl Locator {
    pub fn id(value: impl Into<String>) -> Self {
        Locator::Id(value.into())
    }

    pub fn css(value: impl Into<String>) -> Self {
        Locator::Css(value.into())
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Id(value) => write!(f, "#{value}"),
            Locator::Css(value) => write!(f, "css={value}"),
        }
    }
}

/// The verbs the booking flows need from a live portal page.
#[async_trait]
pub trait PortalPage {
    type Element: Send + Sync;

    async fn navigate(&self, url: &str) -> DriverResult<()>;

    async fn current_url(&self) -> DriverResult<String>;

    /// Wait for the element to appear, up to the session's element timeout.
    async fn wait_for(&self, locator: &Locator) -> DriverResult<Self::Element>;

    /// Immediate presence probe, no waiting.
    async fn is_present(&self, locator: &Locator) -> DriverResult<bool>;

    async fn click(&self, element: &Self::Element) -> DriverResult<()>;

    /// Clear the field and type `text` into it.
    async fn fill(&self, element: &Self::Element, text: &str) -> DriverResult<()>;

    /// Pick an option from a `<select>` by its value attribute.
    async fn select_option(&self, element: &Self::Element, value: &str) -> DriverResult<()>;
}

/// A page driver that also owns the underlying browser session. Consuming
/// `self` makes a double close unrepresentable; the run orchestration is
/// responsible for calling it on every exit path.
#[async_trait]
pub trait ScopedSession: PortalPage + Sized {
    async fn close(self) -> DriverResult<()>;
}
