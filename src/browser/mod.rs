mod driver;
mod session;

pub use driver::{DriverError, DriverResult, Locator, PortalPage, ScopedSession};
pub use session::{PortalSession, SessionOptions};
