//! LoggedOut to LoggedIn, or a fatal `AuthError`.

use tracing::{debug, info};

use super::{selectors, PortalEndpoints};
use crate::browser::{DriverError, PortalPage};
use crate::config::Credentials;
use crate::error::{BookError, Result};

/// Submit credentials into the portal's login form and verify the portal
/// accepted them. A rejection aborts the whole run: resubmitting the same
/// bad credentials cannot succeed, so there is no retry.
pub async fn login<P: PortalPage>(
    page: &P,
    endpoints: &PortalEndpoints,
    credentials: &Credentials,
) -> Result<()> {
    info!(target = "roombook", user = %credentials.username, "logging in");
    page.navigate(&endpoints.login_url).await?;

    let username = page.wait_for(&selectors::username_field()).await?;
    page.fill(&username, &credentials.username).await?;
    let password = page.wait_for(&selectors::password_field()).await?;
    page.fill(&password, &credentials.password).await?;

    let submit = page.wait_for(&selectors::submit_button()).await?;
    page.click(&submit).await?;
    debug!(target = "roombook", "login submitted, waiting for booking menu");

    match page.wait_for(&selectors::booking_menu()).await {
        Ok(_) => {
            info!(target = "roombook", "login accepted");
            Ok(())
        }
        Err(DriverError::ElementWait { .. }) => {
            let still_on_login = page
                .current_url()
                .await
                .map(|url| url.starts_with(&endpoints.login_url))
                .unwrap_or(true);
            let reason = if still_on_login {
                "portal did not leave the login page; check username and password"
            } else {
                "post-login booking menu never appeared"
            };
            Err(BookError::Auth(reason.to_string()))
        }
        Err(e) => Err(e.into()),
    }
}
