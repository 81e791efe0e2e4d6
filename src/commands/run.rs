//! The default command: the whole booking workflow, strictly sequential.
//! Load config, open the browser, log in, attempt every slot, report.

use std::process::ExitCode;
use std::time::Duration;
use tracing::{info, warn};

use crate::browser::{PortalPage, PortalSession, ScopedSession, SessionOptions};
use crate::cli::RunArgs;
use crate::config::{Credentials, MasterKey, Schedule};
use crate::error::Result;
use crate::flow::{self, PortalEndpoints};
use crate::report::RunReport;

pub async fn execute(args: &RunArgs) -> Result<ExitCode> {
    // All config is validated before the browser launches, so a bad file
    // never costs a browser session.
    let credentials = if args.encrypted {
        let key = MasterKey::resolve(args.key_file.as_deref())?;
        Credentials::load_encrypted(&args.credentials, &key)?
    } else {
        Credentials::load(&args.credentials)?
    };
    let schedule = Schedule::load(&args.schedule)?;
    info!(target = "roombook", slots = schedule.slots.len(), "configuration loaded");

    let endpoints = PortalEndpoints::from_base(&args.portal_url);
    let session = PortalSession::open(&SessionOptions {
        webdriver_url: args.webdriver_url.clone(),
        headless: !args.headed,
        element_timeout: Duration::from_millis(args.timeout_ms),
        poll_interval: Duration::from_millis(500),
    })
    .await?;

    let report = run_session(session, &endpoints, &credentials, &schedule).await?;
    report.print_summary();
    Ok(ExitCode::from(report.exit_code()))
}

/// Run the flows and release the session on every exit path: the flow
/// result is captured first and propagated only after the close.
pub async fn run_session<S: ScopedSession>(
    session: S,
    endpoints: &PortalEndpoints,
    credentials: &Credentials,
    schedule: &Schedule,
) -> Result<RunReport> {
    let outcome = run_flows(&session, endpoints, credentials, schedule).await;
    if let Err(err) = session.close().await {
        warn!(target = "roombook", error = %err, "browser session did not shut down cleanly");
    }
    outcome
}

/// Login then the booking loop. Generic over the page driver so the
/// abort-on-auth-failure behavior is testable without a browser.
pub async fn run_flows<P: PortalPage>(
    page: &P,
    endpoints: &PortalEndpoints,
    credentials: &Credentials,
    schedule: &Schedule,
) -> Result<RunReport> {
    flow::login::login(page, endpoints, credentials).await?;
    let reports = flow::reserve::reserve_all(page, endpoints, &schedule.slots).await;
    Ok(RunReport::new(reports))
}
