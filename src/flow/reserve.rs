//! The booking loop: one attempt per configured slot, in file order.
//!
//! Slot attempts are independent. A conflict or a broken page on one slot is
//! recorded and the loop moves on; availability may genuinely differ between
//! slots, so aborting (or blindly retrying) would be misleading.

use std::fmt;
use tracing::{info, warn};

use super::{selectors, PortalEndpoints};
use crate::browser::{DriverError, DriverResult, PortalPage};
use crate::config::ReservationRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotOutcome {
    Booked,
    /// The portal reported the slot as already taken.
    Unavailable,
    /// An expected page element never appeared or the driver failed mid-slot.
    UiError(String),
}

impl fmt::Display for SlotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotOutcome::Booked => f.write_str("reserved"),
            SlotOutcome::Unavailable => f.write_str("slot unavailable"),
            SlotOutcome::UiError(reason) => write!(f, "ui error: {reason}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SlotReport {
    pub slot: ReservationRequest,
    pub outcome: SlotOutcome,
}

/// Attempt every slot, in order, and return one report per slot.
pub async fn reserve_all<P: PortalPage>(
    page: &P,
    endpoints: &PortalEndpoints,
    slots: &[ReservationRequest],
) -> Vec<SlotReport> {
    let mut reports = Vec::with_capacity(slots.len());
    for slot in slots {
        info!(
            target = "roombook",
            day = %slot.day,
            start = %slot.start_time,
            end = %slot.end_time,
            "attempting reservation"
        );
        let outcome = match reserve_one(page, endpoints, slot).await {
            Ok(outcome) => outcome,
            Err(e) => SlotOutcome::UiError(e.to_string()),
        };
        if outcome != SlotOutcome::Booked {
            warn!(target = "roombook", day = %slot.day, outcome = %outcome, "slot not booked");
        }
        reports.push(SlotReport {
            slot: slot.clone(),
            outcome,
        });
    }
    reports
}

async fn reserve_one<P: PortalPage>(
    page: &P,
    endpoints: &PortalEndpoints,
    slot: &ReservationRequest,
) -> DriverResult<SlotOutcome> {
    page.navigate(&endpoints.booking_url).await?;

    let day_tab = page.wait_for(&selectors::day_tab(slot.day)).await?;
    page.click(&day_tab).await?;

    let start = page.wait_for(&selectors::start_time_select()).await?;
    page.select_option(&start, &slot.start_time.to_string()).await?;
    let end = page.wait_for(&selectors::end_time_select()).await?;
    page.select_option(&end, &slot.end_time.to_string()).await?;

    let submit = page.wait_for(&selectors::reserve_button()).await?;
    page.click(&submit).await?;

    match page.wait_for(&selectors::confirmation_banner()).await {
        Ok(_) => Ok(SlotOutcome::Booked),
        Err(DriverError::ElementWait { .. }) => {
            if page
                .is_present(&selectors::conflict_banner())
                .await
                .unwrap_or(false)
            {
                Ok(SlotOutcome::Unavailable)
            } else {
                Ok(SlotOutcome::UiError(
                    "neither confirmation nor conflict banner appeared".into(),
                ))
            }
        }
        Err(e) => Err(e),
    }
}
