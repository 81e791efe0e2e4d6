//! Selectors for the portal's DOM.
//!
//! This is the other half of the external contract: the reservation system's
//! markup. When a flow starts failing with element-wait errors, inspect the
//! portal pages and update these first.

use crate::browser::Locator;
use crate::config::Day;

pub fn username_field() -> Locator {
    Locator::id("username")
}

pub fn password_field() -> Locator {
    Locator::id("password")
}

pub fn submit_button() -> Locator {
    Locator::css("button[type='submit']")
}

/// Post-login marker; only rendered once the portal accepts the session.
pub fn booking_menu() -> Locator {
    Locator::id("booking-menu")
}

pub fn day_tab(day: Day) -> Locator {
    Locator::css(format!("[data-day='{}']", day.portal_value()))
}

pub fn start_time_select() -> Locator {
    Locator::id("startTime")
}

pub fn end_time_select() -> Locator {
    Locator::id("endTime")
}

pub fn reserve_button() -> Locator {
    Locator::id("reserveButton")
}

pub fn confirmation_banner() -> Locator {
    Locator::css(".reservation-confirmed")
}

/// Shown instead of the confirmation when the slot is already taken.
pub fn conflict_banner() -> Locator {
    Locator::css(".slot-unavailable")
}
