//! Human-readable run summary and exit-code mapping.

use colored::Colorize;

use crate::flow::reserve::{SlotOutcome, SlotReport};

#[derive(Debug)]
pub struct RunReport {
    reports: Vec<SlotReport>,
}

impl RunReport {
    pub fn new(reports: Vec<SlotReport>) -> Self {
        RunReport { reports }
    }

    pub fn reports(&self) -> &[SlotReport] {
        &self.reports
    }

    pub fn booked_count(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| r.outcome == SlotOutcome::Booked)
            .count()
    }

    pub fn all_booked(&self) -> bool {
        self.booked_count() == self.reports.len()
    }

    /// 0 when every slot was booked, 2 when at least one was not.
    /// Fatal errors (config, auth, session) exit 1 through the error path
    /// in main, so the three cases stay distinguishable.
    pub fn exit_code(&self) -> u8 {
        if self.all_booked() { 0 } else { 2 }
    }

    pub fn print_summary(&self) {
        println!("{}", "Reservation summary".bold());
        for report in &self.reports {
            let slot = format!(
                "{} {}-{}",
                report.slot.day, report.slot.start_time, report.slot.end_time
            );
            let line = match &report.outcome {
                SlotOutcome::Booked => format!("  {} {slot}: {}", "ok".green(), "reserved".green()),
                SlotOutcome::Unavailable => {
                    format!("  {} {slot}: {}", "--".yellow(), "slot unavailable".yellow())
                }
                SlotOutcome::UiError(reason) => {
                    format!("  {} {slot}: {}", "!!".red(), reason.red())
                }
            };
            println!("{line}");
        }
        println!(
            "{} of {} slot(s) reserved",
            self.booked_count(),
            self.reports.len()
        );
    }
}
