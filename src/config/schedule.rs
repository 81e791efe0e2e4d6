//! The reservation schedule: an ordered list of day/time-range slots.
//!
//! Validation is fail-fast. A single malformed entry rejects the whole file,
//! because silently skipping it could book the wrong slot.

use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

use super::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// The value the portal's calendar widget uses in its day tabs.
    pub fn portal_value(self) -> &'static str {
        match self {
            Day::Monday => "monday",
            Day::Tuesday => "tuesday",
            Day::Wednesday => "wednesday",
            Day::Thursday => "thursday",
            Day::Friday => "friday",
            Day::Saturday => "saturday",
            Day::Sunday => "sunday",
        }
    }
}

impl FromStr for Day {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monday" | "mon" => Ok(Day::Monday),
            "tuesday" | "tue" => Ok(Day::Tuesday),
            "wednesday" | "wed" => Ok(Day::Wednesday),
            "thursday" | "thu" => Ok(Day::Thursday),
            "friday" | "fri" => Ok(Day::Friday),
            "saturday" | "sat" => Ok(Day::Saturday),
            "sunday" | "sun" => Ok(Day::Sunday),
            other => Err(format!("unknown day `{other}`")),
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        };
        f.write_str(name)
    }
}

/// A time of day in the portal's `HH:MM` wire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
}

impl FromStr for ClockTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || format!("`{s}` is not a valid HH:MM time");

        let (h, m) = s.split_once(':').ok_or_else(bad)?;
        if h.len() != 2 || m.len() != 2 {
            return Err(bad());
        }
        let hour: u8 = h.parse().map_err(|_| bad())?;
        let minute: u8 = m.parse().map_err(|_| bad())?;
        if hour > 23 || minute > 59 {
            return Err(bad());
        }
        Ok(ClockTime { hour, minute })
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[derive(Debug, Clone)]
pub struct ReservationRequest {
    pub day: Day,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
}

/// Wire form of one schedule entry. Field values are validated per entry
/// after the JSON parse so every rejection can name the entry index.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawSlot {
    day: String,
    start_time: String,
    end_time: String,
}

#[derive(Debug, Clone)]
pub struct Schedule {
    pub slots: Vec<ReservationRequest>,
}

impl Schedule {
    /// Load and validate `reservationTime.json`. Slot order is preserved;
    /// the portal is asked for the slots in exactly this order.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let raw_slots: Vec<RawSlot> =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })?;

        if raw_slots.is_empty() {
            return Err(ConfigError::EmptySchedule);
        }
        let mut slots = Vec::with_capacity(raw_slots.len());
        for (index, entry) in raw_slots.into_iter().enumerate() {
            let invalid = |reason: String| ConfigError::InvalidSlot { index, reason };

            let day: Day = entry.day.parse().map_err(invalid)?;
            let start_time: ClockTime = entry.start_time.parse().map_err(invalid)?;
            let end_time: ClockTime = entry.end_time.parse().map_err(invalid)?;
            if start_time >= end_time {
                return Err(invalid(format!(
                    "start time {start_time} is not before end time {end_time}"
                )));
            }
            slots.push(ReservationRequest {
                day,
                start_time,
                end_time,
            });
        }

        debug!(target = "roombook", slots = slots.len(), "schedule loaded");
        Ok(Schedule { slots })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parses_full_and_abbreviated_day_names() {
        assert_eq!("Thursday".parse::<Day>().unwrap(), Day::Thursday);
        assert_eq!("thu".parse::<Day>().unwrap(), Day::Thursday);
        assert_eq!("MONDAY".parse::<Day>().unwrap(), Day::Monday);
        assert!("someday".parse::<Day>().is_err());
    }

    #[test]
    fn clock_time_parse_is_strict() {
        assert_eq!(
            "18:00".parse::<ClockTime>().unwrap(),
            ClockTime { hour: 18, minute: 0 }
        );
        assert!("8:00".parse::<ClockTime>().is_err());
        assert!("18:5".parse::<ClockTime>().is_err());
        assert!("24:00".parse::<ClockTime>().is_err());
        assert!("18:60".parse::<ClockTime>().is_err());
        assert!("1800".parse::<ClockTime>().is_err());
    }

    #[test]
    fn clock_times_order_chronologically() {
        let early = ClockTime { hour: 9, minute: 30 };
        let late = ClockTime { hour: 18, minute: 0 };
        assert!(early < late);
        assert!(ClockTime { hour: 9, minute: 0 } < early);
    }

    #[test]
    fn loads_ordered_slots() {
        let file = write_temp(
            r#"[
                {"day":"Thursday","startTime":"18:00","endTime":"20:00"},
                {"day":"Fri","startTime":"08:00","endTime":"10:00"}
            ]"#,
        );
        let schedule = Schedule::load(file.path()).unwrap();
        assert_eq!(schedule.slots.len(), 2);
        assert_eq!(schedule.slots[0].day, Day::Thursday);
        assert_eq!(schedule.slots[1].day, Day::Friday);
    }

    #[test]
    fn start_at_or_after_end_rejects_whole_load() {
        let file = write_temp(
            r#"[
                {"day":"Monday","startTime":"08:00","endTime":"10:00"},
                {"day":"Tuesday","startTime":"20:00","endTime":"18:00"}
            ]"#,
        );
        match Schedule::load(file.path()) {
            Err(ConfigError::InvalidSlot { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected InvalidSlot, got {other:?}"),
        }
    }

    #[test]
    fn equal_start_and_end_is_invalid() {
        let file = write_temp(r#"[{"day":"Monday","startTime":"10:00","endTime":"10:00"}]"#);
        assert!(matches!(
            Schedule::load(file.path()),
            Err(ConfigError::InvalidSlot { .. })
        ));
    }

    #[test]
    fn empty_schedule_is_rejected() {
        let file = write_temp("[]");
        assert!(matches!(
            Schedule::load(file.path()),
            Err(ConfigError::EmptySchedule)
        ));
    }

    #[test]
    fn bad_day_name_names_the_entry_index() {
        let file = write_temp(
            r#"[
                {"day":"Monday","startTime":"08:00","endTime":"10:00"},
                {"day":"Someday","startTime":"08:00","endTime":"10:00"}
            ]"#,
        );
        match Schedule::load(file.path()) {
            Err(ConfigError::InvalidSlot { index, reason }) => {
                assert_eq!(index, 1);
                assert!(reason.contains("Someday"));
            }
            other => panic!("expected InvalidSlot, got {other:?}"),
        }
    }

    #[test]
    fn malformed_time_names_the_entry_index() {
        let file = write_temp(r#"[{"day":"Monday","startTime":"8am","endTime":"10:00"}]"#);
        match Schedule::load(file.path()) {
            Err(ConfigError::InvalidSlot { index, reason }) => {
                assert_eq!(index, 0);
                assert!(reason.contains("8am"));
            }
            other => panic!("expected InvalidSlot, got {other:?}"),
        }
    }

    #[test]
    fn unknown_entry_field_is_rejected() {
        let file = write_temp(
            r#"[{"day":"Monday","startTime":"08:00","endTime":"10:00","room":"B12"}]"#,
        );
        assert!(matches!(
            Schedule::load(file.path()),
            Err(ConfigError::Json { .. })
        ));
    }
}
