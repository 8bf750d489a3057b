//! Maintenance-Due Evaluation
//!
//! Decides whether a service reminder should be shown for the current
//! odometer reading. Each schedule interval repeats forever (3,000, 6,000,
//! 9,000, ...); the next service of an interval is the first multiple at or
//! above the current mileage.
//!
//! Intervals are checked smallest first and the first one that is due soon
//! or overdue wins. A remaining distance of exactly zero counts as overdue,
//! which means a reading of 0 (or any exact multiple of an interval)
//! reports that interval as overdue.

use serde::Serialize;
use std::fmt;

use crate::catalog::ScheduleEntry;

/// Remaining distance at or under which a service is "due soon"
pub const DEFAULT_DUE_SOON_WINDOW: i64 = 500;

/// A schedule row with its distance parsed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaintenanceInterval {
    /// Distance between services, always > 0
    pub distance: i64,
    /// Work performed at each service
    pub tasks: Vec<String>,
}

impl MaintenanceInterval {
    /// Parse a stored schedule row
    ///
    /// Returns `None` when the interval text holds no digits or only zeros
    /// ("As needed", "0 miles").
    pub fn from_entry(entry: &ScheduleEntry) -> Option<Self> {
        let distance = parse_interval_distance(&entry.interval)?;
        Some(Self {
            distance,
            tasks: entry.tasks.clone(),
        })
    }
}

/// Digits of an interval string, everything else dropped: "12,000 miles" -> 12000
pub fn parse_interval_distance(text: &str) -> Option<i64> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    digits.parse::<i64>().ok().filter(|&d| d > 0)
}

/// Odometer text to whole miles, 0 when absent or unparsable
///
/// Reads an optional sign and the leading run of digits, so "102800.7"
/// becomes 102800 and "12k" becomes 12.
pub fn parse_mileage(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    match rest[..end].parse::<i64>() {
        Ok(v) if negative => -v,
        Ok(v) => v,
        Err(_) => 0,
    }
}

/// Result of checking the schedule against the odometer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MaintenanceStatus {
    /// Nothing due within the window
    None,
    /// Next service is `remaining` miles away, inside the window
    DueSoon {
        /// Miles until the service point
        remaining: i64,
        /// Work due at that point
        tasks: Vec<String>,
    },
    /// Next service point reached or passed
    Overdue {
        /// Work that is overdue
        tasks: Vec<String>,
    },
}

impl MaintenanceStatus {
    /// Notification text, `None` when nothing is due
    pub fn message(&self) -> Option<String> {
        match self {
            MaintenanceStatus::None => None,
            MaintenanceStatus::DueSoon { remaining, tasks } => Some(format!(
                "Maintenance due in {remaining} miles: {}",
                tasks.join(", ")
            )),
            MaintenanceStatus::Overdue { tasks } => {
                Some(format!("OVERDUE maintenance: {}", tasks.join(", ")))
            }
        }
    }

    /// Whether a reminder should be shown
    pub fn is_due(&self) -> bool {
        !matches!(self, MaintenanceStatus::None)
    }
}

impl fmt::Display for MaintenanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(msg) => f.write_str(&msg),
            None => f.write_str("No maintenance due"),
        }
    }
}

/// Schedule checker with a configurable "due soon" window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueEvaluator {
    window: i64,
}

impl Default for DueEvaluator {
    fn default() -> Self {
        Self {
            window: DEFAULT_DUE_SOON_WINDOW,
        }
    }
}

impl DueEvaluator {
    /// Evaluator using a custom window
    pub fn with_window(window: i64) -> Self {
        Self { window }
    }

    /// The "due soon" window in miles
    pub fn window(&self) -> i64 {
        self.window
    }

    /// Check a stored schedule against the current mileage
    ///
    /// Rows whose interval has no usable distance are skipped.
    pub fn evaluate(&self, current: i64, schedule: &[ScheduleEntry]) -> MaintenanceStatus {
        let intervals: Vec<MaintenanceInterval> = schedule
            .iter()
            .filter_map(MaintenanceInterval::from_entry)
            .collect();
        self.evaluate_intervals(current, &intervals)
    }

    /// Check already-parsed intervals against the current mileage
    pub fn evaluate_intervals(
        &self,
        current: i64,
        intervals: &[MaintenanceInterval],
    ) -> MaintenanceStatus {
        for interval in intervals.iter().filter(|i| i.distance > 0) {
            let remaining = next_service(current, interval.distance) - current;

            if remaining > 0 && remaining <= self.window {
                tracing::debug!(
                    interval = interval.distance,
                    remaining,
                    "maintenance due soon"
                );
                return MaintenanceStatus::DueSoon {
                    remaining,
                    tasks: interval.tasks.clone(),
                };
            }
            if remaining <= 0 {
                tracing::debug!(interval = interval.distance, current, "maintenance overdue");
                return MaintenanceStatus::Overdue {
                    tasks: interval.tasks.clone(),
                };
            }
        }
        MaintenanceStatus::None
    }
}

/// ceil(current / interval) * interval, for interval > 0
fn next_service(current: i64, interval: i64) -> i64 {
    // Integer division truncates toward zero, which is already the ceiling
    // for negative readings
    let mut quotient = current / interval;
    if current % interval > 0 {
        quotient += 1;
    }
    quotient.saturating_mul(interval)
}
