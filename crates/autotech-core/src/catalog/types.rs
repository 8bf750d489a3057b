//! Catalog record types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A supported vehicle model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarModel {
    /// Lookup key (e.g. "prelude")
    pub id: String,
    /// Display name
    pub name: String,
    /// Production years, "1992-1996"
    pub year: String,
    /// Body / usage class
    #[serde(rename = "type")]
    pub kind: String,
}

impl CarModel {
    /// Production year range parsed from `year`
    ///
    /// Accepts "1992-1996" or a single year.
    pub fn year_range(&self) -> Option<(u16, u16)> {
        let mut bounds = self.year.split('-').map(|s| s.trim().parse::<u16>());
        let start = bounds.next()?.ok()?;
        let end = match bounds.next() {
            Some(end) => end.ok()?,
            None => start,
        };
        Some((start, end))
    }

    /// Whether `year` falls inside the production range
    pub fn built_in(&self, year: u16) -> bool {
        self.year_range()
            .is_some_and(|(start, end)| (start..=end).contains(&year))
    }
}

/// Where a part sits on the vehicle diagram, in percent of width/height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramPosition {
    /// Horizontal offset from the left edge
    pub x: u8,
    /// Vertical offset from the top edge
    pub y: u8,
}

/// A serviceable part
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarPart {
    /// Lookup key, unique within a model
    pub id: String,
    /// Display name
    pub name: String,
    /// Hotspot on the vehicle diagram
    pub position: DiagramPosition,
    /// One-line description
    pub description: String,
    /// OEM or aftermarket part number
    pub part_number: String,
    /// Free text, "3,000 miles" or "As needed"
    pub maintenance_interval: String,
    /// Display price, "$45"
    pub price: String,
}

impl CarPart {
    /// Case-insensitive match on name or part number
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term) || self.part_number.to_lowercase().contains(&term)
    }
}

/// One row of a model's service schedule, as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Distance with unit suffix, "12,000 miles"
    pub interval: String,
    /// Work due at this interval
    pub tasks: Vec<String>,
}

/// Trouble code severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Can wait for the next service
    Low,
    /// Fix soon
    Medium,
    /// Stop driving
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
        })
    }
}

/// Diagnostic trouble code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticCode {
    /// OBD code, "P0300"
    pub code: String,
    /// What the code means
    pub description: String,
    /// How urgent the repair is
    pub severity: Severity,
    /// Suggested fix
    pub solution: String,
}

/// A past service from the maintenance log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    /// Log entry id
    pub id: String,
    /// Service date
    pub date: NaiveDate,
    /// Odometer text as logged, "145,230"
    pub mileage: String,
    /// Work performed
    pub service: String,
    /// Amount paid, as logged
    pub cost: String,
    /// Free-form remarks
    pub notes: String,
}
