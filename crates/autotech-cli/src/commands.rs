//! Subcommand implementations
//!
//! Every command renders to a `String` so output can be checked without a
//! terminal. `--json` switches each command to the serialized core types.

use std::fmt::Write as _;

use anyhow::{Context as _, Result};
use serde::Serialize;
use serde_json::json;

use autotech_core::calc::{CompressionInputs, CostInputs, FuelInputs, OilChangeInputs, TireInputs};
use autotech_core::catalog::VehicleCatalog;
use autotech_core::config::Settings;
use autotech_core::notification::NotificationCenter;
use autotech_core::session::GarageSession;

/// Shared state for one CLI invocation
pub struct Terminal {
    settings: Settings,
    catalog: VehicleCatalog,
    json: bool,
}

impl Terminal {
    pub fn new(settings: Settings, json: bool) -> Self {
        Self {
            settings,
            catalog: VehicleCatalog::builtin(),
            json,
        }
    }

    fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
        serde_json::to_string_pretty(value).context("Failed to serialize output")
    }

    fn model_id<'a>(&'a self, model: Option<&'a str>) -> Result<&'a str> {
        let id = model.unwrap_or(&self.settings.default_model);
        self.catalog.require_model(id)?;
        Ok(id)
    }

    fn session(&self, model: Option<&str>, mileage: &str) -> Result<GarageSession> {
        let id = self.model_id(model)?;
        let mut session =
            GarageSession::new(self.catalog.clone(), self.settings.due_evaluator(), id)?;
        session.set_current_mileage(mileage);
        Ok(session)
    }

    pub fn compression(
        &self,
        displacement: &str,
        bore: &str,
        stroke: &str,
        chamber: &str,
    ) -> Result<String> {
        let inputs = CompressionInputs::new(displacement, bore, stroke, chamber);
        let ratio = inputs.evaluate();
        if self.json {
            return Self::to_json(&json!({
                "ratio": ratio,
                "valid": inputs.compute().is_ok(),
            }));
        }
        Ok(format!("Ratio: {ratio}"))
    }

    pub fn fuel(&self, distance: &str, fuel_used: &str) -> Result<String> {
        let est = FuelInputs::new(distance, fuel_used).evaluate();
        if self.json {
            return Self::to_json(&est);
        }
        let mut out = String::new();
        if let Some(mpg) = est.efficiency.as_deref() {
            writeln!(out, "MPG: {mpg}")?;
        }
        if let Some(l) = est.consumption.as_deref() {
            writeln!(out, "L/100km: {l}")?;
        }
        Ok(out.trim_end().to_string())
    }

    pub fn cost(&self, total: &str, distance: &str) -> Result<String> {
        let est = CostInputs::new(total, distance).evaluate();
        if self.json {
            return Self::to_json(&est);
        }
        let mut out = String::new();
        if let Some(per_mile) = est.per_mile.as_deref() {
            writeln!(out, "Cost per mile: ${per_mile}")?;
        }
        if let Some(per_km) = est.per_km.as_deref() {
            writeln!(out, "Cost per km: ${per_km}")?;
        }
        Ok(out.trim_end().to_string())
    }

    pub fn tire(&self, width: &str, aspect: &str, wheel: &str) -> Result<String> {
        let est = TireInputs::new(width, aspect, wheel).evaluate();
        if self.json {
            return Self::to_json(&est);
        }
        let mut out = String::new();
        if let Some(d) = est.overall_diameter.as_deref() {
            writeln!(out, "Overall Diameter: {d} in")?;
        }
        if let Some(c) = est.circumference.as_deref() {
            writeln!(out, "Circumference: {c} in")?;
        }
        Ok(out.trim_end().to_string())
    }

    pub fn oil(&self, last: &str, current: &str, interval: &str) -> Result<String> {
        let est = OilChangeInputs::new(last, current, interval).evaluate();
        if self.json {
            return Self::to_json(&est);
        }
        let mut out = String::new();
        if let Some(next) = est.next_due.as_deref() {
            writeln!(out, "Next oil change at: {next} mi")?;
        }
        if let Some(countdown) = &est.countdown {
            writeln!(out, "{countdown}")?;
        }
        Ok(out.trim_end().to_string())
    }

    pub fn due(&self, model: Option<&str>, mileage: &str) -> Result<String> {
        let status = self.session(model, mileage)?.status();
        if self.json {
            return Self::to_json(&status);
        }
        Ok(status.to_string())
    }

    /// Raise the reminder banner and block until it expires
    pub async fn watch(&self, model: Option<&str>, mileage: &str) -> Result<()> {
        let status = self.session(model, mileage)?.status();
        let mut center = NotificationCenter::new(self.settings.notification_timeout());
        let mut banner = center.subscribe();

        if center.publish_status(&status).is_none() {
            println!("{status}");
            return Ok(());
        }

        loop {
            // Release the borrow before awaiting; the expiry task needs to write
            let current = banner.borrow_and_update().clone();
            let Some(notification) = current else {
                break;
            };
            println!("[!] {}", notification.message);
            banner
                .changed()
                .await
                .context("Notification center closed unexpectedly")?;
        }
        println!("[ notification cleared ]");
        Ok(())
    }

    pub fn models(&self) -> Result<String> {
        let models: Vec<_> = self.catalog.models().collect();
        if self.json {
            return Self::to_json(&models);
        }
        let mut out = String::new();
        for m in models {
            writeln!(out, "{:<10} {} ({}) - {}", m.id, m.name, m.year, m.kind)?;
        }
        Ok(out.trim_end().to_string())
    }

    pub fn parts(&self, model: Option<&str>, search: &str) -> Result<String> {
        let id = self.model_id(model)?;
        let parts = self.catalog.search_parts(id, search);
        if self.json {
            return Self::to_json(&parts);
        }
        if parts.is_empty() {
            return Ok(format!("No parts match '{search}'"));
        }
        let mut out = String::new();
        for p in parts {
            writeln!(
                out,
                "{:<14} {:<22} {:<18} {}",
                p.part_number, p.name, p.maintenance_interval, p.price
            )?;
        }
        Ok(out.trim_end().to_string())
    }

    pub fn schedule(&self, model: Option<&str>) -> Result<String> {
        let schedule = self.catalog.schedule(self.model_id(model)?);
        if self.json {
            return Self::to_json(schedule);
        }
        let mut out = String::new();
        for entry in schedule {
            writeln!(out, "{:<14} {}", entry.interval, entry.tasks.join(", "))?;
        }
        Ok(out.trim_end().to_string())
    }

    pub fn codes(&self, model: Option<&str>) -> Result<String> {
        let codes = self.catalog.diagnostics(self.model_id(model)?);
        if self.json {
            return Self::to_json(codes);
        }
        let mut out = String::new();
        for c in codes {
            writeln!(
                out,
                "{} [{}] {}: {}",
                c.code, c.severity, c.description, c.solution
            )?;
        }
        Ok(out.trim_end().to_string())
    }

    pub fn records(&self, model: Option<&str>) -> Result<String> {
        let records = self.catalog.records(self.model_id(model)?);
        if self.json {
            return Self::to_json(records);
        }
        let mut out = String::new();
        for r in records {
            writeln!(
                out,
                "{}  {:>8} mi  {:<24} {:>6}  {}",
                r.date.format("%Y-%m-%d"),
                r.mileage,
                r.service,
                r.cost,
                r.notes
            )?;
        }
        Ok(out.trim_end().to_string())
    }

    pub async fn vin(&self, vin: &str) -> Result<String> {
        let decoder = self.settings.vin_decoder();
        let decoded = match decoder.decode(vin).await {
            Ok(decoded) => decoded,
            Err(e) => {
                tracing::warn!(error = %e, "VIN decode failed");
                let message = e.user_message();
                return Err(anyhow::Error::new(e).context(message));
            }
        };

        if self.json {
            return Self::to_json(&json!({
                "summary": decoded.summary_message(&self.catalog),
                "matched_model": decoded.match_catalog(&self.catalog).map(|m| &m.id),
                "fields": decoded.display_fields(),
            }));
        }

        let mut out = String::new();
        writeln!(out, "{}", decoded.summary_message(&self.catalog))?;
        writeln!(out, "VIN Details:")?;
        for field in decoded.display_fields() {
            writeln!(
                out,
                "  {}: {}",
                field.variable,
                field.value.as_deref().unwrap_or_default()
            )?;
        }
        Ok(out.trim_end().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn terminal() -> Terminal {
        Terminal::new(Settings::default(), false)
    }

    #[test]
    fn test_calculator_output() {
        let t = terminal();
        assert_eq!(t.compression("2.2", "87", "90", "50").unwrap(), "Ratio: 11.7:1");
        assert_eq!(t.compression("", "87", "90", "50").unwrap(), "Ratio: Enter all values");
        assert_eq!(t.fuel("300", "10").unwrap(), "MPG: 30.00\nL/100km: 3.33");
        assert_eq!(t.cost("45", "300").unwrap(), "Cost per mile: $0.15\nCost per km: $0.09");
        assert_eq!(
            t.tire("225", "45", "17").unwrap(),
            "Overall Diameter: 24.97 in\nCircumference: 78.45 in"
        );
        assert_eq!(
            t.oil("100000", "103500", "3000").unwrap(),
            "Next oil change at: 103000 mi\nOVERDUE!"
        );
    }

    #[test]
    fn test_absent_results_print_nothing() {
        let t = terminal();
        assert_eq!(t.fuel("", "").unwrap(), "");
        assert_eq!(t.cost("45", "0").unwrap(), "");
    }

    #[test]
    fn test_due_uses_default_model() {
        let t = terminal();
        assert_eq!(
            t.due(None, "2800").unwrap(),
            "Maintenance due in 200 miles: Engine oil change, Oil filter replacement, Check fluid levels"
        );
        assert_eq!(t.due(Some("cj5"), "1000").unwrap(), "No maintenance due");
        assert!(t.due(Some("civic"), "1000").is_err());
    }

    #[test]
    fn test_json_output() {
        let t = Terminal::new(Settings::default(), true);
        let out: serde_json::Value = serde_json::from_str(&t.fuel("300", "0").unwrap()).unwrap();
        assert_eq!(out["efficiency"]["state"], "absent");
        assert_eq!(out["consumption"]["value"], "0.00");

        let out: serde_json::Value = serde_json::from_str(&t.due(None, "0").unwrap()).unwrap();
        assert_eq!(out["status"], "overdue");
    }

    #[test]
    fn test_parts_search() {
        let t = terminal();
        let out = t.parts(Some("cj5"), "axle").unwrap();
        assert_eq!(out.lines().count(), 2);
        assert!(out.contains("D30F-001"));
        assert_eq!(t.parts(Some("cj5"), "turbo").unwrap(), "No parts match 'turbo'");
    }

    #[test]
    fn test_catalog_listings() {
        let t = terminal();
        assert_eq!(t.models().unwrap().lines().count(), 2);
        assert!(t.schedule(Some("prelude")).unwrap().starts_with("3,000 miles"));
        assert!(t.codes(Some("prelude")).unwrap().contains("P1259 [HIGH]"));
        assert!(t.records(Some("cj5")).unwrap().starts_with("2024-01-08"));
    }
}
