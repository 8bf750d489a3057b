//! Vehicle Catalog
//!
//! Read-only reference data for each supported model: parts, service
//! schedule, diagnostic trouble codes and the maintenance log.
//!
//! Lookups by an unknown model id return empty slices rather than errors,
//! so a view can always render something.

mod builtin;
mod types;

pub use types::{
    CarModel, CarPart, DiagnosticCode, DiagramPosition, MaintenanceRecord, ScheduleEntry, Severity,
};

use thiserror::Error;

/// Catalog lookup errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No model with this id
    #[error("Unknown vehicle model: {0}")]
    UnknownModel(String),
}

/// Everything known about one model
#[derive(Debug, Clone)]
pub(crate) struct VehicleEntry {
    pub model: CarModel,
    pub parts: Vec<CarPart>,
    pub schedule: Vec<ScheduleEntry>,
    pub diagnostics: Vec<DiagnosticCode>,
    pub records: Vec<MaintenanceRecord>,
}

/// The vehicle data store
#[derive(Debug, Clone)]
pub struct VehicleCatalog {
    entries: Vec<VehicleEntry>,
}

impl Default for VehicleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl VehicleCatalog {
    /// The two built-in models: Honda Prelude and Jeep CJ5
    pub fn builtin() -> Self {
        Self {
            entries: vec![builtin::prelude(), builtin::cj5()],
        }
    }

    fn entry(&self, model_id: &str) -> Option<&VehicleEntry> {
        self.entries.iter().find(|e| e.model.id == model_id)
    }

    /// All models, in display order
    pub fn models(&self) -> impl Iterator<Item = &CarModel> {
        self.entries.iter().map(|e| &e.model)
    }

    /// Look up a model by id
    pub fn model(&self, model_id: &str) -> Option<&CarModel> {
        self.entry(model_id).map(|e| &e.model)
    }

    /// Look up a model, failing on an unknown id
    pub fn require_model(&self, model_id: &str) -> Result<&CarModel, CatalogError> {
        self.model(model_id)
            .ok_or_else(|| CatalogError::UnknownModel(model_id.to_string()))
    }

    /// Parts of a model
    pub fn parts(&self, model_id: &str) -> &[CarPart] {
        self.entry(model_id).map(|e| e.parts.as_slice()).unwrap_or_default()
    }

    /// Parts whose name or part number contains `term` (case-insensitive)
    ///
    /// An empty term matches every part.
    pub fn search_parts<'a>(&'a self, model_id: &str, term: &str) -> Vec<&'a CarPart> {
        self.parts(model_id)
            .iter()
            .filter(|p| p.matches(term))
            .collect()
    }

    /// Service schedule of a model, ascending by interval
    pub fn schedule(&self, model_id: &str) -> &[ScheduleEntry] {
        self.entry(model_id).map(|e| e.schedule.as_slice()).unwrap_or_default()
    }

    /// Diagnostic trouble codes of a model
    pub fn diagnostics(&self, model_id: &str) -> &[DiagnosticCode] {
        self.entry(model_id).map(|e| e.diagnostics.as_slice()).unwrap_or_default()
    }

    /// Maintenance log of a model
    pub fn records(&self, model_id: &str) -> &[MaintenanceRecord] {
        self.entry(model_id).map(|e| e.records.as_slice()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_range() {
        let catalog = VehicleCatalog::builtin();
        let prelude = catalog.model("prelude").unwrap();
        assert_eq!(prelude.year_range(), Some((1992, 1996)));
        assert!(prelude.built_in(1994));
        assert!(!prelude.built_in(1997));
    }

    #[test]
    fn test_unknown_model_is_empty() {
        let catalog = VehicleCatalog::builtin();
        assert!(catalog.parts("civic").is_empty());
        assert!(catalog.schedule("civic").is_empty());
        assert_eq!(
            catalog.require_model("civic"),
            Err(CatalogError::UnknownModel("civic".to_string()))
        );
    }
}
