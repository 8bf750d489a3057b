//! Garage Session
//!
//! The selected vehicle and the odometer field. Changing either re-runs the
//! due evaluator; the status is always derived, never stored.

use crate::catalog::{CarModel, CatalogError, VehicleCatalog};
use crate::maintenance::{parse_mileage, DueEvaluator, MaintenanceStatus};

/// Selected model plus current-mileage text
#[derive(Debug, Clone)]
pub struct GarageSession {
    catalog: VehicleCatalog,
    evaluator: DueEvaluator,
    selected_model: String,
    current_mileage: String,
}

impl GarageSession {
    /// Start a session on `model_id` with an empty odometer field
    pub fn new(
        catalog: VehicleCatalog,
        evaluator: DueEvaluator,
        model_id: &str,
    ) -> Result<Self, CatalogError> {
        catalog.require_model(model_id)?;
        Ok(Self {
            catalog,
            evaluator,
            selected_model: model_id.to_string(),
            current_mileage: String::new(),
        })
    }

    /// The catalog backing this session
    pub fn catalog(&self) -> &VehicleCatalog {
        &self.catalog
    }

    /// Id of the selected model
    pub fn selected_model_id(&self) -> &str {
        &self.selected_model
    }

    /// The selected model
    pub fn selected_model(&self) -> Result<&CarModel, CatalogError> {
        self.catalog.require_model(&self.selected_model)
    }

    /// Raw odometer text
    pub fn current_mileage(&self) -> &str {
        &self.current_mileage
    }

    /// Switch vehicles and re-evaluate
    ///
    /// An unknown id leaves the selection unchanged.
    pub fn select_model(&mut self, model_id: &str) -> Result<MaintenanceStatus, CatalogError> {
        self.catalog.require_model(model_id)?;
        tracing::debug!(model = model_id, "vehicle selected");
        self.selected_model = model_id.to_string();
        Ok(self.status())
    }

    /// Update the odometer text and re-evaluate
    pub fn set_current_mileage(&mut self, text: &str) -> MaintenanceStatus {
        self.current_mileage = text.to_string();
        self.status()
    }

    /// Maintenance status for the current selection and mileage
    pub fn status(&self) -> MaintenanceStatus {
        let current = parse_mileage(&self.current_mileage);
        self.evaluator
            .evaluate(current, self.catalog.schedule(&self.selected_model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> GarageSession {
        GarageSession::new(VehicleCatalog::builtin(), DueEvaluator::default(), "prelude")
            .unwrap()
    }

    #[test]
    fn test_unknown_model_keeps_selection() {
        let mut s = session();
        assert!(s.select_model("civic").is_err());
        assert_eq!(s.selected_model_id(), "prelude");
    }

    #[test]
    fn test_empty_mileage_counts_as_zero() {
        let s = session();
        assert!(matches!(s.status(), MaintenanceStatus::Overdue { .. }));
    }
}
