//! # AutoTech Core Library
//!
//! Core functionality for the AutoTech automotive reference terminal.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//!
//! This library provides:
//! - Derived-metric calculators (compression ratio, fuel efficiency,
//!   cost per distance, tire geometry, oil-change interval)
//! - Maintenance-due evaluation against a model's service schedule
//! - Built-in vehicle catalog (models, parts, schedules, trouble codes, logs)
//! - Self-expiring notification banner
//! - VIN decoding against the NHTSA vPIC API
//!
//! ## Supported Vehicles
//!
//! - Honda Prelude (1992-1996)
//! - Jeep CJ5 (1972-1983)
//!
//! ## Example
//!
//! ```rust
//! use autotech_core::calc::{CompressionInputs, FuelInputs};
//! use autotech_core::catalog::VehicleCatalog;
//! use autotech_core::maintenance::{DueEvaluator, MaintenanceStatus};
//!
//! let ratio = CompressionInputs::new("2.2", "87", "90", "50").evaluate();
//! assert_eq!(ratio, "11.7:1");
//!
//! let fuel = FuelInputs::new("300", "10").evaluate();
//! assert_eq!(fuel.efficiency.as_deref(), Some("30.00"));
//!
//! let catalog = VehicleCatalog::builtin();
//! let status = DueEvaluator::default().evaluate(2_800, catalog.schedule("prelude"));
//! assert!(matches!(status, MaintenanceStatus::DueSoon { remaining: 200, .. }));
//! ```

pub mod calc;
pub mod catalog;
pub mod config;
pub mod maintenance;
pub mod notification;
pub mod session;
pub mod unit_conversion;
pub mod vin;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::calc::{
        CalcError, CalcResult, CompressionInputs, CostInputs, FuelInputs, OilChangeInputs,
        TireInputs,
    };
    pub use crate::catalog::{CarModel, CarPart, DiagnosticCode, ScheduleEntry, VehicleCatalog};
    pub use crate::config::Settings;
    pub use crate::maintenance::{DueEvaluator, MaintenanceInterval, MaintenanceStatus};
    pub use crate::notification::NotificationCenter;
    pub use crate::session::GarageSession;
    pub use crate::vin::{VinDecode, VinDecoder, VinError};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
