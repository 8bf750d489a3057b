//! Built-in reference data for the supported models

use chrono::NaiveDate;

use super::types::*;
use super::VehicleEntry;

fn model(id: &str, name: &str, year: &str, kind: &str) -> CarModel {
    CarModel {
        id: id.to_string(),
        name: name.to_string(),
        year: year.to_string(),
        kind: kind.to_string(),
    }
}

fn part(
    id: &str,
    name: &str,
    (x, y): (u8, u8),
    description: &str,
    part_number: &str,
    maintenance_interval: &str,
    price: &str,
) -> CarPart {
    CarPart {
        id: id.to_string(),
        name: name.to_string(),
        position: DiagramPosition { x, y },
        description: description.to_string(),
        part_number: part_number.to_string(),
        maintenance_interval: maintenance_interval.to_string(),
        price: price.to_string(),
    }
}

fn service(interval: &str, tasks: &[&str]) -> ScheduleEntry {
    ScheduleEntry {
        interval: interval.to_string(),
        tasks: tasks.iter().map(|t| t.to_string()).collect(),
    }
}

fn code(code: &str, description: &str, severity: Severity, solution: &str) -> DiagnosticCode {
    DiagnosticCode {
        code: code.to_string(),
        description: description.to_string(),
        severity,
        solution: solution.to_string(),
    }
}

fn record(
    id: &str,
    (y, m, d): (i32, u32, u32),
    mileage: &str,
    service: &str,
    cost: &str,
    notes: &str,
) -> MaintenanceRecord {
    MaintenanceRecord {
        id: id.to_string(),
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        mileage: mileage.to_string(),
        service: service.to_string(),
        cost: cost.to_string(),
        notes: notes.to_string(),
    }
}

pub(super) fn prelude() -> VehicleEntry {
    VehicleEntry {
        model: model("prelude", "Honda Prelude", "1992-1996", "Sport Coupe"),
        parts: vec![
            part("engine", "H22A1 Engine", (50, 35), "2.2L VTEC Engine", "H22A1-001", "3,000 miles", "$2,500"),
            part("transmission", "Manual Transmission", (45, 55), "5-Speed Manual", "MT-H22-001", "30,000 miles", "$800"),
            part("brakes-front", "Front Brake System", (30, 25), "Disc Brake Assembly", "FB-PRE-001", "12,000 miles", "$150"),
            part("brakes-rear", "Rear Brake System", (30, 75), "Disc Brake Assembly", "RB-PRE-001", "12,000 miles", "$120"),
            part("suspension-front", "Front Suspension", (25, 30), "MacPherson Strut", "FS-PRE-001", "60,000 miles", "$300"),
            part("suspension-rear", "Rear Suspension", (25, 70), "Double Wishbone", "RS-PRE-001", "60,000 miles", "$350"),
            part("ecu", "Engine Control Unit", (60, 40), "OBD1 ECU", "ECU-H22-001", "As needed", "$400"),
            part("alternator", "Alternator", (55, 30), "90A Alternator", "ALT-PRE-001", "100,000 miles", "$180"),
        ],
        schedule: vec![
            service("3,000 miles", &["Engine oil change", "Oil filter replacement", "Check fluid levels"]),
            service("6,000 miles", &["Tire rotation", "Check brake pads", "Inspect belts"]),
            service("12,000 miles", &["Brake inspection", "Replace air filter", "Check spark plugs"]),
            service("30,000 miles", &["Transmission service", "Coolant flush", "Replace timing belt"]),
            service("60,000 miles", &["Major service", "Replace suspension components", "Valve adjustment"]),
        ],
        diagnostics: vec![
            code("P0301", "Cylinder 1 Misfire", Severity::High, "Check spark plug, ignition coil, or fuel injector"),
            code("P0420", "Catalyst System Efficiency", Severity::Medium, "Replace catalytic converter or oxygen sensor"),
            code("P0505", "Idle Air Control", Severity::Low, "Clean or replace IAC valve"),
            code("P1259", "VTEC System Malfunction", Severity::High, "Check VTEC solenoid and oil pressure"),
        ],
        records: vec![
            record("1", (2024, 1, 15), "145,230", "Oil Change & Filter", "$45", "Used 5W-30 synthetic"),
            record("2", (2024, 2, 20), "147,890", "Brake Pad Replacement", "$180", "Front pads only"),
            record("3", (2024, 3, 10), "149,120", "Timing Belt Service", "$650", "Replaced belt, tensioner, water pump"),
        ],
    }
}

pub(super) fn cj5() -> VehicleEntry {
    VehicleEntry {
        model: model("cj5", "Jeep CJ5", "1972-1983", "Off-Road Vehicle"),
        parts: vec![
            part("engine", "AMC 304 V8", (50, 40), "5.0L V8 Engine", "AMC304-001", "3,000 miles", "$3,200"),
            part("transmission", "3-Speed Manual", (45, 60), "T-150 Manual", "T150-001", "30,000 miles", "$600"),
            part("transfer-case", "Transfer Case", (40, 65), "Dana 20", "D20-001", "30,000 miles", "$400"),
            part("axle-front", "Front Axle", (20, 30), "Dana 30 Front", "D30F-001", "50,000 miles", "$800"),
            part("axle-rear", "Rear Axle", (20, 70), "Dana 44 Rear", "D44R-001", "50,000 miles", "$900"),
            part("rollbar", "Roll Bar", (50, 20), "Factory Roll Bar", "RB-CJ5-001", "Inspect Annually", "$250"),
            part("carburetor", "Carburetor", (55, 35), "2-Barrel Carburetor", "CARB-304-001", "12,000 miles", "$320"),
            part("distributor", "Distributor", (45, 35), "Points Distributor", "DIST-304-001", "6,000 miles", "$150"),
        ],
        schedule: vec![
            service("3,000 miles", &["Engine oil change", "Oil filter replacement", "Grease all fittings"]),
            service("6,000 miles", &["Tire rotation", "Check brake shoes", "Inspect u-joints"]),
            service("12,000 miles", &["Brake adjustment", "Replace air filter", "Check points and plugs"]),
            service("30,000 miles", &["Transmission/Transfer case service", "Differential service", "Replace carburetor filter"]),
            service("50,000 miles", &["Major service", "Rebuild carburetor", "Inspect frame for rust"]),
        ],
        diagnostics: vec![
            code("E001", "Carburetor Float Stuck", Severity::Medium, "Clean carburetor float chamber"),
            code("E002", "Points Gap Incorrect", Severity::High, "Adjust points gap to 0.016\""),
            code("E003", "Timing Off", Severity::High, "Set timing to 5° BTDC"),
            code("E004", "Choke Not Operating", Severity::Low, "Check choke cable and linkage"),
        ],
        records: vec![
            record("1", (2024, 1, 8), "89,450", "Carburetor Rebuild", "$280", "Complete rebuild with new gaskets"),
            record("2", (2024, 2, 12), "90,120", "U-Joint Replacement", "$95", "Rear driveshaft u-joints"),
            record("3", (2024, 3, 5), "91,200", "Differential Service", "$120", "Front and rear diff oil change"),
        ],
    }
}
