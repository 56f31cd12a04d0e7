//! Estimates the CO2 emitted by a vehicle over its lifetime and over a single trip.
//!
//! ```
//! use footprint::*;
//!
//! let car = VehicleProfile::new("Car", "Petrol", 1500.0, 15.0, 50000.0, 5);
//! let kg = estimate_lifetime_emissions(&car).unwrap().unwrap();
//! assert_eq!(trees_to_offset(kg), 371);
//! ```
#![forbid(unsafe_code)]
pub mod csv;
mod emissions;
mod fuel;
mod metrics;
mod reference;
mod report;
mod vehicle;

pub use emissions::*;
pub use fuel::*;
pub use metrics::*;
pub use reference::*;
pub use report::*;
pub use vehicle::*;
