use serde::Serialize;

use crate::emissions::{checked_fuel_economy, DomainError};

/// kg of CO2 absorbed by one tree in one year
pub static TREE_ABSORPTION_KG_PER_YEAR: f64 = 21.77;

/// Returns the number of trees needed for one year to absorb `mass_kg` of CO2, rounded down.
pub fn trees_to_offset(mass_kg: f64) -> u64 {
    (mass_kg / TREE_ABSORPTION_KG_PER_YEAR).floor() as u64
}

/// Returns the eco score of a vehicle emitting `mass_kg` of CO2. Higher is better.
/// The score is at least 1 and has no upper bound: `mass_kg` close to zero yields ~10.
pub fn eco_score(mass_kg: f64) -> f64 {
    (10.0 - mass_kg / 10000.0).max(1.0)
}

/// Returns the liters of fuel needed to drive `distance` km
/// # Error
/// Errors when the fuel economy is not strictly positive
pub fn fuel_required(distance: f64, fuel_economy: f64) -> Result<f64, DomainError> {
    Ok(distance / checked_fuel_economy(fuel_economy)?)
}

/// Whether `fuel_available` liters cover `fuel_required` liters
pub fn is_fuel_sufficient(fuel_required: f64, fuel_available: f64) -> bool {
    fuel_required <= fuel_available
}

/// Whether the fuel available covers a trip
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuelStatus {
    Sufficient,
    Insufficient,
}

impl FuelStatus {
    pub fn new(fuel_required: f64, fuel_available: f64) -> Self {
        if is_fuel_sufficient(fuel_required, fuel_available) {
            Self::Sufficient
        } else {
            Self::Insufficient
        }
    }
}
