use serde::Serialize;

use crate::{
    eco_score, estimate_lifetime_emissions, estimate_trip_emissions, fuel_required,
    trees_to_offset, DomainError, FuelStatus, VehicleProfile,
};

/// The lifetime estimate of a vehicle together with its derived metrics.
/// Flat, so that it can be written as a CSV row.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LifetimeReport {
    pub vehicle_type: String,
    pub fuel_type: String,
    pub engine_size: f64,
    pub fuel_economy: f64,
    pub distance_km: f64,
    pub vehicle_age: u32,
    pub age_factor: f64,
    pub emissions_kg: f64,
    pub trees_to_offset: u64,
    pub eco_score: f64,
}

impl LifetimeReport {
    /// Returns the report of `profile`, `None` if its fuel type is unrated.
    /// # Error
    /// Errors when the fuel economy is not strictly positive
    pub fn new(profile: &VehicleProfile) -> Result<Option<Self>, DomainError> {
        let Some(emissions_kg) = estimate_lifetime_emissions(profile)? else {
            return Ok(None);
        };
        Ok(Some(Self {
            vehicle_type: profile.vehicle_type().to_string(),
            fuel_type: profile.fuel_type().to_string(),
            engine_size: profile.engine_size(),
            fuel_economy: profile.fuel_economy(),
            distance_km: profile.distance_traveled(),
            vehicle_age: profile.vehicle_age(),
            age_factor: profile.age_factor(),
            emissions_kg,
            trees_to_offset: trees_to_offset(emissions_kg),
            eco_score: eco_score(emissions_kg),
        }))
    }
}

/// The estimate of a single trip together with whether the fuel available covers it
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TripReport {
    pub vehicle_type: String,
    pub fuel_type: String,
    pub engine_size: f64,
    pub fuel_economy: f64,
    pub vehicle_age: u32,
    pub age_factor: f64,
    pub distance_km: f64,
    /// in liters
    pub fuel_available: f64,
    pub emissions_kg: f64,
    /// in liters
    pub fuel_required: f64,
    pub fuel_status: FuelStatus,
}

impl TripReport {
    /// Returns the report of driving `distance_to_travel` km with `profile`,
    /// `None` if the trip is unrated.
    /// # Error
    /// Errors when the fuel economy is not strictly positive
    pub fn new(
        profile: &VehicleProfile,
        distance_to_travel: f64,
        fuel_available: f64,
    ) -> Result<Option<Self>, DomainError> {
        let Some(emissions_kg) =
            estimate_trip_emissions(profile, distance_to_travel, fuel_available)?
        else {
            return Ok(None);
        };
        let fuel_required = fuel_required(distance_to_travel, profile.fuel_economy())?;
        Ok(Some(Self {
            vehicle_type: profile.vehicle_type().to_string(),
            fuel_type: profile.fuel_type().to_string(),
            engine_size: profile.engine_size(),
            fuel_economy: profile.fuel_economy(),
            vehicle_age: profile.vehicle_age(),
            age_factor: profile.age_factor(),
            distance_km: distance_to_travel,
            fuel_available,
            emissions_kg,
            fuel_required,
            fuel_status: FuelStatus::new(fuel_required, fuel_available),
        }))
    }
}
