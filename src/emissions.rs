use crate::VehicleProfile;

/// Errors when the inputs of an estimate are numerically invalid
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("non-positive fuel economy ({0} km/l)")]
    NonPositiveFuelEconomy(f64),
}

/// Returns `fuel_economy` if it can be divided by, i.e. it is strictly positive.
pub(crate) fn checked_fuel_economy(fuel_economy: f64) -> Result<f64, DomainError> {
    // also rejects NaN
    if fuel_economy > 0.0 {
        Ok(fuel_economy)
    } else {
        Err(DomainError::NonPositiveFuelEconomy(fuel_economy))
    }
}

/// Emissions in kg CO2 of driving `distance` km with the profile's vehicle.
/// Assumes that the fuel type is ratable.
fn co2_kg(profile: &VehicleProfile, factor: f64, distance: f64) -> Result<f64, DomainError> {
    let fuel_economy = checked_fuel_economy(profile.fuel_economy())?;
    Ok(distance / fuel_economy * factor * profile.age_factor())
}

/// Returns the CO2 emitted in kg by the vehicle over its lifetime, computed as
/// `distance_traveled / fuel_economy * emission_factor * age_factor`.
///
/// Returns `Ok(None)` (unrated) when the fuel type has no emission factor. An
/// unrated vehicle is not a vehicle without emissions.
///
/// The profile is not validated: the result is non-negative and finite only when
/// `distance_traveled` is non-negative and finite. A negative distance yields a
/// negative mass, and an infinite distance with a zero emission factor yields `NaN`.
/// # Error
/// Errors when the fuel economy is not strictly positive
pub fn estimate_lifetime_emissions(profile: &VehicleProfile) -> Result<Option<f64>, DomainError> {
    let Some(factor) = profile.emission_factor() else {
        log::debug!("fuel type \"{}\" is unrated", profile.fuel_type());
        return Ok(None);
    };
    co2_kg(profile, factor, profile.distance_traveled()).map(Some)
}

/// Returns the CO2 emitted in kg by the vehicle when driving `distance_to_travel` km.
/// The vehicle's age penalty applies as for [`estimate_lifetime_emissions`].
///
/// `fuel_available` (in liters) is not used in the estimate; see [`crate::is_fuel_sufficient`].
///
/// Returns `Ok(None)` (unrated) when the fuel type has no emission factor or when
/// `distance_to_travel` is not strictly positive. An infinite distance with a zero
/// emission factor yields `NaN`.
/// # Error
/// Errors when the fuel economy is not strictly positive
pub fn estimate_trip_emissions(
    profile: &VehicleProfile,
    distance_to_travel: f64,
    _fuel_available: f64,
) -> Result<Option<f64>, DomainError> {
    let factor = match profile.emission_factor() {
        Some(factor) if distance_to_travel > 0.0 => factor,
        _ => {
            log::debug!(
                "trip of {distance_to_travel} km with fuel type \"{}\" is unrated",
                profile.fuel_type()
            );
            return Ok(None);
        }
    };
    co2_kg(profile, factor, distance_to_travel).map(Some)
}
