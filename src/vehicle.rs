use serde::{Deserialize, Serialize};

use crate::{fuel::emission_factor, FuelType};

/// Yearly increase of emissions due to ageing, relative to a new vehicle
static AGE_PENALTY_PER_YEAR: f64 = 0.01;

/// Returns the multiplier applied to the emissions of a vehicle of `vehicle_age` years.
/// It is `1.0` for a new vehicle and grows linearly with age.
pub fn age_factor(vehicle_age: u32) -> f64 {
    1.0 + vehicle_age as f64 * AGE_PENALTY_PER_YEAR
}

/// The static profile of a vehicle.
///
/// `vehicle_type` and `engine_size` are descriptive only: they are kept so that
/// they can be displayed next to an estimate, but take no part in any calculation.
/// The fuel type is free-form; whether it can be rated is only decided
/// when an estimate is requested.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(from = "ProfileFields")]
pub struct VehicleProfile {
    vehicle_type: String,
    fuel_type: String,
    /// in cc
    engine_size: f64,
    /// in km per liter-equivalent
    fuel_economy: f64,
    /// lifetime distance in km
    distance_traveled: f64,
    /// in years
    vehicle_age: u32,
    age_factor: f64,
}

/// The inputs of a [`VehicleProfile`]; the age factor is always derived from them.
#[derive(Deserialize)]
struct ProfileFields {
    vehicle_type: String,
    fuel_type: String,
    engine_size: f64,
    fuel_economy: f64,
    distance_traveled: f64,
    vehicle_age: u32,
}

impl From<ProfileFields> for VehicleProfile {
    fn from(fields: ProfileFields) -> Self {
        Self::new(
            fields.vehicle_type,
            fields.fuel_type,
            fields.engine_size,
            fields.fuel_economy,
            fields.distance_traveled,
            fields.vehicle_age,
        )
    }
}

impl VehicleProfile {
    pub fn new(
        vehicle_type: impl Into<String>,
        fuel_type: impl Into<String>,
        engine_size: f64,
        fuel_economy: f64,
        distance_traveled: f64,
        vehicle_age: u32,
    ) -> Self {
        Self {
            vehicle_type: vehicle_type.into(),
            fuel_type: fuel_type.into(),
            engine_size,
            fuel_economy,
            distance_traveled,
            vehicle_age,
            age_factor: age_factor(vehicle_age),
        }
    }

    pub fn vehicle_type(&self) -> &str {
        &self.vehicle_type
    }

    pub fn fuel_type(&self) -> &str {
        &self.fuel_type
    }

    /// The fuel type, if it is one of [`FuelType`]
    pub fn fuel(&self) -> Option<FuelType> {
        self.fuel_type.parse().ok()
    }

    pub fn engine_size(&self) -> f64 {
        self.engine_size
    }

    pub fn fuel_economy(&self) -> f64 {
        self.fuel_economy
    }

    pub fn distance_traveled(&self) -> f64 {
        self.distance_traveled
    }

    pub fn vehicle_age(&self) -> u32 {
        self.vehicle_age
    }

    pub fn age_factor(&self) -> f64 {
        self.age_factor
    }

    /// The emission factor of this vehicle's fuel, `None` when it is unratable
    pub fn emission_factor(&self) -> Option<f64> {
        emission_factor(&self.fuel_type)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn age_factor_new_vehicle() {
        assert_eq!(age_factor(0), 1.0);
    }

    #[test]
    fn age_factor_increases() {
        let factors = (0..50).map(age_factor).collect::<Vec<_>>();
        assert!(factors.windows(2).all(|w| w[0] < w[1]));
        assert!((age_factor(5) - 1.05).abs() < 1e-12);
    }

    #[test]
    fn deserialized_age_factor_is_derived() {
        let profile: VehicleProfile = serde_json::from_str(
            r#"{"vehicle_type":"Car","fuel_type":"Petrol","engine_size":1500.0,"fuel_economy":15.0,"distance_traveled":50000.0,"vehicle_age":0,"age_factor":3.0}"#,
        )
        .unwrap();
        assert_eq!(profile.age_factor(), age_factor(0));
        assert_eq!(
            profile,
            VehicleProfile::new("Car", "Petrol", 1500.0, 15.0, 50000.0, 0)
        );
    }

    #[test]
    fn profile_serializes_age_factor() {
        let profile = VehicleProfile::new("Car", "CNG", 1200.0, 20.0, 1000.0, 10);
        let json = serde_json::to_string(&profile).unwrap();
        let back: VehicleProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }

    #[test]
    fn profile_is_inert_on_unused_fields() {
        let profile = VehicleProfile::new("Truck", "Hydrogen", -1.0, 15.0, 100.0, 3);
        assert_eq!(profile.vehicle_type(), "Truck");
        assert_eq!(profile.engine_size(), -1.0);
        assert_eq!(profile.fuel(), None);
        assert_eq!(profile.emission_factor(), None);
        assert!((profile.age_factor() - 1.03).abs() < 1e-12);
    }
}
