use std::str::FromStr;

use serde::Serialize;

/// A fuel type for which an emission factor is known
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FuelType {
    Petrol,
    Diesel,
    CNG,
    Electric,
    Hybrid,
}

static FUEL_TYPES: [FuelType; 5] = [
    FuelType::Petrol,
    FuelType::Diesel,
    FuelType::CNG,
    FuelType::Electric,
    FuelType::Hybrid,
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("fuel type \"{0}\" has no emission factor")]
pub struct UnknownFuelType(pub String);

impl FuelType {
    /// All fuel types, in the order of the emission factor table
    pub fn all() -> impl Iterator<Item = FuelType> {
        FUEL_TYPES.iter().copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            FuelType::Petrol => "Petrol",
            FuelType::Diesel => "Diesel",
            FuelType::CNG => "CNG",
            FuelType::Electric => "Electric",
            FuelType::Hybrid => "Hybrid",
        }
    }

    /// Returns the emission factor in kg CO2 per liter of fuel-equivalent consumed.
    /// Electric is an exact zero, i.e. it is rated, not missing.
    pub fn emission_factor(&self) -> f64 {
        match self {
            FuelType::Petrol => 2.31,
            FuelType::Diesel => 2.68,
            FuelType::CNG => 2.75,
            FuelType::Electric => 0.0,
            FuelType::Hybrid => 1.5,
        }
    }
}

impl std::fmt::Display for FuelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FuelType {
    type Err = UnknownFuelType;

    /// Parses the exact labels of the table (`Petrol`, `CNG`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .find(|fuel| fuel.name() == s)
            .ok_or_else(|| UnknownFuelType(s.to_string()))
    }
}

/// Returns the emission factor of a fuel label, or `None` when the label is not
/// one of the fuel types of the table.
pub fn emission_factor(fuel_type: &str) -> Option<f64> {
    fuel_type
        .parse::<FuelType>()
        .ok()
        .map(|fuel| fuel.emission_factor())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn table() {
        assert_eq!(emission_factor("Petrol"), Some(2.31));
        assert_eq!(emission_factor("Diesel"), Some(2.68));
        assert_eq!(emission_factor("CNG"), Some(2.75));
        assert_eq!(emission_factor("Electric"), Some(0.0));
        assert_eq!(emission_factor("Hybrid"), Some(1.5));
    }

    #[test]
    fn unknown() {
        assert_eq!(emission_factor("Hydrogen"), None);
        // labels are case sensitive
        assert_eq!(emission_factor("petrol"), None);
        assert_eq!(
            "LPG".parse::<FuelType>(),
            Err(UnknownFuelType("LPG".to_string()))
        );
    }

    #[test]
    fn parses_every_name() {
        for fuel in FuelType::all() {
            assert_eq!(fuel.to_string().parse::<FuelType>(), Ok(fuel));
        }
        assert_eq!(FuelType::all().count(), 5);
    }
}
