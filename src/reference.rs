use serde::Serialize;

/// Kinds of vehicles commonly estimated. Any other label is accepted by [`crate::VehicleProfile`].
pub static VEHICLE_TYPES: [&str; 4] = ["Car", "Bus", "Bike", "Truck"];

/// Lifetime emissions of a reference vehicle, used to put an estimate in perspective
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct ReferenceVehicle {
    pub name: &'static str,
    /// lifetime emissions in kg CO2
    pub emissions_kg: f64,
}

static REFERENCE_VEHICLES: [ReferenceVehicle; 3] = [
    ReferenceVehicle {
        name: "Average Car",
        emissions_kg: 7700.0,
    },
    ReferenceVehicle {
        name: "Electric Car",
        emissions_kg: 0.0,
    },
    ReferenceVehicle {
        name: "Hybrid Car",
        emissions_kg: 4500.0,
    },
];

/// Returns the reference vehicles
pub fn reference_vehicles() -> &'static [ReferenceVehicle] {
    &REFERENCE_VEHICLES
}

/// An estimate compared against a [`ReferenceVehicle`]
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Comparison {
    pub vehicle: &'static str,
    pub emissions_kg: f64,
    /// estimate minus the reference, in kg CO2
    pub difference_kg: f64,
    pub above: bool,
}

/// Compares `emissions_kg` against every reference vehicle
pub fn compare(emissions_kg: f64) -> Vec<Comparison> {
    reference_vehicles()
        .iter()
        .map(|reference| Comparison {
            vehicle: reference.name,
            emissions_kg: reference.emissions_kg,
            difference_kg: emissions_kg - reference.emissions_kg,
            above: emissions_kg > reference.emissions_kg,
        })
        .collect()
}

/// Advice to reduce the emissions of a trip
pub static TIPS: [&str; 5] = [
    "Maintain steady speed and avoid rapid acceleration",
    "Keep your vehicle well-maintained",
    "Remove unnecessary weight from your vehicle",
    "Use air conditioning sparingly",
    "Consider carpooling or public transport for regular trips",
];
