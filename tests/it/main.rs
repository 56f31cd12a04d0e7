use footprint::*;

fn abs_difference<T: std::ops::Sub<Output = T> + PartialOrd>(x: T, y: T) -> T {
    if x < y {
        y - x
    } else {
        x - y
    }
}

fn petrol_car() -> VehicleProfile {
    VehicleProfile::new("Car", "Petrol", 1500.0, 15.0, 50000.0, 5)
}

/// Verifies the lifetime estimate of a 5 year old petrol car:
/// 50000 km / 15 km/l * 2.31 kg/l * 1.05
#[test]
fn acceptance_lifetime() {
    let accepted_error = 0.001; // 0.1%

    let profile = petrol_car();
    assert_eq!(profile.age_factor(), 1.05);

    let expected = 8085.5;
    let emissions = estimate_lifetime_emissions(&profile).unwrap().unwrap();
    assert!(abs_difference(emissions, expected) / expected < accepted_error);

    assert_eq!(trees_to_offset(emissions), 371);
    assert!(abs_difference(eco_score(emissions), 9.19) < 0.01);
}

/// Verifies the estimate of a 100 km trip of the same car:
/// 100 km / 15 km/l * 2.31 kg/l * 1.05
#[test]
fn acceptance_trip() {
    let expected = 16.17;
    let emissions = estimate_trip_emissions(&petrol_car(), 100.0, 10.0)
        .unwrap()
        .unwrap();
    assert!(abs_difference(emissions, expected) < 0.01);

    let required = fuel_required(100.0, 15.0).unwrap();
    assert!(is_fuel_sufficient(required, 10.0));
}

#[test]
fn electric_is_rated_zero() {
    for (distance, economy, age) in [(1.0, 1.0, 0), (50000.0, 15.0, 5), (1e7, 0.5, 40)] {
        let profile = VehicleProfile::new("Bus", "Electric", 0.0, economy, distance, age);
        assert_eq!(estimate_lifetime_emissions(&profile), Ok(Some(0.0)));
        assert_eq!(estimate_trip_emissions(&profile, distance, 0.0), Ok(Some(0.0)));
    }
}

#[test]
fn unknown_fuel_is_unrated() {
    for fuel in ["Hydrogen", "", "diesel", "Coal"] {
        let profile = VehicleProfile::new("Car", fuel, 1500.0, 15.0, 50000.0, 5);
        assert_eq!(estimate_lifetime_emissions(&profile), Ok(None));
        assert_eq!(estimate_trip_emissions(&profile, 100.0, 10.0), Ok(None));
        assert_eq!(LifetimeReport::new(&profile), Ok(None));
    }
}

#[test]
fn zero_fuel_economy_is_an_error() {
    let profile = VehicleProfile::new("Car", "Petrol", 1500.0, 0.0, 50000.0, 5);
    let err = estimate_lifetime_emissions(&profile).unwrap_err();
    assert!(err.to_string().starts_with("non-positive fuel economy"));
    assert!(estimate_trip_emissions(&profile, 100.0, 10.0).is_err());
}

#[test]
fn trip_report() {
    let profile = VehicleProfile::new("Truck", "Diesel", 6000.0, 4.0, 0.0, 10);
    let report = TripReport::new(&profile, 300.0, 50.0).unwrap().unwrap();

    assert_eq!(report.fuel_required, 75.0);
    assert_eq!(report.fuel_status, FuelStatus::Insufficient);
    let expected = 75.0 * 2.68 * 1.1;
    assert!(abs_difference(report.emissions_kg, expected) < 1e-9);
}

#[test]
fn lifetime_report_comparison() {
    let report = LifetimeReport::new(&petrol_car()).unwrap().unwrap();
    let comparison = compare(report.emissions_kg);
    let names = comparison.iter().map(|c| c.vehicle).collect::<Vec<_>>();
    assert_eq!(names, vec!["Average Car", "Electric Car", "Hybrid Car"]);
    assert!(comparison.iter().all(|c| c.above));
}
