use std::{error::Error, io::Write};

use clap::Parser;
use num_format::{Locale, ToFormattedString};
use serde::Serialize;
use simple_logger::SimpleLogger;

use footprint::*;

static TEMPLATE_NAME: &'static str = "t";

const ABOUT: &'static str = r#"Estimates the CO2 emitted by a vehicle over its lifetime or over its next trip.
The result is written to stdout, or to `--output` when provided, as markdown, CSV or JSON.
"#;

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
enum Format {
    Markdown,
    Csv,
    Json,
}

#[derive(clap::Args, Debug)]
struct Vehicle {
    /// The kind of vehicle (e.g. Car, Bus, Bike, Truck). Only used for display
    #[arg(long, default_value = "Car")]
    vehicle_type: String,
    /// One of Petrol, Diesel, CNG, Electric, Hybrid
    #[arg(long, default_value = "Petrol")]
    fuel_type: String,
    /// Engine size in cc. Only used for display
    #[arg(long, default_value_t = 1500.0)]
    engine_size: f64,
    /// Fuel economy in km/l
    #[arg(long, default_value_t = 15.0)]
    fuel_economy: f64,
    /// Age of the vehicle in years
    #[arg(long, default_value_t = 5)]
    age: u32,
}

impl Vehicle {
    fn profile(&self, distance_traveled: f64) -> VehicleProfile {
        if !VEHICLE_TYPES.contains(&self.vehicle_type.as_str()) {
            log::warn!(
                "Vehicle type \"{}\" is not one of {:?}",
                self.vehicle_type,
                VEHICLE_TYPES
            );
        }
        VehicleProfile::new(
            self.vehicle_type.clone(),
            self.fuel_type.clone(),
            self.engine_size,
            self.fuel_economy,
            distance_traveled,
            self.age,
        )
    }
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Emissions over the lifetime of the vehicle
    Lifetime {
        #[command(flatten)]
        vehicle: Vehicle,
        /// Total distance traveled in km
        #[arg(long, default_value_t = 50000.0)]
        distance: f64,
    },
    /// Emissions of the next trip of the vehicle
    Trip {
        #[command(flatten)]
        vehicle: Vehicle,
        /// Distance to travel in km
        #[arg(long, default_value_t = 100.0)]
        distance: f64,
        /// Fuel available in liters
        #[arg(long, default_value_t = 10.0)]
        fuel_available: f64,
    },
    /// The emission factor of every fuel type
    Factors,
}

#[derive(Parser, Debug)]
#[command(author, version, about = ABOUT)]
struct Cli {
    #[arg(long, value_enum, default_value_t = Format::Markdown, global = true)]
    format: Format,
    /// Path to write the result to. Defaults to stdout
    #[arg(short, long, global = true)]
    output: Option<String>,
    #[command(subcommand)]
    command: Command,
}

/// Formats a number with thousands separators and two decimals
fn format_number(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    format!(
        "{sign}{}.{:02}",
        (cents / 100).to_formatted_string(&Locale::en),
        cents % 100
    )
}

fn render(template: &str, context: &impl Serialize) -> Result<Vec<u8>, Box<dyn Error>> {
    let mut tt = tinytemplate::TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_template(TEMPLATE_NAME, template)?;
    Ok(tt.render(TEMPLATE_NAME, context)?.into_bytes())
}

fn unrated(vehicle: &Vehicle) -> Box<dyn Error> {
    let fuels = FuelType::all()
        .map(|fuel| fuel.name())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "No estimate available for fuel type \"{}\" (expected one of {fuels}) or for a non-positive trip distance",
        vehicle.fuel_type
    )
    .into()
}

fn domain(error: DomainError) -> Box<dyn Error> {
    format!("Cannot estimate emissions: {error}").into()
}

#[derive(Serialize)]
struct ComparisonContext {
    vehicle: &'static str,
    emissions_kg: String,
    difference_kg: String,
}

#[derive(Serialize)]
struct LifetimeContext {
    vehicle_type: String,
    fuel_type: String,
    engine_size: String,
    fuel_economy: String,
    distance_km: String,
    vehicle_age: u32,
    age_factor: String,
    emissions_kg: String,
    trees_to_offset: String,
    eco_score: String,
    comparisons: Vec<ComparisonContext>,
}

#[derive(Serialize)]
struct LifetimeJson<'a> {
    #[serde(flatten)]
    report: &'a LifetimeReport,
    comparisons: Vec<Comparison>,
}

fn lifetime(report: &LifetimeReport, format: Format) -> Result<Vec<u8>, Box<dyn Error>> {
    let comparisons = compare(report.emissions_kg);
    match format {
        Format::Csv => footprint::csv::serialize(std::iter::once(report)),
        Format::Json => Ok(serde_json::to_vec_pretty(&LifetimeJson {
            report,
            comparisons,
        })?),
        Format::Markdown => {
            let context = LifetimeContext {
                vehicle_type: report.vehicle_type.clone(),
                fuel_type: report.fuel_type.clone(),
                engine_size: format!("{}", report.engine_size),
                fuel_economy: format!("{}", report.fuel_economy),
                distance_km: format_number(report.distance_km),
                vehicle_age: report.vehicle_age,
                age_factor: format!("{:.2}", report.age_factor),
                emissions_kg: format_number(report.emissions_kg),
                trees_to_offset: report.trees_to_offset.to_formatted_string(&Locale::en),
                eco_score: format!("{:.1}", report.eco_score),
                comparisons: comparisons
                    .into_iter()
                    .map(|c| ComparisonContext {
                        vehicle: c.vehicle,
                        emissions_kg: format_number(c.emissions_kg),
                        difference_kg: format_number(c.difference_kg),
                    })
                    .collect(),
            };
            render(include_str!("../templates/lifetime.md"), &context)
        }
    }
}

#[derive(Serialize)]
struct TripContext {
    vehicle_type: String,
    fuel_type: String,
    fuel_economy: String,
    vehicle_age: u32,
    age_factor: String,
    distance_km: String,
    emissions_kg: String,
    fuel_required: String,
    fuel_available: String,
    fuel_status: String,
    tips: &'static [&'static str],
}

#[derive(Serialize)]
struct TripJson<'a> {
    #[serde(flatten)]
    report: &'a TripReport,
    tips: &'static [&'static str],
}

fn trip(report: &TripReport, format: Format) -> Result<Vec<u8>, Box<dyn Error>> {
    match format {
        Format::Csv => footprint::csv::serialize(std::iter::once(report)),
        Format::Json => Ok(serde_json::to_vec_pretty(&TripJson { report, tips: &TIPS })?),
        Format::Markdown => {
            let context = TripContext {
                vehicle_type: report.vehicle_type.clone(),
                fuel_type: report.fuel_type.clone(),
                fuel_economy: format!("{}", report.fuel_economy),
                vehicle_age: report.vehicle_age,
                age_factor: format!("{:.2}", report.age_factor),
                distance_km: format_number(report.distance_km),
                emissions_kg: format_number(report.emissions_kg),
                fuel_required: format_number(report.fuel_required),
                fuel_available: format_number(report.fuel_available),
                fuel_status: format!("{:?}", report.fuel_status),
                tips: &TIPS,
            };
            render(include_str!("../templates/trip.md"), &context)
        }
    }
}

#[derive(Serialize)]
struct FactorRow {
    fuel_type: &'static str,
    kg_co2_per_liter: f64,
}

#[derive(Serialize)]
struct FactorsContext {
    factors: Vec<FactorRow>,
}

fn factors(format: Format) -> Result<Vec<u8>, Box<dyn Error>> {
    let factors = FuelType::all()
        .map(|fuel| FactorRow {
            fuel_type: fuel.name(),
            kg_co2_per_liter: fuel.emission_factor(),
        })
        .collect::<Vec<_>>();
    match format {
        Format::Csv => footprint::csv::serialize(factors.iter()),
        Format::Json => Ok(serde_json::to_vec_pretty(&factors)?),
        Format::Markdown => render(
            include_str!("../templates/factors.md"),
            &FactorsContext { factors },
        ),
    }
}

fn write(output: Option<&str>, data: Vec<u8>) -> Result<(), Box<dyn Error>> {
    match output {
        Some(path) => {
            std::fs::write(path, data)?;
            log::info!("Result written to {path}");
        }
        None => std::io::stdout().write_all(&data)?,
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let data = match cli.command {
        Command::Lifetime { vehicle, distance } => {
            let profile = vehicle.profile(distance);
            let report = LifetimeReport::new(&profile)
                .map_err(domain)?
                .ok_or_else(|| unrated(&vehicle))?;
            lifetime(&report, cli.format)?
        }
        Command::Trip {
            vehicle,
            distance,
            fuel_available,
        } => {
            // the lifetime distance plays no role in a trip
            let profile = vehicle.profile(0.0);
            let report = TripReport::new(&profile, distance, fuel_available)
                .map_err(domain)?
                .ok_or_else(|| unrated(&vehicle))?;
            trip(&report, cli.format)?
        }
        Command::Factors => factors(cli.format)?,
    };

    write(cli.output.as_deref(), data)
}

pub fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()?;

    if let Err(error) = run(Cli::parse()) {
        log::error!("{error}");
        std::process::exit(1);
    }
    Ok(())
}
