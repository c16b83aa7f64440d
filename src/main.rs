//! # Timezone Converter Main Entry Point
//!
//! This is the main entry point for the timezone converter CLI.
//! It initializes logging, loads configuration, builds the country
//! table, and runs a single conversion from the command-line arguments.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod countries;
mod services;
mod utils;

use crate::config::Config;
use crate::countries::CountryZoneMapping;
use crate::services::converter::TimeZoneConverter;
use crate::utils::logging::{
    log_conversion_error, log_conversion_start, log_conversion_success, log_system_event,
    log_validation_error,
};
use crate::utils::validation::{validate_country_name, validate_time_input};

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "timezone_converter=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    if let Err(e) = run() {
        // The user sees a generic message; the log carries the detail.
        tracing::error!("Conversion failed: {:#}", e);
        eprintln!("Error converting time");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::from_env()?;
    info!("Starting timezone converter v{}", env!("CARGO_PKG_VERSION"));

    let mapping = build_mapping(&config)?;
    let converter =
        TimeZoneConverter::new(mapping).with_offset_reference(config.offset_reference);

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => {
            print_usage(converter.mapping());
            Ok(())
        }
        [flag] if flag == "--list" => {
            print_countries(converter.mapping());
            Ok(())
        }
        [time, from_country, to_country] => {
            run_conversion(&converter, time, from_country, to_country)
        }
        _ => {
            print_usage(converter.mapping());
            Err(anyhow::anyhow!("Expected <HH:mm> <FROM> <TO>"))
        }
    }
}

fn build_mapping(config: &Config) -> Result<CountryZoneMapping> {
    match &config.country_table_path {
        Some(path) => {
            log_system_event("Loading country table", Some(path));
            CountryZoneMapping::from_json_file(path)
        }
        None => Ok(CountryZoneMapping::builtin()),
    }
}

fn run_conversion(
    converter: &TimeZoneConverter,
    time: &str,
    from_country: &str,
    to_country: &str,
) -> Result<()> {
    if let Err(e) = validate_time_input(time) {
        log_validation_error("time", time, &e.to_string());
        return Err(e);
    }
    for country in [from_country, to_country] {
        if let Err(e) = validate_country_name(country) {
            log_validation_error("country", country, &e.to_string());
            return Err(e);
        }
    }

    log_conversion_start(time, from_country, to_country);

    match converter.convert(time, from_country, to_country) {
        Ok(converted) => {
            log_conversion_success(time, from_country, to_country, &converted.to_string());
            println!("Converted Time: {}", converted);
            Ok(())
        }
        Err(e) => {
            log_conversion_error(time, from_country, to_country, &e.to_string());
            Err(e.into())
        }
    }
}

fn print_usage(mapping: &CountryZoneMapping) {
    println!("Usage: timezone-converter <HH:mm> <FROM> <TO>");
    println!("       timezone-converter --list");
    println!();
    print_countries(mapping);
}

fn print_countries(mapping: &CountryZoneMapping) {
    println!("Supported countries:");
    for name in mapping.names() {
        println!("  {}", name);
    }
}
