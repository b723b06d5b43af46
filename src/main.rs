// Clinic Finder - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/clinic-finder --lat 37.5665 --lng 126.9780 --category dental
// ```
//
// Or let the simulated geolocation source supply a position:
//
// ```console
// $ ./target/release/clinic-finder --category pharmacy --seed 42 --show-links
// ```

use clinic_finder::facility::SimulatedFacilityProvider;
use clinic_finder::geo::{GeolocationProvider, Position, SimulatedGeolocation};
use clinic_finder::output;
use clinic_finder::search::{LoggingConfig, SearchCoordinator};
use clinic_finder::types::config::CliArgs;
use clinic_finder::types::SearchConfig;
use clap::Parser;
use std::process;
use std::thread;
use std::time::Duration;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        let default_config = SearchConfig::default();
        match default_config.print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Initialize logging based on CLI flags
    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        // Default: minimal logging for normal users
        LoggingConfig::new().with_level(tracing::Level::WARN).init()
    };

    if let Err(e) = logging_result {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Starting Clinic Finder");

    // Load configuration from CLI arguments and optional config file
    let config = match SearchConfig::from_cli_args(args.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    info!("Configuration loaded and validated successfully");

    // Handle dry run mode
    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - search will not be executed.");
        print_configuration_summary(&config);
        return;
    }

    if let Err(e) = run_search(&config) {
        error!("Search failed: {}", e);
        process::exit(1);
    }

    info!("Clinic Finder completed successfully");
}

/// Acquire the user's position from explicit coordinates or the
/// simulated geolocation source
fn acquire_position(config: &SearchConfig) -> Result<Position, String> {
    if let (Some(lat), Some(lng)) = (config.lat, config.lng) {
        info!(lat, lng, "Using coordinates supplied via configuration");
        return Ok(Position::new(lat, lng));
    }

    eprintln!("위치를 찾는 중...");
    let mut source = SimulatedGeolocation::new();
    let position = source
        .current_position(&config.geolocation_options())
        .map_err(|e| format!("위치를 찾을 수 없습니다: {}", e))?;

    eprintln!(
        "위치를 찾았습니다! ({:.4}, {:.4})",
        position.lat, position.lng
    );
    Ok(position)
}

/// Run one full search round and render the results
fn run_search(config: &SearchConfig) -> Result<(), String> {
    let position = acquire_position(config)?;
    let category = config.get_category();
    let format = config.get_output_format()?;

    let provider = SimulatedFacilityProvider::from_seed_option(config.seed);
    let mut coordinator = SearchCoordinator::new(provider);
    coordinator.set_filter(category);
    coordinator.set_position(position);

    // Re-run the search through the ticketed path so the simulated
    // lookup latency is observed, as a live facility source would be
    let ticket = coordinator
        .begin_search()
        .ok_or_else(|| "Search requires a position".to_string())?;
    if config.latency_ms > 0 {
        thread::sleep(Duration::from_millis(config.latency_ms));
    }
    let facilities = coordinator.run_search(&ticket);
    coordinator.complete_search(ticket, facilities);

    let state = coordinator.state();
    info!(
        category = %state.filter,
        count = state.result_count(),
        "Search completed"
    );

    let rendered = output::render(state, format, config.show_links)
        .map_err(|e| format!("Failed to render results: {}", e))?;

    match &config.output {
        Some(path) => {
            output::write_output(path, &rendered)
                .map_err(|e| format!("Failed to write output to '{}': {}", path, e))?;
            eprintln!("Results written to: {}", path);
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

/// Print configuration summary
fn print_configuration_summary(config: &SearchConfig) {
    eprintln!("Configuration:");
    match (config.lat, config.lng) {
        (Some(lat), Some(lng)) => eprintln!("  Position: ({}, {})", lat, lng),
        _ => eprintln!("  Position: simulated geolocation"),
    }
    eprintln!("  Category: {}", config.get_category());
    eprintln!("  Lookup Latency: {}ms", config.latency_ms);
    eprintln!("  Geolocation Timeout: {}ms", config.timeout_ms);
    eprintln!("  Geolocation Max Age: {}ms", config.maximum_age_ms);
    eprintln!("  Output Format: {}", config.output_format);
    eprintln!("  Show Links: {}", config.show_links);
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
    if let Some(path) = &config.output {
        eprintln!("  Output File: {}", path);
    }
    eprintln!();
}
