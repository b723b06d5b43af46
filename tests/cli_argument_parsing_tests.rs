//! Tests for CLI argument parsing functionality
//!
//! These tests verify that command line arguments are properly parsed
//! and layered onto the search configuration.

use clinic_finder::types::config::{CliArgs, SearchConfig};
use clinic_finder::types::FacilityCategory;
use clap::Parser;

fn bare_args() -> CliArgs {
    CliArgs {
        config: None,
        lat: None,
        lng: None,
        category: None,
        seed: None,
        latency_ms: None,
        timeout_ms: None,
        maximum_age_ms: None,
        output_format: None,
        output: None,
        show_links: false,
        verbose: false,
        debug: false,
        dry_run: false,
        print_config: false,
    }
}

/// Test parsing of position arguments
#[test]
fn test_position_argument_parsing() {
    // No position by default
    let cli_args = CliArgs::try_parse_from(["test"]).unwrap();
    assert_eq!(cli_args.lat, None);
    assert_eq!(cli_args.lng, None);

    // Explicit coordinates
    let cli_args =
        CliArgs::try_parse_from(["test", "--lat", "37.5665", "--lng", "126.9780"]).unwrap();
    assert_eq!(cli_args.lat, Some(37.5665));
    assert_eq!(cli_args.lng, Some(126.978));

    // Negative coordinates
    let cli_args =
        CliArgs::try_parse_from(["test", "--lat", "-33.8688", "--lng", "151.2093"]).unwrap();
    assert_eq!(cli_args.lat, Some(-33.8688));
}

/// Test parsing of the category argument
#[test]
fn test_category_argument_parsing() {
    let cli_args = CliArgs::try_parse_from(["test", "--category", "dental"]).unwrap();
    assert_eq!(cli_args.category.as_deref(), Some("dental"));

    let config = SearchConfig::from_cli_args(cli_args).unwrap();
    assert_eq!(config.get_category(), FacilityCategory::Dental);
}

/// Test that unknown categories fall back to internal medicine
#[test]
fn test_unknown_category_falls_back() {
    let cli_args = CliArgs::try_parse_from(["test", "--category", "veterinary"]).unwrap();
    let config = SearchConfig::from_cli_args(cli_args).unwrap();
    assert_eq!(config.get_category(), FacilityCategory::InternalMedicine);
}

/// Test parsing of seed and latency arguments
#[test]
fn test_seed_and_latency_parsing() {
    let cli_args =
        CliArgs::try_parse_from(["test", "--seed", "42", "--latency-ms", "0"]).unwrap();
    assert_eq!(cli_args.seed, Some(42));
    assert_eq!(cli_args.latency_ms, Some(0));

    let config = SearchConfig::from_cli_args(cli_args).unwrap();
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.latency_ms, 0);
}

/// Test default configuration from bare arguments
#[test]
fn test_defaults_from_bare_arguments() {
    let config = SearchConfig::from_cli_args(bare_args()).unwrap();

    assert_eq!(config.lat, None);
    assert_eq!(config.lng, None);
    assert_eq!(config.get_category(), FacilityCategory::InternalMedicine);
    assert_eq!(config.latency_ms, 1_500);
    assert_eq!(config.timeout_ms, 10_000);
    assert_eq!(config.maximum_age_ms, 300_000);
    assert_eq!(config.output_format, "text");
    assert!(!config.show_links);

    config.validate().unwrap();
}

/// Test coordinate validation through the configuration layer
#[test]
fn test_coordinate_validation() {
    // Out-of-range latitude
    let mut args = bare_args();
    args.lat = Some(91.0);
    args.lng = Some(127.0);
    let config = SearchConfig::from_cli_args(args).unwrap();
    assert!(config.validate().is_err());

    // Latitude without longitude
    let mut args = bare_args();
    args.lat = Some(37.5);
    let config = SearchConfig::from_cli_args(args).unwrap();
    assert!(config.validate().is_err());

    // Complete valid pair
    let mut args = bare_args();
    args.lat = Some(37.5);
    args.lng = Some(127.0);
    let config = SearchConfig::from_cli_args(args).unwrap();
    config.validate().unwrap();
}

/// Test output format validation
#[test]
fn test_output_format_validation() {
    let mut args = bare_args();
    args.output_format = Some("xml".to_string());
    let config = SearchConfig::from_cli_args(args).unwrap();
    assert!(config.validate().is_err());

    for format in ["text", "json", "csv"] {
        let mut args = bare_args();
        args.output_format = Some(format.to_string());
        let config = SearchConfig::from_cli_args(args).unwrap();
        config.validate().unwrap();
    }
}

/// Test the show-links and dry-run flags
#[test]
fn test_flag_parsing() {
    let cli_args =
        CliArgs::try_parse_from(["test", "--show-links", "--dry-run", "-v"]).unwrap();
    assert!(cli_args.show_links);
    assert!(cli_args.dry_run);
    assert!(cli_args.verbose);
    assert!(!cli_args.debug);
}
