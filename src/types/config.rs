//! Configuration structures for the facility finder
//!
//! This module contains the search configuration structure and validation
//! logic used to control position acquisition, facility generation, and
//! output rendering.

use super::{FacilityCategory, OutputFormat};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Geolocation acquisition constants
pub mod geolocation {
    /// Request high-accuracy positioning
    pub const HIGH_ACCURACY: bool = true;

    /// Position acquisition timeout (10 seconds)
    pub const TIMEOUT_MS: u64 = 10_000;

    /// Maximum accepted age of a cached position (5 minutes)
    pub const MAXIMUM_AGE_MS: u64 = 300_000;
}

/// Simulated network latency applied before search results are produced
pub const DEFAULT_LATENCY_MS: u64 = 1_500;

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "clinic-finder",
    version = "0.1.0",
    about = "Clinic Finder - Finds simulated nearby medical facilities by category",
    long_about = "Finds nearby medical facilities for a given position and category. \
The facility list is synthesized by a simulated provider (no real search API is \
contacted) and ranked by ascending distance.

EXAMPLES:
    # Run with the simulated geolocation default (Seoul City Hall)
    clinic-finder --category pharmacy

    # Search around an explicit position
    clinic-finder --lat 37.5665 --lng 126.9780 --category general_hospital

    # Reproducible results and JSON output
    clinic-finder --seed 42 --output-format json

    # Generate configuration template
    clinic-finder --print-config > my-config.json

    # Validate configuration without searching
    clinic-finder --config my-config.json --dry-run

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Latitude of the search position in degrees
    #[arg(
        long,
        allow_negative_numbers = true,
        help = "Latitude of the search position in degrees",
        long_help = "Latitude in degrees, range -90 to 90. When --lat/--lng are omitted the \
position is acquired from the simulated geolocation provider."
    )]
    pub lat: Option<f64>,

    /// Longitude of the search position in degrees
    #[arg(
        long,
        allow_negative_numbers = true,
        help = "Longitude of the search position in degrees"
    )]
    pub lng: Option<f64>,

    /// Facility category to search for
    #[arg(
        long,
        help = "Facility category to search for",
        long_help = "One of: internal_medicine, orthopedic, dental, ent, ophthalmology, \
pediatric, gynecology, dermatology, neurology, general_hospital, pharmacy. \
Unrecognized values fall back to internal_medicine. Default: internal_medicine"
    )]
    pub category: Option<String>,

    /// Random seed for reproducible results
    #[arg(long, help = "Random seed for reproducible results")]
    pub seed: Option<u64>,

    /// Simulated search latency in milliseconds
    #[arg(
        long,
        help = "Simulated search latency in milliseconds",
        long_help = "Delay applied before search results are produced, simulating a network \
round trip. Default: 1500"
    )]
    pub latency_ms: Option<u64>,

    /// Geolocation acquisition timeout in milliseconds
    #[arg(long, help = "Geolocation acquisition timeout in milliseconds")]
    pub timeout_ms: Option<u64>,

    /// Maximum accepted age of a cached position in milliseconds
    #[arg(long, help = "Maximum accepted cached position age in milliseconds")]
    pub maximum_age_ms: Option<u64>,

    /// Output format for search results
    #[arg(
        long,
        help = "Output format (text, json or csv)",
        long_help = "Output format for the facility list. Supported formats: text, json, csv. \
Default: text"
    )]
    pub output_format: Option<String>,

    /// Output path for the rendered facility list
    #[arg(short, long, help = "Write rendered results to a file instead of stdout")]
    pub output: Option<String>,

    /// Print directions and call deep links for each facility
    #[arg(long, help = "Print directions and call deep links for each facility")]
    pub show_links: bool,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without searching
    #[arg(long, help = "Validate configuration without searching")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Latitude of the search position in degrees
    pub lat: Option<f64>,

    /// Longitude of the search position in degrees
    pub lng: Option<f64>,

    /// Facility category to search for
    pub category: Option<String>,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Simulated search latency in milliseconds
    pub latency_ms: Option<u64>,

    /// Geolocation acquisition timeout in milliseconds
    pub timeout_ms: Option<u64>,

    /// Maximum accepted age of a cached position in milliseconds
    pub maximum_age_ms: Option<u64>,

    /// Output format for search results
    pub output_format: Option<String>,

    /// Output path for the rendered facility list
    pub output: Option<String>,

    /// Print directions and call deep links for each facility
    pub show_links: Option<bool>,
}

/// Configuration for a facility search run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Latitude of the search position in degrees (None: acquire via geolocation)
    pub lat: Option<f64>,

    /// Longitude of the search position in degrees (None: acquire via geolocation)
    pub lng: Option<f64>,

    /// Facility category token
    pub category: String,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Simulated search latency in milliseconds
    pub latency_ms: u64,

    /// Request high-accuracy positioning
    pub high_accuracy: bool,

    /// Geolocation acquisition timeout in milliseconds
    pub timeout_ms: u64,

    /// Maximum accepted age of a cached position in milliseconds
    pub maximum_age_ms: u64,

    /// Output format for search results
    pub output_format: String,

    /// Output path for the rendered facility list
    pub output: Option<String>,

    /// Print directions and call deep links for each facility
    pub show_links: bool,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for the search configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Latitude is outside the valid range
    #[error("Latitude must be between -90 and 90 degrees, got {0}")]
    InvalidLatitude(f64),

    /// Longitude is outside the valid range
    #[error("Longitude must be between -180 and 180 degrees, got {0}")]
    InvalidLongitude(f64),

    /// Only one of lat/lng was provided
    #[error("Both latitude and longitude must be provided together")]
    IncompleteCoordinates,

    /// Geolocation timeout is invalid
    #[error("Geolocation timeout must be greater than 0, got {0}")]
    InvalidTimeout(u64),

    /// Output format is not recognized
    #[error("Unknown output format: {0} (supported: text, json, csv)")]
    InvalidOutputFormat(String),
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            lat: None,
            lng: None,
            category: FacilityCategory::default().to_string(),
            seed: None,
            latency_ms: DEFAULT_LATENCY_MS,
            high_accuracy: geolocation::HIGH_ACCURACY,
            timeout_ms: geolocation::TIMEOUT_MS,
            maximum_age_ms: geolocation::MAXIMUM_AGE_MS,
            output_format: "text".to_string(),
            output: None,
            show_links: false,
        }
    }
}

impl SearchConfig {
    /// Create a new configuration from command line arguments and optional config file
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::from_cli_args(args)
    }

    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        // Start with default configuration
        let mut config = Self::default();

        // Load from config file if specified
        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // Override with command line arguments (CLI takes precedence)
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            lat: config_file.lat.or(defaults.lat),
            lng: config_file.lng.or(defaults.lng),
            category: config_file.category.unwrap_or(defaults.category),
            seed: config_file.seed.or(defaults.seed),
            latency_ms: config_file.latency_ms.unwrap_or(defaults.latency_ms),
            high_accuracy: defaults.high_accuracy,
            timeout_ms: config_file.timeout_ms.unwrap_or(defaults.timeout_ms),
            maximum_age_ms: config_file.maximum_age_ms.unwrap_or(defaults.maximum_age_ms),
            output_format: config_file.output_format.unwrap_or(defaults.output_format),
            output: config_file.output.or(defaults.output),
            show_links: config_file.show_links.unwrap_or(defaults.show_links),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.lat {
            config.lat = Some(value);
        }
        if let Some(value) = args.lng {
            config.lng = Some(value);
        }
        if let Some(value) = args.category {
            config.category = value;
        }
        if let Some(value) = args.seed {
            config.seed = Some(value);
        }
        if let Some(value) = args.latency_ms {
            config.latency_ms = value;
        }
        if let Some(value) = args.timeout_ms {
            config.timeout_ms = value;
        }
        if let Some(value) = args.maximum_age_ms {
            config.maximum_age_ms = value;
        }
        if let Some(value) = args.output_format {
            config.output_format = value;
        }
        if let Some(value) = args.output {
            config.output = Some(value);
        }
        if args.show_links {
            config.show_links = true;
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        // Coordinates must come as a pair
        match (self.lat, self.lng) {
            (Some(_), None) | (None, Some(_)) => {
                return Err(ConfigValidationError::IncompleteCoordinates);
            }
            _ => {}
        }

        if let Some(lat) = self.lat {
            if !(-90.0..=90.0).contains(&lat) {
                return Err(ConfigValidationError::InvalidLatitude(lat));
            }
        }

        if let Some(lng) = self.lng {
            if !(-180.0..=180.0).contains(&lng) {
                return Err(ConfigValidationError::InvalidLongitude(lng));
            }
        }

        if self.timeout_ms == 0 {
            return Err(ConfigValidationError::InvalidTimeout(self.timeout_ms));
        }

        if self.output_format.parse::<OutputFormat>().is_err() {
            return Err(ConfigValidationError::InvalidOutputFormat(self.output_format.clone()));
        }

        Ok(())
    }

    /// Resolve the configured category token with the lossy fallback policy
    pub fn get_category(&self) -> FacilityCategory {
        FacilityCategory::from_str_lossy(&self.category)
    }

    /// Get the output format as an enum value
    pub fn get_output_format(&self) -> Result<OutputFormat, String> {
        self.output_format.parse()
    }

    /// Geolocation options derived from this configuration
    pub fn geolocation_options(&self) -> crate::geo::GeolocationOptions {
        crate::geo::GeolocationOptions {
            high_accuracy: self.high_accuracy,
            timeout_ms: self.timeout_ms,
            maximum_age_ms: self.maximum_age_ms,
        }
    }
}
