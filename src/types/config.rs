//! Configuration structures for the manufacturing line simulator
//!
//! This module contains the run configuration, its layered loading (defaults,
//! JSON file, command line) and validation.

use super::{InSystemAreaFormula, OutputFormat, PartKind, Station};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default plant parameters
pub mod defaults {
    /// End of each run (minutes)
    pub const END_SIMULATION_TIME: f64 = 1080.0;

    /// Initial interval excluded from statistics (minutes)
    pub const RAMP_UP_TIME: f64 = 120.0;

    /// Number of independent runs
    pub const NUM_SIMULATIONS: usize = 10;

    /// Mean interarrival time of every raw part (minutes)
    pub const INTERARRIVAL_MEAN: f64 = 5.0;

    /// Probability an assembly passes final inspection on its first visit
    pub const ASSEMBLY_ACCEPTANCE: f64 = 0.868939;

    /// Multiplier applied to the base acceptance for reworked assemblies
    pub const REWORK_ACCEPTANCE_FACTOR: f64 = 1.5;
}

/// One value per raw part kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartTable<T> {
    /// Rod end value
    pub rod_end: T,
    /// Piston value
    pub piston: T,
    /// Cylinder cap value
    pub cylinder_cap: T,
    /// Cylinder value
    pub cylinder: T,
    /// Cylinder rod end value
    pub cylinder_rod_end: T,
}

impl<T: Copy> PartTable<T> {
    /// Same value for every part kind
    pub fn uniform(value: T) -> Self {
        Self {
            rod_end: value,
            piston: value,
            cylinder_cap: value,
            cylinder: value,
            cylinder_rod_end: value,
        }
    }

    /// Value for a part kind
    pub fn get(&self, part: PartKind) -> T {
        match part {
            PartKind::RodEnd => self.rod_end,
            PartKind::Piston => self.piston,
            PartKind::CylinderCap => self.cylinder_cap,
            PartKind::Cylinder => self.cylinder,
            PartKind::CylinderRodEnd => self.cylinder_rod_end,
        }
    }

    /// Mutable value for a part kind
    pub fn get_mut(&mut self, part: PartKind) -> &mut T {
        match part {
            PartKind::RodEnd => &mut self.rod_end,
            PartKind::Piston => &mut self.piston,
            PartKind::CylinderCap => &mut self.cylinder_cap,
            PartKind::Cylinder => &mut self.cylinder,
            PartKind::CylinderRodEnd => &mut self.cylinder_rod_end,
        }
    }
}

impl<T: Default> Default for PartTable<T> {
    fn default() -> Self {
        Self {
            rod_end: T::default(),
            piston: T::default(),
            cylinder_cap: T::default(),
            cylinder: T::default(),
            cylinder_rod_end: T::default(),
        }
    }
}

/// Normally distributed service time of a station (minutes)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ServiceTime {
    /// Mean service time
    pub mean: f64,
    /// Standard deviation of the service time
    pub stdev: f64,
}

impl ServiceTime {
    /// Create a service time distribution
    pub fn new(mean: f64, stdev: f64) -> Self {
        Self { mean, stdev }
    }
}

/// Service time distributions for the three stations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ServiceTimes {
    /// Assembly station
    pub assembly: ServiceTime,
    /// Coating station
    pub coating: ServiceTime,
    /// Rework station
    pub rework: ServiceTime,
}

impl ServiceTimes {
    /// Service time of a station
    pub fn get(&self, station: Station) -> ServiceTime {
        match station {
            Station::Assembly => self.assembly,
            Station::Coating => self.coating,
            Station::ReWork => self.rework,
        }
    }
}

impl Default for ServiceTimes {
    fn default() -> Self {
        Self {
            assembly: ServiceTime::new(4.0, 1.0),
            coating: ServiceTime::new(5.0, 3.0),
            rework: ServiceTime::new(10.0, 4.0),
        }
    }
}

/// Command line arguments structure
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "manufacturing-line-simulator",
    version = "0.1.0",
    about = "Manufacturing Line Simulator - Discrete-event simulation of an assembly, coating and rework line",
    long_about = "Runs independent discrete-event simulations of a manufacturing line where five raw parts merge into assemblies that pass through Assembly, Coating and final inspection, with rejected assemblies routed through ReWork.

EXAMPLES:
    # Run with default settings
    manufacturing-line-simulator

    # Use a configuration file
    manufacturing-line-simulator --config line.json

    # Reproducible runs with an event trace
    manufacturing-line-simulator --seed 42 --trace-output runs.csv --results-output results.csv

    # Generate configuration template
    manufacturing-line-simulator --print-config > my-line.json

    # Validate configuration without running
    manufacturing-line-simulator --config my-line.json --dry-run

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

    /// Simulated time at which each run ends (minutes)
    #[arg(long, help = "End of simulation time in minutes")]
    pub end_time: Option<f64>,

    /// Initial interval excluded from statistics (minutes)
    #[arg(long, help = "Ramp-up time in minutes")]
    pub ramp_up_time: Option<f64>,

    /// Number of independent runs
    #[arg(short = 'n', long, help = "Number of independent simulation runs")]
    pub num_simulations: Option<usize>,

    /// Mean interarrival time applied to every raw part
    #[arg(
        long,
        help = "Mean interarrival time for all parts (minutes)",
        long_help = "Overrides the mean interarrival time of all five raw parts. Per-part values can be set in the configuration file."
    )]
    pub interarrival_mean: Option<f64>,

    /// Base final inspection acceptance probability
    #[arg(
        long,
        help = "Final inspection acceptance probability (0.0-1.0)",
        long_help = "Probability that an assembly passes final inspection on its first visit. Reworked assemblies use 1.5x this value, capped at 1.0. Default: 0.868939"
    )]
    pub assembly_acceptance: Option<f64>,

    /// Entities-in-system area formula
    #[arg(long, help = "Area formula for entities in system (legacy or all-stations)")]
    pub area_formula: Option<String>,

    /// Output format for trace and results files
    #[arg(long, help = "Output format (csv or json)")]
    pub output_format: Option<String>,

    /// Random seed for reproducible results
    #[arg(long, help = "Random seed for reproducible results")]
    pub seed: Option<u64>,

    /// Path of the per-event trace file
    #[arg(long, help = "Write the per-event trace of every run to this file")]
    pub trace_output: Option<String>,

    /// Path of the per-run results file
    #[arg(long, help = "Write one result row per run to this file")]
    pub results_output: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without running simulation
    #[arg(long, help = "Validate configuration without running simulation")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Simulated time at which each run ends
    pub end_simulation_time: Option<f64>,

    /// Initial interval excluded from statistics
    pub ramp_up_time: Option<f64>,

    /// Number of independent runs
    pub num_simulations: Option<usize>,

    /// Mean interarrival time per part kind
    pub interarrival_means: Option<PartTable<f64>>,

    /// Service time distributions
    pub service_times: Option<ServiceTimes>,

    /// Receiving inspection acceptance probability per part kind
    pub part_acceptance: Option<PartTable<f64>>,

    /// Base final inspection acceptance probability
    pub assembly_acceptance_probability: Option<f64>,

    /// Entities-in-system area formula
    pub area_formula: Option<InSystemAreaFormula>,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Output format for trace and results files
    pub output_format: Option<String>,

    /// Path of the per-event trace file
    pub trace_output: Option<String>,

    /// Path of the per-run results file
    pub results_output: Option<String>,
}

/// Configuration for the manufacturing line simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Simulated time at which each run ends (minutes)
    pub end_simulation_time: f64,

    /// Initial interval excluded from statistics (minutes)
    pub ramp_up_time: f64,

    /// Number of independent runs
    pub num_simulations: usize,

    /// Mean interarrival time per part kind (minutes, exponential)
    pub interarrival_means: PartTable<f64>,

    /// Service time distributions (minutes, normal)
    pub service_times: ServiceTimes,

    /// Receiving inspection acceptance probability per part kind
    pub part_acceptance: PartTable<f64>,

    /// Base final inspection acceptance probability
    pub assembly_acceptance_probability: f64,

    /// Entities-in-system area formula
    pub area_formula: InSystemAreaFormula,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Output format for trace and results files
    pub output_format: String,

    /// Path of the per-event trace file
    pub trace_output: Option<String>,

    /// Path of the per-run results file
    pub results_output: Option<String>,
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

    /// A command line value could not be parsed
    #[error("Invalid value for {field}: {message}")]
    InvalidArgument {
        /// Name of the offending argument
        field: String,
        /// Parse failure description
        message: String,
    },
}

/// Validation errors for simulation configuration
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ConfigValidationError {
    /// End time is not a positive finite number
    #[error("End of simulation time must be positive and finite, got {0}")]
    InvalidEndTime(f64),

    /// Ramp-up time is negative or not before the end time
    #[error("Ramp-up time must be in [0, {end}), got {ramp_up}")]
    InvalidRampUp {
        /// The configured ramp-up time
        ramp_up: f64,
        /// The configured end time
        end: f64,
    },

    /// No runs requested
    #[error("Number of simulations must be greater than 0, got {0}")]
    InvalidRunCount(usize),

    /// A mean is not a positive finite number
    #[error("Invalid mean for {field}: {value} (must be positive and finite)")]
    InvalidMean {
        /// Name of the field with the invalid mean
        field: String,
        /// The invalid value
        value: f64,
    },

    /// A standard deviation is negative or not finite
    #[error("Invalid standard deviation for {field}: {value} (must be >= 0 and finite)")]
    InvalidStdev {
        /// Name of the field with the invalid standard deviation
        field: String,
        /// The invalid value
        value: f64,
    },

    /// A probability is out of range
    #[error("Invalid probability for {field}: {value} (must be between 0.0 and 1.0)")]
    InvalidProbability {
        /// Name of the field with the invalid probability
        field: String,
        /// The invalid value
        value: f64,
    },

    /// Output format is not recognised
    #[error("{0}")]
    InvalidOutputFormat(String),
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            end_simulation_time: defaults::END_SIMULATION_TIME,
            ramp_up_time: defaults::RAMP_UP_TIME,
            num_simulations: defaults::NUM_SIMULATIONS,
            interarrival_means: PartTable::uniform(defaults::INTERARRIVAL_MEAN),
            service_times: ServiceTimes::default(),
            part_acceptance: PartTable {
                rod_end: 0.996,
                piston: 0.999,
                cylinder_cap: 1.0,
                cylinder: 0.999,
                cylinder_rod_end: 0.998,
            },
            assembly_acceptance_probability: defaults::ASSEMBLY_ACCEPTANCE,
            area_formula: InSystemAreaFormula::default(),
            seed: None,
            output_format: "csv".to_string(),
            trace_output: None,
            results_output: None,
        }
    }
}

impl SimulationConfig {
    /// Create a new configuration from command line arguments and optional config file
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::from_cli_args(args)
    }

    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence over the file
        Self::apply_cli_overrides(&mut config, args)?;

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
            end_simulation_time: config_file
                .end_simulation_time
                .unwrap_or(defaults.end_simulation_time),
            ramp_up_time: config_file.ramp_up_time.unwrap_or(defaults.ramp_up_time),
            num_simulations: config_file.num_simulations.unwrap_or(defaults.num_simulations),
            interarrival_means: config_file
                .interarrival_means
                .unwrap_or(defaults.interarrival_means),
            service_times: config_file.service_times.unwrap_or(defaults.service_times),
            part_acceptance: config_file.part_acceptance.unwrap_or(defaults.part_acceptance),
            assembly_acceptance_probability: config_file
                .assembly_acceptance_probability
                .unwrap_or(defaults.assembly_acceptance_probability),
            area_formula: config_file.area_formula.unwrap_or(defaults.area_formula),
            seed: config_file.seed.or(defaults.seed),
            output_format: config_file.output_format.unwrap_or(defaults.output_format),
            trace_output: config_file.trace_output.or(defaults.trace_output),
            results_output: config_file.results_output.or(defaults.results_output),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) -> Result<(), ConfigError> {
        if let Some(value) = args.end_time {
            config.end_simulation_time = value;
        }
        if let Some(value) = args.ramp_up_time {
            config.ramp_up_time = value;
        }
        if let Some(value) = args.num_simulations {
            config.num_simulations = value;
        }
        if let Some(value) = args.interarrival_mean {
            config.interarrival_means = PartTable::uniform(value);
        }
        if let Some(value) = args.assembly_acceptance {
            config.assembly_acceptance_probability = value;
        }
        if let Some(value) = args.area_formula {
            config.area_formula = value.parse().map_err(|message| ConfigError::InvalidArgument {
                field: "area_formula".to_string(),
                message,
            })?;
        }
        if let Some(value) = args.output_format {
            config.output_format = value;
        }
        if let Some(value) = args.seed {
            config.seed = Some(value);
        }
        if let Some(value) = args.trace_output {
            config.trace_output = Some(value);
        }
        if let Some(value) = args.results_output {
            config.results_output = Some(value);
        }
        Ok(())
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
        if !self.end_simulation_time.is_finite() || self.end_simulation_time <= 0.0 {
            return Err(ConfigValidationError::InvalidEndTime(self.end_simulation_time));
        }

        if !self.ramp_up_time.is_finite()
            || self.ramp_up_time < 0.0
            || self.ramp_up_time >= self.end_simulation_time
        {
            return Err(ConfigValidationError::InvalidRampUp {
                ramp_up: self.ramp_up_time,
                end: self.end_simulation_time,
            });
        }

        if self.num_simulations == 0 {
            return Err(ConfigValidationError::InvalidRunCount(self.num_simulations));
        }

        for part in PartKind::ALL {
            let mean = self.interarrival_means.get(part);
            if !mean.is_finite() || mean <= 0.0 {
                return Err(ConfigValidationError::InvalidMean {
                    field: format!("interarrival_means ({})", part),
                    value: mean,
                });
            }
            self.validate_probability(
                &format!("part_acceptance ({})", part),
                self.part_acceptance.get(part),
            )?;
        }

        for station in Station::ALL {
            let service = self.service_times.get(station);
            // A zero or negative mean is allowed; samples are truncated at zero
            if !service.mean.is_finite() {
                return Err(ConfigValidationError::InvalidMean {
                    field: format!("service_times ({})", station),
                    value: service.mean,
                });
            }
            if !service.stdev.is_finite() || service.stdev < 0.0 {
                return Err(ConfigValidationError::InvalidStdev {
                    field: format!("service_times ({})", station),
                    value: service.stdev,
                });
            }
        }

        self.validate_probability(
            "assembly_acceptance_probability",
            self.assembly_acceptance_probability,
        )?;

        self.get_output_format().map_err(ConfigValidationError::InvalidOutputFormat)?;

        Ok(())
    }

    /// Helper method to validate probability values
    fn validate_probability(&self, field: &str, value: f64) -> Result<(), ConfigValidationError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ConfigValidationError::InvalidProbability {
                field: field.to_string(),
                value,
            });
        }
        Ok(())
    }

    /// Acceptance probability at final inspection for an assembly that has been reworked
    pub fn rework_acceptance_probability(&self) -> f64 {
        (self.assembly_acceptance_probability * defaults::REWORK_ACCEPTANCE_FACTOR).min(1.0)
    }

    /// Length of the interval over which statistics are collected
    pub fn time_of_interest(&self) -> f64 {
        self.end_simulation_time - self.ramp_up_time
    }

    /// Get the output format as an enum value
    pub fn get_output_format(&self) -> Result<OutputFormat, String> {
        self.output_format.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulation_config_default() {
        let config = SimulationConfig::default();

        assert_eq!(config.end_simulation_time, 1080.0);
        assert_eq!(config.ramp_up_time, 120.0);
        assert_eq!(config.num_simulations, 10);
        assert_eq!(config.interarrival_means, PartTable::uniform(5.0));
        assert_eq!(config.service_times.assembly, ServiceTime::new(4.0, 1.0));
        assert_eq!(config.service_times.coating, ServiceTime::new(5.0, 3.0));
        assert_eq!(config.service_times.rework, ServiceTime::new(10.0, 4.0));
        assert_eq!(config.part_acceptance.get(PartKind::RodEnd), 0.996);
        assert_eq!(config.part_acceptance.get(PartKind::CylinderCap), 1.0);
        assert_eq!(config.assembly_acceptance_probability, 0.868939);
        assert_eq!(config.area_formula, InSystemAreaFormula::Legacy);
        assert!(config.seed.is_none());
        assert_eq!(config.output_format, "csv");
        config.validate().unwrap();
    }

    #[test]
    fn test_rework_acceptance_is_capped() {
        let config = SimulationConfig::default();
        assert!((config.rework_acceptance_probability() - 1.0).abs() < f64::EPSILON);

        let config = SimulationConfig {
            assembly_acceptance_probability: 0.5,
            ..Default::default()
        };
        assert!((config.rework_acceptance_probability() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_time_of_interest() {
        let config = SimulationConfig::default();
        assert_eq!(config.time_of_interest(), 960.0);
    }

    #[test]
    fn test_validation_rejects_bad_times() {
        let config = SimulationConfig { end_simulation_time: 0.0, ..Default::default() };
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidEndTime(0.0)));

        let config = SimulationConfig { ramp_up_time: 2000.0, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigValidationError::InvalidRampUp { .. })));

        let config = SimulationConfig { num_simulations: 0, ..Default::default() };
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidRunCount(0)));
    }

    #[test]
    fn test_validation_rejects_bad_parameters() {
        let mut config = SimulationConfig::default();
        *config.interarrival_means.get_mut(PartKind::Piston) = 0.0;
        assert!(matches!(config.validate(), Err(ConfigValidationError::InvalidMean { .. })));

        let mut config = SimulationConfig::default();
        config.service_times.coating.stdev = -1.0;
        assert!(matches!(config.validate(), Err(ConfigValidationError::InvalidStdev { .. })));

        let mut config = SimulationConfig::default();
        *config.part_acceptance.get_mut(PartKind::Cylinder) = 1.2;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidProbability { .. })
        ));

        let config = SimulationConfig { output_format: "xml".to_string(), ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigValidationError::InvalidOutputFormat(_))));
    }

    #[test]
    fn test_cli_overrides() {
        let args = CliArgs::try_parse_from([
            "test",
            "--end-time",
            "500",
            "--ramp-up-time",
            "50",
            "-n",
            "3",
            "--interarrival-mean",
            "2.5",
            "--area-formula",
            "all-stations",
            "--seed",
            "11",
        ])
        .unwrap();

        let config = SimulationConfig::from_cli_args(args).unwrap();
        assert_eq!(config.end_simulation_time, 500.0);
        assert_eq!(config.ramp_up_time, 50.0);
        assert_eq!(config.num_simulations, 3);
        assert_eq!(config.interarrival_means, PartTable::uniform(2.5));
        assert_eq!(config.area_formula, InSystemAreaFormula::AllStations);
        assert_eq!(config.seed, Some(11));
        config.validate().unwrap();
    }

    #[test]
    fn test_cli_rejects_unknown_area_formula() {
        let args = CliArgs::try_parse_from(["test", "--area-formula", "bogus"]).unwrap();
        assert!(matches!(
            SimulationConfig::from_cli_args(args),
            Err(ConfigError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_config_file_loading() {
        use std::io::Write;
        use tempfile::Builder;

        let mut temp_file = Builder::new().suffix(".json").tempfile().unwrap();
        let config_json = r#"{
            "end_simulation_time": 600.0,
            "num_simulations": 2,
            "service_times": {
                "assembly": { "mean": 3.0, "stdev": 0.5 },
                "coating": { "mean": 4.0, "stdev": 1.0 },
                "rework": { "mean": 8.0, "stdev": 2.0 }
            },
            "area_formula": "all_stations",
            "seed": 99
        }"#;
        temp_file.write_all(config_json.as_bytes()).unwrap();

        let config = SimulationConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.end_simulation_time, 600.0);
        assert_eq!(config.num_simulations, 2);
        assert_eq!(config.service_times.assembly, ServiceTime::new(3.0, 0.5));
        assert_eq!(config.area_formula, InSystemAreaFormula::AllStations);
        assert_eq!(config.seed, Some(99));
        // Unspecified fields keep their defaults
        assert_eq!(config.ramp_up_time, 120.0);
        assert_eq!(config.interarrival_means, PartTable::uniform(5.0));
    }

    #[test]
    fn test_config_file_errors() {
        assert!(matches!(
            SimulationConfig::from_file("/definitely/not/here.json"),
            Err(ConfigError::FileNotFound(_))
        ));

        let temp_file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        assert!(matches!(
            SimulationConfig::from_file(temp_file.path()),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("line.json");

        let config = SimulationConfig { seed: Some(5), num_simulations: 4, ..Default::default() };
        config.save_to_file(&path).unwrap();

        let reloaded = SimulationConfig::from_file(&path).unwrap();
        assert_eq!(reloaded.seed, Some(5));
        assert_eq!(reloaded.num_simulations, 4);
        assert_eq!(reloaded.end_simulation_time, config.end_simulation_time);
        assert_eq!(reloaded.service_times, config.service_times);
        reloaded.validate().unwrap();
    }
}
