//! Tests for CLI argument parsing functionality
//!
//! These tests verify that command line arguments are properly parsed and
//! layered over the configuration file and the defaults.

use manufacturing_line_simulator::types::config::{CliArgs, ConfigError, SimulationConfig};
use manufacturing_line_simulator::types::{InSystemAreaFormula, OutputFormat, PartTable};
use clap::Parser;
use std::io::Write;

/// Test parsing with no arguments keeps every default
#[test]
fn test_no_arguments_uses_defaults() {
    let cli_args = CliArgs::try_parse_from(["test"]).unwrap();
    assert!(cli_args.config.is_none());
    assert!(cli_args.num_simulations.is_none());
    assert!(!cli_args.verbose);
    assert!(!cli_args.dry_run);

    let config = SimulationConfig::from_cli_args(cli_args).unwrap();
    assert_eq!(config, SimulationConfig::default());
}

/// Test run-shape arguments
#[test]
fn test_run_arguments() {
    let cli_args = CliArgs::try_parse_from([
        "test",
        "--end-time",
        "2000",
        "--ramp-up-time",
        "200",
        "--num-simulations",
        "25",
        "--assembly-acceptance",
        "0.9",
    ])
    .unwrap();

    let config = SimulationConfig::from_cli_args(cli_args).unwrap();
    assert_eq!(config.end_simulation_time, 2000.0);
    assert_eq!(config.ramp_up_time, 200.0);
    assert_eq!(config.num_simulations, 25);
    assert_eq!(config.assembly_acceptance_probability, 0.9);
    config.validate().unwrap();
}

/// Test short flags
#[test]
fn test_short_flags() {
    let cli_args = CliArgs::try_parse_from(["test", "-n", "4", "-v", "-d"]).unwrap();
    assert_eq!(cli_args.num_simulations, Some(4));
    assert!(cli_args.verbose);
    assert!(cli_args.debug);
}

/// Test output arguments
#[test]
fn test_output_arguments() {
    let cli_args = CliArgs::try_parse_from([
        "test",
        "--output-format",
        "json",
        "--trace-output",
        "runs.jsonl",
        "--results-output",
        "results.json",
    ])
    .unwrap();

    let config = SimulationConfig::from_cli_args(cli_args).unwrap();
    assert_eq!(config.get_output_format(), Ok(OutputFormat::Json));
    assert_eq!(config.trace_output.as_deref(), Some("runs.jsonl"));
    assert_eq!(config.results_output.as_deref(), Some("results.json"));
}

/// Test invalid values are caught by parsing or validation
#[test]
fn test_invalid_values() {
    // Not a number: clap rejects it
    assert!(CliArgs::try_parse_from(["test", "--end-time", "soon"]).is_err());

    // Parses, but fails validation
    let cli_args = CliArgs::try_parse_from(["test", "-n", "0"]).unwrap();
    let config = SimulationConfig::from_cli_args(cli_args).unwrap();
    assert!(config.validate().is_err());

    let cli_args = CliArgs::try_parse_from(["test", "--output-format", "xml"]).unwrap();
    let config = SimulationConfig::from_cli_args(cli_args).unwrap();
    assert!(config.validate().is_err());

    let cli_args = CliArgs::try_parse_from(["test", "--area-formula", "twice"]).unwrap();
    assert!(matches!(
        SimulationConfig::from_cli_args(cli_args),
        Err(ConfigError::InvalidArgument { .. })
    ));
}

/// Test command line values take precedence over the configuration file
#[test]
fn test_cli_overrides_config_file() {
    let mut temp_file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    let config_json = r#"{
        "num_simulations": 8,
        "ramp_up_time": 60.0,
        "interarrival_means": {
            "rod_end": 4.0,
            "piston": 4.5,
            "cylinder_cap": 5.0,
            "cylinder": 5.5,
            "cylinder_rod_end": 6.0
        },
        "area_formula": "all_stations",
        "seed": 3
    }"#;
    temp_file.write_all(config_json.as_bytes()).unwrap();

    let path = temp_file.path().to_str().unwrap().to_string();
    let cli_args = CliArgs::try_parse_from(["test", "--config", path.as_str(), "-n", "2"]).unwrap();
    let config = SimulationConfig::from_cli_args(cli_args).unwrap();

    // From the command line
    assert_eq!(config.num_simulations, 2);
    // From the file
    assert_eq!(config.ramp_up_time, 60.0);
    assert_eq!(config.interarrival_means.piston, 4.5);
    assert_eq!(config.area_formula, InSystemAreaFormula::AllStations);
    assert_eq!(config.seed, Some(3));
    // From the defaults
    assert_eq!(config.end_simulation_time, 1080.0);

    // A single interarrival mean on the command line replaces all five
    let cli_args =
        CliArgs::try_parse_from(["test", "--config", path.as_str(), "--interarrival-mean", "3"]).unwrap();
    let config = SimulationConfig::from_cli_args(cli_args).unwrap();
    assert_eq!(config.interarrival_means, PartTable::uniform(3.0));
}

/// Test missing configuration file is reported
#[test]
fn test_missing_config_file() {
    let cli_args = CliArgs::try_parse_from(["test", "--config", "/no/such/line.json"]).unwrap();
    assert!(matches!(
        SimulationConfig::from_cli_args(cli_args),
        Err(ConfigError::FileNotFound(_))
    ));
}

/// Test printed configuration can be loaded back
#[test]
fn test_print_config_round_trip() {
    let json = SimulationConfig::default().print_json().unwrap();
    let reloaded: SimulationConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(reloaded.num_simulations, 10);
    assert!((reloaded.assembly_acceptance_probability - 0.868939).abs() < 1e-12);
    assert_eq!(reloaded.area_formula, InSystemAreaFormula::Legacy);
}
