// Manufacturing Line Simulator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/manufacturing-line-simulator
// ```
//
// Or with custom configuration:
//
// ```console
// $ ./target/release/manufacturing-line-simulator -n 20 --seed 7 --results-output results.csv --verbose
// ```

use anyhow::Context;
use clap::Parser;
use manufacturing_line_simulator::simulation::{
    FileReporter, LoggingConfig, RunSummary, SimulationOrchestrator,
};
use manufacturing_line_simulator::types::{CliArgs, PartKind, SimulationConfig, Station};
use std::process;
use std::time::Instant;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        let default_config = SimulationConfig::default();
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

    info!("Starting Manufacturing Line Simulator");

    // Load configuration from CLI arguments and optional config file
    let config = match SimulationConfig::from_cli_args(args.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        eprintln!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    info!("Configuration loaded and validated successfully");

    // Handle dry run mode
    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - simulation will not be executed.");
        print_configuration_summary(&config);
        return;
    }

    print_startup_banner(&config);

    if let Err(e) = run_simulation(config) {
        error!("Simulation failed: {:#}", e);
        eprintln!("Simulation failed: {:#}", e);
        process::exit(1);
    }

    info!("Manufacturing Line Simulator completed successfully");
}

/// Run every replication, writing output files as configured
fn run_simulation(config: SimulationConfig) -> anyhow::Result<()> {
    let start_time = Instant::now();

    let mut reporter =
        FileReporter::from_config(&config).context("Failed to create output files")?;
    let mut orchestrator =
        SimulationOrchestrator::new(config.clone()).context("Failed to create orchestrator")?;

    eprintln!("Running {} simulations...", config.num_simulations);
    let (summaries, replication) = orchestrator
        .run_replications(&mut reporter)
        .context("Simulation run aborted")?;
    reporter.finish().context("Failed to write output files")?;

    print_run_summaries(&summaries);
    if let Some(replication) = replication {
        eprintln!("{}\n", replication);
    }

    if let Some(path) = &config.trace_output {
        eprintln!("Event trace written to: {}", path);
    }
    if let Some(path) = &config.results_output {
        eprintln!("Results written to: {}", path);
    }
    eprintln!("Completed in {:.2?}", start_time.elapsed());

    Ok(())
}

/// Print startup banner and configuration summary
fn print_startup_banner(config: &SimulationConfig) {
    eprintln!("Manufacturing Line Simulator");
    eprintln!("============================");
    eprintln!("Discrete-event simulation of an assembly, coating and rework line");
    eprintln!();

    print_configuration_summary(config);
}

/// Print configuration summary
fn print_configuration_summary(config: &SimulationConfig) {
    eprintln!("Configuration:");
    eprintln!("  End of Simulation: {} min", config.end_simulation_time);
    eprintln!("  Ramp-up Time: {} min", config.ramp_up_time);
    eprintln!("  Simulations: {}", config.num_simulations);
    for part in PartKind::ALL {
        eprintln!(
            "  {}: mean interarrival {} min, acceptance {:.1}%",
            part,
            config.interarrival_means.get(part),
            config.part_acceptance.get(part) * 100.0
        );
    }
    for station in Station::ALL {
        let service = config.service_times.get(station);
        eprintln!("  {} Service: N({}, {})", station, service.mean, service.stdev);
    }
    eprintln!(
        "  Inspection Acceptance: {:.2}% (after rework {:.2}%)",
        config.assembly_acceptance_probability * 100.0,
        config.rework_acceptance_probability() * 100.0
    );
    eprintln!("  Area Formula: {}", config.area_formula);
    eprintln!("  Output Format: {}", config.output_format);
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
    eprintln!();
}

/// Print the summary of each run
fn print_run_summaries(summaries: &[RunSummary]) {
    for summary in summaries {
        eprintln!("----------------------");
        eprintln!("{}", summary);
    }
    eprintln!("----------------------");
}
