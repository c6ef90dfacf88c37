//! Trace and results files
//!
//! [`FileReporter`] is a [`StatisticsAccumulator`] that writes the per-event
//! trace of every run and the per-run results table, in CSV or JSON.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::simulation::{
    EventSnapshot, ReplicationSummary, RunSummary, SimulationError, SimulationResult,
    StatisticsAccumulator,
};
use crate::types::{OutputFormat, SimulationConfig};

/// Column header of the CSV trace, repeated for every run
pub const TRACE_CSV_HEADER: &str = "Simulation Time,Event Type,Pre Assembly,Pre Coating,Pre ReWork,\
Assemblies Created,Assemblies Delivered,Total Assembly Time in System,\
cumAssemblies_Time_InSystem,Event ID,next ID";

/// Column header of the CSV results table
pub const RESULTS_CSV_HEADER: &str = "Simulation Number,Assemblies Created,Assemblies Delivered,\
Average Assembly Time in System,Average Num Assemblies in System,Prop. Assembly St. Busy,\
Prop. Coating St. Busy,Prop. Rework Busy";

/// JSON results document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsDocument {
    /// When the document was written
    pub generated_at: DateTime<Utc>,
    /// Configuration the runs used
    pub config: SimulationConfig,
    /// One entry per run
    pub runs: Vec<RunSummary>,
    /// Statistics across runs
    pub replication: Option<ReplicationSummary>,
}

/// Writes trace and results files while the runs execute
#[derive(Debug)]
pub struct FileReporter {
    format: OutputFormat,
    config: SimulationConfig,
    trace: Option<BufWriter<File>>,
    results: Option<BufWriter<File>>,
    summaries: Vec<RunSummary>,
}

impl FileReporter {
    /// Create the output files named in the configuration
    pub fn from_config(config: &SimulationConfig) -> SimulationResult<Self> {
        let format = config.get_output_format().map_err(SimulationError::ConfigurationError)?;
        Self::new(
            config.clone(),
            format,
            config.trace_output.as_deref().map(Path::new),
            config.results_output.as_deref().map(Path::new),
        )
    }

    /// Create a reporter writing to the given paths
    ///
    /// Either path may be omitted; nothing is written for it.
    pub fn new(
        config: SimulationConfig,
        format: OutputFormat,
        trace_path: Option<&Path>,
        results_path: Option<&Path>,
    ) -> SimulationResult<Self> {
        let open = |path: Option<&Path>| -> SimulationResult<Option<BufWriter<File>>> {
            match path {
                Some(path) => {
                    debug!(path = %path.display(), "Creating output file");
                    Ok(Some(BufWriter::new(File::create(path)?)))
                }
                None => Ok(None),
            }
        };

        let trace = open(trace_path)?;
        let mut results = open(results_path)?;

        if format == OutputFormat::Csv {
            if let Some(writer) = results.as_mut() {
                writeln!(writer, "{}", RESULTS_CSV_HEADER)?;
            }
        }

        Ok(Self { format, config, trace, results, summaries: Vec::new() })
    }

    /// Whether any file is being written
    pub fn is_active(&self) -> bool {
        self.trace.is_some() || self.results.is_some()
    }

    /// Write the JSON results document, if any, and flush every file
    pub fn finish(mut self) -> SimulationResult<()> {
        if let Some(mut writer) = self.results.take() {
            if self.format == OutputFormat::Json {
                let document = ResultsDocument {
                    generated_at: Utc::now(),
                    config: self.config.clone(),
                    replication: ReplicationSummary::from_runs(&self.summaries),
                    runs: std::mem::take(&mut self.summaries),
                };
                serde_json::to_writer_pretty(&mut writer, &document)?;
                writeln!(writer)?;
            }
            writer.flush()?;
        }
        if let Some(mut writer) = self.trace.take() {
            writer.flush()?;
        }
        info!("Output files written");
        Ok(())
    }
}

impl StatisticsAccumulator for FileReporter {
    fn begin_run(&mut self, run_index: usize) -> SimulationResult<()> {
        if let (Some(writer), OutputFormat::Csv) = (self.trace.as_mut(), self.format) {
            writeln!(writer, "Simulation Number: {}", run_index)?;
            writeln!(writer, "{}", TRACE_CSV_HEADER)?;
        }
        Ok(())
    }

    fn record_event(&mut self, snapshot: &EventSnapshot) -> SimulationResult<()> {
        let Some(writer) = self.trace.as_mut() else {
            return Ok(());
        };

        match self.format {
            OutputFormat::Csv => {
                let entity = snapshot.entity_id.map(|id| id.0).unwrap_or(0);
                writeln!(
                    writer,
                    "{:.4},{},{},{},{},{},{},{:.4},{:.4},{},{}",
                    snapshot.time,
                    snapshot.event_kind.label(),
                    snapshot.pre_assembly,
                    snapshot.pre_coat,
                    snapshot.pre_rework,
                    snapshot.created,
                    snapshot.delivered,
                    snapshot.total_time_in_system,
                    snapshot.cum_assembly_time_area,
                    entity,
                    snapshot.next_id.0
                )?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut *writer, snapshot)?;
                writeln!(writer)?;
            }
        }
        Ok(())
    }

    fn record_run(&mut self, summary: &RunSummary) -> SimulationResult<()> {
        if let (Some(writer), OutputFormat::Csv) = (self.trace.as_mut(), self.format) {
            writeln!(writer)?;
        }

        match (self.results.as_mut(), self.format) {
            (Some(writer), OutputFormat::Csv) => {
                writeln!(
                    writer,
                    "{},{},{},{:.6},{:.6},{:.6},{:.6},{:.6}",
                    summary.run_index,
                    summary.created,
                    summary.delivered,
                    summary.avg_time_in_system,
                    summary.avg_num_in_system,
                    summary.assembly_utilization,
                    summary.coating_utilization,
                    summary.rework_utilization
                )?;
            }
            (Some(_), OutputFormat::Json) => self.summaries.push(summary.clone()),
            (None, _) => {}
        }
        Ok(())
    }
}
