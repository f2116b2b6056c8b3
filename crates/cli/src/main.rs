//! ROI serial harness CLI.
//!
//! This binary drives the harness model from the command line. It provides:
//! 1. **Run:** Apply a stimulus file edge by edge and print `serial_out`.
//! 2. **Eval:** Evaluate one vector directly and through the serial protocol.
//! 3. **Table / Info:** Dump the truth table and placement annotation.
//! 4. **Sweep:** Exhaustively check the serial path against the truth table.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::error;
use tracing_subscriber::EnvFilter;

use roi_harness_core::common::{HarnessError, InputVector};
use roi_harness_core::config::Config;
use roi_harness_core::roi::{CombinationalBlock, FixedFunctionEvaluator, TruthTable};
use roi_harness_core::sim::{Simulator, Stimulus};

#[derive(Parser, Debug)]
#[command(
    name = "roi-harness",
    author,
    version,
    about = "Cycle-accurate model of the ROI serial shift-register fixture",
    long_about = "Drive the serial harness around the LUT6 region of interest.\n\nExamples:\n  roi-harness run stim.txt --stats\n  roi-harness eval 32\n  roi-harness sweep\n  roi-harness table"
)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Apply a stimulus file (.json or line-oriented text) and print serial_out.
    Run {
        /// Stimulus file.
        stimulus: PathBuf,

        /// Print the per-tick trace as JSON lines instead of the bit string.
        #[arg(long)]
        trace_json: bool,

        /// Print statistics after the run.
        #[arg(long)]
        stats: bool,
    },

    /// Evaluate one input vector (0-63, accepts 0x/0b prefixes).
    Eval {
        /// Input vector.
        #[arg(value_parser = parse_vector)]
        vector: InputVector,
    },

    /// Print the 64-entry truth table.
    Table,

    /// Drive every vector through the serial interface and check the responses.
    Sweep {
        /// Print the sweep report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the placement annotation and INIT word of the region of interest.
    Info,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match cli.config.as_deref().map(Config::from_file).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            error!("failed to load configuration: {e}");
            process::exit(2);
        }
    };

    let result = match cli.command {
        Commands::Run {
            stimulus,
            trace_json,
            stats,
        } => cmd_run(&config, &stimulus, trace_json, stats),
        Commands::Eval { vector } => {
            cmd_eval(&config, vector);
            Ok(())
        }
        Commands::Table => {
            cmd_table();
            Ok(())
        }
        Commands::Sweep { json } => cmd_sweep(&config, json),
        Commands::Info => cmd_info(),
    };

    if let Err(e) = result {
        error!("{e}");
        process::exit(1);
    }
}

/// Installs the global `tracing` subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn parse_vector(s: &str) -> Result<InputVector, String> {
    let s = s.trim();
    let parsed = if let Some(hex) = s.strip_prefix("0x") {
        u64::from_str_radix(hex, 16)
    } else if let Some(bin) = s.strip_prefix("0b") {
        u64::from_str_radix(bin, 2)
    } else {
        s.parse::<u64>()
    };
    let value = parsed.map_err(|e| e.to_string())?;
    InputVector::try_from(value).map_err(|e| e.to_string())
}

/// Runs a stimulus file; trace rows or the `serial_out` bit string go to stdout.
fn cmd_run(
    config: &Config,
    path: &std::path::Path,
    trace_json: bool,
    stats: bool,
) -> Result<(), HarnessError> {
    let stimulus = Stimulus::from_file(path)?;
    let mut config = config.clone();
    config.general.trace_ticks |= trace_json;

    let mut sim = Simulator::new(&config);
    let outputs = sim.run(&stimulus)?;

    if trace_json {
        for record in sim.trace().unwrap_or_default() {
            println!("{}", serde_json::to_string(record)?);
        }
    } else {
        let bits: String = outputs.iter().map(|b| if *b { '1' } else { '0' }).collect();
        println!("{bits}");
    }
    if stats {
        sim.stats().print_sections(&config.stats.sections);
    }
    Ok(())
}

fn cmd_eval(config: &Config, vector: InputVector) {
    let roi = FixedFunctionEvaluator::new();
    let mut sim = Simulator::new(config);
    let serial = sim.evaluate_serial(vector);
    println!("vector   {vector} ({})", vector.val());
    println!("direct   {}", u8::from(roi.evaluate(vector)));
    println!("serial   {} ({} ticks)", u8::from(serial), sim.stats().ticks);
}

fn cmd_table() {
    let table = TruthTable::ROI;
    println!("INIT = {:#018x}", table.init());
    for (vector, out) in table.rows() {
        println!("{vector} {:>2} -> {}", vector.val(), u8::from(out));
    }
}

fn cmd_sweep(config: &Config, json: bool) -> Result<(), HarnessError> {
    let mut sim = Simulator::new(config);
    let report = sim.sweep()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "sweep ok: {} vectors, {} ones, {} ticks, INIT = {:#018x}",
            report.responses.len(),
            report.ones,
            report.ticks,
            report.init_word()
        );
    }
    Ok(())
}

#[derive(Serialize)]
struct RoiInfo<'a> {
    placement: &'a roi_harness_core::roi::PlacementAnnotation,
    attribute: String,
    init: String,
}

fn cmd_info() -> Result<(), HarnessError> {
    let roi = FixedFunctionEvaluator::new();
    let info = RoiInfo {
        placement: roi.placement(),
        attribute: roi.placement().to_string(),
        init: format!("{:#018x}", roi.table().init()),
    };
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}
