//! Robocode/OS host entry point.
//!
//! Runs the demos against simulated peripherals, with stdin
//! standing in for the serial monitor and IR receiver.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │  HardwareAdapter    LogEventSink / JsonLines   HostClock │
//! │  (Actuator+Clock)   (EventSink, TraceSink)               │
//! │                                                          │
//! │  ────────────── Port Trait Boundary ──────────────       │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │        AppService (pure logic)                 │      │
//! │  │  Mode · IR dispatch · Servo · Fill · Sort      │      │
//! │  └────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use std::io;
use std::ops::ControlFlow;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{LevelFilter, info};

use robocode::adapters::hardware::HardwareAdapter;
use robocode::adapters::json_sink::JsonLines;
use robocode::adapters::log_sink::{LogEventSink, LogTraceSink, join_values};
use robocode::adapters::logger::ConsoleLogger;
use robocode::app::console::{ConsoleInput, SortRequest, menu_input, servo_input};
use robocode::app::ports::EventSink;
use robocode::app::service::AppService;
use robocode::config::SystemConfig;
use robocode::drivers::sim::{SimPin, SimPwm};
use robocode::serial::LineBuffer;
use robocode::sorting::{self, TraceSink};

/// Longest console line accepted; the rest is dropped.
const LINE_CAPACITY: usize = 64;

type SimHardware = HardwareAdapter<SimPin, SimPwm>;

#[derive(Parser, Debug)]
#[command(name = "robocode", version, about = "Robocode/OS demos on the host")]
struct Cli {
    /// JSON configuration file (missing fields take defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed for the random array builder (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Console log level
    #[arg(long, global = true, default_value = "info")]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// IR remote menu: mode keys, IR codes, array fill and sort
    Menu {
        /// Emit application events as JSON lines on stdout
        #[arg(long)]
        json: bool,
    },
    /// Serial servo positioner: one angle per line
    Servo,
    /// Fill an array and run the traced bubble sort once
    Sort {
        /// Array size (config default when omitted)
        #[arg(long)]
        size: Option<usize>,
        /// Lower fill bound, inclusive
        #[arg(long, allow_negative_numbers = true)]
        min: Option<i32>,
        /// Upper fill bound, inclusive
        #[arg(long, allow_negative_numbers = true)]
        max: Option<i32>,
        /// Sort these values instead of a random fill
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        values: Vec<i32>,
        /// Emit the trace as JSON lines on stdout
        #[arg(long)]
        json: bool,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<SystemConfig> {
    let Some(path) = path else {
        return Ok(SystemConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = SystemConfig::from_json(&text)
        .with_context(|| format!("loading config {}", path.display()))?;
    info!("Config loaded from {}", path.display());
    Ok(config)
}

/// Feed console lines from stdin to the service until EOF or `quit`.
fn drive_console(
    app: &mut AppService,
    hw: &mut SimHardware,
    sink: &mut impl EventSink,
    interpret: impl Fn(&str, &SystemConfig) -> ConsoleInput,
) -> Result<()> {
    LineBuffer::<LINE_CAPACITY>::new().read_lines(
        io::stdin().lock(),
        |line| -> Result<ControlFlow<()>> {
            match interpret(line, app.config()) {
                ConsoleInput::Command(cmd) => app.handle_command(cmd, &mut *hw, &mut *sink)?,
                ConsoleInput::Quit => return Ok(ControlFlow::Break(())),
                ConsoleInput::Ignored => {}
            }
            Ok(ControlFlow::Continue(()))
        },
    )
}

fn run_menu(mut app: AppService, hw: &mut SimHardware, sink: &mut impl EventSink) -> Result<()> {
    app.start(hw, sink);
    drive_console(&mut app, hw, sink, menu_input)?;
    info!("Menu closed after {} commands", app.commands_handled());
    Ok(())
}

fn run_servo(mut app: AppService, hw: &mut SimHardware) -> Result<()> {
    let mut sink = LogEventSink::new();
    let limits = *hw.servo().limits();
    info!("=== Servo control over the serial console ===");
    info!(
        "Enter an angle between {} and {} degrees and press Enter.",
        limits.min_angle, limits.max_angle
    );
    info!("Example: 45");

    drive_console(&mut app, hw, &mut sink, |line, _| servo_input(line))
}

fn run_sort(config: &SystemConfig, seed: u64, request: &SortRequest, json: bool) -> Result<()> {
    let mut array = request
        .build_array(config, seed)
        .context("filling array")?;
    info!("Array contents: {}", join_values(&array, ", "));

    let summary = if json {
        let mut sink = JsonLines::new(io::stdout().lock());
        let summary = sort_with(&mut array, &mut sink)?;
        drop(sink.finish().context("writing JSON trace")?);
        summary
    } else {
        sort_with(&mut array, &mut LogTraceSink::new())?
    };

    info!(
        "Sorted in {} passes ({} swaps{}): {}",
        summary.total_passes,
        summary.swaps,
        if summary.early_exit { ", early exit" } else { "" },
        join_values(&array, ", ")
    );
    Ok(())
}

fn sort_with(array: &mut [i32], sink: &mut impl TraceSink) -> Result<sorting::SortSummary> {
    sorting::sort(array, sink).context("sorting array")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    ConsoleLogger::init(cli.log_level).context("installing logger")?;

    info!("=================================================");
    info!("  Robocode/OS v{}", env!("CARGO_PKG_VERSION"));
    info!("=================================================");

    let config = load_config(cli.config.as_ref())?;
    let seed = cli.seed.unwrap_or_else(rand::random);
    info!("Entropy seed: {}", seed);

    match cli.command {
        Command::Menu { json } => {
            let app = AppService::new(config.clone(), seed)?;
            let mut hw = HardwareAdapter::simulated(&config)?;
            if json {
                let mut sink = JsonLines::new(io::stdout().lock());
                run_menu(app, &mut hw, &mut sink)?;
                drop(sink.finish().context("writing JSON events")?);
                Ok(())
            } else {
                run_menu(app, &mut hw, &mut LogEventSink::new())
            }
        }
        Command::Servo => {
            let app = AppService::new(config.clone(), seed)?;
            let mut hw = HardwareAdapter::simulated(&config)?;
            run_servo(app, &mut hw)
        }
        Command::Sort {
            size,
            min,
            max,
            values,
            json,
        } => {
            let request = SortRequest {
                size,
                min,
                max,
                values,
            };
            run_sort(&config, seed, &request, json)
        }
    }
}
