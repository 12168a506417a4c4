//! reference: runs the lift_sim elevator simulator from the command line.
//!
//! With no flags it runs the reference building: 10 floors, 2 cars and 40
//! passengers admitted one per tick.  Any field can come from a JSON config
//! file and be overridden by individual flags.
//!
//! ```console
//! $ reference --floors 20 --elevators 4 --people 200 --csv-dir ./output -v
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lift_building::LiftEvent;
use lift_core::{LiftConfig, Tick};
use lift_output::{CsvWriter, SimOutputObserver, TracingObserver};
use lift_sim::{RunReport, SimBuilder, SimObserver, TickSummary};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "reference", version, about = "Multi-elevator building simulation")]
struct Args {
    /// Configuration file path (JSON format)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[arg(long, help = "Number of floors (at least 2)")]
    floors: Option<u32>,

    #[arg(long, help = "Number of elevator cars (at least 1)")]
    elevators: Option<u32>,

    #[arg(long, help = "Passengers to admit, one per tick")]
    people: Option<u32>,

    #[arg(long, help = "Random seed for reproducible passenger requests")]
    seed: Option<u64>,

    #[arg(long, value_name = "DIR", help = "Write events.csv and tick_summaries.csv here")]
    csv_dir: Option<PathBuf>,

    #[arg(short, long, help = "Log car moves and dwells", conflicts_with = "quiet")]
    verbose: bool,

    #[arg(short, long, help = "Only log warnings and errors")]
    quiet: bool,
}

impl Args {
    /// Config file (or the reference building) with flag overrides applied.
    fn load_config(&self) -> Result<LiftConfig> {
        let mut config = match &self.config {
            Some(path) => read_config(path)?,
            None => LiftConfig::reference(),
        };
        if let Some(floors) = self.floors {
            config.floors = floors;
        }
        if let Some(elevators) = self.elevators {
            config.elevators = elevators;
        }
        if let Some(people) = self.people {
            config.total_people = people;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        Ok(config)
    }

    fn log_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let level = if self.quiet {
                "warn"
            } else if self.verbose {
                "debug"
            } else {
                "info"
            };
            EnvFilter::new(format!("reference={level},lift_output={level}"))
        })
    }
}

fn read_config(path: &Path) -> Result<LiftConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config file {}", path.display()))
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Forwards every hook to the tracing log and, when requested, the CSV files.
struct RunObserver {
    log: TracingObserver,
    csv: Option<SimOutputObserver<CsvWriter>>,
}

impl RunObserver {
    fn new(csv_dir: Option<&Path>) -> Result<Self> {
        let csv = match csv_dir {
            Some(dir) => {
                let writer = CsvWriter::new(dir)
                    .with_context(|| format!("creating CSV output in {}", dir.display()))?;
                Some(SimOutputObserver::new(writer))
            }
            None => None,
        };
        Ok(Self { log: TracingObserver::new(), csv })
    }

    /// Flush the CSV files and surface the first write error.
    fn finish(&mut self) -> Result<()> {
        if let Some(csv) = &mut self.csv {
            csv.finish();
            if let Some(e) = csv.take_error() {
                return Err(e).context("writing CSV output");
            }
        }
        Ok(())
    }
}

impl SimObserver for RunObserver {
    fn on_sim_start(&mut self, config: &LiftConfig) {
        self.log.on_sim_start(config);
        if let Some(csv) = &mut self.csv {
            csv.on_sim_start(config);
        }
    }

    fn on_tick_start(&mut self, tick: Tick) {
        self.log.on_tick_start(tick);
        if let Some(csv) = &mut self.csv {
            csv.on_tick_start(tick);
        }
    }

    fn on_event(&mut self, event: &LiftEvent) {
        self.log.on_event(event);
        if let Some(csv) = &mut self.csv {
            csv.on_event(event);
        }
    }

    fn on_tick_end(&mut self, summary: &TickSummary) {
        self.log.on_tick_end(summary);
        if let Some(csv) = &mut self.csv {
            csv.on_tick_end(summary);
        }
    }

    fn on_sim_end(&mut self, report: &RunReport) {
        self.log.on_sim_end(report);
        if let Some(csv) = &mut self.csv {
            csv.on_sim_end(report);
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(args.log_filter())
        .with_writer(std::io::stderr)
        .init();

    let config = args.load_config()?;
    info!(
        floors    = config.floors,
        elevators = config.elevators,
        people    = config.total_people,
        seed      = config.seed,
        "configuration loaded"
    );

    let mut sim = SimBuilder::new(config).build().context("invalid configuration")?;
    let mut observer = RunObserver::new(args.csv_dir.as_deref())?;

    let t0 = Instant::now();
    let result = sim.run(&mut observer);
    // Flush whatever was recorded, even when the run aborted.
    let flushed = observer.finish();
    let report = result.context("simulation aborted")?;
    flushed?;

    info!(
        elapsed             = report.elapsed,
        delivered           = report.people_done,
        floors_per_delivery = report.floors_per_delivery(),
        events              = observer.log.events_logged(),
        wall_ms             = t0.elapsed().as_millis() as u64,
        "simulation finished"
    );
    if let Some(dir) = &args.csv_dir {
        info!(dir = %dir.display(), "CSV output written");
    }

    println!("elapsed: {}", report.elapsed);
    Ok(())
}
