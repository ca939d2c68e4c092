//! Dining philosophers CLI.
//!
//! Runs the dinner, prints the last run's timeline and its statistics.

use std::io::{self, Write};

use clap::Parser;
use dining_table::config::DinnerConfig;
use dining_table::lifecycle::{setup_tracing, DinnerError, Table};
use dining_table::timeline::{render, ColorMode, RenderOptions, Summary};
use dining_table::timing::WorkBounds;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "dining-table")]
#[command(about = "Dining philosophers with a timestamped event timeline")]
struct Args {
    /// Philosophers (and forks) around the table
    #[arg(short, long, default_value_t = 5)]
    philosophers: usize,

    /// Meals each philosopher must eat
    #[arg(short, long, default_value_t = 300)]
    meals: usize,

    /// Number of runs; only the last one is printed
    #[arg(short, long, default_value_t = 2)]
    runs: usize,

    /// Minimum thinking time (us)
    #[arg(long, default_value_t = 50)]
    think_min: u64,

    /// Maximum thinking time (us)
    #[arg(long, default_value_t = 200)]
    think_max: u64,

    /// Minimum eating time (us)
    #[arg(long, default_value_t = 50)]
    eat_min: u64,

    /// Maximum eating time (us)
    #[arg(long, default_value_t = 200)]
    eat_max: u64,

    /// How the timeline is coloured
    #[arg(long, value_enum, default_value_t = ColorMode::Event)]
    color: ColorMode,

    /// Reset every cell's colour after each line
    #[arg(long)]
    reset_colors: bool,

    /// Print the whole timeline instead of its head and tail
    #[arg(long)]
    print_all: bool,

    /// Events printed at each end of the timeline
    #[arg(long, default_value_t = 200)]
    print_range: usize,

    /// Print the statistics as JSON instead of text
    #[arg(long)]
    json: bool,
}

impl Args {
    fn config(&self) -> DinnerConfig {
        DinnerConfig {
            philosophers: self.philosophers,
            meals: self.meals,
            runs: self.runs,
            thinking: WorkBounds::new(self.think_min, self.think_max),
            eating: WorkBounds::new(self.eat_min, self.eat_max),
        }
    }

    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            color: self.color,
            reset_colors: self.reset_colors,
            print_all: self.print_all,
            range: self.print_range,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), DinnerError> {
    setup_tracing();

    let args = Args::parse();
    let config = args.config();
    config.validate()?;

    info!(
        philosophers = config.philosophers,
        meals = config.meals,
        runs = config.runs,
        "Setting the table"
    );
    let table = Table::new(config.philosophers)?;
    let timelines = table.serve(&config).await?;

    let Some(last) = timelines.last() else {
        warn!("No runs requested, nothing to print");
        return Ok(());
    };

    let stdout = io::stdout().lock();
    let mut out = render(last, args.render_options(), io::BufWriter::new(stdout))?;

    let summary = Summary::of(last);
    if args.json {
        serde_json::to_writer_pretty(&mut out, &summary)?;
        writeln!(out)?;
    } else {
        writeln!(out)?;
        writeln!(out, "Philosophers count: {}", config.philosophers)?;
        writeln!(out, "Philosophers eating times: {}", config.meals)?;
        writeln!(out, "Run times: {}", config.runs)?;
        writeln!(out)?;
        write!(out, "{summary}")?;
    }
    out.flush()?;
    drop(out);

    info!("Dinner complete");
    Ok(())
}
