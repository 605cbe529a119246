use clap::{Parser, Subcommand};
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::process;

use toc_buffer_sim::dashboard::action_list::{ActionList, PriorityFilter, DEFAULT_ITEM_COUNT};
use toc_buffer_sim::dashboard::overview::StoreOverview;
use toc_buffer_sim::io::demand::{self, DemandPattern};
use toc_buffer_sim::io::reporting;
use toc_buffer_sim::simulation::config::{MAX_LEAD_TIME, MAX_ORDER_FREQUENCY};
use toc_buffer_sim::{ReplenishmentSimulation, SimResult, SimulationParameters};

#[derive(Parser, Debug)]
#[command(name = "toc-buffer-sim", about = "Dynamic Buffer Management (TOC) simulator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a demand CSV through the replenishment policy
    Simulate {
        /// CSV with Day and Daily_Sales columns; Day must be a whole-number
        /// day index (1, 2, ...), not a date
        #[arg(long, default_value = "sales_simulation.csv")]
        demand: PathBuf,
        #[arg(long, default_value_t = 150)]
        initial_stock: u32,
        /// Initial Target Stock Level
        #[arg(long, default_value_t = 150)]
        tsl: u32,
        /// Replenishment period (delivery days)
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(0..=MAX_LEAD_TIME as i64))]
        lead_time: u32,
        /// Place an order every N days
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=MAX_ORDER_FREQUENCY as i64))]
        order_frequency: u32,
        /// Write the day-by-day trace here
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Write a synthetic demand CSV
    GenerateDemand {
        #[arg(long, default_value_t = 60)]
        days: usize,
        #[arg(long, value_enum, default_value_t = DemandPattern::Normal)]
        pattern: DemandPattern,
        #[arg(long, default_value_t = 40.0)]
        mean: f64,
        #[arg(long, default_value_t = 10.0)]
        std_dev: f64,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value = "sales_simulation.csv")]
        output: PathBuf,
    },
    /// Print the store priority action list
    Actions {
        /// One of the stores listed by `overview`
        #[arg(long, default_value = "Jakarta Central")]
        store: String,
        /// Show every zone, not just black and red
        #[arg(long)]
        all: bool,
        #[arg(long, default_value_t = DEFAULT_ITEM_COUNT)]
        items: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the store performance overview
    Overview,
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn run(cli: Cli) -> SimResult<()> {
    match cli.command {
        Command::Simulate {
            demand: demand_path,
            initial_stock,
            tsl,
            lead_time,
            order_frequency,
            output,
        } => {
            let params = SimulationParameters {
                initial_stock,
                initial_target_stock_level: tsl,
                lead_time,
                order_frequency,
            };
            params.validate()?;
            let series = demand::load_demand_file(&demand_path)?;

            let mut sim = ReplenishmentSimulation::new(params.clone(), series)?;
            sim.run();

            if let Some(path) = output {
                reporting::write_trace_file(&path, &sim.history)?;
            }
            println!("=== Dynamic Buffer Management (TOC) ===");
            println!("{}", reporting::render_summary(&params, &sim.summary()));
        }
        Command::GenerateDemand {
            days,
            pattern,
            mean,
            std_dev,
            seed,
            output,
        } => {
            let series =
                demand::generate_demand(pattern, days, mean, std_dev, &mut rng_from(seed))?;
            demand::write_demand_file(&output, &series)?;
            println!("Wrote {} days of demand to {}", series.len(), output.display());
        }
        Command::Actions {
            store,
            all,
            items,
            seed,
        } => {
            StoreOverview::sample().require_store(&store)?;
            let list = ActionList::generate(&store, items, &mut rng_from(seed));
            let filter = if all {
                PriorityFilter::All
            } else {
                PriorityFilter::Critical
            };
            let view = list.view(filter);
            info!("{} of {} items shown for {}", view.len(), items, store);
            println!("=== Store Priority Action List: {} ===", list.store);
            print!("{}", reporting::render_action_list(&view));
        }
        Command::Overview => {
            println!("=== Supply Chain Command Center ===");
            print!("{}", reporting::render_overview(&StoreOverview::sample()));
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{}", e);
        process::exit(1);
    }
}
