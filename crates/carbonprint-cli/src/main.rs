mod commands;
mod output;

use carbonprint_core::config::{self, StatsConfig};
use carbonprint_core::error::CarbonError;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "carbonprint",
    version,
    about = "Carbon score and eco-points for scanned food products"
)]
struct Cli {
    /// JSON config file (carbon_saved_per_eco_choice, history_limit)
    #[arg(long, global = true, value_name = "FILE", env = "CARBONPRINT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a carbon score from a quantity and an optional grade
    Score {
        /// Quantity text, e.g. "500 g" or "1.5 l"
        #[arg(short, long)]
        quantity: String,

        /// Eco-score grade (a-e)
        #[arg(short, long)]
        grade: Option<String>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Look up a product by barcode and show its sustainability data
    Lookup {
        barcode: String,

        /// Directory of saved Open Food Facts responses (<barcode>.json)
        #[arg(long, value_name = "DIR", env = "CARBONPRINT_PRODUCTS")]
        products: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Look up a product and record the scan in the user's history
    Scan {
        barcode: String,

        /// Directory of saved Open Food Facts responses (<barcode>.json)
        #[arg(long, value_name = "DIR", env = "CARBONPRINT_PRODUCTS")]
        products: PathBuf,

        /// Directory holding scan histories
        #[arg(long, value_name = "DIR", env = "CARBONPRINT_STORE")]
        store: PathBuf,

        #[arg(short, long, default_value = "default", env = "CARBONPRINT_USER")]
        user: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Inspect and manage a user's scan history
    History {
        /// Directory holding scan histories
        #[arg(long, value_name = "DIR", env = "CARBONPRINT_STORE")]
        store: PathBuf,

        #[arg(short, long, default_value = "default", env = "CARBONPRINT_USER")]
        user: String,

        #[command(subcommand)]
        action: HistoryAction,
    },
    /// Show the built-in category catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
}

#[derive(Subcommand)]
enum HistoryAction {
    /// List recorded scans, newest first
    List {
        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Show eco-points and other statistics
    Stats {
        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Record a scan from a JSON request file
    Add {
        /// JSON file with barcode, productName, carbonScore, ...
        file: PathBuf,
    },
    /// Delete the user's history
    Reset,
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List categories with their impact figures and alternatives
    List,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<StatsConfig, CarbonError> {
    match path {
        Some(path) => config::load_config(path),
        None => Ok(StatsConfig::default()),
    }
}

fn run(cli: Cli) -> Result<(), CarbonError> {
    let stats_config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Score {
            quantity,
            grade,
            output,
        } => commands::score::run(&quantity, grade.as_deref(), &output),
        Commands::Lookup {
            barcode,
            products,
            output,
        } => commands::lookup::run(&barcode, products, &output),
        Commands::Scan {
            barcode,
            products,
            store,
            user,
            output,
        } => commands::scan::run(&barcode, products, store, &user, stats_config, &output),
        Commands::History {
            store,
            user,
            action,
        } => match action {
            HistoryAction::List { output } => {
                commands::history::list(store, &user, stats_config, &output)
            }
            HistoryAction::Stats { output } => {
                commands::history::stats(store, &user, stats_config, &output)
            }
            HistoryAction::Add { file } => {
                commands::history::add(store, &user, stats_config, &file)
            }
            HistoryAction::Reset => commands::history::reset(store, &user, stats_config),
        },
        Commands::Catalog { action } => match action {
            CatalogAction::List => commands::catalog::list(),
        },
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
