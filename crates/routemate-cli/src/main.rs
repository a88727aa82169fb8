use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use routemate_cli::commands::itinerary::{handle_itinerary, ItineraryCommandArgs};
use routemate_cli::commands::nearest::{handle_nearest, NearestCommandArgs};
use routemate_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Nearest-airport lookups and air itineraries")]
struct Cli {
    /// Path to the airports CSV. Overrides ROUTEMATE_AIRPORTS_PATH.
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the airport closest to a point.
    Nearest(NearestArgs),
    /// Plan a ground/air/ground trip through the nearest airports.
    Itinerary(ItineraryArgs),
}

#[derive(Args, Debug)]
struct NearestArgs {
    /// Latitude in decimal degrees.
    #[arg(long, allow_hyphen_values = true)]
    lat: String,
    /// Longitude in decimal degrees.
    #[arg(long, alias = "lng", allow_hyphen_values = true)]
    lon: String,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Args, Debug)]
struct ItineraryArgs {
    /// Start point as LAT,LON.
    #[arg(long, allow_hyphen_values = true)]
    from: String,
    /// Destination point as LAT,LON.
    #[arg(long, allow_hyphen_values = true)]
    to: String,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let dataset = cli.dataset.as_deref();

    match cli.command {
        Command::Nearest(args) => handle_nearest(
            dataset,
            &NearestCommandArgs {
                lat: args.lat,
                lon: args.lon,
                format: args.format,
            },
        ),
        Command::Itinerary(args) => handle_itinerary(
            dataset,
            &ItineraryCommandArgs {
                from: args.from,
                to: args.to,
                format: args.format,
            },
        ),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
