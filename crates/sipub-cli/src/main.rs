mod intake;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "sipub-cli")]
#[command(about = "Customer, address and product intake client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse a "lat, long" text the way the geolocation field is parsed
    Coords {
        /// Text to parse, e.g. "-15.79, -47.88"
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Reverse-geocode a point and show the address fields it fills
    Geocode {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
    },
    /// Submit a form snapshot as customer, address and product
    Submit {
        /// YAML form snapshot
        #[arg(long)]
        form: PathBuf,
        /// Click the map at this latitude before submitting
        #[arg(long, allow_negative_numbers = true, requires = "lng")]
        lat: Option<f64>,
        /// Click the map at this longitude before submitting
        #[arg(long, allow_negative_numbers = true, requires = "lat")]
        lng: Option<f64>,
        /// Push the selected location into the form after the click
        #[arg(long, requires = "lat")]
        push: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = sipub_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(env = %config.env, api = %config.api_base_url, "sipub-cli starting");

    match cli.command {
        Commands::Coords { text } => {
            intake::run_coords(&text);
            Ok(())
        }
        Commands::Geocode { lat, lng } => intake::run_geocode(&config, lat, lng).await,
        Commands::Submit {
            form,
            lat,
            lng,
            push,
        } => {
            let click = lat.zip(lng);
            intake::run_submit(&config, &form, click, push).await
        }
    }
}
