use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use represent::{
    ApiConfig, CivicInfoClient, Coordinate, GeocodingService, GoogleGeocodingClient,
    LookupRepresentativesUseCase, Official, RepresentativeReport, ResolveDistrictUseCase,
};

#[derive(Parser)]
#[command(name = "represent")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve an address to latitude/longitude
    Geocode {
        address: String,
    },

    /// Resolve a coordinate pair back to a postal address
    Reverse {
        #[arg(allow_negative_numbers = true)]
        latitude: f64,

        #[arg(allow_negative_numbers = true)]
        longitude: f64,
    },

    /// Look up the federal delegation for an address
    Lookup {
        address: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = ApiConfig::from_env().context("provider configuration is incomplete")?;

    match cli.command {
        Commands::Geocode { address } => {
            let geocoding = Arc::new(GoogleGeocodingClient::new(&config));
            let use_case = ResolveDistrictUseCase::new(geocoding);

            let resolved = use_case.execute(&address).await?;
            println!(
                "{} -> {}",
                resolved.coordinate(),
                resolved.formatted_address()
            );
        }

        Commands::Reverse {
            latitude,
            longitude,
        } => {
            let geocoding = GoogleGeocodingClient::new(&config);
            let address = geocoding
                .resolve_address(&Coordinate::new(latitude, longitude))
                .await?;
            println!("{address}");
        }

        Commands::Lookup { address } => {
            let civic = Arc::new(CivicInfoClient::new(&config));
            let use_case = LookupRepresentativesUseCase::new(civic);

            let report = use_case.execute(&address).await?;
            print_report(&report)?;
        }
    }

    Ok(())
}

fn print_report(report: &RepresentativeReport) -> Result<()> {
    println!(
        "{}, {}",
        report.normalized_city(),
        report.normalized_state()
    );

    print_bucket("U.S. Senators", report.senators())?;
    print_bucket("U.S. Representatives", report.representatives())?;

    Ok(())
}

fn print_bucket(heading: &str, officials: &[Official]) -> Result<()> {
    if officials.is_empty() {
        return Ok(());
    }

    println!("{heading}");
    for official in officials {
        println!("   {}", official.display_line()?);
    }

    Ok(())
}
