use clap::Parser;
use std::path::PathBuf;
use topo_tpg::tpg::{DEFAULT_DATUM, Options};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
struct Cli {
    /// Path to the TPG file
    input: PathBuf,

    /// Datum the file coordinates are stored in
    #[arg(long, default_value = DEFAULT_DATUM)]
    datum: String,

    /// Number of waypoints to print
    #[arg(long, default_value_t = 5)]
    limit: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = Options {
        datum: cli.datum,
        ..Default::default()
    };

    let waypoints = topo_tpg::tpg::read_path(&cli.input, &options)?;

    println!("Datum: {}", options.datum);
    println!("Waypoints: {}", waypoints.len());

    println!();
    println!("First {} waypoints:", cli.limit);
    for (i, waypoint) in waypoints.iter().take(cli.limit).enumerate() {
        println!(
            "  [{}] {:?} lat={:.6} lon={:.6} alt={:.1}m desc={:?}",
            i,
            waypoint.short_name,
            waypoint.latitude,
            waypoint.longitude,
            waypoint.altitude,
            waypoint.description
        );
    }

    Ok(())
}
