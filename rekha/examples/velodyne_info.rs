//! Raw Record File Inspector
//!
//! Reads a Velodyne-style record file, projects it onto the plane through
//! the configured mount transform, and prints summary statistics.
//!
//! Usage:
//!   cargo run --example velodyne_info -- --input scan.bin
//!   cargo run --example velodyne_info -- -i scan.bin --byte-order big --angle 90

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use rekha::cloud::velodyne::{read_records, records_to_cloud};
use rekha::{ByteOrder, RekhaConfig, RigidTransform2D};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OrderArg {
    Little,
    Big,
    Native,
}

impl From<OrderArg> for ByteOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Little => ByteOrder::Little,
            OrderArg::Big => ByteOrder::Big,
            OrderArg::Native => ByteOrder::Native,
        }
    }
}

/// Summarize a raw record file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Record file to read
    #[arg(short, long)]
    input: PathBuf,

    /// Configuration file path (default: configs/rekha.yaml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured byte order
    #[arg(long, value_enum)]
    byte_order: Option<OrderArg>,

    /// Extra rotation (degrees) applied after the mount transform
    #[arg(long, default_value = "0.0")]
    angle: f64,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => RekhaConfig::load(path)?,
        None => RekhaConfig::load_default()?,
    };

    let order = args
        .byte_order
        .map(ByteOrder::from)
        .unwrap_or(config.velodyne.byte_order);
    let records = read_records(&args.input, order)?;
    log::info!("{} records ({:?} endian)", records.len(), order);

    let transform = RigidTransform2D::from_angle(args.angle) * config.mount_transform()?;
    let cloud = records_to_cloud(&records).transform(&transform);

    println!("File:       {}", args.input.display());
    println!("Records:    {}", records.len());
    println!(
        "Transform:  {:.2} deg, ({:.3}, {:.3})",
        transform.angle(),
        transform.translation().x,
        transform.translation().y
    );
    if let (Some((min, max)), Some(centroid)) = (cloud.bounds(), cloud.centroid()) {
        println!(
            "Bounds:     ({:.3}, {:.3}) .. ({:.3}, {:.3})",
            min.x, min.y, max.x, max.y
        );
        println!("Centroid:   ({:.3}, {:.3})", centroid.x, centroid.y);
    }
    if !records.is_empty() {
        let mean_reflectance =
            records.iter().map(|r| r.reflectance as f64).sum::<f64>() / records.len() as f64;
        println!("Reflectance mean: {:.3}", mean_reflectance);
    }

    Ok(())
}
