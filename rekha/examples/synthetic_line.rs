//! Synthetic Line Generator
//!
//! Samples points on random lines through the unit square, reports how far
//! the noisy samples stray from the true line, and optionally writes the
//! last cloud as a raw record file.
//!
//! Usage:
//!   cargo run --example synthetic_line -- --lines 5 --sigma 0.01
//!   cargo run --example synthetic_line -- -c configs/rekha.yaml -o /tmp/line.bin

use std::path::PathBuf;

use clap::Parser;

use rekha::cloud::velodyne::save_records;
use rekha::{line_cloud, Line2D, RekhaConfig, VelodyneRecord};

/// Generate noisy points on random lines
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path (default: configs/rekha.yaml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of lines to generate
    #[arg(short, long, default_value = "3")]
    lines: usize,

    /// Override the configured noise sigma
    #[arg(long)]
    sigma: Option<f64>,

    /// Write the last cloud as raw records
    #[arg(short, long)]
    output: Option<PathBuf>,
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
    let mut config = match &args.config {
        Some(path) => RekhaConfig::load(path)?,
        None => RekhaConfig::load_default()?,
    };
    if let Some(sigma) = args.sigma {
        config.synthetic.noise_sigma = sigma;
        config.validate()?;
    }

    let sampler = config.line_sampler_config();
    let mut noise = config.noise_generator();
    log::info!(
        "Sampling {} lines, {} points each, sigma = {}",
        args.lines,
        sampler.samples,
        sampler.noise_sigma
    );

    let mut last = None;
    for i in 0..args.lines {
        let sampled = line_cloud(&sampler, &mut noise)?;
        let worst = sampled.cloud.max_distance_to_line(&sampled.line).unwrap_or(0.0);
        let description = match sampled.line {
            Line2D::Oblique { slope, intercept } => {
                format!("y = {:.4}x + {:.4}", slope, intercept)
            }
            Line2D::Vertical { x } => format!("x = {:.4}", x),
        };
        println!("line {:>3}: {:<28} max residual {:.6}", i, description, worst);
        last = Some(sampled);
    }

    if let (Some(path), Some(sampled)) = (&args.output, last) {
        let records: Vec<VelodyneRecord> = sampled
            .cloud
            .iter()
            .map(|p| VelodyneRecord::new(p.x as f32, p.y as f32, 0.0, 1.0))
            .collect();
        save_records(path, &records, config.velodyne.byte_order)?;
        log::info!("Wrote {} records to {}", records.len(), path.display());
    }

    Ok(())
}
