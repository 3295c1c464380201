use anyhow::{Context, Result};
use clap::Args;
use mcad_core::geometry::compute_crater_size_checked;
use mcad_core::metadata::parse_camera_position;
use tracing::info;

use crate::summary::print_crater_report;
use crate::Session;

#[derive(Args)]
pub struct ComputeArgs {
    /// Camera position in meters, body-centered: "x, y, z" or "[x, y, z]"
    #[arg(long, allow_hyphen_values = true)]
    pub cam_pos: String,

    /// Crater diameter in pixels
    #[arg(long)]
    pub pixel_diameter: u32,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &ComputeArgs, session: &Session) -> Result<()> {
    let imaging = &session.config.imaging;
    let position = parse_camera_position(&args.cam_pos).context("Invalid --cam-pos")?;

    let report = compute_crater_size_checked(&position, imaging, args.pixel_diameter)?;
    info!(
        altitude_m = report.altitude_m,
        crater_diameter_m = report.crater_diameter_m,
        "computed crater size"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_crater_report(&report, imaging);
    }
    Ok(())
}
