use anyhow::Result;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use mcad_core::batch::measure_folder_with_progress;

use crate::summary::print_batch_table;
use crate::Session;

#[derive(Args)]
pub struct BatchArgs {
    /// Folder name, e.g. "Folder 001"
    pub folder: String,

    /// Crater diameter in pixels
    #[arg(long)]
    pub pixel_diameter: u32,

    /// Print the results as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &BatchArgs, session: &Session) -> Result<()> {
    let catalog = session.catalog()?;

    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("Measuring [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    if args.json {
        pb.set_draw_target(indicatif::ProgressDrawTarget::hidden());
    }

    let entries = measure_folder_with_progress(
        &catalog,
        &args.folder,
        &session.config.imaging,
        args.pixel_diameter,
        |done, total| {
            pb.set_length(total as u64);
            pb.set_position(done as u64);
        },
    )?;
    pb.finish_and_clear();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        print_batch_table(&args.folder, &entries);
    }
    Ok(())
}
