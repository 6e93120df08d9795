use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use phasebin_core::io::load_gray;
use phasebin_core::reference::otsu_threshold;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let frame = load_gray(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let stats = frame.intensity_stats();

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", frame.width(), frame.height());
    println!("Intensity:   min {}, max {}, mean {:.2}", stats.min, stats.max, stats.mean);
    println!("Otsu:        {}", otsu_threshold(&frame));

    Ok(())
}
