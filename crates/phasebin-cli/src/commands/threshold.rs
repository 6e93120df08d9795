use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use phasebin_core::io::{load_gray, save_image};
use phasebin_core::reference::otsu_binarize;
use phasebin_core::search::{search_threshold_controlled, SearchConfig, SearchControl};
use tracing::{debug, info};

use crate::progress::BarReporter;
use crate::summary::{print_candidate_table, print_threshold_summary};

#[derive(Args)]
pub struct ThresholdArgs {
    /// Input image file (any format the image crate decodes; converted to 8-bit gray)
    pub file: PathBuf,

    /// Search config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Lowest candidate threshold (inclusive)
    #[arg(long)]
    pub low: Option<i32>,

    /// Upper bound of the candidates (exclusive)
    #[arg(long)]
    pub high: Option<i32>,

    /// Distance between candidate thresholds
    #[arg(long)]
    pub step: Option<i32>,

    /// Threshold reported when no candidate has a defined score
    #[arg(long)]
    pub fallback: Option<i32>,

    /// Evaluate candidates on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// Stop after this many milliseconds and report the best result so far
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Print the score of every candidate
    #[arg(long)]
    pub table: bool,

    /// Write the phase-binarized image here
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the Otsu-binarized image here
    #[arg(long)]
    pub otsu_output: Option<PathBuf>,
}

pub fn run(args: &ThresholdArgs) -> Result<()> {
    let config = build_config(args)?;

    let frame = load_gray(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    info!(
        file = %args.file.display(),
        width = frame.width(),
        height = frame.height(),
        "Image loaded"
    );

    let control = match args.timeout_ms {
        Some(ms) => SearchControl::default().with_timeout(Duration::from_millis(ms)),
        None => SearchControl::default(),
    };
    let reporter = BarReporter::new()?;
    let result = search_threshold_controlled(&frame, &config, &control, &reporter)?;
    let otsu = otsu_binarize(&frame);

    print_threshold_summary(&args.file, &frame, &config, &result, &otsu);
    if args.table {
        print_candidate_table(&result);
    }

    if let Some(ref path) = args.output {
        save_image(&result.binarized, path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Phase binarization saved to {}", path.display());
    }
    if let Some(ref path) = args.otsu_output {
        save_image(&otsu.binarized, path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Otsu binarization saved to {}", path.display());
    }

    Ok(())
}

/// Config file (or defaults), then individual flags on top.
fn build_config(args: &ThresholdArgs) -> Result<SearchConfig> {
    let mut config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid search config")?
    } else {
        SearchConfig::default()
    };

    if let Some(low) = args.low {
        config.low = low;
    }
    if let Some(high) = args.high {
        config.high = high;
    }
    if let Some(step) = args.step {
        config.step = step;
    }
    if let Some(fallback) = args.fallback {
        config.fallback_threshold = fallback;
    }
    if args.sequential {
        config.parallel = false;
    }

    config.validate()?;
    debug!(?config, "Resolved search config");
    Ok(config)
}
