use std::path::Path;

use console::Style;
use phasebin_core::error::InvalidScore;
use phasebin_core::frame::Frame;
use phasebin_core::reference::ReferenceBinarization;
use phasebin_core::search::{SearchConfig, SearchResult, SearchStatus};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_threshold_summary(
    input: &Path,
    frame: &Frame,
    config: &SearchConfig,
    result: &SearchResult,
    otsu: &ReferenceBinarization,
) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Phase Threshold"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(15)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Size"),
        s.value.apply_to(format!("{}x{}", frame.width(), frame.height()))
    );
    println!();

    // Search
    println!("  {}", s.header.apply_to("Search"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Range"),
        s.value.apply_to(format!(
            "{} ({} candidates)",
            config,
            config.candidate_count()
        ))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Mode"),
        s.method.apply_to(if config.parallel { "parallel" } else { "sequential" })
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Evaluated"),
        s.value.apply_to(format!(
            "{}/{} ({} skipped)",
            result.evaluated, result.candidates, result.skipped
        ))
    );
    let status = match result.status {
        SearchStatus::Optimal => s.method.apply_to(result.status.to_string()),
        _ => s.disabled.apply_to(result.status.to_string()),
    };
    println!("    {:<12}{}", s.label.apply_to("Status"), status);
    println!();

    // Results
    println!("  {}", s.header.apply_to("Thresholds"));
    if result.is_degenerate() {
        println!(
            "    {:<12}{} {}",
            s.label.apply_to("Phase"),
            s.value.apply_to(result.threshold),
            s.disabled.apply_to("(fallback, no defined score)")
        );
    } else {
        println!(
            "    {:<12}{} {}",
            s.label.apply_to("Phase"),
            s.value.apply_to(result.threshold),
            s.label.apply_to(format!("(correlation {:.6})", result.score))
        );
    }
    println!(
        "    {:<12}{}",
        s.label.apply_to("Otsu"),
        s.value.apply_to(otsu.threshold)
    );
    println!();
}

pub fn print_candidate_table(result: &SearchResult) {
    println!("{:>10}  {:>12}  {:>12}", "Threshold", "Score", "Best");
    println!("{}", "-".repeat(38));
    for record in &result.history {
        let score = match record.score {
            Ok(v) => format!("{:.6}", v),
            Err(reason) => format!("({})", short_reason(reason)),
        };
        let marker = if record.threshold == result.threshold && record.score.is_ok() {
            " *"
        } else {
            ""
        };
        println!(
            "{:>10}  {:>12}  {:>12.6}{}",
            record.threshold, score, record.best_score, marker
        );
    }
    println!();
}

fn short_reason(reason: InvalidScore) -> &'static str {
    match reason {
        InvalidScore::ZeroVariance => "flat",
        InvalidScore::LengthMismatch { .. } | InvalidScore::ShapeMismatch { .. } => "mismatch",
        InvalidScore::EmptyFrame => "empty",
        InvalidScore::NonFinite => "nan",
    }
}
