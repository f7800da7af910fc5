//! pair_demo — find the card grid in a screenshot and print the groups.

use clap::Parser;
use pairgrid::config::analyze::{load_config, OutputConfig, RuntimeConfig};
use pairgrid::image::io::{load_rgb_image, save_rgb_image, write_json_file};
use pairgrid::overlay::render_overlay;
use pairgrid::{AnalysisReport, Analyzer, AnalyzerParams, GridShape};
use std::path::PathBuf;

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "pair_demo")]
#[command(about = "Detect a grid of cards in a screenshot and group identical cards")]
#[command(version)]
struct Cli {
    /// Path to the screenshot (PNG, JPEG, ...).
    #[arg(long)]
    image: Option<PathBuf>,

    /// Grid as ROWSxCOLS, e.g. 6x5.
    #[arg(long)]
    grid: Option<GridShape>,

    /// JSON run config; command-line flags override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the full diagnostics report (JSON).
    #[arg(long)]
    json_out: Option<PathBuf>,

    /// Write a debug image with outlines and group markers.
    #[arg(long)]
    overlay_out: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = resolve_config(cli)?;

    let image = load_rgb_image(&config.input_path)?;
    let analyzer = Analyzer::new(config.params.clone());
    let report = analyzer.analyze_with_diagnostics(&image, config.grid)?;
    print_text_summary(&report);

    if let Some(path) = &config.output.json_out {
        write_json_file(path, &report)?;
        println!("\nJSON report written to {}", path.display());
    }
    if let Some(path) = &config.output.overlay_out {
        save_rgb_image(&render_overlay(&image, &report.cards), path)?;
        println!("Overlay written to {}", path.display());
    }
    Ok(())
}

fn resolve_config(cli: Cli) -> CliResult<RuntimeConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => {
            let input_path = cli.image.clone().ok_or("either --image or --config is required")?;
            let grid = cli.grid.ok_or("either --grid or --config is required")?;
            RuntimeConfig {
                input_path,
                grid,
                output: OutputConfig::default(),
                params: AnalyzerParams::default(),
            }
        }
    };
    if let Some(image) = cli.image {
        config.input_path = image;
    }
    if let Some(grid) = cli.grid {
        config.grid = grid;
    }
    if cli.json_out.is_some() {
        config.output.json_out = cli.json_out;
    }
    if cli.overlay_out.is_some() {
        config.output.overlay_out = cli.overlay_out;
    }
    Ok(config)
}

fn print_text_summary(report: &AnalysisReport) {
    let trace = &report.trace;
    println!("Analysis summary");
    println!(
        "  input: {}x{} (working {}x{}), grid {}",
        trace.input.width,
        trace.input.height,
        trace.input.working_width,
        trace.input.working_height,
        trace.input.grid
    );
    println!(
        "  blobs: {} ({} significant, {} noise components)",
        trace.segmentation.blobs.len(),
        trace.segmentation.significant_blobs,
        trace.segmentation.noise_components
    );
    if let Some(roi) = &trace.roi_refinement {
        println!(
            "  roi refinement: frame {:?} -> {} blobs",
            roi.frame,
            roi.blobs.len()
        );
    }
    println!(
        "  filter: kept={}/{} aspect_rejects={} area_rejects={} excess={}",
        trace.filter.kept,
        trace.filter.candidates,
        trace.filter.rejected_aspect,
        trace.filter.rejected_area,
        trace.filter.dropped_excess
    );
    println!("  ordering: {:?}", trace.ordering.path);

    println!("\nCards");
    for (i, card) in report.cards.iter().enumerate() {
        let r = card.region;
        println!(
            "  #{i:<2} [{}, {}, {}, {}] {}x{} group={}",
            r.left,
            r.top,
            r.right,
            r.bottom,
            r.width(),
            r.height(),
            card.group_id
        );
    }
    println!(
        "\nGroups: {} pairs, {} singletons, sizes {:?}",
        report.pair_count(),
        trace.matching.singletons,
        report.group_sizes()
    );

    let stages: Vec<String> = trace
        .timings
        .stages
        .iter()
        .map(|s| format!("{}={:.3}", s.label, s.elapsed_ms))
        .collect();
    println!(
        "Timings (ms): {} total={:.3}",
        stages.join(" "),
        trace.timings.total_ms
    );
    if let Some(ms) = trace.timings.stage_ms("matching") {
        let share = if trace.timings.total_ms > 0.0 {
            100.0 * ms / trace.timings.total_ms
        } else {
            0.0
        };
        println!("Matching share: {share:.1}%");
    }
}
