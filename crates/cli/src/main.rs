//! morphkit CLI - grayscale image morphology from the command line

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use morphkit_algorithms::fill::fill_holes;
use morphkit_algorithms::labeling::{label, Component, BACKGROUND_TAG, FOREGROUND_TAG};
use morphkit_algorithms::majority::majority;
use morphkit_algorithms::morphology::{
    bottom_hat, closing, dilate, enhance, erode, opening, top_hat, StructuringElement,
    TOP_HAT_PRESET_SIZE,
};
use morphkit_algorithms::threshold::{binarize, DEFAULT_THRESHOLD};
use morphkit_core::io::{read_image, write_image};
use morphkit_core::Raster;

// ─── CLI structure ──────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "morphkit")]
#[command(author, version, about = "Grayscale image morphology", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Input and output image paths
#[derive(Args)]
struct Io {
    /// Input image (any format the decoder understands; converted to 8-bit gray)
    input: PathBuf,
    /// Output image; format follows the extension
    output: PathBuf,
}

/// Structuring element selection
#[derive(Args)]
struct Kernel {
    /// Side length of the structuring element (positive, odd)
    #[arg(short, long, default_value_t = 3, value_parser = parse_size)]
    size: usize,
    /// Structuring element shape: ellipse, rect, cross
    #[arg(long, default_value = "ellipse")]
    shape: String,
}

/// Structuring element selection defaulting to the top-hat preset size
#[derive(Args)]
struct HatKernel {
    /// Side length of the structuring element (positive, odd)
    #[arg(short, long, default_value_t = TOP_HAT_PRESET_SIZE, value_parser = parse_size)]
    size: usize,
    /// Structuring element shape: ellipse, rect, cross
    #[arg(long, default_value = "ellipse")]
    shape: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Show information about an image
    Info {
        /// Input image
        input: PathBuf,
    },
    /// Erosion (minimum filter)
    Erode {
        #[command(flatten)]
        io: Io,
        #[command(flatten)]
        kernel: Kernel,
        /// Value assumed beyond the image edge
        #[arg(short, long, default_value_t = 0)]
        background: u8,
    },
    /// Dilation (maximum filter)
    Dilate {
        #[command(flatten)]
        io: Io,
        #[command(flatten)]
        kernel: Kernel,
        /// Value assumed beyond the image edge
        #[arg(short, long, default_value_t = 0)]
        background: u8,
    },
    /// Opening (erosion then dilation): removes small bright features
    Open {
        #[command(flatten)]
        io: Io,
        #[command(flatten)]
        kernel: Kernel,
    },
    /// Closing (dilation then erosion): removes small dark features
    Close {
        #[command(flatten)]
        io: Io,
        #[command(flatten)]
        kernel: Kernel,
    },
    /// Top-hat transform (original - opening): bright feature extraction
    TopHat {
        #[command(flatten)]
        io: Io,
        #[command(flatten)]
        kernel: HatKernel,
    },
    /// Bottom-hat transform (closing - original): dark feature extraction
    BottomHat {
        #[command(flatten)]
        io: Io,
        #[command(flatten)]
        kernel: Kernel,
    },
    /// Contrast enhancement: original + 2 * top-hat - 3 * bottom-hat
    Enhance {
        #[command(flatten)]
        io: Io,
        #[command(flatten)]
        kernel: HatKernel,
    },
    /// Inverted binarization: pixels >= threshold become 0, others 255
    Binarize {
        #[command(flatten)]
        io: Io,
        /// Threshold intensity
        #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: u8,
    },
    /// Fill holes enclosed by foreground regions
    FillHoles {
        #[command(flatten)]
        io: Io,
    },
    /// Majority filter: on when at least 5 of 8 neighbors are nonzero
    Majority {
        #[command(flatten)]
        io: Io,
        /// Value assumed beyond the image edge
        #[arg(short, long, default_value_t = 0)]
        background: u8,
    },
    /// Label 4-connected equal-value regions and summarize them
    Label {
        /// Input image
        input: PathBuf,
        /// Number of largest components listed per tag
        #[arg(short, long, default_value_t = 5)]
        top: usize,
    },
}

// ─── Helpers ────────────────────────────────────────────────────────────

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")
}

fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn read_input(path: &Path) -> Result<Raster<u8>> {
    let pb = spinner("Reading image...");
    let raster = read_image(path)
        .with_context(|| format!("Failed to read image {}", path.display()))?;
    pb.finish_and_clear();
    info!("Input: {} x {}", raster.cols(), raster.rows());
    Ok(raster)
}

fn write_output(raster: &Raster<u8>, path: &Path) -> Result<()> {
    let pb = spinner("Writing output...");
    write_image(raster, path, None)
        .with_context(|| format!("Failed to write image {}", path.display()))?;
    pb.finish_and_clear();
    Ok(())
}

fn done(name: &str, path: &Path, elapsed: std::time::Duration) {
    println!("{} saved to: {}", name, path.display());
    println!("  Processing time: {:.2?}", elapsed);
}

/// Kernel sizes must be positive and odd before they reach the engine
fn parse_size(s: &str) -> std::result::Result<usize, String> {
    let size: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("`{}` is not a positive integer", s))?;
    if size == 0 || size % 2 == 0 {
        return Err(format!("kernel size must be a positive odd number, got {}", size));
    }
    Ok(size)
}

fn parse_se(shape: &str, size: usize) -> Result<StructuringElement> {
    let se = match shape.to_lowercase().as_str() {
        "ellipse" | "disk" | "circle" => StructuringElement::Ellipse(size),
        "rect" | "square" | "sq" => StructuringElement::Rect(size),
        "cross" | "cr" => StructuringElement::Cross(size),
        _ => anyhow::bail!("Unknown shape: {}. Use ellipse, rect, or cross.", shape),
    };
    se.validate()
        .map_err(|e| anyhow::anyhow!("Invalid structuring element: {}", e))?;
    Ok(se)
}

/// Read, transform, write and report one grid-to-grid operation
fn run<F>(name: &str, io: &Io, op: F) -> Result<()>
where
    F: FnOnce(&Raster<u8>) -> morphkit_core::Result<Raster<u8>>,
{
    let raster = read_input(&io.input)?;
    let start = Instant::now();
    let result = op(&raster).with_context(|| format!("{} failed", name))?;
    let elapsed = start.elapsed();
    write_output(&result, &io.output)?;
    done(name, &io.output, elapsed);
    Ok(())
}

fn describe(component: &Component) -> String {
    match component.bounding_box() {
        Some((r0, c0, r1, c1)) => format!(
            "{} px, rows {}..={}, cols {}..={}",
            component.size, r0, r1, c0, c1
        ),
        None => format!("{} px", component.size),
    }
}

// ─── Main ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    match cli.command {
        // ── Info ─────────────────────────────────────────────────────
        Commands::Info { input } => {
            let raster = read_input(&input)?;
            let (rows, cols) = raster.shape();
            let stats = raster.statistics();

            println!("File: {}", input.display());
            println!("Dimensions: {} x {} ({} pixels)", cols, rows, raster.len());
            println!("\nStatistics:");
            if let Some(min) = stats.min {
                println!("  Min: {}", min);
            }
            if let Some(max) = stats.max {
                println!("  Max: {}", max);
            }
            if let Some(mean) = stats.mean {
                println!("  Mean: {:.4}", mean);
            }
            if !raster.is_empty() {
                println!(
                    "  Nonzero pixels: {} ({:.1}%)",
                    stats.nonzero_count,
                    100.0 * stats.nonzero_count as f64 / raster.len() as f64
                );
            }
        }

        // ── Morphology ───────────────────────────────────────────────
        Commands::Erode { io, kernel, background } => {
            let se = parse_se(&kernel.shape, kernel.size)?;
            run("Erosion", &io, |r| erode(r, &se, background))?;
        }
        Commands::Dilate { io, kernel, background } => {
            let se = parse_se(&kernel.shape, kernel.size)?;
            run("Dilation", &io, |r| dilate(r, &se, background))?;
        }
        Commands::Open { io, kernel } => {
            let se = parse_se(&kernel.shape, kernel.size)?;
            run("Opening", &io, |r| opening(r, &se))?;
        }
        Commands::Close { io, kernel } => {
            let se = parse_se(&kernel.shape, kernel.size)?;
            run("Closing", &io, |r| closing(r, &se))?;
        }
        Commands::TopHat { io, kernel } => {
            let se = parse_se(&kernel.shape, kernel.size)?;
            run("Top-hat", &io, |r| top_hat(r, &se))?;
        }
        Commands::BottomHat { io, kernel } => {
            let se = parse_se(&kernel.shape, kernel.size)?;
            run("Bottom-hat", &io, |r| bottom_hat(r, &se))?;
        }
        Commands::Enhance { io, kernel } => {
            let se = parse_se(&kernel.shape, kernel.size)?;
            run("Enhanced", &io, |r| enhance(r, &se))?;
        }

        // ── Binary ───────────────────────────────────────────────────
        Commands::Binarize { io, threshold } => {
            run("Binary", &io, |r| binarize(r, threshold))?;
        }
        Commands::FillHoles { io } => {
            run("Filled", &io, fill_holes)?;
        }
        Commands::Majority { io, background } => {
            run("Majority", &io, |r| majority(r, background))?;
        }

        // ── Labeling ─────────────────────────────────────────────────
        Commands::Label { input, top } => {
            let raster = read_input(&input)?;
            let start = Instant::now();
            let components = label(&raster).context("Labeling failed")?;
            let elapsed = start.elapsed();

            println!("File: {}", input.display());
            println!("Components: {}", components.len());
            for (name, tag) in [("Background", BACKGROUND_TAG), ("Foreground", FOREGROUND_TAG)] {
                let set = components.by_tag(tag);
                println!("\n{} (tag {}): {} components", name, tag, set.len());
                for (rank, component) in set.iter().rev().take(top).enumerate() {
                    println!("  #{:<3} {}", rank + 1, describe(component));
                }
            }
            println!("\n  Processing time: {:.2?}", elapsed);
        }
    }

    Ok(())
}
