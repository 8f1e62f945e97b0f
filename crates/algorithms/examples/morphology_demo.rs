//! Morphology demo: synthetic page cleanup pipeline
//!
//! Generates a 200x200 synthetic grayscale "page" with:
//! - Bright paper background (value 200)
//! - Dark ring-shaped glyphs (value 40) with hollow centers
//! - A dark bar (value 40)
//! - Salt noise (single bright pixels, value 255) inside the glyphs
//! - Pepper noise (single dark pixels, value 10) on the paper
//!
//! Then runs the full pipeline and writes each stage as PNG:
//!   1. original.png   - the synthetic input
//!   2. enhanced.png   - original + 2 * top-hat - 3 * bottom-hat
//!   3. binary.png     - inverted binarization (ink becomes 255)
//!   4. majority.png   - 5-of-8 majority denoise
//!   5. opened.png     - opening of the binary mask
//!   6. closed.png     - closing of the binary mask
//!   7. filled.png     - hole filling of the denoised mask
//!
//! Run:
//!   cargo run -p morphkit-algorithms --example morphology_demo

use std::fs;
use std::path::Path;

use morphkit_algorithms::fill::fill_holes;
use morphkit_algorithms::labeling::{label, FOREGROUND_TAG};
use morphkit_algorithms::majority::majority;
use morphkit_algorithms::morphology::{closing, enhance, opening, StructuringElement};
use morphkit_algorithms::threshold::{binarize, DEFAULT_THRESHOLD};
use morphkit_core::io::write_image;
use morphkit_core::Raster;

const ROWS: usize = 200;
const COLS: usize = 200;
const PAPER: u8 = 200;
const INK: u8 = 40;

fn main() {
    let out_dir = Path::new("output/morphology_demo");
    fs::create_dir_all(out_dir).expect("Cannot create output directory");

    // --- 1. Build synthetic page ---
    let input = build_synthetic_page();
    println!("Synthetic page: {}x{}", COLS, ROWS);
    print_stats("  input", &input);
    save(out_dir, "original.png", &input);

    // --- 2. Contrast enhancement ---
    let se = StructuringElement::ellipse(7).expect("valid size");
    println!("\nStructuring element: Ellipse(7)");
    let enhanced = enhance(&input, &se).expect("enhance failed");
    print_stats("  enhanced", &enhanced);
    save(out_dir, "enhanced.png", &enhanced);

    // --- 3. Binarization (ink -> 255) ---
    let binary = binarize(&input, DEFAULT_THRESHOLD).expect("binarize failed");
    print_stats("  binary", &binary);
    save(out_dir, "binary.png", &binary);

    // --- 4. Majority denoise ---
    let denoised = majority(&binary, 0).expect("majority failed");
    print_stats("  majority", &denoised);
    save(out_dir, "majority.png", &denoised);

    // --- 5. Opening / closing on the mask ---
    let small = StructuringElement::Rect(3);
    let opened = opening(&binary, &small).expect("opening failed");
    print_stats("  opened", &opened);
    save(out_dir, "opened.png", &opened);

    let closed = closing(&binary, &small).expect("closing failed");
    print_stats("  closed", &closed);
    save(out_dir, "closed.png", &closed);

    // --- 6. Hole filling ---
    let filled = fill_holes(&closed).expect("fill_holes failed");
    print_stats("  filled", &filled);
    save(out_dir, "filled.png", &filled);

    println!("\n7 PNG files written to {}/", out_dir.display());

    // --- 7. Component summary ---
    let before = label(&closed).expect("label failed");
    let after = label(&filled).expect("label failed");
    println!("\n--- Components ---");
    println!(
        "  closed:  {} foreground, {} background",
        before.by_tag(FOREGROUND_TAG).len(),
        before.background.len()
    );
    println!(
        "  filled:  {} foreground, {} background (holes absorbed)",
        after.by_tag(FOREGROUND_TAG).len(),
        after.background.len()
    );
}

/// Build a 200x200 synthetic page with hollow glyphs and noise.
fn build_synthetic_page() -> Raster<u8> {
    let mut img = Raster::filled(ROWS, COLS, PAPER);

    // Ring glyphs: outer radius 14, inner radius 7, on a 4x4 grid
    for gy in 0..4 {
        for gx in 0..4 {
            let cy = 30.0 + gy as f64 * 40.0;
            let cx = 30.0 + gx as f64 * 40.0;
            for r in 0..ROWS {
                for c in 0..COLS {
                    let d = ((r as f64 - cy).powi(2) + (c as f64 - cx).powi(2)).sqrt();
                    if (7.0..=14.0).contains(&d) {
                        img.set(r, c, INK).unwrap();
                    }
                }
            }
        }
    }

    // Underline bar
    for r in 185..190 {
        for c in 10..190 {
            img.set(r, c, INK).unwrap();
        }
    }

    // Salt noise: deterministic positions from a simple LCG
    let mut seed: u64 = 42;
    for _ in 0..80 {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        let r = ((seed >> 33) as usize) % ROWS;
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        let c = ((seed >> 33) as usize) % COLS;
        if img.get(r, c).unwrap() == INK {
            img.set(r, c, 255).unwrap();
        }
    }

    // Pepper noise
    seed = 137;
    for _ in 0..80 {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        let r = ((seed >> 33) as usize) % ROWS;
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        let c = ((seed >> 33) as usize) % COLS;
        img.set(r, c, 10).unwrap();
    }

    img
}

fn print_stats(label: &str, raster: &Raster<u8>) {
    let s = raster.statistics();
    println!(
        "{:<12} min={:>4}  max={:>4}  mean={:>6.1}  nonzero={:>6}",
        label,
        s.min.unwrap_or(0),
        s.max.unwrap_or(0),
        s.mean.unwrap_or(f64::NAN),
        s.nonzero_count,
    );
}

fn save(dir: &Path, name: &str, raster: &Raster<u8>) {
    let path = dir.join(name);
    write_image(raster, &path, None)
        .unwrap_or_else(|e| panic!("Failed to write {}: {}", path.display(), e));
}
