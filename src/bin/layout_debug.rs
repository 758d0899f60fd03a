//! Debug tool to preview where each line of text lands
//! Run with: cargo run --bin layout_debug -- input.pdf

use std::path::PathBuf;

use anyhow::{Context, Result};
use pdf_text_compress::config::Settings;
use pdf_text_compress::extract_file;
use pdf_text_compress::render::{Paginator, RecordingCanvas};

fn main() -> Result<()> {
    let input = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .context("Usage: layout_debug <input.pdf>")?;

    let settings = Settings::default();
    let geometry = settings.geometry();

    let pages = extract_file(&input)
        .with_context(|| format!("Failed to extract text from {}", input.display()))?;

    let mut canvas = RecordingCanvas::with_builtin_metrics();
    let summary = Paginator::new(geometry).run(&mut canvas, &pages);

    println!("=== Layout Debug ===");
    println!(
        "Page: {}x{} mm, usable width: {:.2} mm",
        geometry.page_width,
        geometry.page_height,
        geometry.usable_width()
    );
    println!(
        "Baselines: top {:.2} mm, bottom {:.2} mm, line height {:.2} mm ({} lines per page)",
        geometry.top(),
        geometry.bottom(),
        geometry.line_height(),
        geometry.lines_per_page()
    );
    println!(
        "{} source pages -> {} pages, {} lines",
        summary.source_pages, summary.destination_pages, summary.lines_drawn
    );

    let measurer = pdf_text_compress::render::get_builtin_measurer(geometry.font);
    let mut current_page = None;
    for line in canvas.lines() {
        if current_page != Some(line.page) {
            println!();
            println!("--- Page {} ---", line.page + 1);
            current_page = Some(line.page);
        }
        println!(
            "y={:7.2} w={:7.2} | {}",
            line.y,
            measurer.measure_width_mm(&line.text, geometry.font_size),
            line.text
        );
    }

    Ok(())
}
