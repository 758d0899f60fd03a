use anyhow::{Context, Result};
use clap::Parser;

use pdf_text_compress::cli::Args;
use pdf_text_compress::config::Settings;
use pdf_text_compress::report::{file_size, format_mb};
use pdf_text_compress::{convert_file_with, validate_input, ConvertError};

fn main() -> Result<()> {
    // Usage errors exit with 1; --help and --version exit with 0
    let args = Args::try_parse().unwrap_or_else(|e| {
        let code = if e.use_stderr() { 1 } else { 0 };
        let _ = e.print();
        std::process::exit(code);
    });

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    validate_input(&args.input)?;

    let settings = Settings::from_args(&args);
    settings.validate()?;

    let output_path = args.output_path();
    let original_size = file_size(&args.input)
        .with_context(|| format!("Failed to read input file: {}", args.input.display()))?;

    println!("Input PDF: {}", args.input.display());
    println!("Original size: {}", format_mb(original_size));
    println!();

    let result = convert_file_with(&args.input, &output_path, &settings, |progress| {
        println!("{}", progress)
    });
    let summary = match result {
        Ok(summary) => summary,
        Err(ConvertError::NoText) => {
            eprintln!("Warning: {}", ConvertError::NoText);
            std::process::exit(1);
        }
        Err(ConvertError::Extract(e)) => {
            return Err(e).context("Failed to extract text from PDF");
        }
        Err(ConvertError::Render(e)) => {
            return Err(e).context("Failed to create text-only PDF");
        }
        Err(e) => return Err(e.into()),
    };

    log::info!(
        "Wrote {} pages ({} lines) for {} source pages",
        summary.layout.destination_pages,
        summary.layout.lines_drawn,
        summary.layout.source_pages
    );

    println!("Text-only PDF created: {}", output_path.display());
    println!();
    println!("Output PDF: {}", output_path.display());
    println!("{}", summary.sizes);
    println!();
    println!("Compression complete!");

    Ok(())
}
