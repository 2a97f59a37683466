use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;

#[derive(Parser)]
#[command(name = "smufl2svg", version)]
#[command(about = "Split a SMuFL SVG font into per-glyph SVG files and an index.html")]
struct Cli {
    /// SVG font to read
    input: PathBuf,
    /// Directory for the glyph SVG files (created if missing)
    output_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let summary = smufl2svg::run(&cli.input, &cli.output_dir)
        .with_context(|| format!("Failed to convert {}", cli.input.display()))?;

    log::info!(
        "Done: {} written, {} duplicates, skipped {} incomplete, {} unresolved, {} by class, {} by stopword",
        summary.written,
        summary.duplicate_paths,
        summary.skipped_incomplete,
        summary.skipped_unresolved,
        summary.skipped_class,
        summary.skipped_stopword
    );
    log::debug!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
