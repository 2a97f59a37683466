//! smufl2svg — split a SMuFL SVG font into one SVG file per glyph, plus an
//! HTML index grouping the glyphs by SMuFL class.
//!
//! Glyph names, descriptions and classes come from the SMuFL metadata files
//! `glyphnames.json` and `classes.json`.
//!
//! Input fonts must be UTF-8 (a leading BOM is accepted). Documents in other
//! encodings, such as UTF-16 or ISO-8859-1, are rejected with [`Error::Utf8`].
//!
//! # Example
//! ```no_run
//! use smufl2svg::{convert, Config, Metadata};
//!
//! let metadata = Metadata::load_dir("metadata").unwrap();
//! let summary = convert("Bravura.svg", "glyphs", &metadata, &Config::default()).unwrap();
//! println!("Wrote {} glyphs", summary.written);
//! ```

pub mod config;
pub mod error;
pub mod metadata;
pub mod model;
pub mod parser;
pub mod renderer;
pub mod resolver;
pub mod viewport;

use std::{collections::HashSet, fs, path::Path};

pub use config::{Config, CropOffsets, UnlistedClasses, UnresolvedGlyphs};
pub use error::{Error, Result};
pub use metadata::Metadata;
pub use model::*;
pub use parser::parse_svg_font;
pub use renderer::{render_glyph_svg, render_index};
pub use resolver::{ClassGroups, Resolver};

/// Convert `input` with metadata from `metadata/` and the default settings.
pub fn run(input: impl AsRef<Path>, output_dir: impl AsRef<Path>) -> Result<ConversionSummary> {
    let metadata = Metadata::load_default()?;
    convert(input, output_dir, &metadata, &Config::default())
}

/// Convert an SVG font file into per-glyph SVG files and an index page.
pub fn convert(
    input: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    metadata: &Metadata,
    config: &Config,
) -> Result<ConversionSummary> {
    let input = input.as_ref();
    log::info!("Reading {}", input.display());
    let data = fs::read(input).map_err(|e| Error::io(input, e))?;
    convert_bytes(&data, output_dir, metadata, config)
}

/// Convert an SVG font held in memory. `data` must be UTF-8.
pub fn convert_bytes(
    data: &[u8],
    output_dir: impl AsRef<Path>,
    metadata: &Metadata,
    config: &Config,
) -> Result<ConversionSummary> {
    let output_dir = output_dir.as_ref();
    let outline = parse_svg_font(std::str::from_utf8(data)?)?;
    log::info!(
        "Extracted {} glyphs ({} without unicode or path data)",
        outline.glyphs.len(),
        outline.skipped
    );

    let mut summary = ConversionSummary {
        extracted: outline.glyphs.len(),
        skipped_incomplete: outline.skipped,
        index_path: config.index_path.clone(),
        ..Default::default()
    };

    // Resolve everything before touching the filesystem
    let resolver = Resolver::new(metadata, config);
    let mut items = Vec::new();
    for glyph in &outline.glyphs {
        let record = resolver.record(glyph);
        match resolver.render_item(&record, output_dir) {
            Ok(item) => items.push(item),
            Err(reason) => {
                log::debug!("Skipping U+{:04X} '{}': {reason:?}", record.codepoint, record.fallback_name);
                summary.count_exclusion(&reason);
            }
        }
    }

    let viewport = match (outline.bbox, items.is_empty()) {
        (Some(bbox), _) => Some(Viewport::from_bbox(bbox, config.crop)?),
        (None, true) => None,
        (None, false) => return Err(Error::MissingBoundingBox(items.len())),
    };
    summary.viewport = viewport;

    fs::create_dir_all(output_dir).map_err(|e| Error::io(output_dir, e))?;

    let mut groups = ClassGroups::new();
    if let Some(viewport) = viewport {
        let mut written = HashSet::new();
        for item in items {
            if !written.insert(item.output_path.clone()) {
                log::warn!(
                    "'{}' is written more than once; the last glyph wins",
                    item.output_path.display()
                );
                summary.duplicate_paths += 1;
            }
            let svg = render_glyph_svg(&item.path_data, viewport);
            fs::write(&item.output_path, svg).map_err(|e| Error::io(&item.output_path, e))?;
            summary.written += 1;
            groups.push(item);
        }
    }
    log::info!("Wrote {} glyph files to {}", summary.written, output_dir.display());

    let sections = groups.sections(resolver.class_order());
    summary.classes = sections.iter().map(|(class, _)| class.to_string()).collect();
    write_index(&config.index_path, &render_index(&sections))?;
    log::info!(
        "Wrote {} ({} classes)",
        config.index_path.display(),
        summary.classes.len()
    );

    Ok(summary)
}

fn write_index(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
    }
    fs::write(path, html).map_err(|e| Error::io(path, e))
}
