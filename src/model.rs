//! Data model for glyphs extracted from a SMuFL SVG font.
//!
//! These structures carry a glyph from the font document through name
//! resolution to the files written for it.

use std::path::PathBuf;

use serde::Serialize;

/// Class assigned to glyphs with no class registry entry.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A `<glyph>` entry as it appears in the font document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontGlyph {
    /// Code point of the first character of the `unicode` attribute
    pub codepoint: u32,
    /// The `glyph-name` attribute, if present
    pub glyph_name: Option<String>,
    /// The `d` attribute (outline in font units, Y up)
    pub path_data: String,
}

/// Everything the extractor pulls out of a font document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontOutline {
    /// The `<font-face bbox>` value, if one was found
    pub bbox: Option<BoundingBox>,
    /// Qualifying glyphs in document order
    pub glyphs: Vec<FontGlyph>,
    /// Glyph entries skipped for lacking `unicode` or `d`
    pub skipped: usize,
}

/// A glyph joined with its registry metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRecord {
    pub codepoint: u32,
    /// SMuFL canonical name (e.g. "gClef")
    pub canonical_name: Option<String>,
    /// SMuFL description (e.g. "G clef")
    pub description: Option<String>,
    /// Name embedded in the font, or `uniXXXX` when the font has none
    pub fallback_name: String,
    pub path_data: String,
}

impl GlyphRecord {
    /// Name used when a glyph has no canonical name.
    pub fn fallback_name_for(glyph: &FontGlyph) -> String {
        glyph
            .glyph_name
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| format!("uni{:04X}", glyph.codepoint))
    }
}

/// Font-wide bounding box from `<font-face bbox="minX minY maxX maxY">`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

/// Viewport shared by every emitted glyph file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Viewport {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
    pub width: i32,
    pub height: i32,
}

/// One glyph that survived filtering: one SVG file and one index entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderItem {
    /// Where the glyph's SVG is written; also the index `<img src>`
    pub output_path: PathBuf,
    /// Caption shown in the index
    pub label: String,
    /// Class the item is grouped under
    pub class_key: String,
    pub path_data: String,
}

/// Why a glyph was left out of the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExclusionReason {
    /// No canonical name for the codepoint and fallback names are disabled
    Unresolved,
    /// Class is on the always-excluded list
    ExcludedClass(String),
    /// Class is not part of the display order
    UnlistedClass(String),
    /// Label or canonical name contains a stopword
    Stopword(String),
}

/// Outcome of resolving one glyph against the registries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved { canonical_name: String, class: String },
    FallbackOnly { name: String },
    Excluded(ExclusionReason),
}

/// Counters reported at the end of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionSummary {
    /// Glyphs with both `unicode` and `d`
    pub extracted: usize,
    /// Glyph entries without `unicode` or `d`
    pub skipped_incomplete: usize,
    pub skipped_unresolved: usize,
    pub skipped_class: usize,
    pub skipped_stopword: usize,
    /// SVG files written (including overwrites)
    pub written: usize,
    /// Writes that replaced a file written earlier in the same run
    pub duplicate_paths: usize,
    /// Classes shown in the index, in page order
    pub classes: Vec<String>,
    pub viewport: Option<Viewport>,
    pub index_path: PathBuf,
}

impl ConversionSummary {
    /// Record a skipped glyph under its reason.
    pub fn count_exclusion(&mut self, reason: &ExclusionReason) {
        match reason {
            ExclusionReason::Unresolved => self.skipped_unresolved += 1,
            ExclusionReason::ExcludedClass(_) | ExclusionReason::UnlistedClass(_) => {
                self.skipped_class += 1
            }
            ExclusionReason::Stopword(_) => self.skipped_stopword += 1,
        }
    }
}
