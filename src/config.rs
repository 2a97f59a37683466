//! Conversion settings and their defaults.

use std::path::PathBuf;

// ── Crop applied to the font-face bbox (font units) ─────────────────
pub const DEFAULT_CROP_MIN_Y: i32 = 600;
pub const DEFAULT_CROP_MAX_X: i32 = 400;
pub const DEFAULT_CROP_MAX_Y: i32 = 800;

// ── Filtering ───────────────────────────────────────────────────────
/// Shape-note noteheads are drawn at sizes the shared viewport clips.
pub const DEFAULT_EXCLUDED_CLASSES: &[&str] = &["noteheadSetsShapeNote"];
/// Combining marks, tiny subdivision noteheads and wide pictograms.
pub const DEFAULT_STOPWORDS: &[&str] = &["combining", "subdivision", "pict"];

// ── Locations (relative to the working directory) ───────────────────
pub const DEFAULT_INDEX_PATH: &str = "index.html";
pub const DEFAULT_METADATA_DIR: &str = "metadata";
pub const GLYPHNAMES_FILE: &str = "glyphnames.json";
pub const CLASSES_FILE: &str = "classes.json";

/// Offsets trimming the font-design margin shared by every glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropOffsets {
    /// Added to `minY`
    pub min_y: i32,
    /// Subtracted from `maxX`
    pub max_x: i32,
    /// Added to `maxY`
    pub max_y: i32,
}

impl Default for CropOffsets {
    fn default() -> Self {
        Self {
            min_y: DEFAULT_CROP_MIN_Y,
            max_x: DEFAULT_CROP_MAX_X,
            max_y: DEFAULT_CROP_MAX_Y,
        }
    }
}

/// What to do with a codepoint missing from the glyph-name registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnresolvedGlyphs {
    /// Render it under the name embedded in the font
    #[default]
    Fallback,
    /// Leave it out
    Skip,
}

/// What to do with a class that is not part of the display order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnlistedClasses {
    /// Show it after the listed classes, in first-seen order
    #[default]
    Append,
    /// Leave its glyphs out
    Drop,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub crop: CropOffsets,
    /// Index page class order; `None` uses the registry's classes sorted by name
    pub class_order: Option<Vec<String>>,
    pub excluded_classes: Vec<String>,
    /// Matched case-insensitively against labels, case-sensitively against canonical names
    pub stopwords: Vec<String>,
    pub unresolved: UnresolvedGlyphs,
    pub unlisted_classes: UnlistedClasses,
    pub index_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            crop: CropOffsets::default(),
            class_order: None,
            excluded_classes: to_owned(DEFAULT_EXCLUDED_CLASSES),
            stopwords: to_owned(DEFAULT_STOPWORDS),
            unresolved: UnresolvedGlyphs::default(),
            unlisted_classes: UnlistedClasses::default(),
            index_path: PathBuf::from(DEFAULT_INDEX_PATH),
        }
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
