//! SMuFL metadata loader — reads `glyphnames.json` and `classes.json`.
//!
//! `glyphnames.json` maps canonical names to `{ codepoint, description }`;
//! `classes.json` maps class names to lists of canonical names. Both are read
//! in document order so that later entries win on conflicts.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{
    config::{CLASSES_FILE, DEFAULT_METADATA_DIR, GLYPHNAMES_FILE},
    error::{Error, Result},
};

#[derive(Debug, Deserialize)]
struct GlyphNameEntry {
    codepoint: String,
    #[serde(default)]
    description: Option<String>,
}

/// Read-only lookup tables built from the SMuFL registries.
#[derive(Debug, Clone, Default)]
pub struct Metadata {
    names: HashMap<u32, String>,
    descriptions: HashMap<u32, String>,
    classes: HashMap<String, String>,
    class_names: Vec<String>,
}

impl Metadata {
    /// Load both registries from `metadata/` in the working directory.
    pub fn load_default() -> Result<Self> {
        Self::load_dir(DEFAULT_METADATA_DIR)
    }

    /// Load `glyphnames.json` and `classes.json` from `dir`.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        Self::load(&dir.join(GLYPHNAMES_FILE), &dir.join(CLASSES_FILE))
    }

    pub fn load(glyphnames: &Path, classes: &Path) -> Result<Self> {
        let glyphnames_json = read_to_string(glyphnames)?;
        let classes_json = read_to_string(classes)?;
        Self::from_json(&glyphnames_json, glyphnames, &classes_json, classes)
    }

    /// Build tables from registry JSON. The paths only label errors.
    pub fn from_json(
        glyphnames_json: &str,
        glyphnames_path: impl Into<PathBuf>,
        classes_json: &str,
        classes_path: impl Into<PathBuf>,
    ) -> Result<Self> {
        let glyph_names: IndexMap<String, GlyphNameEntry> = serde_json::from_str(glyphnames_json)
            .map_err(|source| Error::Json { path: glyphnames_path.into(), source })?;
        let class_lists: IndexMap<String, Vec<String>> = serde_json::from_str(classes_json)
            .map_err(|source| Error::Json { path: classes_path.into(), source })?;

        let mut metadata = Metadata::default();

        for (name, entry) in glyph_names {
            let codepoint = parse_codepoint(&entry.codepoint).ok_or_else(|| {
                Error::InvalidCodepoint { glyph: name.clone(), codepoint: entry.codepoint.clone() }
            })?;
            if let Some(description) = entry.description {
                metadata.descriptions.insert(codepoint, description);
            }
            metadata.names.insert(codepoint, name);
        }

        for (class, members) in class_lists {
            for member in members {
                metadata.classes.insert(member, class.clone());
            }
            metadata.class_names.push(class);
        }
        metadata.class_names.sort();

        log::debug!(
            "Loaded {} glyph names and {} classes",
            metadata.names.len(),
            metadata.class_names.len()
        );

        Ok(metadata)
    }

    pub fn canonical_name(&self, codepoint: u32) -> Option<&str> {
        self.names.get(&codepoint).map(String::as_str)
    }

    pub fn description(&self, codepoint: u32) -> Option<&str> {
        self.descriptions.get(&codepoint).map(String::as_str)
    }

    pub fn class_of(&self, canonical_name: &str) -> Option<&str> {
        self.classes.get(canonical_name).map(String::as_str)
    }

    /// All registry class names, sorted alphabetically.
    pub fn class_names(&self) -> &[String] {
        &self.class_names
    }
}

/// Parse a SMuFL codepoint string such as `U+E050`.
pub fn parse_codepoint(value: &str) -> Option<u32> {
    let hex = value
        .strip_prefix("U+")
        .or_else(|| value.strip_prefix("u+"))?;
    if hex.is_empty() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok()
}

fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}
