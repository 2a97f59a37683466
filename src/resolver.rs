//! Glyph resolver — joins glyphs with registry names and classes, applies
//! the exclusion rules and groups the survivors by class.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::config::{Config, UnlistedClasses, UnresolvedGlyphs};
use crate::metadata::Metadata;
use crate::model::*;

pub struct Resolver<'a> {
    metadata: &'a Metadata,
    config: &'a Config,
    class_order: Vec<String>,
    listed: HashSet<String>,
}

impl<'a> Resolver<'a> {
    pub fn new(metadata: &'a Metadata, config: &'a Config) -> Self {
        let class_order = config
            .class_order
            .clone()
            .unwrap_or_else(|| metadata.class_names().to_vec());
        let listed = class_order.iter().cloned().collect();
        Self { metadata, config, class_order, listed }
    }

    /// Classes in index page order, before any unlisted ones.
    pub fn class_order(&self) -> &[String] {
        &self.class_order
    }

    /// Look up a font glyph in the glyph-name registry.
    pub fn record(&self, glyph: &FontGlyph) -> GlyphRecord {
        GlyphRecord {
            codepoint: glyph.codepoint,
            canonical_name: self.metadata.canonical_name(glyph.codepoint).map(String::from),
            description: self.metadata.description(glyph.codepoint).map(String::from),
            fallback_name: GlyphRecord::fallback_name_for(glyph),
            path_data: glyph.path_data.clone(),
        }
    }

    /// Caption for a glyph: its description, else the font's own name.
    pub fn label(record: &GlyphRecord) -> String {
        match &record.description {
            Some(description) => sanitize(description),
            None => record.fallback_name.clone(),
        }
    }

    /// Decide whether a glyph is rendered, and under which name and class.
    pub fn resolve(&self, record: &GlyphRecord) -> Resolution {
        let (resolution, class) = match &record.canonical_name {
            Some(name) => {
                let class = self.metadata.class_of(name).unwrap_or(UNCATEGORIZED).to_string();
                let resolution = Resolution::Resolved { canonical_name: name.clone(), class: class.clone() };
                (resolution, class)
            }
            None => match self.config.unresolved {
                UnresolvedGlyphs::Skip => return Resolution::Excluded(ExclusionReason::Unresolved),
                UnresolvedGlyphs::Fallback => (
                    Resolution::FallbackOnly { name: record.fallback_name.clone() },
                    UNCATEGORIZED.to_string(),
                ),
            },
        };

        if self.config.excluded_classes.contains(&class) {
            return Resolution::Excluded(ExclusionReason::ExcludedClass(class));
        }
        if self.config.unlisted_classes == UnlistedClasses::Drop && !self.listed.contains(&class) {
            return Resolution::Excluded(ExclusionReason::UnlistedClass(class));
        }
        if let Some(word) = self.stopword(&Self::label(record), record.canonical_name.as_deref()) {
            return Resolution::Excluded(ExclusionReason::Stopword(word.to_string()));
        }

        resolution
    }

    /// Turn a record into a render item, or the reason it is excluded.
    pub fn render_item(
        &self,
        record: &GlyphRecord,
        output_dir: &Path,
    ) -> Result<RenderItem, ExclusionReason> {
        let (file_name, class_key) = match self.resolve(record) {
            Resolution::Resolved { canonical_name, class } => (canonical_name, class),
            Resolution::FallbackOnly { name } => (name, UNCATEGORIZED.to_string()),
            Resolution::Excluded(reason) => return Err(reason),
        };

        Ok(RenderItem {
            output_path: output_path(output_dir, &file_name),
            label: Self::label(record),
            class_key,
            path_data: record.path_data.clone(),
        })
    }

    fn stopword(&self, label: &str, canonical_name: Option<&str>) -> Option<&str> {
        let label = label.to_lowercase();
        self.config
            .stopwords
            .iter()
            .find(|word| {
                label.contains(&word.to_lowercase())
                    || canonical_name.is_some_and(|name| name.contains(word.as_str()))
            })
            .map(String::as_str)
    }
}

/// `<output_dir>/<name>.svg`, with `/` and `:` in the name replaced.
pub fn output_path(output_dir: &Path, name: &str) -> PathBuf {
    output_dir.join(format!("{}.svg", sanitize(name)))
}

/// Make a name safe to use as a file name.
pub fn sanitize(name: &str) -> String {
    name.replace(['/', ':'], "-")
}

// ═══════════════════════════════════════════════════════════════════════
// ClassGroups
// ═══════════════════════════════════════════════════════════════════════

/// Render items grouped by class, in first-seen order within each class.
#[derive(Debug, Default)]
pub struct ClassGroups {
    groups: IndexMap<String, Vec<RenderItem>>,
}

impl ClassGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: RenderItem) {
        self.groups.entry(item.class_key.clone()).or_default().push(item);
    }

    /// Non-empty classes in page order: `order` first, then any other
    /// class in the order it was first seen.
    pub fn sections<'s>(&'s self, order: &'s [String]) -> Vec<(&'s str, &'s [RenderItem])> {
        let mut sections = Vec::new();
        for class in order {
            match self.groups.get(class) {
                Some(items) if !items.is_empty() => sections.push((class.as_str(), items.as_slice())),
                _ => log::debug!("Class '{class}' has no glyphs"),
            }
        }
        for (class, items) in &self.groups {
            if !order.contains(class) && !items.is_empty() {
                sections.push((class.as_str(), items.as_slice()));
            }
        }
        sections
    }
}
