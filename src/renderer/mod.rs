//! Renderer — turns render items into glyph SVG documents and the HTML index.
//!
//! Every glyph document shares one viewport so that the symbols keep their
//! relative size and baseline when viewed side by side.

mod constants;
mod index;
mod svg_builder;

use crate::model::{RenderItem, Viewport};
use constants::GLYPH_FILL;
use index::IndexBuilder;
use svg_builder::SvgBuilder;

/// Render one glyph as a standalone SVG document.
pub fn render_glyph_svg(path_data: &str, viewport: Viewport) -> String {
    let mut svg = SvgBuilder::new(viewport);
    svg.flipped_path(path_data, GLYPH_FILL);
    svg.build()
}

/// Render the index page from `(class, items)` sections in page order.
/// Sections without items are left out.
pub fn render_index(sections: &[(&str, &[RenderItem])]) -> String {
    let mut index = IndexBuilder::new();
    for (class, items) in sections {
        if items.is_empty() {
            continue;
        }
        index.section(class, items);
    }
    index.build()
}

/// Escape text for use in XML/HTML content and double-quoted attributes.
pub(crate) fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
