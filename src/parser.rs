//! SVG font parser — extracts the font-face bbox and glyph outlines.

use roxmltree::{Document, Node};

use crate::error::{Error, Result};
use crate::model::*;

/// Parse an SVG font document.
///
/// Only the first `<defs>` → `<font>` is read. A document without one yields
/// an empty outline rather than an error.
pub fn parse_svg_font(xml: &str) -> Result<FontOutline> {
    // Font exports from FontForge carry a DOCTYPE
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };
    let doc = Document::parse_with_options(xml, options)?;
    let root = doc.root_element();

    if root.tag_name().name() != "svg" {
        return Err(Error::UnsupportedRoot(root.tag_name().name().to_string()));
    }

    let mut outline = FontOutline::default();

    let Some(font) = child_element(root, "defs").and_then(|defs| child_element(defs, "font")) else {
        log::warn!("No <defs><font> element found; nothing to extract");
        return Ok(outline);
    };

    for child in font.children().filter(|n| n.is_element()) {
        match child.tag_name().name() {
            "font-face" => {
                if let Some(bbox) = child.attribute("bbox") {
                    outline.bbox = Some(parse_bbox(bbox)?);
                }
            }
            "glyph" => match parse_glyph(&child) {
                Some(glyph) => outline.glyphs.push(glyph),
                None => outline.skipped += 1,
            },
            _ => {}
        }
    }

    Ok(outline)
}

/// Parse a `bbox` attribute: four whitespace-separated integers.
pub fn parse_bbox(value: &str) -> Result<BoundingBox> {
    let invalid = || Error::InvalidBoundingBox(value.to_string());
    let values = value
        .split_whitespace()
        .map(|v| v.parse::<i32>().map_err(|_| invalid()))
        .collect::<Result<Vec<_>>>()?;

    match values[..] {
        [min_x, min_y, max_x, max_y] => Ok(BoundingBox { min_x, min_y, max_x, max_y }),
        _ => Err(invalid()),
    }
}

// ─── Glyph ───────────────────────────────────────────────────────────

/// Ligatures and placeholders lack `unicode` or `d` and are skipped.
fn parse_glyph(node: &Node) -> Option<FontGlyph> {
    let codepoint = node.attribute("unicode")?.chars().next()? as u32;
    let path_data = node.attribute("d")?.to_string();

    Some(FontGlyph {
        codepoint,
        glyph_name: node.attribute("glyph-name").map(String::from),
        path_data,
    })
}

fn child_element<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|n| n.is_element() && n.tag_name().name() == name)
}
