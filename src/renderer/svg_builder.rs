//! SVG builder — accumulates elements and produces a standalone glyph document.

use super::constants::*;
use super::escape;
use crate::model::Viewport;

pub(super) struct SvgBuilder {
    elements: Vec<String>,
    viewport: Viewport,
}

impl SvgBuilder {
    pub(super) fn new(viewport: Viewport) -> Self {
        Self {
            elements: Vec::new(),
            viewport,
        }
    }

    pub(super) fn build(self) -> String {
        let mut svg = String::from(XML_DECLARATION);
        svg.push('\n');
        svg.push_str(&format!(
            r#"<svg xmlns="{}" viewBox="{}" width="{}" height="{}">"#,
            SVG_NAMESPACE,
            self.viewport.view_box(),
            self.viewport.width,
            self.viewport.height
        ));
        svg.push('\n');
        for el in &self.elements {
            svg.push_str("  ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    /// A filled outline in font coordinates, mirrored so Y points down.
    pub(super) fn flipped_path(&mut self, d: &str, fill: &str) {
        self.elements.push(format!(
            r#"<g transform="{}"><path style="fill: {}" d="{}"/></g>"#,
            FLIP_Y,
            fill,
            escape(d)
        ));
    }
}
