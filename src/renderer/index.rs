//! Index page builder — one gallery per class, one thumbnail per glyph.

use super::constants::*;
use super::escape;
use crate::model::RenderItem;

pub(super) struct IndexBuilder {
    body: String,
}

impl IndexBuilder {
    pub(super) fn new() -> Self {
        Self { body: String::new() }
    }

    pub(super) fn section(&mut self, class: &str, items: &[RenderItem]) {
        self.body.push_str(&format!("        <h1>{}</h1>\n", escape(class)));
        self.body.push_str("        <div class=\"images\">\n");
        for item in items {
            self.item(item);
        }
        self.body.push_str("        </div>\n");
    }

    fn item(&mut self, item: &RenderItem) {
        let src = item.output_path.to_string_lossy();
        self.body.push_str(&format!(
            concat!(
                "            <div class=\"item\">\n",
                "                <img src=\"{}\"><br>\n",
                "                <div>{}</div>\n",
                "            </div>\n",
            ),
            escape(&src),
            escape(&item.label)
        ));
    }

    pub(super) fn build(self) -> String {
        let mut html = String::from(INDEX_HEAD);
        html.push_str(&self.body);
        html.push_str(INDEX_TAIL);
        html
    }
}
