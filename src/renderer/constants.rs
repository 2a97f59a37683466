//! Fixed markup for glyph files and the index page.

// ── Glyph SVG ───────────────────────────────────────────────────────
pub(super) const XML_DECLARATION: &str = r#"<?xml version="1.0" standalone="no"?>"#;
pub(super) const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
/// Font outlines have Y up; SVG has Y down.
pub(super) const FLIP_Y: &str = "matrix(1 0 0 -1 0 0)";
pub(super) const GLYPH_FILL: &str = "#000000";

// ── Index page ──────────────────────────────────────────────────────
pub(super) const INDEX_HEAD: &str = r#"<!doctype html>
<html>
    <head>
        <meta charset="utf-8">
        <style>
            .images {
                display: flex;
                flex-wrap: wrap;
            }

            .images img, .images .item {
                width: 5vw;
                height: auto;
            }

            .images img {
                border: 1px solid gray;
            }
        </style>
    </head>
    <body>
"#;

pub(super) const INDEX_TAIL: &str = r#"    </body>
</html>
"#;
