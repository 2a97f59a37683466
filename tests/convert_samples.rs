//! Conversion tests — run the fixture font through the whole pipeline.

use pretty_assertions::assert_eq;
use smufl2svg::{
    convert, convert_bytes, Config, Error, Metadata, UnlistedClasses, UnresolvedGlyphs, Viewport,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn metadata() -> Metadata {
    Metadata::load_dir(fixtures_dir().join("metadata")).expect("Failed to load fixture metadata")
}

/// Default settings, with the index kept inside the temp dir.
fn config_in(tmp: &TempDir) -> Config {
    Config {
        index_path: tmp.path().join("index.html"),
        ..Config::default()
    }
}

fn svg_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|n| n.ends_with(".svg"))
        .collect();
    names.sort();
    names
}

fn img_tag(path: &Path) -> String {
    format!(r#"<img src="{}">"#, path.display())
}

// ─── Default settings ───────────────────────────────────────────────

#[test]
fn convert_fixture_font() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("glyphs");
    let config = config_in(&tmp);

    let summary = convert(fixtures_dir().join("TestMusic.svg"), &out, &metadata(), &config)
        .expect("Failed to convert fixture font");

    assert_eq!(summary.extracted, 8);
    assert_eq!(summary.skipped_incomplete, 2, "ligature and space have no unicode or path");
    assert_eq!(summary.skipped_stopword, 1);
    assert_eq!(summary.skipped_class, 1);
    assert_eq!(summary.skipped_unresolved, 0);
    assert_eq!(summary.written, 6);
    assert_eq!(summary.duplicate_paths, 0);
    assert_eq!(
        summary.viewport,
        Some(Viewport { min_x: 0, min_y: 600, max_x: 600, max_y: 1800, width: 600, height: 1200 })
    );
    assert_eq!(
        summary.classes,
        vec!["clefs", "clefsG", "noteheads", "timeSignatures", "Uncategorized"]
    );

    assert_eq!(
        svg_files(&out),
        vec![
            "fClef.svg",
            "gClef.svg",
            "mensuralProportion4.svg",
            "noteheadBlack.svg",
            "segno.svg",
            "uniF400.svg",
        ]
    );
}

#[test]
fn glyph_files_share_one_viewport() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("glyphs");
    convert(fixtures_dir().join("TestMusic.svg"), &out, &metadata(), &config_in(&tmp)).unwrap();

    let headers: Vec<String> = svg_files(&out)
        .iter()
        .map(|name| {
            let svg = fs::read_to_string(out.join(name)).unwrap();
            svg.lines().find(|l| l.starts_with("<svg")).unwrap().to_string()
        })
        .collect();

    assert!(headers[0].contains(r#"viewBox="0 600 600 1800" width="600" height="1200""#));
    assert!(headers.iter().all(|h| h == &headers[0]), "headers differ: {headers:#?}");

    let g_clef = fs::read_to_string(out.join("gClef.svg")).unwrap();
    assert!(g_clef.starts_with("<?xml"));
    assert!(g_clef.contains(r#"<g transform="matrix(1 0 0 -1 0 0)">"#));
    assert!(g_clef.contains(r#"d="M376 415l-19 -103c-71 18 -115 84 -115 148c0 78 54 143 115 162z""#));
}

#[test]
fn index_groups_glyphs_by_class() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("glyphs");
    let config = config_in(&tmp);
    convert(fixtures_dir().join("TestMusic.svg"), &out, &metadata(), &config).unwrap();

    let html = fs::read_to_string(&config.index_path).unwrap();
    let heading = |class: &str| {
        html.find(&format!("<h1>{class}</h1>"))
            .unwrap_or_else(|| panic!("missing heading for {class}"))
    };

    let clefs = heading("clefs");
    let clefs_g = heading("clefsG");
    let noteheads = heading("noteheads");
    let time_sigs = heading("timeSignatures");
    let uncategorized = heading("Uncategorized");
    assert!(clefs < clefs_g && clefs_g < noteheads && noteheads < time_sigs && time_sigs < uncategorized);

    // Classes whose only glyphs were filtered out get no heading
    assert!(!html.contains("<h1>flags</h1>"));
    assert!(!html.contains("<h1>noteheadSetsShapeNote</h1>"));
    assert_eq!(html.matches("<h1>").count(), 5);

    // gClef sits in the clefsG section with its description as caption
    let g_clef = html.find(&img_tag(&out.join("gClef.svg"))).unwrap();
    assert!(clefs_g < g_clef && g_clef < noteheads);
    assert!(html[g_clef..].starts_with(&format!("{}<br>\n                <div>G clef</div>", img_tag(&out.join("gClef.svg")))));

    // Separators in descriptions are replaced in captions
    assert!(html.contains("<div>Mensural proportion 4-3-2</div>"));

    // Unresolved glyphs fall back to the font's own name
    let fallback = html.find(&img_tag(&out.join("uniF400.svg"))).unwrap();
    assert!(uncategorized < fallback);
    assert!(html.contains("<div>uniF400</div>"));

    // Excluded glyphs leave no trace
    assert!(!html.contains("Combining"));
    assert!(!out.join("flag8thUp.svg").exists());
    assert!(!out.join("noteShapeRoundWhite.svg").exists());
}

#[test]
fn conversion_is_idempotent() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("glyphs");
    let config = config_in(&tmp);
    let md = metadata();
    let input = fixtures_dir().join("TestMusic.svg");

    let snapshot = || {
        let mut files: Vec<(String, Vec<u8>)> = svg_files(&out)
            .into_iter()
            .map(|name| {
                let bytes = fs::read(out.join(&name)).unwrap();
                (name, bytes)
            })
            .collect();
        files.push(("index.html".into(), fs::read(&config.index_path).unwrap()));
        files
    };

    convert(&input, &out, &md, &config).unwrap();
    let first = snapshot();
    convert(&input, &out, &md, &config).unwrap();
    let second = snapshot();

    assert_eq!(first, second);
}

// ─── Policies ───────────────────────────────────────────────────────

#[test]
fn strict_policies_keep_only_listed_classes() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("glyphs");
    let config = Config {
        class_order: Some(vec!["clefsG".into(), "clefs".into()]),
        unlisted_classes: UnlistedClasses::Drop,
        unresolved: UnresolvedGlyphs::Skip,
        ..config_in(&tmp)
    };

    let summary = convert(fixtures_dir().join("TestMusic.svg"), &out, &metadata(), &config).unwrap();

    assert_eq!(svg_files(&out), vec!["fClef.svg", "gClef.svg"]);
    assert_eq!(summary.classes, vec!["clefsG", "clefs"]);
    assert_eq!(summary.skipped_unresolved, 1);
    // flags, noteheads, timeSignatures, segno (Uncategorized) and the shape note
    assert_eq!(summary.skipped_class, 5);
    assert_eq!(summary.skipped_stopword, 0, "class filtering runs before stopwords");

    let html = fs::read_to_string(&config.index_path).unwrap();
    assert!(html.find("<h1>clefsG</h1>").unwrap() < html.find("<h1>clefs</h1>").unwrap());
    assert!(!html.contains("Uncategorized"));
}

#[test]
fn duplicate_names_overwrite_but_stay_indexed() {
    let font = r#"<svg xmlns="http://www.w3.org/2000/svg"><defs><font>
        <font-face bbox="0 0 1000 1000"/>
        <glyph glyph-name="first" unicode="&#xe050;" d="M1 1z"/>
        <glyph glyph-name="second" unicode="&#xe050;" d="M2 2z"/>
    </font></defs></svg>"#;
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("glyphs");
    let config = config_in(&tmp);

    let summary = convert_bytes(font.as_bytes(), &out, &metadata(), &config).unwrap();

    assert_eq!(summary.written, 2);
    assert_eq!(summary.duplicate_paths, 1);
    assert_eq!(svg_files(&out), vec!["gClef.svg"]);
    let svg = fs::read_to_string(out.join("gClef.svg")).unwrap();
    assert!(svg.contains(r#"d="M2 2z""#), "last glyph wins on disk");

    let html = fs::read_to_string(&config.index_path).unwrap();
    assert_eq!(html.matches(&img_tag(&out.join("gClef.svg"))).count(), 2);
}

// ─── Edge cases ─────────────────────────────────────────────────────

#[test]
fn font_without_definitions_gives_empty_index() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("glyphs");
    let config = config_in(&tmp);

    let summary = convert_bytes(
        br#"<svg xmlns="http://www.w3.org/2000/svg"><metadata/></svg>"#,
        &out,
        &metadata(),
        &config,
    )
    .unwrap();

    assert_eq!(summary.written, 0);
    assert_eq!(summary.viewport, None);
    assert!(summary.classes.is_empty());
    assert!(out.is_dir(), "output directory is created even when empty");
    assert!(svg_files(&out).is_empty());

    let html = fs::read_to_string(&config.index_path).unwrap();
    assert!(html.contains("<body>"));
    assert!(!html.contains("<h1>"));
}

#[test]
fn glyphs_without_bbox_are_an_error() {
    let font = r#"<svg xmlns="http://www.w3.org/2000/svg"><defs><font>
        <glyph unicode="&#xe050;" d="M1 1z"/>
    </font></defs></svg>"#;
    let tmp = TempDir::new().unwrap();

    let err = convert_bytes(font.as_bytes(), tmp.path().join("glyphs"), &metadata(), &config_in(&tmp))
        .unwrap_err();

    assert!(matches!(err, Error::MissingBoundingBox(1)));
}

#[test]
fn oversized_bbox_is_an_error() {
    let font = r#"<svg xmlns="http://www.w3.org/2000/svg"><defs><font>
        <font-face bbox="0 0 1000 2147483000"/>
        <glyph unicode="&#xe050;" d="M1 1z"/>
    </font></defs></svg>"#;
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("glyphs");

    let err = convert_bytes(font.as_bytes(), &out, &metadata(), &config_in(&tmp)).unwrap_err();

    assert!(matches!(err, Error::InvalidBoundingBox(_)));
    assert!(!out.join("gClef.svg").exists());
}

#[test]
fn non_utf8_input_is_an_error() {
    // UTF-16LE with BOM
    let font = r#"<svg xmlns="http://www.w3.org/2000/svg"/>"#;
    let mut data = vec![0xFF, 0xFE];
    data.extend(font.encode_utf16().flat_map(u16::to_le_bytes));
    let tmp = TempDir::new().unwrap();

    let err = convert_bytes(&data, tmp.path().join("glyphs"), &metadata(), &config_in(&tmp))
        .unwrap_err();

    assert!(matches!(err, Error::Utf8(_)));
}

#[test]
fn missing_input_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let err = convert(tmp.path().join("nope.svg"), tmp.path().join("glyphs"), &metadata(), &config_in(&tmp))
        .unwrap_err();

    assert!(matches!(err, Error::Io { .. }));
    assert!(!tmp.path().join("index.html").exists());
}

#[test]
fn fixture_metadata_loads() {
    let md = metadata();
    assert_eq!(md.canonical_name(0xE050), Some("gClef"));
    assert_eq!(md.description(0xE926), Some("Mensural proportion 4:3/2"));
    assert_eq!(md.class_of("gClef"), Some("clefsG"));
    assert_eq!(
        md.class_names(),
        ["clefs", "clefsG", "flags", "noteheadSetsShapeNote", "noteheads", "timeSignatures"]
            .map(String::from)
    );
}
