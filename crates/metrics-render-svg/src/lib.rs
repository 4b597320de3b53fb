// File: crates/metrics-render-svg/src/lib.rs
// Summary: Serializes PlotGeometry into standalone SVG documents.

use std::fmt::Write as _;
use std::path::Path;

use metrics_core::{Anchor, LineCap, Paint, PathShape, PlotGeometry};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SvgError {
    #[error("failed to write SVG file: {0}")]
    Io(#[from] std::io::Error),
}

/// Render `geom` as a standalone SVG document string.
///
/// Gradient paints become `<linearGradient>` defs keyed by shape index, so
/// the output is deterministic for a given geometry.
pub fn document(geom: &PlotGeometry) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {:.0} {:.0}">"#,
        geom.width, geom.height
    );

    let defs = gradient_defs(&geom.shapes);
    if !defs.is_empty() {
        let _ = writeln!(out, "  <defs>\n{defs}  </defs>");
    }

    for (i, shape) in geom.shapes.iter().enumerate() {
        let _ = write!(
            out,
            r#"  <path d="{}" fill="{}" stroke="{}""#,
            shape.d,
            paint_ref(i, "f", shape.fill),
            paint_ref(i, "s", shape.stroke),
        );
        if shape.stroke.is_some() {
            let _ = write!(out, r#" stroke-width="{:.2}""#, shape.stroke_width);
            if shape.cap == LineCap::Round {
                let _ = write!(out, r#" stroke-linecap="round""#);
            }
        }
        let _ = writeln!(out, "/>");
    }

    for label in &geom.labels {
        let anchor = match label.anchor {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        };
        let _ = writeln!(
            out,
            r#"  <text x="{:.2}" y="{:.2}" fill="{}" font-size="{:.1}" font-family="sans-serif" text-anchor="{}">{}</text>"#,
            label.x,
            label.y,
            label.color.to_css(),
            label.size,
            anchor,
            xml_escape(&label.text),
        );
    }

    out.push_str("</svg>\n");
    out
}

/// Write the document for `geom` to `path`, creating parent directories.
pub fn write_svg(geom: &PlotGeometry, path: impl AsRef<Path>) -> Result<(), SvgError> {
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, document(geom))?;
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

fn gradient_defs(shapes: &[PathShape]) -> String {
    let mut defs = String::new();
    for (i, shape) in shapes.iter().enumerate() {
        for (tag, paint) in [("f", shape.fill), ("s", shape.stroke)] {
            if let Some(Paint::Gradient(from, to)) = paint {
                let _ = writeln!(
                    defs,
                    r#"    <linearGradient id="g{i}{tag}" x1="0" y1="0" x2="1" y2="1">"#
                );
                let _ = writeln!(defs, r#"      <stop offset="0" stop-color="{}"/>"#, from.to_css());
                let _ = writeln!(defs, r#"      <stop offset="1" stop-color="{}"/>"#, to.to_css());
                let _ = writeln!(defs, "    </linearGradient>");
            }
        }
    }
    defs
}

fn paint_ref(i: usize, tag: &str, paint: Option<Paint>) -> String {
    match paint {
        None => "none".to_string(),
        Some(Paint::Solid(c)) => c.to_css(),
        Some(Paint::Gradient(_, _)) => format!("url(#g{i}{tag})"),
    }
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
