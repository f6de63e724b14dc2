//! SVG visualization of a justified gallery layout.
//!
//! Renders the computed rows as one annotated panel: the container
//! outline, every image rectangle at its computed size and position, and
//! a per-row height label. Clamped rows are drawn with a dashed stroke.
//! Useful for eyeballing partition decisions without a browser.
//!
//! # Example
//!
//! ```
//! use rowfill::{Justify, NaturalSize, svg::render_gallery_svg};
//!
//! let justify = Justify::new(10, 200);
//! let strip = [
//!     NaturalSize::new(300, 200),
//!     NaturalSize::new(400, 400),
//!     NaturalSize::new(133, 100),
//! ];
//! let rows = justify.rows(630, &strip).unwrap();
//!
//! let svg = render_gallery_svg(&justify, 630, &rows);
//! assert!(svg.starts_with("<svg"));
//! ```

use crate::gallery::Row;
use crate::row::Justify;

/// Maximum pixel width of the rendered strip.
const MAX_STRIP_W: f64 = 600.0;
/// Horizontal margin around the strip.
const MARGIN_X: f64 = 20.0;
/// Vertical margin above and below the strip.
const MARGIN_Y: f64 = 20.0;
/// Width of the label gutter right of the strip.
const LABEL_W: f64 = 130.0;

/// Render the rows of one layout pass as a complete SVG document.
pub fn render_gallery_svg(justify: &Justify, container_width: u32, rows: &[Row]) -> String {
    if rows.is_empty() || container_width == 0 {
        return String::from(r#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"/>"#);
    }

    let spacing = justify.spacing();
    let row_gap = (spacing.top + spacing.bottom) as f64;
    let margin = justify.margin as f64;

    let scale = (MAX_STRIP_W / container_width as f64).min(1.0);
    let content_h: f64 = rows
        .iter()
        .map(|row| row.height.max(0.0) + row_gap)
        .sum();

    let strip_w = container_width as f64 * scale;
    let total_w = strip_w + 2.0 * MARGIN_X + LABEL_W;
    let total_h = content_h * scale + 2.0 * MARGIN_Y;

    let mut svg = String::with_capacity(2048);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    // Style — light/dark mode via prefers-color-scheme
    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 11px; fill: #666; }
  .container { fill: none; stroke: #999; stroke-width: 1; stroke-dasharray: 6,3; }
  .img { fill: #6ba3d6; stroke: #2c6faa; stroke-width: 1; }
  .img-clamped { fill: #d6a36b; stroke: #aa6f2c; stroke-width: 1; stroke-dasharray: 4,2; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #aaa; }
    .container { stroke: #555; }
    .img { fill: #3a72a4; stroke: #5a9fd4; }
    .img-clamped { fill: #a4723a; stroke: #d49f5a; }
  }
</style>
"##,
    );

    // Container outline spanning all rows.
    svg.push_str(&format!(
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="container"/>"#,
        MARGIN_X,
        MARGIN_Y,
        strip_w,
        content_h * scale
    ));
    svg.push('\n');

    let mut y = MARGIN_Y;
    for (row_index, row) in rows.iter().enumerate() {
        let row_h = row.height.max(0.0) * scale;
        let class = if row.clamped { "img-clamped" } else { "img" };

        let mut x = MARGIN_X + spacing.left as f64 * scale;
        for item in &row.items {
            let w = item.width.max(0.0) * scale;
            svg.push_str(&format!(
                r#"<rect x="{x:.1}" y="{:.1}" width="{w:.1}" height="{row_h:.1}" class="{class}"/>"#,
                y + spacing.top as f64 * scale
            ));
            svg.push('\n');
            x += w + margin * scale;
        }

        // Row label in the right gutter.
        let label = if row.clamped {
            format!("row {row_index} · h {:.3} (clamped)", row.height)
        } else {
            format!("row {row_index} · h {:.3}", row.height)
        };
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" class="label">{}</text>"#,
            MARGIN_X + strip_w + 8.0,
            y + (row_h + row_gap * scale) / 2.0 + 4.0,
            escape_xml(&label)
        ));
        svg.push('\n');

        y += row_h + row_gap * scale;
    }

    svg.push_str("</svg>\n");
    svg
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::NaturalSize;

    fn worked_rows() -> (Justify, Vec<Row>) {
        let justify = Justify::new(10, 200);
        let strip = [
            NaturalSize::new(300, 200),
            NaturalSize::new(400, 400),
            NaturalSize::new(133, 100),
            NaturalSize::new(177, 100),
            NaturalSize::new(300, 400),
        ];
        let rows = justify.rows(630, &strip).unwrap();
        (justify, rows)
    }

    #[test]
    fn svg_renders_one_rect_per_image() {
        let (justify, rows) = worked_rows();
        let svg = render_gallery_svg(&justify, 630, &rows);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>\n"));
        let image_rects = svg.matches(r#"class="img""#).count()
            + svg.matches(r#"class="img-clamped""#).count();
        assert_eq!(image_rects, 5);
    }

    #[test]
    fn svg_labels_every_row() {
        let (justify, rows) = worked_rows();
        let svg = render_gallery_svg(&justify, 630, &rows);
        assert!(svg.contains("row 0"));
        assert!(svg.contains("row 1"));
        assert!(svg.contains("(clamped)"));
    }

    #[test]
    fn svg_empty_rows_render_placeholder() {
        let justify = Justify::new(10, 200);
        let svg = render_gallery_svg(&justify, 630, &[]);
        assert!(svg.starts_with("<svg"));
        assert!(!svg.contains("rect x"));
    }

    #[test]
    fn svg_has_no_unescaped_brackets() {
        let (justify, rows) = worked_rows();
        let svg = render_gallery_svg(&justify, 630, &rows);
        assert!(!svg.contains("<<"));
    }
}
