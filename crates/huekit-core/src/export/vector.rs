// crates/huekit-core/src/export/vector.rs
//
// SVG bands. `x` is floored like the PNG bands, `width` is the raw step and may
// be fractional.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use super::{band_edge, band_step, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::color::Color;
use crate::error::{ColorError, Result};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

fn xml_err<E: std::fmt::Display>(e: E) -> ColorError {
    ColorError::Encode(format!("svg: {e}"))
}

pub fn svg(colors: &[Color]) -> Result<String> {
    let step = band_step(colors.len().max(1));
    let width = CANVAS_WIDTH.to_string();
    let height = CANVAS_HEIGHT.to_string();

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(xml_err)?;

    let root = BytesStart::new("svg").with_attributes([
        ("width", width.as_str()),
        ("height", height.as_str()),
        ("xmlns", SVG_NS),
    ]);
    writer.write_event(Event::Start(root)).map_err(xml_err)?;

    let band_width = step.to_string();
    for (i, c) in colors.iter().enumerate() {
        let x = band_edge(i, step).to_string();
        let fill = c.to_hex();
        let rect = BytesStart::new("rect").with_attributes([
            ("x", x.as_str()),
            ("y", "0"),
            ("width", band_width.as_str()),
            ("height", height.as_str()),
            ("fill", fill.as_str()),
        ]);
        writer.write_event(Event::Empty(rect)).map_err(xml_err)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("svg")))
        .map_err(xml_err)?;

    String::from_utf8(writer.into_inner()).map_err(xml_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_color_spans_canvas() {
        let out = svg(&[Color::new(0x11, 0x22, 0x33)]).unwrap();
        assert_eq!(out.matches("<rect").count(), 1);
        assert!(out.contains(r##"<rect x="0" y="0" width="600" height="100" fill="#112233""##));
        assert!(out.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(out.contains(r#"<svg width="600" height="100" xmlns="http://www.w3.org/2000/svg">"#));
        assert!(out.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn fractional_width_is_kept() {
        let colors = [Color::new(0, 0, 0); 7];
        let out = svg(&colors).unwrap();
        assert_eq!(out.matches("<rect").count(), 7);
        assert!(out.contains(r#"<rect x="85" y="0" width="85.71428571428571""#));
        assert!(out.contains(r#"<rect x="514" y="0" width="85.71428571428571""#));
    }
}
