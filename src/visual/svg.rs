//! `VisualState` to a standalone SVG document.
//!
//! Each layer becomes a `<g opacity>` group in painter's order and each node a nested
//! group carrying its translate/scale, so the SVG renderer performs the source-over
//! composite with the same weights as [`VisualState::flatten`].

use std::fmt::Write as _;

use crate::{
    foundation::core::Rgba8,
    foundation::error::{LobbyError, LobbyResult},
    visual::state::{Node, Primitive, Stroke, TextAnchor, VisualState},
};

/// Serialize `state` as SVG, using `font_family` for every text node.
pub fn state_to_svg(state: &VisualState, font_family: &str) -> LobbyResult<String> {
    let mut out = String::with_capacity(16 * 1024);
    write_document(&mut out, state, font_family)
        .map_err(|e| LobbyError::render(format!("svg serialization failed: {e}")))?;
    Ok(out)
}

fn write_document(out: &mut String, state: &VisualState, font: &str) -> std::fmt::Result {
    let (w, h) = (state.canvas.width, state.canvas.height);
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    )?;
    writeln!(
        out,
        r#"<rect width="{w}" height="{h}"{}/>"#,
        paint("fill", state.background)
    )?;

    let font = escape(font);
    for layer in &state.layers {
        if layer.opacity <= 0.0 {
            continue;
        }
        writeln!(
            out,
            r#"<g data-scene="{}" opacity="{}">"#,
            layer.scene,
            num(layer.opacity)
        )?;
        for node in layer.nodes.iter().filter(|n| n.opacity > 0.0) {
            write_node(out, node, &font)?;
        }
        writeln!(out, "</g>")?;
    }
    writeln!(out, "</svg>")
}

fn write_node(out: &mut String, node: &Node, font: &str) -> std::fmt::Result {
    write!(
        out,
        r#"<g id="{}" transform="translate({} {}) scale({} {})" opacity="{}">"#,
        escape(&node.id),
        num(node.translate.x),
        num(node.translate.y),
        num(node.scale.x),
        num(node.scale.y),
        num(node.opacity)
    )?;

    match &node.primitive {
        Primitive::Text(t) => {
            let anchor = match t.anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            write!(
                out,
                r#"<text font-family="{font}" font-size="{}" font-weight="{}" text-anchor="{anchor}"{}>{}</text>"#,
                num(t.size_px),
                t.weight,
                paint("fill", t.color),
                escape(&t.content)
            )?;
        }
        Primitive::Rect(r) => {
            write!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}"{}/>"#,
                num(r.x),
                num(r.y),
                num(r.width.max(0.0)),
                num(r.height.max(0.0)),
                num(r.radius.max(0.0)),
                paint("fill", r.fill)
            )?;
        }
        Primitive::Circle(c) => {
            write!(
                out,
                r#"<circle r="{}"{}{}/>"#,
                num(c.radius.max(0.0)),
                opt_paint("fill", c.fill),
                stroke_attrs(c.stroke.as_ref())
            )?;
        }
        Primitive::Path(p) => {
            write!(
                out,
                r#"<path d="{}"{}{}/>"#,
                escape(&p.d),
                opt_paint("fill", p.fill),
                stroke_attrs(p.stroke.as_ref())
            )?;
        }
    }
    writeln!(out, "</g>")
}

fn paint(attr: &str, c: Rgba8) -> String {
    if c.a == 255 {
        format!(r#" {attr}="{}""#, c.to_hex_rgb())
    } else {
        format!(
            r#" {attr}="{}" {attr}-opacity="{}""#,
            c.to_hex_rgb(),
            num(c.alpha_f64())
        )
    }
}

fn opt_paint(attr: &str, c: Option<Rgba8>) -> String {
    match c {
        Some(c) => paint(attr, c),
        None => format!(r#" {attr}="none""#),
    }
}

fn stroke_attrs(s: Option<&Stroke>) -> String {
    let Some(s) = s else {
        return String::new();
    };
    let mut attrs = paint("stroke", s.color);
    attrs.push_str(&format!(
        r#" stroke-width="{}" stroke-linejoin="round""#,
        num(s.width)
    ));
    if let Some(dash) = s.dash_array.filter(|d| *d > 0.0) {
        attrs.push_str(&format!(
            r#" stroke-dasharray="{} {}" stroke-dashoffset="{}""#,
            num(dash),
            num(dash),
            num(s.dash_offset)
        ));
    }
    attrs
}

/// Fixed three-decimal rendering with trailing zeros trimmed.
pub(crate) fn num(v: f64) -> String {
    let s = format!("{:.3}", v + 0.0);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// Escape text for XML content and attribute values.
pub(crate) fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/visual/svg.rs"]
mod tests;
