use xxhash_rust::xxh3::Xxh3;

use crate::{
    foundation::core::{Rgba8, Vec2},
    visual::state::{Primitive, Stroke, TextAnchor, VisualState},
};

const XXH3_SEED: u64 = 0x4c0b_b7ee_1d5e_a3f1;

/// Stable per-frame fingerprint used by static-frame elision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameFingerprint {
    pub hi: u64,
    pub lo: u64,
}

/// Fingerprint of everything that reaches the pixels of `state`.
///
/// The frame index, local frames and ramp values are not hashed, so two frames
/// that draw the same thing elide against each other regardless of when they occur.
pub fn fingerprint_state(state: &VisualState) -> FrameFingerprint {
    let mut h = StableHasher::new();
    h.write_u32(state.canvas.width);
    h.write_u32(state.canvas.height);
    h.write_color(state.background);

    h.write_u32(state.layers.len() as u32);
    for layer in &state.layers {
        h.write_f64(layer.opacity);
        h.write_u32(layer.nodes.len() as u32);
        for node in &layer.nodes {
            h.write_str(&node.id);
            h.write_f64(node.opacity);
            h.write_vec2(node.translate);
            h.write_vec2(node.scale);
            write_primitive(&mut h, &node.primitive);
        }
    }
    h.finish()
}

fn write_primitive(h: &mut StableHasher, p: &Primitive) {
    match p {
        Primitive::Text(t) => {
            h.write_u8(0);
            h.write_str(&t.content);
            h.write_f64(t.size_px);
            h.write_u32(u32::from(t.weight));
            h.write_color(t.color);
            h.write_u8(match t.anchor {
                TextAnchor::Start => 0,
                TextAnchor::Middle => 1,
                TextAnchor::End => 2,
            });
        }
        Primitive::Rect(r) => {
            h.write_u8(1);
            for v in [r.x, r.y, r.width, r.height, r.radius] {
                h.write_f64(v);
            }
            h.write_color(r.fill);
        }
        Primitive::Circle(c) => {
            h.write_u8(2);
            h.write_f64(c.radius);
            h.write_opt_color(c.fill);
            write_stroke(h, c.stroke.as_ref());
        }
        Primitive::Path(p) => {
            h.write_u8(3);
            h.write_str(&p.d);
            h.write_opt_color(p.fill);
            write_stroke(h, p.stroke.as_ref());
        }
    }
}

fn write_stroke(h: &mut StableHasher, s: Option<&Stroke>) {
    match s {
        Some(s) => {
            h.write_bool(true);
            h.write_color(s.color);
            h.write_f64(s.width);
            match s.dash_array {
                Some(d) => {
                    h.write_bool(true);
                    h.write_f64(d);
                }
                None => h.write_bool(false),
            }
            h.write_f64(s.dash_offset);
        }
        None => h.write_bool(false),
    }
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    // -0.0 and 0.0 draw the same.
    fn write_f64(&mut self, v: f64) {
        self.write_u64((v + 0.0).to_bits());
    }

    fn write_str(&mut self, s: &str) {
        self.write_u32(s.len() as u32);
        self.write_bytes(s.as_bytes());
    }

    fn write_vec2(&mut self, v: Vec2) {
        self.write_f64(v.x);
        self.write_f64(v.y);
    }

    fn write_color(&mut self, c: Rgba8) {
        self.write_bytes(&[c.r, c.g, c.b, c.a]);
    }

    fn write_opt_color(&mut self, c: Option<Rgba8>) {
        match c {
            Some(c) => {
                self.write_bool(true);
                self.write_color(c);
            }
            None => self.write_bool(false),
        }
    }

    fn finish(self) -> FrameFingerprint {
        let v = self.inner.digest128();
        FrameFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/visual/fingerprint.rs"]
mod tests;
