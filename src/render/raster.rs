use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context as _;

use crate::{
    foundation::core::Rgba8,
    foundation::error::{LobbyError, LobbyResult},
    visual::{state::VisualState, svg::state_to_svg},
};

/// One rendered frame of RGBA8 pixels, row-major, top-left origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    /// Color channels are premultiplied by alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Straight-alpha copy of the pixel data.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }

    /// Lay the frame over an opaque `background`, writing straight RGBA with alpha 255.
    pub fn write_opaque(&self, background: Rgba8, dst: &mut [u8]) -> LobbyResult<()> {
        if dst.len() != self.data.len() || self.data.len() != self.pixel_bytes() {
            return Err(LobbyError::render(format!(
                "opaque copy of a {}x{} frame needs {} bytes, got {} -> {}",
                self.width,
                self.height,
                self.pixel_bytes(),
                self.data.len(),
                dst.len()
            )));
        }
        let bg = [background.r, background.g, background.b].map(u32::from);
        for (out, px) in dst.chunks_exact_mut(4).zip(self.data.chunks_exact(4)) {
            let a = u32::from(px[3]);
            for c in 0..3 {
                let src = if self.premultiplied {
                    u32::from(px[c])
                } else {
                    div255(u32::from(px[c]) * a)
                };
                out[c] = (src + div255(bg[c] * (255 - a))).min(255) as u8;
            }
            out[3] = 255;
        }
        Ok(())
    }

    fn pixel_bytes(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }

    /// Write the frame as a PNG.
    pub fn save_png(&self, path: &Path) -> LobbyResult<()> {
        crate::encode::ffmpeg::ensure_parent_dir(path)?;
        image::save_buffer_with_format(
            path,
            &self.to_straight_rgba8(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

/// Turns a [`VisualState`] into pixels through its SVG form (usvg + resvg).
///
/// The font database is loaded once and shared; cloning a rasterizer is cheap.
#[derive(Clone)]
pub struct SvgRasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
    font_family: String,
}

impl SvgRasterizer {
    /// System fonts plus every font file directly inside `font_dirs`.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn new(font_family: impl Into<String>, font_dirs: &[PathBuf]) -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        for dir in font_dirs {
            db.load_fonts_dir(dir);
        }
        tracing::debug!(faces = db.len(), "font database loaded");
        Self {
            fontdb: Arc::new(db),
            font_family: font_family.into(),
        }
    }

    /// Family name written into every text element.
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// SVG document for `state`.
    pub fn svg(&self, state: &VisualState) -> LobbyResult<String> {
        state_to_svg(state, &self.font_family)
    }

    /// Rasterize `state` to premultiplied RGBA8 at the canvas size.
    pub fn rasterize(&self, state: &VisualState) -> LobbyResult<FrameRGBA> {
        let svg = self.svg(state)?;
        let opts = usvg::Options {
            fontdb: Arc::clone(&self.fontdb),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(&svg, &opts)
            .map_err(|e| LobbyError::render(format!("parse frame svg: {e}")))?;

        let (width, height) = (state.canvas.width, state.canvas.height);
        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| LobbyError::render(format!("failed to allocate {width}x{height} pixmap")))?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::identity(),
            &mut pixmap.as_mut(),
        );

        Ok(FrameRGBA {
            width,
            height,
            data: pixmap.take(),
            premultiplied: true,
        })
    }
}

impl std::fmt::Debug for SvgRasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SvgRasterizer")
            .field("faces", &self.fontdb.len())
            .field("font_family", &self.font_family)
            .finish()
    }
}

fn div255(x: u32) -> u32 {
    (x + 127) / 255
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
