use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::core::{Canvas, Fps, Rgba8},
    foundation::error::{LobbyError, LobbyResult},
    timeline::window::{SceneWindow, default_windows, validate_windows},
};

/// Static composition parameters supplied by the host.
///
/// Loaded from JSON or taken from [`Default`] (900 frames, 30 fps, 1920×1080).
/// Missing fields fall back to the defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CompositionConfig {
    /// Timeline frame rate.
    pub fps: Fps,
    /// Output canvas.
    pub canvas: Canvas,
    /// Total frame count; valid frames are `[0, total_frames)`.
    pub total_frames: u64,
    /// Scene placement table, in timeline order.
    pub windows: Vec<SceneWindow>,
    /// Design tokens handed to every scene animator.
    pub theme: Theme,
}

impl Default for CompositionConfig {
    fn default() -> Self {
        Self {
            fps: Fps { num: 30, den: 1 },
            canvas: Canvas {
                width: 1920,
                height: 1080,
            },
            total_frames: 900,
            windows: default_windows(),
            theme: Theme::default(),
        }
    }
}

impl CompositionConfig {
    /// Read and validate a config file.
    pub fn from_path(path: &Path) -> LobbyResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_str(&text)
            .map_err(|e| LobbyError::configuration(format!("invalid config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject bad fps/canvas/length and malformed scene tables.
    pub fn validate(&self) -> LobbyResult<()> {
        self.fps.validate()?;
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(LobbyError::configuration("canvas width/height must be > 0"));
        }
        if self.total_frames == 0 {
            return Err(LobbyError::configuration("total_frames must be > 0"));
        }
        validate_windows(&self.windows, self.total_frames)
    }

    /// Total duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.fps.frames_to_secs(self.total_frames)
    }
}

/// Immutable design tokens.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Canvas background.
    pub background: Rgba8,
    /// Card and panel fill.
    pub surface: Rgba8,
    /// Primary text.
    pub text: Rgba8,
    /// Secondary text and axes.
    pub muted: Rgba8,
    /// Accent (rules, chart line, highlights).
    pub accent: Rgba8,
    /// Positive growth.
    pub positive: Rgba8,
    /// Negative growth.
    pub negative: Rgba8,
    /// Font family list used for every text node.
    pub font_family: String,
    /// Brand title size in pixels at 1080p.
    pub title_px: f64,
    /// Section heading size in pixels at 1080p.
    pub heading_px: f64,
    /// Body text size in pixels at 1080p.
    pub body_px: f64,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Rgba8::rgb(0x0b, 0x10, 0x20),
            surface: Rgba8::rgb(0x14, 0x1b, 0x2e),
            text: Rgba8::rgb(0xf5, 0xf7, 0xfa),
            muted: Rgba8::rgb(0x9a, 0xa4, 0xb2),
            accent: Rgba8::rgb(0x4f, 0x8c, 0xff),
            positive: Rgba8::rgb(0x3d, 0xdc, 0x97),
            negative: Rgba8::rgb(0xff, 0x6b, 0x6b),
            font_family: "Inter, Helvetica, Arial, sans-serif".to_string(),
            title_px: 112.0,
            heading_px: 56.0,
            body_px: 32.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/config.rs"]
mod tests;
