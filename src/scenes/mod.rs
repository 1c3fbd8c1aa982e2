//! Scene animators.
//!
//! Each animator is a pure function of `(local frame, payload, crossfade progress)`.
//! Nothing here reads a clock or keeps state between calls, so any frame can be
//! computed in isolation and in any order.

pub(crate) mod brand;
pub(crate) mod intro;
pub(crate) mod kpi;
pub(crate) mod outro;
pub(crate) mod region;
pub(crate) mod trend;

use crate::{
    composition::config::Theme,
    data::contract::LobbyData,
    foundation::core::{Canvas, Rgba8, Vec2},
    foundation::error::LobbyResult,
    timeline::{sequencer::EnterExitProgress, window::SceneKind},
    visual::state::{Fragment, Node, Primitive, RectPrim, TextAnchor, TextPrim},
};

/// Inputs shared by every scene animator call.
#[derive(Clone, Copy, Debug)]
pub struct SceneCtx<'a> {
    /// `global - window.start`; negative during pre-roll.
    pub local_frame: i64,
    /// Nominal slot length of the scene window.
    pub duration: u64,
    /// Crossfade ramps.
    pub progress: EnterExitProgress,
    /// Output canvas.
    pub canvas: Canvas,
    /// Design tokens.
    pub theme: &'a Theme,
}

impl SceneCtx<'_> {
    /// Layout scale relative to a 1080-pixel-tall canvas.
    pub fn unit(&self) -> f64 {
        self.canvas.h() / 1080.0
    }

    pub(crate) fn text(
        &self,
        id: impl Into<String>,
        at: Vec2,
        content: impl Into<String>,
        size_px: f64,
        weight: u16,
        color: Rgba8,
        anchor: TextAnchor,
    ) -> Node {
        Node::new(
            id,
            at,
            Primitive::Text(TextPrim {
                content: content.into(),
                size_px: size_px * self.unit(),
                weight,
                color,
                anchor,
            }),
        )
    }

    pub(crate) fn rect(
        &self,
        id: impl Into<String>,
        at: Vec2,
        (x, y, width, height): (f64, f64, f64, f64),
        radius: f64,
        fill: Rgba8,
    ) -> Node {
        Node::new(
            id,
            at,
            Primitive::Rect(RectPrim {
                x,
                y,
                width,
                height,
                radius,
                fill,
            }),
        )
    }

    /// Wrap nodes into a fragment whose layer opacity is `enter * exit`.
    pub(crate) fn fragment(&self, scene: SceneKind, nodes: Vec<Node>) -> Fragment {
        Fragment {
            scene,
            local_frame: self.local_frame,
            progress: self.progress,
            opacity: self.progress.opacity().clamp(0.0, 1.0),
            nodes,
        }
    }
}

/// Common contract of the five scene types.
pub trait SceneAnimator: Sync {
    /// Scene this animator draws.
    fn kind(&self) -> SceneKind;

    /// Compute the fragment for one frame. Must be deterministic and side-effect free.
    fn render(&self, ctx: &SceneCtx<'_>, data: &LobbyData) -> LobbyResult<Fragment>;
}

/// The animator responsible for `kind`.
pub fn animator_for(kind: SceneKind) -> &'static dyn SceneAnimator {
    match kind {
        SceneKind::Intro => &intro::IntroScene,
        SceneKind::Kpi => &kpi::KpiScene,
        SceneKind::Trend => &trend::TrendScene,
        SceneKind::Region => &region::RegionScene,
        SceneKind::Outro => &outro::OutroScene,
    }
}

#[cfg(test)]
pub(crate) fn test_ctx(theme: &Theme, local_frame: i64, duration: u64) -> SceneCtx<'_> {
    SceneCtx {
        local_frame,
        duration,
        progress: EnterExitProgress::FULL,
        canvas: Canvas {
            width: 1920,
            height: 1080,
        },
        theme,
    }
}
