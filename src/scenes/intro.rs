use crate::{
    animation::{ease::Ease, interp::interpolate_frames},
    data::contract::LobbyData,
    foundation::error::LobbyResult,
    scenes::{
        SceneAnimator, SceneCtx,
        brand::{BrandParams, brand_nodes},
    },
    timeline::window::SceneKind,
    visual::state::Fragment,
};

/// Brand card reveal: title rises in, the accent rule grows, then the tagline follows.
pub struct IntroScene;

impl IntroScene {
    /// Brand parameters at a local frame. Every value is monotonic in `local`.
    pub fn params_at(local: i64) -> LobbyResult<BrandParams> {
        Ok(BrandParams {
            title_opacity: interpolate_frames(local, (0, 30), (0.0, 1.0), Ease::OutCubic)?,
            title_offset: interpolate_frames(local, (0, 30), (40.0, 0.0), Ease::OutCubic)?,
            rule_scale: interpolate_frames(local, (20, 50), (0.0, 1.0), Ease::InOutCubic)?,
            tagline_opacity: interpolate_frames(local, (30, 60), (0.0, 1.0), Ease::OutCubic)?,
            tagline_offset: interpolate_frames(local, (30, 60), (24.0, 0.0), Ease::OutCubic)?,
            stamp_opacity: 0.0,
        })
    }
}

impl SceneAnimator for IntroScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Intro
    }

    fn render(&self, ctx: &SceneCtx<'_>, data: &LobbyData) -> LobbyResult<Fragment> {
        let params = Self::params_at(ctx.local_frame)?;
        let nodes = brand_nodes(ctx, data, params)?;
        Ok(ctx.fragment(SceneKind::Intro, nodes))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/intro.rs"]
mod tests;
