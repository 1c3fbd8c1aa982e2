use crate::{
    animation::{ease::Ease, interp::interpolate_frames},
    data::contract::LobbyData,
    foundation::error::LobbyResult,
    scenes::{
        SceneAnimator, SceneCtx,
        brand::{BrandParams, brand_nodes},
        intro::IntroScene,
    },
    timeline::window::SceneKind,
    visual::state::Fragment,
};

/// Brand card with the data timestamp, winding down to the intro's opening frame.
///
/// On the last local frame (`duration - 1`) every brand parameter equals
/// `IntroScene::params_at(0)`, so looping the video has no visible seam.
pub struct OutroScene;

impl OutroScene {
    /// Brand parameters at a local frame for a scene of `duration` frames.
    pub fn params_at(local: i64, duration: u64) -> LobbyResult<BrandParams> {
        let seam = IntroScene::params_at(0)?;
        let shown = BrandParams::SHOWN;
        let last = duration.saturating_sub(1) as i64;
        let ease = Ease::InOutCubic;

        let stamp_opacity = if local >= last - 70 {
            interpolate_frames(
                local,
                (last - 70, last - 40),
                (shown.stamp_opacity, seam.stamp_opacity),
                ease,
            )?
        } else {
            interpolate_frames(local, (0, 30), (0.0, shown.stamp_opacity), Ease::OutCubic)?
        };

        Ok(BrandParams {
            title_opacity: interpolate_frames(
                local,
                (last - 40, last),
                (shown.title_opacity, seam.title_opacity),
                ease,
            )?,
            title_offset: interpolate_frames(
                local,
                (last - 40, last),
                (shown.title_offset, seam.title_offset),
                ease,
            )?,
            rule_scale: interpolate_frames(
                local,
                (last - 45, last - 15),
                (shown.rule_scale, seam.rule_scale),
                ease,
            )?,
            tagline_opacity: interpolate_frames(
                local,
                (last - 50, last - 10),
                (shown.tagline_opacity, seam.tagline_opacity),
                ease,
            )?,
            tagline_offset: interpolate_frames(
                local,
                (last - 50, last - 10),
                (shown.tagline_offset, seam.tagline_offset),
                ease,
            )?,
            stamp_opacity,
        })
    }
}

impl SceneAnimator for OutroScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Outro
    }

    fn render(&self, ctx: &SceneCtx<'_>, data: &LobbyData) -> LobbyResult<Fragment> {
        let params = Self::params_at(ctx.local_frame, ctx.duration)?;
        let nodes = brand_nodes(ctx, data, params)?;
        Ok(ctx.fragment(SceneKind::Outro, nodes))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/outro.rs"]
mod tests;
