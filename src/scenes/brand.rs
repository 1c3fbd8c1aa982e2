//! Brand card shared by the intro and outro.
//!
//! Both scenes emit the same node set through [`brand_nodes`], so the outro can end
//! on exactly the intro's opening frame.

use crate::{
    data::contract::LobbyData,
    foundation::core::Vec2,
    foundation::error::LobbyResult,
    scenes::SceneCtx,
    visual::state::{Node, TextAnchor},
};

/// Animated parameters of the brand card.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct BrandParams {
    /// Company name opacity.
    pub title_opacity: f64,
    /// Company name vertical offset in 1080p pixels (positive is down).
    pub title_offset: f64,
    /// Accent rule horizontal scale.
    pub rule_scale: f64,
    /// Tagline opacity.
    pub tagline_opacity: f64,
    /// Tagline vertical offset in 1080p pixels.
    pub tagline_offset: f64,
    /// "Updated …" stamp opacity.
    pub stamp_opacity: f64,
}

impl BrandParams {
    /// Everything visible and at rest.
    pub const SHOWN: Self = Self {
        title_opacity: 1.0,
        title_offset: 0.0,
        rule_scale: 1.0,
        tagline_opacity: 1.0,
        tagline_offset: 0.0,
        stamp_opacity: 1.0,
    };
}

const RULE_WIDTH: f64 = 360.0;
const RULE_HEIGHT: f64 = 6.0;

/// `Updated Oct 1, 2026` from the payload timestamp.
pub fn stamp_text(data: &LobbyData) -> LobbyResult<String> {
    let at = data.last_updated_at()?;
    Ok(format!("Updated {}", at.format("%b %-d, %Y")))
}

/// Node set of the brand card for the given parameters.
pub fn brand_nodes(
    ctx: &SceneCtx<'_>,
    data: &LobbyData,
    p: BrandParams,
) -> LobbyResult<Vec<Node>> {
    let theme = ctx.theme;
    let u = ctx.unit();
    let cx = ctx.canvas.w() / 2.0;
    let h = ctx.canvas.h();

    let title = ctx
        .text(
            "brand.title",
            Vec2::new(cx, h * 0.46 + p.title_offset * u),
            data.company_name.clone(),
            theme.title_px,
            800,
            theme.text,
            TextAnchor::Middle,
        )
        .with_opacity(p.title_opacity);

    let rule = ctx
        .rect(
            "brand.rule",
            Vec2::new(cx, h * 0.52),
            (
                -RULE_WIDTH * u / 2.0,
                -RULE_HEIGHT * u / 2.0,
                RULE_WIDTH * u,
                RULE_HEIGHT * u,
            ),
            RULE_HEIGHT * u / 2.0,
            theme.accent,
        )
        .with_scale(p.rule_scale, 1.0);

    let tagline = ctx
        .text(
            "brand.tagline",
            Vec2::new(cx, h * 0.60 + p.tagline_offset * u),
            data.tagline.clone(),
            theme.heading_px * 0.75,
            400,
            theme.muted,
            TextAnchor::Middle,
        )
        .with_opacity(p.tagline_opacity);

    let stamp = ctx
        .text(
            "brand.stamp",
            Vec2::new(cx, h * 0.90),
            stamp_text(data)?,
            theme.body_px * 0.8,
            500,
            theme.muted,
            TextAnchor::Middle,
        )
        .with_opacity(p.stamp_opacity);

    Ok(vec![title, rule, tagline, stamp])
}
