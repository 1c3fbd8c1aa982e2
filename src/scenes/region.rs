use kurbo::Affine;

use crate::{
    animation::{ease::Ease, interp::interpolate_frames, pulse::Pulse},
    data::{
        contract::LobbyData,
        format::{format_compact_currency, group_thousands},
        regions::{DECLARED_REGIONS, DeclaredRegion, MAP_HEIGHT, MAP_WIDTH},
    },
    foundation::core::{BezPath, Canvas, Point, Rgba8, Vec2},
    foundation::error::LobbyResult,
    scenes::{SceneAnimator, SceneCtx},
    timeline::window::SceneKind,
    visual::state::{Fragment, Node, PathPrim, Primitive, Stroke, TextAnchor},
};

/// Local frame the first declared region starts fading in.
pub const REGION_FIRST_FADE: i64 = 10;
/// Delay between consecutive region reveals.
pub const REGION_FADE_STEP: i64 = 20;
/// Length of one region's fade.
pub const REGION_FADE_FRAMES: i64 = 18;
/// Period of the top-region highlight pulse.
pub const REGION_PULSE_PERIOD: u64 = 45;

const HIGHLIGHT: Pulse = Pulse {
    period: REGION_PULSE_PERIOD,
    min: 0.25,
    max: 1.0,
};

/// Fade of declared slot `slot` at `local`.
///
/// Slots are fixed: a region missing from the payload leaves its sub-window empty
/// rather than pulling later regions forward.
pub fn region_fade(local: i64, slot: usize) -> LobbyResult<f64> {
    let start = REGION_FIRST_FADE + REGION_FADE_STEP * slot as i64;
    interpolate_frames(
        local,
        (start, start + REGION_FADE_FRAMES),
        (0.0, 1.0),
        Ease::OutCubic,
    )
}

/// Highlight ring opacity when the top region sits in declared slot `slot`.
pub fn highlight_opacity(local: i64, slot: usize) -> LobbyResult<f64> {
    Ok(region_fade(local, slot)? * HIGHLIGHT.sample(local))
}

/// Map space to canvas pixels: uniform scale into the left-hand map box.
pub fn map_transform(canvas: Canvas) -> Affine {
    let (bw, bh) = (canvas.w() * 0.55, canvas.h() * 0.7);
    let k = (bw / MAP_WIDTH).min(bh / MAP_HEIGHT);
    Affine::translate((canvas.w() * 0.08, canvas.h() * 0.2)) * Affine::scale(k)
}

fn outline_path(region: &DeclaredRegion) -> BezPath {
    let mut path = BezPath::new();
    for (i, &(x, y)) in region.outline.iter().enumerate() {
        if i == 0 {
            path.move_to((x, y));
        } else {
            path.line_to((x, y));
        }
    }
    path.close_path();
    path
}

fn path_node(
    id: String,
    path: &BezPath,
    fill: Option<Rgba8>,
    stroke: Option<Stroke>,
) -> Node {
    Node::new(
        id,
        Vec2::ZERO,
        Primitive::Path(PathPrim {
            d: path.to_svg(),
            fill,
            stroke,
        }),
    )
}

/// Stylized map: present regions fade in one at a time, the top region pulses.
pub struct RegionScene;

impl SceneAnimator for RegionScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Region
    }

    fn render(&self, ctx: &SceneCtx<'_>, data: &LobbyData) -> LobbyResult<Fragment> {
        let theme = ctx.theme;
        let u = ctx.unit();
        let l = ctx.local_frame;
        let (w, h) = (ctx.canvas.w(), ctx.canvas.h());
        let to_canvas = map_transform(ctx.canvas);
        let heading_fade = interpolate_frames(l, (0, 20), (0.0, 1.0), Ease::OutCubic)?;

        let mut nodes = vec![
            ctx.text(
                "region.heading",
                Vec2::new(w * 0.08, h * 0.14),
                "Units by region",
                theme.heading_px,
                700,
                theme.text,
                TextAnchor::Start,
            )
            .with_opacity(heading_fade),
        ];

        for region in &DECLARED_REGIONS {
            let path = to_canvas * outline_path(region);
            nodes.push(path_node(
                format!("region.base.{}", region.id),
                &path,
                Some(theme.surface),
                Some(Stroke::solid(theme.muted.with_alpha(96), 1.5 * u)),
            ));
        }

        let top = data.top_region();
        for (slot, shape) in DECLARED_REGIONS.iter().enumerate() {
            let Some(region) = data.regions.iter().find(|r| r.id == shape.id) else {
                continue;
            };
            let fade = region_fade(l, slot)?;
            let path = to_canvas * outline_path(shape);
            let anchor = to_canvas * Point::from(shape.label_anchor());

            nodes.push(
                path_node(
                    format!("region.fill.{}", region.id),
                    &path,
                    Some(theme.accent.with_alpha(150)),
                    None,
                )
                .with_opacity(fade),
            );
            nodes.push(
                ctx.text(
                    format!("region.label.{}", region.id),
                    anchor.to_vec2(),
                    region.label.clone(),
                    theme.body_px * 0.8,
                    700,
                    theme.text,
                    TextAnchor::Middle,
                )
                .with_opacity(fade),
            );
            nodes.push(
                ctx.text(
                    format!("region.units.{}", region.id),
                    anchor.to_vec2() + Vec2::new(0.0, 30.0 * u),
                    format!(
                        "{} units · {}",
                        group_thousands(region.units.round() as i64),
                        format_compact_currency(region.revenue)
                    ),
                    theme.body_px * 0.6,
                    500,
                    theme.muted,
                    TextAnchor::Middle,
                )
                .with_opacity(fade),
            );

            if top.is_some_and(|t| t.id == region.id) {
                nodes.push(
                    path_node(
                        format!("region.pulse.{}", region.id),
                        &path,
                        None,
                        Some(Stroke::solid(theme.positive, 6.0 * u)),
                    )
                    .with_opacity(highlight_opacity(l, slot)?),
                );
            }
        }

        if let Some(top) = top {
            let fade = region_fade(l, DECLARED_REGIONS.len())?;
            nodes.push(
                ctx.text(
                    "region.top",
                    Vec2::new(w * 0.68, h * 0.42),
                    format!("Top region: {}", top.label),
                    theme.heading_px * 0.8,
                    700,
                    theme.positive,
                    TextAnchor::Start,
                )
                .with_opacity(fade),
            );
            nodes.push(
                ctx.text(
                    "region.top.units",
                    Vec2::new(w * 0.68, h * 0.42 + 56.0 * u),
                    format!("{} units shipped", group_thousands(top.units.round() as i64)),
                    theme.body_px,
                    500,
                    theme.muted,
                    TextAnchor::Start,
                )
                .with_opacity(fade),
            );
        }

        Ok(ctx.fragment(SceneKind::Region, nodes))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/region.rs"]
mod tests;
