//! Line chart with a draw-on reveal.
//!
//! The polyline is stroked with a single dash as long as the whole path; sliding
//! the dash offset from `total` to `0` draws it on from left to right. A marker
//! appears once the revealed length reaches its vertex.

use kurbo::ParamCurveArclen;

use crate::{
    animation::{ease::Ease, interp::interpolate_frames},
    data::{contract::LobbyData, format::format_signed_percent},
    foundation::core::{BezPath, Canvas, Point, Vec2},
    foundation::error::LobbyResult,
    scenes::{SceneAnimator, SceneCtx},
    timeline::window::SceneKind,
    visual::state::{CirclePrim, Fragment, Node, PathPrim, Primitive, Stroke, TextAnchor},
};

/// Local frame the line starts drawing.
pub const TREND_REVEAL_START: i64 = 10;
/// Local frame the line is fully drawn.
pub const TREND_REVEAL_END: i64 = 100;
const BADGE_FADE: (i64, i64) = (100, 120);
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Chart polyline in canvas pixels.
#[derive(Clone, Debug)]
pub struct TrendGeometry {
    /// Vertex positions.
    pub points: Vec<Point>,
    /// Arc length from the first vertex to each vertex; `cumulative[0] == 0`.
    pub cumulative: Vec<f64>,
    /// Total path length; equal to the last cumulative entry.
    pub total: f64,
    /// The polyline.
    pub path: BezPath,
    /// Chart box `(left, top, right, bottom)`.
    pub bounds: (f64, f64, f64, f64),
}

/// Lay the values out in the chart box of `canvas`.
///
/// A flat series sits at mid-height.
pub fn chart_geometry(canvas: Canvas, values: &[f64]) -> TrendGeometry {
    let u = canvas.h() / 1080.0;
    let (left, right) = (160.0 * u, canvas.w() - 160.0 * u);
    let (top, bottom) = (canvas.h() * 0.28, canvas.h() * 0.80);

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    let step = if values.len() > 1 {
        (right - left) / (values.len() - 1) as f64
    } else {
        0.0
    };

    let points: Vec<Point> = values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let y = if span > 0.0 {
                bottom - (v - min) / span * (bottom - top)
            } else {
                (top + bottom) / 2.0
            };
            Point::new(left + i as f64 * step, y)
        })
        .collect();

    let mut path = BezPath::new();
    for (i, p) in points.iter().enumerate() {
        if i == 0 {
            path.move_to(*p);
        } else {
            path.line_to(*p);
        }
    }

    let mut cumulative = Vec::with_capacity(points.len());
    let mut acc = 0.0;
    if !points.is_empty() {
        cumulative.push(0.0);
    }
    for seg in path.segments() {
        acc += seg.arclen(1e-9);
        cumulative.push(acc);
    }

    TrendGeometry {
        points,
        cumulative,
        total: acc,
        path,
        bounds: (left, top, right, bottom),
    }
}

/// Revealed path length at `local`.
pub fn reveal_length(local: i64, total: f64) -> LobbyResult<f64> {
    interpolate_frames(
        local,
        (TREND_REVEAL_START, TREND_REVEAL_END),
        (0.0, total),
        Ease::InOutCubic,
    )
}

/// Monthly series drawn on, with markers and a growth badge.
pub struct TrendScene;

impl SceneAnimator for TrendScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Trend
    }

    fn render(&self, ctx: &SceneCtx<'_>, data: &LobbyData) -> LobbyResult<Fragment> {
        let theme = ctx.theme;
        let u = ctx.unit();
        let l = ctx.local_frame;
        let geo = chart_geometry(ctx.canvas, &data.trend.points);
        let (left, top, right, bottom) = geo.bounds;
        let reveal = reveal_length(l, geo.total)?;
        let frame_fade = interpolate_frames(l, (0, 20), (0.0, 1.0), Ease::OutCubic)?;

        let mut nodes = Vec::with_capacity(4 + 2 * geo.points.len());
        nodes.push(
            ctx.text(
                "trend.title",
                Vec2::new(left, top - 90.0 * u),
                data.trend.label.clone(),
                theme.heading_px,
                700,
                theme.text,
                TextAnchor::Start,
            )
            .with_opacity(frame_fade),
        );

        let mut axis = BezPath::new();
        axis.move_to((left, bottom));
        axis.line_to((right, bottom));
        nodes.push(
            Node::new(
                "trend.axis",
                Vec2::ZERO,
                Primitive::Path(PathPrim {
                    d: axis.to_svg(),
                    fill: None,
                    stroke: Some(Stroke::solid(theme.muted, 2.0 * u)),
                }),
            )
            .with_opacity(frame_fade),
        );

        for (i, p) in geo.points.iter().enumerate() {
            let month = MONTHS.get(i).copied().unwrap_or_default();
            nodes.push(
                ctx.text(
                    format!("trend.month.{i}"),
                    Vec2::new(p.x, bottom + 48.0 * u),
                    month,
                    theme.body_px * 0.75,
                    500,
                    theme.muted,
                    TextAnchor::Middle,
                )
                .with_opacity(frame_fade),
            );
        }

        nodes.push(Node::new(
            "trend.line",
            Vec2::ZERO,
            Primitive::Path(PathPrim {
                d: geo.path.to_svg(),
                fill: None,
                stroke: Some(Stroke {
                    color: theme.accent,
                    width: 6.0 * u,
                    dash_array: Some(geo.total),
                    dash_offset: geo.total - reveal,
                }),
            }),
        ));

        for (i, (p, at)) in geo.points.iter().zip(&geo.cumulative).enumerate() {
            let visible = reveal >= *at;
            nodes.push(
                Node::new(
                    format!("trend.point.{i}"),
                    p.to_vec2(),
                    Primitive::Circle(CirclePrim {
                        radius: 9.0 * u,
                        fill: Some(theme.accent),
                        stroke: Some(Stroke::solid(theme.background, 3.0 * u)),
                    }),
                )
                .with_opacity(if visible { 1.0 } else { 0.0 }),
            );
        }

        let growth = data.trend.growth_ratio();
        let badge_color = if growth >= 0.0 {
            theme.positive
        } else {
            theme.negative
        };
        let badge_opacity = interpolate_frames(l, BADGE_FADE, (0.0, 1.0), Ease::OutCubic)?;
        let badge_scale = interpolate_frames(l, BADGE_FADE, (0.8, 1.0), Ease::OutCubic)?;
        let badge_at = Vec2::new(right - 130.0 * u, top - 100.0 * u);
        nodes.push(
            ctx.rect(
                "trend.badge",
                badge_at,
                (-130.0 * u, -44.0 * u, 260.0 * u, 88.0 * u),
                44.0 * u,
                badge_color.with_alpha(56),
            )
            .with_opacity(badge_opacity)
            .with_scale(badge_scale, badge_scale),
        );
        nodes.push(
            ctx.text(
                "trend.badge.value",
                badge_at + Vec2::new(0.0, 14.0 * u),
                format_signed_percent(growth),
                theme.body_px * 1.25,
                800,
                badge_color,
                TextAnchor::Middle,
            )
            .with_opacity(badge_opacity)
            .with_scale(badge_scale, badge_scale),
        );

        Ok(ctx.fragment(SceneKind::Trend, nodes))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/trend.rs"]
mod tests;
