use crate::{
    animation::{ease::Ease, interp::interpolate_frames},
    data::{contract::LobbyData, format::format_kpi},
    foundation::core::Vec2,
    foundation::error::LobbyResult,
    scenes::{SceneAnimator, SceneCtx},
    timeline::window::SceneKind,
    visual::state::{Fragment, TextAnchor},
};

/// Delay between consecutive cards, in local frames.
pub const KPI_STAGGER_FRAMES: i64 = 12;
/// Length of one card's count-up.
pub const KPI_COUNT_UP_FRAMES: i64 = 60;
const KPI_RISE_FRAMES: i64 = 20;
const KPI_RISE_OFFSET: f64 = 30.0;

const MARGIN: f64 = 120.0;
const GAP: f64 = 48.0;
const CARD_HEIGHT: f64 = 360.0;
const BAR_HEIGHT: f64 = 8.0;
const PAD: f64 = 40.0;

/// Eased `[0, 1]` progress of card `index`'s count-up at `local`.
pub fn count_up_progress(local: i64, index: usize) -> LobbyResult<f64> {
    let start = KPI_STAGGER_FRAMES * index as i64;
    interpolate_frames(
        local,
        (start, start + KPI_COUNT_UP_FRAMES),
        (0.0, 1.0),
        Ease::InOutCubic,
    )
}

/// Rounded value shown by card `index` at `local`.
pub fn displayed_value(target: f64, local: i64, index: usize) -> LobbyResult<f64> {
    Ok((target * count_up_progress(local, index)?).round())
}

/// Row of KPI cards whose values count up from zero, staggered left to right.
pub struct KpiScene;

impl SceneAnimator for KpiScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Kpi
    }

    fn render(&self, ctx: &SceneCtx<'_>, data: &LobbyData) -> LobbyResult<Fragment> {
        let theme = ctx.theme;
        let u = ctx.unit();
        let l = ctx.local_frame;
        let (w, h) = (ctx.canvas.w(), ctx.canvas.h());

        let heading_fade = interpolate_frames(l, (0, 20), (0.0, 1.0), Ease::OutCubic)?;
        let mut nodes = vec![
            ctx.text(
                "kpi.heading",
                Vec2::new(MARGIN * u, h * 0.22),
                "Key metrics",
                theme.heading_px,
                700,
                theme.text,
                TextAnchor::Start,
            )
            .with_opacity(heading_fade),
        ];

        let n = data.kpis.len().max(1) as f64;
        let card_w = ((w - 2.0 * MARGIN * u - GAP * u * (n - 1.0)) / n).max(1.0);
        let card_h = CARD_HEIGHT * u;
        let top = h * 0.32;

        for (i, kpi) in data.kpis.iter().enumerate() {
            let start = KPI_STAGGER_FRAMES * i as i64;
            let rise = interpolate_frames(
                l,
                (start, start + KPI_RISE_FRAMES),
                (0.0, 1.0),
                Ease::OutCubic,
            )?;
            let progress = count_up_progress(l, i)?;
            let shown = (kpi.value * progress).round();

            let x = MARGIN * u + i as f64 * (card_w + GAP * u);
            let y = top + (1.0 - rise) * KPI_RISE_OFFSET * u;
            let id = format!("kpi.card.{i}");

            nodes.push(
                ctx.rect(
                    id.clone(),
                    Vec2::new(x, y),
                    (0.0, 0.0, card_w, card_h),
                    24.0 * u,
                    theme.surface,
                )
                .with_opacity(rise),
            );
            nodes.push(
                ctx.text(
                    format!("{id}.value"),
                    Vec2::new(x + PAD * u, y + card_h * 0.48),
                    format_kpi(shown, kpi.format),
                    theme.title_px * 0.8,
                    800,
                    theme.text,
                    TextAnchor::Start,
                )
                .with_opacity(rise),
            );
            nodes.push(
                ctx.text(
                    format!("{id}.label"),
                    Vec2::new(x + PAD * u, y + card_h * 0.68),
                    kpi.label.clone(),
                    theme.body_px,
                    500,
                    theme.muted,
                    TextAnchor::Start,
                )
                .with_opacity(rise),
            );
            nodes.push(
                ctx.rect(
                    format!("{id}.bar"),
                    Vec2::new(x + PAD * u, y + card_h - PAD * u),
                    (0.0, 0.0, card_w - 2.0 * PAD * u, BAR_HEIGHT * u),
                    BAR_HEIGHT * u / 2.0,
                    theme.accent,
                )
                .with_opacity(rise)
                .with_scale(progress, 1.0),
            );
        }

        Ok(ctx.fragment(SceneKind::Kpi, nodes))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/kpi.rs"]
mod tests;
