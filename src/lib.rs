//! Lobbyreel turns a company snapshot (`LobbyData`) into a looping infographic video.
//!
//! The reel is five scenes on a 900-frame timeline: an intro brand card, a row of
//! counting KPI cards, a drawn-on monthly trend line, a region map and an outro that
//! lands exactly on the intro's first frame so the video loops without a seam.
//!
//! # Pipeline overview
//!
//! 1. **Sequence**: `FrameIndex -> [ActiveScene]` (which scenes are on, local frame, crossfade ramps)
//! 2. **Animate**: each active scene maps `(local frame, LobbyData)` to a `Fragment`
//! 3. **Merge**: fragments become one `VisualState` in timeline (painter's) order
//! 4. **Render** (host): `VisualState -> SVG -> FrameRGBA` via usvg/resvg, optionally streamed to `ffmpeg`
//!
//! Steps 1–3 are pure: [`Composition::compute_frame`] depends only on the frame index,
//! the validated payload and the configuration.
#![forbid(unsafe_code)]

mod animation;
mod composition;
mod data;
mod encode;
mod foundation;
mod render;
mod scenes;
mod timeline;
mod visual;

pub use animation::ease::Ease;
pub use animation::interp::{
    Extrapolate, InterpOpts, Lerp, interpolate, interpolate_frames, interpolate_with,
};
pub use animation::pulse::Pulse;
pub use composition::config::{CompositionConfig, Theme};
pub use composition::driver::Composition;
pub use data::contract::{Kpi, KpiFormat, LobbyData, Region, TREND_POINTS, Trend};
pub use data::format::{
    format_compact_currency, format_kpi, format_signed_percent, group_thousands,
};
pub use data::regions::{DECLARED_REGIONS, DeclaredRegion, MAP_HEIGHT, MAP_WIDTH};
pub use encode::ffmpeg::{EncodeConfig, FfmpegEncoder, is_ffmpeg_on_path};
pub use foundation::core::{BezPath, Canvas, Fps, FrameIndex, Point, Rgba8, Vec2};
pub use foundation::error::{LobbyError, LobbyResult};
pub use render::pipeline::{
    RenderStats, RenderThreading, RenderToMp4Opts, render_frame, render_frames, render_to_mp4,
};
pub use render::raster::{FrameRGBA, SvgRasterizer};
pub use scenes::brand::{BrandParams, stamp_text};
pub use scenes::intro::IntroScene;
pub use scenes::kpi::{
    KPI_COUNT_UP_FRAMES, KPI_STAGGER_FRAMES, KpiScene, count_up_progress, displayed_value,
};
pub use scenes::outro::OutroScene;
pub use scenes::region::{
    REGION_FADE_FRAMES, REGION_FADE_STEP, REGION_FIRST_FADE, REGION_PULSE_PERIOD, RegionScene,
    highlight_opacity, map_transform, region_fade,
};
pub use scenes::trend::{
    TREND_REVEAL_END, TREND_REVEAL_START, TrendGeometry, TrendScene, chart_geometry,
    reveal_length,
};
pub use scenes::{SceneAnimator, SceneCtx, animator_for};
pub use timeline::sequencer::{
    ActiveScene, EnterExitProgress, progress_at, resolve_active_scenes,
};
pub use timeline::window::{SceneKind, SceneWindow, default_windows, validate_windows};
pub use visual::composite::{DrawItem, merge_fragments};
pub use visual::fingerprint::{FrameFingerprint, fingerprint_state};
pub use visual::state::{
    CirclePrim, Fragment, Node, PathPrim, Primitive, RectPrim, Stroke, TextAnchor, TextPrim,
    VisualState,
};
pub use visual::svg::state_to_svg;
