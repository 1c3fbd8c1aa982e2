use std::{collections::HashMap, ops::Range, path::PathBuf};

use rayon::prelude::*;

use crate::{
    composition::driver::Composition,
    encode::ffmpeg::{EncodeConfig, FfmpegEncoder, is_ffmpeg_on_path},
    foundation::core::FrameIndex,
    foundation::error::{LobbyError, LobbyResult},
    render::raster::{FrameRGBA, SvgRasterizer},
    visual::{
        fingerprint::{FrameFingerprint, fingerprint_state},
        state::VisualState,
    },
};

/// Compute and rasterize a single frame.
pub fn render_frame(
    comp: &Composition,
    frame: FrameIndex,
    raster: &SvgRasterizer,
) -> LobbyResult<FrameRGBA> {
    let state = comp.compute_frame(frame)?;
    raster.rasterize(&state)
}

/// How a frame range is split up and rasterized.
#[derive(Clone, Debug)]
pub struct RenderThreading {
    pub parallel: bool,
    pub chunk_size: usize,
    pub threads: Option<usize>,
    /// Rasterize each distinct [`VisualState`] once per chunk and reuse the pixels.
    pub static_frame_elision: bool,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
            static_frame_elision: false,
        }
    }
}

/// Frame counts from a render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub frames_total: u64,
    pub frames_rendered: u64,
    pub frames_elided: u64,
}

impl RenderStats {
    fn absorb(&mut self, other: RenderStats) {
        self.frames_total += other.frames_total;
        self.frames_rendered += other.frames_rendered;
        self.frames_elided += other.frames_elided;
    }
}

/// Render `range` (start inclusive, end exclusive) into memory.
#[tracing::instrument(level = "debug", skip(comp, raster, threading))]
pub fn render_frames(
    comp: &Composition,
    range: Range<u64>,
    raster: &SvgRasterizer,
    threading: &RenderThreading,
) -> LobbyResult<(Vec<FrameRGBA>, RenderStats)> {
    check_range(comp, &range)?;
    let pool = maybe_pool(threading)?;

    let mut out = Vec::with_capacity((range.end - range.start).min(4096) as usize);
    let mut stats = RenderStats::default();
    for chunk in chunks(range, threading.chunk_size) {
        let (mut frames, chunk_stats) =
            render_chunk(comp, chunk, raster, threading, pool.as_ref())?;
        out.append(&mut frames);
        stats.absorb(chunk_stats);
    }
    Ok((out, stats))
}

/// Options for [`render_to_mp4`].
#[derive(Clone, Debug)]
pub struct RenderToMp4Opts {
    /// Frames to encode; `None` means the whole composition.
    pub range: Option<Range<u64>>,
    /// Whether to overwrite `out_path` if it already exists.
    pub overwrite: bool,
    pub threading: RenderThreading,
}

impl Default for RenderToMp4Opts {
    fn default() -> Self {
        Self {
            range: None,
            overwrite: true,
            threading: RenderThreading::default(),
        }
    }
}

/// Render the composition to an MP4 through the system `ffmpeg` binary.
///
/// Requires integer fps and an even canvas. Chunks are rendered (possibly in
/// parallel) and then encoded strictly in frame order.
#[tracing::instrument(level = "info", skip_all, fields(out = tracing::field::Empty))]
pub fn render_to_mp4(
    comp: &Composition,
    out_path: impl Into<PathBuf>,
    opts: RenderToMp4Opts,
    raster: &SvgRasterizer,
) -> LobbyResult<RenderStats> {
    let cfg = comp.config();
    let range = opts.range.clone().unwrap_or(0..comp.total_frames());
    check_range(comp, &range)?;

    let out_path = out_path.into();
    tracing::Span::current().record("out", tracing::field::display(out_path.display()));
    let enc_cfg = EncodeConfig::for_composition(cfg, out_path, opts.overwrite)?;
    if !is_ffmpeg_on_path() {
        return Err(LobbyError::render(
            "ffmpeg is required for MP4 rendering, but was not found on PATH",
        ));
    }
    let mut enc = FfmpegEncoder::new(enc_cfg, cfg.theme.background)?;

    let pool = maybe_pool(&opts.threading)?;
    let mut stats = RenderStats::default();
    for chunk in chunks(range, opts.threading.chunk_size) {
        let (frames, chunk_stats) =
            render_chunk(comp, chunk, raster, &opts.threading, pool.as_ref())?;
        for frame in &frames {
            enc.encode_frame(frame)?;
        }
        stats.absorb(chunk_stats);
        tracing::debug!(
            done = stats.frames_total,
            elided = stats.frames_elided,
            "chunk encoded"
        );
    }

    enc.finish()?;
    Ok(stats)
}

fn render_chunk(
    comp: &Composition,
    range: Range<u64>,
    raster: &SvgRasterizer,
    threading: &RenderThreading,
    pool: Option<&rayon::ThreadPool>,
) -> LobbyResult<(Vec<FrameRGBA>, RenderStats)> {
    let mut states = Vec::<VisualState>::with_capacity((range.end - range.start) as usize);
    for f in range {
        states.push(comp.compute_frame(FrameIndex(f))?);
    }

    let mut unique_indices = Vec::<usize>::with_capacity(states.len());
    let mut frame_to_unique = Vec::<usize>::with_capacity(states.len());
    if threading.static_frame_elision {
        let mut first = HashMap::<FrameFingerprint, usize>::new();
        for (idx, state) in states.iter().enumerate() {
            let fp = fingerprint_state(state);
            if let Some(existing) = first.get(&fp).copied() {
                frame_to_unique.push(existing);
            } else {
                let slot = unique_indices.len();
                unique_indices.push(idx);
                first.insert(fp, slot);
                frame_to_unique.push(slot);
            }
        }
    } else {
        unique_indices.extend(0..states.len());
        frame_to_unique.extend(0..states.len());
    }

    let rendered: Vec<LobbyResult<FrameRGBA>> = match pool {
        Some(pool) => pool.install(|| {
            unique_indices
                .par_iter()
                .map_init(
                    || raster.clone(),
                    |worker, idx| worker.rasterize(&states[*idx]),
                )
                .collect()
        }),
        None => unique_indices
            .iter()
            .map(|idx| raster.rasterize(&states[*idx]))
            .collect(),
    };

    let mut unique_frames = Vec::<Option<FrameRGBA>>::with_capacity(rendered.len());
    for item in rendered {
        unique_frames.push(Some(item?));
    }

    let mut remaining = vec![0usize; unique_frames.len()];
    for &u in &frame_to_unique {
        remaining[u] += 1;
    }

    let mut out = Vec::<FrameRGBA>::with_capacity(frame_to_unique.len());
    for u in frame_to_unique {
        let frame = if remaining[u] == 1 {
            unique_frames[u].take()
        } else {
            unique_frames[u].clone()
        };
        out.push(frame.ok_or_else(|| LobbyError::render("unique frame missing during reuse"))?);
        remaining[u] -= 1;
    }

    let total = states.len() as u64;
    let rendered_count = unique_indices.len() as u64;
    Ok((
        out,
        RenderStats {
            frames_total: total,
            frames_rendered: rendered_count,
            frames_elided: total.saturating_sub(rendered_count),
        },
    ))
}

fn check_range(comp: &Composition, range: &Range<u64>) -> LobbyResult<()> {
    if range.is_empty() {
        return Err(LobbyError::configuration("render range must be non-empty"));
    }
    if range.end > comp.total_frames() {
        return Err(LobbyError::out_of_range(range.end - 1, comp.total_frames()));
    }
    Ok(())
}

fn chunks(range: Range<u64>, chunk_size: usize) -> impl Iterator<Item = Range<u64>> {
    let step = chunk_size.max(1) as u64;
    let end = range.end;
    (range.start..end)
        .step_by(step as usize)
        .map(move |s| s..(s + step).min(end))
}

fn maybe_pool(threading: &RenderThreading) -> LobbyResult<Option<rayon::ThreadPool>> {
    if !threading.parallel {
        return Ok(None);
    }
    if threading.threads == Some(0) {
        return Err(LobbyError::configuration(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threading.threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map(Some)
        .map_err(|e| LobbyError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
