use crate::{
    animation::{ease::Ease, interp::interpolate},
    foundation::core::FrameIndex,
    foundation::error::LobbyResult,
    timeline::window::{SceneKind, SceneWindow},
};

/// Crossfade ramps for one scene at one global frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EnterExitProgress {
    /// 0 → 1 over the pre-roll before `start`; 1 afterwards.
    pub enter: f64,
    /// 1 until the fade-out window before `end`, then 1 → 0; 0 in the tail.
    pub exit: f64,
}

impl EnterExitProgress {
    /// Fully visible.
    pub const FULL: Self = Self {
        enter: 1.0,
        exit: 1.0,
    };

    /// Scene-level opacity.
    pub fn opacity(self) -> f64 {
        self.enter * self.exit
    }
}

/// One entry of the sequencer output.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ActiveScene {
    /// Scene drawn.
    pub kind: SceneKind,
    /// `global - start`; negative during pre-roll.
    pub local_frame: i64,
    /// Nominal slot length of the scene.
    pub duration: u64,
    /// Crossfade ramps.
    pub progress: EnterExitProgress,
}

/// Resolve the scenes active at `frame`, in timeline order.
///
/// `windows` is assumed validated (see [`crate::validate_windows`]), which guarantees
/// at most two entries.
pub fn resolve_active_scenes(
    windows: &[SceneWindow],
    frame: FrameIndex,
) -> LobbyResult<Vec<ActiveScene>> {
    let mut out = Vec::with_capacity(2);
    for w in windows.iter().filter(|w| w.is_active(frame.0)) {
        out.push(ActiveScene {
            kind: w.kind,
            local_frame: frame.0 as i64 - w.start as i64,
            duration: w.duration(),
            progress: progress_at(w, frame)?,
        });
    }
    Ok(out)
}

/// Enter/exit ramps of `window` at a global frame.
///
/// Both ramps use an `(overlap + 1)`-frame input span so every pre-roll and fade-out
/// frame is strictly inside `(0, 1)`, and an incoming scene's `enter` plus the
/// outgoing scene's `exit` sum to 1 when their overlaps match.
pub fn progress_at(window: &SceneWindow, frame: FrameIndex) -> LobbyResult<EnterExitProgress> {
    let g = frame.0 as f64;
    let start = window.start as f64;
    let end = window.end as f64;

    let enter = interpolate(
        g,
        (start - window.overlap_in as f64 - 1.0, start),
        (0.0, 1.0),
        Ease::Linear,
    )?;
    let exit = interpolate(
        g,
        (end - window.overlap_out as f64 - 1.0, end),
        (1.0, 0.0),
        Ease::Linear,
    )?;
    Ok(EnterExitProgress { enter, exit })
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/sequencer.rs"]
mod tests;
