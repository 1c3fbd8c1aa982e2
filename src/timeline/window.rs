use crate::foundation::error::{LobbyError, LobbyResult};

/// The five scene types, in timeline order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SceneKind {
    /// Brand card reveal.
    Intro,
    /// Counting KPI cards.
    Kpi,
    /// Line chart with growth badge.
    Trend,
    /// Region map with top-region pulse.
    Region,
    /// Brand card with timestamp, ending on the intro's first frame.
    Outro,
}

impl SceneKind {
    /// Stable lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Kpi => "kpi",
            Self::Trend => "trend",
            Self::Region => "region",
            Self::Outro => "outro",
        }
    }
}

impl std::fmt::Display for SceneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Placement of one scene: nominal slot `[start, end)` plus crossfade pre-roll and tail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SceneWindow {
    /// Scene drawn in this window.
    pub kind: SceneKind,
    /// First frame of the nominal slot (local frame 0).
    pub start: u64,
    /// End of the nominal slot (exclusive).
    pub end: u64,
    /// Frames before `start` during which the scene fades in.
    #[serde(default)]
    pub overlap_in: u64,
    /// Frames before `end` during which the scene fades out; also the tail kept active past `end`.
    #[serde(default)]
    pub overlap_out: u64,
}

impl SceneWindow {
    /// Nominal slot length.
    pub fn duration(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    /// First active global frame.
    pub fn active_start(&self) -> u64 {
        self.start.saturating_sub(self.overlap_in)
    }

    /// One past the last active global frame.
    pub fn active_end(&self) -> u64 {
        self.end.saturating_add(self.overlap_out)
    }

    /// Whether `frame` lies in `[start - overlap_in, end + overlap_out)`.
    pub fn is_active(&self, frame: u64) -> bool {
        self.active_start() <= frame && frame < self.active_end()
    }

    fn validate(&self) -> LobbyResult<()> {
        if self.start >= self.end {
            return Err(LobbyError::configuration(format!(
                "scene '{}' must have start < end (got [{}, {}))",
                self.kind, self.start, self.end
            )));
        }
        if self.overlap_in > self.start {
            return Err(LobbyError::configuration(format!(
                "scene '{}' overlap_in {} reaches before frame 0",
                self.kind, self.overlap_in
            )));
        }
        if self.overlap_in > self.duration() || self.overlap_out > self.duration() {
            return Err(LobbyError::configuration(format!(
                "scene '{}' overlaps must not exceed its duration {}",
                self.kind,
                self.duration()
            )));
        }
        Ok(())
    }
}

/// Default 900-frame table: intro 180, KPI 240, trend 180, region 180, outro 120, 30-frame crossfades.
pub fn default_windows() -> Vec<SceneWindow> {
    vec![
        SceneWindow {
            kind: SceneKind::Intro,
            start: 0,
            end: 180,
            overlap_in: 0,
            overlap_out: 30,
        },
        SceneWindow {
            kind: SceneKind::Kpi,
            start: 180,
            end: 420,
            overlap_in: 30,
            overlap_out: 30,
        },
        SceneWindow {
            kind: SceneKind::Trend,
            start: 420,
            end: 600,
            overlap_in: 30,
            overlap_out: 30,
        },
        SceneWindow {
            kind: SceneKind::Region,
            start: 600,
            end: 780,
            overlap_in: 30,
            overlap_out: 30,
        },
        SceneWindow {
            kind: SceneKind::Outro,
            start: 780,
            end: 900,
            overlap_in: 30,
            overlap_out: 0,
        },
    ]
}

/// Validate a scene table against a timeline of `total_frames`.
///
/// Rejects malformed windows, out-of-order starts, uncovered frames, and any frame
/// where three or more scenes would be active at once.
pub fn validate_windows(windows: &[SceneWindow], total_frames: u64) -> LobbyResult<()> {
    if windows.is_empty() {
        return Err(LobbyError::configuration("scene table must not be empty"));
    }

    for (i, w) in windows.iter().enumerate() {
        w.validate()?;
        if windows[..i].iter().any(|other| other.kind == w.kind) {
            return Err(LobbyError::configuration(format!(
                "scene '{}' appears more than once",
                w.kind
            )));
        }
        if w.end > total_frames {
            return Err(LobbyError::configuration(format!(
                "scene '{}' ends at {} past total frames {total_frames}",
                w.kind, w.end
            )));
        }
    }

    for pair in windows.windows(2) {
        if pair[0].start >= pair[1].start {
            return Err(LobbyError::configuration(format!(
                "scenes must be listed in timeline order ('{}' starts at {}, '{}' at {})",
                pair[0].kind, pair[0].start, pair[1].kind, pair[1].start
            )));
        }
    }

    // Active counts only change at window edges, so checking each edge covers every frame.
    let mut edges: Vec<u64> = windows
        .iter()
        .flat_map(|w| [w.active_start(), w.active_end()])
        .chain([0])
        .filter(|&f| f < total_frames)
        .collect();
    edges.sort_unstable();
    edges.dedup();

    for frame in edges {
        let active = windows.iter().filter(|w| w.is_active(frame)).count();
        if active == 0 {
            return Err(LobbyError::configuration(format!(
                "no scene is active at frame {frame}"
            )));
        }
        if active > 2 {
            return Err(LobbyError::configuration(format!(
                "{active} scenes overlap at frame {frame}; at most two may crossfade"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/window.rs"]
mod tests;
