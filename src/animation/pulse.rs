use crate::foundation::error::{LobbyError, LobbyResult};

/// Free-running raised-cosine oscillation between `min` and `max`.
///
/// The value depends only on `frame mod period`, so it loops indefinitely and is
/// unaffected by how long the surrounding scene lasts. Frame 0 sits at `min`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Pulse {
    /// Period in frames, must be > 0.
    pub period: u64,
    /// Trough value.
    pub min: f64,
    /// Crest value.
    pub max: f64,
}

impl Pulse {
    /// Validated constructor.
    pub fn new(period: u64, min: f64, max: f64) -> LobbyResult<Self> {
        if period == 0 {
            return Err(LobbyError::configuration("pulse period must be > 0"));
        }
        if !min.is_finite() || !max.is_finite() {
            return Err(LobbyError::configuration("pulse bounds must be finite"));
        }
        Ok(Self { period, min, max })
    }

    /// Sample at a (possibly negative) frame.
    pub fn sample(self, frame: i64) -> f64 {
        let period = self.period.max(1) as i64;
        let phase = frame.rem_euclid(period) as f64 / period as f64;
        let wave = 0.5 - 0.5 * (std::f64::consts::TAU * phase).cos();
        self.min + (self.max - self.min) * wave
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/pulse.rs"]
mod tests;
