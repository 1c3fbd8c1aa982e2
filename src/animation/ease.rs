/// Easing curve applied to normalized progress `t ∈ [0, 1]`.
///
/// Every curve maps `0 → 0` and `1 → 1` and is non-decreasing on `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// `t`.
    #[default]
    Linear,
    /// `t²`.
    InQuad,
    /// `1 - (1 - t)²`.
    OutQuad,
    /// Piecewise quadratic, symmetric around `t = 0.5`.
    InOutQuad,
    /// `t³`.
    InCubic,
    /// `1 - (1 - t)³`.
    OutCubic,
    /// Piecewise cubic, symmetric around `t = 0.5`.
    InOutCubic,
    /// `(1 - cos(πt)) / 2`.
    InOutSine,
}

impl Ease {
    /// Every supported curve, in declaration order.
    pub const ALL: [Ease; 8] = [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::InOutSine,
    ];

    /// Evaluate the curve; `t` is clamped into `[0, 1]` first.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::InOutSine => {
                if t >= 1.0 {
                    1.0
                } else {
                    (1.0 - (std::f64::consts::PI * t).cos()) / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
