use crate::{
    animation::ease::Ease,
    foundation::core::{Rgba8, Vec2},
    foundation::error::{LobbyError, LobbyResult},
};

/// Behavior outside the input range on one side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Hold the boundary output value.
    #[default]
    Clamp,
    /// Continue the (uneased) linear slope past the boundary.
    Extend,
}

/// Full interpolation options; [`interpolate`] uses clamping on both sides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct InterpOpts {
    /// Curve applied to normalized progress inside the range.
    pub ease: Ease,
    /// Behavior for `frame < in_start`.
    pub left: Extrapolate,
    /// Behavior for `frame > in_end`.
    pub right: Extrapolate,
}

impl InterpOpts {
    /// Clamped options with the given curve.
    pub fn eased(ease: Ease) -> Self {
        Self {
            ease,
            ..Self::default()
        }
    }
}

/// Map `frame` from `input` onto `output` through `ease`, clamping on both sides.
///
/// `frame <= input.0` returns exactly `output.0`; `frame >= input.1` returns exactly
/// `output.1`. The input range must be finite and strictly ascending.
pub fn interpolate(
    frame: f64,
    input: (f64, f64),
    output: (f64, f64),
    ease: Ease,
) -> LobbyResult<f64> {
    interpolate_with(frame, input, output, InterpOpts::eased(ease))
}

/// [`interpolate`] with per-side extrapolation.
pub fn interpolate_with(
    frame: f64,
    input: (f64, f64),
    output: (f64, f64),
    opts: InterpOpts,
) -> LobbyResult<f64> {
    let (in_start, in_end) = input;
    if !in_start.is_finite() || !in_end.is_finite() || in_start >= in_end {
        return Err(LobbyError::invalid_range(in_start, in_end));
    }
    let (out_start, out_end) = output;
    let span = in_end - in_start;

    if frame <= in_start {
        return Ok(match opts.left {
            Extrapolate::Clamp => out_start,
            Extrapolate::Extend => out_start + (out_end - out_start) * (frame - in_start) / span,
        });
    }
    if frame >= in_end {
        return Ok(match opts.right {
            Extrapolate::Clamp => out_end,
            Extrapolate::Extend => out_end + (out_end - out_start) * (frame - in_end) / span,
        });
    }

    let t = opts.ease.apply((frame - in_start) / span);
    Ok(<f64 as Lerp>::lerp(&out_start, &out_end, t))
}

/// Integer-frame convenience for scene code.
pub fn interpolate_frames(
    frame: i64,
    input: (i64, i64),
    output: (f64, f64),
    ease: Ease,
) -> LobbyResult<f64> {
    interpolate(
        frame as f64,
        (input.0 as f64, input.1 as f64),
        output,
        ease,
    )
}

/// Linear blend between two values of the same type.
pub trait Lerp: Sized {
    /// Blend `a → b` by `t` (not clamped).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for Rgba8 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
            a: lerp_u8(a.a, b.a, t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
