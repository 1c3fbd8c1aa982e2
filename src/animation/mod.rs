//! Easing curves and the frame-to-value interpolator every scene samples through.

pub(crate) mod ease;
pub(crate) mod interp;
pub(crate) mod pulse;
