//! Scene placement on the global timeline and the frame → active-scene mapping.

pub(crate) mod sequencer;
pub(crate) mod window;
