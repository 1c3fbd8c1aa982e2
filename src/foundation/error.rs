/// Convenience result type used across lobbyreel.
pub type LobbyResult<T> = Result<T, LobbyError>;

/// Error taxonomy for the reel core and its render host.
///
/// None of these are retryable: every variant reports a programmer or input
/// error and aborts the current render.
#[derive(thiserror::Error, Debug)]
pub enum LobbyError {
    /// The payload does not satisfy the data contract.
    #[error("schema error: {0}")]
    Schema(String),

    /// A frame index outside `[0, total_frames)` was requested.
    #[error("frame out of range: {frame} (total frames {total})")]
    OutOfRange {
        /// Requested frame index.
        frame: u64,
        /// Declared composition length.
        total: u64,
    },

    /// An interpolation input range is empty, reversed or non-finite.
    #[error("invalid interpolation range: [{start}, {end}]")]
    InvalidRange {
        /// Range start.
        start: f64,
        /// Range end.
        end: f64,
    },

    /// The scene table or composition parameters are malformed.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Rasterization or encoding failed in the render host.
    #[error("render error: {0}")]
    Render(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LobbyError {
    /// Build a [`LobbyError::Schema`] value.
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::Schema(msg.into())
    }

    /// Build a [`LobbyError::OutOfRange`] value.
    pub fn out_of_range(frame: u64, total: u64) -> Self {
        Self::OutOfRange { frame, total }
    }

    /// Build a [`LobbyError::InvalidRange`] value.
    pub fn invalid_range(start: f64, end: f64) -> Self {
        Self::InvalidRange { start, end }
    }

    /// Build a [`LobbyError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`LobbyError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`LobbyError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for LobbyError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
