use crate::{
    composition::config::CompositionConfig,
    data::contract::LobbyData,
    foundation::core::FrameIndex,
    foundation::error::{LobbyError, LobbyResult},
    scenes::{SceneCtx, animator_for},
    timeline::sequencer::{ActiveScene, resolve_active_scenes},
    visual::{composite::merge_fragments, state::VisualState},
};

/// A validated payload bound to a validated scene table.
///
/// Every frame is a pure function of `(config, data, frame)`: nothing is cached or
/// mutated between calls, so frames may be computed in any order and from any thread.
#[derive(Clone, Debug)]
pub struct Composition {
    config: CompositionConfig,
    data: LobbyData,
}

impl Composition {
    /// Validate both inputs up front; no frame is ever computed from bad input.
    pub fn new(config: CompositionConfig, data: LobbyData) -> LobbyResult<Self> {
        config.validate()?;
        data.validate()?;
        tracing::debug!(
            company = %data.company_name,
            total_frames = config.total_frames,
            scenes = config.windows.len(),
            "composition ready"
        );
        Ok(Self { config, data })
    }

    /// Default 900-frame table over `data`.
    pub fn with_defaults(data: LobbyData) -> LobbyResult<Self> {
        Self::new(CompositionConfig::default(), data)
    }

    /// The validated scene table and canvas.
    pub fn config(&self) -> &CompositionConfig {
        &self.config
    }

    /// The validated payload.
    pub fn data(&self) -> &LobbyData {
        &self.data
    }

    /// Valid frames are `[0, total_frames)`.
    pub fn total_frames(&self) -> u64 {
        self.config.total_frames
    }

    /// Sequencer output for `frame`.
    pub fn active_scenes(&self, frame: FrameIndex) -> LobbyResult<Vec<ActiveScene>> {
        self.check_frame(frame)?;
        resolve_active_scenes(&self.config.windows, frame)
    }

    /// Resolve the full drawable state of one global frame.
    #[tracing::instrument(level = "trace", skip_all, fields(frame = frame.0))]
    pub fn compute_frame(&self, frame: FrameIndex) -> LobbyResult<VisualState> {
        let active = self.active_scenes(frame)?;
        let mut fragments = Vec::with_capacity(active.len());
        for scene in active {
            let ctx = SceneCtx {
                local_frame: scene.local_frame,
                duration: scene.duration,
                progress: scene.progress,
                canvas: self.config.canvas,
                theme: &self.config.theme,
            };
            fragments.push(animator_for(scene.kind).render(&ctx, &self.data)?);
        }
        Ok(merge_fragments(
            frame,
            self.config.canvas,
            self.config.theme.background,
            fragments,
        ))
    }

    fn check_frame(&self, frame: FrameIndex) -> LobbyResult<()> {
        if frame.0 >= self.config.total_frames {
            return Err(LobbyError::out_of_range(frame.0, self.config.total_frames));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/driver.rs"]
mod tests;
