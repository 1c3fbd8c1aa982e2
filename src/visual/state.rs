use crate::{
    foundation::core::{Canvas, FrameIndex, Rgba8, Vec2},
    timeline::{sequencer::EnterExitProgress, window::SceneKind},
};

/// Fully resolved drawable state for one global frame.
///
/// Built fresh by [`crate::Composition::compute_frame`] and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisualState {
    /// Global frame this state belongs to.
    pub frame: FrameIndex,
    /// Output canvas.
    pub canvas: Canvas,
    /// Solid background painted under every layer.
    pub background: Rgba8,
    /// Active scene fragments in painter's order (timeline order).
    pub layers: Vec<Fragment>,
}

impl VisualState {
    /// Fragment for `kind`, if that scene is active on this frame.
    pub fn layer(&self, kind: SceneKind) -> Option<&Fragment> {
        self.layers.iter().find(|l| l.scene == kind)
    }
}

/// Output of one scene animator at one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Fragment {
    /// Scene that produced the fragment.
    pub scene: SceneKind,
    /// Local frame the scene was sampled at.
    pub local_frame: i64,
    /// Crossfade ramps at this frame.
    pub progress: EnterExitProgress,
    /// Layer opacity used when compositing over earlier layers.
    pub opacity: f64,
    /// Drawables in paint order.
    pub nodes: Vec<Node>,
}

impl Fragment {
    /// Node by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

/// A positioned, styled primitive.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Node {
    /// Stable id within its fragment (e.g. `kpi.card.1.value`).
    pub id: String,
    /// Node opacity in `[0, 1]`, before layer opacity.
    pub opacity: f64,
    /// Origin of the primitive in canvas pixels.
    pub translate: Vec2,
    /// Scale about the origin.
    pub scale: Vec2,
    /// What to draw.
    pub primitive: Primitive,
}

impl Node {
    /// Fully opaque, unscaled node at `translate`.
    pub fn new(id: impl Into<String>, translate: Vec2, primitive: Primitive) -> Self {
        Self {
            id: id.into(),
            opacity: 1.0,
            translate,
            scale: Vec2::new(1.0, 1.0),
            primitive,
        }
    }

    /// Set opacity (clamped into `[0, 1]`).
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Set scale.
    pub fn with_scale(mut self, sx: f64, sy: f64) -> Self {
        self.scale = Vec2::new(sx, sy);
        self
    }

    /// Text content when the node is text.
    pub fn text(&self) -> Option<&str> {
        match &self.primitive {
            Primitive::Text(t) => Some(&t.content),
            _ => None,
        }
    }
}

/// Drawable primitive geometry, relative to the node origin.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Primitive {
    /// Single line of text; the origin is on the baseline.
    Text(TextPrim),
    /// Axis-aligned (optionally rounded) rectangle.
    Rect(RectPrim),
    /// Circle centered on the origin.
    Circle(CirclePrim),
    /// SVG path data.
    Path(PathPrim),
}

/// Horizontal text alignment relative to the origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    /// Text starts at the origin.
    Start,
    /// Text is centered on the origin.
    Middle,
    /// Text ends at the origin.
    End,
}

/// Text primitive.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextPrim {
    /// UTF-8 content.
    pub content: String,
    /// Font size in pixels.
    pub size_px: f64,
    /// CSS font weight.
    pub weight: u16,
    /// Fill color.
    pub color: Rgba8,
    /// Alignment.
    pub anchor: TextAnchor,
}

/// Rectangle primitive.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RectPrim {
    /// Left edge relative to the origin.
    pub x: f64,
    /// Top edge relative to the origin.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
    /// Corner radius.
    pub radius: f64,
    /// Fill color.
    pub fill: Rgba8,
}

/// Circle primitive.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CirclePrim {
    /// Radius.
    pub radius: f64,
    /// Fill, if any.
    pub fill: Option<Rgba8>,
    /// Outline, if any.
    pub stroke: Option<Stroke>,
}

/// Path primitive.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PathPrim {
    /// SVG `d` attribute.
    pub d: String,
    /// Fill, if any.
    pub fill: Option<Rgba8>,
    /// Outline, if any.
    pub stroke: Option<Stroke>,
}

/// Stroke style with optional single-dash pattern (used for draw-on reveals).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stroke {
    /// Stroke color.
    pub color: Rgba8,
    /// Stroke width in pixels.
    pub width: f64,
    /// Dash and gap length; `None` draws a solid stroke.
    pub dash_array: Option<f64>,
    /// Dash offset.
    pub dash_offset: f64,
}

impl Stroke {
    /// Solid stroke.
    pub fn solid(color: Rgba8, width: f64) -> Self {
        Self {
            color,
            width,
            dash_array: None,
            dash_offset: 0.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/visual/state.rs"]
mod tests;
