use crate::{
    foundation::core::{Canvas, FrameIndex, Rgba8, Vec2},
    timeline::window::SceneKind,
    visual::state::{Fragment, Node, Primitive, Stroke, VisualState},
};

/// A node with its layer opacity folded in, ready to paint.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawItem<'a> {
    /// Scene the node belongs to.
    pub scene: SceneKind,
    /// The node.
    pub node: &'a Node,
    /// `node.opacity * layer.opacity`.
    pub opacity: f64,
}

/// Assemble a frame from fragments given in timeline order (as the sequencer emits them).
///
/// Later scenes paint over earlier ones (source-over, weighted by layer opacity). The
/// order is taken as given: the scene table, not the scene kind, decides who is on top.
pub fn merge_fragments(
    frame: FrameIndex,
    canvas: Canvas,
    background: Rgba8,
    fragments: Vec<Fragment>,
) -> VisualState {
    VisualState {
        frame,
        canvas,
        background,
        layers: fragments,
    }
}

impl VisualState {
    /// Every node in paint order with its effective opacity.
    pub fn flatten(&self) -> Vec<DrawItem<'_>> {
        self.layers
            .iter()
            .flat_map(|layer| {
                layer.nodes.iter().map(move |node| DrawItem {
                    scene: layer.scene,
                    node,
                    opacity: (node.opacity * layer.opacity).clamp(0.0, 1.0),
                })
            })
            .collect()
    }
}

impl Fragment {
    /// Visual equivalence: same nodes, same colors and text, numeric attributes within `tol`.
    ///
    /// Frame bookkeeping (`scene`, `local_frame`, `progress`) is ignored; only what would
    /// be drawn is compared.
    pub fn visually_eq(&self, other: &Fragment, tol: f64) -> bool {
        close(self.opacity, other.opacity, tol)
            && self.nodes.len() == other.nodes.len()
            && self
                .nodes
                .iter()
                .zip(&other.nodes)
                .all(|(a, b)| a.visually_eq(b, tol))
    }
}

impl Node {
    /// See [`Fragment::visually_eq`].
    pub fn visually_eq(&self, other: &Node, tol: f64) -> bool {
        self.id == other.id
            && close(self.opacity, other.opacity, tol)
            && close_vec(self.translate, other.translate, tol)
            && close_vec(self.scale, other.scale, tol)
            && primitive_eq(&self.primitive, &other.primitive, tol)
    }
}

fn primitive_eq(a: &Primitive, b: &Primitive, tol: f64) -> bool {
    match (a, b) {
        (Primitive::Text(a), Primitive::Text(b)) => {
            a.content == b.content
                && a.weight == b.weight
                && a.color == b.color
                && a.anchor == b.anchor
                && close(a.size_px, b.size_px, tol)
        }
        (Primitive::Rect(a), Primitive::Rect(b)) => {
            a.fill == b.fill
                && close(a.x, b.x, tol)
                && close(a.y, b.y, tol)
                && close(a.width, b.width, tol)
                && close(a.height, b.height, tol)
                && close(a.radius, b.radius, tol)
        }
        (Primitive::Circle(a), Primitive::Circle(b)) => {
            a.fill == b.fill
                && close(a.radius, b.radius, tol)
                && stroke_eq(a.stroke.as_ref(), b.stroke.as_ref(), tol)
        }
        (Primitive::Path(a), Primitive::Path(b)) => {
            a.d == b.d && a.fill == b.fill && stroke_eq(a.stroke.as_ref(), b.stroke.as_ref(), tol)
        }
        _ => false,
    }
}

fn stroke_eq(a: Option<&Stroke>, b: Option<&Stroke>, tol: f64) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.color == b.color
                && close(a.width, b.width, tol)
                && close(a.dash_offset, b.dash_offset, tol)
                && match (a.dash_array, b.dash_array) {
                    (None, None) => true,
                    (Some(x), Some(y)) => close(x, y, tol),
                    _ => false,
                }
        }
        _ => false,
    }
}

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

fn close_vec(a: Vec2, b: Vec2, tol: f64) -> bool {
    close(a.x, b.x, tol) && close(a.y, b.y, tol)
}

#[cfg(test)]
#[path = "../../tests/unit/visual/composite.rs"]
mod tests;
