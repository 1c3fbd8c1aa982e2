use super::*;
use crate::{
    foundation::core::{Canvas, FrameIndex},
    timeline::{sequencer::EnterExitProgress, window::SceneKind},
    visual::state::{Fragment, Node, RectPrim},
};

fn state(frame: u64, local_frame: i64, x: f64) -> VisualState {
    VisualState {
        frame: FrameIndex(frame),
        canvas: Canvas {
            width: 100,
            height: 100,
        },
        background: Rgba8::rgb(0, 0, 0),
        layers: vec![Fragment {
            scene: SceneKind::Region,
            local_frame,
            progress: EnterExitProgress::FULL,
            opacity: 1.0,
            nodes: vec![Node::new(
                "box",
                Vec2::new(x, 0.0),
                Primitive::Rect(RectPrim {
                    x: 0.0,
                    y: 0.0,
                    width: 10.0,
                    height: 10.0,
                    radius: 0.0,
                    fill: Rgba8::rgb(1, 2, 3),
                }),
            )],
        }],
    }
}

#[test]
fn frame_bookkeeping_is_not_hashed() {
    assert_eq!(
        fingerprint_state(&state(10, 5, 1.0)),
        fingerprint_state(&state(700, 90, 1.0))
    );
}

#[test]
fn drawn_changes_are_hashed() {
    assert_ne!(
        fingerprint_state(&state(10, 5, 1.0)),
        fingerprint_state(&state(10, 5, 1.5))
    );

    let mut faded = state(10, 5, 1.0);
    faded.layers[0].opacity = 0.5;
    assert_ne!(fingerprint_state(&faded), fingerprint_state(&state(10, 5, 1.0)));
}

#[test]
fn signed_zero_is_folded() {
    assert_eq!(
        fingerprint_state(&state(0, 0, 0.0)),
        fingerprint_state(&state(0, 0, -0.0))
    );
}
