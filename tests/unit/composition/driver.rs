use super::*;
use crate::timeline::window::SceneKind;

fn comp() -> Composition {
    Composition::with_defaults(LobbyData::sample()).unwrap()
}

#[test]
fn invalid_payload_is_rejected_before_any_frame() {
    let mut data = LobbyData::sample();
    data.trend.points.pop();
    let err = Composition::with_defaults(data).unwrap_err();
    assert!(matches!(err, LobbyError::Schema(_)), "{err}");
}

#[test]
fn invalid_config_is_rejected() {
    let mut cfg = CompositionConfig::default();
    cfg.total_frames = 600;
    let err = Composition::new(cfg, LobbyData::sample()).unwrap_err();
    assert!(matches!(err, LobbyError::Configuration(_)), "{err}");
}

#[test]
fn frames_past_the_end_are_out_of_range() {
    let c = comp();
    assert!(c.compute_frame(FrameIndex(899)).is_ok());
    assert!(matches!(
        c.compute_frame(FrameIndex(900)),
        Err(LobbyError::OutOfRange {
            frame: 900,
            total: 900
        })
    ));
    assert!(c.active_scenes(FrameIndex(10_000)).is_err());
}

#[test]
fn crossfade_frame_carries_two_layers() {
    let state = comp().compute_frame(FrameIndex(150)).unwrap();
    let kinds: Vec<SceneKind> = state.layers.iter().map(|l| l.scene).collect();
    assert_eq!(kinds, [SceneKind::Intro, SceneKind::Kpi]);

    let intro = state.layer(SceneKind::Intro).unwrap();
    let kpi = state.layer(SceneKind::Kpi).unwrap();
    assert!(intro.opacity > 0.0 && intro.opacity < 1.0);
    assert!(kpi.opacity > 0.0 && kpi.opacity < 1.0);
    assert_eq!(kpi.local_frame, -30);
}

#[test]
fn frame_state_is_reproducible() {
    let c = comp();
    for f in [0, 150, 333, 640, 899] {
        assert_eq!(
            c.compute_frame(FrameIndex(f)).unwrap(),
            c.compute_frame(FrameIndex(f)).unwrap()
        );
    }
}

#[test]
fn background_comes_from_the_theme() {
    let c = comp();
    let state = c.compute_frame(FrameIndex(0)).unwrap();
    assert_eq!(state.background, c.config().theme.background);
    assert_eq!(state.canvas, c.config().canvas);
    assert_eq!(state.frame, FrameIndex(0));
}

#[test]
fn composition_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Composition>();
}

#[test]
fn paint_order_follows_the_scene_table_not_the_scene_kind() {
    let mut cfg = CompositionConfig::default();
    let (kpi, trend) = (cfg.windows[1].kind, cfg.windows[2].kind);
    cfg.windows[1].kind = trend;
    cfg.windows[2].kind = kpi;
    let c = Composition::new(cfg, LobbyData::sample()).unwrap();

    let sequenced: Vec<SceneKind> = c
        .active_scenes(FrameIndex(410))
        .unwrap()
        .iter()
        .map(|a| a.kind)
        .collect();
    assert_eq!(sequenced, [SceneKind::Trend, SceneKind::Kpi]);

    let state = c.compute_frame(FrameIndex(410)).unwrap();
    let painted: Vec<SceneKind> = state.layers.iter().map(|l| l.scene).collect();
    assert_eq!(painted, sequenced);
    let items = state.flatten();
    assert_eq!(items.last().unwrap().scene, SceneKind::Kpi);
}
