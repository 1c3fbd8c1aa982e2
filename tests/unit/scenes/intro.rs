use super::*;
use crate::{composition::config::Theme, scenes::test_ctx};

#[test]
fn opening_frame_is_hidden_and_offset() {
    let p = IntroScene::params_at(0).unwrap();
    assert_eq!(p.title_opacity, 0.0);
    assert_eq!(p.title_offset, 40.0);
    assert_eq!(p.rule_scale, 0.0);
    assert_eq!(p.tagline_opacity, 0.0);
    assert_eq!(p.tagline_offset, 24.0);
    assert_eq!(p.stamp_opacity, 0.0);
}

#[test]
fn title_and_tagline_are_monotonic() {
    let mut prev = IntroScene::params_at(0).unwrap();
    for l in 1..180 {
        let p = IntroScene::params_at(l).unwrap();
        assert!(p.title_opacity >= prev.title_opacity);
        assert!(p.tagline_opacity >= prev.tagline_opacity);
        assert!(p.title_offset <= prev.title_offset);
        assert!(p.tagline_offset <= prev.tagline_offset);
        assert!(p.rule_scale >= prev.rule_scale);
        prev = p;
    }
    assert_eq!(prev.title_opacity, 1.0);
    assert_eq!(prev.tagline_offset, 0.0);
}

#[test]
fn negative_local_frames_clamp_to_the_opening_state() {
    assert_eq!(
        IntroScene::params_at(-25).unwrap(),
        IntroScene::params_at(0).unwrap()
    );
}

#[test]
fn render_emits_the_brand_card() {
    let theme = Theme::default();
    let data = LobbyData::sample();
    let frag = IntroScene.render(&test_ctx(&theme, 90, 180), &data).unwrap();
    assert_eq!(frag.scene, SceneKind::Intro);
    assert_eq!(frag.opacity, 1.0);

    let ids: Vec<&str> = frag.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, ["brand.title", "brand.rule", "brand.tagline", "brand.stamp"]);
    assert_eq!(
        frag.node("brand.title").unwrap().text(),
        Some("Northwind Robotics")
    );
    assert_eq!(
        frag.node("brand.stamp").unwrap().text(),
        Some("Updated Oct 1, 2026")
    );
    assert_eq!(frag.node("brand.stamp").unwrap().opacity, 0.0);
}
