use super::*;
use crate::{composition::config::Theme, scenes::test_ctx};

#[test]
fn last_frame_matches_intro_opening() {
    for duration in [120u64, 90, 240] {
        let end = OutroScene::params_at(duration as i64 - 1, duration).unwrap();
        assert_eq!(end, IntroScene::params_at(0).unwrap(), "duration {duration}");
    }
}

#[test]
fn title_and_tagline_wind_down_monotonically() {
    let mut prev = OutroScene::params_at(0, 120).unwrap();
    assert_eq!(prev.title_opacity, 1.0);
    assert_eq!(prev.title_offset, 0.0);
    for l in 1..120 {
        let p = OutroScene::params_at(l, 120).unwrap();
        assert!(p.title_opacity <= prev.title_opacity);
        assert!(p.tagline_opacity <= prev.tagline_opacity);
        assert!(p.title_offset >= prev.title_offset);
        assert!(p.tagline_offset >= prev.tagline_offset);
        prev = p;
    }
}

#[test]
fn stamp_rises_then_clears() {
    assert_eq!(OutroScene::params_at(0, 120).unwrap().stamp_opacity, 0.0);
    assert_eq!(OutroScene::params_at(45, 120).unwrap().stamp_opacity, 1.0);
    assert_eq!(OutroScene::params_at(80, 120).unwrap().stamp_opacity, 0.0);
}

#[test]
fn preroll_shows_the_full_card() {
    let p = OutroScene::params_at(-10, 120).unwrap();
    assert_eq!(p.title_opacity, 1.0);
    assert_eq!(p.tagline_opacity, 1.0);
    assert_eq!(p.stamp_opacity, 0.0);
}

#[test]
fn rendered_terminal_fragment_equals_intro_opening_fragment() {
    let theme = Theme::default();
    let data = LobbyData::sample();
    let outro = OutroScene
        .render(&test_ctx(&theme, 119, 120), &data)
        .unwrap();
    let intro = IntroScene.render(&test_ctx(&theme, 0, 180), &data).unwrap();
    assert!(outro.visually_eq(&intro, 1e-6));
}
