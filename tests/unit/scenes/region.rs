use super::*;
use crate::{composition::config::Theme, scenes::test_ctx};

fn render(data: &LobbyData, local: i64) -> Fragment {
    let theme = Theme::default();
    RegionScene.render(&test_ctx(&theme, local, 180), data).unwrap()
}

fn fill_opacity(frag: &Fragment, id: &str) -> f64 {
    frag.node(&format!("region.fill.{id}")).unwrap().opacity
}

#[test]
fn fade_windows_are_staggered() {
    assert_eq!(region_fade(10, 0).unwrap(), 0.0);
    assert_eq!(region_fade(28, 0).unwrap(), 1.0);
    assert_eq!(region_fade(30, 1).unwrap(), 0.0);
    assert_eq!(region_fade(48, 1).unwrap(), 1.0);
    assert!(region_fade(19, 0).unwrap() > 0.0);
}

#[test]
fn regions_reveal_one_at_a_time_in_declared_order() {
    let data = LobbyData::sample();
    let order = ["west", "southwest", "midwest", "southeast", "northeast"];
    for (k, id) in order.iter().enumerate() {
        let done = 28 + 20 * k as i64;
        let frag = render(&data, done);
        assert_eq!(fill_opacity(&frag, id), 1.0, "{id}");
        for later in &order[k + 1..] {
            assert_eq!(fill_opacity(&frag, later), 0.0, "{later} at {done}");
        }
    }
}

#[test]
fn no_two_regions_are_mid_fade_together() {
    let data = LobbyData::sample();
    for l in 0..140 {
        let frag = render(&data, l);
        let fading = data
            .regions
            .iter()
            .filter(|r| {
                let o = fill_opacity(&frag, &r.id);
                o > 0.0 && o < 1.0
            })
            .count();
        assert!(fading <= 1, "frame {l}: {fading} regions fading");
    }
}

#[test]
fn missing_regions_keep_later_slots_fixed() {
    let mut full = LobbyData::sample();
    full.regions.retain(|r| r.id != "northeast");
    let mut gappy = full.clone();
    gappy.regions.retain(|r| r.id != "midwest");

    // southeast stays in its declared slot [70, 88] whether or not midwest is present.
    for l in [60, 68, 75, 88, 100] {
        assert_eq!(
            fill_opacity(&render(&full, l), "southeast"),
            fill_opacity(&render(&gappy, l), "southeast"),
            "frame {l}"
        );
    }
    let frag = render(&gappy, 68);
    assert_eq!(fill_opacity(&frag, "southeast"), 0.0);
    assert_eq!(fill_opacity(&render(&gappy, 88), "southeast"), 1.0);
    assert!(frag.node("region.fill.midwest").is_none());
    assert!(frag.node("region.base.midwest").is_some());
}

#[test]
fn base_outlines_are_static() {
    let data = LobbyData::sample();
    let a = render(&data, 0);
    let b = render(&data, 150);
    for region in &DECLARED_REGIONS {
        let id = format!("region.base.{}", region.id);
        assert_eq!(a.node(&id), b.node(&id));
    }
}

#[test]
fn top_region_pulses_with_a_fixed_period() {
    let data = LobbyData::sample();
    assert!(render(&data, 100).node("region.pulse.southwest").is_none());

    let at = |l| render(&data, l).node("region.pulse.west").unwrap().opacity;
    for l in [30, 41, 67, 90] {
        assert!((at(l) - at(l + REGION_PULSE_PERIOD as i64)).abs() < 1e-12);
    }
    assert!((at(45) - 0.25).abs() < 1e-12);
    assert!(at(67) > 0.9);
}

#[test]
fn ties_go_to_the_earliest_declared_region() {
    let mut data = LobbyData::sample();
    for r in &mut data.regions {
        if r.id == "northeast" {
            r.units = 5_310.0;
        }
    }
    let frag = render(&data, 170);
    assert!(frag.node("region.pulse.west").is_some());
    assert!(frag.node("region.pulse.northeast").is_none());
    assert_eq!(frag.node("region.top").unwrap().text(), Some("Top region: West"));
}

#[test]
fn units_caption_formats_both_figures() {
    let frag = render(&LobbyData::sample(), 170);
    assert_eq!(
        frag.node("region.units.west").unwrap().text(),
        Some("5,310 units · $2.1M")
    );
    assert_eq!(
        frag.node("region.units.southwest").unwrap().text(),
        Some("2,324 units · $310K")
    );
}

#[test]
fn map_fits_the_left_box() {
    let t = map_transform(Canvas {
        width: 1920,
        height: 1080,
    });
    let far = t * Point::new(MAP_WIDTH, MAP_HEIGHT);
    assert!(far.x <= 1920.0 * 0.63 + 1e-9);
    assert!(far.y <= 1080.0 * 0.9 + 1e-9);
}
