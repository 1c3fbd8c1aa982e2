use super::*;
use crate::{composition::config::Theme, scenes::test_ctx, visual::state::Primitive};

const TARGET: f64 = 742_819.0;

#[test]
fn count_up_hits_both_ends() {
    assert_eq!(displayed_value(TARGET, 0, 0).unwrap(), 0.0);
    assert_eq!(displayed_value(TARGET, 60, 0).unwrap(), TARGET);
    assert_eq!(displayed_value(TARGET, 500, 0).unwrap(), TARGET);
    assert_eq!(displayed_value(TARGET, -30, 0).unwrap(), 0.0);
}

#[test]
fn count_up_strictly_increases_through_the_middle() {
    let a = displayed_value(TARGET, 15, 0).unwrap();
    let b = displayed_value(TARGET, 30, 0).unwrap();
    let c = displayed_value(TARGET, 45, 0).unwrap();
    assert!(0.0 < a && a < b && b < c && c < TARGET, "{a} {b} {c}");
    assert_eq!(a, 46_426.0);
}

#[test]
fn count_up_never_decreases() {
    for index in 0..4 {
        let mut prev = 0.0;
        for l in -10..120 {
            let v = displayed_value(TARGET, l, index).unwrap();
            assert!(v >= prev, "card {index} frame {l}");
            prev = v;
        }
    }
}

#[test]
fn cards_are_staggered() {
    assert_eq!(count_up_progress(12, 1).unwrap(), 0.0);
    assert_eq!(count_up_progress(72, 1).unwrap(), 1.0);
    assert!(count_up_progress(12, 0).unwrap() > 0.0);
    assert_eq!(count_up_progress(24, 2).unwrap(), 0.0);
}

#[test]
fn formatting_only_touches_the_text() {
    let theme = Theme::default();
    let data = LobbyData::sample();
    let done = KpiScene.render(&test_ctx(&theme, 200, 240), &data).unwrap();
    assert_eq!(done.node("kpi.card.0.value").unwrap().text(), Some("$742,819"));
    assert_eq!(done.node("kpi.card.1.value").unwrap().text(), Some("18,204"));
    assert_eq!(done.node("kpi.card.2.value").unwrap().text(), Some("94%"));
    assert_eq!(done.node("kpi.card.0.label").unwrap().text(), Some("Quarterly revenue"));
    assert_eq!(done.node("kpi.card.0.bar").unwrap().scale.x, 1.0);

    let start = KpiScene.render(&test_ctx(&theme, 0, 240), &data).unwrap();
    assert_eq!(start.node("kpi.card.0.value").unwrap().text(), Some("$0"));
    assert_eq!(start.node("kpi.card.0").unwrap().opacity, 0.0);
}

#[test]
fn cards_fit_inside_the_canvas() {
    let theme = Theme::default();
    let data = LobbyData::sample();
    let frag = KpiScene.render(&test_ctx(&theme, 200, 240), &data).unwrap();
    let last = data.kpis.len() - 1;
    let card = frag.node(&format!("kpi.card.{last}")).unwrap();
    let Primitive::Rect(rect) = &card.primitive else {
        panic!("card is not a rect");
    };
    assert!((card.translate.x + rect.width - (1920.0 - 120.0)).abs() < 1e-9);
}

#[test]
fn huge_negative_currency_renders_saturated() {
    let theme = Theme::default();
    let mut data = LobbyData::sample();
    data.kpis[0].value = -1.0e19;
    assert!(data.validate().is_ok());
    let frag = KpiScene.render(&test_ctx(&theme, 200, 240), &data).unwrap();
    assert_eq!(
        frag.node("kpi.card.0.value").unwrap().text(),
        Some("-$9,223,372,036,854,775,808")
    );
}
