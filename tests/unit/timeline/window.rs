use super::*;

fn window(kind: SceneKind, start: u64, end: u64, overlap_in: u64, overlap_out: u64) -> SceneWindow {
    SceneWindow {
        kind,
        start,
        end,
        overlap_in,
        overlap_out,
    }
}

#[test]
fn default_table_is_valid_for_900_frames() {
    validate_windows(&default_windows(), 900).unwrap();
}

#[test]
fn active_bounds_include_preroll_and_tail() {
    let kpi = window(SceneKind::Kpi, 180, 420, 30, 30);
    assert!(!kpi.is_active(149));
    assert!(kpi.is_active(150));
    assert!(kpi.is_active(449));
    assert!(!kpi.is_active(450));
    assert_eq!(kpi.duration(), 240);
}

#[test]
fn three_way_overlap_is_rejected() {
    let windows = vec![
        window(SceneKind::Intro, 0, 100, 0, 40),
        window(SceneKind::Kpi, 100, 130, 30, 30),
        window(SceneKind::Trend, 140, 200, 30, 0),
    ];
    let err = validate_windows(&windows, 200).unwrap_err();
    assert!(matches!(err, LobbyError::Configuration(ref m) if m.contains("overlap")));
}

#[test]
fn gaps_are_rejected() {
    let windows = vec![
        window(SceneKind::Intro, 0, 100, 0, 0),
        window(SceneKind::Kpi, 120, 200, 10, 0),
    ];
    let err = validate_windows(&windows, 200).unwrap_err();
    assert!(err.to_string().contains("no scene is active at frame 100"));

    let short = vec![window(SceneKind::Intro, 0, 100, 0, 0)];
    assert!(validate_windows(&short, 150).is_err());
}

#[test]
fn malformed_windows_are_rejected() {
    assert!(validate_windows(&[], 10).is_err());
    assert!(validate_windows(&[window(SceneKind::Intro, 10, 10, 0, 0)], 10).is_err());
    assert!(validate_windows(&[window(SceneKind::Intro, 0, 10, 5, 0)], 10).is_err());
    assert!(validate_windows(&[window(SceneKind::Intro, 0, 20, 0, 0)], 10).is_err());

    let out_of_order = vec![
        window(SceneKind::Kpi, 50, 100, 0, 0),
        window(SceneKind::Intro, 0, 50, 0, 0),
    ];
    assert!(validate_windows(&out_of_order, 100).is_err());

    let duplicated = vec![
        window(SceneKind::Intro, 0, 50, 0, 0),
        window(SceneKind::Intro, 50, 100, 0, 0),
    ];
    assert!(validate_windows(&duplicated, 100).is_err());
}

#[test]
fn scene_names_serialize_snake_case() {
    assert_eq!(serde_json::to_string(&SceneKind::Kpi).unwrap(), "\"kpi\"");
    assert_eq!(SceneKind::Outro.to_string(), "outro");
}
