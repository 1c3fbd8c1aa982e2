use super::*;

#[test]
fn default_config_is_valid() {
    let cfg = CompositionConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.total_frames, 900);
    assert_eq!(cfg.duration_secs(), 30.0);
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let cfg: CompositionConfig =
        serde_json::from_str(r#"{ "canvas": { "width": 1280, "height": 720 } }"#).unwrap();
    cfg.validate().unwrap();
    assert_eq!(cfg.canvas.width, 1280);
    assert_eq!(cfg.total_frames, 900);
    assert_eq!(cfg.theme, Theme::default());

    let themed: CompositionConfig =
        serde_json::from_str(r##"{ "theme": { "accent": "#ff3366" } }"##).unwrap();
    assert_eq!(themed.theme.accent, Rgba8::rgb(0xff, 0x33, 0x66));
    assert_eq!(themed.theme.background, Theme::default().background);
}

#[test]
fn bad_parameters_are_configuration_errors() {
    let mut cfg = CompositionConfig::default();
    cfg.total_frames = 0;
    assert!(matches!(cfg.validate(), Err(LobbyError::Configuration(_))));

    let mut cfg = CompositionConfig::default();
    cfg.canvas.height = 0;
    assert!(matches!(cfg.validate(), Err(LobbyError::Configuration(_))));

    let mut cfg = CompositionConfig::default();
    cfg.fps.den = 0;
    assert!(matches!(cfg.validate(), Err(LobbyError::Configuration(_))));

    // Shortening the timeline leaves the outro hanging past the end.
    let mut cfg = CompositionConfig::default();
    cfg.total_frames = 600;
    assert!(matches!(cfg.validate(), Err(LobbyError::Configuration(_))));
}

#[test]
fn bad_color_in_json_is_rejected() {
    let res = serde_json::from_str::<CompositionConfig>(r#"{ "theme": { "accent": "blue" } }"#);
    assert!(res.is_err());
}
