use super::*;
use crate::foundation::core::{Canvas, Fps};

fn cfg(width: u32, height: u32, fps: u32) -> EncodeConfig {
    EncodeConfig {
        width,
        height,
        fps,
        out_path: PathBuf::from("target/out.mp4"),
        overwrite: true,
    }
}

#[test]
fn config_validation_catches_bad_values() {
    assert!(cfg(0, 10, 30).validate().is_err());
    assert!(cfg(11, 10, 30).validate().is_err());
    assert!(cfg(10, 10, 0).validate().is_err());
    cfg(1920, 1080, 30).validate().unwrap();
}

#[test]
fn settings_follow_the_composition() {
    let comp = CompositionConfig::default();
    let enc = EncodeConfig::for_composition(&comp, PathBuf::from("reel.mp4"), false).unwrap();
    assert_eq!((enc.width, enc.height, enc.fps), (1920, 1080, 30));
    assert!(!enc.overwrite);
}

#[test]
fn fractional_rates_and_odd_canvases_are_rejected() {
    let ntsc = CompositionConfig {
        fps: Fps {
            num: 30_000,
            den: 1001,
        },
        ..CompositionConfig::default()
    };
    let err = EncodeConfig::for_composition(&ntsc, PathBuf::from("a.mp4"), true).unwrap_err();
    assert!(matches!(err, LobbyError::Configuration(_)), "{err}");

    let odd = CompositionConfig {
        canvas: Canvas {
            width: 191,
            height: 108,
        },
        ..CompositionConfig::default()
    };
    assert!(EncodeConfig::for_composition(&odd, PathBuf::from("a.mp4"), true).is_err());
}

#[test]
fn ffmpeg_reads_raw_rgba_and_writes_the_target() {
    let args: Vec<String> = cfg(64, 36, 25)
        .ffmpeg_args()
        .into_iter()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    assert_eq!(args.first().map(String::as_str), Some("-y"));
    assert_eq!(args.last().map(String::as_str), Some("target/out.mp4"));
    let after = |flag: &str| {
        let i = args.iter().position(|a| a == flag).unwrap();
        args[i + 1].clone()
    };
    assert_eq!(after("-s"), "64x36");
    assert_eq!(after("-r"), "25");
    assert_eq!(after("-i"), "pipe:0");

    let keep = EncodeConfig {
        overwrite: false,
        ..cfg(64, 36, 25)
    };
    assert_eq!(keep.ffmpeg_args()[0], "-n");
}

#[test]
fn existing_output_is_kept_without_overwrite() {
    let dir = std::env::temp_dir().join(format!("lobbyreel-keep-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let out = dir.join("taken.mp4");
    std::fs::write(&out, b"x").unwrap();
    let keep = EncodeConfig {
        out_path: out.clone(),
        overwrite: false,
        ..cfg(64, 36, 25)
    };
    assert!(FfmpegEncoder::new(keep, Rgba8::rgb(0, 0, 0)).is_err());
    assert_eq!(std::fs::read(&out).unwrap(), b"x");
    let _ = std::fs::remove_dir_all(&dir);
}
