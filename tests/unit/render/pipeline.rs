use super::*;
use crate::{
    composition::config::CompositionConfig,
    data::contract::LobbyData,
    foundation::core::Canvas,
};

fn small_comp() -> Composition {
    let cfg = CompositionConfig {
        canvas: Canvas {
            width: 96,
            height: 54,
        },
        ..CompositionConfig::default()
    };
    Composition::new(cfg, LobbyData::sample()).unwrap()
}

fn raster() -> SvgRasterizer {
    SvgRasterizer::new("sans-serif", &[])
}

#[test]
fn chunks_cover_the_range_in_order() {
    let parts: Vec<Range<u64>> = chunks(5..17, 5).collect();
    assert_eq!(parts, vec![5..10, 10..15, 15..17]);
    let single: Vec<Range<u64>> = chunks(0..3, 0).collect();
    assert_eq!(single, vec![0..1, 1..2, 2..3]);
}

#[test]
fn empty_or_overlong_ranges_are_rejected() {
    let comp = small_comp();
    let t = RenderThreading::default();
    assert!(render_frames(&comp, 4..4, &raster(), &t).is_err());
    assert!(matches!(
        render_frames(&comp, 890..901, &raster(), &t),
        Err(LobbyError::OutOfRange { .. })
    ));
}

#[test]
fn zero_threads_is_rejected() {
    let t = RenderThreading {
        parallel: true,
        threads: Some(0),
        ..RenderThreading::default()
    };
    assert!(maybe_pool(&t).is_err());
}

#[test]
fn parallel_matches_sequential() {
    let comp = small_comp();
    let seq = render_frames(&comp, 140..150, &raster(), &RenderThreading::default()).unwrap();
    let par = render_frames(
        &comp,
        140..150,
        &raster(),
        &RenderThreading {
            parallel: true,
            chunk_size: 3,
            threads: Some(2),
            static_frame_elision: false,
        },
    )
    .unwrap();
    assert_eq!(seq.0, par.0);
    assert_eq!(par.1.frames_total, 10);
    assert_eq!(par.1.frames_rendered, 10);
}

#[test]
fn static_frames_are_elided_without_changing_output() {
    let comp = small_comp();
    // Late in the intro nothing moves.
    let plain = render_frames(&comp, 100..120, &raster(), &RenderThreading::default()).unwrap();
    let elided = render_frames(
        &comp,
        100..120,
        &raster(),
        &RenderThreading {
            static_frame_elision: true,
            chunk_size: 20,
            ..RenderThreading::default()
        },
    )
    .unwrap();
    assert_eq!(plain.0, elided.0);
    assert_eq!(elided.1.frames_total, 20);
    assert_eq!(elided.1.frames_rendered, 1);
    assert_eq!(elided.1.frames_elided, 19);
}

#[test]
fn render_frame_matches_batch_output() {
    let comp = small_comp();
    let one = render_frame(&comp, FrameIndex(300), &raster()).unwrap();
    let batch = render_frames(&comp, 300..301, &raster(), &RenderThreading::default()).unwrap();
    assert_eq!(batch.0, vec![one]);
}

#[test]
fn render_to_mp4_writes_a_file_when_ffmpeg_is_available() {
    if !is_ffmpeg_on_path() {
        eprintln!("skipping: ffmpeg not on PATH");
        return;
    }
    let dir = std::env::temp_dir().join(format!("lobbyreel-mp4-{}", std::process::id()));
    let out = dir.join("clip.mp4");
    let opts = RenderToMp4Opts {
        range: Some(170..200),
        threading: RenderThreading {
            static_frame_elision: true,
            ..RenderThreading::default()
        },
        ..RenderToMp4Opts::default()
    };
    let stats = render_to_mp4(&small_comp(), &out, opts, &raster()).unwrap();
    assert_eq!(stats.frames_total, 30);
    assert!(std::fs::metadata(&out).unwrap().len() > 0);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn render_to_mp4_rejects_out_of_range_before_spawning() {
    let opts = RenderToMp4Opts {
        range: Some(0..901),
        ..RenderToMp4Opts::default()
    };
    let err = render_to_mp4(&small_comp(), "unused.mp4", opts, &raster()).unwrap_err();
    assert!(matches!(err, LobbyError::OutOfRange { .. }));
}
