//! MP4 output through the system `ffmpeg`: opaque RGBA frames piped over stdin.

use std::{
    ffi::OsString,
    io::Write as _,
    path::{Path, PathBuf},
    process::{Child, ChildStdin, Command, Stdio},
};

use anyhow::Context as _;

use crate::{
    composition::config::CompositionConfig,
    foundation::core::Rgba8,
    foundation::error::{LobbyError, LobbyResult},
    render::raster::FrameRGBA,
};

/// Output settings for one MP4.
#[derive(Clone, Debug)]
pub struct EncodeConfig {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub out_path: PathBuf,
    pub overwrite: bool,
}

impl EncodeConfig {
    /// Canvas size and frame rate of `config`, written to `out_path`.
    pub fn for_composition(
        config: &CompositionConfig,
        out_path: PathBuf,
        overwrite: bool,
    ) -> LobbyResult<Self> {
        let fps = config.fps.as_integral().ok_or_else(|| {
            LobbyError::configuration(format!(
                "mp4 output needs an integral frame rate, got {}/{}",
                config.fps.num, config.fps.den
            ))
        })?;
        let cfg = Self {
            width: config.canvas.width,
            height: config.canvas.height,
            fps,
            out_path,
            overwrite,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// yuv420p needs a non-empty, even frame and a positive rate.
    pub fn validate(&self) -> LobbyResult<()> {
        let problem = if self.width == 0 || self.height == 0 {
            Some("frame size must be non-zero")
        } else if self.width % 2 == 1 || self.height % 2 == 1 {
            Some("frame size must be even for yuv420p")
        } else if self.fps == 0 {
            Some("fps must be non-zero")
        } else {
            None
        };
        match problem {
            Some(msg) => Err(LobbyError::configuration(format!(
                "encode {}x{} @ {}: {msg}",
                self.width, self.height, self.fps
            ))),
            None => Ok(()),
        }
    }

    fn frame_len(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }

    fn ffmpeg_args(&self) -> Vec<OsString> {
        let size = format!("{}x{}", self.width, self.height);
        let rate = self.fps.to_string();
        let mut args: Vec<OsString> = vec![if self.overwrite { "-y" } else { "-n" }.into()];
        for a in [
            "-loglevel",
            "error",
            "-f",
            "rawvideo",
            "-pix_fmt",
            "rgba",
            "-s",
            size.as_str(),
            "-r",
            rate.as_str(),
            "-i",
            "pipe:0",
            "-an",
            "-c:v",
            "libx264",
            "-pix_fmt",
            "yuv420p",
            "-movflags",
            "+faststart",
        ] {
            args.push(a.into());
        }
        args.push(self.out_path.clone().into_os_string());
        args
    }
}

/// Whether `ffmpeg -version` runs successfully.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|s| s.success())
}

/// Create the directory `path` will be written into.
pub fn ensure_parent_dir(path: &Path) -> LobbyResult<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("create output directory '{}'", dir.display()))?;
            Ok(())
        }
        _ => Ok(()),
    }
}

/// A running `ffmpeg` child fed one reel frame at a time.
pub struct FfmpegEncoder {
    cfg: EncodeConfig,
    background: Rgba8,
    child: Child,
    stdin: Option<ChildStdin>,
    opaque: Vec<u8>,
    frames_written: u64,
}

impl FfmpegEncoder {
    /// Spawn `ffmpeg`; partially transparent pixels are laid over `background`.
    #[tracing::instrument(level = "debug", skip_all, fields(out = %cfg.out_path.display()))]
    pub fn new(cfg: EncodeConfig, background: Rgba8) -> LobbyResult<Self> {
        cfg.validate()?;
        if !cfg.overwrite && cfg.out_path.exists() {
            return Err(LobbyError::render(format!(
                "refusing to overwrite '{}'",
                cfg.out_path.display()
            )));
        }
        ensure_parent_dir(&cfg.out_path)?;

        let mut child = Command::new("ffmpeg")
            .args(cfg.ffmpeg_args())
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| LobbyError::render(format!("spawn ffmpeg: {e}")))?;
        let stdin = child.stdin.take();
        if stdin.is_none() {
            return Err(LobbyError::render("ffmpeg stdin was not captured"));
        }

        tracing::debug!(width = cfg.width, height = cfg.height, fps = cfg.fps, "ffmpeg spawned");
        Ok(Self {
            opaque: vec![0; cfg.frame_len()],
            cfg,
            background,
            child,
            stdin,
            frames_written: 0,
        })
    }

    /// Append one frame; frames must arrive in timeline order.
    pub fn encode_frame(&mut self, frame: &FrameRGBA) -> LobbyResult<()> {
        if (frame.width, frame.height) != (self.cfg.width, self.cfg.height) {
            return Err(LobbyError::render(format!(
                "frame is {}x{} but the encoder expects {}x{}",
                frame.width, frame.height, self.cfg.width, self.cfg.height
            )));
        }
        frame.write_opaque(self.background, &mut self.opaque)?;

        let stdin = self
            .stdin
            .as_mut()
            .ok_or_else(|| LobbyError::render("encoder already finished"))?;
        stdin.write_all(&self.opaque).map_err(|e| {
            LobbyError::render(format!("pipe frame {} to ffmpeg: {e}", self.frames_written))
        })?;
        self.frames_written += 1;
        Ok(())
    }

    /// Close the pipe and wait for `ffmpeg` to finalize the file.
    pub fn finish(mut self) -> LobbyResult<()> {
        self.stdin = None;
        let output = self
            .child
            .wait_with_output()
            .map_err(|e| LobbyError::render(format!("wait for ffmpeg: {e}")))?;
        if !output.status.success() {
            return Err(LobbyError::render(format!(
                "ffmpeg failed ({}): {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        tracing::info!(
            frames = self.frames_written,
            out = %self.cfg.out_path.display(),
            "mp4 written"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
