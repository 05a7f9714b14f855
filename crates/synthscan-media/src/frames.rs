//! Frame sampling and smoothness scoring via ffmpeg.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::blur::gradient_energy_variance;
use crate::error::{MediaError, MediaResult};

/// Timeout for one frame extraction.
const FRAME_TIMEOUT_SECS: u64 = 8;

/// Number of timestamps sampled per payload.
const SAMPLE_COUNT: usize = 3;

/// Frame-smoothness extraction capability.
///
/// Implementations must not fail; `None` means no frame could be sampled
/// and the smoothness signal is simply absent.
#[async_trait]
pub trait FrameSampler: Send + Sync {
    /// Average gradient-energy variance over up to three sampled frames.
    ///
    /// `duration` comes from the container probe when known and steers the
    /// sample timestamps.
    async fn frame_blur_avg(&self, payload: &[u8], duration: Option<f64>) -> Option<f64>;
}

/// Sampler used when ffmpeg is not on PATH. Contributes nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullFrameSampler;

#[async_trait]
impl FrameSampler for NullFrameSampler {
    async fn frame_blur_avg(&self, _payload: &[u8], _duration: Option<f64>) -> Option<f64> {
        None
    }
}

/// FFmpeg-backed frame sampler.
///
/// Writes the payload once into a per-call scoped temp directory, extracts
/// one still per sample timestamp under a bounded timeout, and scores each
/// decoded frame's gradient-energy variance. Extraction failures and
/// timeouts skip that timestamp without retry. The temp directory (input
/// file and extracted frames) is removed on every exit path.
#[derive(Debug, Clone)]
pub struct FfmpegFrameSampler;

impl FfmpegFrameSampler {
    /// Construct only if ffmpeg is available on PATH.
    pub fn detect() -> Option<Self> {
        which::which("ffmpeg").ok().map(|_| Self)
    }

    async fn sample_inner(&self, payload: &[u8], duration: Option<f64>) -> MediaResult<Vec<f64>> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("input.mp4");
        tokio::fs::write(&input, payload).await?;

        let mut scores = Vec::with_capacity(SAMPLE_COUNT);
        for (i, t) in sample_timestamps(duration).iter().enumerate() {
            let frame_path = dir.path().join(format!("frame_{i}.jpg"));
            if let Err(e) = extract_frame(&input, *t, &frame_path).await {
                debug!("frame extraction at {:.2}s skipped: {}", t, e);
                continue;
            }
            match score_frame(&frame_path) {
                Ok(score) => scores.push(score),
                Err(e) => debug!("frame decode at {:.2}s skipped: {}", t, e),
            }
        }

        Ok(scores)
    }
}

#[async_trait]
impl FrameSampler for FfmpegFrameSampler {
    async fn frame_blur_avg(&self, payload: &[u8], duration: Option<f64>) -> Option<f64> {
        let scores = match self.sample_inner(payload, duration).await {
            Ok(scores) => scores,
            Err(e) => {
                debug!("frame sampling degraded to no signal: {}", e);
                return None;
            }
        };
        if scores.is_empty() {
            return None;
        }
        Some(scores.iter().sum::<f64>() / scores.len() as f64)
    }
}

/// Sample timestamps: 25/50/75% of the duration when it is known and longer
/// than 3 seconds, fixed offsets {0, 1, 2}s otherwise.
pub fn sample_timestamps(duration: Option<f64>) -> [f64; SAMPLE_COUNT] {
    match duration {
        Some(d) if d > 3.0 => [d * 0.25, d * 0.5, d * 0.75],
        _ => [0.0, 1.0, 2.0],
    }
}

async fn extract_frame(input: &Path, timestamp: f64, output: &Path) -> MediaResult<()> {
    let status = tokio::time::timeout(
        Duration::from_secs(FRAME_TIMEOUT_SECS),
        Command::new("ffmpeg")
            .arg("-ss")
            .arg(format!("{timestamp:.3}"))
            .arg("-i")
            .arg(input)
            .args(["-frames:v", "1", "-q:v", "2"])
            .arg(output)
            .arg("-y")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .status(),
    )
    .await
    .map_err(|_| MediaError::Timeout(FRAME_TIMEOUT_SECS))??;

    if !status.success() {
        return Err(MediaError::tool_failed("ffmpeg", status.code()));
    }
    if !output.exists() {
        return Err(MediaError::tool_failed("ffmpeg", None));
    }
    Ok(())
}

fn score_frame(path: &Path) -> MediaResult<f64> {
    let img = image::open(path)?.to_luma8();
    Ok(gradient_energy_variance(&img))
}
