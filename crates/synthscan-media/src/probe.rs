//! FFprobe container probing.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::process::Command;
use tracing::debug;

use crate::error::{MediaError, MediaResult};
use synthscan_models::ProbeSignals;

/// Timeout for one ffprobe invocation.
const PROBE_TIMEOUT_SECS: u64 = 10;

/// Container metadata extraction capability.
///
/// Implementations must not fail and must bound their execution time; when
/// nothing can be recovered they return the empty value.
#[async_trait]
pub trait MediaProber: Send + Sync {
    /// Probe raw payload bytes for duration, bitrate, and audio presence.
    async fn probe(&self, payload: &[u8]) -> ProbeSignals;
}

/// Prober used when ffprobe is not on PATH. Always returns the empty value.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProber;

#[async_trait]
impl MediaProber for NullProber {
    async fn probe(&self, _payload: &[u8]) -> ProbeSignals {
        ProbeSignals::default()
    }
}

/// FFprobe-backed prober.
///
/// Writes the payload to a per-call scoped temp directory, invokes ffprobe
/// with a bounded timeout, and parses its JSON output. The temp directory is
/// removed on every exit path, including timeouts.
#[derive(Debug, Clone)]
pub struct FfprobeProber;

impl FfprobeProber {
    /// Construct only if ffprobe is available on PATH.
    pub fn detect() -> Option<Self> {
        which::which("ffprobe").ok().map(|_| Self)
    }

    async fn probe_inner(&self, payload: &[u8]) -> MediaResult<ProbeSignals> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("input.mp4");
        tokio::fs::write(&input, payload).await?;
        run_ffprobe(&input).await
    }
}

#[async_trait]
impl MediaProber for FfprobeProber {
    async fn probe(&self, payload: &[u8]) -> ProbeSignals {
        match self.probe_inner(payload).await {
            Ok(signals) => signals,
            Err(e) => {
                debug!("ffprobe degraded to empty signals: {}", e);
                ProbeSignals::default()
            }
        }
    }
}

async fn run_ffprobe(path: &Path) -> MediaResult<ProbeSignals> {
    let output = tokio::time::timeout(
        Duration::from_secs(PROBE_TIMEOUT_SECS),
        Command::new("ffprobe")
            .args([
                "-v",
                "error",
                "-show_format",
                "-show_streams",
                "-print_format",
                "json",
            ])
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output(),
    )
    .await
    .map_err(|_| MediaError::Timeout(PROBE_TIMEOUT_SECS))??;

    if !output.status.success() {
        return Err(MediaError::tool_failed("ffprobe", output.status.code()));
    }

    parse_ffprobe_output(&output.stdout)
}

/// FFprobe JSON output format.
#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    #[serde(default)]
    format: FfprobeFormat,
    #[serde(default)]
    streams: Vec<FfprobeStream>,
}

#[derive(Debug, Deserialize, Default)]
struct FfprobeFormat {
    duration: Option<String>,
    bit_rate: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FfprobeStream {
    codec_type: Option<String>,
    duration: Option<String>,
}

/// Parse ffprobe's `-print_format json` output into probe signals.
///
/// Duration is taken from the format section first, falling back to the
/// first stream that carries one. A successful parse always sets
/// `has_audio`, so downstream heuristics can distinguish "no audio stream"
/// from "probe unavailable".
pub fn parse_ffprobe_output(stdout: &[u8]) -> MediaResult<ProbeSignals> {
    let probe: FfprobeOutput = serde_json::from_slice(stdout)?;

    let mut duration = probe
        .format
        .duration
        .as_ref()
        .and_then(|d| d.parse::<f64>().ok());

    let bitrate = probe
        .format
        .bit_rate
        .as_ref()
        .and_then(|b| b.parse::<f64>().ok());

    let mut has_audio = false;
    for stream in &probe.streams {
        if stream.codec_type.as_deref() == Some("audio") {
            has_audio = true;
        }
        if duration.is_none() {
            duration = stream.duration.as_ref().and_then(|d| d.parse::<f64>().ok());
        }
    }

    Ok(ProbeSignals {
        duration,
        bitrate,
        has_audio: Some(has_audio),
    })
}
