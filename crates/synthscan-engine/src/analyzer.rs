//! Analysis entry point.

use tracing::{debug, info};

use synthscan_media::{
    FfmpegFrameSampler, FfprobeProber, FrameSampler, MediaProber, NullFrameSampler, NullProber,
};
use synthscan_models::{AnalysisReport, AnalysisRequest};

use crate::{bytestats, matcher, score};

/// Combines the signal extractors into one `analyze` call.
///
/// The optional external tools live behind the `synthscan-media` capability
/// traits; the accumulator never branches on their availability. One
/// analysis call runs the pure extractors in-process, then the prober and
/// the frame sampler sequentially, each bounded by its own timeout.
pub struct Analyzer {
    prober: Box<dyn MediaProber>,
    sampler: Box<dyn FrameSampler>,
}

impl Analyzer {
    /// Wire up ffprobe/ffmpeg when present on PATH, null implementations
    /// otherwise.
    pub fn detect() -> Self {
        let prober: Box<dyn MediaProber> = match FfprobeProber::detect() {
            Some(p) => {
                info!("ffprobe available, container probing enabled");
                Box::new(p)
            }
            None => {
                info!("ffprobe not found, container probing disabled");
                Box::new(NullProber)
            }
        };
        let sampler: Box<dyn FrameSampler> = match FfmpegFrameSampler::detect() {
            Some(s) => {
                info!("ffmpeg available, frame sampling enabled");
                Box::new(s)
            }
            None => {
                info!("ffmpeg not found, frame sampling disabled");
                Box::new(NullFrameSampler)
            }
        };
        Self { prober, sampler }
    }

    /// Build with explicit tool implementations.
    pub fn with_tools(prober: Box<dyn MediaProber>, sampler: Box<dyn FrameSampler>) -> Self {
        Self { prober, sampler }
    }

    /// Analyze raw video bytes and produce a bounded confidence report.
    ///
    /// Infallible: every extractor handles empty input, and the optional
    /// tools degrade to absent signals instead of erroring.
    pub async fn analyze(&self, request: &AnalysisRequest) -> AnalysisReport {
        let byte = bytestats::extract(&request.payload);
        let name = matcher::extract(&request.filename, &request.payload);

        let probe = self.prober.probe(&request.payload).await;
        let frame_blur_avg = self
            .sampler
            .frame_blur_avg(&request.payload, probe.duration)
            .await;

        debug!(
            size_bytes = request.size_bytes(),
            entropy = byte.file_entropy,
            run_fraction = byte.run_fraction,
            probed = !probe.is_empty(),
            "signals extracted"
        );

        score::accumulate(request, byte, name, probe, frame_blur_avg)
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::detect()
    }
}
