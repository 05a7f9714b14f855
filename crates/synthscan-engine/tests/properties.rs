//! End-to-end properties of the analyzer, run with stubbed tools so they
//! hold on hosts without ffmpeg/ffprobe.

use async_trait::async_trait;

use synthscan_engine::Analyzer;
use synthscan_media::{MediaProber, NullFrameSampler, NullProber};
use synthscan_models::{AnalysisRequest, ProbeSignals, Sensitivity};

/// Prober returning a fixed value.
struct StubProber(ProbeSignals);

#[async_trait]
impl MediaProber for StubProber {
    async fn probe(&self, _payload: &[u8]) -> ProbeSignals {
        self.0
    }
}

fn degraded_analyzer() -> Analyzer {
    Analyzer::with_tools(Box::new(NullProber), Box::new(NullFrameSampler))
}

/// A payload whose byte statistics fire nothing: all 256 values present
/// (uniqueness 1.0) and no runs or signatures.
fn neutral_payload() -> Vec<u8> {
    (0..=255).collect()
}

#[tokio::test]
async fn confidence_is_always_bounded() {
    let analyzer = degraded_analyzer();
    let payloads: Vec<Vec<u8>> = vec![
        Vec::new(),
        vec![0u8; 1],
        vec![0u8; 5000],
        neutral_payload(),
        vec![1u8; 10 * 1024 * 1024],
        b"ffmpeg sora runway generatedby".to_vec(),
    ];
    for payload in payloads {
        for sensitivity in [Sensitivity::Low, Sensitivity::Medium, Sensitivity::High] {
            let req = AnalysisRequest::new(payload.clone(), "ai_generated_deepfake.mp4")
                .with_sensitivity(sensitivity);
            let report = analyzer.analyze(&req).await;
            assert!(
                (0.0..=1.0).contains(&report.confidence),
                "confidence {} out of bounds",
                report.confidence
            );
        }
    }
}

#[tokio::test]
async fn size_padding_shifts_confidence_less_than_half() {
    let analyzer = degraded_analyzer();
    let small = AnalysisRequest::new(vec![0u8; 2000], "clip.mp4");
    let large = AnalysisRequest::new(vec![0u8; 200 * 1024 * 1024], "clip.mp4");
    let small_report = analyzer.analyze(&small).await;
    let large_report = analyzer.analyze(&large).await;
    assert!((small_report.confidence - large_report.confidence).abs() < 0.5);
}

#[tokio::test]
async fn ignoring_size_never_increases_confidence() {
    let analyzer = degraded_analyzer();
    let payload = vec![1u8; 10 * 1024 * 1024];
    let with_size = AnalysisRequest::new(payload.clone(), "clip.mp4");
    let without_size = AnalysisRequest::new(payload, "clip.mp4").with_ignore_size(true);
    let with_report = analyzer.analyze(&with_size).await;
    let without_report = analyzer.analyze(&without_size).await;
    assert!(without_report.confidence <= with_report.confidence);
}

#[tokio::test]
async fn sensitivity_is_monotonic() {
    let analyzer = degraded_analyzer();
    let payload = vec![0u8; 1024 * 1024];
    let mut confidences = Vec::new();
    for sensitivity in [Sensitivity::Low, Sensitivity::Medium, Sensitivity::High] {
        let req =
            AnalysisRequest::new(payload.clone(), "ai_fake.mp4").with_sensitivity(sensitivity);
        confidences.push(analyzer.analyze(&req).await.confidence);
    }
    assert!(confidences[0] <= confidences[1]);
    assert!(confidences[1] <= confidences[2]);
}

#[tokio::test]
async fn keyword_contribution_is_deterministic() {
    let analyzer = degraded_analyzer();
    for sensitivity in [Sensitivity::Low, Sensitivity::Medium, Sensitivity::High] {
        let req = AnalysisRequest::new(neutral_payload(), "totally_ai_generated_fake.mp4")
            .with_ignore_size(true)
            .with_sensitivity(sensitivity);
        let report = analyzer.analyze(&req).await;
        assert!(report.has_indicator("ai_keywords_in_filename"));
        let expected = 0.35 * sensitivity.profile().multiplier;
        assert!(
            (report.metrics.raw_score - expected).abs() < 1e-4,
            "raw score {} != {}",
            report.metrics.raw_score,
            expected
        );
    }
}

#[tokio::test]
async fn degraded_mode_matches_empty_probe_stub() {
    let payload = vec![0u8; 1024 * 1024];
    let req = AnalysisRequest::new(payload, "clip.mp4").with_sensitivity(Sensitivity::High);

    let degraded = degraded_analyzer().analyze(&req).await;
    let stubbed = Analyzer::with_tools(
        Box::new(StubProber(ProbeSignals::default())),
        Box::new(NullFrameSampler),
    )
    .analyze(&req)
    .await;

    assert_eq!(degraded, stubbed);
    assert!(degraded.metrics.frame_blur_avg.is_none());
    assert!(!degraded.has_indicator("short_duration_low_entropy"));
    assert!(!degraded.has_indicator("low_bitrate_kbps"));
    assert!(!degraded.has_indicator("no_audio_detected"));
    assert!(!degraded.has_indicator("frame_smoothness_low"));
}

#[tokio::test]
async fn probed_signals_feed_duration_rows() {
    let payload = vec![0u8; 100 * 1024];
    let req = AnalysisRequest::new(payload, "clip.mp4");
    let analyzer = Analyzer::with_tools(
        Box::new(StubProber(ProbeSignals {
            duration: Some(5.0),
            bitrate: None,
            has_audio: Some(false),
        })),
        Box::new(NullFrameSampler),
    );
    let report = analyzer.analyze(&req).await;
    assert!(report.has_indicator("short_duration_low_entropy"));
    assert!(report.has_indicator("low_bitrate_kbps"));
    assert!(report.has_indicator("no_audio_detected"));
}
