//! Signal aggregation engine for AI-video detection.
//!
//! The engine combines several weak, independently computed signals into one
//! bounded confidence score:
//! - Byte statistics (uniqueness proxy, longest-run fraction)
//! - Filename and header keyword matching
//! - Container metadata from an optional ffprobe-backed prober
//! - Frame smoothness from an optional ffmpeg-backed sampler
//!
//! Optional tools sit behind the capability traits of `synthscan-media`;
//! when a tool is missing its signals are simply absent and the scoring
//! algorithm is unchanged. No extractor failure ever propagates out of
//! [`Analyzer::analyze`].

pub mod analyzer;
pub mod bytestats;
pub mod matcher;
pub mod score;

pub use analyzer::Analyzer;
pub use bytestats::ByteSignals;
pub use matcher::NameSignals;
