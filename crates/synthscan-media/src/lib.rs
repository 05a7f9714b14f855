//! External-tool wrappers for the SynthScan analyzer.
//!
//! This crate provides:
//! - A `MediaProber` capability trait over ffprobe, with a null
//!   implementation used when the tool is absent
//! - A `FrameSampler` capability trait over ffmpeg plus the `image` crate,
//!   likewise with a null implementation
//! - Gradient-energy blur scoring for sampled frames
//!
//! Probing and frame sampling are best-effort by contract: the trait
//! surfaces never fail. A missing tool, a non-zero exit, a timeout, or
//! unparsable output all degrade to an empty signal.

pub mod blur;
pub mod error;
pub mod frames;
pub mod probe;

pub use blur::gradient_energy_variance;
pub use error::{MediaError, MediaResult};
pub use frames::{FfmpegFrameSampler, FrameSampler, NullFrameSampler};
pub use probe::{FfprobeProber, MediaProber, NullProber};
