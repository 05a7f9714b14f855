//! Filename and header keyword matching.

/// Keywords matched against the lowercased filename.
const AI_KEYWORDS: [&str; 9] = [
    "ai",
    "generated",
    "fake",
    "deepfake",
    "synthetic",
    "artificial",
    "sora",
    "runway",
    "midjourney",
];

/// Encoder signatures matched against the lowercased header bytes.
const CODEC_SIGNATURES: [&[u8]; 3] = [b"ffmpeg", b"x264", b"libx264"];

/// AI tool markers matched against the lowercased header bytes.
const METADATA_SIGNATURES: [&[u8]; 4] = [b"runway", b"sora", b"midjourney", b"generatedby"];

/// Header window taken from the start of the payload.
pub const HEADER_WINDOW: usize = 1000;

/// Results of filename and header matching. Pure and deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NameSignals {
    /// An AI keyword is a substring of the filename
    pub has_ai_keywords: bool,
    /// An encoder signature is a substring of the header
    pub has_ai_codec: bool,
    /// An AI tool marker is a substring of the header
    pub has_metadata_signature: bool,
}

/// Match the fixed keyword and signature sets against the filename and the
/// first [`HEADER_WINDOW`] payload bytes.
pub fn extract(filename: &str, payload: &[u8]) -> NameSignals {
    let filename = filename.to_lowercase();
    let header = payload[..payload.len().min(HEADER_WINDOW)].to_ascii_lowercase();

    NameSignals {
        has_ai_keywords: AI_KEYWORDS.iter().any(|k| filename.contains(k)),
        has_ai_codec: CODEC_SIGNATURES
            .iter()
            .any(|sig| contains_bytes(&header, sig)),
        has_metadata_signature: METADATA_SIGNATURES
            .iter()
            .any(|sig| contains_bytes(&header, sig)),
    }
}

fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    !needle.is_empty()
        && needle.len() <= haystack.len()
        && haystack.windows(needle.len()).any(|w| w == needle)
}
