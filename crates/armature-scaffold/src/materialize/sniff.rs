//! Binary/text classification for template sources.
//!
//! A file is binary when a NUL byte appears within a bounded prefix. The
//! heuristic is deterministic for a given file, which is all the
//! materializer requires: binary sources are copied verbatim, textual
//! sources go through the renderer.

/// How many leading bytes are inspected
pub const SNIFF_LEN: usize = 8 * 1024;

/// Whether the content should be treated as binary
pub fn is_binary(bytes: &[u8]) -> bool {
    bytes.iter().take(SNIFF_LEN).any(|&b| b == 0)
}
