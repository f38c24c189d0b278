//! Frame sinks and the scroll sweep driver.

/// `ffmpeg`-based MP4 output via the system binary.
pub mod ffmpeg;
/// Generic frame sink trait and the in-memory sink.
pub mod sink;
/// Progress sweep from the first shape to the last.
pub mod sweep;
