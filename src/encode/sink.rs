use crate::foundation::core::FrameIndex;
use crate::foundation::error::{HexError, HexResult};
use crate::render::FrameRGBA;

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SinkConfig {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
}

impl SinkConfig {
    pub fn validate(&self) -> HexResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(HexError::validation("sink width/height must be non-zero"));
        }
        if self.fps == 0 {
            return Err(HexError::validation("sink fps must be non-zero"));
        }
        Ok(())
    }
}

/// Consumer of rendered frames.
///
/// `push_frame` is called in strictly increasing [`FrameIndex`] order between `begin` and `end`.
pub trait FrameSink {
    fn begin(&mut self, cfg: SinkConfig) -> HexResult<()>;
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> HexResult<()>;
    fn end(&mut self) -> HexResult<()>;
}

/// Keeps every frame in memory. Used by tests and for debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, FrameRGBA)>,
    finished: bool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    pub fn frames(&self) -> &[(FrameIndex, FrameRGBA)] {
        &self.frames
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> HexResult<()> {
        cfg.validate()?;
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> HexResult<()> {
        if self.cfg.is_none() {
            return Err(HexError::encode("in-memory sink not started"));
        }
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> HexResult<()> {
        self.finished = true;
        Ok(())
    }
}
