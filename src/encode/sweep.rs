use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{HexError, HexResult};
use crate::stage::Stage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SweepOpts {
    /// Frames in the sweep; progress runs 0 to 1 across them.
    pub frames: u32,
    pub fps: u32,
    /// Neon frames simulated before the first output frame.
    pub warmup: u32,
}

/// Progress of frame `index` in a sweep of `frames` frames.
pub fn sweep_progress(index: u32, frames: u32) -> f64 {
    if frames <= 1 {
        return 0.0;
    }
    f64::from(index.min(frames - 1)) / f64::from(frames - 1)
}

/// Drive `stage` from progress 0 to 1 and push every frame into `sink`.
#[tracing::instrument(level = "info", skip(stage, sink))]
pub fn render_sweep(stage: &mut Stage, opts: SweepOpts, sink: &mut dyn FrameSink) -> HexResult<()> {
    if opts.frames == 0 {
        return Err(HexError::validation("sweep needs at least one frame"));
    }
    let size = stage.canvas().size();
    sink.begin(SinkConfig {
        width: size.width,
        height: size.height,
        fps: opts.fps,
    })?;
    stage.warm_up(opts.warmup)?;

    for i in 0..opts.frames {
        stage.set_progress(sweep_progress(i, opts.frames));
        let frame = stage.render_frame()?;
        sink.push_frame(FrameIndex(u64::from(i)), &frame)?;
    }
    sink.end()?;

    tracing::info!(
        frames = opts.frames,
        skipped = stage.skipped_frames(),
        "sweep finished"
    );
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sweep.rs"]
mod tests;
