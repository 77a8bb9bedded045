use std::path::PathBuf;

use crate::encode::sink::{SinkSpec, SlideSink};
use crate::foundation::core::SlideIndex;
use crate::foundation::error::{CardstockError, CardstockResult};
use crate::render::cpu::SlideFrame;

/// Sink that writes each slide as `slide-NN.png` under one directory.
///
/// `NN` is the 1-based, zero-padded deck position. The directory is
/// created on `begin`; files with matching names are replaced.
pub struct PngDirSink {
    dir: PathBuf,
    spec: Option<SinkSpec>,
    last_idx: Option<SlideIndex>,
    written: Vec<PathBuf>,
}

impl PngDirSink {
    /// Sink writing PNGs under `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            spec: None,
            last_idx: None,
            written: Vec::new(),
        }
    }

    /// Paths written so far, in deck order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// File name for the slide at `idx`.
    pub fn file_name(idx: SlideIndex) -> String {
        format!("slide-{}.png", idx.label())
    }
}

impl SlideSink for PngDirSink {
    fn begin(&mut self, spec: SinkSpec) -> CardstockResult<()> {
        if spec.canvas.width == 0 || spec.canvas.height == 0 {
            return Err(CardstockError::validation(
                "png sink canvas must be non-zero",
            ));
        }
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            CardstockError::export(format!(
                "failed to create output directory '{}': {e}",
                self.dir.display()
            ))
        })?;
        self.spec = Some(spec);
        self.last_idx = None;
        self.written.clear();
        Ok(())
    }

    fn push_slide(&mut self, idx: SlideIndex, frame: &SlideFrame) -> CardstockResult<()> {
        let spec = self
            .spec
            .as_ref()
            .ok_or_else(|| CardstockError::export("png sink not started"))?;
        if let Some(last) = self.last_idx
            && idx.0 <= last.0
        {
            return Err(CardstockError::export(
                "png sink received out-of-order slide index",
            ));
        }
        self.last_idx = Some(idx);

        if frame.width != spec.canvas.width || frame.height != spec.canvas.height {
            return Err(CardstockError::validation(format!(
                "slide size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, spec.canvas.width, spec.canvas.height
            )));
        }

        let path = self.dir.join(Self::file_name(idx));
        let straight = frame.to_straight_rgba();
        let img = image::RgbaImage::from_raw(frame.width, frame.height, straight)
            .ok_or_else(|| CardstockError::export("slide pixel buffer has invalid size"))?;
        img.save(&path).map_err(|e| {
            CardstockError::export(format!("failed to write '{}': {e}", path.display()))
        })?;
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> CardstockResult<()> {
        if self.spec.take().is_none() {
            return Err(CardstockError::export("png sink not started"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
