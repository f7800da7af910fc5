//! Contracts for the collaborators around the analyzer.
//!
//! The analyzer never captures the screen or taps on it; the host supplies a
//! [`ScreenSource`] and a [`ClickDispatcher`]. Sequencing and timing of clicks
//! belongs to the host as well.

use crate::detector::Analyzer;
use crate::error::AnalyzeError;
use crate::image::{io::load_rgb_image, PixelBuffer};
use crate::types::{CardResult, GridShape};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaptureError {
    /// The platform refused or failed to produce a frame.
    #[error("screen capture failed: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Analyze(#[from] AnalyzeError),
}

/// Produces a screenshot on demand.
pub trait ScreenSource {
    fn capture(&mut self) -> Result<PixelBuffer, CaptureError>;
}

/// Best-effort tap dispatch at screen coordinates.
///
/// Returns whether the gesture was accepted for dispatch; completion is not
/// reported.
pub trait ClickDispatcher {
    fn click(&mut self, x: i32, y: i32) -> bool;
}

/// Screen source backed by an image file, re-read on every capture.
#[derive(Clone, Debug)]
pub struct ImageFileSource {
    path: PathBuf,
}

impl ImageFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScreenSource for ImageFileSource {
    fn capture(&mut self) -> Result<PixelBuffer, CaptureError> {
        load_rgb_image(&self.path).map_err(CaptureError::Unavailable)
    }
}

/// Capture one frame and analyze it.
pub fn analyze_capture(
    source: &mut dyn ScreenSource,
    analyzer: &Analyzer,
    grid: GridShape,
) -> Result<Vec<CardResult>, CaptureError> {
    let frame = source.capture()?;
    Ok(analyzer.analyze(&frame, grid)?)
}

/// Tap the centre of a detected card.
pub fn tap_card(dispatcher: &mut dyn ClickDispatcher, card: &CardResult) -> bool {
    let (x, y) = card.region.center();
    dispatcher.click(x, y)
}
