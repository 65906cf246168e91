use std::path::{Path, PathBuf};

use crate::error::{FramedeckError, FramedeckResult};
use crate::render::{DeckPlan, SlidePlan};
use crate::units::SlideSize;

/// Configuration handed to a [`DeckSink`] before any slides are pushed.
#[derive(Debug, Clone)]
pub struct SinkConfig {
    pub project_id: String,
    pub slide: SlideSize,
}

/// Sink contract for consuming rendered slides in deck order.
///
/// Ordering contract: `push_slide` is called once per input page, in page
/// order, including pages with zero draw instructions.
pub trait DeckSink: Send {
    /// Called once before any slides are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> FramedeckResult<()>;
    /// Push one slide in deck order.
    fn push_slide(&mut self, slide: &SlidePlan) -> FramedeckResult<()>;
    /// Called once after the last slide; commits the artifact.
    fn end(&mut self) -> FramedeckResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    slides: Vec<SlidePlan>,
    ended: bool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    /// Borrow the captured slides.
    pub fn slides(&self) -> &[SlidePlan] {
        &self.slides
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl DeckSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> FramedeckResult<()> {
        self.cfg = Some(cfg);
        self.slides.clear();
        self.ended = false;
        Ok(())
    }

    fn push_slide(&mut self, slide: &SlidePlan) -> FramedeckResult<()> {
        self.slides.push(slide.clone());
        Ok(())
    }

    fn end(&mut self) -> FramedeckResult<()> {
        self.ended = true;
        Ok(())
    }
}

/// Sink that writes the full [`DeckPlan`] as a pretty JSON artifact.
#[derive(Debug)]
pub struct JsonSink {
    out_path: PathBuf,
    cfg: Option<SinkConfig>,
    slides: Vec<SlidePlan>,
}

impl JsonSink {
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            cfg: None,
            slides: Vec::new(),
        }
    }

    pub fn out_path(&self) -> &Path {
        &self.out_path
    }
}

impl DeckSink for JsonSink {
    fn begin(&mut self, cfg: SinkConfig) -> FramedeckResult<()> {
        self.cfg = Some(cfg);
        self.slides.clear();
        Ok(())
    }

    fn push_slide(&mut self, slide: &SlidePlan) -> FramedeckResult<()> {
        self.slides.push(slide.clone());
        Ok(())
    }

    fn end(&mut self) -> FramedeckResult<()> {
        let cfg = self
            .cfg
            .take()
            .ok_or_else(|| FramedeckError::validation("JsonSink::end called before begin"))?;

        let plan = DeckPlan {
            project_id: cfg.project_id,
            slide: cfg.slide,
            slides: std::mem::take(&mut self.slides),
        };

        ensure_parent_dir(&self.out_path)?;

        let json = serde_json::to_vec_pretty(&plan)
            .map_err(|e| FramedeckError::serde(format!("serialize deck plan: {e}")))?;

        use anyhow::Context as _;
        std::fs::write(&self.out_path, json)
            .with_context(|| format!("write deck plan '{}'", self.out_path.display()))?;

        tracing::debug!(path = %self.out_path.display(), slides = plan.slides.len(), "wrote json deck plan");
        Ok(())
    }
}

pub fn ensure_parent_dir(path: &Path) -> FramedeckResult<()> {
    if let Some(parent) = path.parent() {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Writer backends a deck can be committed through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SinkKind {
    Json,
    Pptx,
}

/// Create a sink for `kind`, checking its environment capability up front.
///
/// The pptx path needs an external converter on PATH; a missing converter is
/// a configuration error ([`FramedeckError::UnavailableRenderer`]), not a
/// data error, and is surfaced here before any render work is consumed.
pub fn create_sink(kind: SinkKind, out_path: &Path) -> FramedeckResult<Box<dyn DeckSink>> {
    match kind {
        SinkKind::Json => Ok(Box::new(JsonSink::new(out_path))),
        SinkKind::Pptx => Ok(Box::new(crate::export_pptx::PptxSink::new(out_path)?)),
    }
}
