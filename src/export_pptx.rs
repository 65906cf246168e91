//! Deck commit through an external presentation-file converter.
//!
//! The container format itself is out of scope here: the sink serializes a
//! flat EMU-geometry payload and pipes it to a `deck2pptx` binary on stdin,
//! the same way the MP4 path of comparable renderers shells out to `ffmpeg`
//! instead of linking an encoder.

use std::io::Write as _;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use serde::Serialize;

use crate::error::{FramedeckError, FramedeckResult};
use crate::render::{DrawInstruction, SlidePlan};
use crate::sink::{DeckSink, SinkConfig, ensure_parent_dir};
use crate::units::inches_to_emu;

/// Converter binary looked up on PATH by default.
pub const DEFAULT_CONVERTER: &str = "deck2pptx";

/// Environment variable overriding the converter binary.
pub const CONVERTER_ENV: &str = "FRAMEDECK_PPTX_TOOL";

fn converter_tool() -> String {
    std::env::var(CONVERTER_ENV).unwrap_or_else(|_| DEFAULT_CONVERTER.to_owned())
}

fn is_command_available(tool: &str) -> bool {
    Command::new(tool)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Probe the configured converter once, e.g. at subsystem startup.
pub fn is_converter_on_path() -> bool {
    is_command_available(&converter_tool())
}

#[derive(Debug, Serialize)]
struct WireDeck {
    project_id: String,
    slide_cx_emu: i64,
    slide_cy_emu: i64,
    slides: Vec<WireSlide>,
}

#[derive(Debug, Serialize)]
struct WireSlide {
    page_id: String,
    shapes: Vec<WireShape>,
}

#[derive(Debug, Serialize)]
struct WireShape {
    kind: &'static str,
    x_emu: i64,
    y_emu: i64,
    cx_emu: i64,
    cy_emu: i64,
    fill: String,
    line: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<WireLabel>,
}

#[derive(Debug, Serialize)]
struct WireLabel {
    text: String,
    size_pt: f64,
    color: String,
}

fn to_wire_shape(op: &DrawInstruction) -> WireShape {
    WireShape {
        kind: "rect",
        x_emu: inches_to_emu(op.bounds.x0),
        y_emu: inches_to_emu(op.bounds.y0),
        cx_emu: inches_to_emu(op.bounds.width()),
        cy_emu: inches_to_emu(op.bounds.height()),
        fill: op.fill.to_hex(),
        line: op.line.to_hex(),
        label: op.label.as_ref().map(|l| WireLabel {
            text: l.text.clone(),
            size_pt: l.font_size_pt,
            color: l.color.to_hex(),
        }),
    }
}

/// Sink that commits a deck to a `.pptx` file via the external converter.
///
/// The converter availability check runs once in [`PptxSink::new`]; the
/// process is spawned on `end` with the complete payload.
#[derive(Debug)]
pub struct PptxSink {
    tool: String,
    out_path: PathBuf,
    cfg: Option<SinkConfig>,
    slides: Vec<WireSlide>,
}

impl PptxSink {
    pub fn new(out_path: impl Into<PathBuf>) -> FramedeckResult<Self> {
        Self::with_tool(converter_tool(), out_path)
    }

    pub fn with_tool(tool: impl Into<String>, out_path: impl Into<PathBuf>) -> FramedeckResult<Self> {
        let tool = tool.into();
        if !is_command_available(&tool) {
            return Err(FramedeckError::unavailable_renderer(format!(
                "pptx converter '{tool}' was not found on PATH (set {CONVERTER_ENV} to override)"
            )));
        }
        Ok(Self {
            tool,
            out_path: out_path.into(),
            cfg: None,
            slides: Vec::new(),
        })
    }
}

impl DeckSink for PptxSink {
    fn begin(&mut self, cfg: SinkConfig) -> FramedeckResult<()> {
        self.cfg = Some(cfg);
        self.slides.clear();
        Ok(())
    }

    fn push_slide(&mut self, slide: &SlidePlan) -> FramedeckResult<()> {
        self.slides.push(WireSlide {
            page_id: slide.page_id.clone(),
            shapes: slide.ops.iter().map(to_wire_shape).collect(),
        });
        Ok(())
    }

    fn end(&mut self) -> FramedeckResult<()> {
        let cfg = self
            .cfg
            .take()
            .ok_or_else(|| FramedeckError::validation("PptxSink::end called before begin"))?;

        let deck = WireDeck {
            project_id: cfg.project_id,
            slide_cx_emu: inches_to_emu(cfg.slide.width_in),
            slide_cy_emu: inches_to_emu(cfg.slide.height_in),
            slides: std::mem::take(&mut self.slides),
        };

        ensure_parent_dir(&self.out_path)?;

        let payload = serde_json::to_vec(&deck)
            .map_err(|e| FramedeckError::serde(format!("serialize converter payload: {e}")))?;

        let mut child = Command::new(&self.tool)
            .arg("--out")
            .arg(&self.out_path)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                FramedeckError::unavailable_renderer(format!(
                    "failed to spawn pptx converter '{}': {e}",
                    self.tool
                ))
            })?;

        let mut stdin = child.stdin.take().ok_or_else(|| {
            FramedeckError::unavailable_renderer("failed to open converter stdin (unexpected)")
        })?;
        stdin.write_all(&payload).map_err(|e| {
            FramedeckError::unavailable_renderer(format!("failed to write converter payload: {e}"))
        })?;
        drop(stdin);

        let output = child.wait_with_output().map_err(|e| {
            FramedeckError::unavailable_renderer(format!("failed to wait for converter: {e}"))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(FramedeckError::unavailable_renderer(format!(
                "pptx converter exited with status {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        tracing::debug!(path = %self.out_path.display(), slides = deck.slides.len(), "wrote pptx deck");
        Ok(())
    }
}
