//! Framedeck converts pixel-coordinate UI frame documents into fixed-unit
//! slide-deck plans: a per-axis coordinate transform, a style rule table, and
//! ordered draw instructions consumed by a pluggable deck writer.
#![forbid(unsafe_code)]

pub mod error;
pub mod export_pptx;
pub mod exports;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod sink;
pub mod style;
pub mod units;

pub use error::{FramedeckError, FramedeckResult};
pub use exports::ExportStore;
pub use model::{Canvas, Element, ElementKind, FrameDocument, FramePage, Style, StyleMode, Theme};
pub use pipeline::export_document;
pub use render::{DeckPlan, DrawInstruction, Label, ShapeKind, SlidePlan, render_document, render_page};
pub use sink::{DeckSink, InMemorySink, JsonSink, SinkConfig, SinkKind, create_sink};
pub use style::{Rgb, StyleTable, VisualSpec};
pub use units::{EMU_PER_INCH, SlideSize, inches_to_emu, to_physical};
