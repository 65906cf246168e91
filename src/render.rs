use kurbo::Rect;
use serde::{Deserialize, Serialize};

use crate::error::FramedeckResult;
use crate::model::{FrameDocument, FramePage};
use crate::style::{Rgb, StyleTable};
use crate::units::{SlideSize, to_physical};

/// Shape geometry family for a draw instruction.
///
/// Element kind only affects colors and labels, never geometry, so a single
/// rectangle kind covers every current element type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Rect,
}

/// Text annotation attached to a shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    pub font_size_pt: f64,
    pub color: Rgb,
}

/// One fully resolved shape placement in slide units (inches).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawInstruction {
    pub shape: ShapeKind,
    pub bounds: Rect,
    pub fill: Rgb,
    pub line: Rgb,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
}

/// Draw instructions for one output slide, in paint order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlidePlan {
    pub page_id: String,
    pub ops: Vec<DrawInstruction>,
}

/// The whole deck: one slide plan per input page, in page order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeckPlan {
    pub project_id: String,
    pub slide: SlideSize,
    pub slides: Vec<SlidePlan>,
}

impl DeckPlan {
    /// Total draw instructions across all slides.
    pub fn op_count(&self) -> usize {
        self.slides.iter().map(|s| s.ops.len()).sum()
    }
}

/// Render one page into draw instructions.
///
/// Elements map 1:1 onto instructions in input order; nothing is skipped,
/// merged, or reordered. An empty page yields an empty list (the writer still
/// emits the slide).
pub fn render_page(page: &FramePage, slide: SlideSize, styles: &StyleTable) -> Vec<DrawInstruction> {
    let canvas_w = f64::from(page.canvas.width);
    let canvas_h = f64::from(page.canvas.height);

    let mut ops = Vec::with_capacity(page.elements.len());
    for el in &page.elements {
        let x = to_physical(el.x, canvas_w, slide.width_in);
        let y = to_physical(el.y, canvas_h, slide.height_in);
        let w = to_physical(el.w, canvas_w, slide.width_in);
        let h = to_physical(el.h, canvas_h, slide.height_in);

        let spec = styles.resolve(el.kind, page.style);

        let label = el.label_text().map(|text| Label {
            text: text.to_owned(),
            font_size_pt: spec.font_size_pt,
            color: spec.font_color,
        });

        ops.push(DrawInstruction {
            shape: ShapeKind::Rect,
            bounds: Rect::new(x, y, x + w, y + h),
            fill: spec.fill,
            line: spec.line,
            label,
        });
    }
    ops
}

/// Render a whole document into a deck plan.
///
/// Validates the document and slide size up front; a failed validation
/// produces no partial plan. The result is deterministic for a given input.
#[tracing::instrument(skip(doc, styles), fields(project = %doc.project_id, pages = doc.pages.len()))]
pub fn render_document(
    doc: &FrameDocument,
    slide: SlideSize,
    styles: &StyleTable,
) -> FramedeckResult<DeckPlan> {
    doc.validate()?;
    slide.validate()?;

    let slides = doc
        .pages
        .iter()
        .map(|page| SlidePlan {
            page_id: page.page_id.clone(),
            ops: render_page(page, slide, styles),
        })
        .collect();

    Ok(DeckPlan {
        project_id: doc.project_id.clone(),
        slide,
        slides,
    })
}
