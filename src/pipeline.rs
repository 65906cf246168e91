use crate::error::FramedeckResult;
use crate::model::FrameDocument;
use crate::render::render_document;
use crate::sink::{DeckSink, SinkConfig};
use crate::style::StyleTable;
use crate::units::SlideSize;

/// Render a document and stream the resulting slides through a sink.
///
/// Validation happens before the sink sees anything, so a rejected document
/// never produces a partial artifact. Every page becomes exactly one
/// `push_slide`, empty pages included.
pub fn export_document(
    doc: &FrameDocument,
    slide: SlideSize,
    styles: &StyleTable,
    sink: &mut dyn DeckSink,
) -> FramedeckResult<()> {
    let plan = render_document(doc, slide, styles)?;

    sink.begin(SinkConfig {
        project_id: plan.project_id.clone(),
        slide: plan.slide,
    })?;
    for slide_plan in &plan.slides {
        sink.push_slide(slide_plan)?;
    }
    sink.end()
}
