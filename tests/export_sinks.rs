use std::path::PathBuf;

use framedeck::{
    Canvas, DeckPlan, ExportStore, FrameDocument, FramePage, InMemorySink, JsonSink, SlideSize,
    Style, StyleTable, export_document,
};

fn demo_doc() -> FrameDocument {
    let s = include_str!("data/simple_doc.json");
    serde_json::from_str(s).unwrap()
}

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "framedeck_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

#[test]
fn export_pushes_one_slide_per_page_including_empty_pages() {
    let mut doc = demo_doc();
    doc.pages.push(FramePage {
        page_id: "blank".to_string(),
        canvas: Canvas {
            width: 100,
            height: 100,
        },
        elements: vec![],
        style: Style::default(),
    });

    let mut sink = InMemorySink::new();
    export_document(&doc, SlideSize::DEFAULT, &StyleTable::baseline(), &mut sink).unwrap();

    assert!(sink.is_ended());
    assert_eq!(sink.config().unwrap().project_id, "demo");
    assert_eq!(sink.slides().len(), 2);
    assert_eq!(sink.slides()[1].page_id, "blank");
    assert!(sink.slides()[1].ops.is_empty());
}

#[test]
fn invalid_document_reaches_no_sink_call() {
    let mut doc = demo_doc();
    doc.pages[0].canvas.width = 0;

    let mut sink = InMemorySink::new();
    let err = export_document(&doc, SlideSize::DEFAULT, &StyleTable::baseline(), &mut sink);
    assert!(err.is_err());
    assert!(sink.config().is_none());
    assert!(!sink.is_ended());
}

#[test]
fn json_sink_writes_a_parseable_deck_plan() {
    let dir = temp_dir("json_sink");
    let out = dir.join("deck.json");

    let mut sink = JsonSink::new(&out);
    export_document(
        &demo_doc(),
        SlideSize::DEFAULT,
        &StyleTable::baseline(),
        &mut sink,
    )
    .unwrap();

    let plan: DeckPlan = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
    assert_eq!(plan.project_id, "demo");
    assert_eq!(plan.slides.len(), 1);
    assert_eq!(plan.slides[0].ops.len(), 2);
    assert_eq!(plan.slide.width_in, 10.0);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn export_store_round_trips_a_json_artifact() {
    let dir = temp_dir("store_roundtrip");
    let store = ExportStore::new(&dir).unwrap();

    let doc = demo_doc();
    let export_id = store.new_export_id(&doc.project_id);
    let out = store.path_for(&export_id, "json").unwrap();

    let mut sink = JsonSink::new(&out);
    export_document(&doc, SlideSize::DEFAULT, &StyleTable::baseline(), &mut sink).unwrap();

    let resolved = store.resolve(&export_id, "json").unwrap();
    assert_eq!(resolved, out);
    assert!(store.resolve(&export_id, "pptx").is_err());

    std::fs::remove_dir_all(&dir).ok();
}
