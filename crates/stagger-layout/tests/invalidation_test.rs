//! Incremental invalidation and content edits driven through a scripted source.

use stagger_geometry::{EdgeInsets, Rect, Size};
use stagger_layout::{IndexPath, ItemSize, LayoutEngine, LayoutPhase};
use stagger_testing::prelude::*;

fn three_sections() -> ScriptedSource {
    ScriptedSource::new()
        .with_section(ScriptedSection::flow(2).explicit_heights(200.0, &[100.0, 150.0, 120.0]))
        .with_section(
            ScriptedSection::flow(1)
                .header(40.0)
                .footer(20.0)
                .automatic_items(3),
        )
        .with_section(ScriptedSection::waterfall(2).explicit_heights(200.0, &[80.0, 60.0, 100.0]))
}

fn measured(engine: &mut LayoutEngine, source: &ScriptedSource, heights: &[f32]) {
    for (item, &height) in heights.iter().enumerate() {
        engine.report_measured_size(source, IndexPath::new(1, item), Size::new(400.0, height));
    }
}

fn generation_of(engine: &LayoutEngine, section: usize, item: usize) -> u64 {
    engine
        .attributes_for_item(IndexPath::new(section, item))
        .map(|a| a.generation)
        .expect("item laid out")
}

#[test]
fn measurement_recomputes_only_later_elements() {
    let source = three_sections();
    let mut engine = LayoutEngine::new();

    engine.prepare(&source, 400.0);
    measured(&mut engine, &source, &[50.0, 50.0, 50.0]);
    engine.prepare(&source, 400.0);
    assert_eq!(engine.content_size(), Size::new(400.0, 590.0));

    assert!(engine.report_measured_size(&source, IndexPath::new(1, 1), Size::new(400.0, 80.0)));
    assert_eq!(engine.phase(), LayoutPhase::Idle);
    engine.prepare(&source, 400.0);
    assert_eq!(engine.generation(), 3);

    for item in 0..3 {
        assert_eq!(generation_of(&engine, 0, item), 1);
    }
    assert_eq!(engine.attributes_for_header(1).map(|a| a.generation), Some(1));
    assert_eq!(generation_of(&engine, 1, 0), 2);
    assert_eq!(generation_of(&engine, 1, 1), 3);
    assert_eq!(generation_of(&engine, 1, 2), 3);
    assert_eq!(engine.attributes_for_footer(1).map(|a| a.generation), Some(3));
    for item in 0..3 {
        assert_eq!(generation_of(&engine, 2, item), 3);
    }
    assert_eq!(engine.cached_attribute_count(), engine.attributes().len());
}

#[test]
fn later_sections_shift_by_the_height_change() {
    let source = three_sections();
    let mut engine = LayoutEngine::new();

    engine.prepare(&source, 400.0);
    measured(&mut engine, &source, &[50.0, 50.0, 50.0]);
    engine.prepare(&source, 400.0);
    let before: Vec<Rect> = (0..3)
        .map(|item| engine.attributes_for_item(IndexPath::new(2, item)).expect("item").frame)
        .collect();

    engine.report_measured_size(&source, IndexPath::new(1, 1), Size::new(400.0, 80.0));
    engine.prepare(&source, 400.0);

    for (item, old) in before.into_iter().enumerate() {
        let new = engine.attributes_for_item(IndexPath::new(2, item)).expect("item").frame;
        assert_rect_approx_eq(new, old.translate(0.0, 30.0), 0.0, &format!("item [2, {item}]"));
    }
    assert_rect_approx_eq(
        engine.attributes_for_footer(1).expect("footer").frame,
        Rect::new(0.0, 440.0, 400.0, 20.0),
        0.0,
        "footer of section 1",
    );
    assert_eq!(engine.content_size().height, 620.0);
}

#[test]
fn stale_report_after_removal_is_ignored() {
    let mut source = three_sections();
    let mut engine = LayoutEngine::new();
    engine.prepare(&source, 400.0);

    source.remove_section(2);
    assert!(!engine.report_measured_size(&source, IndexPath::new(2, 0), Size::new(200.0, 10.0)));
    assert_eq!(engine.phase(), LayoutPhase::Ready);

    engine.prepare(&source, 400.0);
    assert_eq!(engine.sections().len(), 2);
    assert!(engine.attributes_for_item(IndexPath::new(2, 0)).is_none());
    assert_eq!(engine.content_size().height, engine.sections()[1].bottom);
    assert_eq!(engine.cached_attribute_count(), engine.attributes().len());
}

#[test]
fn size_edits_need_an_explicit_data_change() {
    let mut source = three_sections();
    let mut engine = LayoutEngine::new();
    engine.prepare(&source, 400.0);

    if let Some(section) = source.section_mut(0) {
        section.set_item(0, ItemSize::explicit(200.0, 300.0));
    }

    // same shape, so the cached frame survives
    engine.prepare(&source, 400.0);
    assert_eq!(
        engine.attributes_for_item(IndexPath::new(0, 0)).map(|a| a.frame.height),
        Some(100.0)
    );

    engine.invalidate_for_data_change();
    engine.prepare(&source, 400.0);
    assert_eq!(
        engine.attributes_for_item(IndexPath::new(0, 0)).map(|a| a.frame.height),
        Some(300.0)
    );
}

#[test]
fn inserted_item_triggers_a_full_pass() {
    let mut source = three_sections();
    let mut engine = LayoutEngine::new();
    engine.prepare(&source, 400.0);

    if let Some(section) = source.section_mut(2) {
        section.insert_item(0, ItemSize::explicit(200.0, 40.0));
    }
    engine.prepare(&source, 400.0);

    assert_eq!(generation_of(&engine, 0, 0), 2);
    assert_eq!(engine.attributes_for_item(IndexPath::new(2, 3)).map(|a| a.generation), Some(2));
    assert_rect_approx_eq(
        engine.attributes_for_item(IndexPath::new(2, 0)).expect("inserted").frame,
        Rect::new(0.0, 280.0, 200.0, 40.0),
        0.0,
        "inserted item",
    );
}

#[test]
fn broken_inputs_degrade_locally() {
    let source = ScriptedSource::new()
        .with_section(
            ScriptedSection::waterfall(2)
                .inset(EdgeInsets::horizontal(10.0))
                .line_spacing(10.0)
                .explicit_heights(100.0, &[100.0, 50.0])
                .broken("decode failed")
                .explicit(100.0, 100.0),
        )
        .with_section(
            ScriptedSection::flow(3)
                .broken_layout("missing descriptor")
                .inset(EdgeInsets::horizontal(10.0))
                .explicit(100.0, 100.0),
        );
    let mut engine = LayoutEngine::new();
    engine.prepare(&source, 210.0);

    let frame = |section, item| {
        engine
            .attributes_for_item(IndexPath::new(section, item))
            .expect("item laid out")
            .frame
    };
    assert_rect_approx_eq(frame(0, 0), Rect::new(10.0, 0.0, 90.0, 90.0), 0.0, "item [0, 0]");
    assert_rect_approx_eq(frame(0, 1), Rect::new(110.0, 0.0, 90.0, 45.0), 0.0, "item [0, 1]");
    assert_rect_approx_eq(frame(0, 2), Rect::new(110.0, 45.0, 0.0, 0.0), 0.0, "broken item");
    assert_rect_approx_eq(frame(0, 3), Rect::new(110.0, 45.0, 90.0, 90.0), 0.0, "item [0, 3]");
    assert_rect_approx_eq(frame(1, 0), Rect::new(10.0, 135.0, 190.0, 190.0), 0.0, "fallback");
    assert_eq!(engine.content_size(), Size::new(210.0, 325.0));

    let all: Vec<_> = engine.attributes().copied().collect();
    assert_items_disjoint(&all, "degraded feed");
    assert_within_content(&all, 210.0, 325.0, "degraded feed");
}

#[test]
fn scrolling_windows_cover_every_element() {
    let heights: Vec<f32> = (0..30).map(|i| 80.0 + (i * 37 % 120) as f32).collect();
    let source = ScriptedSource::new()
        .with_section(
            ScriptedSection::waterfall(3)
                .header(40.0)
                .line_spacing(6.0)
                .inter_item_spacing(6.0)
                .explicit_heights(120.0, &heights),
        )
        .with_section(
            ScriptedSection::flow(2)
                .footer(30.0)
                .explicit_heights(100.0, &heights[..20]),
        );
    let mut engine = LayoutEngine::new();
    engine.prepare(&source, 390.0);

    let content = engine.content_size();
    let mut seen = Vec::new();
    let mut top = 0.0;
    while top < content.height {
        let window = Rect::new(0.0, top, content.width, 300.0);
        let visible = engine.attributes_intersecting(window);
        assert!(visible.iter().all(|a| window.intersects(&a.frame)));
        assert!(visible.windows(2).all(|pair| pair[0].element < pair[1].element));
        seen.extend(visible.into_iter().map(|a| a.element));
        top += 300.0;
    }

    for attributes in engine.attributes() {
        assert!(
            seen.contains(&attributes.element),
            "{} never became visible",
            attributes.element
        );
    }
}
