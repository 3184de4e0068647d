//! Self-sizing items settle after one measurement round.
//!
//! The first pass lays automatic items out at height zero. The host measures
//! them at their column width and reports back; the second pass corrects the
//! layout and a further round of identical measurements changes nothing.

use stagger_geometry::{EdgeInsets, Rect, Size};
use stagger_layout::{ElementKind, IndexPath, LayoutDataSource, LayoutEngine};
use stagger_testing::prelude::*;

/// Text-like measurement: narrower columns wrap into taller items.
fn wrapped_text(index_path: IndexPath, frame: Rect) -> Size {
    let characters = 60.0 + 25.0 * index_path.item as f32;
    let per_line = (frame.width / 8.0).floor().max(1.0);
    let lines = (characters / per_line).ceil();
    Size::new(frame.width, lines * 18.0)
}

fn feed() -> ScriptedSource {
    ScriptedSource::new()
        .with_section(ScriptedSection::flow(1).explicit(375.0, 250.0))
        .with_section(
            ScriptedSection::flow(1)
                .header(40.0)
                .inset(EdgeInsets::horizontal(16.0))
                .automatic(),
        )
        .with_section(
            ScriptedSection::waterfall(2)
                .header(40.0)
                .footer(24.0)
                .inset(EdgeInsets::horizontal(16.0))
                .line_spacing(8.0)
                .inter_item_spacing(8.0)
                .explicit(300.0, 400.0)
                .automatic()
                .explicit(300.0, 200.0)
                .automatic()
                .automatic()
                .explicit(300.0, 300.0),
        )
}

const EVERYTHING: Rect = Rect::new(0.0, 0.0, 10_000.0, 100_000.0);

#[test]
fn automatic_items_settle_in_two_passes() {
    let source = feed();
    let mut engine = LayoutEngine::new();
    let mut host = wrapped_text;

    let report = settle(&mut engine, &source, 375.0, EVERYTHING, &mut host, 8);

    assert!(report.settled);
    assert_eq!(report.passes, 2);
    assert_eq!(report.invalidating_reports, source.automatic_items().len());

    for index_path in source.automatic_items() {
        let attributes = engine.attributes_for_item(index_path).expect("laid out");
        let expected = wrapped_text(index_path, attributes.frame);
        assert_rect_approx_eq(
            attributes.frame,
            Rect::new(
                attributes.frame.x,
                attributes.frame.y,
                expected.width,
                expected.height,
            ),
            0.0,
            &format!("item {index_path}"),
        );
    }

    let all: Vec<_> = engine.attributes().copied().collect();
    let content = engine.content_size();
    assert_items_disjoint(&all, "settled feed");
    assert_within_content(&all, content.width, content.height, "settled feed");
}

#[test]
fn width_change_remeasures_at_new_column_width() {
    let source = feed();
    let mut engine = LayoutEngine::new();
    let mut host = wrapped_text;

    settle(&mut engine, &source, 320.0, EVERYTHING, &mut host, 8);
    let narrow = engine.content_size();
    let narrow_text = engine
        .attributes_for_item(IndexPath::new(1, 0))
        .expect("text item")
        .frame;

    let report = settle(&mut engine, &source, 768.0, EVERYTHING, &mut host, 8);
    assert!(report.settled);
    assert_eq!(report.passes, 2);

    let wide = engine.content_size();
    let wide_text = engine
        .attributes_for_item(IndexPath::new(1, 0))
        .expect("text item")
        .frame;
    assert_eq!(wide.width, 768.0);
    assert!(wide_text.width > narrow_text.width);
    assert!(wide_text.height < narrow_text.height);
    assert!(wide.height != narrow.height);
}

#[test]
fn collapsed_items_are_all_measured_in_the_first_round() {
    let source = ScriptedSource::new().with_section(ScriptedSection::flow(1).automatic_items(50));
    let mut engine = LayoutEngine::new();
    let mut host = |_: IndexPath, frame: Rect| Size::new(frame.width, 100.0);

    // every unmeasured item sits at y = 0, so the first round sees all of them
    let report = settle(
        &mut engine,
        &source,
        320.0,
        Rect::new(0.0, 0.0, 320.0, 480.0),
        &mut host,
        16,
    );
    assert!(report.settled);

    let measured = (0..source.item_count(0))
        .filter(|&item| engine.measured_size(IndexPath::new(0, item)).is_some())
        .count();
    assert_eq!(measured, 50);
    assert_eq!(engine.content_size().height, 5_000.0);

    let visible = engine.attributes_intersecting(Rect::new(0.0, 0.0, 320.0, 480.0));
    assert_count(&visible, 5, "visible after settling");
    assert!(visible.iter().all(|a| a.kind() == ElementKind::Item));
}

#[test]
fn settle_gives_up_on_unstable_measurements() {
    let source = ScriptedSource::new().with_section(ScriptedSection::flow(1).automatic());
    let mut engine = LayoutEngine::new();
    let mut rounds = 0.0;
    let mut host = |_: IndexPath, frame: Rect| {
        rounds += 1.0;
        Size::new(frame.width, rounds * 10.0)
    };

    let report = settle(&mut engine, &source, 320.0, EVERYTHING, &mut host, 3);

    assert!(!report.settled);
    assert_eq!(report.passes, 3);
    assert_eq!(report.invalidating_reports, 3);
}
