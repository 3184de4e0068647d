mod feed;

use anyhow::{bail, Context, Result};
use clap::Parser;
use stagger_geometry::Rect;
use stagger_layout::{ElementKind, LayoutAttributes, LayoutEngine};

use feed::Feed;

const MAX_PASSES: usize = 8;

/// Lay out the mock feed and print every frame
#[derive(Parser, Debug)]
#[command(name = "stagger-demo", version, about)]
struct Args {
    /// Viewport width in points
    #[arg(default_value_t = 375.0, value_parser = parse_dimension)]
    width: f32,

    /// Viewport height in points; also the scroll step of the screen walk
    #[arg(default_value_t = 812.0, value_parser = parse_dimension)]
    height: f32,
}

fn parse_dimension(value: &str) -> Result<f32> {
    let parsed: f32 = value
        .parse()
        .with_context(|| format!("expected a number, got {value:?}"))?;
    if !parsed.is_finite() || parsed <= 0.0 {
        bail!("must be positive, got {parsed}");
    }
    Ok(parsed)
}

/// Lays out, measures the visible text cells and feeds the sizes back until
/// nothing moves. Returns the number of passes.
fn layout_until_stable(engine: &mut LayoutEngine, feed: &Feed, viewport: Rect) -> usize {
    for pass in 1..=MAX_PASSES {
        engine.prepare(feed, viewport.width);

        let (context, changed) =
            engine.measure_visible_items(feed, viewport, |index_path, frame| {
                feed.measure(index_path, frame.width)
            });
        if context.is_empty() {
            return pass;
        }
        log::debug!("pass {pass}: {changed} text cells resized");
        engine.invalidate(context);
    }
    log::warn!("layout still changing after {MAX_PASSES} passes");
    MAX_PASSES
}

fn describe(attributes: &LayoutAttributes) -> String {
    let origin = attributes.frame.origin();
    let size = attributes.frame.size();
    let column = match (attributes.kind(), attributes.column) {
        (ElementKind::Item, Some(column)) => format!("col {column}"),
        _ => String::new(),
    };
    format!(
        "{:<22} x {:>7.1}  y {:>8.1}  w {:>7.1}  h {:>7.1}  {}",
        attributes.element.to_string(),
        origin.x,
        origin.y,
        size.width,
        size.height,
        column
    )
}

fn main() -> Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();
    let feed = Feed::mock();
    let mut engine = LayoutEngine::new();
    let viewport = Rect::new(0.0, 0.0, args.width, args.height);

    let passes = layout_until_stable(&mut engine, &feed, viewport);
    log::info!(
        "laid out {} blocks in {} passes ({} attributes)",
        feed.blocks().len(),
        passes,
        engine.attributes().len()
    );

    println!("=== Stagger feed at {} x {} ===", args.width, args.height);
    for attributes in engine.attributes() {
        println!("{}", describe(attributes));
    }

    let content = engine.content_size();
    println!();
    println!("content size: {} x {}", content.width, content.height);

    // walk the feed one screen at a time, the way a scroll view would
    let mut top = 0.0;
    while top < content.height {
        let visible = engine.attributes_intersecting(viewport.translate(0.0, top));
        println!("screen at {top:>8.1}: {} visible", visible.len());
        top += args.height;
    }
    Ok(())
}
