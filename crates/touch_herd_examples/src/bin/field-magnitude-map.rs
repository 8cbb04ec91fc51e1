use glam::Vec2;
use touch_herd::prelude::*;
use touch_herd_examples::{init_tracing, render_field_magnitude_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Three held contacts: two close together on the left, one on the right.
    // The rendered magnitude shows the inverse-square wells merging.
    let mut registry = PointerRegistry::new();
    registry.upsert(PointerId(0), Vec2::new(-180.0, 60.0));
    registry.upsert(PointerId(1), Vec2::new(-120.0, -40.0));
    registry.upsert(PointerId(2), Vec2::new(220.0, 0.0));

    let field =
        AttractionField::default().with_policy(DegeneracyPolicy::Clamp { min_distance: 2.0 });

    let config = RenderConfig::new((1000, 1000), Vec2::new(800.0, 800.0));
    render_field_magnitude_to_png(&field, &registry, &config, "field-magnitude-map.png")?;

    Ok(())
}
