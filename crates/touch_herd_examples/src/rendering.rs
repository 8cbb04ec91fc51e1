//! Shared helpers for the example binaries: tracing setup and PNG output.
use anyhow::Result;
use glam::Vec2;
use image::{Rgb, RgbImage};
use touch_herd::prelude::{AttractionField, PointerRegistry};
use tracing_subscriber::EnvFilter;

/// Initializes a tracing subscriber for example output. Honors `RUST_LOG`,
/// defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Cycling colors for per-agent trails.
const TRAIL_PALETTE: [[u8; 3]; 6] = [
    [235, 94, 52],
    [52, 164, 235],
    [118, 235, 52],
    [235, 211, 52],
    [186, 52, 235],
    [52, 235, 186],
];

const POINTER_COLOR: [u8; 3] = [255, 255, 255];
const POINTER_RADIUS: i32 = 6;

/// Mapping from world space to image pixels.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output image size in pixels (width, height).
    pub image_size: (u32, u32),
    /// Size of the rendered world region.
    pub domain_extent: Vec2,
    /// World-space center of the rendered region.
    pub domain_center: Vec2,
    /// Background color.
    pub background: [u8; 3],
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), domain_extent: Vec2) -> Self {
        Self {
            image_size,
            domain_extent,
            domain_center: Vec2::ZERO,
            background: [26, 26, 26],
        }
    }

    pub fn with_domain_center(mut self, domain_center: Vec2) -> Self {
        self.domain_center = domain_center;
        self
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    fn to_pixel(&self, p: Vec2) -> (i32, i32) {
        let half = self.domain_extent * 0.5;
        let rel = (p - self.domain_center + half) / self.domain_extent;
        (
            (rel.x * self.image_size.0 as f32) as i32,
            (rel.y * self.image_size.1 as f32) as i32,
        )
    }

    fn pixel_to_world(&self, px: u32, py: u32) -> Vec2 {
        let rel = Vec2::new(
            (px as f32 + 0.5) / self.image_size.0 as f32,
            (py as f32 + 0.5) / self.image_size.1 as f32,
        );
        self.domain_center + (rel - Vec2::splat(0.5)) * self.domain_extent
    }
}

/// Dot size used when drawing a trail.
#[derive(Debug, Clone, Copy)]
pub struct TrailStyle {
    pub radius: i32,
}

impl Default for TrailStyle {
    fn default() -> Self {
        Self { radius: 1 }
    }
}

/// Renders agent trails and the final pointer positions to a PNG file.
///
/// Each trail is one agent's recorded positions in step order, drawn in a
/// palette color; pointers are drawn last as larger white dots.
pub fn render_trails_to_png(
    trails: &[Vec<Vec2>],
    pointers: &[Vec2],
    style: TrailStyle,
    config: &RenderConfig,
    path: &str,
) -> Result<()> {
    let (width, height) = config.image_size;
    let mut img = RgbImage::from_pixel(width, height, Rgb(config.background));

    for (i, trail) in trails.iter().enumerate() {
        let color = TRAIL_PALETTE[i % TRAIL_PALETTE.len()];
        for &p in trail {
            let (px, py) = config.to_pixel(p);
            fill_circle(&mut img, px, py, style.radius, color);
        }
    }

    for &p in pointers {
        let (px, py) = config.to_pixel(p);
        fill_circle(&mut img, px, py, POINTER_RADIUS, POINTER_COLOR);
    }

    img.save(path)?;
    Ok(())
}

/// Renders the attraction field magnitude around the active pointers to a
/// PNG file, tone-mapped so the inverse-square falloff stays visible.
pub fn render_field_magnitude_to_png(
    field: &AttractionField,
    registry: &PointerRegistry,
    config: &RenderConfig,
    path: &str,
) -> Result<()> {
    let (width, height) = config.image_size;
    let mut img = RgbImage::new(width, height);

    for py in 0..height {
        for px in 0..width {
            let world = config.pixel_to_world(px, py);
            let magnitude = field.evaluate(world, registry).length();
            // Soft saturation: 0 stays black, strong pull approaches white.
            let tone = magnitude / (1.0 + magnitude);
            let value = (tone * 255.0) as u8;
            img.put_pixel(px, py, Rgb([value, value, value]));
        }
    }

    for p in registry.positions() {
        let (cx, cy) = config.to_pixel(p);
        fill_circle(&mut img, cx, cy, POINTER_RADIUS / 2, [235, 94, 52]);
    }

    img.save(path)?;
    Ok(())
}

fn fill_circle(img: &mut RgbImage, cx: i32, cy: i32, radius: i32, color: [u8; 3]) {
    let (width, height) = (img.width() as i32, img.height() as i32);
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy > radius * radius {
                continue;
            }
            let (x, y) = (cx + dx, cy + dy);
            if x >= 0 && x < width && y >= 0 && y < height {
                img.put_pixel(x as u32, y as u32, Rgb(color));
            }
        }
    }
}
