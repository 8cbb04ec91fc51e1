#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{
    init_tracing, render_field_magnitude_to_png, render_trails_to_png, RenderConfig, TrailStyle,
};
