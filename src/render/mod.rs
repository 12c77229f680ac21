//! Map rendering: boundary backdrop, region-colored points, sampled labels

mod layout;
mod map;
mod sample;

pub use layout::{region_groups, MapFrame, UNKNOWN_REGION};
pub use map::{draw_map, render_to_file, render_to_rgb, title, MapView};
pub use sample::annotation_sample;

use thiserror::Error;

/// Errors that can occur while rendering
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Drawing error: {0}")]
    Draw(String),

    #[error("Invalid canvas size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// Result type for render operations
pub type RenderResult<T> = Result<T, RenderError>;
