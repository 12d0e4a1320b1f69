/// Presentation layer
///
/// Thin wrappers around the layer store:
/// - `canvas.rs` - live shadow preview with offset dragging
/// - `panels.rs` - layer list, property editor, presets and CSS output

pub mod canvas;
pub mod panels;

pub use canvas::ShadowPreview;
