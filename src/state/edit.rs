/// Shadow parameters for a single box-shadow term
///
/// This struct stores every value that makes up one layer of a CSS
/// `box-shadow`. The same field-set is used by presets (which carry no ids)
/// and by live layers in the store (which wrap it with an id).

use serde::{Deserialize, Serialize};

/// Neutral translucent black used for freshly added layers
pub const DEFAULT_COLOR: &str = "rgba(0, 0, 0, 0.2)";

/// All parameters of one shadow term
///
/// No range validation happens here. Callers (the sliders in the property
/// panel) are expected to clamp numeric values before they reach the model.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ShadowParams {
    // ========== Geometry ==========

    /// Horizontal offset in pixels
    /// - Negative values move the shadow left
    /// - Positive values move the shadow right
    pub x: f32,

    /// Vertical offset in pixels
    /// - Negative values move the shadow up
    /// - Positive values move the shadow down
    pub y: f32,

    /// Blur radius in pixels (semantically >= 0.0)
    pub blur: f32,

    /// Spread radius in pixels
    /// - Negative values shrink the shadow
    /// - Positive values grow the shadow
    pub spread: f32,

    // ========== Appearance ==========

    /// Any CSS-legal color text (e.g. "rgba(0, 0, 0, 0.2)", "#6366f1")
    pub color: String,

    /// Render inside the box instead of outside
    #[serde(default)]
    pub inset: bool,

    /// Hidden layers stay in the collection but are skipped on output
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl Default for ShadowParams {
    /// The values a newly added layer starts with
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 5.0,
            blur: 10.0,
            spread: 0.0,
            color: DEFAULT_COLOR.to_string(),
            inset: false,
            visible: true,
        }
    }
}

/// A single-field change to a layer
///
/// Each variant names the field and carries a value of that field's type,
/// so a color can never be written into an offset.
#[derive(Debug, Clone, PartialEq)]
pub enum ShadowUpdate {
    X(f32),
    Y(f32),
    Blur(f32),
    Spread(f32),
    Color(String),
    Inset(bool),
    Visible(bool),
}

impl ShadowParams {
    /// Replace exactly one field
    pub fn apply(&mut self, update: ShadowUpdate) {
        match update {
            ShadowUpdate::X(x) => self.x = x,
            ShadowUpdate::Y(y) => self.y = y,
            ShadowUpdate::Blur(blur) => self.blur = blur,
            ShadowUpdate::Spread(spread) => self.spread = spread,
            ShadowUpdate::Color(color) => self.color = color,
            ShadowUpdate::Inset(inset) => self.inset = inset,
            ShadowUpdate::Visible(visible) => self.visible = visible,
        }
    }
}

#[cfg(test)]
impl ShadowParams {
    /// Builder-style variant of [`ShadowParams::apply`] for test fixtures
    pub fn with(mut self, update: ShadowUpdate) -> Self {
        self.apply(update);
        self
    }
}
