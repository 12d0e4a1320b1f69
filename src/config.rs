/// Static editor configuration
///
/// Slider ranges, preview geometry and window settings. None of this is
/// read from disk; the editor keeps no state between sessions.

use std::ops::RangeInclusive;

use crate::state::ShadowUpdate;

pub const APP_TITLE: &str = "Shadow Editor";

/// Default log filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "shadow_editor=info";

// ========== Preview ==========

/// Side length of the sample box drawn in the preview, in pixels
pub const PREVIEW_BOX_SIZE: f32 = 180.0;

/// Number of rings used to approximate a Gaussian blur on the canvas
pub const PREVIEW_BLUR_STEPS: usize = 12;

/// Color used when a layer's color text cannot be drawn
pub const PREVIEW_FALLBACK_COLOR: iced::Color = iced::Color::from_rgba(0.0, 0.0, 0.0, 0.25);

/// Slider ranges for the numeric shadow fields, in pixels
#[derive(Debug, Clone, PartialEq)]
pub struct Limits {
    pub offset: RangeInclusive<f32>,
    pub blur: RangeInclusive<f32>,
    pub spread: RangeInclusive<f32>,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            offset: -100.0..=100.0,
            blur: 0.0..=200.0,
            spread: -100.0..=100.0,
        }
    }
}

impl Limits {
    /// Clamp a numeric update into its slider range
    ///
    /// This is the only validation the editor performs. Color and flag
    /// updates pass through untouched.
    pub fn clamp(&self, update: ShadowUpdate) -> ShadowUpdate {
        fn within(value: f32, range: &RangeInclusive<f32>) -> f32 {
            value.clamp(*range.start(), *range.end())
        }

        match update {
            ShadowUpdate::X(x) => ShadowUpdate::X(within(x, &self.offset)),
            ShadowUpdate::Y(y) => ShadowUpdate::Y(within(y, &self.offset)),
            ShadowUpdate::Blur(blur) => ShadowUpdate::Blur(within(blur, &self.blur)),
            ShadowUpdate::Spread(spread) => ShadowUpdate::Spread(within(spread, &self.spread)),
            other => other,
        }
    }
}
