/// CSS output for the layer collection
///
/// Turns the current layers into a `box-shadow` declaration. Pure and
/// stateless: the code panel and the clipboard export both call
/// [`generate_declaration`] so the copied text always matches what is shown.

use crate::state::{ShadowLayer, ShadowParams};

/// Declaration emitted when no shadow is painted
pub const NO_SHADOW: &str = "box-shadow: none;";

/// Separator between terms: comma, then each term on its own indented line
const TERM_SEPARATOR: &str = ",\n  ";

/// Build the full `box-shadow` declaration
///
/// Only visible layers are emitted, in collection order. An empty collection
/// and a collection where every layer is hidden both produce
/// `box-shadow: none;`.
pub fn generate_declaration(layers: &[ShadowLayer]) -> String {
    let terms: Vec<String> = layers
        .iter()
        .filter(|layer| layer.params.visible)
        .map(|layer| format_shadow(&layer.params))
        .collect();

    if terms.is_empty() {
        return NO_SHADOW.to_string();
    }

    format!("box-shadow: {};", terms.join(TERM_SEPARATOR))
}

/// Render one shadow term: `[inset ]<x>px <y>px <blur>px <spread>px <color>`
pub fn format_shadow(params: &ShadowParams) -> String {
    format!(
        "{}{}px {}px {}px {}px {}",
        if params.inset { "inset " } else { "" },
        px(params.x),
        px(params.y),
        px(params.blur),
        px(params.spread),
        params.color
    )
}

/// Normalize negative zero so `-0px` never shows up
fn px(value: f32) -> f32 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}
