/// CSS color text to preview color conversion
///
/// The layer model keeps colors as free-form CSS text and emits them
/// unchanged. The preview canvas needs real RGBA values, so this module
/// understands the common forms:
/// - Hex: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
/// - Functional: `rgb(...)`, `rgba(...)` with comma or space separators,
///   an optional `/ alpha`, and alpha given as a number or a percentage
/// - A handful of named colors
///
/// Anything else yields `None` and the preview falls back to a neutral shade.

use iced::Color;

/// Parse CSS color text into an iced color
pub fn parse_css_color(text: &str) -> Option<Color> {
    let text = text.trim();

    if let Some(hex) = text.strip_prefix('#') {
        return parse_hex(hex);
    }

    let lower = text.to_ascii_lowercase();
    if let Some(args) = function_args(&lower, "rgba").or_else(|| function_args(&lower, "rgb")) {
        return parse_rgb_args(args);
    }

    named_color(&lower)
}

/// Body of `name(...)`, without the parentheses
fn function_args<'a>(text: &'a str, name: &str) -> Option<&'a str> {
    text.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    // Expand short forms: "f0a" -> "ff00aa"
    let expanded: String = match hex.len() {
        3 | 4 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => hex.to_string(),
        _ => return None,
    };

    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
    let r = channel(0)?;
    let g = channel(2)?;
    let b = channel(4)?;
    let a = if expanded.len() == 8 { channel(6)? as f32 / 255.0 } else { 1.0 };

    Some(Color::from_rgba8(r, g, b, a))
}

fn parse_rgb_args(args: &str) -> Option<Color> {
    // "r, g, b, a" | "r g b" | "r g b / a"
    let (channels, slash_alpha) = match args.split_once('/') {
        Some((channels, alpha)) => (channels, Some(alpha.trim())),
        None => (args, None),
    };

    let parts: Vec<&str> = channels
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    let (rgb, comma_alpha) = match parts.as_slice() {
        [r, g, b] => ([*r, *g, *b], None),
        [r, g, b, a] if slash_alpha.is_none() => ([*r, *g, *b], Some(*a)),
        _ => return None,
    };

    let mut values = [0u8; 3];
    for (value, part) in values.iter_mut().zip(rgb) {
        *value = parse_channel(part)?;
    }

    let alpha = match slash_alpha.or(comma_alpha) {
        Some(alpha) => parse_alpha(alpha)?,
        None => 1.0,
    };

    Some(Color::from_rgba8(values[0], values[1], values[2], alpha))
}

/// 0..=255, or a percentage of 255
fn parse_channel(part: &str) -> Option<u8> {
    let value = match part.strip_suffix('%') {
        Some(percent) => percent.parse::<f32>().ok()? / 100.0 * 255.0,
        None => part.parse::<f32>().ok()?,
    };
    if !value.is_finite() {
        return None;
    }
    Some(value.round().clamp(0.0, 255.0) as u8)
}

/// 0.0..=1.0, or a percentage
fn parse_alpha(part: &str) -> Option<f32> {
    let value = match part.strip_suffix('%') {
        Some(percent) => percent.parse::<f32>().ok()? / 100.0,
        None => part.parse::<f32>().ok()?,
    };
    if !value.is_finite() {
        return None;
    }
    Some(value.clamp(0.0, 1.0))
}

fn named_color(name: &str) -> Option<Color> {
    let color = match name {
        "black" => Color::BLACK,
        "white" => Color::WHITE,
        "transparent" => Color::TRANSPARENT,
        "red" => Color::from_rgb8(255, 0, 0),
        "green" => Color::from_rgb8(0, 128, 0),
        "blue" => Color::from_rgb8(0, 0, 255),
        "gray" | "grey" => Color::from_rgb8(128, 128, 128),
        _ => return None,
    };
    Some(color)
}
