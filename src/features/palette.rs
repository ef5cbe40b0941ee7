//! Named colour resources
//!
//! Colours can be referred to by name (like a resource id) and resolved to a
//! concrete [`Color`] through a [`Palette`]. Hex literals are also accepted
//! wherever a colour is parsed from text.

use iced::{Color, color};

/// Built-in material-style colours, in swatch order
const MATERIAL: &[(&str, Color)] = &[
    ("red", color!(0xf44336)),
    ("pink", color!(0xe91e63)),
    ("purple", color!(0x9c27b0)),
    ("deep_purple", color!(0x673ab7)),
    ("indigo", color!(0x3f51b5)),
    ("blue", color!(0x2196f3)),
    ("light_blue", color!(0x03a9f4)),
    ("cyan", color!(0x00bcd4)),
    ("teal", color!(0x009688)),
    ("green", color!(0x4caf50)),
    ("light_green", color!(0x8bc34a)),
    ("lime", color!(0xcddc39)),
    ("yellow", color!(0xffeb3b)),
    ("amber", color!(0xffc107)),
    ("orange", color!(0xff9800)),
    ("deep_orange", color!(0xff5722)),
    ("brown", color!(0x795548)),
    ("grey", color!(0x9e9e9e)),
    ("blue_grey", color!(0x607d8b)),
    ("black", color!(0x000000)),
    ("white", color!(0xffffff)),
    ("transparent", Color::TRANSPARENT),
];

/// A lookup table from colour names to colours
#[derive(Debug, Clone)]
pub struct Palette {
    entries: Vec<(String, Color)>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::material()
    }
}

impl Palette {
    /// The built-in material palette
    pub fn material() -> Self {
        Self {
            entries: MATERIAL
                .iter()
                .map(|(name, color)| ((*name).to_string(), *color))
                .collect(),
        }
    }

    /// Resolve a colour by name
    pub fn resolve(&self, name: &str) -> Option<Color> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, color)| *color)
    }

    /// Resolve a name or a `#RRGGBB` / `#AARRGGBB` literal
    pub fn parse(&self, value: &str) -> Option<Color> {
        let value = value.trim();
        if value.starts_with('#') {
            parse_hex(value)
        } else {
            self.resolve(value)
        }
    }

    /// Opaque colours suitable for random swatches
    pub fn swatches(&self) -> impl Iterator<Item = Color> + '_ {
        self.entries
            .iter()
            .map(|(_, color)| *color)
            .filter(|color| color.a >= 1.0)
    }
}

/// Parse `#RRGGBB` or `#AARRGGBB`
pub fn parse_hex(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    let argb = u32::from_str_radix(hex, 16).ok()?;
    match hex.len() {
        6 => Some(Color::from_rgb8(
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
        )),
        8 => Some(Color::from_rgba8(
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
            (argb >> 24) as f32 / 255.0,
        )),
        _ => None,
    }
}

/// Whether a colour would draw anything at all
pub fn is_visible(color: Color) -> bool {
    color.a > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_named_colour() {
        let palette = Palette::material();
        assert_eq!(palette.resolve("white"), Some(Color::WHITE));
        assert_eq!(palette.resolve("not_a_colour"), None);
    }

    #[test]
    fn test_parse_hex_rgb() {
        assert_eq!(parse_hex("#ff0000"), Some(Color::from_rgb8(255, 0, 0)));
    }

    #[test]
    fn test_parse_hex_argb() {
        let c = parse_hex("#80000000").unwrap();
        assert_eq!(c.a, 128.0 / 255.0);
        assert_eq!(c.r, 0.0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_hex("#12345"), None);
        assert_eq!(parse_hex("#zzzzzz"), None);
        assert_eq!(parse_hex("ff0000"), None);
        assert_eq!(Palette::material().parse("   "), None);
    }

    #[test]
    fn test_swatches_skip_transparent() {
        let palette = Palette::material();
        assert!(palette.swatches().all(is_visible));
        assert!(!is_visible(Color::TRANSPARENT));
    }
}
