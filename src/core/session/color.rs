use std::fmt;

use bevy::color::{Color, Srgba};
use rand::Rng;

/// One swatch color, three independent 8-bit channels.
///
/// The [`Display`](fmt::Display) form (`rgb(R, G, B)`) is the canonical string
/// used both for the target readout and for guess comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Each channel drawn independently and uniformly from 0..=255.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            r: rng.gen_range(0..=255),
            g: rng.gen_range(0..=255),
            b: rng.gen_range(0..=255),
        }
    }

    /// Canonical string form, e.g. `rgb(12, 200, 7)`.
    pub fn canonical(&self) -> String {
        self.to_string()
    }

    pub fn to_color(self) -> Color {
        Color::srgb_u8(self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        c.to_color()
    }
}

/// Fresh palette of `len` random colors. Duplicates are not filtered.
pub fn random_palette<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<Rgb> {
    (0..len).map(|_| Rgb::random(rng)).collect()
}

/// Parses the CSS-ish color strings accepted in config files:
/// `#rgb`, `#rrggbb`, `rgb(r, g, b)` and a handful of named colors.
pub fn parse_css_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if s.starts_with('#') {
        return Srgba::hex(s).ok().map(Color::from);
    }
    if let Some(inner) = s.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
        let mut channels = inner.split(',').map(|c| c.trim().parse::<u8>());
        let (Some(Ok(r)), Some(Ok(g)), Some(Ok(b)), None) = (
            channels.next(),
            channels.next(),
            channels.next(),
            channels.next(),
        ) else {
            return None;
        };
        return Some(Rgb::new(r, g, b).to_color());
    }
    let named = match s.to_ascii_lowercase().as_str() {
        "steelblue" => Rgb::new(70, 130, 180),
        "white" => Rgb::new(255, 255, 255),
        "black" => Rgb::new(0, 0, 0),
        "gray" | "grey" => Rgb::new(128, 128, 128),
        _ => return None,
    };
    Some(named.to_color())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn canonical_form_matches_css_rgb() {
        assert_eq!(Rgb::new(0, 128, 255).canonical(), "rgb(0, 128, 255)");
    }

    #[test]
    fn palette_has_requested_length() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(random_palette(9, &mut rng).len(), 9);
        assert!(random_palette(0, &mut rng).is_empty());
    }

    #[test]
    fn css_parsing() {
        assert_eq!(
            parse_css_color("#232323"),
            Some(Color::srgb_u8(0x23, 0x23, 0x23))
        );
        assert_eq!(
            parse_css_color("rgb(1, 2, 3)"),
            Some(Color::srgb_u8(1, 2, 3))
        );
        assert_eq!(
            parse_css_color("SteelBlue"),
            Some(Color::srgb_u8(70, 130, 180))
        );
        assert_eq!(parse_css_color("rgb(1, 2)"), None);
        assert_eq!(parse_css_color("rgb(1, 2, 300)"), None);
        assert_eq!(parse_css_color("chartreuse-ish"), None);
    }
}
