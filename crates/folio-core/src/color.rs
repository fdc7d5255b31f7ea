//! Colour parsing and sRGB/linear conversion.
//!
//! Palette entries are authored as CSS colour strings. They are decoded once
//! into linear RGB so that easing and lighting happen in linear space.

use glam::Vec3;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("unknown colour name `{0}`")]
    UnknownName(String),
    #[error("malformed hex colour `{0}`")]
    BadHex(String),
}

/// Linear-space RGB colour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb(pub Vec3);

impl Rgb {
    pub const WHITE: Rgb = Rgb(Vec3::ONE);
    pub const BLACK: Rgb = Rgb(Vec3::ZERO);

    /// Parse `#rgb`, `#rrggbb` or one of the supported CSS names.
    pub fn parse(s: &str) -> Result<Rgb, ColorError> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorError::BadHex(s.to_string()));
        }
        match s.to_ascii_lowercase().as_str() {
            "white" => Ok(Rgb::WHITE),
            "black" => Ok(Rgb::BLACK),
            _ => Err(ColorError::UnknownName(s.to_string())),
        }
    }

    pub fn from_srgb(r: f32, g: f32, b: f32) -> Rgb {
        Rgb(Vec3::new(
            srgb_to_linear(r),
            srgb_to_linear(g),
            srgb_to_linear(b),
        ))
    }

    pub fn to_srgb(self) -> [f32; 3] {
        [
            linear_to_srgb(self.0.x),
            linear_to_srgb(self.0.y),
            linear_to_srgb(self.0.z),
        ]
    }

    pub fn to_srgb_hex(self) -> String {
        let [r, g, b] = self.to_srgb();
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", byte(r), byte(g), byte(b))
    }

    #[inline]
    pub fn linear(self) -> Vec3 {
        self.0
    }
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    let digits: Vec<u8> = hex
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<_>>()?;
    let (r, g, b) = match digits.as_slice() {
        [r, g, b] => (r * 17, g * 17, b * 17),
        [r1, r0, g1, g0, b1, b0] => (r1 * 16 + r0, g1 * 16 + g0, b1 * 16 + b0),
        _ => return None,
    };
    Some(Rgb::from_srgb(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
    ))
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
pub fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_and_long_hex_agree() {
        assert_eq!(Rgb::parse("#444").unwrap(), Rgb::parse("#444444").unwrap());
    }

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(Rgb::parse("White").unwrap(), Rgb::WHITE);
        assert!(matches!(
            Rgb::parse("tomato"),
            Err(ColorError::UnknownName(_))
        ));
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert!(matches!(Rgb::parse("#12"), Err(ColorError::BadHex(_))));
        assert!(matches!(Rgb::parse("#zzzzzz"), Err(ColorError::BadHex(_))));
    }

    #[test]
    fn hex_survives_linear_round_trip() {
        for s in ["#ff4060", "#ffcc00", "#20ffa0", "#4060ff", "#141622"] {
            assert_eq!(Rgb::parse(s).unwrap().to_srgb_hex(), s);
        }
    }
}
