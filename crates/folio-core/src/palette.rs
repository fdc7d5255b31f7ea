//! Appearance presets and batch generation.

use crate::color::Rgb;
use rand::Rng;

/// Highlight colours cycled by the accent timer.
pub const ACCENTS: [&str; 4] = ["#ff4060", "#ffcc00", "#20ffa0", "#4060ff"];

/// Surface parameters of a sphere's material. Fixed once the body exists.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub roughness: f32,
    pub metalness: f32,
    pub opacity: f32,
}

impl Material {
    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }
}

/// One row of the palette table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualVariant {
    pub color: Rgb,
    pub material: Material,
    pub accent: bool,
}

/// Everything needed to spawn one sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodySpec {
    pub color: Rgb,
    pub material: Material,
    pub accent: bool,
}

impl From<VisualVariant> for BodySpec {
    fn from(v: VisualVariant) -> Self {
        Self {
            color: v.color,
            material: v.material,
            accent: v.accent,
        }
    }
}

// (colour, roughness, metalness, accent, opacity); `None` colour means "the accent"
type Row = (Option<&'static str>, f32, f32, bool, f32);

const NEUTRAL: Option<&str> = Some("#444");
const WHITE: Option<&str> = Some("white");

const TABLE: [Row; 18] = [
    (NEUTRAL, 0.1, 0.5, false, 1.0),
    (NEUTRAL, 0.1, 0.5, false, 1.0),
    (NEUTRAL, 0.1, 0.5, false, 1.0),
    (WHITE, 0.1, 0.1, false, 1.0),
    (WHITE, 0.1, 0.1, false, 1.0),
    (WHITE, 0.1, 0.1, false, 1.0),
    (None, 0.1, 0.0, true, 1.0),
    (None, 0.1, 0.0, true, 1.0),
    (None, 0.1, 0.0, true, 1.0),
    (NEUTRAL, 0.1, 0.0, false, 1.0),
    (NEUTRAL, 0.3, 0.0, false, 1.0),
    (NEUTRAL, 0.3, 0.0, false, 1.0),
    (WHITE, 0.1, 0.0, false, 1.0),
    (WHITE, 0.2, 0.0, false, 1.0),
    (WHITE, 0.1, 0.0, false, 1.0),
    (None, 0.1, 0.0, true, 0.5),
    (None, 0.3, 0.0, true, 1.0),
    (None, 0.1, 0.0, true, 1.0),
];

/// Number of entries in the palette table.
pub const VARIANT_COUNT: usize = TABLE.len();

/// Decode an accent by index. Indices are validated by `AccentState`.
pub fn accent_color(index: usize) -> Rgb {
    Rgb::parse(ACCENTS[index % ACCENTS.len()]).unwrap_or(Rgb::WHITE)
}

/// The palette with `accent` substituted into every accent-flagged row.
pub fn base_variants(accent: Rgb) -> Vec<VisualVariant> {
    TABLE
        .iter()
        .map(|&(color, roughness, metalness, is_accent, opacity)| VisualVariant {
            color: match color {
                Some(c) => Rgb::parse(c).unwrap_or(Rgb::WHITE),
                None => accent,
            },
            material: Material {
                roughness,
                metalness,
                opacity,
            },
            accent: is_accent,
        })
        .collect()
}

/// Sample `count` specs independently and uniformly from the palette keyed by
/// `accent_index`.
pub fn regenerate<R: Rng + ?Sized>(accent_index: usize, count: usize, rng: &mut R) -> Vec<BodySpec> {
    let variants = base_variants(accent_color(accent_index));
    (0..count)
        .map(|_| BodySpec::from(variants[rng.gen_range(0..variants.len())]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn table_has_six_accent_rows() {
        let v = base_variants(accent_color(0));
        assert_eq!(v.len(), 18);
        assert_eq!(v.iter().filter(|v| v.accent).count(), 6);
    }

    #[test]
    fn only_one_row_is_transparent() {
        let v = base_variants(accent_color(2));
        let transparent: Vec<_> = v.iter().filter(|v| v.material.is_transparent()).collect();
        assert_eq!(transparent.len(), 1);
        assert!(transparent[0].accent);
        assert_eq!(transparent[0].material.opacity, 0.5);
    }

    #[test]
    fn regenerate_respects_count() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(regenerate(0, 50, &mut rng).len(), 50);
        assert!(regenerate(3, 0, &mut rng).is_empty());
    }
}
