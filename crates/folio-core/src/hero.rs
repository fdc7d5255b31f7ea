//! Hero text layout and its idle floating motion.
//!
//! The text is authored as two left-aligned lines in world space and then the
//! whole block is re-centred on the origin. Each line bobs and tilts on its own
//! phase.

use glam::Vec3;
use rand::Rng;
use smallvec::SmallVec;

pub const HERO_LINES: [&str; 2] = ["HI THERE", "I'M KHALIL"];
pub const GLYPH_SIZE: f32 = 1.5;
pub const EXTRUSION: f32 = 0.3;
pub const BEVEL: f32 = 0.05;
const AUTHORED_ORIGINS: [Vec3; 2] = [Vec3::new(5.0, 7.0, 25.0), Vec3::new(5.0, 4.0, 25.0)];

// Rough glyph metrics of the display face, in ems.
const ADVANCE_EM: f32 = 0.72;
const SPACE_EM: f32 = 0.32;
const CAP_HEIGHT_EM: f32 = 0.72;

/// Estimated advance width of `text` at `size`.
pub fn line_width(text: &str, size: f32) -> f32 {
    text.chars()
        .map(|c| if c == ' ' { SPACE_EM } else { ADVANCE_EM })
        .sum::<f32>()
        * size
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatMotion {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
    /// Phase offset so that separate lines do not move in lockstep.
    pub offset: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatPose {
    /// Euler XYZ rotation in radians.
    pub rotation: Vec3,
    pub lift: f32,
}

impl FloatMotion {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            speed: 1.0,
            rotation_intensity: 0.5,
            float_intensity: 1.0,
            offset: rng.gen_range(0.0..10_000.0),
        }
    }

    pub fn sample(&self, elapsed: f32) -> FloatPose {
        let phase = ((self.offset + elapsed) / 4.0) * self.speed;
        let (s, c) = phase.sin_cos();
        FloatPose {
            rotation: Vec3::new(c / 8.0, s / 8.0, s / 20.0) * self.rotation_intensity,
            lift: (s / 10.0) * self.float_intensity,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeroLine {
    pub text: &'static str,
    /// Left end of the baseline after centring.
    pub origin: Vec3,
    pub width: f32,
    pub motion: FloatMotion,
}

impl HeroLine {
    /// Baseline origin and rotation at `elapsed` seconds.
    pub fn pose(&self, elapsed: f32) -> (Vec3, Vec3) {
        let p = self.motion.sample(elapsed);
        (self.origin + Vec3::Y * p.lift, p.rotation)
    }
}

#[derive(Clone, Debug)]
pub struct HeroText {
    pub lines: SmallVec<[HeroLine; 2]>,
    pub size: f32,
}

impl HeroText {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let widths: Vec<f32> = HERO_LINES
            .iter()
            .map(|t| line_width(t, GLYPH_SIZE))
            .collect();
        let (min, max) = bounds(&AUTHORED_ORIGINS, &widths);
        let shift = -(min + max) / 2.0;
        let lines = HERO_LINES
            .iter()
            .zip(AUTHORED_ORIGINS.iter())
            .zip(widths.iter())
            .map(|((text, origin), width)| HeroLine {
                text: *text,
                origin: *origin + shift,
                width: *width,
                motion: FloatMotion::new(rng),
            })
            .collect();
        Self {
            lines,
            size: GLYPH_SIZE,
        }
    }
}

fn bounds(origins: &[Vec3], widths: &[f32]) -> (Vec3, Vec3) {
    let depth = EXTRUSION + BEVEL;
    let height = GLYPH_SIZE * CAP_HEIGHT_EM + BEVEL;
    origins.iter().zip(widths).fold(
        (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)),
        |(lo, hi), (o, w)| {
            let lo_corner = *o - Vec3::splat(BEVEL);
            let hi_corner = *o + Vec3::new(*w + BEVEL, height, depth);
            (lo.min(lo_corner), hi.max(hi_corner))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn block_is_centred_on_origin() {
        let hero = HeroText::new(&mut StdRng::seed_from_u64(3));
        let origins: Vec<Vec3> = hero.lines.iter().map(|l| l.origin).collect();
        let widths: Vec<f32> = hero.lines.iter().map(|l| l.width).collect();
        let (lo, hi) = bounds(&origins, &widths);
        assert!(((lo + hi) / 2.0).length() < 1e-4);
    }

    #[test]
    fn lines_stay_left_aligned_and_three_apart() {
        let hero = HeroText::new(&mut StdRng::seed_from_u64(3));
        let (a, b) = (hero.lines[0].origin, hero.lines[1].origin);
        assert!((a.x - b.x).abs() < 1e-6);
        assert!((a.y - b.y - 3.0).abs() < 1e-5);
    }

    #[test]
    fn float_motion_is_bounded() {
        let m = FloatMotion::new(&mut StdRng::seed_from_u64(5));
        for i in 0..200 {
            let p = m.sample(i as f32 * 0.37);
            assert!(p.lift.abs() <= 0.1 + 1e-6);
            assert!(p.rotation.x.abs() <= 0.5 / 8.0 + 1e-6);
            assert!(p.rotation.z.abs() <= 0.5 / 20.0 + 1e-6);
        }
    }
}
