//! Frame-time clamping and critically damped easing.

use crate::constants::{COLOR_EPSILON, MAX_FRAME_DT};
use glam::Vec3;

/// Bound a frame delta to `[0, MAX_FRAME_DT]`. NaN counts as no time.
#[inline]
pub fn clamp_dt(dt: f32) -> f32 {
    if dt.is_nan() || dt <= 0.0 {
        0.0
    } else {
        dt.min(MAX_FRAME_DT)
    }
}

// Polynomial approximation of exp(-x), stable for large x.
#[inline]
fn exp_decay(x: f32) -> f32 {
    1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x)
}

/// One smooth-damp step of a scalar towards `target`.
///
/// `velocity` carries state between calls. The step never overshoots the
/// target and snaps onto it once within `COLOR_EPSILON`.
pub fn damp(current: f32, target: f32, velocity: &mut f32, smooth_time: f32, dt: f32) -> f32 {
    if (current - target).abs() <= COLOR_EPSILON {
        *velocity = 0.0;
        return target;
    }
    if dt <= 0.0 {
        return current;
    }
    let omega = 2.0 / smooth_time.max(1e-4);
    let t = exp_decay(omega * dt);
    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * t;
    let out = target + (change + temp) * t;
    if (target - current > 0.0) == (out > target) {
        *velocity = 0.0;
        return target;
    }
    out
}

/// A colour that eases towards a target, one channel at a time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DampedColor {
    pub value: Vec3,
    velocity: Vec3,
}

impl DampedColor {
    pub fn new(value: Vec3) -> Self {
        Self {
            value,
            velocity: Vec3::ZERO,
        }
    }

    pub fn step(&mut self, target: Vec3, smooth_time: f32, dt: f32) -> Vec3 {
        self.value = Vec3::new(
            damp(self.value.x, target.x, &mut self.velocity.x, smooth_time, dt),
            damp(self.value.y, target.y, &mut self.velocity.y, smooth_time, dt),
            damp(self.value.z, target.z, &mut self.velocity.z, smooth_time, dt),
        );
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_dt_caps_large_steps() {
        assert_eq!(clamp_dt(0.5), 0.1);
        assert_eq!(clamp_dt(0.1), 0.1);
        assert_eq!(clamp_dt(0.016), 0.016);
        assert_eq!(clamp_dt(-1.0), 0.0);
        assert_eq!(clamp_dt(f32::NAN), 0.0);
    }

    #[test]
    fn damp_never_overshoots() {
        let mut v = 0.0;
        let mut x = 0.0;
        for _ in 0..200 {
            x = damp(x, 1.0, &mut v, 0.2, 0.1);
            assert!(x <= 1.0);
        }
        assert_eq!(x, 1.0);
    }

    #[test]
    fn zero_dt_holds_value() {
        let mut v = 0.0;
        assert_eq!(damp(0.25, 1.0, &mut v, 0.2, 0.0), 0.25);
    }

    #[test]
    fn convergence_is_roughly_frame_rate_independent() {
        let run = |dt: f32, steps: usize| {
            let mut c = DampedColor::new(Vec3::ZERO);
            for _ in 0..steps {
                c.step(Vec3::ONE, 0.2, dt);
            }
            c.value.x
        };
        let a = run(1.0 / 30.0, 15);
        let b = run(1.0 / 120.0, 60);
        assert!((a - b).abs() < 0.05, "{a} vs {b}");
    }
}
