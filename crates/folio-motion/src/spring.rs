//! Damped harmonic oscillator used to smooth every animated scalar.
//!
//! Each substep solves the velocity implicitly (backward Euler) and then moves
//! the position with the new velocity. That is unconditionally stable, so no
//! config diverges however stiff or damped it is; substeps only buy accuracy.
//! Critically damped and overdamped springs never overshoot their target.

use crate::constants::{
    SPRING_DAMPING, SPRING_MASS, SPRING_MAX_SUBSTEP_SEC, SPRING_MAX_TICK_SEC, SPRING_REST_DELTA,
    SPRING_STIFFNESS,
};
use crate::error::{non_negative, positive, ConfigError};

// bounds the work per tick; stability does not depend on it
const MAX_SUBSTEPS: u32 = 256;
// tolerance so `critical()` configs are not misread as underdamped
const CRITICAL_EPSILON: f32 = 1e-4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    pub rest_delta: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
            mass: SPRING_MASS,
            rest_delta: SPRING_REST_DELTA,
        }
    }
}

impl SpringConfig {
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Result<Self, ConfigError> {
        Ok(Self {
            stiffness: positive("stiffness", stiffness)?,
            damping: non_negative("damping", damping)?,
            mass: positive("mass", mass)?,
            rest_delta: SPRING_REST_DELTA,
        })
    }

    /// Damping exactly at the no-overshoot boundary.
    pub fn critical(stiffness: f32, mass: f32) -> Result<Self, ConfigError> {
        let stiffness = positive("stiffness", stiffness)?;
        let mass = positive("mass", mass)?;
        Self::new(stiffness, 2.0 * (stiffness * mass).sqrt(), mass)
    }

    pub fn with_rest_delta(mut self, rest_delta: f32) -> Self {
        if rest_delta.is_finite() && rest_delta >= 0.0 {
            self.rest_delta = rest_delta;
        }
        self
    }

    /// ζ = c / (2·√(k·m)); 1 is critical.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    pub fn is_overshoot_free(&self) -> bool {
        self.damping_ratio() >= 1.0 - CRITICAL_EPSILON
    }

    // Step small enough to resolve both the oscillation and the damper time
    // constant.
    fn max_substep(&self) -> f32 {
        let omega = (self.stiffness / self.mass).sqrt();
        let mut h = SPRING_MAX_SUBSTEP_SEC.min(0.5 / omega);
        if self.damping > 0.0 {
            h = h.min(0.5 * self.mass / self.damping);
        }
        h
    }
}

#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    current: f32,
    target: f32,
    velocity: f32,
}

impl Spring {
    /// Starts at rest on `initial`.
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            current: initial,
            target: initial,
            velocity: 0.0,
        }
    }

    #[inline]
    pub fn get(&self) -> f32 {
        self.current
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    /// Velocity is kept, so retargeting mid-flight never jumps.
    pub fn set_target(&mut self, target: f32) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Teleports to `value` and stops.
    pub fn jump(&mut self, value: f32) {
        if value.is_finite() {
            self.current = value;
            self.target = value;
            self.velocity = 0.0;
        }
    }

    pub fn is_at_rest(&self) -> bool {
        self.velocity == 0.0 && self.current == self.target
    }

    pub fn tick(&mut self, dt_sec: f32) {
        if dt_sec <= 0.0 || !dt_sec.is_finite() || self.is_at_rest() {
            return;
        }
        let dt = dt_sec.min(SPRING_MAX_TICK_SEC);
        let steps = ((dt / self.config.max_substep()).ceil() as u32).clamp(1, MAX_SUBSTEPS);
        let h = dt / steps as f32;
        let pin_at_target = self.config.is_overshoot_free();
        let SpringConfig {
            stiffness,
            damping,
            mass,
            rest_delta,
        } = self.config;

        // v' = (v - h·k/m·(x - t)) / (1 + h·c/m + h²·k/m)
        let k_h = stiffness / mass * h;
        let denom = 1.0 + damping / mass * h + k_h * h;
        for _ in 0..steps {
            let before = self.current - self.target;
            self.velocity = (self.velocity - k_h * before) / denom;
            let next = self.current + self.velocity * h;
            let after = next - self.target;
            // crossing, or leaving the target after landing on it exactly
            if pin_at_target && (before * after < 0.0 || (before == 0.0 && after != 0.0)) {
                self.current = self.target;
                self.velocity = 0.0;
                break;
            }
            self.current = next;
        }

        if !self.current.is_finite() || !self.velocity.is_finite() {
            log::warn!("[spring] non-finite state; snapping to target");
            self.current = self.target;
            self.velocity = 0.0;
            return;
        }

        if (self.current - self.target).abs() < rest_delta && self.velocity.abs() < rest_delta {
            self.current = self.target;
            self.velocity = 0.0;
        }
    }

    /// Current value pushed through [`map_range`].
    pub fn mapped(&self, domain: (f32, f32), range: (f32, f32), clamp: bool) -> f32 {
        map_range(self.current, domain, range, clamp)
    }
}

/// Linear remap of `value` from `domain` onto `range`, optionally clamped to
/// the range ends. A zero-width domain is a step at `domain.0`.
pub fn map_range(value: f32, domain: (f32, f32), range: (f32, f32), clamp: bool) -> f32 {
    let (d0, d1) = domain;
    let (r0, r1) = range;
    let span = d1 - d0;
    if span == 0.0 || !span.is_finite() {
        return if value < d0 { r0 } else { r1 };
    }
    let mut t = (value - d0) / span;
    if clamp {
        t = t.clamp(0.0, 1.0);
    }
    r0 + (r1 - r0) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn critical_config_has_unit_ratio() {
        let cfg = SpringConfig::critical(100.0, 1.0).unwrap();
        assert!((cfg.damping - 20.0).abs() < 1e-5);
        assert!(cfg.is_overshoot_free());
    }

    #[test]
    fn invalid_config_is_rejected() {
        assert!(matches!(
            SpringConfig::new(0.0, 1.0, 1.0),
            Err(ConfigError::NotPositive { field: "stiffness", .. })
        ));
        assert!(matches!(
            SpringConfig::new(1.0, -1.0, 1.0),
            Err(ConfigError::Negative { field: "damping", .. })
        ));
        assert!(matches!(
            SpringConfig::new(1.0, 1.0, f32::NAN),
            Err(ConfigError::NotFinite { field: "mass", .. })
        ));
    }

    #[test]
    fn map_range_clamps_and_extrapolates() {
        assert_eq!(map_range(0.5, (0.0, 1.0), (90.0, 70.0), true), 80.0);
        assert_eq!(map_range(2.0, (0.0, 1.0), (90.0, 70.0), true), 70.0);
        assert_eq!(map_range(2.0, (0.0, 1.0), (90.0, 70.0), false), 50.0);
        assert_eq!(map_range(-1.0, (0.0, 1.0), (90.0, 70.0), true), 90.0);
        assert_eq!(map_range(0.0, (3.0, 3.0), (1.0, 2.0), true), 1.0);
        assert_eq!(map_range(3.0, (3.0, 3.0), (1.0, 2.0), true), 2.0);
    }

    #[test]
    fn bad_dt_is_ignored() {
        let mut s = Spring::new(SpringConfig::default(), 0.0);
        s.set_target(10.0);
        s.tick(0.0);
        s.tick(-1.0);
        s.tick(f32::NAN);
        assert_eq!(s.get(), 0.0);
        assert_eq!(s.velocity(), 0.0);
    }
}
