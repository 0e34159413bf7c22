//! Theme transition as a plain value.
//!
//! A transition holds the appearance being left, the one being entered, and
//! how far along the panel is. Nothing here runs on a timer: the fraction is
//! whatever the owner last set, which for a panel is its blur density.

use crate::math;
use crate::theme::Appearance;

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    from: Appearance,
    to: Appearance,
    fraction: f64,
}

impl Transition {
    pub fn new(from: Appearance, to: Appearance, fraction: f64) -> Self {
        Self {
            from,
            to,
            fraction: math::clamp_range(fraction, 0.0, 1.0).0,
        }
    }

    pub fn from(&self) -> &Appearance {
        &self.from
    }

    pub fn to(&self) -> &Appearance {
        &self.to
    }

    /// Completion fraction (0.0–1.0).
    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    pub fn set_fraction(&mut self, fraction: f64) {
        self.fraction = math::clamp_range(fraction, 0.0, 1.0).0;
    }

    /// Appearance at the current fraction.
    pub fn current(&self) -> Appearance {
        self.sample(self.fraction)
    }

    /// Appearance at an arbitrary fraction, clamped to 0.0–1.0.
    pub fn sample(&self, fraction: f64) -> Appearance {
        let t = math::clamp_range(fraction, 0.0, 1.0).0;
        self.from.lerp(&self.to, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::GlassVariant;
    use crate::theme::{resolve, Theme};

    fn light_to_dark(fraction: f64) -> Transition {
        let variant = GlassVariant::default();
        Transition::new(
            resolve(Theme::Light, variant),
            resolve(Theme::Dark, variant),
            fraction,
        )
    }

    #[test]
    fn endpoints_match_resolved_appearances() {
        let t = light_to_dark(0.0);
        assert_eq!(t.current(), *t.from());
        assert_eq!(t.sample(1.0), *t.to());
    }

    #[test]
    fn midpoint_overlay_lies_strictly_between() {
        let t = light_to_dark(0.5);
        let from = t.from().overlay.channels();
        let to = t.to().overlay.channels();
        let mid = t.current().overlay.channels();
        for i in 0..4 {
            let (lo, hi) = (from[i].min(to[i]), from[i].max(to[i]));
            assert!(lo < mid[i] && mid[i] < hi, "channel {i}: {} not in ({lo}, {hi})", mid[i]);
        }
    }

    #[test]
    fn fraction_is_clamped() {
        let mut t = light_to_dark(3.0);
        assert_eq!(t.fraction(), 1.0);
        t.set_fraction(-0.5);
        assert_eq!(t.fraction(), 0.0);
        assert_eq!(t.sample(7.0), *t.to());
    }
}
