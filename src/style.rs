//! Style state: the small set of inputs every derived layer is computed from.
//!
//! Setters never fail. Out-of-range values are clamped into their documented
//! range and a warning is logged.

use crate::constants;
use crate::math;
use crate::theme::Theme;

/// Named style variants of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "config", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "config", serde(rename_all = "kebab-case"))]
pub enum GlassVariant {
    /// 1pt gradient border with a soft shadow underneath.
    #[default]
    BorderedGradientWithShadow,
    /// Hairline border, slightly inset blur, no shadow.
    BlurOnlyThinBorder,
}

impl GlassVariant {
    pub fn stroke_width(self) -> f64 {
        match self {
            GlassVariant::BorderedGradientWithShadow => constants::BORDER_WIDTH,
            GlassVariant::BlurOnlyThinBorder => constants::THIN_BORDER_WIDTH,
        }
    }

    /// Inset of the blur frame from the panel bounds.
    pub fn blur_inset(self) -> f64 {
        match self {
            GlassVariant::BorderedGradientWithShadow => 0.0,
            GlassVariant::BlurOnlyThinBorder => constants::THIN_BLUR_INSET,
        }
    }

    pub fn has_shadow(self) -> bool {
        matches!(self, GlassVariant::BorderedGradientWithShadow)
    }
}

/// Current style inputs of one panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleConfig {
    theme: Theme,
    density: f64,
    corner_radius: f64,
    shadow_distance: f64,
    variant: GlassVariant,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            density: constants::DEFAULT_DENSITY,
            corner_radius: constants::DEFAULT_CORNER_RADIUS,
            shadow_distance: constants::DEFAULT_SHADOW_DISTANCE,
            variant: GlassVariant::default(),
        }
    }
}

impl StyleConfig {
    pub fn theme(&self) -> Theme {
        self.theme
    }
    /// Blur density (0.0–1.0).
    pub fn density(&self) -> f64 {
        self.density
    }
    /// Corner radius (≥ 0.0).
    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }
    /// Shadow distance (0.0–100.0).
    pub fn shadow_distance(&self) -> f64 {
        self.shadow_distance
    }
    pub fn variant(&self) -> GlassVariant {
        self.variant
    }
}

impl StyleConfig {
    /// Builder form of [`StyleConfig::apply`].
    pub fn new(theme: Theme, density: f64, corner_radius: f64, shadow_distance: f64) -> Self {
        let mut style = Self::default();
        style.apply(theme, density, corner_radius, shadow_distance);
        style
    }

    pub fn with_variant(mut self, variant: GlassVariant) -> Self {
        self.variant = variant;
        self
    }

    // Each setter returns whether the stored value changed.

    pub fn set_theme(&mut self, theme: Theme) -> bool {
        let changed = self.theme != theme;
        self.theme = theme;
        changed
    }

    pub fn set_density(&mut self, density: f64) -> bool {
        let density = clamp_input("density", density, 0.0, 1.0);
        replace(&mut self.density, density)
    }

    pub fn set_corner_radius(&mut self, radius: f64) -> bool {
        let radius = clamp_input("corner radius", radius, 0.0, f64::INFINITY);
        replace(&mut self.corner_radius, radius)
    }

    pub fn set_shadow_distance(&mut self, distance: f64) -> bool {
        let distance = clamp_input(
            "shadow distance",
            distance,
            0.0,
            constants::MAX_SHADOW_DISTANCE,
        );
        replace(&mut self.shadow_distance, distance)
    }

    pub fn set_variant(&mut self, variant: GlassVariant) -> bool {
        let changed = self.variant != variant;
        self.variant = variant;
        changed
    }

    /// Sets theme, density, corner radius and distance, in that order.
    pub fn apply(&mut self, theme: Theme, density: f64, corner_radius: f64, shadow_distance: f64) {
        self.set_theme(theme);
        self.set_density(density);
        self.set_corner_radius(corner_radius);
        self.set_shadow_distance(shadow_distance);
    }
}

fn clamp_input(name: &str, value: f64, min: f64, max: f64) -> f64 {
    let (stored, clamped) = math::clamp_range(value, min, max);
    if clamped {
        log::warn!("{name} {value} is outside [{min}, {max}], using {stored}");
    }
    stored
}

fn replace(slot: &mut f64, value: f64) -> bool {
    let changed = *slot != value;
    *slot = value;
    changed
}
