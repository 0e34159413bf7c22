//! Theme color tables.
//!
//! Maps a [`Theme`] (and the active [`GlassVariant`]) to everything the panel
//! paints in color: the blur material, the overlay laid on top of it, and the
//! three-stop border gradient.

use floem::kurbo::{Point, Rect};
use floem::peniko::{ColorStop, Gradient};

use crate::color::Tint;
use crate::constants;
use crate::math;
use crate::style::GlassVariant;

/// Base color scheme of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "config", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Frosted material drawn behind the overlay.
///
/// `strength` is the approximate backdrop blur radius; renderers without a
/// backdrop filter only paint the tint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlurMaterial {
    pub tint: Tint,
    pub strength: f64,
}

impl BlurMaterial {
    /// No blur at all.
    pub const NONE: BlurMaterial = BlurMaterial {
        tint: Tint::WHITE.with_alpha(0.0),
        strength: 0.0,
    };

    pub fn lerp(&self, other: &BlurMaterial, t: f64) -> BlurMaterial {
        BlurMaterial {
            tint: self.tint.lerp(&other.tint, t),
            strength: math::lerp(self.strength, other.strength, t),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient axis (0.0–1.0).
    pub offset: f64,
    pub color: Tint,
}

/// Border gradient: ordered stops plus an axis in unit-square coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientSpec {
    stops: [GradientStop; 3],
    start: Point,
    end: Point,
}

impl GradientSpec {
    /// White gradient with the given stop alphas, evenly spaced on the
    /// top-left to bottom-right diagonal.
    pub fn diagonal_white(alphas: [f64; 3]) -> Self {
        let [a0, a1, a2] = alphas;
        Self {
            stops: [
                GradientStop {
                    offset: 0.0,
                    color: Tint::WHITE.with_alpha(a0),
                },
                GradientStop {
                    offset: 0.5,
                    color: Tint::WHITE.with_alpha(a1),
                },
                GradientStop {
                    offset: 1.0,
                    color: Tint::WHITE.with_alpha(a2),
                },
            ],
            start: Point::new(0.0, 0.0),
            end: Point::new(1.0, 1.0),
        }
    }

    pub fn stops(&self) -> &[GradientStop; 3] {
        &self.stops
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// Interpolates stop colors; offsets and axis stay those of `self`.
    pub fn lerp(&self, other: &GradientSpec, t: f64) -> GradientSpec {
        let mut stops = self.stops;
        for (stop, target) in stops.iter_mut().zip(other.stops.iter()) {
            stop.color = stop.color.lerp(&target.color, t);
        }
        GradientSpec {
            stops,
            start: self.start,
            end: self.end,
        }
    }

    /// Linear gradient brush with the unit-square axis mapped onto `rect`.
    pub fn to_peniko(&self, rect: Rect) -> Gradient {
        let map = |p: Point| {
            (
                rect.x0 + p.x * rect.width(),
                rect.y0 + p.y * rect.height(),
            )
        };
        let stops = self.stops.map(|s| ColorStop {
            offset: s.offset as f32,
            color: s.color.to_peniko(),
        });
        Gradient::new_linear(map(self.start), map(self.end)).with_stops(stops)
    }
}

/// Every theme-dependent color value of the panel at one moment.
#[derive(Debug, Clone, PartialEq)]
pub struct Appearance {
    pub overlay: Tint,
    pub material: BlurMaterial,
    pub border: GradientSpec,
}

impl Appearance {
    /// Appearance before any blur has been applied: clear overlay, no
    /// material, and the light border.
    pub fn unblurred(variant: GlassVariant) -> Self {
        Self {
            overlay: overlay(Theme::Light),
            material: BlurMaterial::NONE,
            border: border_gradient(Theme::Light, variant),
        }
    }

    pub fn lerp(&self, other: &Appearance, t: f64) -> Appearance {
        Appearance {
            overlay: self.overlay.lerp(&other.overlay, t),
            material: self.material.lerp(&other.material, t),
            border: self.border.lerp(&other.border, t),
        }
    }
}

/// Fully resolved appearance for `theme`.
pub fn resolve(theme: Theme, variant: GlassVariant) -> Appearance {
    Appearance {
        overlay: overlay(theme),
        material: material(theme),
        border: border_gradient(theme, variant),
    }
}

/// Tint laid over the blur. Light is fully transparent.
pub fn overlay(theme: Theme) -> Tint {
    match theme {
        Theme::Light => Tint::WHITE.with_alpha(0.0),
        Theme::Dark => Tint::BLACK.with_alpha(constants::DARK_OVERLAY_ALPHA),
    }
}

pub fn material(theme: Theme) -> BlurMaterial {
    match theme {
        Theme::Light => BlurMaterial {
            tint: Tint::WHITE.with_alpha(0.3),
            strength: constants::BLUR_STRENGTH,
        },
        Theme::Dark => BlurMaterial {
            tint: Tint::from_rgb8(28, 28, 30).with_alpha(0.7),
            strength: constants::BLUR_STRENGTH,
        },
    }
}

/// Symmetric border gradient: bright ends, dim center.
pub fn border_gradient(theme: Theme, variant: GlassVariant) -> GradientSpec {
    let alphas = match (variant, theme) {
        (GlassVariant::BorderedGradientWithShadow, Theme::Light) => [0.5, 0.0, 0.5],
        (GlassVariant::BorderedGradientWithShadow, Theme::Dark) => [0.3, 0.0, 0.3],
        (GlassVariant::BlurOnlyThinBorder, Theme::Light) => [0.4, 0.1, 0.4],
        (GlassVariant::BlurOnlyThinBorder, Theme::Dark) => [0.2, 0.05, 0.2],
    };
    GradientSpec::diagonal_white(alphas)
}
