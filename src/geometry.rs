//! Layer frames and shadow parameters derived from the panel bounds.

use floem::kurbo::{Rect, RoundedRect, Vec2};

use crate::color::Tint;
use crate::constants;
use crate::style::StyleConfig;

/// Size of the panel as reported by the hosting layout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    width: f64,
    height: f64,
}

impl Bounds {
    /// Negative or NaN dimensions collapse to zero.
    pub fn new(width: f64, height: f64) -> Self {
        let sanitize = |v: f64| if v.is_nan() { 0.0 } else { v.max(0.0) };
        let bounds = Self {
            width: sanitize(width),
            height: sanitize(height),
        };
        if bounds.width != width || bounds.height != height {
            log::warn!("invalid bounds {width}x{height}, using {}x{}", bounds.width, bounds.height);
        }
        bounds
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    /// Bounds in panel-local space, origin at the top-left corner.
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// Largest corner radius that `rect` can hold without the corners overlapping.
pub(crate) fn fit_radius(rect: Rect, radius: f64) -> f64 {
    let half = rect.width().min(rect.height()).max(0.0) / 2.0;
    radius.clamp(0.0, half)
}

/// Rounded rect whose radius is first fitted to the rect.
pub(crate) fn rounded(rect: Rect, radius: f64) -> RoundedRect {
    RoundedRect::from_rect(rect, fit_radius(rect, radius))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowParams {
    /// Shadow tone, alpha already set to the shadow opacity.
    pub color: Tint,
    pub offset: Vec2,
    /// Blur radius; equal to the shadow distance.
    pub radius: f64,
}

impl ShadowParams {
    pub fn for_distance(distance: f64) -> Self {
        Self {
            color: Tint::BLACK.with_alpha(constants::SHADOW_OPACITY),
            offset: Vec2::ZERO,
            radius: distance,
        }
    }
}

/// Frames of the background and blur layers plus the shadow under them.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerGeometry {
    pub background: RoundedRect,
    pub blur: RoundedRect,
    pub shadow: Option<ShadowParams>,
}

impl LayerGeometry {
    pub fn compute(bounds: Bounds, style: &StyleConfig) -> Self {
        let variant = style.variant();
        let full = bounds.rect();
        let inset = variant.blur_inset().min(full.width().min(full.height()) / 2.0);
        let blur_rect = full.inset(-inset);
        let radius = style.corner_radius();

        log::trace!("layer geometry for {}x{} (radius {radius})", bounds.width(), bounds.height());

        Self {
            background: rounded(full, radius),
            // Concentric with the background corners.
            blur: rounded(blur_rect, (radius - inset).max(0.0)),
            shadow: variant
                .has_shadow()
                .then(|| ShadowParams::for_distance(style.shadow_distance())),
        }
    }
}
