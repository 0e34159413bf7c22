//! `GlassPanel`: owns the style state and every value derived from it.
//!
//! All recomputation happens synchronously inside the setter that changed an
//! input. The panel never paints; [`GlassPanel::layers`] describes what to
//! paint, back to front.

use floem::kurbo::{BezPath, Rect, RoundedRect, Vec2};

use crate::border::BorderPath;
use crate::color::Tint;
use crate::geometry::{Bounds, LayerGeometry};
use crate::style::{GlassVariant, StyleConfig};
use crate::theme::{self, Appearance, BlurMaterial, GradientSpec, Theme};
use crate::transition::Transition;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Constructed, no bounds received yet.
    Uninitialized,
    /// Laid out at least once.
    Initialized,
    /// Torn down; inputs are ignored.
    Disposed,
}

/// One paint step. [`GlassPanel::layers`] yields these in paint order.
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    Shadow {
        shape: RoundedRect,
        color: Tint,
        offset: Vec2,
        blur_radius: f64,
    },
    Blur {
        shape: RoundedRect,
        material: BlurMaterial,
        overlay: Tint,
    },
    Border {
        path: BezPath,
        stroke_width: f64,
        gradient: GradientSpec,
        /// Rect the gradient axis is mapped onto.
        band: Rect,
    },
}

#[derive(Debug, Clone)]
pub struct GlassPanel {
    style: StyleConfig,
    lifecycle: Lifecycle,
    bounds: Option<Bounds>,
    /// Theme the running transition started from; `None` while still
    /// leaving the unblurred state.
    previous_theme: Option<Theme>,
    transition: Option<Transition>,
    appearance: Appearance,
    /// Resolved gradient of the current theme; replaced, never blended.
    gradient: GradientSpec,
    geometry: Option<LayerGeometry>,
    border: Option<BorderPath>,
}

impl Default for GlassPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl GlassPanel {
    /// Panel with the default style: light theme at density 0.65.
    pub fn new() -> Self {
        Self::with_style(StyleConfig::default())
    }

    pub fn with_style(style: StyleConfig) -> Self {
        let transition = Transition::new(
            Appearance::unblurred(style.variant()),
            theme::resolve(style.theme(), style.variant()),
            style.density(),
        );
        Self {
            style,
            lifecycle: Lifecycle::Uninitialized,
            bounds: None,
            previous_theme: None,
            appearance: transition.current(),
            gradient: theme::border_gradient(style.theme(), style.variant()),
            transition: Some(transition),
            geometry: None,
            border: None,
        }
    }
}

// Readers
impl GlassPanel {
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
    pub fn theme(&self) -> Theme {
        self.style.theme()
    }
    pub fn density(&self) -> f64 {
        self.style.density()
    }
    pub fn corner_radius(&self) -> f64 {
        self.style.corner_radius()
    }
    pub fn shadow_distance(&self) -> f64 {
        self.style.shadow_distance()
    }
    pub fn variant(&self) -> GlassVariant {
        self.style.variant()
    }
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }
    /// Appearance at the current density. Frozen once the panel is disposed.
    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }
    pub fn overlay(&self) -> Tint {
        self.appearance.overlay
    }
    /// Border gradient of the current theme and variant. The painted border
    /// is the interpolated one in [`GlassPanel::appearance`].
    pub fn border_gradient(&self) -> &GradientSpec {
        &self.gradient
    }
    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }
    pub fn geometry(&self) -> Option<&LayerGeometry> {
        self.geometry.as_ref()
    }
    pub fn border_path(&self) -> Option<&BorderPath> {
        self.border.as_ref()
    }
}

// Setters
impl GlassPanel {
    /// Starts a transition from the current theme to `theme`, positioned at
    /// the stored density. Setting the current theme again changes nothing.
    pub fn set_theme(&mut self, theme: Theme) {
        if !self.accepts_input("set_theme") {
            return;
        }
        let old = self.style.theme();
        if !self.style.set_theme(theme) {
            return;
        }
        log::debug!("theme transition {old:?} -> {theme:?} at {}", self.style.density());
        self.previous_theme = Some(old);
        self.restart_transition();
    }

    /// Positions the theme transition; does not start a new one.
    pub fn set_density(&mut self, density: f64) {
        if !self.accepts_input("set_density") {
            return;
        }
        if self.style.set_density(density) {
            if let Some(transition) = &mut self.transition {
                transition.set_fraction(self.style.density());
            }
            self.refresh_appearance();
        }
    }

    pub fn set_corner_radius(&mut self, radius: f64) {
        if !self.accepts_input("set_corner_radius") {
            return;
        }
        if self.style.set_corner_radius(radius) {
            self.relayout();
        }
    }

    pub fn set_shadow_distance(&mut self, distance: f64) {
        if !self.accepts_input("set_shadow_distance") {
            return;
        }
        if self.style.set_shadow_distance(distance) {
            self.relayout();
        }
    }

    /// Re-resolves both transition endpoints and rebuilds the layers.
    pub fn set_variant(&mut self, variant: GlassVariant) {
        if !self.accepts_input("set_variant") {
            return;
        }
        if self.style.set_variant(variant) {
            self.restart_transition();
            self.relayout();
        }
    }

    /// Sets theme, density, corner radius and distance, in that order.
    pub fn apply(&mut self, theme: Theme, density: f64, corner_radius: f64, distance: f64) {
        self.set_theme(theme);
        self.set_density(density);
        self.set_corner_radius(corner_radius);
        self.set_shadow_distance(distance);
    }

    /// Applies a whole style: variant first, then [`GlassPanel::apply`].
    pub fn apply_style(&mut self, style: &StyleConfig) {
        self.set_variant(style.variant());
        self.apply(
            style.theme(),
            style.density(),
            style.corner_radius(),
            style.shadow_distance(),
        );
    }

    /// Layout notification. The first call initializes the panel; every call
    /// replaces the geometry and border path.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        match self.lifecycle {
            Lifecycle::Disposed => {
                log::warn!("set_bounds on a disposed glass panel ignored");
                return;
            }
            Lifecycle::Uninitialized => {
                log::debug!(
                    "glass panel initialized at {}x{}",
                    bounds.width(),
                    bounds.height()
                );
                self.lifecycle = Lifecycle::Initialized;
            }
            Lifecycle::Initialized => {}
        }
        self.bounds = Some(bounds);
        self.relayout();
    }

    /// Halts the transition, keeping the last computed appearance, and drops
    /// all derived layers.
    pub fn dispose(&mut self) {
        if self.lifecycle == Lifecycle::Disposed {
            return;
        }
        log::debug!("glass panel disposed");
        self.lifecycle = Lifecycle::Disposed;
        self.transition = None;
        self.geometry = None;
        self.border = None;
    }

    /// Paint list, back to front: shadow, blur, border.
    ///
    /// Empty until the panel has bounds, and again after disposal.
    pub fn layers(&self) -> Vec<Layer> {
        let (Some(geometry), Some(border)) = (&self.geometry, &self.border) else {
            return Vec::new();
        };
        let mut layers = Vec::with_capacity(3);
        if let Some(shadow) = geometry.shadow {
            layers.push(Layer::Shadow {
                shape: geometry.background,
                color: shadow.color,
                offset: shadow.offset,
                blur_radius: shadow.radius,
            });
        }
        layers.push(Layer::Blur {
            shape: geometry.blur,
            material: self.appearance.material,
            overlay: self.appearance.overlay,
        });
        layers.push(Layer::Border {
            path: border.path().clone(),
            stroke_width: border.stroke_width(),
            gradient: self.appearance.border.clone(),
            band: border.band_bounds(),
        });
        layers
    }
}

impl GlassPanel {
    fn accepts_input(&self, op: &str) -> bool {
        if self.lifecycle == Lifecycle::Disposed {
            log::warn!("{op} on a disposed glass panel ignored");
            return false;
        }
        true
    }

    fn restart_transition(&mut self) {
        let variant = self.style.variant();
        let from = match self.previous_theme {
            Some(theme) => theme::resolve(theme, variant),
            None => Appearance::unblurred(variant),
        };
        let to = theme::resolve(self.style.theme(), variant);
        self.gradient = to.border.clone();
        self.transition = Some(Transition::new(from, to, self.style.density()));
        self.refresh_appearance();
    }

    fn refresh_appearance(&mut self) {
        if let Some(transition) = &self.transition {
            self.appearance = transition.current();
        }
    }

    fn relayout(&mut self) {
        let Some(bounds) = self.bounds else {
            return;
        };
        self.geometry = Some(LayerGeometry::compute(bounds, &self.style));
        self.border = Some(BorderPath::build(
            bounds,
            self.style.corner_radius(),
            self.style.variant().stroke_width(),
        ));
    }
}
