//! End-to-end behavior of `GlassPanel`: clamping, idempotence, border
//! regeneration and theme interpolation.

use approx::assert_relative_eq;
use floem::kurbo::{Rect, Shape};
use floem_glass::{
    border_gradient, overlay, Bounds, GlassPanel, GlassVariant, Layer, Lifecycle, StyleConfig,
    Theme,
};

fn laid_out(width: f64, height: f64) -> GlassPanel {
    let mut panel = GlassPanel::new();
    panel.set_bounds(Bounds::new(width, height));
    panel
}

#[test]
fn density_is_clamped_into_unit_range() {
    let mut panel = GlassPanel::new();
    for (input, stored) in [(-1.0, 0.0), (0.0, 0.0), (0.3, 0.3), (1.0, 1.0), (2.0, 1.0)] {
        panel.set_density(input);
        assert_eq!(panel.density(), stored, "density {input}");
        assert_eq!(panel.transition().unwrap().fraction(), stored);
    }
}

#[test]
fn distance_is_clamped_into_range() {
    let mut panel = GlassPanel::new();
    panel.set_shadow_distance(150.0);
    assert_eq!(panel.shadow_distance(), 100.0);
    panel.set_shadow_distance(-5.0);
    assert_eq!(panel.shadow_distance(), 0.0);
}

#[test]
fn set_theme_twice_matches_once() {
    let mut once = laid_out(200.0, 120.0);
    once.set_theme(Theme::Dark);

    let mut twice = laid_out(200.0, 120.0);
    twice.set_theme(Theme::Dark);
    twice.set_theme(Theme::Dark);

    assert_eq!(once.appearance(), twice.appearance());
    assert_eq!(once.overlay(), twice.overlay());
    assert_eq!(once.border_gradient(), twice.border_gradient());
    assert_eq!(once.layers(), twice.layers());
}

#[test]
fn apply_round_trips() {
    let mut panel = GlassPanel::new();
    panel.apply(Theme::Dark, 0.1, 3.0, 99.0);
    panel.apply(Theme::Light, 0.65, 20.0, 20.0);
    assert_eq!(panel.theme(), Theme::Light);
    assert_eq!(panel.density(), 0.65);
    assert_eq!(panel.corner_radius(), 20.0);
    assert_eq!(panel.shadow_distance(), 20.0);
}

#[test]
fn setters_are_idempotent() {
    let mut panel = laid_out(150.0, 90.0);
    panel.set_corner_radius(12.0);
    panel.set_shadow_distance(40.0);
    panel.set_density(0.5);
    let before = panel.layers();

    panel.set_corner_radius(12.0);
    panel.set_shadow_distance(40.0);
    panel.set_density(0.5);
    assert_eq!(panel.layers(), before);
}

#[test]
fn border_path_rebuilt_for_same_bounds_is_identical() {
    let mut panel = laid_out(240.0, 160.0);
    let first = panel.border_path().unwrap().clone();
    panel.set_bounds(Bounds::new(240.0, 160.0));
    let second = panel.border_path().unwrap();
    assert_eq!(first.path().elements(), second.path().elements());
    assert_eq!(first.outline(), second.outline());
}

#[test]
fn border_path_follows_new_bounds() {
    let mut panel = laid_out(240.0, 160.0);
    panel.set_bounds(Bounds::new(400.0, 100.0));

    let border = panel.border_path().unwrap();
    assert_eq!(border.band_bounds(), Rect::new(0.0, 0.0, 400.0, 100.0));

    let half = border.stroke_width() / 2.0;
    let bbox = border.path().bounding_box();
    assert_relative_eq!(bbox.x1, 400.0 - half, epsilon = 1e-9);
    assert_relative_eq!(bbox.y1, 100.0 - half, epsilon = 1e-9);
}

#[test]
fn corner_radius_change_regenerates_border() {
    let mut panel = laid_out(200.0, 200.0);
    panel.set_corner_radius(40.0);
    assert_relative_eq!(panel.border_path().unwrap().outline().radii().top_left, 40.0);
    assert_relative_eq!(panel.geometry().unwrap().background.radii().top_left, 40.0);

    // Larger than half the panel: fitted, never self-intersecting.
    panel.set_corner_radius(1_000.0);
    assert_eq!(panel.corner_radius(), 1_000.0);
    assert_relative_eq!(panel.geometry().unwrap().background.radii().top_left, 100.0);
    assert!(panel.border_path().unwrap().outline().radii().top_left <= 100.0);
}

#[test]
fn border_gradient_is_symmetric_for_both_themes() {
    for variant in [
        GlassVariant::BorderedGradientWithShadow,
        GlassVariant::BlurOnlyThinBorder,
    ] {
        for theme in [Theme::Light, Theme::Dark] {
            let stops = border_gradient(theme, variant).stops().to_owned();
            assert_eq!(stops[0].color, stops[2].color);
            assert!(stops[1].color.a() < stops[0].color.a());
        }
    }
}

#[test]
fn theme_interpolation_boundaries() {
    let mut panel = laid_out(200.0, 120.0);

    panel.set_density(0.0);
    panel.set_theme(Theme::Dark);
    assert_eq!(panel.overlay(), overlay(Theme::Light));

    panel.set_density(1.0);
    assert_eq!(panel.overlay(), overlay(Theme::Dark));

    panel.set_density(0.5);
    let from = overlay(Theme::Light).channels();
    let to = overlay(Theme::Dark).channels();
    for (i, value) in panel.overlay().channels().into_iter().enumerate() {
        let (lo, hi) = (from[i].min(to[i]), from[i].max(to[i]));
        assert!(lo < value && value < hi, "channel {i}");
    }
}

#[test]
fn blur_layer_carries_current_appearance() {
    let mut panel = laid_out(200.0, 120.0);
    panel.set_theme(Theme::Dark);
    let layers = panel.layers();
    let Layer::Blur {
        overlay: tint,
        material,
        shape,
    } = &layers[1]
    else {
        panic!("expected the blur layer second, got {:?}", layers[1]);
    };
    assert_eq!(*tint, panel.overlay());
    assert_eq!(*material, panel.appearance().material);
    assert_eq!(shape.rect(), Rect::new(0.0, 0.0, 200.0, 120.0));
}

#[test]
fn style_variant_is_applied_as_configuration() {
    let style = StyleConfig::new(Theme::Light, 0.65, 20.0, 20.0)
        .with_variant(GlassVariant::BlurOnlyThinBorder);
    let mut panel = GlassPanel::new();
    panel.apply_style(&style);
    panel.set_bounds(Bounds::new(100.0, 100.0));

    assert_eq!(panel.style(), &style);
    assert!(panel.geometry().unwrap().shadow.is_none());
    assert_eq!(
        panel.border_path().unwrap().stroke_width(),
        GlassVariant::BlurOnlyThinBorder.stroke_width()
    );
    assert_eq!(
        *panel.border_gradient(),
        border_gradient(Theme::Light, GlassVariant::BlurOnlyThinBorder)
    );
}

#[test]
fn variant_change_after_theme_change_resolves_new_table() {
    let mut panel = laid_out(100.0, 100.0);
    panel.set_theme(Theme::Dark);
    panel.set_variant(GlassVariant::BlurOnlyThinBorder);

    assert_eq!(
        *panel.border_gradient(),
        border_gradient(Theme::Dark, GlassVariant::BlurOnlyThinBorder)
    );
    let transition = panel.transition().unwrap();
    assert_eq!(
        transition.from().border,
        border_gradient(Theme::Light, GlassVariant::BlurOnlyThinBorder)
    );
    assert_eq!(
        transition.to().border,
        border_gradient(Theme::Dark, GlassVariant::BlurOnlyThinBorder)
    );
}

#[test]
fn border_gradient_depends_only_on_current_theme() {
    let fresh = laid_out(200.0, 120.0);
    let mut toggled = laid_out(200.0, 120.0);
    toggled.set_theme(Theme::Dark);
    toggled.set_theme(Theme::Light);

    assert_eq!(fresh.style(), toggled.style());
    assert_eq!(fresh.border_gradient(), toggled.border_gradient());
    assert_eq!(
        *toggled.border_gradient(),
        border_gradient(Theme::Light, GlassVariant::default())
    );

    let mut dark = laid_out(200.0, 120.0);
    dark.set_theme(Theme::Dark);
    toggled.set_theme(Theme::Dark);
    assert_eq!(dark.border_gradient(), toggled.border_gradient());
}

#[test]
fn painted_border_follows_the_transition() {
    let mut panel = laid_out(200.0, 120.0);
    panel.set_theme(Theme::Dark);
    let layers = panel.layers();
    let Some(Layer::Border { gradient, .. }) = layers.last() else {
        panic!("border must be painted last");
    };
    assert_eq!(*gradient, panel.appearance().border);
    assert_ne!(*gradient, *panel.border_gradient());
}

#[test]
fn lifecycle_runs_to_disposed() {
    let mut panel = GlassPanel::new();
    assert_eq!(panel.lifecycle(), Lifecycle::Uninitialized);
    panel.set_theme(Theme::Dark);
    assert_eq!(panel.lifecycle(), Lifecycle::Uninitialized);
    panel.set_bounds(Bounds::new(10.0, 10.0));
    assert_eq!(panel.lifecycle(), Lifecycle::Initialized);
    panel.set_bounds(Bounds::new(20.0, 10.0));
    assert_eq!(panel.lifecycle(), Lifecycle::Initialized);
    panel.dispose();
    assert_eq!(panel.lifecycle(), Lifecycle::Disposed);
    panel.dispose();
    assert_eq!(panel.lifecycle(), Lifecycle::Disposed);
    assert!(panel.layers().is_empty());
}
