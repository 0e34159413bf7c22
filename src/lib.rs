//! # floem-glass
//!
//! A glassmorphism panel for [Floem](https://github.com/lapce/floem): a
//! translucent, blurred pane with a gradient border and a soft shadow.
//!
//! The visual model lives in [`GlassPanel`], which turns a small
//! [`StyleConfig`] (theme, density, corner radius, shadow distance) plus the
//! layout bounds into a back-to-front list of [`Layer`]s. [`glass_panel`]
//! wraps it in a Floem view.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_glass::{glass_container, StyleConfig, Theme};
//!
//! let style = RwSignal::new(StyleConfig::new(Theme::Dark, 0.65, 20.0, 20.0));
//! // Use `glass_container(style, label(|| "Hello"))` in your Floem view tree.
//! ```

mod border;
mod color;
#[cfg(feature = "config")]
mod config;
pub mod constants;
mod geometry;
mod math;
mod panel;
mod style;
mod theme;
mod transition;
mod view;

pub use border::BorderPath;
pub use color::Tint;
#[cfg(feature = "config")]
pub use config::{ConfigError, GlassConfig};
pub use geometry::{Bounds, LayerGeometry, ShadowParams};
pub use panel::{GlassPanel, Layer, Lifecycle};
pub use style::{GlassVariant, StyleConfig};
pub use theme::{
    border_gradient, material, overlay, resolve, Appearance, BlurMaterial, GradientSpec,
    GradientStop, Theme,
};
pub use transition::Transition;
pub use view::{glass_container, glass_panel, GlassView};
