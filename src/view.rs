//! Floem view painting a [`GlassPanel`].
//!
//! Layout size is forwarded to the panel as its bounds; the style signal is
//! forwarded through `update_state`. Painting walks [`GlassPanel::layers`].
//! Renderers without a backdrop filter get the material tint only, so the
//! frosted look comes from the tint over whatever is already painted.

use floem::kurbo::{Rect, RoundedRect, Stroke};
use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalGet};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, PaintCx, UpdateCx},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::geometry::Bounds;
use crate::panel::{GlassPanel, Layer};
use crate::style::StyleConfig;

enum GlassUpdate {
    Style(StyleConfig),
}

pub struct GlassView {
    id: ViewId,
    panel: GlassPanel,
    size: floem::taffy::prelude::Size<f32>,
}

/// Creates a glass panel that tracks `style`.
///
/// The panel fills whatever size layout gives it and never paints a solid
/// background of its own.
pub fn glass_panel(style: RwSignal<StyleConfig>) -> GlassView {
    let id = ViewId::new();

    create_effect(move |_| {
        let s = style.get();
        id.update_state(GlassUpdate::Style(s));
    });

    GlassView {
        id,
        panel: GlassPanel::with_style(style.get_untracked()),
        size: Default::default(),
    }
}

/// Places `child` on top of a glass panel sized to the container.
pub fn glass_container(
    style: RwSignal<StyleConfig>,
    child: impl IntoView + 'static,
) -> impl IntoView {
    stack((
        glass_panel(style).style(|s| s.absolute().size_full()),
        child,
    ))
}

impl View for GlassView {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<GlassUpdate>() {
            match *update {
                GlassUpdate::Style(style) => self.panel.apply_style(&style),
            }
            self.id.request_layout();
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        self.panel
            .set_bounds(Bounds::new(self.size.width as f64, self.size.height as f64));
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        if self.size.width == 0.0 || self.size.height == 0.0 {
            return;
        }

        for layer in self.panel.layers() {
            match layer {
                Layer::Shadow {
                    shape,
                    color,
                    offset,
                    blur_radius,
                } => {
                    let shifted = RoundedRect::from_rect(shape.rect() + offset, shape.radii());
                    cx.fill(&shifted, color.to_peniko(), blur_radius);
                }
                Layer::Blur {
                    shape,
                    material,
                    overlay,
                } => {
                    cx.save();
                    cx.clip(&shape);
                    cx.fill(&shape, material.tint.to_peniko(), 0.0);
                    if overlay.a() > 0.001 {
                        cx.fill(&shape, overlay.to_peniko(), 0.0);
                    }
                    cx.restore();
                }
                Layer::Border {
                    path,
                    stroke_width,
                    gradient,
                    band,
                } => {
                    if stroke_width <= 0.0 {
                        continue;
                    }
                    // Stroking with the gradient brush confines it to the
                    // outline band.
                    let brush = gradient.to_peniko(band);
                    cx.stroke(&path, &brush, &Stroke::new(stroke_width));
                }
            }
        }
    }
}

impl Drop for GlassView {
    fn drop(&mut self) {
        self.panel.dispose();
    }
}
