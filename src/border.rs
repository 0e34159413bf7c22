//! Border outline and the mask band the border gradient is clipped to.
//!
//! The outline sits half a stroke width inside the bounds so a stroke drawn
//! on it ends exactly on the panel edge.

use floem::kurbo::{BezPath, Point, Rect, RoundedRect, Shape};

use crate::constants;
use crate::geometry::{self, Bounds};

#[derive(Debug, Clone, PartialEq)]
pub struct BorderPath {
    outline: RoundedRect,
    stroke_width: f64,
    path: BezPath,
}

impl BorderPath {
    /// Builds a fresh outline for `bounds`.
    ///
    /// Negative or NaN stroke widths are treated as zero, and the stroke never
    /// gets wider than the smaller bounds dimension. The corner radius is
    /// fitted to the inset rect so corners never overlap.
    pub fn build(bounds: Bounds, corner_radius: f64, stroke_width: f64) -> Self {
        let full = bounds.rect();
        let stroke_width = if stroke_width.is_nan() {
            0.0
        } else {
            stroke_width.clamp(0.0, full.width().min(full.height()))
        };
        let half = stroke_width / 2.0;
        let outline = geometry::rounded(full.inset(-half), corner_radius);
        let path = outline.to_path(constants::PATH_TOLERANCE);

        log::trace!(
            "border path for {}x{} (radius {}, stroke {stroke_width})",
            bounds.width(),
            bounds.height(),
            outline.radii().top_left
        );

        Self {
            outline,
            stroke_width,
            path,
        }
    }

    /// The rounded rect the stroke is centered on.
    pub fn outline(&self) -> RoundedRect {
        self.outline
    }

    pub fn path(&self) -> &BezPath {
        &self.path
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Area covered by the stroke: the outline grown by half the stroke width.
    pub fn band_bounds(&self) -> Rect {
        let half = self.stroke_width / 2.0;
        self.outline.rect().inflate(half, half)
    }

    /// Outer and inner edges of the stroke band.
    pub fn band(&self) -> (RoundedRect, RoundedRect) {
        let half = self.stroke_width / 2.0;
        let radius = self.outline.radii().top_left;
        let outer = RoundedRect::from_rect(self.band_bounds(), radius + half);
        let inner_rect = self.outline.rect().inflate(-half, -half);
        let inner = if inner_rect.width() > 0.0 && inner_rect.height() > 0.0 {
            geometry::rounded(inner_rect, radius - half)
        } else {
            RoundedRect::from_rect(Rect::ZERO, 0.0)
        };
        (outer, inner)
    }

    /// Whether the border gradient is visible at `pt`.
    pub fn mask_contains(&self, pt: Point) -> bool {
        let (outer, inner) = self.band();
        outer.contains(pt) && !inner.contains(pt)
    }
}
