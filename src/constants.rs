//! Default style values and the fixed tones used by the panel layers.

/// Blur density a new panel starts with
pub const DEFAULT_DENSITY: f64 = 0.65;

/// Corner radius a new panel starts with
pub const DEFAULT_CORNER_RADIUS: f64 = 20.0;

/// Shadow distance a new panel starts with
pub const DEFAULT_SHADOW_DISTANCE: f64 = 20.0;

/// Upper bound for the shadow distance
pub const MAX_SHADOW_DISTANCE: f64 = 100.0;

/// Shadow opacity (the shadow tone itself is black)
pub const SHADOW_OPACITY: f64 = 0.2;

/// Alpha of the black overlay laid over the dark blur
pub const DARK_OVERLAY_ALPHA: f64 = 0.35;

/// Approximate backdrop blur strength of both materials
pub const BLUR_STRENGTH: f64 = 20.0;

/// Border stroke width of the bordered variant
pub const BORDER_WIDTH: f64 = 1.0;

/// Border stroke width of the blur-only variant
pub const THIN_BORDER_WIDTH: f64 = 0.5;

/// Blur frame inset of the blur-only variant
pub const THIN_BLUR_INSET: f64 = 1.0;

/// Tolerance used when flattening rounded rects into paths
pub const PATH_TOLERANCE: f64 = 0.1;

/// Suggested wall-clock length of a theme transition, in seconds.
///
/// The panel never advances the fraction on its own; hosts that animate
/// it can use this as the playback length.
pub const TRANSITION_DURATION_SECS: f64 = 0.5;
