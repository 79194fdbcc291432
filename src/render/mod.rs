//! Rendering-side records. Drawing itself belongs to the host backend; this
//! module only carries the style values handed to it and the geometry it
//! reports back.

pub mod plot_rendering_info;
pub mod style;

pub use plot_rendering_info::PlotRenderingInfo;
pub use style::{
    Color, Font, FontStyle, GradientStop, LengthAdjustmentType, Paint, RectangleAnchor,
    RectangleInsets, Stroke, TextAnchor,
};
