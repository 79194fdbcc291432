//! Annotations layered on top of plotted data: axis markers and meter
//! intervals.

pub mod markers;
pub mod meter_interval;

pub use markers::{
    AxisMarker, CategoryMarker, IntervalMarker, Marker, MarkerChangeEvent, MarkerProperty,
    MarkerStyle, PlotMarker, ValueMarker,
};
pub use meter_interval::MeterInterval;
