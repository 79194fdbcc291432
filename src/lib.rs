//! chart-plot: plot primitives for charting engines.
//!
//! The centerpiece is [`interaction::ProximityTracker`], which finds the data
//! item nearest a pointer anchor while a plot is rendered. Around it sit the
//! value types a plot needs to describe itself: orientation and rendering
//! order, axis markers, crosshair lines and rendering-info bookkeeping.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{CategoryPlot, PlotConfig, XyPlot};
pub use error::{PlotError, PlotResult};
pub use interaction::{DistanceMetric, ProximityTracker};
