//! Rendering-pass drivers.
//!
//! These play the renderer's part for the crosshair: project every visible
//! item, submit it to a [`ProximityTracker`](crate::interaction::ProximityTracker)
//! and hand the result to the plot's crosshairs.

mod category_plot;
mod plot_config;
mod xy_plot;

pub use category_plot::{CategoryCrosshairOutcome, CategoryDataset, CategoryPlot};
pub use plot_config::{PLOT_CONFIG_JSON_SCHEMA_V1, PlotConfig, PlotConfigJsonContractV1};
pub use xy_plot::{CrosshairOutcome, XyDataset, XyPlot};
