//! Pointer-driven plot state: the per-pass proximity tracker that finds the
//! item nearest the anchor, and the crosshair lines drawn at the result.

pub mod crosshair;
pub mod proximity_tracker;

pub use crosshair::{
    Crosshair, CrosshairChangeEvent, CrosshairProperty, StandardCrosshairLabelGenerator,
};
pub use proximity_tracker::{BestCandidate, DistanceMetric, ProximityTracker, TrackerState};
