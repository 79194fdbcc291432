use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{CoordinateTransform, DataPoint, DevicePoint, PlotOrientation};
use crate::error::PlotResult;

/// Coordinate system a [`ProximityTracker`] measures distances in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DistanceMetric {
    /// Squared distance between dataset values. Only meaningful for plots
    /// with a single pair of axes.
    DataSpace,
    /// Squared distance between projected pixel positions.
    #[default]
    DeviceSpace,
}

/// Whether submissions can currently change the tracked result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackerState {
    /// No anchor: every submission is ignored.
    Inactive,
    Tracking,
}

/// Closest candidate seen so far in the current pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BestCandidate {
    pub x: f64,
    pub y: f64,
    pub dataset_index: usize,
    /// Squared distance for 2D submissions, absolute distance for 1D ones.
    pub distance: f64,
}

impl Default for BestCandidate {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            dataset_index: 0,
            distance: f64::INFINITY,
        }
    }
}

/// Tracks the data item nearest an anchor point during one rendering pass.
///
/// A renderer submits every visible item; the tracker keeps the one with the
/// smallest distance to the anchor. Replacement requires a strictly smaller
/// distance, so on exact ties the earlier candidate wins and NaN distances
/// never win. Without an anchor all submissions are no-ops.
///
/// One tracker serves one pass at a time. Reusing it across passes is fine as
/// long as the caller calls [`reset`](Self::reset) (or seeds
/// [`set_best_distance`](Self::set_best_distance)) before each new search.
#[derive(Debug, Clone, PartialEq)]
pub struct ProximityTracker {
    metric: DistanceMetric,
    anchor: Option<DevicePoint>,
    anchor_data: DataPoint,
    best: BestCandidate,
}

impl Default for ProximityTracker {
    fn default() -> Self {
        Self::new(DistanceMetric::default())
    }
}

impl ProximityTracker {
    #[must_use]
    pub fn new(metric: DistanceMetric) -> Self {
        Self {
            metric,
            anchor: None,
            anchor_data: DataPoint::default(),
            best: BestCandidate::default(),
        }
    }

    #[must_use]
    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    #[must_use]
    pub fn state(&self) -> TrackerState {
        if self.anchor.is_some() {
            TrackerState::Tracking
        } else {
            TrackerState::Inactive
        }
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.state() == TrackerState::Tracking
    }

    #[must_use]
    pub fn anchor(&self) -> Option<DevicePoint> {
        self.anchor
    }

    /// Sets or clears the device-space anchor.
    ///
    /// The data-space anchor is not touched; callers using
    /// [`DistanceMetric::DataSpace`] must also call
    /// [`set_anchor_data`](Self::set_anchor_data), or use
    /// [`set_anchor_with`](Self::set_anchor_with) instead.
    pub fn set_anchor(&mut self, anchor: Option<DevicePoint>) {
        self.anchor = anchor;
    }

    #[must_use]
    pub fn anchor_data(&self) -> DataPoint {
        self.anchor_data
    }

    /// Sets the anchor in data space. The device anchor is not touched.
    pub fn set_anchor_data(&mut self, x: f64, y: f64) {
        self.anchor_data = DataPoint::new(x, y);
    }

    /// Sets the device anchor and derives the data anchor from it.
    ///
    /// On error neither anchor changes.
    pub fn set_anchor_with<T>(&mut self, anchor: DevicePoint, transform: &T) -> PlotResult<()>
    where
        T: CoordinateTransform + ?Sized,
    {
        let data = transform.device_to_data(anchor)?;
        self.anchor = Some(anchor);
        self.anchor_data = data;
        Ok(())
    }

    #[must_use]
    pub fn best(&self) -> BestCandidate {
        self.best
    }

    #[must_use]
    pub fn best_distance(&self) -> f64 {
        self.best.distance
    }

    /// Seeds the running minimum. Only candidates strictly closer than
    /// `distance` will be accepted afterwards.
    pub fn set_best_distance(&mut self, distance: f64) {
        self.best.distance = distance;
    }

    #[must_use]
    pub fn best_point(&self) -> DataPoint {
        DataPoint::new(self.best.x, self.best.y)
    }

    pub fn set_best_point(&mut self, point: DataPoint) {
        self.best.x = point.x;
        self.best.y = point.y;
    }

    /// Dataset the best candidate came from; maps the result to its axes.
    #[must_use]
    pub fn best_dataset_index(&self) -> usize {
        self.best.dataset_index
    }

    pub fn set_best_dataset_index(&mut self, index: usize) {
        self.best.dataset_index = index;
    }

    /// Starts a fresh search. The anchors are kept.
    pub fn reset(&mut self) {
        self.best.distance = f64::INFINITY;
    }

    /// Evaluates one 2D candidate.
    ///
    /// `device_x`/`device_y` are the projected domain and range coordinates.
    /// For [`PlotOrientation::Horizontal`] the domain runs along the device y
    /// axis, so the anchor's components are swapped before comparing.
    pub fn submit_point(
        &mut self,
        x: f64,
        y: f64,
        dataset_index: usize,
        device_x: f64,
        device_y: f64,
        orientation: PlotOrientation,
    ) {
        let Some(anchor) = self.anchor else {
            return;
        };

        let distance = match self.metric {
            DistanceMetric::DataSpace => {
                squared_distance(x, y, self.anchor_data.x, self.anchor_data.y)
            }
            DistanceMetric::DeviceSpace => {
                let anchor = match orientation {
                    PlotOrientation::Horizontal => anchor.transposed(),
                    PlotOrientation::Vertical => anchor,
                };
                squared_distance(device_x, device_y, anchor.x, anchor.y)
            }
        };

        if distance < self.best.distance {
            trace!(x, y, dataset_index, distance, "crosshair candidate accepted");
            self.best = BestCandidate {
                x,
                y,
                dataset_index,
                distance,
            };
        }
    }

    /// Evaluates a candidate where only the domain axis is numeric.
    ///
    /// On acceptance the x value, dataset index and distance change; the
    /// tracked y value is left alone.
    pub fn submit_x(&mut self, x: f64, device_x: f64, dataset_index: usize) {
        let Some(anchor) = self.anchor else {
            return;
        };

        let distance = (device_x - anchor.x).abs();
        if distance < self.best.distance {
            trace!(x, dataset_index, distance, "crosshair x candidate accepted");
            self.best.x = x;
            self.best.dataset_index = dataset_index;
            self.best.distance = distance;
        }
    }

    /// Evaluates a candidate where only the range axis is numeric.
    ///
    /// On acceptance the y value, dataset index and distance change; the
    /// tracked x value is left alone.
    pub fn submit_y(&mut self, y: f64, device_y: f64, dataset_index: usize) {
        let Some(anchor) = self.anchor else {
            return;
        };

        let distance = (device_y - anchor.y).abs();
        if distance < self.best.distance {
            trace!(y, dataset_index, distance, "crosshair y candidate accepted");
            self.best.y = y;
            self.best.dataset_index = dataset_index;
            self.best.distance = distance;
        }
    }
}

fn squared_distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x1 - x2;
    let dy = y1 - y2;
    dx * dx + dy * dy
}
