use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{DataPoint, DevicePoint, DeviceRect, LinearScale, XyProjection};
use crate::error::{PlotError, PlotResult};
use crate::extensions::AxisMarker;
use crate::interaction::{BestCandidate, Crosshair, DistanceMetric, ProximityTracker};
use crate::render::PlotRenderingInfo;

use super::PlotConfig;

/// Named series of XY samples. Series keep insertion order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct XyDataset {
    series: IndexMap<String, Vec<DataPoint>>,
}

impl XyDataset {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_series(mut self, name: impl Into<String>, points: Vec<DataPoint>) -> Self {
        self.insert_series(name, points);
        self
    }

    /// Adds or replaces a series. A replaced series keeps its position.
    pub fn insert_series(&mut self, name: impl Into<String>, points: Vec<DataPoint>) {
        self.series.insert(name.into(), points);
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn series(&self, index: usize) -> Option<(&str, &[DataPoint])> {
        self.series
            .get_index(index)
            .map(|(name, points)| (name.as_str(), points.as_slice()))
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.series.values().map(Vec::len).sum()
    }
}

/// Result of one crosshair pass over an XY plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrosshairOutcome {
    /// Anchor used for the pass; a non-finite anchor is dropped.
    pub anchor: Option<DevicePoint>,
    /// Nearest item, or `None` without an anchor or without finite items.
    pub best: Option<BestCandidate>,
    /// Whether the crosshairs were moved onto `best`.
    pub snapped: bool,
    pub submitted: usize,
    pub skipped: usize,
}

/// An XY plot reduced to what a crosshair pass needs: axes, datasets,
/// markers and the two crosshair lines.
#[derive(Debug, Clone)]
pub struct XyPlot {
    config: PlotConfig,
    domain: LinearScale,
    range: LinearScale,
    datasets: Vec<XyDataset>,
    domain_markers: Vec<AxisMarker>,
    range_markers: Vec<AxisMarker>,
    domain_crosshair: Crosshair,
    range_crosshair: Crosshair,
}

impl XyPlot {
    pub fn new(config: PlotConfig, domain: LinearScale, range: LinearScale) -> PlotResult<Self> {
        Ok(Self {
            config: config.validate()?,
            domain,
            range,
            datasets: Vec::new(),
            domain_markers: Vec::new(),
            range_markers: Vec::new(),
            domain_crosshair: Crosshair::default(),
            range_crosshair: Crosshair::default(),
        })
    }

    #[must_use]
    pub fn config(&self) -> PlotConfig {
        self.config
    }

    pub fn set_config(&mut self, config: PlotConfig) -> PlotResult<()> {
        self.config = config.validate()?;
        Ok(())
    }

    #[must_use]
    pub fn domain_scale(&self) -> LinearScale {
        self.domain
    }

    #[must_use]
    pub fn range_scale(&self) -> LinearScale {
        self.range
    }

    pub fn set_scales(&mut self, domain: LinearScale, range: LinearScale) {
        self.domain = domain;
        self.range = range;
    }

    /// Appends a dataset and returns its index.
    pub fn add_dataset(&mut self, dataset: XyDataset) -> usize {
        self.datasets.push(dataset);
        self.datasets.len() - 1
    }

    pub fn set_dataset(&mut self, index: usize, dataset: XyDataset) -> PlotResult<()> {
        let slot = self.datasets.get_mut(index).ok_or_else(|| {
            PlotError::InvalidData(format!("dataset index {index} is out of bounds"))
        })?;
        *slot = dataset;
        Ok(())
    }

    #[must_use]
    pub fn dataset(&self, index: usize) -> Option<&XyDataset> {
        self.datasets.get(index)
    }

    #[must_use]
    pub fn dataset_count(&self) -> usize {
        self.datasets.len()
    }

    pub fn add_domain_marker(&mut self, marker: impl Into<AxisMarker>) {
        self.domain_markers.push(marker.into());
    }

    pub fn add_range_marker(&mut self, marker: impl Into<AxisMarker>) {
        self.range_markers.push(marker.into());
    }

    #[must_use]
    pub fn domain_markers(&self) -> &[AxisMarker] {
        &self.domain_markers
    }

    #[must_use]
    pub fn range_markers(&self) -> &[AxisMarker] {
        &self.range_markers
    }

    pub fn remove_domain_marker(&mut self, index: usize) -> Option<AxisMarker> {
        (index < self.domain_markers.len()).then(|| self.domain_markers.remove(index))
    }

    pub fn remove_range_marker(&mut self, index: usize) -> Option<AxisMarker> {
        (index < self.range_markers.len()).then(|| self.range_markers.remove(index))
    }

    pub fn domain_markers_covering(&self, value: f64) -> impl Iterator<Item = &AxisMarker> {
        self.domain_markers
            .iter()
            .filter(move |marker| marker.covers(value))
    }

    pub fn range_markers_covering(&self, value: f64) -> impl Iterator<Item = &AxisMarker> {
        self.range_markers
            .iter()
            .filter(move |marker| marker.covers(value))
    }

    #[must_use]
    pub fn domain_crosshair(&self) -> &Crosshair {
        &self.domain_crosshair
    }

    pub fn domain_crosshair_mut(&mut self) -> &mut Crosshair {
        &mut self.domain_crosshair
    }

    #[must_use]
    pub fn range_crosshair(&self) -> &Crosshair {
        &self.range_crosshair
    }

    pub fn range_crosshair_mut(&mut self) -> &mut Crosshair {
        &mut self.range_crosshair
    }

    /// Builds the projection for a pass into `data_area`.
    pub fn projection(&self, data_area: DeviceRect) -> PlotResult<XyProjection> {
        XyProjection::new(self.domain, self.range, data_area, self.config.orientation)
    }

    /// Runs one crosshair pass.
    ///
    /// Every finite item of every dataset is submitted to a fresh tracker in
    /// dataset and series rendering order. Items that cannot be projected are
    /// skipped. When the nearest item is within the snap threshold, the
    /// crosshairs locked on data move to it; unlocked crosshairs follow the
    /// anchor's own data value. An anchor that cannot be mapped to data space
    /// is treated as absent.
    pub fn render_pass(
        &mut self,
        anchor: Option<DevicePoint>,
        data_area: DeviceRect,
        info: &mut PlotRenderingInfo,
    ) -> PlotResult<CrosshairOutcome> {
        let projection = self.projection(data_area)?;
        info.set_data_area(data_area);

        let mut tracker = ProximityTracker::new(self.config.distance_metric);
        let anchor = anchor.and_then(|point| match tracker.set_anchor_with(point, &projection) {
            Ok(()) => Some(point),
            Err(err) => {
                warn!(x = point.x, y = point.y, %err, "ignoring crosshair anchor");
                None
            }
        });

        let orientation = self.config.orientation;
        let mut submitted = 0;
        let mut skipped = 0;
        for dataset_index in self
            .config
            .dataset_rendering_order
            .indices(self.datasets.len())
        {
            let dataset = &self.datasets[dataset_index];
            for series_index in self
                .config
                .series_rendering_order
                .indices(dataset.series_count())
            {
                let Some((name, points)) = dataset.series(series_index) else {
                    continue;
                };
                let mut series_skipped = 0;
                for (point, projected) in points.iter().zip(project_items(projection, points)) {
                    match projected {
                        Some((device_x, device_y)) => {
                            tracker.submit_point(
                                point.x,
                                point.y,
                                dataset_index,
                                device_x,
                                device_y,
                                orientation,
                            );
                            submitted += 1;
                        }
                        None => series_skipped += 1,
                    }
                }
                if series_skipped > 0 {
                    warn!(
                        dataset_index,
                        series = name,
                        skipped = series_skipped,
                        "skipping non-finite items in crosshair pass"
                    );
                    skipped += series_skipped;
                }
            }
        }

        let best = (tracker.is_tracking() && tracker.best_distance().is_finite())
            .then(|| tracker.best());
        let snapped = best.is_some_and(|best| self.within_snap_threshold(best.distance));
        if let (true, Some(best)) = (snapped, best) {
            if self.config.domain_crosshair_locked_on_data {
                self.domain_crosshair.set_value(best.x);
            }
            if self.config.range_crosshair_locked_on_data {
                self.range_crosshair.set_value(best.y);
            }
        }
        if anchor.is_some() {
            let anchor_data = tracker.anchor_data();
            if !self.config.domain_crosshair_locked_on_data {
                self.domain_crosshair.set_value(anchor_data.x);
            }
            if !self.config.range_crosshair_locked_on_data {
                self.range_crosshair.set_value(anchor_data.y);
            }
        }

        debug!(
            datasets = self.datasets.len(),
            submitted,
            skipped,
            snapped,
            best_distance = tracker.best_distance(),
            "xy crosshair pass complete"
        );

        Ok(CrosshairOutcome {
            anchor,
            best,
            snapped,
            submitted,
            skipped,
        })
    }

    /// The threshold is in pixels, so it only applies to device-space
    /// distances, which are squared.
    fn within_snap_threshold(&self, distance: f64) -> bool {
        match (self.config.crosshair_snap_threshold_px, self.config.distance_metric) {
            (Some(threshold), DistanceMetric::DeviceSpace) => distance <= threshold * threshold,
            _ => true,
        }
    }
}

#[cfg(not(feature = "parallel-projection"))]
fn project_items(projection: XyProjection, points: &[DataPoint]) -> Vec<Option<(f64, f64)>> {
    points
        .iter()
        .map(|point| projection.project(*point).ok())
        .collect()
}

#[cfg(feature = "parallel-projection")]
fn project_items(projection: XyProjection, points: &[DataPoint]) -> Vec<Option<(f64, f64)>> {
    use rayon::prelude::*;

    points
        .par_iter()
        .map(|point| projection.project(*point).ok())
        .collect()
}
