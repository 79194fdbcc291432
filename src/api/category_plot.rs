use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{DevicePoint, DeviceRect, LinearScale, PixelSpan, PlotOrientation};
use crate::error::{PlotError, PlotResult};
use crate::extensions::{AxisMarker, CategoryMarker};
use crate::interaction::{Crosshair, DistanceMetric, ProximityTracker};
use crate::render::PlotRenderingInfo;

use super::PlotConfig;

/// Table of values keyed by series, then by category.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryDataset {
    rows: IndexMap<String, IndexMap<String, f64>>,
}

impl CategoryDataset {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_value(
        mut self,
        series: impl Into<String>,
        category: impl Into<String>,
        value: f64,
    ) -> Self {
        self.set_value(series, category, value);
        self
    }

    pub fn set_value(&mut self, series: impl Into<String>, category: impl Into<String>, value: f64) {
        self.rows
            .entry(series.into())
            .or_default()
            .insert(category.into(), value);
    }

    #[must_use]
    pub fn value(&self, series: &str, category: &str) -> Option<f64> {
        self.rows.get(series)?.get(category).copied()
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.rows.len()
    }

    fn row(&self, index: usize) -> Option<(&str, &IndexMap<String, f64>)> {
        self.rows
            .get_index(index)
            .map(|(name, row)| (name.as_str(), row))
    }
}

/// Result of one crosshair pass over a category plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCrosshairOutcome {
    pub anchor: Option<DevicePoint>,
    pub category: Option<String>,
    /// Value of the chosen item.
    pub range_value: Option<f64>,
    pub dataset_index: Option<usize>,
    /// Squared pixel distance when the range crosshair is locked on data,
    /// absolute distance along the category axis otherwise.
    pub distance: f64,
    pub snapped: bool,
}

/// A plot whose domain is a list of categories and whose range is numeric.
///
/// Each category occupies an equal band of the domain axis; its items are
/// positioned at the band center.
#[derive(Debug, Clone)]
pub struct CategoryPlot {
    config: PlotConfig,
    range: LinearScale,
    datasets: Vec<CategoryDataset>,
    category_markers: Vec<CategoryMarker>,
    range_markers: Vec<AxisMarker>,
    range_crosshair: Crosshair,
}

impl CategoryPlot {
    pub fn new(config: PlotConfig, range: LinearScale) -> PlotResult<Self> {
        Ok(Self {
            config: config.validate()?,
            range,
            datasets: Vec::new(),
            category_markers: Vec::new(),
            range_markers: Vec::new(),
            range_crosshair: Crosshair::default(),
        })
    }

    #[must_use]
    pub fn config(&self) -> PlotConfig {
        self.config
    }

    pub fn add_dataset(&mut self, dataset: CategoryDataset) -> usize {
        self.datasets.push(dataset);
        self.datasets.len() - 1
    }

    #[must_use]
    pub fn dataset(&self, index: usize) -> Option<&CategoryDataset> {
        self.datasets.get(index)
    }

    /// Categories of all datasets in order of first appearance.
    #[must_use]
    pub fn categories(&self) -> IndexSet<&str> {
        self.datasets
            .iter()
            .flat_map(|dataset| dataset.rows.values())
            .flat_map(|row| row.keys().map(String::as_str))
            .collect()
    }

    pub fn add_category_marker(&mut self, marker: CategoryMarker) {
        self.category_markers.push(marker);
    }

    pub fn add_range_marker(&mut self, marker: impl Into<AxisMarker>) {
        self.range_markers.push(marker.into());
    }

    #[must_use]
    pub fn range_markers(&self) -> &[AxisMarker] {
        &self.range_markers
    }

    pub fn category_markers_for<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a CategoryMarker> + 'a {
        self.category_markers
            .iter()
            .filter(move |marker| marker.key() == category)
    }

    #[must_use]
    pub fn range_crosshair(&self) -> &Crosshair {
        &self.range_crosshair
    }

    pub fn range_crosshair_mut(&mut self) -> &mut Crosshair {
        &mut self.range_crosshair
    }

    /// Device coordinate of a category's center along the domain axis.
    pub fn category_center(&self, category: &str, data_area: DeviceRect) -> PlotResult<f64> {
        let categories = self.categories();
        let index = categories.get_index_of(category).ok_or_else(|| {
            PlotError::InvalidData(format!("unknown category `{category}`"))
        })?;
        let span = self.domain_span(data_area.validate()?);
        Ok(band_center(span, index, categories.len()))
    }

    fn domain_span(&self, data_area: DeviceRect) -> PixelSpan {
        match self.config.orientation {
            PlotOrientation::Vertical => PixelSpan::new(data_area.min_x(), data_area.max_x()),
            PlotOrientation::Horizontal => PixelSpan::new(data_area.min_y(), data_area.max_y()),
        }
    }

    fn range_span(&self, data_area: DeviceRect) -> PixelSpan {
        match self.config.orientation {
            PlotOrientation::Vertical => PixelSpan::new(data_area.max_y(), data_area.min_y()),
            PlotOrientation::Horizontal => PixelSpan::new(data_area.min_x(), data_area.max_x()),
        }
    }

    /// Runs one crosshair pass.
    ///
    /// With the range crosshair locked on data, every item is a 2-D
    /// candidate at (category center, value) and the range crosshair snaps
    /// to the nearest one. Unlocked, items are compared along the category
    /// axis only and the range crosshair follows the anchor's own range
    /// value. A non-finite anchor is treated as absent.
    pub fn render_pass(
        &mut self,
        anchor: Option<DevicePoint>,
        data_area: DeviceRect,
        info: &mut PlotRenderingInfo,
    ) -> PlotResult<CategoryCrosshairOutcome> {
        let data_area = data_area.validate()?;
        info.set_data_area(data_area);

        let anchor = anchor.filter(|point| {
            if !point.is_finite() {
                warn!(x = point.x, y = point.y, "ignoring non-finite crosshair anchor");
            }
            point.is_finite()
        });
        let orientation = self.config.orientation;
        let logical_anchor = anchor.map(|point| match orientation {
            PlotOrientation::Vertical => point,
            PlotOrientation::Horizontal => point.transposed(),
        });
        let locked = self.config.range_crosshair_locked_on_data;

        // Categories have no data-space position.
        let mut tracker = ProximityTracker::new(DistanceMetric::DeviceSpace);
        if locked {
            tracker.set_anchor(anchor);
        } else {
            // submit_x measures along device x, so it takes the anchor in
            // (domain, range) order.
            tracker.set_anchor(logical_anchor);
        }

        let categories = self.categories();
        let domain_span = self.domain_span(data_area);
        let range_span = self.range_span(data_area);
        let mut best_item: Option<(String, f64)> = None;
        let mut skipped = 0usize;

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
                let Some((_, row)) = dataset.row(series_index) else {
                    continue;
                };
                for (category, value) in row {
                    let (Some(index), Ok(range_px)) = (
                        categories.get_index_of(category.as_str()),
                        self.range.domain_to_pixel(*value, range_span),
                    ) else {
                        skipped += 1;
                        continue;
                    };
                    let center_px = band_center(domain_span, index, categories.len());
                    let before = tracker.best_distance();
                    if locked {
                        tracker.submit_point(
                            index as f64,
                            *value,
                            dataset_index,
                            center_px,
                            range_px,
                            orientation,
                        );
                    } else {
                        tracker.submit_x(index as f64, center_px, dataset_index);
                    }
                    if tracker.best_distance() < before {
                        best_item = Some((category.clone(), *value));
                    }
                }
            }
        }

        if skipped > 0 {
            warn!(skipped, "skipping non-finite category values in crosshair pass");
        }

        let distance = tracker.best_distance();
        let snapped = locked
            && best_item.is_some()
            && self
                .config
                .crosshair_snap_threshold_px
                .is_none_or(|threshold| distance <= threshold * threshold);
        if snapped {
            if let Some((_, value)) = &best_item {
                self.range_crosshair.set_value(*value);
            }
        } else if let (false, Some(logical)) = (locked, logical_anchor) {
            let value = self.range.pixel_to_domain(logical.y, range_span)?;
            self.range_crosshair.set_value(value);
        }

        debug!(
            datasets = self.datasets.len(),
            skipped,
            locked,
            snapped,
            distance,
            "category crosshair pass complete"
        );

        let dataset_index = best_item.as_ref().map(|_| tracker.best_dataset_index());
        let (category, range_value) = match best_item {
            Some((category, value)) => (Some(category), Some(value)),
            None => (None, None),
        };
        Ok(CategoryCrosshairOutcome {
            anchor,
            category,
            range_value,
            dataset_index,
            distance,
            snapped,
        })
    }
}

/// Center of band `index` when `span` is split into `count` equal bands.
fn band_center(span: PixelSpan, index: usize, count: usize) -> f64 {
    let width = (span.end - span.start) / count as f64;
    span.start + (index as f64 + 0.5) * width
}
