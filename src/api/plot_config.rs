use serde::{Deserialize, Serialize};

use crate::core::{DatasetRenderingOrder, PlotOrientation, SeriesRenderingOrder};
use crate::error::{PlotError, PlotResult};
use crate::interaction::DistanceMetric;

pub const PLOT_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Plot-level settings for rendering passes.
///
/// Serializable so hosts can persist plot setup. Missing fields fall back to
/// their defaults on load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    #[serde(default)]
    pub orientation: PlotOrientation,
    #[serde(default)]
    pub distance_metric: DistanceMetric,
    #[serde(default)]
    pub dataset_rendering_order: DatasetRenderingOrder,
    #[serde(default)]
    pub series_rendering_order: SeriesRenderingOrder,
    /// Maximum pixel distance between anchor and item for the crosshair to
    /// snap. `None` snaps to the nearest item at any distance.
    #[serde(default = "default_crosshair_snap_threshold_px")]
    pub crosshair_snap_threshold_px: Option<f64>,
    #[serde(default = "default_locked_on_data")]
    pub domain_crosshair_locked_on_data: bool,
    #[serde(default = "default_locked_on_data")]
    pub range_crosshair_locked_on_data: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            orientation: PlotOrientation::default(),
            distance_metric: DistanceMetric::default(),
            dataset_rendering_order: DatasetRenderingOrder::default(),
            series_rendering_order: SeriesRenderingOrder::default(),
            crosshair_snap_threshold_px: default_crosshair_snap_threshold_px(),
            domain_crosshair_locked_on_data: default_locked_on_data(),
            range_crosshair_locked_on_data: default_locked_on_data(),
        }
    }
}

impl PlotConfig {
    #[must_use]
    pub fn with_orientation(mut self, orientation: PlotOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_distance_metric(mut self, metric: DistanceMetric) -> Self {
        self.distance_metric = metric;
        self
    }

    #[must_use]
    pub fn with_dataset_rendering_order(mut self, order: DatasetRenderingOrder) -> Self {
        self.dataset_rendering_order = order;
        self
    }

    #[must_use]
    pub fn with_series_rendering_order(mut self, order: SeriesRenderingOrder) -> Self {
        self.series_rendering_order = order;
        self
    }

    #[must_use]
    pub fn with_crosshair_snap_threshold_px(mut self, threshold: Option<f64>) -> Self {
        self.crosshair_snap_threshold_px = threshold;
        self
    }

    #[must_use]
    pub fn with_domain_crosshair_locked_on_data(mut self, locked: bool) -> Self {
        self.domain_crosshair_locked_on_data = locked;
        self
    }

    #[must_use]
    pub fn with_range_crosshair_locked_on_data(mut self, locked: bool) -> Self {
        self.range_crosshair_locked_on_data = locked;
        self
    }

    pub fn validate(self) -> PlotResult<Self> {
        if let Some(threshold) = self.crosshair_snap_threshold_px {
            if !threshold.is_finite() || threshold < 0.0 {
                return Err(PlotError::InvalidConfig(
                    "crosshair snap threshold must be finite and >= 0".to_owned(),
                ));
            }
        }
        Ok(self)
    }

    pub fn to_json_pretty(self) -> PlotResult<String> {
        let payload = PlotConfigJsonContractV1 {
            schema_version: PLOT_CONFIG_JSON_SCHEMA_V1,
            config: self,
        };
        serde_json::to_string_pretty(&payload)
            .map_err(|e| PlotError::InvalidConfig(format!("failed to serialize plot config: {e}")))
    }

    /// Parses either a bare config object or a versioned envelope, then
    /// validates it.
    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| PlotError::InvalidConfig(format!("failed to parse plot config: {e}")))?;

        let config = if value.get("schema_version").is_some() {
            let payload: PlotConfigJsonContractV1 = serde_json::from_value(value).map_err(|e| {
                PlotError::InvalidConfig(format!("failed to parse plot config payload: {e}"))
            })?;
            if payload.schema_version != PLOT_CONFIG_JSON_SCHEMA_V1 {
                return Err(PlotError::InvalidConfig(format!(
                    "unsupported plot config schema version: {}",
                    payload.schema_version
                )));
            }
            payload.config
        } else {
            serde_json::from_value(value)
                .map_err(|e| PlotError::InvalidConfig(format!("failed to parse plot config: {e}")))?
        };

        config.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: PlotConfig,
}

fn default_crosshair_snap_threshold_px() -> Option<f64> {
    None
}

fn default_locked_on_data() -> bool {
    true
}
