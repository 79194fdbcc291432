use serde::{Deserialize, Serialize};

use crate::core::{DevicePoint, DeviceRect};

/// Geometry recorded while a plot is drawn, for later hit-testing.
///
/// Combined plots record one nested entry per subplot, in subplot order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PlotRenderingInfo {
    plot_area: Option<DeviceRect>,
    data_area: DeviceRect,
    subplots: Vec<PlotRenderingInfo>,
}

impl PlotRenderingInfo {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Area the whole plot occupies, including axes. `None` until drawn.
    #[must_use]
    pub fn plot_area(&self) -> Option<DeviceRect> {
        self.plot_area
    }

    pub fn set_plot_area(&mut self, area: Option<DeviceRect>) {
        self.plot_area = area;
    }

    /// Area inside the axes where data items are drawn.
    #[must_use]
    pub fn data_area(&self) -> DeviceRect {
        self.data_area
    }

    pub fn set_data_area(&mut self, area: DeviceRect) {
        self.data_area = area;
    }

    #[must_use]
    pub fn subplot_count(&self) -> usize {
        self.subplots.len()
    }

    pub fn add_subplot_info(&mut self, info: PlotRenderingInfo) {
        self.subplots.push(info);
    }

    #[must_use]
    pub fn subplot_info(&self, index: usize) -> Option<&PlotRenderingInfo> {
        self.subplots.get(index)
    }

    pub fn subplot_info_mut(&mut self, index: usize) -> Option<&mut PlotRenderingInfo> {
        self.subplots.get_mut(index)
    }

    /// Index of the first subplot whose data area contains `point`.
    #[must_use]
    pub fn subplot_index(&self, point: DevicePoint) -> Option<usize> {
        self.subplots
            .iter()
            .position(|info| info.data_area.contains(point))
    }

    /// Clears everything recorded by a previous draw.
    pub fn clear(&mut self) {
        self.plot_area = None;
        self.data_area = DeviceRect::default();
        self.subplots.clear();
    }
}
