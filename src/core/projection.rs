use crate::core::orientation::PlotOrientation;
use crate::core::scale::{LinearScale, PixelSpan};
use crate::core::types::{DataPoint, DevicePoint, DeviceRect};
use crate::error::PlotResult;

/// Converts a device-space anchor into data space.
///
/// Implemented by whatever owns the axes for a pass, so callers that need the
/// anchor in both spaces derive one from the other instead of keeping two
/// values in sync by hand.
pub trait CoordinateTransform {
    fn device_to_data(&self, point: DevicePoint) -> PlotResult<DataPoint>;
}

/// Projects data values of an XY plot into a data area.
///
/// With `Vertical` orientation the domain axis runs left to right along the
/// bottom and the range axis bottom to top. `Horizontal` swaps them: domain
/// bottom to top, range left to right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XyProjection {
    domain: LinearScale,
    range: LinearScale,
    data_area: DeviceRect,
    orientation: PlotOrientation,
}

impl XyProjection {
    pub fn new(
        domain: LinearScale,
        range: LinearScale,
        data_area: DeviceRect,
        orientation: PlotOrientation,
    ) -> PlotResult<Self> {
        Ok(Self {
            domain,
            range,
            data_area: data_area.validate()?,
            orientation,
        })
    }

    #[must_use]
    pub fn orientation(self) -> PlotOrientation {
        self.orientation
    }

    #[must_use]
    pub fn data_area(self) -> DeviceRect {
        self.data_area
    }

    fn domain_span(self) -> PixelSpan {
        match self.orientation {
            PlotOrientation::Vertical => {
                PixelSpan::new(self.data_area.min_x(), self.data_area.max_x())
            }
            PlotOrientation::Horizontal => {
                PixelSpan::new(self.data_area.max_y(), self.data_area.min_y())
            }
        }
    }

    fn range_span(self) -> PixelSpan {
        match self.orientation {
            PlotOrientation::Vertical => {
                PixelSpan::new(self.data_area.max_y(), self.data_area.min_y())
            }
            PlotOrientation::Horizontal => {
                PixelSpan::new(self.data_area.min_x(), self.data_area.max_x())
            }
        }
    }

    pub fn domain_to_device(self, value: f64) -> PlotResult<f64> {
        self.domain.domain_to_pixel(value, self.domain_span())
    }

    pub fn range_to_device(self, value: f64) -> PlotResult<f64> {
        self.range.domain_to_pixel(value, self.range_span())
    }

    /// Returns `(domain_px, range_px)`, the logical pair renderers hand to the
    /// crosshair tracker regardless of orientation.
    pub fn project(self, point: DataPoint) -> PlotResult<(f64, f64)> {
        Ok((
            self.domain_to_device(point.x)?,
            self.range_to_device(point.y)?,
        ))
    }

    /// Returns the actual position of `point` on the output surface.
    pub fn to_device(self, point: DataPoint) -> PlotResult<DevicePoint> {
        let (domain_px, range_px) = self.project(point)?;
        let logical = DevicePoint::new(domain_px, range_px);
        Ok(match self.orientation {
            PlotOrientation::Vertical => logical,
            PlotOrientation::Horizontal => logical.transposed(),
        })
    }
}

impl CoordinateTransform for XyProjection {
    fn device_to_data(&self, point: DevicePoint) -> PlotResult<DataPoint> {
        let logical = match self.orientation {
            PlotOrientation::Vertical => point,
            PlotOrientation::Horizontal => point.transposed(),
        };
        Ok(DataPoint::new(
            self.domain.pixel_to_domain(logical.x, self.domain_span())?,
            self.range.pixel_to_domain(logical.y, self.range_span())?,
        ))
    }
}
