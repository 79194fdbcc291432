use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_seconds, decimal_to_f64};
use crate::error::{PlotError, PlotResult};

/// A point in data space (dataset values, before projection).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Builds a time-series sample: x is unix seconds, y the decimal value.
    pub fn from_decimal_time(time: DateTime<Utc>, value: Decimal) -> PlotResult<Self> {
        Ok(Self {
            x: datetime_to_unix_seconds(time),
            y: decimal_to_f64(value, "value")?,
        })
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A point on the output surface, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DevicePoint {
    pub x: f64,
    pub y: f64,
}

impl DevicePoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Returns the point with x and y exchanged.
    #[must_use]
    pub fn transposed(self) -> Self {
        Self {
            x: self.y,
            y: self.x,
        }
    }
}

/// Axis-aligned rectangle on the output surface.
///
/// Containment is half-open: the left/top edges are inside, the right/bottom
/// edges are not, and an empty rectangle contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DeviceRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl DeviceRect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn min_x(self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn max_x(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn min_y(self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn max_y(self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    #[must_use]
    pub fn contains(self, point: DevicePoint) -> bool {
        !self.is_empty()
            && point.x >= self.min_x()
            && point.y >= self.min_y()
            && point.x < self.max_x()
            && point.y < self.max_y()
    }

    /// Rejects areas that cannot host a projection.
    pub fn validate(self) -> PlotResult<Self> {
        let finite = self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite();
        if !finite || self.is_empty() {
            return Err(PlotError::InvalidArea {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

impl Eq for DeviceRect {}

impl Hash for DeviceRect {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for value in [self.x, self.y, self.width, self.height] {
            OrderedFloat(value).hash(state);
        }
    }
}

/// Closed numeric interval `[lower, upper]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    lower: f64,
    upper: f64,
}

impl Range {
    pub fn new(lower: f64, upper: f64) -> PlotResult<Self> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(PlotError::InvalidData(
                "range bounds must be finite".to_owned(),
            ));
        }
        if lower > upper {
            return Err(PlotError::InvalidData(format!(
                "range lower bound ({lower}) must be <= upper bound ({upper})"
            )));
        }
        Ok(Self { lower, upper })
    }

    #[must_use]
    pub fn lower(self) -> f64 {
        self.lower
    }

    #[must_use]
    pub fn upper(self) -> f64 {
        self.upper
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.upper - self.lower
    }

    #[must_use]
    pub fn central_value(self) -> f64 {
        self.lower / 2.0 + self.upper / 2.0
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

impl Eq for Range {}

impl Hash for Range {
    fn hash<H: Hasher>(&self, state: &mut H) {
        OrderedFloat(self.lower).hash(state);
        OrderedFloat(self.upper).hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::{DevicePoint, DeviceRect, Range};

    #[test]
    fn rect_containment_is_half_open() {
        let rect = DeviceRect::new(10.0, 20.0, 100.0, 50.0);
        assert!(rect.contains(DevicePoint::new(10.0, 20.0)));
        assert!(rect.contains(DevicePoint::new(109.9, 69.9)));
        assert!(!rect.contains(DevicePoint::new(110.0, 30.0)));
        assert!(!rect.contains(DevicePoint::new(50.0, 70.0)));
    }

    #[test]
    fn empty_rect_contains_nothing() {
        let rect = DeviceRect::default();
        assert!(!rect.contains(DevicePoint::new(0.0, 0.0)));
        assert!(rect.validate().is_err());
    }

    #[test]
    fn range_rejects_inverted_bounds() {
        let err = Range::new(5.0, 1.0).expect_err("inverted range must fail");
        assert!(format!("{err}").contains("lower bound"));
    }

    #[test]
    fn range_central_value_and_length() {
        let range = Range::new(55.0, 60.0).expect("range");
        assert_eq!(range.length(), 5.0);
        assert_eq!(range.central_value(), 57.5);
        assert!(range.contains(55.0));
        assert!(range.contains(60.0));
        assert!(!range.contains(60.5));
    }
}
