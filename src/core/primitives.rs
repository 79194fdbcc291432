use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{PlotError, PlotResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> PlotResult<f64> {
    value.to_f64().ok_or_else(|| {
        PlotError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

pub fn ensure_finite(value: f64, field_name: &str) -> PlotResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PlotError::InvalidData(format!("{field_name} must be finite")))
    }
}

pub fn ensure_unit_interval(value: f32, field_name: &str) -> PlotResult<f32> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(PlotError::InvalidData(format!(
            "{field_name} must be in the range 0.0 to 1.0"
        )))
    }
}
