use crate::error::{PlotError, PlotResult};

/// Pixel extent an axis is laid out on.
///
/// `start` is where the scale's `domain_start` lands; it may be greater than
/// `end` for axes that grow upward on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelSpan {
    pub start: f64,
    pub end: f64,
}

impl PixelSpan {
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    fn validate(self) -> PlotResult<Self> {
        if !self.start.is_finite() || !self.end.is_finite() || self.start == self.end {
            return Err(PlotError::InvalidData(
                "pixel span must be finite and non-zero".to_owned(),
            ));
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> PlotResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(PlotError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn domain_to_pixel(self, value: f64, span: PixelSpan) -> PlotResult<f64> {
        let span = span.validate()?;
        if !value.is_finite() {
            return Err(PlotError::InvalidData("value must be finite".to_owned()));
        }

        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        Ok(span.start + normalized * (span.end - span.start))
    }

    pub fn pixel_to_domain(self, pixel: f64, span: PixelSpan) -> PlotResult<f64> {
        let span = span.validate()?;
        if !pixel.is_finite() {
            return Err(PlotError::InvalidData("pixel must be finite".to_owned()));
        }

        let normalized = (pixel - span.start) / (span.end - span.start);
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }
}
