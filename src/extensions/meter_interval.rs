use serde::{Deserialize, Serialize};

use crate::core::Range;
use crate::error::{PlotError, PlotResult};
use crate::render::{Color, Paint, Stroke};

/// A labelled band on a meter dial, e.g. "Normal" for 55..60.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeterInterval {
    label: String,
    range: Range,
    outline_paint: Option<Paint>,
    outline_stroke: Option<Stroke>,
    background_paint: Option<Paint>,
}

impl MeterInterval {
    /// Interval with a yellow 2px outline and no background.
    pub fn new(label: impl Into<String>, range: Range) -> PlotResult<Self> {
        Self::with_style(
            label,
            range,
            Some(Paint::Solid(Color::rgb(1.0, 1.0, 0.0))),
            Some(Stroke::solid(2.0)),
            None,
        )
    }

    pub fn with_style(
        label: impl Into<String>,
        range: Range,
        outline_paint: Option<Paint>,
        outline_stroke: Option<Stroke>,
        background_paint: Option<Paint>,
    ) -> PlotResult<Self> {
        let label = label.into();
        if label.is_empty() {
            return Err(PlotError::InvalidData(
                "meter interval label must not be empty".to_owned(),
            ));
        }
        if let Some(stroke) = &outline_stroke {
            stroke.validate()?;
        }
        Ok(Self {
            label,
            range,
            outline_paint,
            outline_stroke,
            background_paint,
        })
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn range(&self) -> Range {
        self.range
    }

    #[must_use]
    pub fn outline_paint(&self) -> Option<Paint> {
        self.outline_paint
    }

    #[must_use]
    pub fn outline_stroke(&self) -> Option<&Stroke> {
        self.outline_stroke.as_ref()
    }

    #[must_use]
    pub fn background_paint(&self) -> Option<Paint> {
        self.background_paint
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.range.contains(value)
    }
}
