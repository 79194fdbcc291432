use std::hash::{Hash, Hasher};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{ensure_finite, ensure_unit_interval};
use crate::core::{ChangeListener, ChangeNotifier, SubscriptionId};
use crate::error::PlotResult;
use crate::render::{
    Color, Font, FontStyle, LengthAdjustmentType, Paint, RectangleAnchor, RectangleInsets, Stroke,
    TextAnchor,
};

/// Visual attributes shared by every marker kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub paint: Paint,
    pub stroke: Stroke,
    pub outline_paint: Option<Paint>,
    pub outline_stroke: Option<Stroke>,
    /// Opacity in `[0, 1]`.
    pub alpha: f32,
    pub label: Option<String>,
    pub label_font: Font,
    pub label_paint: Paint,
    pub label_background_color: Color,
    pub label_anchor: RectangleAnchor,
    pub label_text_anchor: TextAnchor,
    pub label_offset: RectangleInsets,
    pub label_offset_type: LengthAdjustmentType,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self::with_strokes(
            Paint::Solid(Color::GRAY),
            Stroke::solid(0.5),
            Some(Paint::Solid(Color::GRAY)),
            Some(Stroke::solid(0.5)),
            0.8,
        )
    }
}

impl MarkerStyle {
    /// Style with the given line attributes and default label attributes.
    #[must_use]
    pub fn with_strokes(
        paint: Paint,
        stroke: Stroke,
        outline_paint: Option<Paint>,
        outline_stroke: Option<Stroke>,
        alpha: f32,
    ) -> Self {
        Self {
            paint,
            stroke,
            outline_paint,
            outline_stroke,
            alpha,
            label: None,
            label_font: Font::new("SansSerif", FontStyle::Plain, 9.0),
            label_paint: Paint::Solid(Color::BLACK),
            label_background_color: Color::from_rgba8(100, 100, 100, 100),
            label_anchor: RectangleAnchor::TopLeft,
            label_text_anchor: TextAnchor::Center,
            label_offset: RectangleInsets::uniform(3.0),
            label_offset_type: LengthAdjustmentType::Contract,
        }
    }

    pub fn validate(self) -> PlotResult<Self> {
        ensure_unit_interval(self.alpha, "marker alpha")?;
        self.stroke.validate()?;
        if let Some(outline) = &self.outline_stroke {
            outline.validate()?;
        }
        Ok(self)
    }
}

impl Eq for MarkerStyle {}

impl Hash for MarkerStyle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.paint.hash(state);
        self.stroke.hash(state);
        self.outline_paint.hash(state);
        self.outline_stroke.hash(state);
        OrderedFloat(self.alpha).hash(state);
        self.label.hash(state);
        self.label_font.hash(state);
        self.label_paint.hash(state);
        self.label_background_color.hash(state);
        self.label_anchor.hash(state);
        self.label_text_anchor.hash(state);
        self.label_offset.hash(state);
        self.label_offset_type.hash(state);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkerProperty {
    Paint,
    Stroke,
    OutlinePaint,
    OutlineStroke,
    Alpha,
    Label,
    LabelFont,
    LabelPaint,
    LabelBackgroundColor,
    LabelAnchor,
    LabelTextAnchor,
    LabelOffset,
    LabelOffsetType,
    Value,
    Interval,
    Key,
    DrawAsLine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerChangeEvent {
    pub property: MarkerProperty,
}

/// Style and listener state common to all markers.
///
/// Every setter notifies subscribers, even when the new value equals the old
/// one. Listeners never take part in equality or hashing.
#[derive(Debug, Clone)]
pub struct Marker {
    style: MarkerStyle,
    listeners: ChangeNotifier<MarkerChangeEvent>,
}

impl Default for Marker {
    fn default() -> Self {
        Self {
            style: MarkerStyle::default(),
            listeners: ChangeNotifier::new(),
        }
    }
}

impl Marker {
    pub fn new(style: MarkerStyle) -> PlotResult<Self> {
        Ok(Self {
            style: style.validate()?,
            listeners: ChangeNotifier::new(),
        })
    }

    #[must_use]
    pub fn style(&self) -> &MarkerStyle {
        &self.style
    }

    pub fn subscribe(
        &mut self,
        listener: impl ChangeListener<MarkerChangeEvent> + 'static,
    ) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.listener_count()
    }

    pub(crate) fn notify(&mut self, property: MarkerProperty) {
        self.listeners.notify(&MarkerChangeEvent { property });
    }

    pub fn set_paint(&mut self, paint: Paint) {
        self.style.paint = paint;
        self.notify(MarkerProperty::Paint);
    }

    pub fn set_stroke(&mut self, stroke: Stroke) -> PlotResult<()> {
        stroke.validate()?;
        self.style.stroke = stroke;
        self.notify(MarkerProperty::Stroke);
        Ok(())
    }

    pub fn set_outline_paint(&mut self, paint: Option<Paint>) {
        self.style.outline_paint = paint;
        self.notify(MarkerProperty::OutlinePaint);
    }

    pub fn set_outline_stroke(&mut self, stroke: Option<Stroke>) -> PlotResult<()> {
        if let Some(stroke) = &stroke {
            stroke.validate()?;
        }
        self.style.outline_stroke = stroke;
        self.notify(MarkerProperty::OutlineStroke);
        Ok(())
    }

    /// Fails without notifying when `alpha` is outside `[0, 1]`.
    pub fn set_alpha(&mut self, alpha: f32) -> PlotResult<()> {
        self.style.alpha = ensure_unit_interval(alpha, "marker alpha")?;
        self.notify(MarkerProperty::Alpha);
        Ok(())
    }

    pub fn set_label(&mut self, label: Option<String>) {
        self.style.label = label;
        self.notify(MarkerProperty::Label);
    }

    pub fn set_label_font(&mut self, font: Font) {
        self.style.label_font = font;
        self.notify(MarkerProperty::LabelFont);
    }

    pub fn set_label_paint(&mut self, paint: Paint) {
        self.style.label_paint = paint;
        self.notify(MarkerProperty::LabelPaint);
    }

    pub fn set_label_background_color(&mut self, color: Color) {
        self.style.label_background_color = color;
        self.notify(MarkerProperty::LabelBackgroundColor);
    }

    pub fn set_label_anchor(&mut self, anchor: RectangleAnchor) {
        self.style.label_anchor = anchor;
        self.notify(MarkerProperty::LabelAnchor);
    }

    pub fn set_label_text_anchor(&mut self, anchor: TextAnchor) {
        self.style.label_text_anchor = anchor;
        self.notify(MarkerProperty::LabelTextAnchor);
    }

    pub fn set_label_offset(&mut self, offset: RectangleInsets) {
        self.style.label_offset = offset;
        self.notify(MarkerProperty::LabelOffset);
    }

    pub fn set_label_offset_type(&mut self, offset_type: LengthAdjustmentType) {
        self.style.label_offset_type = offset_type;
        self.notify(MarkerProperty::LabelOffsetType);
    }
}

impl PartialEq for Marker {
    fn eq(&self, other: &Self) -> bool {
        self.style == other.style
    }
}

impl Eq for Marker {}

impl Hash for Marker {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.style.hash(state);
    }
}

/// Access to the shared marker state of a concrete marker kind.
pub trait PlotMarker {
    fn marker(&self) -> &Marker;
    fn marker_mut(&mut self) -> &mut Marker;

    fn subscribe(
        &mut self,
        listener: impl ChangeListener<MarkerChangeEvent> + 'static,
    ) -> SubscriptionId
    where
        Self: Sized,
    {
        self.marker_mut().subscribe(listener)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.marker_mut().unsubscribe(id)
    }

    fn style(&self) -> &MarkerStyle {
        self.marker().style()
    }
}

/// Marks a single value on a numeric axis.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValueMarker {
    marker: Marker,
    value: OrderedFloat<f64>,
}

impl ValueMarker {
    pub fn new(value: f64) -> PlotResult<Self> {
        Self::with_style(value, MarkerStyle::default())
    }

    pub fn with_style(value: f64, style: MarkerStyle) -> PlotResult<Self> {
        Ok(Self {
            marker: Marker::new(style)?,
            value: OrderedFloat(ensure_finite(value, "marker value")?),
        })
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value.0
    }

    pub fn set_value(&mut self, value: f64) -> PlotResult<()> {
        self.value = OrderedFloat(ensure_finite(value, "marker value")?);
        self.marker.notify(MarkerProperty::Value);
        Ok(())
    }
}

impl PlotMarker for ValueMarker {
    fn marker(&self) -> &Marker {
        &self.marker
    }

    fn marker_mut(&mut self) -> &mut Marker {
        &mut self.marker
    }
}

/// Marks a band between two values on a numeric axis.
///
/// Bounds are stored as given; queries treat them as an unordered pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntervalMarker {
    marker: Marker,
    start: OrderedFloat<f64>,
    end: OrderedFloat<f64>,
}

impl IntervalMarker {
    pub fn new(start: f64, end: f64) -> PlotResult<Self> {
        let style = MarkerStyle::with_strokes(
            Paint::Solid(Color::GRAY),
            Stroke::solid(0.5),
            Some(Paint::Solid(Color::BLUE)),
            Some(Stroke::solid(0.5)),
            0.8,
        );
        Self::with_style(start, end, style)
    }

    pub fn with_style(start: f64, end: f64, style: MarkerStyle) -> PlotResult<Self> {
        Ok(Self {
            marker: Marker::new(style)?,
            start: OrderedFloat(ensure_finite(start, "interval start")?),
            end: OrderedFloat(ensure_finite(end, "interval end")?),
        })
    }

    #[must_use]
    pub fn start_value(&self) -> f64 {
        self.start.0
    }

    #[must_use]
    pub fn end_value(&self) -> f64 {
        self.end.0
    }

    pub fn set_start_value(&mut self, start: f64) -> PlotResult<()> {
        self.start = OrderedFloat(ensure_finite(start, "interval start")?);
        self.marker.notify(MarkerProperty::Interval);
        Ok(())
    }

    pub fn set_end_value(&mut self, end: f64) -> PlotResult<()> {
        self.end = OrderedFloat(ensure_finite(end, "interval end")?);
        self.marker.notify(MarkerProperty::Interval);
        Ok(())
    }

    /// `(low, high)` regardless of the order the bounds were given in.
    #[must_use]
    pub fn span(&self) -> (f64, f64) {
        let (a, b) = (self.start.0, self.end.0);
        if a <= b { (a, b) } else { (b, a) }
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        let (low, high) = self.span();
        value >= low && value <= high
    }
}

impl PlotMarker for IntervalMarker {
    fn marker(&self) -> &Marker {
        &self.marker
    }

    fn marker_mut(&mut self) -> &mut Marker {
        &mut self.marker
    }
}

/// Marks one category on a category axis.
///
/// With `draw_as_line` the marker is drawn as a line through the category
/// center instead of a band covering the category width.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryMarker {
    marker: Marker,
    key: String,
    draw_as_line: bool,
}

impl CategoryMarker {
    pub fn new(key: impl Into<String>) -> PlotResult<Self> {
        let style = MarkerStyle::with_strokes(
            Paint::Solid(Color::GRAY),
            Stroke::solid(1.0),
            Some(Paint::Solid(Color::GRAY)),
            Some(Stroke::solid(1.0)),
            1.0,
        );
        Self::with_style(key, style)
    }

    pub fn with_style(key: impl Into<String>, style: MarkerStyle) -> PlotResult<Self> {
        Ok(Self {
            marker: Marker::new(style)?,
            key: key.into(),
            draw_as_line: false,
        })
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn set_key(&mut self, key: impl Into<String>) {
        self.key = key.into();
        self.marker.notify(MarkerProperty::Key);
    }

    #[must_use]
    pub fn draw_as_line(&self) -> bool {
        self.draw_as_line
    }

    pub fn set_draw_as_line(&mut self, draw_as_line: bool) {
        self.draw_as_line = draw_as_line;
        self.marker.notify(MarkerProperty::DrawAsLine);
    }
}

impl PlotMarker for CategoryMarker {
    fn marker(&self) -> &Marker {
        &self.marker
    }

    fn marker_mut(&mut self) -> &mut Marker {
        &mut self.marker
    }
}

/// A marker on a numeric axis of an XY plot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AxisMarker {
    Value(ValueMarker),
    Interval(IntervalMarker),
}

impl AxisMarker {
    /// True when `value` lies on the marker (exact match for value markers).
    #[must_use]
    pub fn covers(&self, value: f64) -> bool {
        match self {
            Self::Value(marker) => marker.value() == value,
            Self::Interval(marker) => marker.contains(value),
        }
    }
}

impl From<ValueMarker> for AxisMarker {
    fn from(marker: ValueMarker) -> Self {
        Self::Value(marker)
    }
}

impl From<IntervalMarker> for AxisMarker {
    fn from(marker: IntervalMarker) -> Self {
        Self::Interval(marker)
    }
}

#[cfg(test)]
mod tests {
    use super::{IntervalMarker, MarkerStyle};

    #[test]
    fn style_validation_rejects_out_of_range_alpha() {
        let mut style = MarkerStyle::default();
        style.alpha = 1.5;
        let err = style.validate().expect_err("alpha must fail");
        assert!(format!("{err}").contains("marker alpha"));
    }

    #[test]
    fn interval_span_normalizes_reversed_bounds() {
        let marker = IntervalMarker::new(10.0, 2.0).expect("marker");
        assert_eq!(marker.span(), (2.0, 10.0));
        assert!(marker.contains(5.0));
        assert!(!marker.contains(10.5));
    }
}
