use std::hash::{Hash, Hasher};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{ChangeListener, ChangeNotifier, SubscriptionId};
use crate::render::{Color, Font, FontStyle, Paint, RectangleAnchor, Stroke};

/// Builds the label text shown next to a crosshair line.
///
/// `label_template` is a pattern where `{0}` is replaced by the formatted
/// value; `decimals` fixes the number of fraction digits when set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StandardCrosshairLabelGenerator {
    pub label_template: String,
    pub decimals: Option<usize>,
}

impl Default for StandardCrosshairLabelGenerator {
    fn default() -> Self {
        Self {
            label_template: "{0}".to_owned(),
            decimals: None,
        }
    }
}

impl StandardCrosshairLabelGenerator {
    #[must_use]
    pub fn new(label_template: impl Into<String>, decimals: Option<usize>) -> Self {
        Self {
            label_template: label_template.into(),
            decimals,
        }
    }

    #[must_use]
    pub fn generate_label(&self, value: f64) -> String {
        let formatted = match self.decimals {
            Some(decimals) => format!("{value:.decimals$}"),
            None => value.to_string(),
        };
        self.label_template.replace("{0}", &formatted)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrosshairProperty {
    Visible,
    Value,
    Paint,
    Stroke,
    LabelVisible,
    LabelAnchor,
    LabelGenerator,
    LabelXOffset,
    LabelYOffset,
    LabelFont,
    LabelPaint,
    LabelBackgroundPaint,
    LabelOutlineVisible,
    LabelOutlinePaint,
    LabelOutlineStroke,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrosshairChangeEvent {
    pub property: CrosshairProperty,
}

/// A crosshair line drawn at a fixed value on one axis, with an optional
/// label.
///
/// Setters notify listeners only when the stored value actually changes.
/// Float fields compare bit patterns, so re-setting NaN is silent.
#[derive(Debug, Clone)]
pub struct Crosshair {
    visible: bool,
    value: f64,
    paint: Paint,
    stroke: Stroke,
    label_visible: bool,
    label_anchor: RectangleAnchor,
    label_generator: StandardCrosshairLabelGenerator,
    label_x_offset: f64,
    label_y_offset: f64,
    label_font: Font,
    label_paint: Paint,
    label_background_paint: Paint,
    label_outline_visible: bool,
    label_outline_paint: Paint,
    label_outline_stroke: Stroke,
    listeners: ChangeNotifier<CrosshairChangeEvent>,
}

impl Default for Crosshair {
    fn default() -> Self {
        Self::new(0.0)
    }
}

macro_rules! crosshair_setter {
    ($setter:ident, $field:ident, f64, $property:ident) => {
        pub fn $setter(&mut self, value: f64) {
            if self.$field.to_bits() != value.to_bits() {
                self.$field = value;
                self.fire(CrosshairProperty::$property);
            }
        }
    };
    ($setter:ident, $field:ident, $ty:ty, $property:ident) => {
        pub fn $setter(&mut self, value: $ty) {
            if self.$field != value {
                self.$field = value;
                self.fire(CrosshairProperty::$property);
            }
        }
    };
}

impl Crosshair {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self::with_style(value, Paint::Solid(Color::BLACK), Stroke::solid(1.0))
    }

    #[must_use]
    pub fn with_style(value: f64, paint: Paint, stroke: Stroke) -> Self {
        Self {
            visible: true,
            value,
            paint,
            stroke,
            label_visible: false,
            label_anchor: RectangleAnchor::BottomLeft,
            label_generator: StandardCrosshairLabelGenerator::default(),
            label_x_offset: 3.0,
            label_y_offset: 3.0,
            label_font: Font::new("Tahoma", FontStyle::Plain, 12.0),
            label_paint: Paint::Solid(Color::BLACK),
            label_background_paint: Paint::Solid(Color::from_rgba8(0, 0, 255, 63)),
            label_outline_visible: true,
            label_outline_paint: Paint::Solid(Color::BLACK),
            label_outline_stroke: Stroke::solid(0.5),
            listeners: ChangeNotifier::new(),
        }
    }

    pub fn subscribe(
        &mut self,
        listener: impl ChangeListener<CrosshairChangeEvent> + 'static,
    ) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn fire(&mut self, property: CrosshairProperty) {
        self.listeners.notify(&CrosshairChangeEvent { property });
    }

    /// Label text for the current value.
    #[must_use]
    pub fn label_text(&self) -> String {
        self.label_generator.generate_label(self.value)
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Sets the value, notifying unless it is bitwise the same.
    ///
    /// Bitwise comparison makes NaN to NaN a no-op and 0.0 to -0.0 a change.
    pub fn set_value(&mut self, value: f64) {
        if self.value.to_bits() != value.to_bits() {
            self.value = value;
            self.fire(CrosshairProperty::Value);
        }
    }

    #[must_use]
    pub fn paint(&self) -> Paint {
        self.paint
    }

    #[must_use]
    pub fn stroke(&self) -> &Stroke {
        &self.stroke
    }

    #[must_use]
    pub fn is_label_visible(&self) -> bool {
        self.label_visible
    }

    #[must_use]
    pub fn label_anchor(&self) -> RectangleAnchor {
        self.label_anchor
    }

    #[must_use]
    pub fn label_generator(&self) -> &StandardCrosshairLabelGenerator {
        &self.label_generator
    }

    #[must_use]
    pub fn label_x_offset(&self) -> f64 {
        self.label_x_offset
    }

    #[must_use]
    pub fn label_y_offset(&self) -> f64 {
        self.label_y_offset
    }

    #[must_use]
    pub fn label_font(&self) -> &Font {
        &self.label_font
    }

    #[must_use]
    pub fn label_paint(&self) -> Paint {
        self.label_paint
    }

    #[must_use]
    pub fn label_background_paint(&self) -> Paint {
        self.label_background_paint
    }

    #[must_use]
    pub fn is_label_outline_visible(&self) -> bool {
        self.label_outline_visible
    }

    #[must_use]
    pub fn label_outline_paint(&self) -> Paint {
        self.label_outline_paint
    }

    #[must_use]
    pub fn label_outline_stroke(&self) -> &Stroke {
        &self.label_outline_stroke
    }

    crosshair_setter!(set_visible, visible, bool, Visible);
    crosshair_setter!(set_paint, paint, Paint, Paint);
    crosshair_setter!(set_stroke, stroke, Stroke, Stroke);
    crosshair_setter!(set_label_visible, label_visible, bool, LabelVisible);
    crosshair_setter!(set_label_anchor, label_anchor, RectangleAnchor, LabelAnchor);
    crosshair_setter!(
        set_label_generator,
        label_generator,
        StandardCrosshairLabelGenerator,
        LabelGenerator
    );
    crosshair_setter!(set_label_x_offset, label_x_offset, f64, LabelXOffset);
    crosshair_setter!(set_label_y_offset, label_y_offset, f64, LabelYOffset);
    crosshair_setter!(set_label_font, label_font, Font, LabelFont);
    crosshair_setter!(set_label_paint, label_paint, Paint, LabelPaint);
    crosshair_setter!(
        set_label_background_paint,
        label_background_paint,
        Paint,
        LabelBackgroundPaint
    );
    crosshair_setter!(
        set_label_outline_visible,
        label_outline_visible,
        bool,
        LabelOutlineVisible
    );
    crosshair_setter!(
        set_label_outline_paint,
        label_outline_paint,
        Paint,
        LabelOutlinePaint
    );
    crosshair_setter!(
        set_label_outline_stroke,
        label_outline_stroke,
        Stroke,
        LabelOutlineStroke
    );
}

impl PartialEq for Crosshair {
    fn eq(&self, other: &Self) -> bool {
        self.visible == other.visible
            && self.value == other.value
            && self.paint == other.paint
            && self.stroke == other.stroke
            && self.label_visible == other.label_visible
            && self.label_anchor == other.label_anchor
            && self.label_generator == other.label_generator
            && self.label_x_offset == other.label_x_offset
            && self.label_y_offset == other.label_y_offset
            && self.label_font == other.label_font
            && self.label_paint == other.label_paint
            && self.label_background_paint == other.label_background_paint
            && self.label_outline_visible == other.label_outline_visible
            && self.label_outline_paint == other.label_outline_paint
            && self.label_outline_stroke == other.label_outline_stroke
    }
}

impl Hash for Crosshair {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.visible.hash(state);
        OrderedFloat(self.value).hash(state);
        self.paint.hash(state);
        self.stroke.hash(state);
        self.label_visible.hash(state);
        self.label_anchor.hash(state);
        self.label_generator.hash(state);
        OrderedFloat(self.label_x_offset).hash(state);
        OrderedFloat(self.label_y_offset).hash(state);
        self.label_font.hash(state);
        self.label_paint.hash(state);
        self.label_background_paint.hash(state);
        self.label_outline_visible.hash(state);
        self.label_outline_paint.hash(state);
        self.label_outline_stroke.hash(state);
    }
}
