use std::hash::{Hash, Hasher};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{PlotError, PlotResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const GRAY: Self = Self::rgb(128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self::rgba(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
            f64::from(alpha) / 255.0,
        )
    }

    pub fn validate(self) -> PlotResult<Self> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(PlotError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(self)
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for value in [self.red, self.green, self.blue, self.alpha] {
            OrderedFloat(value).hash(state);
        }
    }
}

/// Fill or line paint handed to the drawing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Paint {
    Solid(Color),
    LinearGradient {
        from: GradientStop,
        to: GradientStop,
    },
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub x: f64,
    pub y: f64,
    pub color: Color,
}

impl GradientStop {
    #[must_use]
    pub const fn new(x: f64, y: f64, color: Color) -> Self {
        Self { x, y, color }
    }
}

impl Eq for GradientStop {}

impl Hash for GradientStop {
    fn hash<H: Hasher>(&self, state: &mut H) {
        OrderedFloat(self.x).hash(state);
        OrderedFloat(self.y).hash(state);
        self.color.hash(state);
    }
}

/// Line stroke: width plus an optional on/off dash pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub width: f64,
    #[serde(default)]
    pub dash: SmallVec<[f64; 4]>,
}

impl Stroke {
    #[must_use]
    pub fn solid(width: f64) -> Self {
        Self {
            width,
            dash: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn dashed(width: f64, pattern: &[f64]) -> Self {
        Self {
            width,
            dash: SmallVec::from_slice(pattern),
        }
    }

    pub fn validate(&self) -> PlotResult<()> {
        if !self.width.is_finite() || self.width < 0.0 {
            return Err(PlotError::InvalidData(
                "stroke width must be finite and >= 0".to_owned(),
            ));
        }
        if self.dash.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(PlotError::InvalidData(
                "stroke dash entries must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Eq for Stroke {}

impl Hash for Stroke {
    fn hash<H: Hasher>(&self, state: &mut H) {
        OrderedFloat(self.width).hash(state);
        self.dash.len().hash(state);
        for value in &self.dash {
            OrderedFloat(*value).hash(state);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FontStyle {
    #[default]
    Plain,
    Bold,
    Italic,
    BoldItalic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub family: String,
    pub style: FontStyle,
    pub size_pt: f64,
}

impl Font {
    #[must_use]
    pub fn new(family: impl Into<String>, style: FontStyle, size_pt: f64) -> Self {
        Self {
            family: family.into(),
            style,
            size_pt,
        }
    }
}

impl Eq for Font {}

impl Hash for Font {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.family.hash(state);
        self.style.hash(state);
        OrderedFloat(self.size_pt).hash(state);
    }
}

/// Anchor point on a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RectangleAnchor {
    Center,
    Top,
    TopLeft,
    TopRight,
    Bottom,
    BottomLeft,
    BottomRight,
    Left,
    Right,
}

/// Anchor point on a text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextAnchor {
    TopLeft,
    TopCenter,
    TopRight,
    HalfAscentLeft,
    HalfAscentCenter,
    HalfAscentRight,
    CenterLeft,
    Center,
    CenterRight,
    BaselineLeft,
    BaselineCenter,
    BaselineRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

/// Insets in pixels on each side of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectangleInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl RectangleInsets {
    #[must_use]
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }
}

impl Eq for RectangleInsets {}

impl Hash for RectangleInsets {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for value in [self.top, self.left, self.bottom, self.right] {
            OrderedFloat(value).hash(state);
        }
    }
}

/// How label offsets adjust the length of the area they apply to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LengthAdjustmentType {
    NoChange,
    Expand,
    #[default]
    Contract,
}
