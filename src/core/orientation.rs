use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlotError;

/// Whether a plot's domain axis is drawn horizontally or vertically.
///
/// `Vertical` is the usual layout: domain along the bottom, range values
/// rising up the screen. `Horizontal` transposes the two device axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlotOrientation {
    Horizontal,
    #[default]
    Vertical,
}

impl PlotOrientation {
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        self == Self::Horizontal
    }

    #[must_use]
    pub fn is_vertical(self) -> bool {
        self == Self::Vertical
    }
}

impl fmt::Display for PlotOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => f.write_str("PlotOrientation.HORIZONTAL"),
            Self::Vertical => f.write_str("PlotOrientation.VERTICAL"),
        }
    }
}

impl FromStr for PlotOrientation {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.strip_prefix("PlotOrientation.").unwrap_or(s);
        if name.eq_ignore_ascii_case("horizontal") {
            Ok(Self::Horizontal)
        } else if name.eq_ignore_ascii_case("vertical") {
            Ok(Self::Vertical)
        } else {
            Err(PlotError::InvalidData(format!(
                "unknown plot orientation: `{s}`"
            )))
        }
    }
}
