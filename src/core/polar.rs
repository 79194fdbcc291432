use serde::{Deserialize, Serialize};

/// Where the radial axis of a polar plot is drawn.
///
/// The compass part names the spoke the axis lies on; the second part names
/// the side of that spoke the tick labels sit on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolarAxisLocation {
    NorthLeft,
    NorthRight,
    SouthLeft,
    SouthRight,
    EastAbove,
    EastBelow,
    WestAbove,
    WestBelow,
}

impl PolarAxisLocation {
    pub const ALL: [Self; 8] = [
        Self::NorthLeft,
        Self::NorthRight,
        Self::SouthLeft,
        Self::SouthRight,
        Self::EastAbove,
        Self::EastBelow,
        Self::WestAbove,
        Self::WestBelow,
    ];

    /// True when the axis lies on the north or south spoke.
    #[must_use]
    pub fn is_vertical_spoke(self) -> bool {
        matches!(
            self,
            Self::NorthLeft | Self::NorthRight | Self::SouthLeft | Self::SouthRight
        )
    }

    /// The location on the spoke opposite this one, keeping the label side.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::NorthLeft => Self::SouthLeft,
            Self::NorthRight => Self::SouthRight,
            Self::SouthLeft => Self::NorthLeft,
            Self::SouthRight => Self::NorthRight,
            Self::EastAbove => Self::WestAbove,
            Self::EastBelow => Self::WestBelow,
            Self::WestAbove => Self::EastAbove,
            Self::WestBelow => Self::EastBelow,
        }
    }
}
