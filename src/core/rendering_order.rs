use serde::{Deserialize, Serialize};

/// Order in which a plot draws its datasets.
///
/// `Reverse` draws the last dataset first, so the primary dataset (index 0)
/// ends up on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DatasetRenderingOrder {
    Forward,
    #[default]
    Reverse,
}

impl DatasetRenderingOrder {
    /// Dataset indices in draw order.
    pub fn indices(self, count: usize) -> impl Iterator<Item = usize> {
        ordered_indices(self == Self::Reverse, count)
    }
}

/// Order in which a renderer draws the series of one dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SeriesRenderingOrder {
    Forward,
    #[default]
    Reverse,
}

impl SeriesRenderingOrder {
    /// Series indices in draw order.
    pub fn indices(self, count: usize) -> impl Iterator<Item = usize> {
        ordered_indices(self == Self::Reverse, count)
    }
}

fn ordered_indices(reverse: bool, count: usize) -> impl Iterator<Item = usize> {
    (0..count).map(move |i| if reverse { count - 1 - i } else { i })
}
