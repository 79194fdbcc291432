use serde::{Deserialize, Serialize};

/// What a ring plot prints in its hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CenterTextMode {
    /// A caller-supplied string.
    Fixed,
    /// The formatted value of the first dataset item.
    Value,
    #[default]
    None,
}
