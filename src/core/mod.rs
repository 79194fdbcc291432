pub mod center_text;
pub mod observer;
pub mod orientation;
pub mod polar;
pub mod primitives;
pub mod projection;
pub mod rendering_order;
pub mod scale;
pub mod types;

pub use center_text::CenterTextMode;
pub use observer::{ChangeListener, ChangeNotifier, SubscriptionId};
pub use orientation::PlotOrientation;
pub use polar::PolarAxisLocation;
pub use projection::{CoordinateTransform, XyProjection};
pub use rendering_order::{DatasetRenderingOrder, SeriesRenderingOrder};
pub use scale::{LinearScale, PixelSpan};
pub use types::{DataPoint, DevicePoint, DeviceRect, Range};
