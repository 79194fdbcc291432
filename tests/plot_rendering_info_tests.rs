use chart_plot::core::{DevicePoint, DeviceRect};
use chart_plot::render::PlotRenderingInfo;

fn subplot(area: DeviceRect) -> PlotRenderingInfo {
    let mut info = PlotRenderingInfo::new();
    info.set_data_area(area);
    info
}

#[test]
fn subplot_index_finds_first_containing_area() {
    let mut info = PlotRenderingInfo::new();
    info.add_subplot_info(subplot(DeviceRect::new(0.0, 0.0, 100.0, 50.0)));
    info.add_subplot_info(subplot(DeviceRect::new(0.0, 50.0, 100.0, 50.0)));

    assert_eq!(info.subplot_count(), 2);
    assert_eq!(info.subplot_index(DevicePoint::new(10.0, 10.0)), Some(0));
    assert_eq!(info.subplot_index(DevicePoint::new(10.0, 50.0)), Some(1));
    assert_eq!(info.subplot_index(DevicePoint::new(100.0, 10.0)), None);
}

#[test]
fn equality_covers_areas_and_subplots() {
    let mut a = PlotRenderingInfo::new();
    let mut b = PlotRenderingInfo::new();
    assert_eq!(a, b);

    a.set_plot_area(Some(DeviceRect::new(1.0, 2.0, 3.0, 4.0)));
    assert_ne!(a, b);
    b.set_plot_area(Some(DeviceRect::new(1.0, 2.0, 3.0, 4.0)));
    assert_eq!(a, b);

    a.set_data_area(DeviceRect::new(5.0, 6.0, 7.0, 8.0));
    assert_ne!(a, b);
    b.set_data_area(DeviceRect::new(5.0, 6.0, 7.0, 8.0));
    assert_eq!(a, b);

    a.add_subplot_info(PlotRenderingInfo::new());
    assert_ne!(a, b);
    b.add_subplot_info(PlotRenderingInfo::new());
    assert_eq!(a, b);
}

#[test]
fn clone_is_deep() {
    let mut original = PlotRenderingInfo::new();
    original.add_subplot_info(subplot(DeviceRect::new(0.0, 0.0, 10.0, 10.0)));
    let mut copy = original.clone();

    copy.subplot_info_mut(0)
        .expect("subplot")
        .set_data_area(DeviceRect::new(1.0, 1.0, 1.0, 1.0));
    assert_ne!(copy, original);
    assert_eq!(
        original.subplot_info(0).expect("subplot").data_area(),
        DeviceRect::new(0.0, 0.0, 10.0, 10.0)
    );
}

#[test]
fn clear_resets_recorded_geometry() {
    let mut info = subplot(DeviceRect::new(0.0, 0.0, 10.0, 10.0));
    info.set_plot_area(Some(DeviceRect::new(0.0, 0.0, 20.0, 20.0)));
    info.add_subplot_info(PlotRenderingInfo::new());

    info.clear();
    assert_eq!(info, PlotRenderingInfo::new());
    assert!(info.subplot_info(0).is_none());
}
