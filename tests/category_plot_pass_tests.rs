use approx::assert_relative_eq;
use chart_plot::api::{CategoryDataset, CategoryPlot, PlotConfig};
use chart_plot::core::{DevicePoint, DeviceRect, LinearScale, PlotOrientation};
use chart_plot::extensions::CategoryMarker;
use chart_plot::render::PlotRenderingInfo;

fn area() -> DeviceRect {
    DeviceRect::new(0.0, 0.0, 200.0, 100.0)
}

fn plot(config: PlotConfig) -> CategoryPlot {
    let mut plot = CategoryPlot::new(config, LinearScale::new(0.0, 100.0).expect("range"))
        .expect("plot");
    plot.add_dataset(
        CategoryDataset::new()
            .with_value("s1", "A", 10.0)
            .with_value("s1", "B", 40.0)
            .with_value("s1", "C", 70.0),
    );
    plot.add_dataset(CategoryDataset::new().with_value("s2", "B", 45.0));
    plot
}

#[test]
fn categories_keep_first_appearance_order() {
    let plot = plot(PlotConfig::default());
    let categories: Vec<&str> = plot.categories().into_iter().collect();
    assert_eq!(categories, vec!["A", "B", "C"]);
    assert_eq!(plot.dataset(1).expect("dataset").value("s2", "B"), Some(45.0));
    assert_relative_eq!(
        plot.category_center("B", area()).expect("center"),
        100.0,
        epsilon = 1e-9
    );
    assert!(plot.category_center("Z", area()).is_err());
}

#[test]
fn vertical_pass_measures_from_category_center() {
    let mut plot = plot(PlotConfig::default());
    let mut info = PlotRenderingInfo::new();

    // B is drawn at x=100; s2 puts it at y=55, s1 at y=60
    let outcome = plot
        .render_pass(Some(DevicePoint::new(100.0, 57.0)), area(), &mut info)
        .expect("pass");

    assert_eq!(outcome.category.as_deref(), Some("B"));
    assert_eq!(outcome.range_value, Some(45.0));
    assert_eq!(outcome.dataset_index, Some(1));
    assert_relative_eq!(outcome.distance, 4.0, epsilon = 1e-9);
    assert!(outcome.snapped);
    assert_eq!(plot.range_crosshair().value(), 45.0);
    assert_eq!(info.data_area(), area());
}

#[test]
fn pointer_column_outweighs_a_closer_value_elsewhere() {
    let mut plot = plot(PlotConfig::default());
    let mut info = PlotRenderingInfo::new();

    // over A's column, level with B's values
    let outcome = plot
        .render_pass(Some(DevicePoint::new(30.0, 57.0)), area(), &mut info)
        .expect("pass");

    assert_eq!(outcome.category.as_deref(), Some("A"));
    assert_eq!(outcome.range_value, Some(10.0));
    assert_eq!(plot.range_crosshair().value(), 10.0);
}

#[test]
fn horizontal_pass_places_categories_along_device_y() {
    let config = PlotConfig::default().with_orientation(PlotOrientation::Horizontal);
    let mut plot = plot(config);
    let mut info = PlotRenderingInfo::new();

    // C's band is centered at y=250/3, its value 70 at x=140
    let outcome = plot
        .render_pass(Some(DevicePoint::new(142.0, 85.0)), area(), &mut info)
        .expect("pass");

    assert_eq!(outcome.category.as_deref(), Some("C"));
    assert_eq!(outcome.range_value, Some(70.0));
    assert_eq!(outcome.dataset_index, Some(0));
    assert_relative_eq!(outcome.distance, 25.0 / 9.0 + 4.0, epsilon = 1e-9);
}

#[test]
fn unlocked_range_crosshair_follows_anchor() {
    let config = PlotConfig::default().with_range_crosshair_locked_on_data(false);
    let mut plot = plot(config);
    let mut info = PlotRenderingInfo::new();

    let outcome = plot
        .render_pass(Some(DevicePoint::new(30.0, 57.0)), area(), &mut info)
        .expect("pass");

    assert_eq!(outcome.category.as_deref(), Some("A"));
    assert_relative_eq!(outcome.distance, 10.0 / 3.0, epsilon = 1e-9);
    assert!(!outcome.snapped);
    assert_relative_eq!(plot.range_crosshair().value(), 43.0, epsilon = 1e-9);
}

#[test]
fn unlocked_horizontal_pass_compares_along_category_axis() {
    let config = PlotConfig::default()
        .with_orientation(PlotOrientation::Horizontal)
        .with_range_crosshair_locked_on_data(false);
    let mut plot = plot(config);
    let mut info = PlotRenderingInfo::new();

    // B's band is centered at y=50; both B values tie, the first dataset
    // in reverse rendering order wins
    let outcome = plot
        .render_pass(Some(DevicePoint::new(60.0, 52.0)), area(), &mut info)
        .expect("pass");

    assert_eq!(outcome.category.as_deref(), Some("B"));
    assert_eq!(outcome.range_value, Some(45.0));
    assert_eq!(outcome.dataset_index, Some(1));
    assert_relative_eq!(outcome.distance, 2.0, epsilon = 1e-9);
    assert_relative_eq!(plot.range_crosshair().value(), 30.0, epsilon = 1e-9);
}

#[test]
fn non_finite_anchor_is_treated_as_absent() {
    let config = PlotConfig::default().with_range_crosshair_locked_on_data(false);
    let mut plot = plot(config);
    plot.range_crosshair_mut().set_value(12.0);
    let mut info = PlotRenderingInfo::new();

    let outcome = plot
        .render_pass(Some(DevicePoint::new(f64::NAN, 5.0)), area(), &mut info)
        .expect("pass");

    assert!(outcome.anchor.is_none());
    assert!(outcome.category.is_none());
    assert_eq!(plot.range_crosshair().value(), 12.0);
}

#[test]
fn threshold_blocks_far_snaps() {
    let config = PlotConfig::default().with_crosshair_snap_threshold_px(Some(1.0));
    let mut plot = plot(config);
    let mut info = PlotRenderingInfo::new();

    let outcome = plot
        .render_pass(Some(DevicePoint::new(100.0, 57.0)), area(), &mut info)
        .expect("pass");

    assert_eq!(outcome.category.as_deref(), Some("B"));
    assert!(!outcome.snapped);
    assert_eq!(plot.range_crosshair().value(), 0.0);
}

#[test]
fn pass_without_anchor_finds_nothing() {
    let mut plot = plot(PlotConfig::default());
    let mut info = PlotRenderingInfo::new();

    let outcome = plot.render_pass(None, area(), &mut info).expect("pass");

    assert!(outcome.category.is_none());
    assert!(outcome.range_value.is_none());
    assert!(outcome.dataset_index.is_none());
    assert!(outcome.distance.is_infinite());
    assert!(!outcome.snapped);
}

#[test]
fn category_markers_are_looked_up_by_key() {
    let mut plot = plot(PlotConfig::default());
    plot.add_category_marker(CategoryMarker::new("B").expect("marker"));
    plot.add_category_marker(CategoryMarker::new("C").expect("marker"));

    assert_eq!(plot.category_markers_for("B").count(), 1);
    assert_eq!(plot.category_markers_for("A").count(), 0);
}
