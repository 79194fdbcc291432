use approx::assert_relative_eq;
use chart_plot::core::{
    DataPoint, DevicePoint, DeviceRect, LinearScale, PlotOrientation, XyProjection,
};
use chart_plot::interaction::{DistanceMetric, ProximityTracker, TrackerState};

#[test]
fn data_space_pass_keeps_first_tie_and_takes_strictly_closer() {
    let mut tracker = ProximityTracker::new(DistanceMetric::DataSpace);
    tracker.set_anchor(Some(DevicePoint::new(0.0, 0.0)));
    tracker.set_anchor_data(5.0, 5.0);
    tracker.set_best_distance(f64::INFINITY);

    tracker.submit_point(4.0, 5.0, 0, 0.0, 0.0, PlotOrientation::Vertical);
    assert_eq!(tracker.best_dataset_index(), 0);
    assert_relative_eq!(tracker.best_distance(), 1.0);

    tracker.submit_point(5.0, 6.0, 1, 0.0, 0.0, PlotOrientation::Vertical);
    assert_eq!(tracker.best_dataset_index(), 0);
    assert_eq!(tracker.best_point(), DataPoint::new(4.0, 5.0));

    tracker.submit_point(5.1, 5.1, 2, 0.0, 0.0, PlotOrientation::Vertical);
    assert_eq!(tracker.best_point(), DataPoint::new(5.1, 5.1));
    assert_eq!(tracker.best_dataset_index(), 2);
    assert_relative_eq!(tracker.best_distance(), 0.02, epsilon = 1e-12);
}

#[test]
fn submissions_without_anchor_are_ignored() {
    let mut tracker = ProximityTracker::new(DistanceMetric::DeviceSpace);
    let initial = tracker.best();
    assert_eq!(tracker.state(), TrackerState::Inactive);

    tracker.submit_point(1.0, 2.0, 3, 1.0, 2.0, PlotOrientation::Vertical);
    tracker.submit_x(1.0, 1.0, 4);
    tracker.submit_y(2.0, 2.0, 5);

    assert_eq!(tracker.best(), initial);
    assert!(tracker.best_distance().is_infinite());
}

#[test]
fn clearing_anchor_stops_tracking() {
    let mut tracker = ProximityTracker::default();
    tracker.set_anchor(Some(DevicePoint::new(10.0, 10.0)));
    assert!(tracker.is_tracking());
    tracker.submit_point(1.0, 1.0, 0, 12.0, 10.0, PlotOrientation::Vertical);
    assert_relative_eq!(tracker.best_distance(), 4.0);

    tracker.set_anchor(None);
    assert_eq!(tracker.state(), TrackerState::Inactive);
    tracker.submit_point(2.0, 2.0, 1, 10.0, 10.0, PlotOrientation::Vertical);
    assert_eq!(tracker.best_dataset_index(), 0);
    assert_relative_eq!(tracker.best_distance(), 4.0);
}

#[test]
fn horizontal_orientation_swaps_anchor_axes() {
    let anchor = DevicePoint::new(10.0, 20.0);

    let mut horizontal = ProximityTracker::new(DistanceMetric::DeviceSpace);
    horizontal.set_anchor(Some(anchor));
    horizontal.submit_point(1.0, 1.0, 0, 20.0, 10.0, PlotOrientation::Horizontal);
    assert_eq!(horizontal.best_distance(), 0.0);

    let mut vertical = ProximityTracker::new(DistanceMetric::DeviceSpace);
    vertical.set_anchor(Some(anchor));
    vertical.submit_point(1.0, 1.0, 0, 20.0, 10.0, PlotOrientation::Vertical);
    assert_eq!(vertical.best_distance(), 200.0);
}

#[test]
fn one_dimensional_submissions_touch_only_their_axis() {
    let mut tracker = ProximityTracker::new(DistanceMetric::DeviceSpace);
    tracker.set_anchor(Some(DevicePoint::new(100.0, 50.0)));
    tracker.set_best_point(DataPoint::new(-1.0, -1.0));

    tracker.submit_x(3.0, 104.0, 0);
    assert_eq!(tracker.best_point(), DataPoint::new(3.0, -1.0));
    assert_eq!(tracker.best_dataset_index(), 0);
    assert_eq!(tracker.best_distance(), 4.0);

    tracker.submit_y(7.0, 52.0, 1);
    assert_eq!(tracker.best_point(), DataPoint::new(3.0, 7.0));
    assert_eq!(tracker.best_dataset_index(), 1);
    assert_eq!(tracker.best_distance(), 2.0);

    // farther on x than the current best: no change
    tracker.submit_x(9.0, 97.0, 2);
    assert_eq!(tracker.best_point(), DataPoint::new(3.0, 7.0));
    assert_eq!(tracker.best_dataset_index(), 1);
}

#[test]
fn nan_candidates_never_win() {
    let mut tracker = ProximityTracker::new(DistanceMetric::DeviceSpace);
    tracker.set_anchor(Some(DevicePoint::new(0.0, 0.0)));

    tracker.submit_point(1.0, 1.0, 7, f64::NAN, 0.0, PlotOrientation::Vertical);
    tracker.submit_x(1.0, f64::NAN, 7);
    tracker.submit_y(1.0, f64::NAN, 7);
    assert!(tracker.best_distance().is_infinite());
    assert_eq!(tracker.best_dataset_index(), 0);

    tracker.submit_point(2.0, 2.0, 1, 3.0, 4.0, PlotOrientation::Vertical);
    tracker.submit_point(9.0, 9.0, 8, 0.0, f64::NAN, PlotOrientation::Vertical);
    assert_eq!(tracker.best_point(), DataPoint::new(2.0, 2.0));
    assert_eq!(tracker.best_distance(), 25.0);
}

#[test]
fn seeded_distance_filters_farther_candidates() {
    let mut tracker = ProximityTracker::new(DistanceMetric::DeviceSpace);
    tracker.set_anchor(Some(DevicePoint::new(0.0, 0.0)));
    tracker.set_best_distance(9.0);

    tracker.submit_point(1.0, 1.0, 1, 3.0, 0.0, PlotOrientation::Vertical);
    assert_eq!(tracker.best_distance(), 9.0);
    assert_eq!(tracker.best_dataset_index(), 0);

    tracker.submit_point(2.0, 2.0, 2, 2.0, 0.0, PlotOrientation::Vertical);
    assert_eq!(tracker.best_distance(), 4.0);
    assert_eq!(tracker.best_dataset_index(), 2);
}

#[test]
fn reset_starts_fresh_search_and_keeps_anchor() {
    let mut tracker = ProximityTracker::new(DistanceMetric::DeviceSpace);
    tracker.set_anchor(Some(DevicePoint::new(5.0, 5.0)));
    tracker.submit_point(1.0, 1.0, 0, 5.0, 5.0, PlotOrientation::Vertical);
    assert_eq!(tracker.best_distance(), 0.0);

    tracker.reset();
    assert!(tracker.best_distance().is_infinite());
    assert_eq!(tracker.anchor(), Some(DevicePoint::new(5.0, 5.0)));

    tracker.submit_point(2.0, 2.0, 1, 8.0, 9.0, PlotOrientation::Vertical);
    assert_eq!(tracker.best_distance(), 25.0);
    assert_eq!(tracker.best_dataset_index(), 1);
}

#[test]
fn anchor_with_transform_sets_both_spaces() {
    let projection = XyProjection::new(
        LinearScale::new(0.0, 10.0).expect("domain"),
        LinearScale::new(0.0, 10.0).expect("range"),
        DeviceRect::new(0.0, 0.0, 100.0, 100.0),
        PlotOrientation::Vertical,
    )
    .expect("projection");

    let mut tracker = ProximityTracker::new(DistanceMetric::DataSpace);
    tracker
        .set_anchor_with(DevicePoint::new(50.0, 25.0), &projection)
        .expect("anchor");

    assert_eq!(tracker.anchor(), Some(DevicePoint::new(50.0, 25.0)));
    assert_relative_eq!(tracker.anchor_data().x, 5.0);
    assert_relative_eq!(tracker.anchor_data().y, 7.5);

    tracker.submit_point(5.0, 7.0, 0, 0.0, 0.0, PlotOrientation::Vertical);
    assert_relative_eq!(tracker.best_distance(), 0.25);
}

#[test]
fn failed_transform_leaves_anchors_untouched() {
    let projection = XyProjection::new(
        LinearScale::new(0.0, 10.0).expect("domain"),
        LinearScale::new(0.0, 10.0).expect("range"),
        DeviceRect::new(0.0, 0.0, 100.0, 100.0),
        PlotOrientation::Vertical,
    )
    .expect("projection");

    let mut tracker = ProximityTracker::new(DistanceMetric::DataSpace);
    tracker.set_anchor_data(1.0, 2.0);
    let err = tracker
        .set_anchor_with(DevicePoint::new(f64::NAN, 0.0), &projection)
        .expect_err("nan anchor must fail");

    assert!(format!("{err}").contains("pixel"));
    assert_eq!(tracker.anchor(), None);
    assert_eq!(tracker.anchor_data(), DataPoint::new(1.0, 2.0));
}

#[test]
fn data_anchor_is_not_synchronized_with_device_anchor() {
    let mut tracker = ProximityTracker::new(DistanceMetric::DataSpace);
    tracker.set_anchor_data(3.0, 4.0);
    tracker.set_anchor(Some(DevicePoint::new(300.0, 400.0)));
    assert_eq!(tracker.anchor_data(), DataPoint::new(3.0, 4.0));

    // device coordinates are irrelevant in data space
    tracker.submit_point(3.0, 4.0, 0, 0.0, 0.0, PlotOrientation::Horizontal);
    assert_eq!(tracker.best_distance(), 0.0);
}
