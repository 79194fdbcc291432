use chart_plot::api::{PLOT_CONFIG_JSON_SCHEMA_V1, PlotConfig};
use chart_plot::core::{DatasetRenderingOrder, PlotOrientation, SeriesRenderingOrder};
use chart_plot::interaction::DistanceMetric;

#[test]
fn pretty_json_round_trips_through_envelope() {
    let config = PlotConfig::default()
        .with_orientation(PlotOrientation::Horizontal)
        .with_distance_metric(DistanceMetric::DataSpace)
        .with_series_rendering_order(SeriesRenderingOrder::Forward)
        .with_crosshair_snap_threshold_px(Some(8.0));

    let json = config.to_json_pretty().expect("serialize");
    assert!(json.contains("\"schema_version\": 1"));
    assert_eq!(PlotConfig::from_json_str(&json).expect("parse"), config);
}

#[test]
fn bare_config_fills_missing_fields_with_defaults() {
    let config = PlotConfig::from_json_str(
        r#"{ "orientation": "Horizontal", "dataset_rendering_order": "Forward" }"#,
    )
    .expect("parse");

    assert_eq!(config.orientation, PlotOrientation::Horizontal);
    assert_eq!(config.dataset_rendering_order, DatasetRenderingOrder::Forward);
    assert_eq!(config.distance_metric, DistanceMetric::DeviceSpace);
    assert_eq!(config.crosshair_snap_threshold_px, None);
    assert!(config.domain_crosshair_locked_on_data);
}

#[test]
fn unknown_schema_version_is_rejected() {
    let input = format!(
        r#"{{ "schema_version": {}, "config": {{}} }}"#,
        PLOT_CONFIG_JSON_SCHEMA_V1 + 1
    );
    let err = PlotConfig::from_json_str(&input).expect_err("version must fail");
    assert!(format!("{err}").contains("unsupported plot config schema version"));
}

#[test]
fn loaded_config_is_validated() {
    let err = PlotConfig::from_json_str(r#"{ "crosshair_snap_threshold_px": -2.0 }"#)
        .expect_err("negative threshold must fail");
    assert!(format!("{err}").contains("invalid config"));
}

#[test]
fn malformed_json_is_reported() {
    let err = PlotConfig::from_json_str("{ not json").expect_err("parse must fail");
    assert!(format!("{err}").contains("failed to parse plot config"));
}
