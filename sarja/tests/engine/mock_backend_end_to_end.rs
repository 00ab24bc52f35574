use std::sync::Arc;

use sarja::{DataQuery, FillPolicy, Frequency, Sarja, SarjaError, Transform};
use sarja_mock::MockBackend;

use crate::helpers::d;

fn engine() -> Sarja {
    Sarja::builder()
        .with_backend(Arc::new(MockBackend::new()))
        .build()
        .expect("engine builds")
}

#[tokio::test]
async fn full_pipeline_runs_against_the_fixture_backend() {
    let engine = engine();
    let query = DataQuery::builder()
        .frequency(Frequency::Quarterly)
        .transform(Transform::Yoy)
        .fill(FillPolicy::ForwardFill)
        .build()
        .unwrap();

    let out = engine.data("MOCK.CPI.M", query).await.unwrap();
    // 24 fixture months collapse into 8 quarters.
    assert_eq!(out.envelope.total_points, 8);
    assert_eq!(out.envelope.freq, Frequency::Quarterly);
    // The first four quarters lack a year-earlier base, and Q1 2021 is null
    // because its closing month is a fixture gap.
    for i in 0..=4 {
        assert_eq!(out.all_points[i].value, None, "index {i}");
    }
    // Q2 2021 vs Q2 2020: (104.6 / 100.4 - 1) * 100, rounded at 1e-6.
    assert_eq!(out.all_points[5].value, Some(4.183267));
}

#[tokio::test]
async fn point_in_time_query_reconstructs_the_flash_estimate() {
    let engine = engine();
    let window = DataQuery::builder()
        .start(d(2021, 6, 1))
        .end(d(2021, 6, 30));

    let flash = engine
        .data("MOCK.CPI.M", window.as_of(d(2021, 7, 20)).build().unwrap())
        .await
        .unwrap();
    assert_eq!(flash.all_points[0].value, Some(104.1));

    let current = engine
        .data("MOCK.CPI.M", window.build().unwrap())
        .await
        .unwrap();
    assert_eq!(current.all_points[0].value, Some(104.6));
    assert_ne!(flash.fingerprint, current.fingerprint);
}

#[tokio::test]
async fn fixture_failures_surface_as_upstream_errors() {
    let engine = engine();
    let query = DataQuery::builder()
        .start(d(2020, 1, 1))
        .end(d(2020, 12, 31))
        .build()
        .unwrap();
    let err = engine.data("FAIL", query).await.unwrap_err();
    assert!(matches!(err, SarjaError::UpstreamUnavailable { .. }));
}

#[tokio::test]
async fn fixture_without_coverage_requires_explicit_dates() {
    let engine = engine();
    let err = engine
        .data("MOCK.EMPTY", DataQuery::builder().build().unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, SarjaError::IncompleteCoverage { .. }));
}

#[tokio::test]
async fn daily_fixture_resamples_to_month_ends() {
    let engine = engine();
    let query = DataQuery::builder()
        .frequency(Frequency::Monthly)
        .build()
        .unwrap();
    let out = engine.data("MOCK.RATE.D", query).await.unwrap();
    assert_eq!(out.envelope.total_points, 3);
    assert_eq!(out.all_points[0].date, d(2021, 1, 31));
    assert_eq!(out.all_points[2].value, Some(0.5));
}
