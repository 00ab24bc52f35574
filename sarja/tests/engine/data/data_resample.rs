use sarja::{DataQuery, Frequency, Observation};

use crate::helpers::{MockBackend, d, engine, meta, monthly_points};

#[tokio::test]
async fn monthly_series_resamples_to_quarter_ends() {
    let backend = MockBackend::builder()
        .returns_metadata_ok(meta("CPI.TEST", Frequency::Monthly))
        .returns_points_ok(monthly_points(6))
        .build();
    let engine = engine(backend);

    let query = DataQuery::builder()
        .frequency(Frequency::Quarterly)
        .build()
        .unwrap();
    let out = engine.data("CPI.TEST", query).await.unwrap();

    assert_eq!(out.envelope.freq, Frequency::Quarterly);
    assert_eq!(
        out.all_points,
        vec![
            Observation::new(d(2020, 3, 31), Some(3.0)),
            Observation::new(d(2020, 6, 30), Some(6.0)),
        ]
    );
}

#[tokio::test]
async fn native_frequency_request_skips_resampling() {
    let backend = MockBackend::builder()
        .returns_metadata_ok(meta("CPI.TEST", Frequency::Monthly))
        .returns_points_ok(monthly_points(6))
        .build();
    let engine = engine(backend);

    let query = DataQuery::builder()
        .frequency(Frequency::Native)
        .build()
        .unwrap();
    let out = engine.data("CPI.TEST", query).await.unwrap();

    assert_eq!(out.envelope.freq, Frequency::Monthly);
    assert_eq!(out.all_points, monthly_points(6));
}

#[tokio::test]
async fn matching_explicit_frequency_also_skips_resampling() {
    let backend = MockBackend::builder()
        .returns_metadata_ok(meta("CPI.TEST", Frequency::Monthly))
        .returns_points_ok(monthly_points(6))
        .build();
    let engine = engine(backend);

    let query = DataQuery::builder()
        .frequency(Frequency::Monthly)
        .build()
        .unwrap();
    let out = engine.data("CPI.TEST", query).await.unwrap();
    assert_eq!(out.all_points, monthly_points(6));
}

#[tokio::test]
async fn monthly_series_resamples_to_annual_year_ends() {
    let backend = MockBackend::builder()
        .returns_metadata_ok(meta("CPI.TEST", Frequency::Monthly))
        .returns_points_ok(monthly_points(24))
        .build();
    let engine = engine(backend);

    let query = DataQuery::builder()
        .frequency(Frequency::Annual)
        .build()
        .unwrap();
    let out = engine.data("CPI.TEST", query).await.unwrap();

    assert_eq!(
        out.all_points,
        vec![
            Observation::new(d(2020, 12, 31), Some(12.0)),
            Observation::new(d(2021, 12, 31), Some(24.0)),
        ]
    );
}
