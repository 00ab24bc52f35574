use std::time::Duration;

use sarja::{DataQuery, Frequency, Sarja, SarjaError};

use crate::helpers::{MockBackend, d, engine, meta, monthly_points};

#[tokio::test]
async fn unknown_series_surfaces_not_found() {
    let backend = MockBackend::builder()
        .with_metadata_fn(|id| Err(SarjaError::not_found(format!("series {id}"))))
        .returns_points_ok(Vec::new())
        .build();
    let engine = engine(backend);

    let err = engine
        .data("NOPE.1", DataQuery::builder().build().unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, SarjaError::NotFound { .. }));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn malformed_series_id_fails_before_any_store_call() {
    let backend = MockBackend::builder()
        .with_metadata_fn(|_| panic!("store must not be reached"))
        .with_range_fn(|_, _, _| panic!("store must not be reached"))
        .build();
    let engine = engine(backend);

    let err = engine
        .data("bad id!", DataQuery::builder().build().unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, SarjaError::InvalidParameter(_)));
}

#[tokio::test]
async fn oversized_page_size_fails_before_any_store_call() {
    let backend = MockBackend::builder()
        .with_metadata_fn(|_| panic!("store must not be reached"))
        .with_range_fn(|_, _, _| panic!("store must not be reached"))
        .build();
    let engine = engine(backend);

    let query = DataQuery::builder().page_size(5000).build().unwrap();
    let err = engine.data("CPI.TEST", query).await.unwrap_err();
    assert!(matches!(err, SarjaError::InvalidParameter(_)));
}

#[tokio::test]
async fn page_size_bound_is_configurable() {
    let backend = MockBackend::builder()
        .returns_metadata_ok(meta("CPI.TEST", Frequency::Monthly))
        .returns_points_ok(monthly_points(3))
        .build();
    let engine = Sarja::builder()
        .with_backend(backend)
        .max_page_size(10)
        .build()
        .unwrap();

    let ok = DataQuery::builder().page_size(10).build().unwrap();
    assert!(engine.data("CPI.TEST", ok).await.is_ok());

    let too_big = DataQuery::builder().page_size(11).build().unwrap();
    let err = engine.data("CPI.TEST", too_big).await.unwrap_err();
    assert!(matches!(err, SarjaError::InvalidParameter(_)));
}

#[tokio::test]
async fn resolved_inverted_range_is_rejected_before_the_point_fetch() {
    // Explicit start after the coverage end the series resolves to.
    let backend = MockBackend::builder()
        .returns_metadata_ok(meta("CPI.TEST", Frequency::Monthly))
        .with_range_fn(|_, _, _| panic!("point store must not be reached"))
        .build();
    let engine = engine(backend);

    let query = DataQuery::builder().start(d(2022, 6, 1)).build().unwrap();
    let err = engine.data("CPI.TEST", query).await.unwrap_err();
    match err {
        SarjaError::InvalidRange { start, end } => {
            assert_eq!(start, d(2022, 6, 1));
            assert_eq!(end, d(2021, 12, 31));
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn series_without_coverage_needs_explicit_dates() {
    let mut bare = meta("CPI.TEST", Frequency::Monthly);
    bare.coverage_start = None;
    bare.coverage_end = None;
    let backend = MockBackend::builder()
        .returns_metadata_ok(bare)
        .returns_points_ok(monthly_points(3))
        .build();
    let engine = engine(backend);

    let err = engine
        .data("CPI.TEST", DataQuery::builder().build().unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, SarjaError::IncompleteCoverage { .. }));

    // Explicit dates satisfy the same series.
    let query = DataQuery::builder()
        .start(d(2020, 1, 1))
        .end(d(2020, 6, 30))
        .build()
        .unwrap();
    assert!(engine.data("CPI.TEST", query).await.is_ok());
}

#[tokio::test]
async fn metadata_without_a_concrete_frequency_is_a_data_error() {
    let backend = MockBackend::builder()
        .returns_metadata_ok(meta("CPI.TEST", Frequency::Native))
        .returns_points_ok(monthly_points(3))
        .build();
    let engine = engine(backend);

    let err = engine
        .data("CPI.TEST", DataQuery::builder().build().unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, SarjaError::Data(_)));
}

#[tokio::test]
async fn point_store_failures_are_tagged_as_upstream() {
    let backend = MockBackend::builder()
        .returns_metadata_ok(meta("CPI.TEST", Frequency::Monthly))
        .with_range_fn(|_, _, _| Err(SarjaError::Data("corrupt row".into())))
        .build();
    let engine = engine(backend);

    let err = engine
        .data("CPI.TEST", DataQuery::builder().build().unwrap())
        .await
        .unwrap_err();
    match err {
        SarjaError::UpstreamUnavailable { ref store, .. } => {
            assert_eq!(store, "points");
            assert!(err.is_retryable());
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn slow_stores_time_out_as_upstream_unavailable() {
    let backend = MockBackend::builder()
        .delay(Duration::from_millis(100))
        .returns_metadata_ok(meta("CPI.TEST", Frequency::Monthly))
        .returns_points_ok(monthly_points(3))
        .build();
    let engine = Sarja::builder()
        .with_backend(backend)
        .store_timeout(Some(Duration::from_millis(5)))
        .build()
        .unwrap();

    let err = engine
        .data("CPI.TEST", DataQuery::builder().build().unwrap())
        .await
        .unwrap_err();
    match err {
        SarjaError::UpstreamUnavailable { ref store, ref msg } => {
            assert_eq!(store, "metadata");
            assert!(msg.contains("timed out"));
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn build_rejects_capability_gaps() {
    let no_points = MockBackend::builder()
        .returns_metadata_ok(meta("CPI.TEST", Frequency::Monthly))
        .build();
    let err = Sarja::builder().with_backend(no_points).build().unwrap_err();
    assert!(matches!(err, SarjaError::InvalidParameter(_)));

    let err = Sarja::builder().build().unwrap_err();
    assert!(matches!(err, SarjaError::InvalidParameter(_)));
}
