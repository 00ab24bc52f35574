use sarja::{Frequency, SarjaError};

use crate::helpers::{MockBackend, d, engine, meta};

#[tokio::test]
async fn series_returns_store_metadata() {
    let backend = MockBackend::builder()
        .returns_metadata_ok(meta("GDP.TEST", Frequency::Quarterly))
        .returns_points_ok(Vec::new())
        .build();
    let engine = engine(backend);

    let got = engine.series("GDP.TEST").await.unwrap();
    assert_eq!(got.id, "GDP.TEST");
    assert_eq!(got.native_frequency, Frequency::Quarterly);
    assert_eq!(got.coverage_start, Some(d(2020, 1, 1)));
}

#[tokio::test]
async fn series_propagates_not_found() {
    let backend = MockBackend::builder()
        .with_metadata_fn(|id| Err(SarjaError::not_found(format!("series {id}"))))
        .returns_points_ok(Vec::new())
        .build();
    let engine = engine(backend);

    let err = engine.series("MISSING.1").await.unwrap_err();
    assert!(matches!(err, SarjaError::NotFound { .. }));
}

#[tokio::test]
async fn series_rejects_malformed_ids_without_store_calls() {
    let backend = MockBackend::builder()
        .with_metadata_fn(|_| panic!("store must not be reached"))
        .returns_points_ok(Vec::new())
        .build();
    let engine = engine(backend);

    let err = engine.series("not valid").await.unwrap_err();
    assert!(matches!(err, SarjaError::InvalidParameter(_)));
}
