use sarja::{DataQuery, Frequency, Transform};

use crate::helpers::{MockBackend, engine, meta, monthly_points};

fn backend_with_24_points() -> std::sync::Arc<MockBackend> {
    MockBackend::builder()
        .returns_metadata_ok(meta("CPI.TEST", Frequency::Monthly))
        .returns_points_ok(monthly_points(24))
        .build()
}

#[tokio::test]
async fn page_two_of_five_slices_points_six_through_ten() {
    let engine = engine(backend_with_24_points());
    let query = DataQuery::builder().page(2).page_size(5).build().unwrap();

    let out = engine.data("CPI.TEST", query).await.unwrap();
    let env = &out.envelope;

    assert_eq!(env.point_count, 5);
    assert_eq!(env.total_points, 24);
    assert_eq!(env.total_pages, 5);
    assert!(env.has_more);
    let values: Vec<Option<f64>> = env.points.iter().map(|t| t.1).collect();
    assert_eq!(
        values,
        vec![Some(6.0), Some(7.0), Some(8.0), Some(9.0), Some(10.0)]
    );
    // The full-sequence bounds are unaffected by the page window.
    assert_eq!(env.start_date, out.all_points.first().map(|p| p.date));
    assert_eq!(env.end_date, out.all_points.last().map(|p| p.date));
}

#[tokio::test]
async fn page_window_is_stable_across_transforms() {
    let engine = engine(backend_with_24_points());
    for transform in [Transform::AsIs, Transform::Diff, Transform::Yoy] {
        let query = DataQuery::builder()
            .page(2)
            .page_size(5)
            .transform(transform)
            .build()
            .unwrap();
        let out = engine.data("CPI.TEST", query).await.unwrap();
        let dates: Vec<_> = out.envelope.points.iter().map(|t| t.0).collect();
        let expected: Vec<_> = monthly_points(24)[5..10].iter().map(|p| p.date).collect();
        assert_eq!(dates, expected, "window moved under {transform}");
    }
}

#[tokio::test]
async fn has_more_tracks_the_remaining_points() {
    let engine = engine(backend_with_24_points());
    for (page, expect_more) in [(1, true), (4, true), (5, false)] {
        let query = DataQuery::builder().page(page).page_size(5).build().unwrap();
        let out = engine.data("CPI.TEST", query).await.unwrap();
        let env = &out.envelope;
        assert_eq!(env.has_more, expect_more, "page {page}");
        assert_eq!(
            env.has_more,
            (u64::from(env.page) * u64::from(env.page_size)) < env.total_points as u64,
        );
    }
}

#[tokio::test]
async fn final_partial_page_holds_the_remainder() {
    let engine = engine(backend_with_24_points());
    let query = DataQuery::builder().page(5).page_size(5).build().unwrap();
    let out = engine.data("CPI.TEST", query).await.unwrap();
    assert_eq!(out.envelope.point_count, 4);
    let values: Vec<Option<f64>> = out.envelope.points.iter().map(|t| t.1).collect();
    assert_eq!(values, vec![Some(21.0), Some(22.0), Some(23.0), Some(24.0)]);
}

#[tokio::test]
async fn pages_past_the_end_are_empty_not_errors() {
    let engine = engine(backend_with_24_points());
    let query = DataQuery::builder().page(9).page_size(5).build().unwrap();
    let out = engine.data("CPI.TEST", query).await.unwrap();
    assert_eq!(out.envelope.point_count, 0);
    assert_eq!(out.envelope.total_points, 24);
    assert!(!out.envelope.has_more);
}
