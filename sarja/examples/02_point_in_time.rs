use std::sync::Arc;

use chrono::NaiveDate;
use sarja::{DataQuery, Sarja};
use sarja_mock::MockBackend;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let engine = Sarja::builder()
        .with_backend(Arc::new(MockBackend::new()))
        .build()?;

    // The fixture CPI value for June 2021 was revised twice after its flash
    // publication. Compare the current view with two historical cutoffs.
    let window = DataQuery::builder().start(d(2021, 6, 1)).end(d(2021, 6, 30));

    let current = engine.data("MOCK.CPI.M", window.build()?).await?;
    let flash = engine
        .data("MOCK.CPI.M", window.as_of(d(2021, 7, 20)).build()?)
        .await?;
    let first_revision = engine
        .data("MOCK.CPI.M", window.as_of(d(2021, 8, 31)).build()?)
        .await?;

    println!("2021-06 CPI as known today:        {:?}", current.all_points[0].value);
    println!("2021-06 CPI as of 2021-07-20:      {:?}", flash.all_points[0].value);
    println!("2021-06 CPI as of 2021-08-31:      {:?}", first_revision.all_points[0].value);

    Ok(())
}
