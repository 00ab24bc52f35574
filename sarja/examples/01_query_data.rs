use std::sync::Arc;

use sarja::{DataQuery, Frequency, Sarja, Transform};
use sarja_mock::MockBackend;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // 1. Build the engine and register the fixture backend.
    let engine = Sarja::builder()
        .with_backend(Arc::new(MockBackend::new()))
        .build()?;

    // 2. Ask for the fixture CPI series as quarterly year-over-year rates.
    let query = DataQuery::builder()
        .frequency(Frequency::Quarterly)
        .transform(Transform::Yoy)
        .page_size(8)
        .build()?;

    println!("Querying MOCK.CPI.M...");
    let result = engine.data("MOCK.CPI.M", query).await?;

    // 3. Print the validator token and the boundary-ready envelope.
    println!("fingerprint: {}", result.fingerprint);
    println!("{}", serde_json::to_string_pretty(&result.envelope)?);

    Ok(())
}
