use chrono::{NaiveDate, TimeZone, Utc};
use sarja_core::types::{Frequency, SeriesMetadata};

pub fn by_id(id: &str) -> Option<SeriesMetadata> {
    match id {
        "MOCK.CPI.M" => Some(SeriesMetadata {
            id: "MOCK.CPI.M".to_string(),
            name: Some("Consumer price index, all items".to_string()),
            description: Some("Fixture consumer price index, 2020-2021, with revisions for mid-2021.".to_string()),
            native_frequency: Frequency::Monthly,
            unit: Some("index".to_string()),
            geography: Some("FI".to_string()),
            source: Some("Mock Statistics Office".to_string()),
            is_adjusted: false,
            coverage_start: date(2020, 1, 31),
            coverage_end: date(2021, 12, 31),
            last_modified: Some(Utc.with_ymd_and_hms(2022, 1, 14, 8, 30, 0).unwrap()),
        }),
        "MOCK.GDP.Q" => Some(SeriesMetadata {
            id: "MOCK.GDP.Q".to_string(),
            name: Some("Gross domestic product, chained volume".to_string()),
            description: None,
            native_frequency: Frequency::Quarterly,
            unit: Some("EUR million".to_string()),
            geography: Some("FI".to_string()),
            source: Some("Mock Statistics Office".to_string()),
            is_adjusted: true,
            coverage_start: date(2019, 3, 31),
            coverage_end: date(2021, 12, 31),
            last_modified: Some(Utc.with_ymd_and_hms(2022, 2, 28, 10, 0, 0).unwrap()),
        }),
        "MOCK.RATE.D" => Some(SeriesMetadata {
            id: "MOCK.RATE.D".to_string(),
            name: Some("Overnight policy rate".to_string()),
            description: None,
            native_frequency: Frequency::Daily,
            unit: Some("percent".to_string()),
            geography: None,
            source: Some("Mock Central Bank".to_string()),
            is_adjusted: false,
            coverage_start: date(2021, 1, 1),
            coverage_end: date(2021, 3, 31),
            last_modified: Some(Utc.with_ymd_and_hms(2021, 4, 1, 6, 0, 0).unwrap()),
        }),
        // A catalog entry without coverage bounds, for range-resolution tests.
        "MOCK.EMPTY" => Some(SeriesMetadata {
            id: "MOCK.EMPTY".to_string(),
            name: Some("Series without coverage bounds".to_string()),
            description: None,
            native_frequency: Frequency::Monthly,
            unit: None,
            geography: None,
            source: None,
            is_adjusted: false,
            coverage_start: None,
            coverage_end: None,
            last_modified: None,
        }),
        _ => None,
    }
}

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}
