use chrono::{Duration, NaiveDate, TimeZone, Utc};
use sarja_core::types::{Observation, Revision};

pub fn current(series_id: &str) -> Option<Vec<Observation>> {
    match series_id {
        "MOCK.CPI.M" => Some(build(vec![
            ("2020-01-31", Some(100.0)),
            ("2020-02-29", Some(100.3)),
            ("2020-03-31", Some(100.1)),
            ("2020-04-30", Some(99.8)),
            ("2020-05-31", Some(100.0)),
            ("2020-06-30", Some(100.4)),
            ("2020-07-31", Some(100.9)),
            ("2020-08-31", Some(101.0)),
            ("2020-09-30", Some(101.2)),
            ("2020-10-31", Some(101.5)),
            ("2020-11-30", None),
            ("2020-12-31", Some(101.9)),
            ("2021-01-31", Some(102.2)),
            ("2021-02-28", Some(102.6)),
            ("2021-03-31", None),
            ("2021-04-30", Some(103.4)),
            ("2021-05-31", Some(103.9)),
            ("2021-06-30", Some(104.6)),
            ("2021-07-31", Some(104.9)),
            ("2021-08-31", Some(105.1)),
            ("2021-09-30", Some(105.6)),
            ("2021-10-31", Some(106.0)),
            ("2021-11-30", Some(106.3)),
            ("2021-12-31", Some(106.9)),
        ])),
        "MOCK.GDP.Q" => Some(build(vec![
            ("2019-03-31", Some(58_100.0)),
            ("2019-06-30", Some(58_650.0)),
            ("2019-09-30", Some(58_900.0)),
            ("2019-12-31", Some(59_200.0)),
            ("2020-03-31", Some(58_300.0)),
            ("2020-06-30", Some(55_400.0)),
            ("2020-09-30", Some(57_800.0)),
            ("2020-12-31", Some(58_600.0)),
            ("2021-03-31", Some(59_000.0)),
            ("2021-06-30", Some(60_100.0)),
            ("2021-09-30", Some(60_700.0)),
            ("2021-12-31", Some(61_200.0)),
        ])),
        "MOCK.RATE.D" => Some(policy_rate()),
        _ => None,
    }
}

pub fn revisions(series_id: &str) -> Vec<Revision> {
    match series_id {
        "MOCK.CPI.M" => vec![
            // 2021-06 was published flash, then revised twice before the
            // current 104.6 landed.
            revision("2021-06-30", Some(104.1), 2021, 7, 15),
            revision("2021-06-30", Some(104.4), 2021, 8, 13),
            revision("2021-07-31", Some(104.7), 2021, 8, 15),
        ],
        _ => Vec::new(),
    }
}

fn build(rows: Vec<(&str, Option<f64>)>) -> Vec<Observation> {
    rows.into_iter()
        .map(|(date, value)| Observation::new(parse_date(date), value))
        .collect()
}

fn revision(date: &str, value: Option<f64>, ry: i32, rm: u32, rd: u32) -> Revision {
    Revision {
        date: parse_date(date),
        value,
        revision_time: Utc.with_ymd_and_hms(ry, rm, rd, 7, 0, 0).unwrap(),
    }
}

fn parse_date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

// 90 daily observations for Q1 2021; the rate steps up on 2021-02-15.
fn policy_rate() -> Vec<Observation> {
    let start = parse_date("2021-01-01");
    let step = parse_date("2021-02-15");
    (0..90)
        .map(|i| {
            let date = start + Duration::days(i);
            let rate = if date < step { 0.25 } else { 0.5 };
            Observation::new(date, Some(rate))
        })
        .collect()
}
