// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::{Map, Value, json};
use wealthline::error::SeriesError;
use wealthline::models::TimePoint;
use wealthline::series::{max_points, normalize, normalize_value, reduce, stride};

fn obj(v: Value) -> Map<String, Value> {
    v.as_object().unwrap().clone()
}

fn daily_series(n: usize) -> Vec<TimePoint> {
    let start = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap();
    (0..n)
        .map(|i| TimePoint {
            date: start + chrono::Duration::days(i as i64),
            value: Decimal::from(i as i64),
        })
        .collect()
}

#[test]
fn normalize_rounds_to_two_places() {
    let points = normalize(&obj(json!({ "2023-03-11": 37.12345 }))).unwrap();
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].value, Decimal::new(3712, 2));
    assert_eq!(points[0].value.to_string(), "37.12");
}

#[test]
fn normalize_rounds_midpoint_away_from_zero() {
    let points = normalize(&obj(json!({ "2023-03-11": "10.005", "2023-03-12": "-10.005" }))).unwrap();
    assert_eq!(points[0].value, Decimal::new(1001, 2));
    assert_eq!(points[1].value, Decimal::new(-1001, 2));
}

#[test]
fn normalize_sorts_by_date_regardless_of_key_order() {
    let raw = json!({
        "2023-03-15": 3,
        "2022-12-31": 1,
        "2023-01-02": "2.5",
    });
    let points = normalize(&obj(raw)).unwrap();
    let dates: Vec<String> = points.iter().map(|p| p.date.to_string()).collect();
    assert_eq!(dates, ["2022-12-31", "2023-01-02", "2023-03-15"]);
    assert_eq!(points[1].value, Decimal::new(25, 1));
}

#[test]
fn normalize_accepts_numeric_strings_and_scientific_notation() {
    let points = normalize(&obj(json!({ "2023-01-01": " 1200.456 ", "2023-01-02": "1.5e3" }))).unwrap();
    assert_eq!(points[0].value, Decimal::new(120046, 2));
    assert_eq!(points[1].value, Decimal::new(1500, 0));
}

#[test]
fn normalize_names_the_key_of_a_bad_value() {
    let err = normalize(&obj(json!({ "2023-01-01": 1, "2023-01-02": "n/a" }))).unwrap_err();
    assert_eq!(err.key(), "2023-01-02");
    assert!(matches!(err, SeriesError::DataFormat { .. }));
    assert!(err.to_string().contains("2023-01-02"));

    let err = normalize(&obj(json!({ "2023-01-03": null }))).unwrap_err();
    assert_eq!(err.key(), "2023-01-03");

    let err = normalize(&obj(json!({ "2023-01-04": "NaN" }))).unwrap_err();
    assert_eq!(err.key(), "2023-01-04");
}

#[test]
fn normalize_flushes_tiny_values_to_zero() {
    let points = normalize(&obj(json!({ "2023-01-01": "1e-30", "2023-01-02": "-2.5e-40" }))).unwrap();
    assert!(points[0].value.is_zero());
    assert!(points[1].value.is_zero());
}

#[test]
fn normalize_reports_values_too_large_for_decimal() {
    let err = normalize(&obj(json!({ "2023-01-01": 5, "2023-01-02": 1e30 }))).unwrap_err();
    assert_eq!(err.key(), "2023-01-02");
    assert!(matches!(err, SeriesError::DataFormat { .. }));
    assert!(err.to_string().contains("out of range"));
}

#[test]
fn normalize_rejects_keys_that_are_not_dates() {
    let err = normalize(&obj(json!({ "last week": 10 }))).unwrap_err();
    assert_eq!(err.key(), "last week");
}

#[test]
fn normalize_rejects_two_keys_for_the_same_day() {
    let err = normalize(&obj(json!({ "2023-01-05": 1, " 2023-01-05": 2 }))).unwrap_err();
    assert_eq!(err, SeriesError::DuplicateDate("2023-01-05".to_string()));
}

#[test]
fn normalize_value_requires_an_object() {
    assert!(normalize_value(&json!([1, 2, 3])).is_err());
    assert!(normalize_value(&json!({})).unwrap().is_empty());
}

#[test]
fn max_points_decays_to_floor() {
    assert_eq!(max_points(0), 250);
    assert_eq!(max_points(1), 249);
    assert_eq!(max_points(200), 226);
    assert_eq!(max_points(1000), 151);
    assert_eq!(max_points(2000), 100);
    assert_eq!(max_points(1_000_000), 100);
    for n in (0..20_000).step_by(97) {
        assert!(max_points(n) >= 100);
        assert!(max_points(n) <= 250);
    }
}

#[test]
fn reduce_is_identity_at_or_below_cap() {
    assert!(reduce::<TimePoint>(&[]).is_empty());
    let one = daily_series(1);
    assert_eq!(reduce(&one), one);
    let at_cap = daily_series(223);
    assert_eq!(stride(223), 1);
    assert_eq!(reduce(&at_cap), at_cap);
}

#[test]
fn reduce_samples_at_fixed_stride() {
    let series = daily_series(1000);
    assert_eq!(stride(1000), 7);
    let reduced = reduce(&series);
    assert_eq!(reduced.len(), 143);
    for (k, p) in reduced.iter().enumerate() {
        assert_eq!(*p, series[k * 7]);
    }
}

#[test]
fn reduce_may_drop_the_last_point() {
    let series = daily_series(224);
    let reduced = reduce(&series);
    assert_eq!(reduced.len(), 112);
    assert_eq!(reduced[0], series[0]);
    assert_ne!(reduced.last(), series.last());

    let series = daily_series(225);
    let reduced = reduce(&series);
    assert_eq!(reduced.last(), series.last());
}

#[test]
fn reduce_respects_cap_and_keeps_first_point() {
    for n in (1..6000).step_by(53) {
        let series = daily_series(n);
        let reduced = reduce(&series);
        assert!(reduced.len() <= max_points(n), "n={}", n);
        assert_eq!(reduced[0], series[0], "n={}", n);
        assert!(stride(n) >= 1);
    }
}
