// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{SeriesError, SeriesResult};
use crate::models::TimePoint;
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::{Map, Value};
use std::str::FromStr;

pub const MAX_POINTS_CEILING: usize = 250;
pub const MAX_POINTS_FLOOR: usize = 100;
const DECAY_RATE: f64 = 0.0005;

// Key order from the backend is not chronological.
pub fn normalize(raw: &Map<String, Value>) -> SeriesResult<Vec<TimePoint>> {
    let mut points = Vec::with_capacity(raw.len());
    for (key, value) in raw {
        let date = parse_key(key)?;
        let value = parse_value(key, value)?;
        points.push(TimePoint {
            date,
            value: value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        });
    }
    points.sort_by_key(|p| p.date);
    if let Some(dup) = points.windows(2).find(|w| w[0].date == w[1].date) {
        return Err(SeriesError::DuplicateDate(dup[0].date.to_string()));
    }
    tracing::debug!(points = points.len(), "normalized series");
    Ok(points)
}

pub fn normalize_value(raw: &Value) -> SeriesResult<Vec<TimePoint>> {
    match raw {
        Value::Object(map) => normalize(map),
        other => Err(SeriesError::data_format(
            "",
            format!("expected an object of date -> value, got {}", kind(other)),
        )),
    }
}

fn parse_key(key: &str) -> SeriesResult<NaiveDate> {
    NaiveDate::parse_from_str(key.trim(), "%Y-%m-%d")
        .map_err(|_| SeriesError::data_format(key, "expected a YYYY-MM-DD date"))
}

fn parse_value(key: &str, raw: &Value) -> SeriesResult<Decimal> {
    let text = match raw {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        other => {
            return Err(SeriesError::data_format(
                key,
                format!("expected a number, got {}", kind(other)),
            ));
        }
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .or_else(|_| match text.parse::<f64>() {
            // below the 2dp rounding threshold
            Ok(f) if f.is_finite() && f.abs() < 0.005 => Ok(Decimal::ZERO),
            Ok(f) if f.is_finite() => Err(SeriesError::data_format(
                key,
                format!("'{}' is out of range", text),
            )),
            _ => Err(SeriesError::data_format(
                key,
                format!("'{}' is not a finite number", text),
            )),
        })
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

pub fn max_points(n: usize) -> usize {
    let decayed = (MAX_POINTS_CEILING as f64 * (-DECAY_RATE * n as f64).exp()).floor();
    (decayed as usize).max(MAX_POINTS_FLOOR)
}

pub fn stride(n: usize) -> usize {
    let cap = max_points(n);
    if n <= cap { 1 } else { n.div_ceil(cap) }
}

/// Keeps every `stride(n)`-th point from index 0. The last point survives
/// only when its index falls on the stride.
pub fn reduce<T: Clone>(points: &[T]) -> Vec<T> {
    let n = points.len();
    let step = stride(n);
    if step == 1 {
        return points.to_vec();
    }
    let kept: Vec<T> = points.iter().step_by(step).cloned().collect();
    tracing::debug!(input = n, kept = kept.len(), stride = step, "reduced series");
    kept
}
