// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::TimePoint;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const AXIS_GUTTER: f64 = 60.0;
pub const MIN_SPACING: f64 = 1.0;
pub const MAX_SPACING: f64 = 10.0;

pub fn spacing(width: f64, len: usize) -> f64 {
    let raw = (width - AXIS_GUTTER) / (len as f64 + 1.0);
    if raw.is_nan() {
        return MIN_SPACING;
    }
    raw.clamp(MIN_SPACING, MAX_SPACING)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValueRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl ValueRange {
    pub fn of(points: &[TimePoint]) -> Option<ValueRange> {
        let first = points.first()?.value;
        Some(points.iter().fold(
            ValueRange {
                min: first,
                max: first,
            },
            |acc, p| ValueRange {
                min: acc.min.min(p.value),
                max: acc.max.max(p.value),
            },
        ))
    }

    // saturates at Decimal::MAX
    pub fn span(&self) -> Decimal {
        self.max.saturating_sub(self.min)
    }
}

/// Offset is `min - margin * (max - min)`, optionally rounded half-up and
/// floored at zero. With `keep_negative_min` a negative minimum is returned as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetPolicy {
    pub margin: Decimal,
    pub keep_negative_min: bool,
    pub round: bool,
    pub floor_at_zero: bool,
}

impl OffsetPolicy {
    /// Wealth-over-time chart: `min < 0 ? min : round(min - 0.125 * range)`.
    pub const WEALTH: OffsetPolicy = OffsetPolicy {
        margin: Decimal::from_parts(125, 0, 0, false, 3),
        keep_negative_min: true,
        round: true,
        floor_at_zero: false,
    };

    /// Portfolio performance chart: `max(0, min - 0.3 * range)`.
    pub const PERFORMANCE: OffsetPolicy = OffsetPolicy {
        margin: Decimal::from_parts(3, 0, 0, false, 1),
        keep_negative_min: false,
        round: false,
        floor_at_zero: true,
    };

    pub fn offset(&self, range: &ValueRange) -> Decimal {
        if self.keep_negative_min && range.min < Decimal::ZERO {
            return range.min;
        }
        let mut offset = range
            .min
            .saturating_sub(self.margin.saturating_mul(range.span()));
        if self.round {
            // ties toward positive infinity
            offset = offset.saturating_add(Decimal::new(5, 1)).floor();
        }
        if self.floor_at_zero && offset < Decimal::ZERO {
            offset = Decimal::ZERO;
        }
        offset
    }
}

impl Default for OffsetPolicy {
    fn default() -> Self {
        OffsetPolicy::WEALTH
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetPreset {
    #[default]
    Wealth,
    Performance,
}

impl OffsetPreset {
    pub fn policy(self) -> OffsetPolicy {
        match self {
            OffsetPreset::Wealth => OffsetPolicy::WEALTH,
            OffsetPreset::Performance => OffsetPolicy::PERFORMANCE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OffsetPreset::Wealth => "wealth",
            OffsetPreset::Performance => "performance",
        }
    }
}

impl FromStr for OffsetPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wealth" => Ok(OffsetPreset::Wealth),
            "performance" => Ok(OffsetPreset::Performance),
            other => Err(format!(
                "Unknown offset preset '{}' (use wealth|performance)",
                other
            )),
        }
    }
}

pub fn axis_offset(points: &[TimePoint], policy: &OffsetPolicy) -> Decimal {
    ValueRange::of(points)
        .map(|r| policy.offset(&r))
        .unwrap_or(Decimal::ZERO)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartScale {
    pub spacing: f64,
    pub offset: Decimal,
    pub range: Option<ValueRange>,
}

impl ChartScale {
    pub fn compute(width: f64, points: &[TimePoint], policy: &OffsetPolicy) -> ChartScale {
        let range = ValueRange::of(points);
        ChartScale {
            spacing: spacing(width, points.len()),
            offset: range.map(|r| policy.offset(&r)).unwrap_or(Decimal::ZERO),
            range,
        }
    }
}
