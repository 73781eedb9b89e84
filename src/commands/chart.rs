// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::SeriesKind;
use crate::commands::source::series_points;
use crate::config::Config;
use crate::models::TimePoint;
use crate::scale::{ChartScale, OffsetPreset};
use crate::series::{max_points, reduce, stride};
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::{Result, anyhow};
use serde::Serialize;

pub fn handle(cfg: &Config, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("wealth", sub)) => show(cfg, sub, SeriesKind::Wealth)?,
        Some(("performance", sub)) => show(cfg, sub, SeriesKind::Performance)?,
        _ => {}
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct ChartData {
    pub input_points: usize,
    pub max_points: usize,
    pub stride: usize,
    pub preset: &'static str,
    pub scale: ChartScale,
    pub points: Vec<TimePoint>,
}

/// `--preset`, then the configured override, then the chart's own preset.
pub fn resolve_preset(cfg: &Config, sub: &clap::ArgMatches, kind: SeriesKind) -> Result<OffsetPreset> {
    if let Some(raw) = sub.try_get_one::<String>("preset").ok().flatten() {
        return raw.parse::<OffsetPreset>().map_err(|e| anyhow!(e));
    }
    Ok(cfg.offset_preset.unwrap_or(match kind {
        SeriesKind::Wealth => OffsetPreset::Wealth,
        SeriesKind::Performance => OffsetPreset::Performance,
    }))
}

pub fn prepare(cfg: &Config, sub: &clap::ArgMatches, kind: SeriesKind) -> Result<ChartData> {
    let points = series_points(cfg, sub, kind)?;
    let width = sub
        .try_get_one::<f64>("width")
        .ok()
        .flatten()
        .copied()
        .unwrap_or(cfg.chart_width);
    if !width.is_finite() || width <= 0.0 {
        return Err(anyhow!("Chart width must be a positive number, got {}", width));
    }
    let preset = resolve_preset(cfg, sub, kind)?;

    let n = points.len();
    let reduced = reduce(&points);
    let scale = ChartScale::compute(width, &reduced, &preset.policy());
    Ok(ChartData {
        input_points: n,
        max_points: max_points(n),
        stride: stride(n),
        preset: preset.as_str(),
        scale,
        points: reduced,
    })
}

fn show(cfg: &Config, sub: &clap::ArgMatches, kind: SeriesKind) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = prepare(cfg, sub, kind)?;
    if jsonl_flag {
        maybe_print_json(false, true, &data.points)?;
        return Ok(());
    }
    if maybe_print_json(json_flag, false, &data)? {
        return Ok(());
    }

    let rows: Vec<Vec<String>> = data
        .points
        .iter()
        .map(|p| vec![p.date.to_string(), fmt_money(&p.value)])
        .collect();
    println!("{}", pretty_table(&["Date", "Value"], rows));
    println!(
        "kept {} of {} points (cap {}, stride {}); spacing {:.2}px, y-offset {} [{}]",
        data.points.len(),
        data.input_points,
        data.max_points,
        data.stride,
        data.scale.spacing,
        data.scale.offset,
        data.preset
    );
    Ok(())
}
