// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::SeriesKind;
use crate::commands::{chart, ledger};
use crate::config::Config;
use crate::ledger::signed_amount;
use anyhow::{Result, anyhow};
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Csv,
    Json,
}

fn parse_format(sub: &clap::ArgMatches) -> Result<Format> {
    let fmt = sub.get_one::<String>("format").unwrap().trim().to_lowercase();
    match fmt.as_str() {
        "csv" => Ok(Format::Csv),
        "json" => Ok(Format::Json),
        _ => Err(anyhow!("Unknown format: {} (use csv|json)", fmt)),
    }
}

pub fn handle(cfg: &Config, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("ledger", sub)) => export_ledger(cfg, sub),
        Some(("series", sub)) => export_series(cfg, sub),
        _ => Ok(()),
    }
}

fn export_ledger(cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = parse_format(sub)?;
    let out = sub.get_one::<String>("out").unwrap().trim();
    let perspective = sub.get_one::<i64>("account").copied();
    let days = ledger::query_days(cfg, sub)?;

    match fmt {
        Format::Csv => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "date",
                "id",
                "type",
                "description",
                "category",
                "subcategory",
                "amount",
                "signed_amount",
                "day_total",
            ])?;
            for day in &days {
                for tx in &day.transactions {
                    wtr.write_record([
                        day.date.to_string(),
                        tx.id.to_string(),
                        tx.r#type.as_str().to_string(),
                        tx.description.clone(),
                        tx.category.clone(),
                        tx.subcategory.clone().unwrap_or_default(),
                        tx.amount.to_string(),
                        signed_amount(tx, perspective)
                            .map(|a| a.to_string())
                            .unwrap_or_default(),
                        day.total.to_string(),
                    ])?;
                }
            }
            wtr.flush()?;
        }
        Format::Json => {
            std::fs::write(out, serde_json::to_string_pretty(&days)?)?;
        }
    }
    println!("Exported {} ledger day(s) to {}", days.len(), out);
    Ok(())
}

fn export_series(cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = parse_format(sub)?;
    let out = sub.get_one::<String>("out").unwrap().trim();
    let kind = match sub.get_one::<String>("kind").map(|s| s.as_str()) {
        Some("performance") => SeriesKind::Performance,
        _ => SeriesKind::Wealth,
    };
    let data = chart::prepare(cfg, sub, kind)?;

    match fmt {
        Format::Csv => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["date", "value"])?;
            for p in &data.points {
                wtr.write_record([p.date.to_string(), p.value.to_string()])?;
            }
            wtr.flush()?;
        }
        Format::Json => {
            let items: Vec<_> = data
                .points
                .iter()
                .map(|p| json!({ "date": p.date, "value": p.value }))
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
    }
    println!(
        "Exported {} of {} points to {}",
        data.points.len(),
        data.input_points,
        out
    );
    Ok(())
}
