// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Input for the commands: a `--file` when given, otherwise the backend.

use crate::api::{ApiClient, SeriesKind, TransactionQuery};
use crate::config::Config;
use crate::models::{Account, TimePoint, Transaction};
use crate::series::normalize_value;
use crate::utils::{parse_date, read_json_file};
use anyhow::{Context, Result};
use serde_json::Value;

pub fn series_points(cfg: &Config, sub: &clap::ArgMatches, kind: SeriesKind) -> Result<Vec<TimePoint>> {
    let raw: Value = match sub.get_one::<String>("file") {
        Some(path) => read_json_file(path)?,
        None => Value::Object(ApiClient::new(cfg)?.series(kind)?),
    };
    let points = normalize_value(&raw).context("Series data unavailable")?;
    Ok(points)
}

pub fn transaction_query(sub: &clap::ArgMatches) -> Result<TransactionQuery> {
    let date_arg = |name: &str| -> Result<Option<chrono::NaiveDate>> {
        match sub.try_get_one::<String>(name).ok().flatten() {
            Some(raw) => Ok(Some(parse_date(raw.trim())?)),
            None => Ok(None),
        }
    };
    Ok(TransactionQuery {
        account_id: sub.try_get_one::<i64>("account").ok().flatten().copied(),
        from: date_arg("from")?,
        to: date_arg("to")?,
    })
}

pub fn transactions(cfg: &Config, sub: &clap::ArgMatches) -> Result<Vec<Transaction>> {
    let query = transaction_query(sub)?;
    match sub.get_one::<String>("file") {
        Some(path) => read_json_file(path),
        None => ApiClient::new(cfg)?.transactions(&query),
    }
}

pub fn accounts(cfg: &Config, sub: &clap::ArgMatches) -> Result<Vec<Account>> {
    match sub.get_one::<String>("file") {
        Some(path) => read_json_file(path),
        None => ApiClient::new(cfg)?.accounts(),
    }
}
