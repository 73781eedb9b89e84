// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::source::transactions;
use crate::config::Config;
use crate::ledger::expenses_by_category;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(cfg: &Config, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("categories", sub)) => categories(cfg, sub)?,
        _ => {}
    }
    Ok(())
}

fn categories(cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let txs = transactions(cfg, sub)?;
    let totals = expenses_by_category(&txs);
    if maybe_print_json(json_flag, jsonl_flag, &totals)? {
        return Ok(());
    }
    let data = totals
        .into_iter()
        .map(|t| {
            vec![
                t.category,
                t.subcategory.unwrap_or_default(),
                t.count.to_string(),
                fmt_money(&t.spent),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Category", "Subcategory", "Count", "Spent"], data)
    );
    Ok(())
}
