// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::source::{transaction_query, transactions};
use crate::config::Config;
use crate::ledger::{LedgerDay, build_ledger, signed_amount};
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let perspective = transaction_query(sub)?.account_id;
    let days = query_days(cfg, sub)?;
    if maybe_print_json(json_flag, jsonl_flag, &days)? {
        return Ok(());
    }

    let mut rows = Vec::new();
    let mut skipped = 0;
    for day in &days {
        skipped += day.skipped;
        for (i, tx) in day.transactions.iter().enumerate() {
            let amount = signed_amount(tx, perspective)
                .map(|a| fmt_money(&a))
                .unwrap_or_else(|| "?".to_string());
            let (date, total, running) = if i == 0 {
                (
                    day.date.to_string(),
                    fmt_money(&day.total),
                    fmt_money(&day.running_total),
                )
            } else {
                (String::new(), String::new(), String::new())
            };
            rows.push(vec![
                date,
                tx.r#type.as_str().to_string(),
                tx.description.clone(),
                tx.category.clone(),
                amount,
                total,
                running,
            ]);
        }
    }
    println!(
        "{}",
        pretty_table(
            &["Date", "Type", "Description", "Category", "Amount", "Day Total", "Running"],
            rows,
        )
    );
    if skipped > 0 {
        println!("{} transaction(s) of unknown type left out of totals", skipped);
    }
    Ok(())
}

/// Ledger days, newest first, cut to `--limit` days when given.
pub fn query_days(cfg: &Config, sub: &clap::ArgMatches) -> Result<Vec<LedgerDay>> {
    let perspective = transaction_query(sub)?.account_id;
    let txs = transactions(cfg, sub)?;
    let mut days = build_ledger(txs, perspective);
    if let Some(limit) = sub.try_get_one::<usize>("limit").ok().flatten() {
        days.truncate(*limit);
    }
    Ok(days)
}
