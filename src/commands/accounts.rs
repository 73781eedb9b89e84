// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::source::accounts;
use crate::config::Config;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let mut list = accounts(cfg, sub)?;
    list.sort_by_key(|a| a.id);
    if maybe_print_json(json_flag, jsonl_flag, &list)? {
        return Ok(());
    }
    let data = list
        .into_iter()
        .map(|a| vec![a.id.to_string(), a.name, a.r#type.as_str().to_string()])
        .collect();
    println!("{}", pretty_table(&["ID", "Name", "Type"], data));
    Ok(())
}
