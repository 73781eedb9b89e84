// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::{Config, config_path};
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(cfg: &Config, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => {
            let preset = cfg
                .offset_preset
                .map(|p| p.as_str().to_string())
                .unwrap_or_else(|| "(per chart)".to_string());
            let data = vec![
                vec!["config file".into(), config_path()?.display().to_string()],
                vec!["api_base_url".into(), cfg.api_base_url.clone()],
                vec!["api_token".into(), cfg.masked_token()],
                vec!["chart_width".into(), format!("{}", cfg.chart_width)],
                vec!["offset_preset".into(), preset],
            ];
            println!("{}", pretty_table(&["Setting", "Value"], data));
        }
        _ => {}
    }
    Ok(())
}
