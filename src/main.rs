// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use wealthline::{cli, commands, config};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wealthline=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let cfg = config::load()?;

    match matches.subcommand() {
        Some(("chart", sub)) => commands::chart::handle(&cfg, sub)?,
        Some(("ledger", sub)) => commands::ledger::handle(&cfg, sub)?,
        Some(("summary", sub)) => commands::summary::handle(&cfg, sub)?,
        Some(("accounts", sub)) => commands::accounts::handle(&cfg, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&cfg, sub)?,
        Some(("config", sub)) => commands::config::handle(&cfg, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
