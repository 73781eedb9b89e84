// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};

fn json_args() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print pretty JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    ]
}

fn file_arg(what: &str) -> Arg {
    Arg::new("file")
        .long("file")
        .value_name("PATH")
        .help(format!("Read {} from a JSON file instead of the backend", what))
}

fn chart_args() -> Vec<Arg> {
    vec![
        file_arg("the date -> value object"),
        Arg::new("width")
            .long("width")
            .value_name("PX")
            .value_parser(value_parser!(f64))
            .help("Available chart width in pixels (default from config)"),
        Arg::new("preset")
            .long("preset")
            .value_parser(["wealth", "performance"])
            .help("Y-axis offset policy"),
    ]
}

fn range_args() -> [Arg; 2] {
    [
        Arg::new("from")
            .long("from")
            .value_name("YYYY-MM-DD")
            .conflicts_with("file")
            .help("Earliest date requested from the backend"),
        Arg::new("to")
            .long("to")
            .value_name("YYYY-MM-DD")
            .conflicts_with("file")
            .help("Latest date requested from the backend"),
    ]
}

fn account_arg() -> Arg {
    Arg::new("account")
        .long("account")
        .value_name("ID")
        .value_parser(value_parser!(i64))
        .help("Perspective account for transfer signs")
}

pub fn build_cli() -> Command {
    Command::new("wealthline")
        .version(crate_version!())
        .about("Wealth charts and day-grouped ledgers for a personal finance backend")
        .subcommand(
            Command::new("chart")
                .about("Normalize, downsample, and scale a time series")
                .subcommand(
                    Command::new("wealth")
                        .about("Wealth over time")
                        .args(chart_args())
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("performance")
                        .about("Portfolio performance")
                        .args(chart_args())
                        .args(json_args()),
                ),
        )
        .subcommand(
            Command::new("ledger")
                .about("Transactions grouped by day, newest first, with day totals")
                .arg(file_arg("transactions"))
                .arg(account_arg())
                .args(range_args())
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(value_parser!(usize))
                        .help("Show at most this many days"),
                )
                .args(json_args()),
        )
        .subcommand(
            Command::new("summary")
                .about("Aggregate reports")
                .subcommand(
                    Command::new("categories")
                        .about("Expense totals per category")
                        .arg(file_arg("transactions"))
                        .args(range_args())
                        .args(json_args()),
                ),
        )
        .subcommand(
            Command::new("accounts")
                .about("List accounts usable as a ledger perspective")
                .arg(file_arg("accounts"))
                .args(json_args()),
        )
        .subcommand(
            Command::new("export")
                .about("Write ledger rows or chart points to a file")
                .subcommand(
                    Command::new("ledger")
                        .arg(file_arg("transactions"))
                        .arg(account_arg())
                        .args(range_args())
                        .arg(Arg::new("format").long("format").required(true))
                        .arg(Arg::new("out").long("out").required(true)),
                )
                .subcommand(
                    Command::new("series")
                        .arg(file_arg("the date -> value object"))
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .value_parser(["wealth", "performance"])
                                .default_value("wealth"),
                        )
                        .arg(Arg::new("format").long("format").required(true))
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Inspect configuration")
                .subcommand(Command::new("show").about("Print the resolved configuration")),
        )
}
