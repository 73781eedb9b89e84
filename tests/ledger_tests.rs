// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde_json::json;
use wealthline::ledger::{
    build_ledger, day_total, expenses_by_category, group_by_date, signed_amount, tally,
};
use wealthline::models::{Transaction, TransactionType};

fn tx(id: i64, date: &str, typ: &str, amount: &str, from: i64, to: i64) -> Transaction {
    serde_json::from_value(json!({
        "id": id,
        "date": date,
        "description": format!("tx {}", id),
        "amount": amount,
        "type": typ,
        "from_account_id": from,
        "to_account_id": to,
        "category": "General",
    }))
    .unwrap()
}

#[test]
fn expense_and_income_net_out() {
    let day = vec![
        tx(1, "2023-03-11", "expense", "75.50", 1, 9),
        tx(2, "2023-03-11", "income", "2500.00", 8, 1),
    ];
    assert_eq!(day_total(&day, None), Decimal::new(242450, 2));
}

#[test]
fn transfer_sign_follows_perspective() {
    let day = vec![tx(1, "2023-03-11", "transfer", "100", 1, 2)];
    assert_eq!(day_total(&day, Some(1)), Decimal::from(-100));
    assert_eq!(day_total(&day, Some(2)), Decimal::from(100));
    assert_eq!(day_total(&day, None), Decimal::ZERO);
    assert_eq!(day_total(&day, Some(3)), Decimal::ZERO);
}

#[test]
fn transfer_to_self_nets_to_zero() {
    let t = tx(1, "2023-03-11", "transfer", "40", 5, 5);
    assert_eq!(signed_amount(&t, Some(5)), Some(Decimal::ZERO));
}

#[test]
fn unknown_types_are_skipped_and_counted() {
    let day = vec![
        tx(1, "2023-03-11", "income", "10", 7, 1),
        tx(2, "2023-03-11", "refund", "99", 7, 1),
        tx(3, "2023-03-11", "expense", "4", 1, 7),
    ];
    assert_eq!(day[1].r#type, TransactionType::Unknown);
    let t = tally(&day, None);
    assert_eq!(t.total, Decimal::from(6));
    assert_eq!(t.skipped, 1);
    assert_eq!(day_total(&day, None), Decimal::from(6));
}

#[test]
fn negative_amounts_are_counted_but_still_signed_by_type() {
    let day = vec![
        tx(1, "2023-03-11", "expense", "-10", 1, 9),
        tx(2, "2023-03-11", "income", "5", 9, 1),
    ];
    let t = tally(&day, None);
    assert_eq!(t.negative_amounts, 1);
    assert_eq!(t.total, Decimal::from(15));
    assert_eq!(t.skipped, 0);
}

#[test]
fn totals_saturate_instead_of_overflowing() {
    let big = "70000000000000000000000000000";
    let day = vec![
        tx(1, "2023-03-11", "income", big, 9, 1),
        tx(2, "2023-03-11", "income", big, 9, 1),
    ];
    assert_eq!(day_total(&day, None), Decimal::MAX);

    let days = build_ledger(
        vec![
            tx(3, "2023-03-12", "expense", big, 1, 9),
            tx(4, "2023-03-13", "expense", big, 1, 9),
        ],
        None,
    );
    assert_eq!(days[0].running_total, Decimal::MIN);
}

#[test]
fn total_ignores_order_within_day() {
    let mut day = vec![
        tx(1, "2023-03-11", "expense", "1.10", 1, 9),
        tx(2, "2023-03-11", "transfer", "20", 2, 1),
        tx(3, "2023-03-11", "income", "3.30", 9, 1),
    ];
    let forward = day_total(&day, Some(1));
    day.reverse();
    assert_eq!(day_total(&day, Some(1)), forward);
    assert_eq!(forward, Decimal::new(2220, 2));
}

#[test]
fn groups_newest_day_first() {
    let groups = group_by_date(vec![
        tx(1, "2023-03-11", "expense", "1", 1, 9),
        tx(2, "2023-03-15", "expense", "2", 1, 9),
    ]);
    let dates: Vec<String> = groups.iter().map(|g| g.date.to_string()).collect();
    assert_eq!(dates, ["2023-03-15", "2023-03-11"]);
}

#[test]
fn grouping_keeps_input_order_within_a_day() {
    let groups = group_by_date(vec![
        tx(5, "2023-03-11", "expense", "1", 1, 9),
        tx(2, "2023-03-12", "expense", "1", 1, 9),
        tx(9, "2023-03-11", "income", "1", 9, 1),
        tx(1, "2023-03-11", "expense", "1", 1, 9),
    ]);
    let ids: Vec<i64> = groups[1].transactions.iter().map(|t| t.id).collect();
    assert_eq!(ids, [5, 9, 1]);
}

#[test]
fn grouping_is_a_partition() {
    let input: Vec<Transaction> = (0..60)
        .map(|i| {
            let date = format!("2023-0{}-{:02}", 1 + i % 3, 1 + (i * 7) % 28);
            tx(i, &date, "expense", "1", 1, 9)
        })
        .collect();
    let groups = group_by_date(input.clone());

    let mut seen: Vec<i64> = groups
        .iter()
        .flat_map(|g| {
            assert!(g.transactions.iter().all(|t| t.date == g.date));
            g.transactions.iter().map(|t| t.id)
        })
        .collect();
    seen.sort();
    let mut expected: Vec<i64> = input.iter().map(|t| t.id).collect();
    expected.sort();
    assert_eq!(seen, expected);
    assert!(groups.windows(2).all(|w| w[0].date > w[1].date));
}

#[test]
fn empty_input_gives_empty_ledger() {
    assert!(group_by_date(Vec::new()).is_empty());
    assert!(build_ledger(Vec::new(), None).is_empty());
    assert_eq!(day_total(&[], Some(1)), Decimal::ZERO);
}

#[test]
fn ledger_running_total_accumulates_from_oldest_day() {
    let days = build_ledger(
        vec![
            tx(1, "2023-03-10", "income", "100", 9, 1),
            tx(2, "2023-03-12", "expense", "30", 1, 9),
            tx(3, "2023-03-11", "transfer", "50", 1, 2),
            tx(4, "2023-03-12", "mystery", "5", 1, 9),
        ],
        Some(1),
    );
    let summary: Vec<(String, Decimal, Decimal, usize)> = days
        .iter()
        .map(|d| (d.date.to_string(), d.total, d.running_total, d.skipped))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("2023-03-12".to_string(), Decimal::from(-30), Decimal::from(20), 1),
            ("2023-03-11".to_string(), Decimal::from(-50), Decimal::from(50), 0),
            ("2023-03-10".to_string(), Decimal::from(100), Decimal::from(100), 0),
        ]
    );
}

#[test]
fn category_summary_counts_expenses_only() {
    let mut groceries = tx(1, "2023-03-10", "expense", "20.25", 1, 9);
    groceries.category = "Food".into();
    groceries.subcategory = Some("Groceries".into());
    let mut groceries2 = tx(2, "2023-03-11", "expense", "9.75", 1, 9);
    groceries2.category = "Food".into();
    groceries2.subcategory = Some(" Groceries ".into());
    let mut rent = tx(3, "2023-03-01", "expense", "900", 1, 9);
    rent.category = "Housing".into();
    let mut blank = tx(4, "2023-03-02", "expense", "1", 1, 9);
    blank.category = "  ".into();
    let salary = tx(5, "2023-03-01", "income", "3000", 9, 1);

    let totals = expenses_by_category(&[groceries, groceries2, rent, blank, salary]);
    let flat: Vec<(String, Option<String>, Decimal, usize)> = totals
        .into_iter()
        .map(|t| (t.category, t.subcategory, t.spent, t.count))
        .collect();
    assert_eq!(
        flat,
        vec![
            ("Housing".to_string(), None, Decimal::from(900), 1),
            (
                "Food".to_string(),
                Some("Groceries".to_string()),
                Decimal::from(30),
                2
            ),
            ("(uncategorized)".to_string(), None, Decimal::from(1), 1),
        ]
    );
}

#[test]
fn transaction_deserializes_backend_shape() {
    let t: Transaction = serde_json::from_value(json!({
        "id": 42,
        "date": "2023-03-15",
        "description": "Coffee",
        "amount": 3.5,
        "type": "expense",
        "from_account_id": 1,
        "to_account_id": 12,
        "category": "Food",
        "subcategory": null
    }))
    .unwrap();
    assert_eq!(t.amount, Decimal::new(35, 1));
    assert_eq!(t.r#type, TransactionType::Expense);
    assert!(t.subcategory.is_none());
}
