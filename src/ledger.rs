// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{AccountId, Transaction, TransactionType};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayGroup {
    pub date: NaiveDate,
    pub transactions: Vec<Transaction>,
}

pub fn group_by_date<I>(transactions: I) -> Vec<DayGroup>
where
    I: IntoIterator<Item = Transaction>,
{
    let mut by_day: BTreeMap<NaiveDate, Vec<Transaction>> = BTreeMap::new();
    for tx in transactions {
        by_day.entry(tx.date).or_default().push(tx);
    }
    by_day
        .into_iter()
        .rev()
        .map(|(date, transactions)| DayGroup { date, transactions })
        .collect()
}

/// `None` for an unrecognized type. Transfers are zero without a perspective.
pub fn signed_amount(tx: &Transaction, perspective: Option<AccountId>) -> Option<Decimal> {
    match tx.r#type {
        TransactionType::Expense => Some(-tx.amount),
        TransactionType::Income => Some(tx.amount),
        TransactionType::Transfer => {
            let mut net = Decimal::ZERO;
            if let Some(acct) = perspective {
                if tx.from_account_id == acct {
                    net -= tx.amount;
                }
                if tx.to_account_id == acct {
                    net += tx.amount;
                }
            }
            Some(net)
        }
        TransactionType::Unknown => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DayTotal {
    pub total: Decimal,
    pub skipped: usize,
    pub negative_amounts: usize,
}

pub fn tally(transactions: &[Transaction], perspective: Option<AccountId>) -> DayTotal {
    transactions
        .iter()
        .fold(DayTotal::default(), |mut acc, tx| {
            if tx.amount.is_sign_negative() && !tx.amount.is_zero() {
                tracing::warn!(id = tx.id, date = %tx.date, amount = %tx.amount, "transaction with negative amount");
                acc.negative_amounts += 1;
            }
            match signed_amount(tx, perspective) {
                Some(amt) => acc.total = acc.total.saturating_add(amt),
                None => {
                    tracing::debug!(id = tx.id, date = %tx.date, "skipping transaction of unknown type");
                    acc.skipped += 1;
                }
            }
            acc
        })
}

pub fn day_total(transactions: &[Transaction], perspective: Option<AccountId>) -> Decimal {
    tally(transactions, perspective).total
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerDay {
    pub date: NaiveDate,
    pub transactions: Vec<Transaction>,
    pub total: Decimal,
    pub running_total: Decimal, // this day plus every older day listed
    pub skipped: usize,
}

pub fn build_ledger<I>(transactions: I, perspective: Option<AccountId>) -> Vec<LedgerDay>
where
    I: IntoIterator<Item = Transaction>,
{
    let mut days: Vec<LedgerDay> = group_by_date(transactions)
        .into_iter()
        .map(|g| {
            let t = tally(&g.transactions, perspective);
            LedgerDay {
                date: g.date,
                transactions: g.transactions,
                total: t.total,
                running_total: Decimal::ZERO,
                skipped: t.skipped,
            }
        })
        .collect();

    let mut running = Decimal::ZERO;
    for day in days.iter_mut().rev() {
        running = running.saturating_add(day.total);
        day.running_total = running;
    }

    let skipped: usize = days.iter().map(|d| d.skipped).sum();
    if skipped > 0 {
        tracing::warn!(skipped, "ledger contains transactions of unknown type");
    }
    days
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub subcategory: Option<String>,
    pub spent: Decimal,
    pub count: usize,
}

pub fn expenses_by_category(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut agg: HashMap<(String, Option<String>), (Decimal, usize)> = HashMap::new();
    for tx in transactions
        .iter()
        .filter(|t| t.r#type == TransactionType::Expense)
    {
        let category = if tx.category.trim().is_empty() {
            "(uncategorized)".to_string()
        } else {
            tx.category.trim().to_string()
        };
        let subcategory = tx
            .subcategory
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        let entry = agg
            .entry((category, subcategory))
            .or_insert((Decimal::ZERO, 0));
        entry.0 = entry.0.saturating_add(tx.amount);
        entry.1 += 1;
    }
    let mut items: Vec<CategoryTotal> = agg
        .into_iter()
        .map(|((category, subcategory), (spent, count))| CategoryTotal {
            category,
            subcategory,
            spent,
            count,
        })
        .collect();
    items.sort_by(|a, b| {
        b.spent
            .cmp(&a.spent)
            .then_with(|| a.category.cmp(&b.category))
            .then_with(|| a.subcategory.cmp(&b.subcategory))
    });
    items
}
