// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Blocking client for the finance backend. Each call is one request; the
//! backend applies any date or account filtering.

use crate::config::Config;
use crate::models::{Account, AccountId, Transaction};
use crate::utils::http_client;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Wealth,
    Performance,
}

impl SeriesKind {
    pub fn path(self) -> &'static str {
        match self {
            SeriesKind::Wealth => "wealth",
            SeriesKind::Performance => "portfolio/performance",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionQuery {
    pub account_id: Option<AccountId>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl TransactionQuery {
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        if let Some(id) = self.account_id {
            out.push(("account_id", id.to_string()));
        }
        if let Some(d) = self.from {
            out.push(("from", d.to_string()));
        }
        if let Some(d) = self.to {
            out.push(("to", d.to_string()));
        }
        out
    }
}

pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(cfg: &Config) -> Result<ApiClient> {
        Ok(ApiClient {
            base_url: cfg.api_base_url.trim_end_matches('/').to_string(),
            token: cfg.api_token.clone(),
            http: http_client()?,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let mut req = self.http.get(&url).query(query);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        let resp = req
            .send()
            .with_context(|| format!("Request to {} failed", url))?
            .error_for_status()
            .with_context(|| format!("Backend rejected {}", url))?;
        resp.json::<T>()
            .with_context(|| format!("Unexpected response body from {}", url))
    }

    /// Raw date -> value object for a series; normalize it with `series::normalize`.
    pub fn series(&self, kind: SeriesKind) -> Result<Map<String, Value>> {
        self.get(kind.path(), &[])
    }

    pub fn transactions(&self, query: &TransactionQuery) -> Result<Vec<Transaction>> {
        self.get("transactions", &query.params())
    }

    pub fn accounts(&self) -> Result<Vec<Account>> {
        self.get("accounts", &[])
    }
}
