// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeriesError {
    /// A series entry whose key is not a date or whose value is not a finite number.
    #[error("Data format error at '{key}': {reason}")]
    DataFormat { key: String, reason: String },

    #[error("Duplicate date '{0}' in series")]
    DuplicateDate(String),
}

impl SeriesError {
    pub fn data_format(key: &str, reason: impl Into<String>) -> Self {
        SeriesError::DataFormat {
            key: key.to_string(),
            reason: reason.into(),
        }
    }

    /// The key of the offending entry.
    pub fn key(&self) -> &str {
        match self {
            SeriesError::DataFormat { key, .. } => key,
            SeriesError::DuplicateDate(key) => key,
        }
    }
}

pub type SeriesResult<T> = Result<T, SeriesError>;
