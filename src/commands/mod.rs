// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod accounts;
pub mod chart;
pub mod config;
pub mod exporter;
pub mod ledger;
pub mod source;
pub mod summary;
