// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shared HTTP client construction.
//!
//! Every crate talking to kuroko2 builds its `reqwest::Client` here so that
//! requests carry the same User-Agent and default timeout.

mod client;

pub use client::{builder, user_agent, DEFAULT_TIMEOUT};
