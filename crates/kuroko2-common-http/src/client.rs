// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::time::Duration;

use reqwest::{Client, ClientBuilder};

/// Applied when the caller does not set its own request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Creates a client builder with the standard User-Agent and default timeout.
///
/// # Example
/// ```ignore
/// let client = kuroko2_common_http::builder()
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// ```
pub fn builder() -> ClientBuilder {
	Client::builder()
		.user_agent(user_agent())
		.timeout(DEFAULT_TIMEOUT)
}

/// Format: `kuroko2-provider/{version}`
pub fn user_agent() -> String {
	format!("kuroko2-provider/{}", env!("CARGO_PKG_VERSION"))
}
