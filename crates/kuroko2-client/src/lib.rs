// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTTP client for the kuroko2 job definition API.
//!
//! [`Kuroko2Client`] maps the four definition endpoints onto typed calls:
//!
//! | operation | request | success |
//! |-----------|---------|---------|
//! | fetch | `GET {base}/definitions/{id}` | 200 + body |
//! | create | `POST {base}/definitions` | 202 + body |
//! | update | `PUT {base}/definitions/{id}` | 204 |
//! | delete | `DELETE {base}/definitions/{id}` | 204 |
//!
//! Every request carries HTTP Basic credentials. Nothing is retried; any
//! other status is [`ClientError::UnexpectedStatus`].

pub mod api;
pub mod client;
pub mod error;

#[cfg(feature = "mock")]
pub use api::MockJobDefinitionApi;
pub use api::JobDefinitionApi;
pub use client::{Kuroko2Client, Kuroko2ClientBuilder};
pub use error::{ClientError, Result};
pub use kuroko2_core::{JobDefinition, JobDefinitionId, JobDefinitionInput, OperationContext};
pub use reqwest::Method;
