// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration primitives shared by the kuroko2 crates.
//!
//! - [`Secret<T>`]: keeps API keys out of logs, debug dumps and serialized
//!   configuration
//! - [`load_env`] / [`load_secret_env`]: read settings from the environment,
//!   with `*_FILE` indirection for secrets

pub mod env;
pub mod secret;

pub use env::{load_env, load_secret_env, SecretEnvError};
pub use secret::{Secret, SecretString, REDACTED};
