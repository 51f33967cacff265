// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Line-ending normalization for free-text fields.

use std::borrow::Cow;

/// Rewrites `\r\n` and lone `\r` to `\n`.
///
/// The server stores whatever the web UI submitted, which is usually CRLF,
/// while declared configuration is written with LF.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
	if !text.contains('\r') {
		return Cow::Borrowed(text);
	}

	let mut out = String::with_capacity(text.len());
	let mut chars = text.chars().peekable();
	while let Some(c) = chars.next() {
		if c == '\r' {
			if chars.peek() == Some(&'\n') {
				chars.next();
			}
			out.push('\n');
		} else {
			out.push(c);
		}
	}
	Cow::Owned(out)
}
