// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Best-effort source location extraction from a JavaScript stack string.
//!
//! Only the first frame line is inspected, and only bare bundle names such as
//! `app-a1b2.js:42:7` are recognised. Anything else (source-mapped paths,
//! `.mjs`/`.ts` assets, uppercase names) yields an empty [`ParsedLocation`].

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static FRAME_LOCATION_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"[a-z0-9-]+\.js:[0-9]+:[0-9]+").unwrap());

/// Location of the top stack frame.
///
/// Either every field is set or none is; partial matches are discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedLocation {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub filename: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub lineno: Option<u64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub colno: Option<u64>,
}

impl ParsedLocation {
	/// Returns true when the parser found nothing usable.
	pub fn is_empty(&self) -> bool {
		self.filename.is_none() && self.lineno.is_none() && self.colno.is_none()
	}
}

/// Extract `filename`, `lineno` and `colno` from the second line of `stack`.
///
/// The first line of a JS stack is the error message, so the candidate frame
/// is line index 1.
pub fn parse_location(stack: &str) -> ParsedLocation {
	let Some(frame) = stack.split('\n').nth(1) else {
		return ParsedLocation::default();
	};

	let matched = FRAME_LOCATION_REGEX
		.find(frame)
		.map(|m| m.as_str())
		.unwrap_or_default();

	let (file_stem, line_col) = matched.split_once(".js:").unwrap_or((matched, ""));
	let (line, col) = line_col.split_once(':').unwrap_or((line_col, ""));

	match (file_stem, frame_number(line), frame_number(col)) {
		("", _, _) | (_, None, _) | (_, _, None) => ParsedLocation::default(),
		(stem, Some(lineno), Some(colno)) => ParsedLocation {
			filename: Some(format!("{stem}.js")),
			lineno: Some(lineno),
			colno: Some(colno),
		},
	}
}

/// Parse a run of ASCII digits, saturating at `u64::MAX` instead of failing.
fn frame_number(digits: &str) -> Option<u64> {
	if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
		return None;
	}
	Some(digits.parse::<u64>().unwrap_or(u64::MAX))
}
