// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Breadcrumb types (activity recorded before an error).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CaptureError;
use crate::event::EventId;

/// A single entry in the breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbEntry {
	/// Event this breadcrumb belongs to.
	pub event_id: EventId,
	#[serde(rename = "type")]
	pub breadcrumb_type: BreadcrumbType,
	pub level: BreadcrumbLevel,
	pub message: String,
}

impl BreadcrumbEntry {
	pub fn new(
		event_id: EventId,
		breadcrumb_type: BreadcrumbType,
		level: BreadcrumbLevel,
		message: impl Into<String>,
	) -> Self {
		Self {
			event_id,
			breadcrumb_type,
			level,
			message: message.into(),
		}
	}
}

/// Source of the activity a breadcrumb describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreadcrumbType {
	Route,
	Click,
	Console,
	Xhr,
	Fetch,
	UnhandledRejection,
	Resource,
	CodeError,
	Customer,
	/// Errors reported by a UI framework (Vue, React).
	Framework,
	Lifecycle,
	Crash,
}

impl BreadcrumbType {
	pub const ALL: [BreadcrumbType; 12] = [
		Self::Route,
		Self::Click,
		Self::Console,
		Self::Xhr,
		Self::Fetch,
		Self::UnhandledRejection,
		Self::Resource,
		Self::CodeError,
		Self::Customer,
		Self::Framework,
		Self::Lifecycle,
		Self::Crash,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Route => "route",
			Self::Click => "click",
			Self::Console => "console",
			Self::Xhr => "xhr",
			Self::Fetch => "fetch",
			Self::UnhandledRejection => "unhandled_rejection",
			Self::Resource => "resource",
			Self::CodeError => "code_error",
			Self::Customer => "customer",
			Self::Framework => "framework",
			Self::Lifecycle => "lifecycle",
			Self::Crash => "crash",
		}
	}
}

impl fmt::Display for BreadcrumbType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for BreadcrumbType {
	type Err = CaptureError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|t| t.as_str() == s)
			.ok_or_else(|| CaptureError::InvalidBreadcrumbType(s.to_string()))
	}
}

/// Severity level of a breadcrumb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreadcrumbLevel {
	Fatal,
	Error,
	Warn,
	Info,
	Debug,
}

impl fmt::Display for BreadcrumbLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Fatal => write!(f, "fatal"),
			Self::Error => write!(f, "error"),
			Self::Warn => write!(f, "warn"),
			Self::Info => write!(f, "info"),
			Self::Debug => write!(f, "debug"),
		}
	}
}

impl FromStr for BreadcrumbLevel {
	type Err = CaptureError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"fatal" => Ok(Self::Fatal),
			"error" => Ok(Self::Error),
			"warn" => Ok(Self::Warn),
			"info" => Ok(Self::Info),
			"debug" => Ok(Self::Debug),
			_ => Err(CaptureError::InvalidBreadcrumbLevel(s.to_string())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	proptest! {
		#[test]
		fn breadcrumb_level_roundtrip(level in prop_oneof![
			Just(BreadcrumbLevel::Fatal),
			Just(BreadcrumbLevel::Error),
			Just(BreadcrumbLevel::Warn),
			Just(BreadcrumbLevel::Info),
			Just(BreadcrumbLevel::Debug),
		]) {
			let s = level.to_string();
			let parsed: BreadcrumbLevel = s.parse().unwrap();
			prop_assert_eq!(level, parsed);
		}

		#[test]
		fn breadcrumb_type_roundtrip(idx in 0usize..BreadcrumbType::ALL.len()) {
			let ty = BreadcrumbType::ALL[idx];
			let parsed: BreadcrumbType = ty.to_string().parse().unwrap();
			prop_assert_eq!(ty, parsed);
		}
	}

	#[test]
	fn test_display_matches_serde_name() {
		for ty in BreadcrumbType::ALL {
			let json = serde_json::to_string(&ty).unwrap();
			assert_eq!(json, format!("\"{ty}\""));
		}
	}

	#[test]
	fn test_unknown_level_rejected() {
		let err = "critical".parse::<BreadcrumbLevel>().unwrap_err();
		assert!(matches!(err, CaptureError::InvalidBreadcrumbLevel(s) if s == "critical"));
	}

	#[test]
	fn test_entry_serializes_type_field() {
		let entry = BreadcrumbEntry::new(
			EventId::new(),
			BreadcrumbType::Framework,
			BreadcrumbLevel::Fatal,
			"boom",
		);
		let value = serde_json::to_value(&entry).unwrap();
		assert_eq!(value["type"], "framework");
		assert_eq!(value["level"], "fatal");
		assert_eq!(value["message"], "boom");
		assert_eq!(value["event_id"], entry.event_id.to_string());
	}
}
