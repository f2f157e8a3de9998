// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Raw error records and the reportable events built from them.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::breadcrumb::BreadcrumbEntry;
use crate::error::CaptureError;
use crate::location::ParsedLocation;

/// Format used for [`ReportableEvent::time`].
pub const EVENT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Unique identifier for a captured event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub Uuid);

impl EventId {
	pub fn new() -> Self {
		Self(Uuid::now_v7())
	}
}

impl Default for EventId {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Display for EventId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl FromStr for EventId {
	type Err = uuid::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Self(Uuid::parse_str(s)?))
	}
}

/// Format a timestamp the way events carry it (`2025-01-31 13:45:00`).
pub fn format_event_time<Tz>(time: &DateTime<Tz>) -> String
where
	Tz: TimeZone,
	Tz::Offset: fmt::Display,
{
	time.format(EVENT_TIME_FORMAT).to_string()
}

/// Sub-classification of Vue records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VueSubType {
	#[default]
	Error,
}

/// Error as reported by the host framework, before any enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawErrorRecord {
	pub name: String,
	pub message: String,
	/// Lifecycle hook the error was raised from (e.g. `mounted`).
	pub hook: String,
	pub stack: String,
	#[serde(default)]
	pub sub_type: VueSubType,
}

impl RawErrorRecord {
	pub fn new(
		name: impl Into<String>,
		message: impl Into<String>,
		hook: impl Into<String>,
		stack: impl Into<String>,
	) -> Self {
		Self {
			name: name.into(),
			message: message.into(),
			hook: hook.into(),
			stack: stack.into(),
			sub_type: VueSubType::Error,
		}
	}
}

/// Event payload: the raw record merged with its parsed location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VueErrorData {
	#[serde(flatten)]
	pub record: RawErrorRecord,
	#[serde(flatten)]
	pub location: ParsedLocation,
}

/// Kind of event handed to the reporting pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
	Api,
	Dom,
	Performance,
	Route,
	Error,
	Console,
	Customer,
	Vue,
	React,
	Lifecycle,
	Record,
}

impl EventType {
	pub const ALL: [EventType; 11] = [
		Self::Api,
		Self::Dom,
		Self::Performance,
		Self::Route,
		Self::Error,
		Self::Console,
		Self::Customer,
		Self::Vue,
		Self::React,
		Self::Lifecycle,
		Self::Record,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Api => "api",
			Self::Dom => "dom",
			Self::Performance => "performance",
			Self::Route => "route",
			Self::Error => "error",
			Self::Console => "console",
			Self::Customer => "customer",
			Self::Vue => "vue",
			Self::React => "react",
			Self::Lifecycle => "lifecycle",
			Self::Record => "record",
		}
	}
}

impl fmt::Display for EventType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for EventType {
	type Err = CaptureError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|t| t.as_str() == s)
			.ok_or_else(|| CaptureError::InvalidEventType(s.to_string()))
	}
}

/// A finished event, ready for the reporting sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportableEvent {
	pub id: EventId,
	pub time: String,
	#[serde(rename = "type")]
	pub event_type: EventType,
	/// Newest first.
	pub breadcrumb: Vec<BreadcrumbEntry>,
	pub data: VueErrorData,
}

impl ReportableEvent {
	pub fn to_json(&self) -> crate::Result<serde_json::Value> {
		Ok(serde_json::to_value(self)?)
	}
}
