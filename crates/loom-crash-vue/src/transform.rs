// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Turns raw error records into reportable events.

use chrono::Local;
use loom_crash_vue_core::{
	format_event_time, parse_location, BreadcrumbEntry, BreadcrumbLedger, BreadcrumbLevel,
	BreadcrumbType, EventId, EventType, RawErrorRecord, ReportableEvent, VueErrorData,
};
use tracing::debug;

/// Builds [`ReportableEvent`]s and drains the shared ledger into them.
#[derive(Debug, Clone)]
pub struct EventTransformer {
	ledger: BreadcrumbLedger,
}

impl EventTransformer {
	pub fn new(ledger: BreadcrumbLedger) -> Self {
		Self { ledger }
	}

	pub fn ledger(&self) -> &BreadcrumbLedger {
		&self.ledger
	}

	/// Record `record` as a fatal framework breadcrumb and build its event.
	///
	/// The event carries every breadcrumb in the ledger at the time of the
	/// call, newest (this error) first; the ledger is left empty.
	pub fn transform(&self, record: RawErrorRecord) -> ReportableEvent {
		let id = EventId::new();
		let time = format_event_time(&Local::now());

		let breadcrumb = self.ledger.push_and_drain(BreadcrumbEntry::new(
			id,
			BreadcrumbType::Framework,
			BreadcrumbLevel::Fatal,
			format!("Error in Vue/{}: \"{}\"", record.hook, record.stack),
		));

		let location = parse_location(&record.stack);

		debug!(
			event_id = %id,
			hook = %record.hook,
			breadcrumbs = breadcrumb.len(),
			located = !location.is_empty(),
			"Transformed Vue error"
		);

		ReportableEvent {
			id,
			time,
			event_type: EventType::Vue,
			breadcrumb,
			data: VueErrorData { record, location },
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use loom_crash_vue_core::ParsedLocation;

	fn type_error(stack: &str) -> RawErrorRecord {
		RawErrorRecord::new("TypeError", "x is undefined", "mounted", stack)
	}

	#[test]
	fn test_transform_end_to_end() {
		let transformer = EventTransformer::new(BreadcrumbLedger::new());
		let stack = "TypeError: x is undefined\napp-a1b2.js:42:7\n...";

		let event = transformer.transform(type_error(stack));

		assert_eq!(event.event_type, EventType::Vue);
		assert_eq!(event.data.location.filename.as_deref(), Some("app-a1b2.js"));
		assert_eq!(event.data.location.lineno, Some(42));
		assert_eq!(event.data.location.colno, Some(7));
		assert_eq!(event.breadcrumb.len(), 1);
		assert_eq!(
			event.breadcrumb[0].message,
			"Error in Vue/mounted: \"TypeError: x is undefined\napp-a1b2.js:42:7\n...\""
		);
		assert_eq!(event.breadcrumb[0].event_id, event.id);
		assert_eq!(event.breadcrumb[0].breadcrumb_type, BreadcrumbType::Framework);
		assert_eq!(event.breadcrumb[0].level, BreadcrumbLevel::Fatal);
		assert_eq!(event.data.record, type_error(stack));
	}

	#[test]
	fn test_transform_empty_stack() {
		let transformer = EventTransformer::new(BreadcrumbLedger::new());

		let event = transformer.transform(type_error(""));

		assert_eq!(event.data.location, ParsedLocation::default());
		assert_eq!(event.breadcrumb[0].message, "Error in Vue/mounted: \"\"");

		let data = serde_json::to_value(&event.data).unwrap();
		let data = data.as_object().unwrap();
		assert!(!data.contains_key("filename"));
		assert!(!data.contains_key("lineno"));
		assert!(!data.contains_key("colno"));
	}

	#[test]
	fn test_transform_drains_prior_breadcrumbs() {
		let ledger = BreadcrumbLedger::new();
		ledger.push(BreadcrumbEntry::new(
			EventId::new(),
			BreadcrumbType::Route,
			BreadcrumbLevel::Info,
			"/cart",
		));
		let transformer = EventTransformer::new(ledger.clone());

		let event = transformer.transform(type_error(""));

		let messages: Vec<_> = event.breadcrumb.iter().map(|b| b.message.as_str()).collect();
		assert_eq!(messages, vec!["Error in Vue/mounted: \"\"", "/cart"]);
		assert!(ledger.is_empty());
	}

	#[test]
	fn test_ledger_only_holds_later_breadcrumbs() {
		let ledger = BreadcrumbLedger::new();
		let transformer = EventTransformer::new(ledger.clone());
		transformer.transform(type_error(""));

		let later = BreadcrumbEntry::new(
			EventId::new(),
			BreadcrumbType::Click,
			BreadcrumbLevel::Info,
			"button#checkout",
		);
		ledger.push(later.clone());

		assert_eq!(ledger.snapshot(), vec![later]);
	}

	#[test]
	fn test_each_event_gets_a_fresh_id() {
		let transformer = EventTransformer::new(BreadcrumbLedger::new());
		let first = transformer.transform(type_error(""));
		let second = transformer.transform(type_error(""));

		assert_ne!(first.id, second.id);
		assert_eq!(second.breadcrumb.len(), 1);
	}

	#[test]
	fn test_time_uses_event_format() {
		let transformer = EventTransformer::new(BreadcrumbLedger::new());
		let event = transformer.transform(type_error(""));

		assert!(chrono::NaiveDateTime::parse_from_str(
			&event.time,
			loom_crash_vue_core::EVENT_TIME_FORMAT
		)
		.is_ok());
	}
}
