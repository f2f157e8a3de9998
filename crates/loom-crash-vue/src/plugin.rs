// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The Vue plugin: interception, transformation and reporting wired together.

use std::sync::Arc;

use loom_crash_vue_core::{BreadcrumbLedger, RawErrorRecord, ReportableEvent};
use tracing::warn;

use crate::config::CaptureOptions;
use crate::diagnostics::{DiagnosticLog, TracingLog};
use crate::host::ErrorHandlerSlot;
use crate::interceptor::{self, Notify};
use crate::sink::EventSink;
use crate::transform::EventTransformer;

/// Captures errors raised inside Vue lifecycle hooks.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use loom_crash_vue::{CaptureOptions, ChannelSink, ComponentContext, FrameworkHost, HostError, VuePlugin};
///
/// let options = CaptureOptions::default();
/// let plugin = VuePlugin::new(options.ledger(), options);
/// let host = FrameworkHost::new();
/// let (sink, mut events) = ChannelSink::new();
///
/// plugin.attach(Some(&host), Arc::new(sink));
/// host.dispatch(
/// 	&HostError::new("TypeError", "x is undefined").with_stack("TypeError\napp.js:1:2"),
/// 	&ComponentContext::default(),
/// 	"mounted",
/// );
///
/// let event = events.try_recv().unwrap();
/// assert_eq!(event.data.location.filename.as_deref(), Some("app.js"));
/// ```
pub struct VuePlugin {
	options: CaptureOptions,
	transformer: Arc<EventTransformer>,
	log: Arc<dyn DiagnosticLog>,
}

impl VuePlugin {
	pub const NAME: &'static str = "vuePlugin";

	pub fn new(ledger: BreadcrumbLedger, options: CaptureOptions) -> Self {
		Self {
			options,
			transformer: Arc::new(EventTransformer::new(ledger)),
			log: Arc::new(TracingLog),
		}
	}

	/// Route install-time and debug fallback messages to `log`.
	pub fn with_diagnostics(mut self, log: Arc<dyn DiagnosticLog>) -> Self {
		self.log = log;
		self
	}

	pub fn name(&self) -> &'static str {
		Self::NAME
	}

	pub fn options(&self) -> &CaptureOptions {
		&self.options
	}

	pub fn ledger(&self) -> &BreadcrumbLedger {
		self.transformer.ledger()
	}

	/// Install the error handler on `slot`, reporting raw records to `notify`.
	pub fn monitor(&self, slot: Option<&dyn ErrorHandlerSlot>, notify: Notify) {
		interceptor::install(slot, notify, &self.options, Arc::clone(&self.log));
	}

	pub fn transform(&self, record: RawErrorRecord) -> ReportableEvent {
		self.transformer.transform(record)
	}

	/// Install on `slot` and report every transformed event to `sink`.
	///
	/// Sink failures are logged and dropped. The installed handler holds the
	/// transformer and sink only, never the plugin or the host.
	pub fn attach(&self, slot: Option<&dyn ErrorHandlerSlot>, sink: Arc<dyn EventSink>) {
		let transformer = Arc::clone(&self.transformer);
		self.monitor(
			slot,
			Arc::new(move |record: RawErrorRecord| {
				let event = transformer.transform(record);
				let event_id = event.id;
				if let Err(e) = sink.report(event) {
					warn!(error = %e, event_id = %event_id, "Failed to report Vue error event");
				}
			}),
		);
	}
}

impl std::fmt::Debug for VuePlugin {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("VuePlugin")
			.field("options", &self.options)
			.field("ledger", self.ledger())
			.finish()
	}
}
