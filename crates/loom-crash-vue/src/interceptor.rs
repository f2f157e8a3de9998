// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Host error-handler interception.

use std::sync::Arc;

use loom_crash_vue_core::RawErrorRecord;
use tracing::info;

use crate::config::CaptureOptions;
use crate::diagnostics::{DiagnosticLog, Severity};
use crate::host::{ComponentContext, ErrorHandlerSlot, HostError};

/// Receives every captured record, synchronously, once per error.
pub type Notify = Arc<dyn Fn(RawErrorRecord) + Send + Sync>;

/// Replace the host's error handler with one that reports to `notify`.
///
/// The previous handler and the host's `silent` flag are read once, here. In
/// debug mode the replacement then either delegates to the previous handler
/// or, when there was none and the host is not silent, logs a fallback
/// message. A panic from the previous handler propagates to the host after
/// `notify` has already run.
///
/// A missing `slot` is logged and nothing is installed.
pub fn install(
	slot: Option<&dyn ErrorHandlerSlot>,
	notify: Notify,
	options: &CaptureOptions,
	log: Arc<dyn DiagnosticLog>,
) {
	let Some(slot) = slot else {
		log.log("missing host handler reference", Severity::Warn);
		return;
	};

	let previous = slot.error_handler();
	let silent = slot.silent();
	let debug_mode = options.debug;

	info!(
		debug = debug_mode,
		silent,
		chained = previous.is_some(),
		"Vue error handler installed"
	);

	slot.set_error_handler(Arc::new(
		move |err: &HostError, context: &ComponentContext, hook: &str| {
			notify(record_from(err, hook));

			if !debug_mode {
				return;
			}
			match &previous {
				Some(previous) => previous(err, context, hook),
				None if !silent => {
					let stack = err.stack.as_deref().unwrap_or_default();
					log.log(&format!("Error in {hook}: \"{stack}\""), Severity::Error);
				}
				None => {}
			}
		},
	));
}

fn record_from(err: &HostError, hook: &str) -> RawErrorRecord {
	RawErrorRecord::new(
		err.name.clone().unwrap_or_default(),
		err.message.clone().unwrap_or_default(),
		hook,
		err.stack.clone().unwrap_or_default(),
	)
}
