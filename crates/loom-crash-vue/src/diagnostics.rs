// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Diagnostic output for install-time and debug-mode messages.

use std::fmt;

use tracing::{debug, error, info, warn};

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
	Debug,
	#[default]
	Info,
	Warn,
	Error,
}

impl fmt::Display for Severity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Debug => write!(f, "debug"),
			Self::Info => write!(f, "info"),
			Self::Warn => write!(f, "warn"),
			Self::Error => write!(f, "error"),
		}
	}
}

/// Sink for the SDK's own diagnostic messages.
pub trait DiagnosticLog: Send + Sync {
	fn log(&self, message: &str, severity: Severity);
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl DiagnosticLog for TracingLog {
	fn log(&self, message: &str, severity: Severity) {
		match severity {
			Severity::Debug => debug!(target: "loom_crash_vue", "{message}"),
			Severity::Info => info!(target: "loom_crash_vue", "{message}"),
			Severity::Warn => warn!(target: "loom_crash_vue", "{message}"),
			Severity::Error => error!(target: "loom_crash_vue", "{message}"),
		}
	}
}
