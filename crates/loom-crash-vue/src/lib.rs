// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Vue framework error capture for Loom crash analytics.
//!
//! Errors raised inside component lifecycle hooks reach the host's global
//! error handler. This crate replaces that handler, turns each error into a
//! [`ReportableEvent`] carrying the breadcrumb trail recorded since the last
//! error, and hands it to an [`EventSink`].
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use loom_crash_vue::{CaptureOptions, ChannelSink, FrameworkHost, VuePlugin};
//!
//! let options = CaptureOptions::from_env()?;
//! let ledger = options.ledger();
//! let plugin = VuePlugin::new(ledger.clone(), options);
//!
//! let host = FrameworkHost::new();
//! let (sink, mut events) = ChannelSink::new();
//! plugin.attach(Some(&host), Arc::new(sink));
//!
//! // Other instrumentation records activity on `ledger`; every error drains it.
//! tokio::spawn(async move {
//!     while let Some(event) = events.recv().await {
//!         upload(event).await;
//!     }
//! });
//! ```
//!
//! # Debug mode
//!
//! With `debug` set, the previously installed handler still runs after each
//! capture. If there was none and the host is not silent, a fallback
//! `Error in {hook}: "{stack}"` message is logged instead.

mod config;
mod diagnostics;
mod error;
mod host;
mod interceptor;
mod plugin;
mod sink;
mod transform;

pub use config::{CaptureOptions, DEBUG_ENV, MAX_BREADCRUMBS_ENV};
pub use diagnostics::{DiagnosticLog, Severity, TracingLog};
pub use error::{ConfigError, Result, VueSdkError};
pub use host::{
	handler_fn, ComponentContext, ErrorHandler, ErrorHandlerSlot, FrameworkHost, HostConfig,
	HostError,
};
pub use interceptor::{install, Notify};
pub use plugin::VuePlugin;
pub use sink::{ChannelSink, EventSink};
pub use transform::EventTransformer;

// Re-export core types for convenience
pub use loom_crash_vue_core::{
	parse_location, BreadcrumbEntry, BreadcrumbLedger, BreadcrumbLevel, BreadcrumbType,
	CaptureError, EventId, EventType, ParsedLocation, RawErrorRecord, ReportableEvent,
	VueErrorData,
};
