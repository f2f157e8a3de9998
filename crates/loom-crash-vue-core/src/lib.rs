// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for capturing Vue framework errors in Loom crash analytics.
//!
//! This crate holds everything that does not depend on a host framework:
//!
//! - [`RawErrorRecord`] and [`ReportableEvent`], the records flowing from the
//!   error handler to the reporting sink
//! - [`parse_location`], a best-effort extractor for `file.js:line:col` from
//!   the top frame of a stack string
//! - [`BreadcrumbLedger`], the shared, lock-protected trail of activity that
//!   each captured error drains
//!
//! The SDK side (handler installation, transformation, sinks) lives in
//! `loom-crash-vue`.

pub mod breadcrumb;
pub mod error;
pub mod event;
pub mod ledger;
pub mod location;

pub use breadcrumb::{BreadcrumbEntry, BreadcrumbLevel, BreadcrumbType};
pub use error::{CaptureError, Result};
pub use event::{
	format_event_time, EventId, EventType, RawErrorRecord, ReportableEvent, VueErrorData,
	VueSubType, EVENT_TIME_FORMAT,
};
pub use ledger::BreadcrumbLedger;
pub use location::{parse_location, ParsedLocation};
