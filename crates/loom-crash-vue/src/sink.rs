// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Destinations for finished events.

use loom_crash_vue_core::ReportableEvent;
use tokio::sync::mpsc;

use crate::error::{Result, VueSdkError};

/// Consumes finished events. Called synchronously from the error handler.
pub trait EventSink: Send + Sync {
	fn report(&self, event: ReportableEvent) -> Result<()>;
}

impl<F> EventSink for F
where
	F: Fn(ReportableEvent) -> Result<()> + Send + Sync,
{
	fn report(&self, event: ReportableEvent) -> Result<()> {
		self(event)
	}
}

/// Hands events to an async consumer (e.g. an upload task) over an unbounded
/// channel. Sending never blocks, so it is safe inside an error handler.
#[derive(Debug, Clone)]
pub struct ChannelSink {
	tx: mpsc::UnboundedSender<ReportableEvent>,
}

impl ChannelSink {
	pub fn new() -> (Self, mpsc::UnboundedReceiver<ReportableEvent>) {
		let (tx, rx) = mpsc::unbounded_channel();
		(Self { tx }, rx)
	}
}

impl EventSink for ChannelSink {
	fn report(&self, event: ReportableEvent) -> Result<()> {
		self.tx.send(event).map_err(|_| VueSdkError::SinkClosed)
	}
}
