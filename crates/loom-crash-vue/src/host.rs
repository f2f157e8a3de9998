// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Host framework error-handler slot.
//!
//! A host exposes one global error handler, called as
//! `(error, component context, lifecycle hook)`, plus a `silent` flag. The
//! [`ErrorHandlerSlot`] trait is what the interceptor needs from a host;
//! [`FrameworkHost`] is an in-process implementation for embedders that
//! bridge errors from a webview or a test harness.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::error;

/// Error object as delivered by the host. Any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostError {
	#[serde(default)]
	pub name: Option<String>,
	#[serde(default)]
	pub message: Option<String>,
	#[serde(default)]
	pub stack: Option<String>,
}

impl HostError {
	pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			name: Some(name.into()),
			message: Some(message.into()),
			stack: None,
		}
	}

	pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
		self.stack = Some(stack.into());
		self
	}
}

/// Component instance the error was raised in. Passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentContext {
	#[serde(default)]
	pub component: Option<String>,
	#[serde(default)]
	pub props: serde_json::Value,
}

impl ComponentContext {
	pub fn named(component: impl Into<String>) -> Self {
		Self {
			component: Some(component.into()),
			props: serde_json::Value::Null,
		}
	}
}

/// A host error handler. Closures keep whatever receiver they need.
pub type ErrorHandler = Arc<dyn Fn(&HostError, &ComponentContext, &str) + Send + Sync>;

/// Wrap a closure as an [`ErrorHandler`].
pub fn handler_fn<F>(f: F) -> ErrorHandler
where
	F: Fn(&HostError, &ComponentContext, &str) + Send + Sync + 'static,
{
	Arc::new(f)
}

/// Writable global error-handler slot of a host framework.
pub trait ErrorHandlerSlot: Send + Sync {
	/// Currently installed handler, if any.
	fn error_handler(&self) -> Option<ErrorHandler>;

	/// Whether the host suppresses its own error output.
	fn silent(&self) -> bool;

	fn set_error_handler(&self, handler: ErrorHandler);
}

/// Host configuration holding the handler slot.
#[derive(Clone, Default)]
pub struct HostConfig {
	pub error_handler: Option<ErrorHandler>,
	pub silent: bool,
}

/// In-process host with a single error-handler slot.
#[derive(Clone, Default)]
pub struct FrameworkHost {
	config: Arc<RwLock<HostConfig>>,
}

impl FrameworkHost {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_config(config: HostConfig) -> Self {
		Self {
			config: Arc::new(RwLock::new(config)),
		}
	}

	pub fn set_silent(&self, silent: bool) {
		self.config.write().silent = silent;
	}

	/// Deliver an error to the installed handler.
	///
	/// The handler runs without the config lock held, so it may reinstall
	/// handlers. With no handler the error goes to `tracing` unless silent.
	pub fn dispatch(&self, err: &HostError, context: &ComponentContext, hook: &str) {
		let (handler, silent) = {
			let config = self.config.read();
			(config.error_handler.clone(), config.silent)
		};

		match handler {
			Some(handler) => handler(err, context, hook),
			None if !silent => {
				error!(
					hook = %hook,
					name = err.name.as_deref().unwrap_or_default(),
					message = err.message.as_deref().unwrap_or_default(),
					"Unhandled error in component lifecycle hook"
				);
			}
			None => {}
		}
	}
}

impl ErrorHandlerSlot for FrameworkHost {
	fn error_handler(&self) -> Option<ErrorHandler> {
		self.config.read().error_handler.clone()
	}

	fn silent(&self) -> bool {
		self.config.read().silent
	}

	fn set_error_handler(&self, handler: ErrorHandler) {
		self.config.write().error_handler = Some(handler);
	}
}

impl std::fmt::Debug for FrameworkHost {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let config = self.config.read();
		f.debug_struct("FrameworkHost")
			.field("has_error_handler", &config.error_handler.is_some())
			.field("silent", &config.silent)
			.finish()
	}
}
