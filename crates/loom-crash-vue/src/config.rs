// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Capture options, from code or from the environment.

use loom_crash_vue_core::BreadcrumbLedger;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Enables debug passthrough when truthy.
pub const DEBUG_ENV: &str = "LOOM_CRASH_VUE_DEBUG";
/// Caps the breadcrumb ledger; unset means unbounded.
pub const MAX_BREADCRUMBS_ENV: &str = "LOOM_CRASH_VUE_MAX_BREADCRUMBS";

/// Options for the Vue capture plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureOptions {
	/// Re-invoke the previous error handler (or log a fallback) after capture.
	#[serde(default)]
	pub debug: bool,
	/// Upper bound on ledger entries; oldest are evicted first.
	#[serde(default)]
	pub max_breadcrumbs: Option<usize>,
}

impl CaptureOptions {
	pub fn from_env() -> Result<Self> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Same as [`CaptureOptions::from_env`] but reads through `lookup`.
	pub fn from_lookup<F>(lookup: F) -> Result<Self>
	where
		F: Fn(&str) -> Option<String>,
	{
		let debug = lookup(DEBUG_ENV)
			.map(|v| v != "0" && v.to_lowercase() != "false")
			.unwrap_or(false);

		let max_breadcrumbs = match lookup(MAX_BREADCRUMBS_ENV) {
			None => None,
			Some(raw) => match raw.trim().parse::<usize>() {
				Ok(0) | Err(_) => {
					return Err(ConfigError::Parse(format!(
						"{MAX_BREADCRUMBS_ENV} must be a positive integer, got {raw:?}"
					))
					.into())
				}
				Ok(max) => Some(max),
			},
		};

		Ok(Self {
			debug,
			max_breadcrumbs,
		})
	}

	pub fn debug(mut self, enabled: bool) -> Self {
		self.debug = enabled;
		self
	}

	pub fn max_breadcrumbs(mut self, max: usize) -> Self {
		self.max_breadcrumbs = Some(max);
		self
	}

	/// Build a ledger honouring `max_breadcrumbs`.
	pub fn ledger(&self) -> BreadcrumbLedger {
		match self.max_breadcrumbs {
			Some(max) => BreadcrumbLedger::with_capacity_limit(max),
			None => BreadcrumbLedger::new(),
		}
	}
}
