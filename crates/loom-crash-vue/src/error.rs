// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the Vue capture SDK.

use thiserror::Error;

/// Result type alias for SDK operations.
pub type Result<T> = std::result::Result<T, VueSdkError>;

/// Errors that can occur in the Vue capture SDK.
#[derive(Debug, Error)]
pub enum VueSdkError {
	/// The sink's receiving side has gone away.
	#[error("event sink is closed")]
	SinkClosed,

	/// Options could not be loaded.
	#[error("configuration error: {0}")]
	Config(#[from] ConfigError),
}

/// Errors raised while reading capture options.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("invalid configuration: {0}")]
	Parse(String),
}
