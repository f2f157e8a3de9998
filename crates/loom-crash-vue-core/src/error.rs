// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for Vue error capture.

use thiserror::Error;

/// Errors that can occur while building or decoding capture types.
#[derive(Debug, Error)]
pub enum CaptureError {
	#[error("invalid breadcrumb level: {0}")]
	InvalidBreadcrumbLevel(String),

	#[error("invalid breadcrumb type: {0}")]
	InvalidBreadcrumbType(String),

	#[error("invalid event type: {0}")]
	InvalidEventType(String),

	#[error("serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

/// Result type for capture operations.
pub type Result<T> = std::result::Result<T, CaptureError>;
