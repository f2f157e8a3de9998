// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Example: capture Vue lifecycle errors with the loom-crash-vue SDK.
//!
//! Run with:
//!   LOOM_CRASH_VUE_DEBUG=1 cargo run --example capture -p loom-crash-vue

use std::sync::Arc;

use loom_crash_vue::{
	BreadcrumbEntry, BreadcrumbLevel, BreadcrumbType, CaptureOptions, ChannelSink,
	ComponentContext, EventId, FrameworkHost, HostError, VuePlugin,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.init();

	let options = CaptureOptions::from_env()?;
	println!("Options: {options:?}");

	let ledger = options.ledger();
	let plugin = VuePlugin::new(ledger.clone(), options);
	let host = FrameworkHost::new();
	let (sink, mut events) = ChannelSink::new();
	plugin.attach(Some(&host), Arc::new(sink));

	let consumer = tokio::spawn(async move {
		while let Some(event) = events.recv().await {
			match event.to_json() {
				Ok(json) => println!("{json:#}"),
				Err(e) => eprintln!("Failed to serialize event {}: {e}", event.id),
			}
		}
	});

	// Activity recorded by other instrumentation
	ledger.push(BreadcrumbEntry::new(
		EventId::new(),
		BreadcrumbType::Route,
		BreadcrumbLevel::Info,
		"/ -> /cart",
	));
	ledger.push(BreadcrumbEntry::new(
		EventId::new(),
		BreadcrumbType::Click,
		BreadcrumbLevel::Info,
		"button#checkout",
	));

	host.dispatch(
		&HostError::new("TypeError", "Cannot read properties of undefined (reading 'total')")
			.with_stack(
				"TypeError: Cannot read properties of undefined (reading 'total')\n    at \
				 Proxy.render (https://shop.example.com/js/app-3f2a9c.js:1:18234)\n    at \
				 renderComponentRoot (https://shop.example.com/js/chunk-vendors.js:1:40211)",
			),
		&ComponentContext::named("CartSummary"),
		"mounted",
	);

	host.dispatch(
		&HostError::new("Error", "no stack here"),
		&ComponentContext::default(),
		"updated",
	);

	drop(host);
	drop(plugin);
	consumer.await?;
	Ok(())
}
