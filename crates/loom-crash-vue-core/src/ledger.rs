// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Thread-safe breadcrumb ledger shared by every error site.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::breadcrumb::BreadcrumbEntry;

/// Newest-first buffer of breadcrumbs waiting to be attached to an event.
///
/// Cloning yields another handle to the same ledger. Construct one per
/// application and pass clones to everything that records activity; errors
/// drain it through [`BreadcrumbLedger::push_and_drain`].
///
/// Unbounded unless built with [`BreadcrumbLedger::with_capacity_limit`], in
/// which case the oldest entries are evicted first.
#[derive(Clone, Default)]
pub struct BreadcrumbLedger {
	inner: Arc<LedgerInner>,
}

#[derive(Default)]
struct LedgerInner {
	/// Front is the most recent entry.
	entries: Mutex<VecDeque<BreadcrumbEntry>>,
	capacity: Option<usize>,
}

impl BreadcrumbLedger {
	/// Create an unbounded ledger.
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a ledger that keeps at most `max` entries (never fewer than one).
	pub fn with_capacity_limit(max: usize) -> Self {
		Self {
			inner: Arc::new(LedgerInner {
				entries: Mutex::new(VecDeque::new()),
				capacity: Some(max.max(1)),
			}),
		}
	}

	/// Maximum number of entries kept, if bounded.
	pub fn capacity(&self) -> Option<usize> {
		self.inner.capacity
	}

	/// Insert `entry` as the most recent breadcrumb.
	pub fn push(&self, entry: BreadcrumbEntry) {
		let mut entries = self.inner.entries.lock();
		self.insert_front(&mut entries, entry);
	}

	/// Current contents, newest first. Does not modify the ledger.
	pub fn snapshot(&self) -> Vec<BreadcrumbEntry> {
		self.inner.entries.lock().iter().cloned().collect()
	}

	/// Remove every entry.
	pub fn clear(&self) {
		std::mem::take(&mut *self.inner.entries.lock());
	}

	/// Take the current contents, newest first, leaving the ledger empty.
	pub fn drain(&self) -> Vec<BreadcrumbEntry> {
		std::mem::take(&mut *self.inner.entries.lock()).into()
	}

	/// Push `entry`, then snapshot and clear, all under one lock.
	///
	/// Concurrent pushes land either entirely before (and are returned) or
	/// entirely after (and stay in the ledger).
	pub fn push_and_drain(&self, entry: BreadcrumbEntry) -> Vec<BreadcrumbEntry> {
		let mut entries = self.inner.entries.lock();
		self.insert_front(&mut entries, entry);
		std::mem::take(&mut *entries).into()
	}

	pub fn len(&self) -> usize {
		self.inner.entries.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.inner.entries.lock().is_empty()
	}

	fn insert_front(&self, entries: &mut VecDeque<BreadcrumbEntry>, entry: BreadcrumbEntry) {
		entries.push_front(entry);
		if let Some(max) = self.inner.capacity {
			entries.truncate(max);
		}
	}
}

impl std::fmt::Debug for BreadcrumbLedger {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("BreadcrumbLedger")
			.field("len", &self.len())
			.field("capacity", &self.inner.capacity)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::breadcrumb::{BreadcrumbLevel, BreadcrumbType};
	use crate::event::EventId;
	use proptest::prelude::*;
	use std::thread;

	fn crumb(message: &str) -> BreadcrumbEntry {
		BreadcrumbEntry::new(
			EventId::new(),
			BreadcrumbType::Customer,
			BreadcrumbLevel::Info,
			message,
		)
	}

	fn messages(entries: &[BreadcrumbEntry]) -> Vec<&str> {
		entries.iter().map(|e| e.message.as_str()).collect()
	}

	#[test]
	fn test_push_is_newest_first() {
		let ledger = BreadcrumbLedger::new();
		ledger.push(crumb("a"));
		ledger.push(crumb("b"));

		assert_eq!(messages(&ledger.snapshot()), vec!["b", "a"]);
	}

	#[test]
	fn test_snapshot_does_not_mutate() {
		let ledger = BreadcrumbLedger::new();
		ledger.push(crumb("a"));

		let first = ledger.snapshot();
		let second = ledger.snapshot();
		assert_eq!(first, second);
		assert_eq!(ledger.len(), 1);
	}

	#[test]
	fn test_clear() {
		let ledger = BreadcrumbLedger::new();
		ledger.push(crumb("a"));
		ledger.clear();

		assert!(ledger.is_empty());
		assert!(ledger.snapshot().is_empty());
	}

	#[test]
	fn test_clear_then_reuse() {
		let ledger = BreadcrumbLedger::with_capacity_limit(4);
		for i in 0..4 {
			ledger.push(crumb(&i.to_string()));
		}
		ledger.clear();
		assert!(ledger.is_empty());

		ledger.push(crumb("after"));
		assert_eq!(messages(&ledger.snapshot()), vec!["after"]);
		assert_eq!(ledger.capacity(), Some(4));
	}

	#[test]
	fn test_drain_empties() {
		let ledger = BreadcrumbLedger::new();
		ledger.push(crumb("a"));
		ledger.push(crumb("b"));

		let drained = ledger.drain();
		assert_eq!(messages(&drained), vec!["b", "a"]);
		assert!(ledger.is_empty());
	}

	#[test]
	fn test_push_and_drain_includes_new_entry_first() {
		let ledger = BreadcrumbLedger::new();
		ledger.push(crumb("click"));

		let drained = ledger.push_and_drain(crumb("error"));
		assert_eq!(messages(&drained), vec!["error", "click"]);
		assert!(ledger.is_empty());
	}

	#[test]
	fn test_clones_share_state() {
		let ledger = BreadcrumbLedger::new();
		let other = ledger.clone();
		other.push(crumb("a"));

		assert_eq!(ledger.len(), 1);
	}

	#[test]
	fn test_capacity_evicts_oldest() {
		let ledger = BreadcrumbLedger::with_capacity_limit(3);
		for i in 0..5 {
			ledger.push(crumb(&format!("msg {i}")));
		}

		assert_eq!(ledger.len(), 3);
		assert_eq!(messages(&ledger.snapshot()), vec!["msg 4", "msg 3", "msg 2"]);
		assert_eq!(ledger.capacity(), Some(3));
	}

	#[test]
	fn test_unbounded_by_default() {
		let ledger = BreadcrumbLedger::new();
		for i in 0..500 {
			ledger.push(crumb(&format!("msg {i}")));
		}
		assert_eq!(ledger.len(), 500);
		assert_eq!(ledger.capacity(), None);
	}

	#[test]
	fn test_concurrent_drains_never_lose_or_duplicate() {
		let ledger = BreadcrumbLedger::new();
		let threads: Vec<_> = (0..8)
			.map(|t| {
				let ledger = ledger.clone();
				thread::spawn(move || {
					let mut seen = Vec::new();
					for i in 0..200 {
						ledger.push(crumb(&format!("{t}-{i}")));
						if i % 10 == 0 {
							seen.extend(ledger.push_and_drain(crumb(&format!("{t}-drain-{i}"))));
						}
					}
					seen
				})
			})
			.collect();

		let mut all: Vec<String> = threads
			.into_iter()
			.flat_map(|h| h.join().unwrap())
			.map(|e| e.message)
			.collect();
		all.extend(ledger.drain().into_iter().map(|e| e.message));

		let total = all.len();
		all.sort();
		all.dedup();
		assert_eq!(all.len(), total);
		assert_eq!(total, 8 * (200 + 20));
	}

	proptest! {
		#[test]
		fn snapshot_is_reverse_push_order(items in proptest::collection::vec("[a-z]{1,8}", 0..50)) {
			let ledger = BreadcrumbLedger::new();
			for item in &items {
				ledger.push(crumb(item));
			}
			let snapshot = ledger.snapshot();
			let expected: Vec<&str> = items.iter().rev().map(String::as_str).collect();
			prop_assert_eq!(messages(&snapshot), expected);
		}

		#[test]
		fn bounded_ledger_never_exceeds_limit(limit in 1usize..20, pushes in 0usize..100) {
			let ledger = BreadcrumbLedger::with_capacity_limit(limit);
			for i in 0..pushes {
				ledger.push(crumb(&i.to_string()));
			}
			prop_assert_eq!(ledger.len(), pushes.min(limit));
		}
	}
}
