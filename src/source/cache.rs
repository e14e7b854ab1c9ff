/* Copyright © 2024-2025 Adam Train <adam@trainrelay.net>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */
use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// A map whose entries expire a fixed time after they were written.
/// Expiry is checked on read; nothing runs in the background.
#[derive(Debug)]
pub struct TtlCache<K, V> {
	ttl: Duration,
	entries: HashMap<K, Entry<V>>,
}

#[derive(Debug)]
struct Entry<V> {
	value: V,
	written_at: Instant,
}

impl<K, V> TtlCache<K, V>
where
	K: Eq + Hash,
	V: Clone,
{
	pub fn new(ttl: Duration) -> Self {
		Self {
			ttl,
			entries: HashMap::new(),
		}
	}

	/// Returns a copy of the value for the key if it was written less than
	/// one TTL before `now`.
	pub fn get(&self, key: &K, now: Instant) -> Option<V> {
		let entry = self.entries.get(key)?;
		if now.saturating_duration_since(entry.written_at) < self.ttl {
			Some(entry.value.clone())
		} else {
			None
		}
	}

	/// Writes the value, replacing anything already stored for the key.
	pub fn insert(&mut self, key: K, value: V, now: Instant) {
		self.entries.insert(
			key,
			Entry {
				value,
				written_at: now,
			},
		);
	}

	/// Drops entries that can no longer be read.
	pub fn purge_expired(&mut self, now: Instant) {
		let ttl = self.ttl;
		self.entries
			.retain(|_, e| now.saturating_duration_since(e.written_at) < ttl);
	}

	pub fn clear(&mut self) {
		self.entries.clear();
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}
}
