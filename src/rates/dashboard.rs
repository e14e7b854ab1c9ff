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
use crate::rates::currency::{Currency, TableType};
use crate::rates::record::{CurrentRate, RateSeries};
use crate::rates::selection::DashboardSelection;
use crate::rates::statistics::{compute_statistics, Statistics};
use crate::source::cache::TtlCache;
use crate::source::error::FetchError;
use crate::source::rate_source::RateSource;
use log::{trace, warn};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(3600);

const MAX_NOTICES: usize = 5;

/// Everything one run of the pipeline produced for a single selection.
/// Statistics are always derived from the series held alongside them.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
	pub selection: DashboardSelection,
	pub current: Option<CurrentRate>,
	pub series: Option<RateSeries>,
	pub stats: Option<Statistics>,

	/// User-facing messages raised while producing this snapshot
	pub notices: Vec<String>,
}

/// Fetches rates for a selection and derives the figures shown to the user.
///
/// Fetch results are cached by their full parameter tuple for one TTL after
/// they were written. Failures are never cached, so the next interaction
/// tries again.
pub struct RateDashboard<S: RateSource> {
	source: S,

	current_cache: TtlCache<(Currency, TableType), CurrentRate>,
	history_cache: TtlCache<(Currency, TableType, u32), RateSeries>,

	clock: Box<dyn Fn() -> Instant>,

	notices: VecDeque<String>,
}

impl<S: RateSource> RateDashboard<S> {
	pub fn new(source: S, ttl: Duration) -> Self {
		Self::with_clock(source, ttl, Box::new(Instant::now))
	}

	/// Same as `new`, but reads the time from the given function.
	pub fn with_clock(
		source: S,
		ttl: Duration,
		clock: Box<dyn Fn() -> Instant>,
	) -> Self {
		Self {
			source,
			current_cache: TtlCache::new(ttl),
			history_cache: TtlCache::new(ttl),
			clock,
			notices: VecDeque::new(),
		}
	}

	/// The latest quotation, or None if the source could not provide one.
	pub fn fetch_current(
		&mut self,
		currency: Currency,
		table: TableType,
	) -> Option<CurrentRate> {
		let now = (self.clock)();
		let key = (currency, table);

		if let Some(hit) = self.current_cache.get(&key, now) {
			trace!(
				"cache hit for current {} in table {}",
				currency.code(),
				table
			);
			return Some(hit);
		}

		match self.source.current(currency, table) {
			Ok(rate) => {
				self.current_cache.insert(key, rate.clone(), now);
				Some(rate)
			},
			Err(e) => {
				self.record_failure("current rate", currency, table, e);
				None
			},
		}
	}

	/// The last `days` quotations, or None if the source could not provide
	/// them. `days` is taken as given.
	pub fn fetch_history(
		&mut self,
		currency: Currency,
		table: TableType,
		days: u32,
	) -> Option<RateSeries> {
		let now = (self.clock)();
		let key = (currency, table, days);

		if let Some(hit) = self.history_cache.get(&key, now) {
			trace!(
				"cache hit for {} days of {} in table {}",
				days,
				currency.code(),
				table
			);
			return Some(hit);
		}

		match self.source.history(currency, table, days) {
			Ok(series) => {
				self.history_cache.insert(key, series.clone(), now);
				Some(series)
			},
			Err(e) => {
				self.record_failure("rate history", currency, table, e);
				None
			},
		}
	}

	/// Runs the whole pipeline for the selection from scratch. Anything
	/// produced for an earlier selection is discarded, notices included.
	pub fn recompute(&mut self, selection: DashboardSelection) -> Snapshot {
		self.notices.clear();
		let now = (self.clock)();
		self.current_cache.purge_expired(now);
		self.history_cache.purge_expired(now);
		trace!(
			"{} cached fetches",
			self.current_cache.len() + self.history_cache.len()
		);

		let current = self.fetch_current(selection.currency, selection.table);
		let series = self.fetch_history(
			selection.currency,
			selection.table,
			selection.history_days(),
		);
		let stats = series.as_ref().and_then(compute_statistics);

		Snapshot {
			selection,
			current,
			series,
			stats,
			notices: self.notices.iter().cloned().collect(),
		}
	}

	/// Forgets every cached fetch.
	pub fn refresh(&mut self) {
		self.current_cache.clear();
		self.history_cache.clear();
	}

	fn push_notice(&mut self, notice: String) {
		self.notices.push_back(notice);
		while self.notices.len() > MAX_NOTICES {
			self.notices.pop_front();
		}
	}

	fn record_failure(
		&mut self,
		what: &str,
		currency: Currency,
		table: TableType,
		e: FetchError,
	) {
		warn!(
			"no {} for {} in table {}: {}",
			what,
			currency.code(),
			table,
			e
		);

		if e.is_user_visible() {
			self.push_notice(e.to_string());
		}
	}
}
