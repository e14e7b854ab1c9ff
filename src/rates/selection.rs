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

/// The user's current choice of what to look at. Every fetch is driven by
/// exactly one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DashboardSelection {
	pub currency: Currency,
	pub table: TableType,
	history_days: u32,
}

impl DashboardSelection {
	pub const MIN_DAYS: u32 = 7;
	pub const MAX_DAYS: u32 = 90;
	pub const DEFAULT_DAYS: u32 = 30;

	/// Builds a selection, clamping the day count into the supported window.
	pub fn new(
		currency: Currency,
		table: TableType,
		history_days: u32,
	) -> Self {
		Self {
			currency,
			table,
			history_days: history_days
				.clamp(Self::MIN_DAYS, Self::MAX_DAYS),
		}
	}

	pub fn history_days(&self) -> u32 {
		self.history_days
	}

	pub fn is_valid_days(days: u32) -> bool {
		(Self::MIN_DAYS..=Self::MAX_DAYS).contains(&days)
	}

	pub fn with_currency(self, currency: Currency) -> Self {
		Self { currency, ..self }
	}

	pub fn with_table(self, table: TableType) -> Self {
		Self { table, ..self }
	}

	/// Moves the day count by the given delta, staying within bounds.
	pub fn step_days(self, delta: i64) -> Self {
		let days = (self.history_days as i64 + delta)
			.clamp(Self::MIN_DAYS as i64, Self::MAX_DAYS as i64);
		Self {
			history_days: days as u32,
			..self
		}
	}
}

impl Default for DashboardSelection {
	fn default() -> Self {
		Self::new(Currency::Usd, TableType::A, Self::DEFAULT_DAYS)
	}
}
