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
use crate::rates::currency::TableType;
use chrono::NaiveDate;

/// One day's official mid rate of a currency against PLN.
/// A value object, immutable once fetched.
#[derive(Clone, Debug, PartialEq)]
pub struct RateRecord {
	pub date: NaiveDate,
	pub mid_rate: f64,

	/// NBP table number the rate was published in, e.g. "201/A/NBP/2025"
	pub table_no: Option<String>,
}

impl RateRecord {
	pub fn new(date: NaiveDate, mid_rate: f64) -> Self {
		Self {
			date,
			mid_rate,
			table_no: None,
		}
	}
}

/// Rate records in the order the source returned them (ascending by date).
/// There is no way to reorder in place: statistics read the source order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RateSeries {
	records: Vec<RateRecord>,
}

impl RateSeries {
	pub fn new(records: Vec<RateRecord>) -> Self {
		Self { records }
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	pub fn first(&self) -> Option<&RateRecord> {
		self.records.first()
	}

	pub fn last(&self) -> Option<&RateRecord> {
		self.records.last()
	}

	pub fn mid_rates(&self) -> impl Iterator<Item = f64> + '_ {
		self.records.iter().map(|r| r.mid_rate)
	}

	/// A display-only view with the newest record first.
	pub fn newest_first(&self) -> Vec<&RateRecord> {
		let mut view: Vec<&RateRecord> = self.records.iter().collect();
		view.sort_by(|a, b| b.date.cmp(&a.date));
		view
	}
}

/// The latest quotation of a currency, with the table it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct CurrentRate {
	pub record: RateRecord,
	pub table: TableType,
}

impl CurrentRate {
	/// "A", or "A (201/A/NBP/2025)" when the table number is known.
	pub fn table_label(&self) -> String {
		match &self.record.table_no {
			Some(no) => format!("{} ({})", self.table, no),
			None => self.table.to_string(),
		}
	}
}
