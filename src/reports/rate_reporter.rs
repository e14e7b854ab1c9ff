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
use crate::rates::currency::Currency;
use crate::rates::dashboard::Snapshot;
use crate::reports::table::Table;
use crate::util::format::{format_percent, format_rate, sparkline};
use std::fmt::Write;

/// Prints the panels of one pipeline run as plain text.
pub struct RateReporter {
	snapshot: Snapshot,
}

impl RateReporter {
	pub fn new(snapshot: Snapshot) -> RateReporter {
		Self { snapshot }
	}

	pub fn print_currencies() {
		print!("{}", Self::currency_list());
	}

	pub fn print_current(&self) {
		print!("{}", self.current_panel());
		print!("{}", self.notices());
	}

	pub fn print_history(&self) {
		print!("{}", self.history_panel());
		print!("{}", self.notices());
	}

	fn currency_list() -> String {
		Currency::ALL
			.iter()
			.map(|c| format!("{}\n", c))
			.collect()
	}

	fn current_panel(&self) -> String {
		let selection = &self.snapshot.selection;

		let Some(current) = &self.snapshot.current else {
			return format!(
				"No current rate available for {} in table {}\n",
				selection.currency.code(),
				selection.table
			);
		};

		let mut out = String::new();
		let _ = writeln!(out, "{}", selection.currency);
		let _ = writeln!(out, "{}", format_rate(current.record.mid_rate));
		let _ = writeln!(out, "Date: {}", current.record.date);
		let _ = writeln!(out, "Table: {}", current.table_label());
		out
	}

	fn history_panel(&self) -> String {
		let selection = &self.snapshot.selection;

		let (Some(series), Some(stats)) =
			(&self.snapshot.series, &self.snapshot.stats)
		else {
			return format!(
				"No rate history available for {} in table {}\n",
				selection.currency.code(),
				selection.table
			);
		};

		let mut out = String::new();
		let _ = writeln!(
			out,
			"{}/PLN - last {} days",
			selection.currency.code(),
			selection.history_days()
		);
		let _ = writeln!(
			out,
			"{}",
			sparkline(&series.mid_rates().collect::<Vec<_>>())
		);
		let _ = writeln!(out);

		let mut summary = Table::new(4);
		summary.add_header(vec!["Minimum", "Maximum", "Average", "Change"]);
		summary.add_separator();
		summary.add_row(vec![
			format_rate(stats.min),
			format_rate(stats.max),
			format_rate(stats.mean),
			format_percent(stats.percent_change),
		]);
		summary.right_align(vec![0, 1, 2, 3]);
		let _ = writeln!(out, "{}", summary);

		// display order only; statistics above used source order
		let mut data = Table::new(2);
		data.add_header(vec!["Date", "Rate (PLN)"]);
		data.add_separator();
		for record in series.newest_first() {
			data.add_row(vec![
				record.date.to_string(),
				format_rate(record.mid_rate),
			]);
		}
		data.right_align(vec![1]);
		let _ = write!(out, "{}", data);

		out
	}

	fn notices(&self) -> String {
		self.snapshot
			.notices
			.iter()
			.map(|n| format!("! {}\n", n))
			.collect()
	}
}
