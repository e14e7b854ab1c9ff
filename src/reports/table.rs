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
use std::fmt;

/// Plain-text table for reports that list many single-line rows, such as a
/// rate history. Column widths adapt to the widest cell.
pub struct Table {
	column_count: usize,
	rows: Vec<Row>,
	right_align: Vec<bool>, // indicates columns by index
}

enum Row {
	Header(Vec<String>),
	Data(Vec<String>),
	Separator,
}

impl Table {
	pub fn new(column_count: usize) -> Self {
		Self {
			column_count,
			rows: Vec::new(),
			right_align: vec![false; column_count],
		}
	}

	/// Adds a header row; its cells are centered.
	pub fn add_header(&mut self, row: Vec<&str>) {
		self.rows.push(Row::Header(
			row.into_iter().map(|s| s.to_string()).collect(),
		));
	}

	pub fn add_row(&mut self, row: Vec<String>) {
		self.rows.push(Row::Data(row));
	}

	/// Adds a full-width separator row.
	pub fn add_separator(&mut self) {
		self.rows.push(Row::Separator);
	}

	/// Specifies columns that should be right-aligned by index.
	pub fn right_align(&mut self, cols: Vec<usize>) {
		for col in cols {
			self.right_align[col] = true;
		}
	}

	fn column_widths(&self) -> Vec<usize> {
		let mut max_widths = vec![0; self.column_count];
		for row in &self.rows {
			if let Row::Data(cells) | Row::Header(cells) = row {
				for (i, value) in cells.iter().enumerate() {
					max_widths[i] = max_widths[i].max(value.chars().count());
				}
			}
		}
		max_widths
	}

	fn center_align(value: &str, width: usize) -> String {
		let len = value.chars().count();
		if len >= width {
			return value.to_string();
		}
		let left_padding = (width - len) / 2;
		let right_padding = width - len - left_padding;

		format!(
			"{}{}{}",
			" ".repeat(left_padding),
			value,
			" ".repeat(right_padding)
		)
	}
}

impl fmt::Display for Table {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let widths = self.column_widths();

		for row in &self.rows {
			let line = match row {
				Row::Header(cells) => cells
					.iter()
					.zip(&widths)
					.map(|(v, w)| Table::center_align(v, *w))
					.collect::<Vec<_>>()
					.join(" | "),
				Row::Data(cells) => cells
					.iter()
					.enumerate()
					.map(|(i, v)| {
						if self.right_align[i] {
							format!("{:>width$}", v, width = widths[i])
						} else {
							format!("{:<width$}", v, width = widths[i])
						}
					})
					.collect::<Vec<_>>()
					.join("   "),
				Row::Separator => {
					let total = widths.iter().sum::<usize>()
						+ 3 * self.column_count.saturating_sub(1);
					"-".repeat(total)
				},
			};
			writeln!(f, "{}", line.trim_end())?;
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_render_aligned() {
		let mut table = Table::new(2);
		table.add_header(vec!["Date", "Rate (PLN)"]);
		table.add_separator();
		table.add_row(vec!["2025-10-16".into(), "3.6512 PLN".into()]);
		table.add_row(vec!["2025-10-15".into(), "13.0001 PLN".into()]);
		table.right_align(vec![1]);

		let expected = [
			"   Date    | Rate (PLN)",
			"------------------------",
			"2025-10-16    3.6512 PLN",
			"2025-10-15   13.0001 PLN",
		];
		assert_eq!(table.to_string(), expected.join("\n") + "\n");
	}

	#[test]
	fn test_center_align() {
		assert_eq!(Table::center_align("ab", 6), "  ab  ");
		assert_eq!(Table::center_align("abc", 6), " abc  ");
		assert_eq!(Table::center_align("toolong", 3), "toolong");
	}
}
