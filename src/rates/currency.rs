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
use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;

/// The currencies offered by the dashboard. NBP publishes many more, but only
/// these are selectable.
#[derive(ValueEnum, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[value(rename_all = "UPPER")]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
	Usd,
	Eur,
	Gbp,
	Chf,
	Jpy,
	Czk,
	Sek,
	Nok,
}

impl Currency {
	/// Every supported currency, in selector order.
	pub const ALL: [Currency; 8] = [
		Currency::Usd,
		Currency::Eur,
		Currency::Gbp,
		Currency::Chf,
		Currency::Jpy,
		Currency::Czk,
		Currency::Sek,
		Currency::Nok,
	];

	/// ISO 4217 code, as used in NBP request paths.
	pub fn code(&self) -> &'static str {
		match self {
			Currency::Usd => "USD",
			Currency::Eur => "EUR",
			Currency::Gbp => "GBP",
			Currency::Chf => "CHF",
			Currency::Jpy => "JPY",
			Currency::Czk => "CZK",
			Currency::Sek => "SEK",
			Currency::Nok => "NOK",
		}
	}

	pub fn name(&self) -> &'static str {
		match self {
			Currency::Usd => "US dollar",
			Currency::Eur => "Euro",
			Currency::Gbp => "Pound sterling",
			Currency::Chf => "Swiss franc",
			Currency::Jpy => "Japanese yen",
			Currency::Czk => "Czech koruna",
			Currency::Sek => "Swedish krona",
			Currency::Nok => "Norwegian krone",
		}
	}

	/// The following currency in selector order, wrapping around.
	pub fn next(&self) -> Currency {
		let i = self.index();
		Currency::ALL[(i + 1) % Currency::ALL.len()]
	}

	/// The preceding currency in selector order, wrapping around.
	pub fn prev(&self) -> Currency {
		let i = self.index();
		Currency::ALL[(i + Currency::ALL.len() - 1) % Currency::ALL.len()]
	}

	pub fn index(&self) -> usize {
		Currency::ALL.iter().position(|c| c == self).unwrap_or(0)
	}
}

impl fmt::Display for Currency {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} - {}", self.code(), self.name())
	}
}

/// NBP rate tables. A covers the common currencies with mid rates, B the
/// less traded ones (published weekly), and C carries bid/ask quotes.
#[derive(ValueEnum, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[value(rename_all = "UPPER")]
#[serde(rename_all = "UPPERCASE")]
pub enum TableType {
	A,
	B,
	C,
}

impl TableType {
	pub const ALL: [TableType; 3] = [TableType::A, TableType::B, TableType::C];

	/// Lowercase letter used in request paths.
	pub fn path_segment(&self) -> &'static str {
		match self {
			TableType::A => "a",
			TableType::B => "b",
			TableType::C => "c",
		}
	}

	pub fn next(&self) -> TableType {
		match self {
			TableType::A => TableType::B,
			TableType::B => TableType::C,
			TableType::C => TableType::A,
		}
	}
}

impl fmt::Display for TableType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.path_segment().to_ascii_uppercase())
	}
}
