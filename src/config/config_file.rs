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
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
	pub source: Option<Source>,
	pub defaults: Option<Defaults>,
}

/// Where rates come from and how long fetched rates are reused.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Source {
	pub api_url: Option<String>,
	pub timeout_secs: Option<u64>,

	/// How long a fetched rate is served from memory; 0 disables caching
	pub cache_ttl_secs: Option<u64>,
}

/// Initial selection, used where no command-line flag says otherwise.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Defaults {
	pub currency: Option<Currency>,
	pub table: Option<TableType>,
	pub days: Option<u32>,
}

impl Config {
	pub fn source(&self) -> &Source {
		static EMPTY: Source = Source {
			api_url: None,
			timeout_secs: None,
			cache_ttl_secs: None,
		};
		self.source.as_ref().unwrap_or(&EMPTY)
	}

	pub fn defaults(&self) -> &Defaults {
		static EMPTY: Defaults = Defaults {
			currency: None,
			table: None,
			days: None,
		};
		self.defaults.as_ref().unwrap_or(&EMPTY)
	}
}
