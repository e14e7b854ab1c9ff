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
use crate::config::config_file::Source;
use crate::rates::currency::{Currency, TableType};
use crate::rates::record::{CurrentRate, RateSeries};
use crate::source::error::FetchError;
use crate::source::http::Client;
use crate::source::nbp::models::RatesHolder;
use crate::source::rate_source::RateSource;
use std::time::Duration;

pub const NBP_API_URL: &str = "https://api.nbp.pl/api/exchangerates/rates";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Read-only client for the exchange rates API of Narodowy Bank Polski.
pub struct NbpClient {
	http: Client,
}

impl NbpClient {
	pub fn new(config: &Source) -> Result<Self, FetchError> {
		let api_url = config.api_url.as_deref().unwrap_or(NBP_API_URL);
		let timeout = Duration::from_secs(
			config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
		);

		Ok(NbpClient {
			http: Client::new(api_url, timeout)?,
		})
	}

	pub fn current_endpoint(currency: Currency, table: TableType) -> String {
		format!("{}/{}/", table.path_segment(), currency.code())
	}

	pub fn history_endpoint(
		currency: Currency,
		table: TableType,
		days: u32,
	) -> String {
		format!("{}/{}/last/{}/", table.path_segment(), currency.code(), days)
	}
}

impl RateSource for NbpClient {
	fn current(
		&self,
		currency: Currency,
		table: TableType,
	) -> Result<CurrentRate, FetchError> {
		let resp: RatesHolder =
			self.http.get(&Self::current_endpoint(currency, table))?;
		resp.ensure_code(currency.code())?;

		// The endpoint answers with a single-element list; if it ever sends
		// more, the last one is the newest.
		let record = resp
			.into_series()?
			.last()
			.cloned()
			.ok_or_else(|| {
				FetchError::Malformed("no rates in response".into())
			})?;

		Ok(CurrentRate { record, table })
	}

	fn history(
		&self,
		currency: Currency,
		table: TableType,
		days: u32,
	) -> Result<RateSeries, FetchError> {
		let resp: RatesHolder =
			self.http.get(&Self::history_endpoint(currency, table, days))?;
		resp.ensure_code(currency.code())?;
		resp.into_series()
	}
}
