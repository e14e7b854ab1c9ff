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
use crate::rates::record::{RateRecord, RateSeries};
use crate::source::error::FetchError;
use chrono::NaiveDate;
use serde::Deserialize;

// ---------------
// -- RECEIVING --
// ---------------

/// Response body of both the current-rate and the last-N endpoints.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RatesHolder {
	/// ISO code of the quoted currency
	pub code: Option<String>,
	pub rates: Vec<Rate>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Rate {
	pub no: Option<String>,
	pub effective_date: NaiveDate,

	/// Tables A and B
	pub mid: Option<f64>,

	/// Table C publishes buy/sell quotes instead of a mid rate
	pub bid: Option<f64>,
	pub ask: Option<f64>,
}

impl Rate {
	/// The mid rate, derived from bid/ask when the table does not publish one.
	pub fn mid_rate(&self) -> Option<f64> {
		match (self.mid, self.bid, self.ask) {
			(Some(mid), _, _) => Some(mid),
			(None, Some(bid), Some(ask)) => Some((bid + ask) / 2.0),
			_ => None,
		}
	}

	pub fn into_record(self) -> Result<RateRecord, FetchError> {
		let mid_rate = match self.mid_rate() {
			Some(r) if r.is_finite() && r > 0.0 => r,
			Some(r) => {
				return Err(FetchError::Malformed(format!(
					"non-positive rate {} on {}",
					r, self.effective_date
				)))
			},
			None => {
				return Err(FetchError::Malformed(format!(
					"no rate on {}",
					self.effective_date
				)))
			},
		};

		Ok(RateRecord {
			date: self.effective_date,
			mid_rate,
			table_no: self.no,
		})
	}
}

impl RatesHolder {
	/// Fails if the body quotes some other currency than the one asked for.
	pub fn ensure_code(&self, expected: &str) -> Result<(), FetchError> {
		match &self.code {
			Some(code) if !code.eq_ignore_ascii_case(expected) => Err(
				FetchError::Malformed(format!(
					"expected rates for {}, got {}",
					expected, code
				)),
			),
			_ => Ok(()),
		}
	}

	/// Converts every rate in the body, keeping source order. Fails as a
	/// whole if any record is invalid or if there are none at all.
	pub fn into_series(self) -> Result<RateSeries, FetchError> {
		if self.rates.is_empty() {
			return Err(FetchError::Malformed("no rates in response".into()));
		}

		let records = self
			.rates
			.into_iter()
			.map(Rate::into_record)
			.collect::<Result<Vec<_>, _>>()?;

		Ok(RateSeries::new(records))
	}
}
