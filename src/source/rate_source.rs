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
use crate::source::error::FetchError;

#[cfg(test)]
use mockall::automock;

/// A provider of published exchange rates against PLN.
#[cfg_attr(test, automock)]
pub trait RateSource {
	/// The single latest quotation for the currency in the given table.
	fn current(
		&self,
		currency: Currency,
		table: TableType,
	) -> Result<CurrentRate, FetchError>;

	/// The last `days` published quotations, oldest first.
	fn history(
		&self,
		currency: Currency,
		table: TableType,
		days: u32,
	) -> Result<RateSeries, FetchError>;
}
