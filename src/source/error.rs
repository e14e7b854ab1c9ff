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
use reqwest::StatusCode;
use thiserror::Error;

/// Ways a rate fetch can fail. All of them mean "no data" to the dashboard;
/// the distinction only matters for what the user is told and what is logged.
#[derive(Debug, Error)]
pub enum FetchError {
	/// Could not reach the source at all (DNS, refused, timeout, ...)
	#[error("Connection error: {0}")]
	Transport(#[from] reqwest::Error),

	/// The source answered, but not with a 2xx
	#[error("Request failed with status: {0}")]
	Status(StatusCode),

	/// The body could not be turned into valid rate records
	#[error("Malformed response: {0}")]
	Malformed(String),
}

impl FetchError {
	/// Connection and decoding failures are surfaced to the user; a
	/// non-success status just leaves the panel empty.
	pub fn is_user_visible(&self) -> bool {
		matches!(self, FetchError::Transport(_) | FetchError::Malformed(_))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_status_is_the_only_silent_failure() {
		assert!(!FetchError::Status(StatusCode::NOT_FOUND).is_user_visible());
		assert!(FetchError::Malformed("empty".into()).is_user_visible());
	}

	#[test]
	fn test_messages() {
		assert_eq!(
			FetchError::Status(StatusCode::NOT_FOUND).to_string(),
			"Request failed with status: 404 Not Found"
		);
		assert_eq!(
			FetchError::Malformed("no rates".into()).to_string(),
			"Malformed response: no rates"
		);
	}
}
