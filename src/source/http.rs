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
use crate::source::error::FetchError;
use log::debug;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use std::time::Duration;

pub struct Client {
	client: reqwest::blocking::Client,
	base_url: String,
}

impl Client {
	pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
		Ok(Client {
			client: reqwest::blocking::Client::builder()
				.timeout(timeout)
				.build()?,
			base_url: base_url.trim_end_matches('/').to_string(),
		})
	}

	/// Builds the full URL for an endpoint relative to the base.
	pub fn url(&self, endpoint: &str) -> String {
		format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
	}

	/// Sends a GET asking for JSON and decodes the response. Errors on non-2xx
	/// response codes.
	pub fn get<R>(&self, endpoint: &str) -> Result<R, FetchError>
	where
		R: for<'de> Deserialize<'de>,
	{
		let url = self.url(endpoint);

		debug!("Sending GET to {}?format=json", url);
		let response = self
			.client
			.get(&url)
			.header(ACCEPT, "application/json")
			.query(&[("format", "json")])
			.send()?;

		// Handle non-2xx response codes
		if !response.status().is_success() {
			return Err(FetchError::Status(response.status()));
		}

		let response_data: R = response
			.json()
			.map_err(|e| FetchError::Malformed(e.to_string()))?;
		Ok(response_data)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::source::test_server::{response, serve_once};
	use reqwest::StatusCode;

	fn client(base_url: &str) -> Client {
		Client::new(base_url, Duration::from_secs(5)).unwrap()
	}

	#[test]
	fn test_url_joining() {
		let client = Client::new(
			"https://api.nbp.pl/api/exchangerates/rates/",
			Duration::from_secs(1),
		)
		.unwrap();

		assert_eq!(
			client.url("a/USD/last/7/"),
			"https://api.nbp.pl/api/exchangerates/rates/a/USD/last/7/"
		);
		assert_eq!(
			client.url("/c/EUR/"),
			"https://api.nbp.pl/api/exchangerates/rates/c/EUR/"
		);
	}

	#[test]
	fn test_unreachable_host_is_transport_failure() {
		// Nothing listens on the discard port locally
		let client =
			Client::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
		let result: Result<serde_json::Value, FetchError> =
			client.get("a/USD/");

		assert!(matches!(result, Err(FetchError::Transport(_))));
	}

	#[test]
	fn test_json_body_is_decoded() {
		let (base, request) = serve_once(response(
			"200 OK",
			"application/json",
			r#"{"code":"USD","rates":[]}"#,
		));

		let value: serde_json::Value = client(&base).get("a/USD/").unwrap();
		assert_eq!(value["code"], "USD");
		assert_eq!(request.recv().unwrap(), "GET /a/USD/?format=json HTTP/1.1");
	}

	#[test]
	fn test_not_found_is_status_failure() {
		let (base, _) =
			serve_once(response("404 Not Found", "text/plain", "404 NotFound"));

		let result: Result<serde_json::Value, FetchError> =
			client(&base).get("b/USD/");
		assert!(matches!(
			result,
			Err(FetchError::Status(StatusCode::NOT_FOUND))
		));
	}

	#[test]
	fn test_undecodable_body_is_malformed() {
		let (base, _) =
			serve_once(response("200 OK", "text/html", "<html>busy</html>"));

		let result: Result<serde_json::Value, FetchError> =
			client(&base).get("a/USD/");
		assert!(matches!(result, Err(FetchError::Malformed(_))));
	}
}
