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
use crate::config::config_file::Config;
use crate::rates::selection::DashboardSelection;
use anyhow::{anyhow, bail, Error};
use dirs::home_dir;
use std::fs;
use std::fs::File;
use std::path::PathBuf;

/// Default config location, relative to the home directory
const CONFIG_PATH: &str = ".config/nbpr/config.toml";

/// Log file used while the dashboard owns the terminal
const LOG_PATH: &str = ".config/nbpr/nbpr.log";

pub struct Filesystem {
	home: Option<PathBuf>,
}

impl Filesystem {
	pub fn new() -> Self {
		Self { home: home_dir() }
	}

	#[cfg(test)]
	pub fn with_home(home: Option<PathBuf>) -> Self {
		Self { home }
	}

	/// Where the dashboard writes its log, if there is a home directory.
	pub fn log_path(&self) -> Option<PathBuf> {
		self.home.as_ref().map(|h| h.join(LOG_PATH))
	}

	/// Fetches the config from the given path, or the default path if none.
	/// A missing default config is created empty; a missing custom one is an
	/// error.
	pub fn get_config(
		&self,
		custom_config_path: Option<&String>,
	) -> Result<Config, Error> {
		let config_path = match &custom_config_path {
			None => self
				.home
				.as_ref()
				.ok_or_else(|| anyhow!("Unable to determine home directory"))?
				.join(CONFIG_PATH),
			Some(p) => PathBuf::from(p),
		};

		// create empty config file if it doesn't exist
		if !config_path.exists() && custom_config_path.is_none() {
			if let Some(parent) = config_path.parent() {
				fs::create_dir_all(parent)?;
			}
			File::create(config_path.clone())?;
		}

		let content = fs::read_to_string(&config_path).map_err(|e| {
			anyhow!("failed to read config {}: {}", config_path.display(), e)
		})?;
		let config = parse_config(&content)?;

		Ok(config)
	}
}

/// Parses and validates config file contents.
pub fn parse_config(content: &str) -> Result<Config, Error> {
	let config: Config = toml::from_str(content)
		.map_err(|e| anyhow!("failed to parse config: {}", e))?;

	if let Some(days) = config.defaults().days {
		if !DashboardSelection::is_valid_days(days) {
			bail!(
				"defaults.days must be between {} and {}",
				DashboardSelection::MIN_DAYS,
				DashboardSelection::MAX_DAYS
			);
		}
	}

	if config.source().timeout_secs == Some(0) {
		bail!("source.timeout_secs must be greater than zero");
	}

	if let Some(url) = &config.source().api_url {
		if !url.starts_with("http://") && !url.starts_with("https://") {
			bail!("source.api_url must be an http(s) URL: {}", url);
		}
	}

	Ok(config)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rates::currency::Currency;

	#[test]
	fn test_parse_valid_config() {
		let config =
			parse_config("[defaults]\ncurrency = \"NOK\"\ndays = 90").unwrap();
		assert_eq!(config.defaults().currency, Some(Currency::Nok));
		assert_eq!(config.defaults().days, Some(90));
	}

	#[test]
	fn test_days_out_of_range() {
		assert!(parse_config("[defaults]\ndays = 6").is_err());
		assert!(parse_config("[defaults]\ndays = 91").is_err());
	}

	#[test]
	fn test_bad_source_values() {
		assert!(parse_config("[source]\ntimeout_secs = 0").is_err());
		assert!(parse_config("[source]\napi_url = \"ftp://nbp.pl\"").is_err());
		assert!(parse_config("[source]\ncache_ttl_secs = 0").is_ok());
	}

	#[test]
	fn test_log_path_sits_next_to_config() {
		let fs = Filesystem::with_home(Some(PathBuf::from("/home/ola")));
		assert_eq!(
			fs.log_path(),
			Some(PathBuf::from("/home/ola/.config/nbpr/nbpr.log"))
		);
		assert_eq!(Filesystem::with_home(None).log_path(), None);
	}

	#[test]
	fn test_missing_custom_config_is_error() {
		let fs = Filesystem::new();
		let path = "/nonexistent/nbpr/config.toml".to_string();
		assert!(fs.get_config(Some(&path)).is_err());
	}

	#[test]
	fn test_default_config_created_when_missing() {
		let home = std::env::temp_dir()
			.join(format!("nbpr-home-{}", std::process::id()));
		let fs = Filesystem::with_home(Some(home.clone()));

		let config = fs.get_config(None).unwrap();
		assert!(config.source.is_none());
		assert!(home.join(CONFIG_PATH).exists());

		std::fs::remove_dir_all(home).unwrap();
	}
}
