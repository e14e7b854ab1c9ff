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
use std::fs;
use std::process::{Command, Output};

const OFFLINE_CONFIG: &str = "tests/test_data/offline.toml";

fn nbpr(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_nbpr"))
		.args(args)
		.output()
		.expect("Failed to execute process")
}

/// Collects every config file in the given test data directory.
fn collect_configs(subfolder: &str) -> Vec<String> {
	let dir_path = format!("tests/test_data/{}", subfolder);

	let mut configs: Vec<String> = fs::read_dir(&dir_path)
		.map(|entries| {
			entries
				.flatten()
				.map(|e| e.path().to_string_lossy().into_owned())
				.filter(|p| p.ends_with(".toml"))
				.collect()
		})
		.unwrap_or_default();

	configs.sort();
	configs
}

fn assert_success(output: &Output) -> String {
	assert!(
		output.status.success(),
		"failed: {}",
		String::from_utf8_lossy(&output.stderr)
	);
	String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_integration_list_currencies() {
	let stdout = assert_success(&nbpr(&["ls"]));

	let expected = fs::read_to_string("tests/test_data/currencies_out.txt")
		.expect("Failed to read expected output file");

	assert_eq!(stdout.trim(), expected.trim());
}

#[test]
fn test_integration_current_offline() {
	let stdout = assert_success(&nbpr(&["cur", "--config", OFFLINE_CONFIG]));

	// currency comes from the config defaults
	assert!(stdout.contains("No current rate available for EUR in table A"));
	assert!(stdout.contains("! Connection error"));
}

#[test]
fn test_integration_history_offline() {
	let stdout = assert_success(&nbpr(&[
		"hist",
		"--config",
		OFFLINE_CONFIG,
		"-c",
		"jpy",
		"-t",
		"c",
		"-d",
		"7",
	]));

	assert!(stdout.contains("No rate history available for JPY in table C"));
	assert!(stdout.contains("! Connection error"));
	assert!(!stdout.contains("Average"));
}

#[test]
fn test_integration_days_out_of_range() {
	for days in ["6", "91", "thirty"] {
		let output =
			nbpr(&["hist", "--config", OFFLINE_CONFIG, "-d", days]);
		assert!(
			!output.status.success(),
			"-d {} unexpectedly succeeded!",
			days
		);
	}
}

#[test]
fn test_integration_unknown_currency() {
	let output = nbpr(&["cur", "--config", OFFLINE_CONFIG, "-c", "PLN"]);
	assert!(!output.status.success());
}

#[test]
fn test_integration_missing_config() {
	let output =
		nbpr(&["cur", "--config", "tests/test_data/does_not_exist.toml"]);
	assert!(!output.status.success());
}

#[test]
fn test_integration_should_fail() {
	let configs = collect_configs("failures");
	assert!(!configs.is_empty());

	for config in configs {
		println!("running for {}...", config);

		let output = nbpr(&["cur", "--config", config.as_str()]);
		assert!(
			!output.status.success(),
			"{} unexpectedly succeeded!",
			config
		);
	}
}
