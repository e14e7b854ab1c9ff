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
use crate::config::filesystem::Filesystem;
use crate::rates::currency::{Currency, TableType};
use crate::rates::dashboard::{RateDashboard, DEFAULT_CACHE_TTL};
use crate::rates::selection::DashboardSelection;
use crate::reports::rate_reporter::RateReporter;
use crate::source::nbp::core::NbpClient;
use crate::ui::app::App;
use anyhow::Error;
use clap::{Parser, ValueEnum};
use env_logger::{Env, Target, WriteStyle};
use log::{info, LevelFilter};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::time::Duration;

mod config;
mod rates;
mod reports;
mod source;
mod ui;
mod util;

#[derive(Parser)]
#[command(
	name = "nbpr",
	version = "0.1",
	about = "Exchange rates from the Polish central bank"
)]
struct Cli {
	// ----------------
	// -- POSITIONAL --
	// ----------------
	/// The command to execute
	command: Directive,

	// -----------
	// -- FLAGS --
	// -----------
	/// Currency to show (default: USD)
	#[arg(short, long, ignore_case = true)]
	currency: Option<Currency>,

	/// NBP table to read from (default: A)
	#[arg(short, long, ignore_case = true)]
	table: Option<TableType>,

	/// Days of history, 7 to 90 (default: 30)
	#[arg(short, long, value_parser = clap::value_parser!(u32).range(7..=90))]
	days: Option<u32>,

	/// Custom config file location (default: ~/.config/nbpr/config.toml)
	#[arg(long)]
	config: Option<String>,
}

impl Cli {
	/// Flags win over config defaults, which win over the built-in defaults.
	fn selection(&self, config: &Config) -> DashboardSelection {
		let defaults = config.defaults();
		let fallback = DashboardSelection::default();

		DashboardSelection::new(
			self.currency.or(defaults.currency).unwrap_or(fallback.currency),
			self.table.or(defaults.table).unwrap_or(fallback.table),
			self.days
				.or(defaults.days)
				.unwrap_or(fallback.history_days()),
		)
	}
}

#[derive(ValueEnum, Clone, PartialEq)]
enum Directive {
	Dash, // interactive dashboard
	Cur,  // current rate
	Hist, // rate history with statistics
	Ls,   // list supported currencies
}

/// Where log records go for one run.
#[derive(Debug, PartialEq)]
enum LogTarget {
	Stderr,
	File(PathBuf),
	Off,
}

/// The dashboard draws on the terminal behind stderr, so it logs to a file
/// instead, or not at all when there is no home directory.
fn log_target(command: &Directive, fs: &Filesystem) -> LogTarget {
	match command {
		Directive::Dash => match fs.log_path() {
			Some(path) => LogTarget::File(path),
			None => LogTarget::Off,
		},
		Directive::Cur | Directive::Hist | Directive::Ls => LogTarget::Stderr,
	}
}

fn init_logger(target: LogTarget) -> Result<(), Error> {
	let mut builder =
		env_logger::Builder::from_env(Env::default().default_filter_or("warn"));

	match target {
		LogTarget::Stderr => {},
		LogTarget::File(path) => {
			if let Some(parent) = path.parent() {
				fs::create_dir_all(parent)?;
			}
			let file = OpenOptions::new().create(true).append(true).open(path)?;
			builder
				.target(Target::Pipe(Box::new(file)))
				.write_style(WriteStyle::Never);
		},
		LogTarget::Off => {
			builder.filter_level(LevelFilter::Off);
		},
	}

	builder.init();
	Ok(())
}

fn main() -> Result<(), Error> {
	let args = Cli::parse();
	let fs = Filesystem::new();
	init_logger(log_target(&args.command, &fs))?;

	match args.command {
		// listing needs neither config nor network
		Directive::Ls => RateReporter::print_currencies(),
		Directive::Dash => {
			let (dashboard, selection) = build_dashboard(&args, &fs)?;
			let mut app = App::new(dashboard, selection);
			app.run()?;
		},
		Directive::Cur => {
			let (mut dashboard, selection) = build_dashboard(&args, &fs)?;
			let reporter = RateReporter::new(dashboard.recompute(selection));
			reporter.print_current();
		},
		Directive::Hist => {
			let (mut dashboard, selection) = build_dashboard(&args, &fs)?;
			let reporter = RateReporter::new(dashboard.recompute(selection));
			reporter.print_history();
		},
	}

	Ok(())
}

/// Loads config and wires the NBP client behind a cached dashboard.
fn build_dashboard(
	args: &Cli,
	fs: &Filesystem,
) -> Result<(RateDashboard<NbpClient>, DashboardSelection), Error> {
	let config = fs.get_config(args.config.as_ref())?;
	let selection = args.selection(&config);

	let ttl = config
		.source()
		.cache_ttl_secs
		.map(Duration::from_secs)
		.unwrap_or(DEFAULT_CACHE_TTL);
	let client = NbpClient::new(config.source())?;

	info!(
		"starting with {} / table {} / {} days",
		selection.currency.code(),
		selection.table,
		selection.history_days()
	);

	Ok((RateDashboard::new(client, ttl), selection))
}
