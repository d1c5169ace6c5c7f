//! This module contains the main entrypoint to the bazaar cli.

use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
	name = "bazaar",
	about = "Run the bazaar store dashboard.",
	disable_help_subcommand = true
)]
struct Options {
	#[arg(long, env = "COOKIE_DOMAIN")]
	cookie_domain: Option<String>,
	/// Show the demo banner linking to the public storefront.
	#[arg(long, env = "DEMO_MODE")]
	demo_mode: bool,
	#[arg(long, env = "GRAPHQL_URL", default_value = "http://localhost:8000/graphql/")]
	graphql_url: String,
	#[arg(long, env = "HOST", default_value = "0.0.0.0")]
	host: std::net::IpAddr,
	/// A json file of translated messages, keyed by message id.
	#[arg(long, env = "LOCALE_FILE")]
	locale_file: Option<PathBuf>,
	#[arg(long, env = "PORT", default_value = "8080")]
	port: u16,
	#[arg(long, env = "STOREFRONT_URL", default_value = "http://localhost:3000/")]
	storefront_url: String,
}

fn main() {
	let options = Options::parse();
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
		)
		.init();
	let result = bazaar_app::run(bazaar_app::Options {
		cookie_domain: options.cookie_domain,
		demo_mode: options.demo_mode,
		graphql_url: options.graphql_url,
		host: options.host,
		locale_file: options.locale_file,
		port: options.port,
		storefront_url: options.storefront_url,
	});
	if let Err(error) = result {
		eprintln!("{}: {}", "error".red().bold(), error);
		std::process::exit(1);
	}
}

#[test]
fn test_options() {
	let options = Options::try_parse_from(["bazaar", "--port", "9000", "--demo-mode"]).unwrap();
	assert_eq!(options.port, 9000);
	assert!(options.demo_mode);
	assert!(options.cookie_domain.is_none());
	assert!(Options::try_parse_from(["bazaar", "--port", "many"]).is_err());
}
